use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// One of the twelve pollutant readings the prediction service expects.
///
/// The declaration order is the wire order of the request body and the
/// display order of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pollutant {
    Pm25,
    Pm10,
    No,
    No2,
    Nox,
    Nh3,
    Co,
    So2,
    O3,
    Benzene,
    Toluene,
    Xylene,
}

impl Pollutant {
    /// Number of pollutant fields in a form.
    pub const COUNT: usize = 12;

    /// All pollutants in wire order.
    pub const ALL: [Pollutant; Self::COUNT] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::No,
        Pollutant::No2,
        Pollutant::Nox,
        Pollutant::Nh3,
        Pollutant::Co,
        Pollutant::So2,
        Pollutant::O3,
        Pollutant::Benzene,
        Pollutant::Toluene,
        Pollutant::Xylene,
    ];

    /// The JSON key used by the prediction service.
    pub fn key(self) -> &'static str {
        match self {
            Pollutant::Pm25 => "PM2.5",
            Pollutant::Pm10 => "PM10",
            Pollutant::No => "NO",
            Pollutant::No2 => "NO2",
            Pollutant::Nox => "NOx",
            Pollutant::Nh3 => "NH3",
            Pollutant::Co => "CO",
            Pollutant::So2 => "SO2",
            Pollutant::O3 => "O3",
            Pollutant::Benzene => "Benzene",
            Pollutant::Toluene => "Toluene",
            Pollutant::Xylene => "Xylene",
        }
    }

    /// Concentration unit the reading is expected in.
    pub fn unit(self) -> &'static str {
        match self {
            Pollutant::Pm25 | Pollutant::Pm10 => "μg/m³",
            Pollutant::Benzene | Pollutant::Toluene | Pollutant::Xylene => "μg/m³",
            Pollutant::Co => "mg/m³",
            Pollutant::No
            | Pollutant::No2
            | Pollutant::Nox
            | Pollutant::Nh3
            | Pollutant::So2
            | Pollutant::O3 => "ppb",
        }
    }

    /// Human readable label, e.g. `PM2.5 (μg/m³)`.
    pub fn label(self) -> String {
        format!("{} ({})", self.key(), self.unit())
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string does not name one of the twelve pollutants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown pollutant '{0}', expected one of: PM2.5, PM10, NO, NO2, NOx, NH3, CO, SO2, O3, Benzene, Toluene, Xylene")]
pub struct UnknownPollutant(pub String);

impl FromStr for Pollutant {
    type Err = UnknownPollutant;

    /// Keys match exactly first, then case-insensitively (`pm2.5`, `nox`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Pollutant::ALL
            .iter()
            .find(|p| p.key() == s)
            .or_else(|| Pollutant::ALL.iter().find(|p| p.key().eq_ignore_ascii_case(s)))
            .copied()
            .ok_or_else(|| UnknownPollutant(s.to_string()))
    }
}
