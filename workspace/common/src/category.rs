//! AQI bands and their display treatment.

use std::fmt;

/// One of the four AQI bands the form distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AqiCategory {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
}

/// Tailwind classes used to render a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Gradient stops, used with `bg-gradient-to-*`.
    pub gradient: &'static str,
    /// Foreground text color.
    pub text: &'static str,
}

/// Background and text style when no result is shown.
pub const NEUTRAL_STYLE: CategoryStyle = CategoryStyle {
    gradient: "from-blue-50 via-indigo-50 to-purple-50",
    text: "text-gray-800",
};

impl AqiCategory {
    pub const ALL: [AqiCategory; 4] = [
        AqiCategory::Good,
        AqiCategory::Moderate,
        AqiCategory::UnhealthyForSensitiveGroups,
        AqiCategory::Unhealthy,
    ];

    /// Bands an index by its upper bounds: 50, 100, 200.
    ///
    /// Returns `None` for NaN. Infinities fall into the outer bands.
    pub fn from_index(aqi: f64) -> Option<Self> {
        if aqi.is_nan() {
            None
        } else if aqi <= 50.0 {
            Some(AqiCategory::Good)
        } else if aqi <= 100.0 {
            Some(AqiCategory::Moderate)
        } else if aqi <= 200.0 {
            Some(AqiCategory::UnhealthyForSensitiveGroups)
        } else {
            Some(AqiCategory::Unhealthy)
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AqiCategory::Unhealthy => "Unhealthy",
        }
    }

    /// Short legend entry including the index range.
    pub fn legend(self) -> &'static str {
        match self {
            AqiCategory::Good => "Good (0-50)",
            AqiCategory::Moderate => "Moderate (51-100)",
            AqiCategory::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive (101-200)",
            AqiCategory::Unhealthy => "Unhealthy (201+)",
        }
    }

    pub fn style(self) -> CategoryStyle {
        match self {
            AqiCategory::Good => CategoryStyle {
                gradient: "from-green-400 to-green-600",
                text: "text-white",
            },
            AqiCategory::Moderate => CategoryStyle {
                gradient: "from-yellow-400 to-yellow-600",
                text: "text-gray-800",
            },
            AqiCategory::UnhealthyForSensitiveGroups => CategoryStyle {
                gradient: "from-orange-400 to-orange-600",
                text: "text-white",
            },
            AqiCategory::Unhealthy => CategoryStyle {
                gradient: "from-red-500 to-red-700",
                text: "text-white",
            },
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of classifying an optional prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// No prediction has been made yet.
    NoResult,
    /// The service returned a value that is not a number.
    Unclassifiable,
    Category(AqiCategory),
}

impl Classification {
    pub fn category(self) -> Option<AqiCategory> {
        match self {
            Classification::Category(category) => Some(category),
            _ => None,
        }
    }

    /// Style for the page chrome: the band's style, or neutral otherwise.
    pub fn style(self) -> CategoryStyle {
        self.category().map_or(NEUTRAL_STYLE, AqiCategory::style)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::NoResult => f.write_str("No result"),
            Classification::Unclassifiable => f.write_str("Unclassifiable"),
            Classification::Category(category) => category.fmt(f),
        }
    }
}

/// Classifies a prediction. Total over every input.
pub fn classify(aqi: Option<f64>) -> Classification {
    match aqi {
        None => Classification::NoResult,
        Some(value) => AqiCategory::from_index(value)
            .map_or(Classification::Unclassifiable, Classification::Category),
    }
}
