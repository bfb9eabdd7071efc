//! Form field storage and the numeric request payload derived from it.

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::pollutant::Pollutant;

/// Message shown when a submission is attempted with blank fields.
pub const INCOMPLETE_FIELDS_MESSAGE: &str = "Please fill in all fields before predicting.";

/// Raised locally when one or more fields are still empty at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Please fill in all fields before predicting.")]
pub struct ValidationError {
    /// Pollutants whose field was empty, in wire order.
    pub missing: Vec<Pollutant>,
}

/// The twelve textual field values of the form, keyed by pollutant.
///
/// The key set is fixed: there is always exactly one slot per pollutant and
/// an empty string means "unset". Values are kept as typed so that the form
/// can echo them back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    values: [String; Pollutant::COUNT],
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pollutant: Pollutant) -> &str {
        &self.values[pollutant.index()]
    }

    /// Replaces the value of one field, leaving all others untouched.
    pub fn set(&mut self, pollutant: Pollutant, raw: impl Into<String>) {
        self.values[pollutant.index()] = raw.into();
    }

    /// Sets every field back to the empty string.
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(String::clear);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, &str)> + '_ {
        Pollutant::ALL
            .iter()
            .map(move |p| (*p, self.values[p.index()].as_str()))
    }

    /// Pollutants whose field is still the empty string.
    pub fn missing(&self) -> Vec<Pollutant> {
        self.iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(p, _)| p)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|v| !v.is_empty())
    }

    /// Parses every field into a [`RequestPayload`].
    ///
    /// Only emptiness is validated. Text that does not start with a number
    /// becomes NaN and is forwarded as-is.
    pub fn to_payload(&self) -> Result<RequestPayload, ValidationError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ValidationError { missing });
        }

        let mut values = [0.0; Pollutant::COUNT];
        for (slot, raw) in values.iter_mut().zip(self.values.iter()) {
            *slot = parse_float(raw);
        }
        Ok(RequestPayload { values })
    }
}

/// Numeric body of a prediction request, one value per pollutant.
///
/// Serializes as a JSON object with exactly the twelve pollutant keys in wire
/// order. Non-finite values are written as `null`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestPayload {
    values: [f64; Pollutant::COUNT],
}

impl RequestPayload {
    pub fn get(&self, pollutant: Pollutant) -> f64 {
        self.values[pollutant.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pollutant, f64)> + '_ {
        Pollutant::ALL
            .iter()
            .map(move |p| (*p, self.values[p.index()]))
    }
}

impl Serialize for RequestPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Pollutant::COUNT))?;
        for (pollutant, value) in self.iter() {
            if value.is_finite() {
                map.serialize_entry(pollutant.key(), &value)?;
            } else {
                map.serialize_entry(pollutant.key(), &Option::<f64>::None)?;
            }
        }
        map.end()
    }
}

/// Parses the longest decimal prefix of `raw`, the way browsers' `parseFloat` does.
///
/// Leading whitespace is skipped, trailing garbage is ignored, `Infinity` is
/// accepted, and anything without a numeric prefix yields NaN.
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if bytes[0] == b'-' {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_fields() -> FieldSet {
        let mut fields = FieldSet::new();
        for (idx, pollutant) in Pollutant::ALL.iter().enumerate() {
            fields.set(*pollutant, format!("{}.5", idx + 1));
        }
        fields
    }

    #[test]
    fn test_new_field_set_is_empty() {
        let fields = FieldSet::new();
        assert_eq!(fields.iter().count(), 12);
        assert!(fields.iter().all(|(_, v)| v.is_empty()));
        assert_eq!(fields.missing(), Pollutant::ALL.to_vec());
        assert!(!fields.is_complete());
    }

    #[test]
    fn test_set_leaves_other_fields_untouched() {
        let mut fields = complete_fields();
        fields.set(Pollutant::Co, "not a number");

        assert_eq!(fields.get(Pollutant::Co), "not a number");
        assert_eq!(fields.get(Pollutant::So2), "8.5");
        assert_eq!(fields.get(Pollutant::Pm25), "1.5");
        let order: Vec<Pollutant> = fields.iter().map(|(p, _)| p).collect();
        assert_eq!(order, Pollutant::ALL.to_vec());
    }

    #[test]
    fn test_payload_requires_every_field() {
        for pollutant in Pollutant::ALL {
            let mut fields = complete_fields();
            fields.set(pollutant, "");

            let err = fields.to_payload().unwrap_err();
            assert_eq!(err.missing, vec![pollutant]);
            assert_eq!(err.to_string(), INCOMPLETE_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn test_payload_serializes_exact_keys_in_order() {
        let payload = complete_fields().to_payload().unwrap();
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(
            json,
            r#"{"PM2.5":1.5,"PM10":2.5,"NO":3.5,"NO2":4.5,"NOx":5.5,"NH3":6.5,"CO":7.5,"SO2":8.5,"O3":9.5,"Benzene":10.5,"Toluene":11.5,"Xylene":12.5}"#
        );
    }

    #[test]
    fn test_payload_forwards_unparseable_values_as_null() {
        let mut fields = complete_fields();
        fields.set(Pollutant::O3, "abc");
        fields.set(Pollutant::Nh3, "-4");

        let payload = fields.to_payload().unwrap();
        assert!(payload.get(Pollutant::O3).is_nan());
        assert_eq!(payload.get(Pollutant::Nh3), -4.0);

        let value = serde_json::to_value(payload).unwrap();
        assert!(value["O3"].is_null());
        assert_eq!(value["NH3"], serde_json::json!(-4.0));
    }

    #[test]
    fn test_parse_float_prefix_semantics() {
        assert_eq!(parse_float("42"), 42.0);
        assert_eq!(parse_float("  3.25abc"), 3.25);
        assert_eq!(parse_float("-0.5"), -0.5);
        assert_eq!(parse_float("+7"), 7.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("2E-1x"), 0.2);
        assert_eq!(parse_float("12.5.7"), 12.5);
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinityfoo"), f64::NEG_INFINITY);
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float("").is_nan());
    }
}
