//! Feature values as they arrive from the scoring gateway.
//!
//! The gateway encodes a missing observation as the literal string `"null"`
//! (and occasionally as a JSON `null`). Both are folded into
//! [`FeatureValue::Missing`] the moment a payload is decoded, so no business
//! logic ever compares against the sentinel string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use crate::domain::foundation::DataIntegrityError;

/// Sentinel string the gateway uses for a missing observation.
pub const MISSING_SENTINEL: &str = "null";

/// Text shown in place of a missing observation.
pub const NOT_AVAILABLE: &str = "N/A";

/// A single observation of a feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FeatureValue {
    #[default]
    Missing,
    Number(f64),
    Text(String),
}

impl FeatureValue {
    /// Translates a raw gateway JSON value.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => FeatureValue::Missing,
            Value::Number(n) => n
                .as_f64()
                .map(FeatureValue::Number)
                .unwrap_or(FeatureValue::Missing),
            Value::String(s) if s == MISSING_SENTINEL => FeatureValue::Missing,
            Value::String(s) => FeatureValue::Text(s),
            Value::Bool(b) => FeatureValue::Text(if b { "True" } else { "False" }.to_string()),
            other => FeatureValue::Text(other.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FeatureValue::Missing)
    }

    /// Reads the value as a number.
    ///
    /// Numeric text (`"12.5"`) is accepted since the gateway stringifies some
    /// columns. Any other text is a data-integrity failure, never a coercion.
    pub fn as_number(&self) -> Result<Option<f64>, DataIntegrityError> {
        match self {
            FeatureValue::Missing => Ok(None),
            FeatureValue::Number(n) => Ok(Some(*n)),
            FeatureValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(Some(n)),
                _ => Err(DataIntegrityError::not_numeric(s.clone())),
            },
        }
    }

    /// Label used when the value is treated as a category.
    pub fn as_category(&self) -> Option<String> {
        match self {
            FeatureValue::Missing => None,
            FeatureValue::Number(n) => Some(n.to_string()),
            FeatureValue::Text(s) => Some(s.clone()),
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Number(value)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::from_json(Value::String(value.to_string()))
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Missing => write!(f, "{}", NOT_AVAILABLE),
            FeatureValue::Number(n) => write!(f, "{}", n),
            FeatureValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for FeatureValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FeatureValue::Missing => serializer.serialize_none(),
            FeatureValue::Number(n) => serializer.serialize_f64(*n),
            FeatureValue::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for FeatureValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(FeatureValue::from_json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_sentinel_and_json_null_become_missing() {
        assert_eq!(FeatureValue::from_json(json!("null")), FeatureValue::Missing);
        assert_eq!(FeatureValue::from_json(Value::Null), FeatureValue::Missing);
    }

    #[test]
    fn numbers_and_text_are_kept() {
        assert_eq!(FeatureValue::from_json(json!(42)), FeatureValue::Number(42.0));
        assert_eq!(
            FeatureValue::from_json(json!("Married")),
            FeatureValue::Text("Married".to_string())
        );
        assert_eq!(
            FeatureValue::from_json(json!(true)),
            FeatureValue::Text("True".to_string())
        );
    }

    #[test]
    fn as_number_parses_numeric_text() {
        assert_eq!(FeatureValue::from(" 12.5 ").as_number(), Ok(Some(12.5)));
        assert_eq!(FeatureValue::Missing.as_number(), Ok(None));
    }

    #[test]
    fn as_number_rejects_free_text() {
        let err = FeatureValue::from("Working").as_number().unwrap_err();
        assert_eq!(err.value, "Working");
        assert!(FeatureValue::from("NaN").as_number().is_err());
    }

    #[test]
    fn display_renders_missing_as_not_available() {
        assert_eq!(FeatureValue::Missing.to_string(), "N/A");
        assert_eq!(FeatureValue::Number(3.0).to_string(), "3");
        assert_eq!(FeatureValue::Number(0.25).to_string(), "0.25");
    }

    #[test]
    fn serializes_missing_as_null() {
        let values = vec![FeatureValue::Missing, FeatureValue::Number(1.5), FeatureValue::from("M")];
        assert_eq!(serde_json::to_value(&values).unwrap(), json!([null, 1.5, "M"]));
    }

    #[test]
    fn deserializes_gateway_arrays() {
        let values: Vec<FeatureValue> = serde_json::from_str(r#"["A", "null", 3]"#).unwrap();
        assert_eq!(
            values,
            vec![FeatureValue::from("A"), FeatureValue::Missing, FeatureValue::Number(3.0)]
        );
    }
}
