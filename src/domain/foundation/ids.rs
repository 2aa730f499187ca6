//! Strongly-typed identifier value objects.
//!
//! Both identifiers are opaque strings owned by the scoring gateway. The
//! gateway sometimes serialises user ids as JSON numbers, so deserialisation
//! accepts either form.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a customer known to the scoring gateway.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty or a dot segment.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        check_id("user_id", id.into()).map(Self)
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = StringOrNumber::deserialize(deserializer)?;
        UserId::new(raw.into_string()).map_err(serde::de::Error::custom)
    }
}

/// Identifier of a feature (column) in the gateway's feature catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct FeatureId(String);

impl FeatureId {
    /// Creates a new FeatureId, returning error if empty or a dot segment.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        check_id("feature_id", id.into()).map(Self)
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FeatureId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl<'de> Deserialize<'de> for FeatureId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = StringOrNumber::deserialize(deserializer)?;
        FeatureId::new(raw.into_string()).map_err(serde::de::Error::custom)
    }
}

/// Ids end up as single URL path segments, where `.` and `..` would be
/// resolved away.
fn check_id(field: &str, raw: String) -> Result<String, ValidationError> {
    let id = raw.trim();
    match id {
        "" => Err(ValidationError::empty_field(field)),
        "." | ".." => Err(ValidationError::invalid_format(field, "dot segments are not ids")),
        _ => Ok(id.to_string()),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Integer(i64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::String(s) => s,
            StringOrNumber::Integer(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_accepts_non_empty_string() {
        let id = UserId::new("100002").unwrap();
        assert_eq!(id.as_str(), "100002");
    }

    #[test]
    fn user_id_rejects_empty_string() {
        let result = UserId::new("   ");
        match result {
            Err(ValidationError::EmptyField { field }) => assert_eq!(field, "user_id"),
            _ => panic!("Expected EmptyField error"),
        }
    }

    #[test]
    fn ids_reject_dot_segments() {
        assert!(matches!(UserId::new(".."), Err(ValidationError::InvalidFormat { .. })));
        assert!(FeatureId::new(" . ").is_err());
        assert_eq!(UserId::new("../7").unwrap().as_str(), "../7");
    }

    #[test]
    fn user_id_deserializes_from_number_or_string() {
        let ids: Vec<UserId> = serde_json::from_str(r#"[100002, "100003"]"#).unwrap();
        assert_eq!(ids[0].as_str(), "100002");
        assert_eq!(ids[1].as_str(), "100003");
    }

    #[test]
    fn feature_id_parses_and_displays() {
        let id: FeatureId = "12".parse().unwrap();
        assert_eq!(format!("{}", id), "12");
        assert!("".parse::<FeatureId>().is_err());
    }

    #[test]
    fn user_id_serializes_as_plain_string() {
        let id = UserId::new("100002").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"100002\"");
    }
}
