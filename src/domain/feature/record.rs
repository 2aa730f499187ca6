//! A single customer's record.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::FeatureValue;

/// Mapping from attribute name to value, in the order the gateway sent it.
///
/// Order matters: explanation payloads pair contributions with fields
/// positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserRecord {
    fields: Vec<(String, FeatureValue)>,
}

impl UserRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a field, keeping the original position on replace.
    pub fn insert(&mut self, name: impl Into<String>, value: FeatureValue) {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<FeatureValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    /// Looks a field up by name. Absent fields read as missing.
    pub fn get(&self, name: &str) -> &FeatureValue {
        static MISSING: FeatureValue = FeatureValue::Missing;
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
            .unwrap_or(&MISSING)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn from_json_map(map: Map<String, Value>) -> Self {
        Self {
            fields: map
                .into_iter()
                .map(|(name, value)| (name, FeatureValue::from_json(value)))
                .collect(),
        }
    }
}

impl Serialize for UserRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for UserRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Map::<String, Value>::deserialize(deserializer).map(UserRecord::from_json_map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_and_translates_sentinel() {
        let record: UserRecord = serde_json::from_value(json!({
            "CODE_GENDER": "F",
            "OWN_CAR_AGE": "null",
            "AMT_CREDIT": 406597.5
        }))
        .unwrap();

        assert_eq!(record.get("CODE_GENDER"), &FeatureValue::from("F"));
        assert!(record.get("OWN_CAR_AGE").is_missing());
        assert_eq!(record.get("AMT_CREDIT"), &FeatureValue::Number(406597.5));
    }

    #[test]
    fn preserves_gateway_field_order() {
        let record: UserRecord =
            serde_json::from_str(r#"{"Z": 1, "A": 2, "M": 3}"#).unwrap();
        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }

    #[test]
    fn absent_field_reads_as_missing() {
        let record = UserRecord::new().with("A", 1.0);
        assert!(record.get("B").is_missing());
        assert!(record.iter().all(|(n, _)| n != "B"));
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut record = UserRecord::new().with("A", 1.0).with("B", 2.0);
        record.insert("A", FeatureValue::Missing);
        assert_eq!(record.len(), 2);
        assert_eq!(record.iter().next().map(|(n, _)| n), Some("A"));
        assert!(record.get("A").is_missing());
    }
}
