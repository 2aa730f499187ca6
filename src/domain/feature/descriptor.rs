//! Feature metadata published by the gateway's feature catalog.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::FeatureId;

/// Dtype name the gateway uses for categorical columns.
pub const CATEGORICAL_DTYPE: &str = "object";

/// Semantic type of a feature.
///
/// Decides which delta strategy and which chart shape apply. The two never
/// disagree because both are dispatched from the same tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Categorical,
    Numerical,
}

impl ValueType {
    /// Maps a gateway dtype name (`"object"`, `"float64"`, `"int64"`, ...).
    pub fn from_dtype(dtype: &str) -> Self {
        if dtype.trim() == CATEGORICAL_DTYPE {
            ValueType::Categorical
        } else {
            ValueType::Numerical
        }
    }
}

/// Immutable description of one feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureDescriptor {
    pub id: FeatureId,
    /// Raw column name, also the key into user records.
    pub name: String,
    pub description: String,
    /// Dtype name as published by the gateway.
    pub dtype: String,
    pub value_type: ValueType,
}

impl FeatureDescriptor {
    pub fn new(
        id: FeatureId,
        name: impl Into<String>,
        description: impl Into<String>,
        dtype: impl Into<String>,
    ) -> Self {
        let dtype = dtype.into();
        Self {
            id,
            name: name.into(),
            description: description.into(),
            value_type: ValueType::from_dtype(&dtype),
            dtype,
        }
    }

    /// Human readable label, e.g. `AMT_CREDIT` becomes `Amt credit`.
    pub fn label(&self) -> String {
        display_label(&self.name)
    }
}

/// Classifies a feature. Pure lookup on its declared type.
pub fn classify(descriptor: &FeatureDescriptor) -> ValueType {
    descriptor.value_type
}

/// Capitalises the first letter, lowercases the rest and turns underscores
/// into spaces.
pub fn display_label(name: &str) -> String {
    let lowered = name.to_lowercase().replace('_', " ");
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
