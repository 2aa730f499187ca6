//! The set of features an analyst may pick from.

use std::collections::HashMap;

use crate::domain::foundation::FeatureId;

use super::FeatureDescriptor;

/// Columns that are part of the dataset but never offered for comparison.
pub const HIDDEN_FEATURES: [&str; 2] = ["SK_ID_CURR", "TARGET"];

/// Selectable features, ordered by display label.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    features: Vec<FeatureDescriptor>,
    by_id: HashMap<FeatureId, usize>,
}

impl FeatureCatalog {
    pub fn from_descriptors(descriptors: impl IntoIterator<Item = FeatureDescriptor>) -> Self {
        let mut features: Vec<FeatureDescriptor> = descriptors
            .into_iter()
            .filter(|d| !HIDDEN_FEATURES.contains(&d.name.as_str()))
            .collect();
        features.sort_by(|a, b| a.label().cmp(&b.label()).then_with(|| a.id.cmp(&b.id)));

        let by_id = features
            .iter()
            .enumerate()
            .map(|(i, d)| (d.id.clone(), i))
            .collect();

        Self {
            features,
            by_id,
        }
    }

    pub fn get(&self, id: &FeatureId) -> Option<&FeatureDescriptor> {
        self.by_id.get(id).map(|&i| &self.features[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeatureDescriptor> {
        self.features.iter()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
