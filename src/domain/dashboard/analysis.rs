//! Composition of the "User analysis" panel for one user and one feature.

use serde::Serialize;
use thiserror::Error;

use crate::domain::feature::{Comparison, FeatureDescriptor, FeatureValue, PopulationSample, ValueType};
use crate::domain::foundation::{DataIntegrityError, FeatureId};

use super::{chart_for, delta_for, ChartSpec, DeltaResult};

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Feature '{feature}': {source}")]
pub struct AnalysisError {
    pub feature: String,
    #[source]
    pub source: DataIntegrityError,
}

/// Everything the analysis panel shows for one feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureAnalysis {
    pub feature_id: FeatureId,
    pub name: String,
    pub label: String,
    pub description: String,
    pub value_type: ValueType,
    /// Display text of the user's value, `N/A` when missing.
    pub user_value: String,
    pub delta: DeltaResult,
    pub chart: ChartSpec,
}

impl FeatureAnalysis {
    /// Classifies once, then derives both the delta and the chart from the
    /// same typed comparison.
    pub fn build(
        descriptor: &FeatureDescriptor,
        user_value: &FeatureValue,
        sample: &PopulationSample,
    ) -> Result<Self, AnalysisError> {
        let comparison = Comparison::prepare(descriptor.value_type, user_value, sample).map_err(
            |source| AnalysisError {
                feature: descriptor.name.clone(),
                source,
            },
        )?;
        let label = descriptor.label();

        Ok(Self {
            feature_id: descriptor.id.clone(),
            name: descriptor.name.clone(),
            description: descriptor.description.clone(),
            value_type: descriptor.value_type,
            user_value: user_value.to_string(),
            delta: delta_for(&comparison),
            chart: chart_for(&comparison, &label),
            label,
        })
    }
}
