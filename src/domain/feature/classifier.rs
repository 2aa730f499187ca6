//! One-shot dispatch from a feature's declared type to a typed view of its data.
//!
//! Delta computation and chart construction both consume a [`Comparison`],
//! so the categorical and numerical paths cannot drift apart. Missing values
//! are dropped here and never reach an aggregate.

use crate::domain::foundation::DataIntegrityError;

use super::{FeatureValue, OutcomeClass, PopulationSample, ValueType};

/// User value and population for a categorical feature.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoricalComparison {
    pub user: Option<String>,
    pub negative: Vec<String>,
    pub positive: Vec<String>,
}

/// User value and population for a numerical feature.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericalComparison {
    pub user: Option<f64>,
    pub negative: Vec<f64>,
    pub positive: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Comparison {
    Categorical(CategoricalComparison),
    Numerical(NumericalComparison),
}

impl Comparison {
    /// Builds the typed view selected by `value_type`.
    ///
    /// Fails when a numerical feature carries non-numeric text, either in the
    /// population or in the user's own value.
    pub fn prepare(
        value_type: ValueType,
        user_value: &FeatureValue,
        sample: &PopulationSample,
    ) -> Result<Self, DataIntegrityError> {
        match value_type {
            ValueType::Categorical => Ok(Comparison::Categorical(CategoricalComparison {
                user: user_value.as_category(),
                negative: categories(sample.values(OutcomeClass::Repaid)),
                positive: categories(sample.values(OutcomeClass::Defaulted)),
            })),
            ValueType::Numerical => Ok(Comparison::Numerical(NumericalComparison {
                user: user_value.as_number()?,
                negative: numbers(sample.values(OutcomeClass::Repaid))?,
                positive: numbers(sample.values(OutcomeClass::Defaulted))?,
            })),
        }
    }
}

impl CategoricalComparison {
    pub fn pooled(&self) -> impl Iterator<Item = &String> {
        self.negative.iter().chain(self.positive.iter())
    }

    pub fn class(&self, class: OutcomeClass) -> &[String] {
        match class {
            OutcomeClass::Repaid => &self.negative,
            OutcomeClass::Defaulted => &self.positive,
        }
    }
}

impl NumericalComparison {
    pub fn pooled(&self) -> impl Iterator<Item = f64> + '_ {
        self.negative.iter().chain(self.positive.iter()).copied()
    }

    pub fn class(&self, class: OutcomeClass) -> &[f64] {
        match class {
            OutcomeClass::Repaid => &self.negative,
            OutcomeClass::Defaulted => &self.positive,
        }
    }
}

fn categories(values: &[FeatureValue]) -> Vec<String> {
    values.iter().filter_map(FeatureValue::as_category).collect()
}

fn numbers(values: &[FeatureValue]) -> Result<Vec<f64>, DataIntegrityError> {
    values
        .iter()
        .filter_map(|v| v.as_number().transpose())
        .collect()
}
