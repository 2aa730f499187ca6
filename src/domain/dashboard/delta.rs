//! Delta engine: how a user's value sits relative to the population.
//!
//! Categorical features report the most common category and its share.
//! Numerical features report the signed deviation from the population mean.
//! A missing user value, an empty population or a zero mean yield no signal.

use serde::Serialize;
use thiserror::Error;

use crate::domain::feature::{
    CategoricalComparison, Comparison, FeatureValue, NumericalComparison, PopulationSample,
    ValueType,
};
use crate::domain::foundation::{whole_percent, DataIntegrityError};

/// How the delta should be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Above the norm.
    Positive,
    /// Below the norm.
    Negative,
    /// Informational only.
    Neutral,
}

/// Population-relative summary of a single user's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeltaResult {
    pub display_text: Option<String>,
    pub emphasis: Emphasis,
}

impl DeltaResult {
    /// No signal to show.
    pub fn suppressed() -> Self {
        Self {
            display_text: None,
            emphasis: Emphasis::Neutral,
        }
    }

    pub fn is_suppressed(&self) -> bool {
        self.display_text.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DeltaError {
    #[error("Data integrity error: {0}")]
    DataIntegrity(#[from] DataIntegrityError),
}

/// Computes the delta for `user_value` against the pooled `sample`.
///
/// A missing user value short-circuits before the sample is inspected.
pub fn compute_delta(
    user_value: &FeatureValue,
    value_type: ValueType,
    sample: &PopulationSample,
) -> Result<DeltaResult, DeltaError> {
    if user_value.is_missing() {
        return Ok(DeltaResult::suppressed());
    }
    let comparison = Comparison::prepare(value_type, user_value, sample)?;
    Ok(delta_for(&comparison))
}

/// Delta for an already classified comparison.
pub fn delta_for(comparison: &Comparison) -> DeltaResult {
    match comparison {
        Comparison::Categorical(c) => categorical_delta(c),
        Comparison::Numerical(n) => numerical_delta(n),
    }
}

fn categorical_delta(comparison: &CategoricalComparison) -> DeltaResult {
    if comparison.user.is_none() {
        return DeltaResult::suppressed();
    }

    let frequencies = frequencies(comparison.pooled());
    let total: usize = frequencies.iter().map(|(_, count)| count).sum();
    let Some((mode, count)) = frequencies.first() else {
        return DeltaResult::suppressed();
    };

    let share = percent(*count as f64 / total as f64);
    DeltaResult {
        display_text: Some(format!("Most common value: {} ({}%)", mode, share)),
        emphasis: Emphasis::Neutral,
    }
}

fn numerical_delta(comparison: &NumericalComparison) -> DeltaResult {
    let Some(user) = comparison.user else {
        return DeltaResult::suppressed();
    };
    let Some(mean) = mean(comparison.pooled()) else {
        return DeltaResult::suppressed();
    };
    if mean == 0.0 {
        return DeltaResult::suppressed();
    }

    let deviation = percent((user - mean) / mean);
    let (display_text, emphasis) = match deviation {
        d if d > 0 => (format!("+{}%", d), Emphasis::Positive),
        d if d < 0 => (format!("{}%", d), Emphasis::Negative),
        _ => ("0%".to_string(), Emphasis::Neutral),
    };
    DeltaResult {
        display_text: Some(display_text),
        emphasis,
    }
}

/// Counts per category, most frequent first. Ties keep first-seen order.
pub fn frequencies<'a>(values: impl Iterator<Item = &'a String>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|(category, _)| *category == value.as_str()) {
            Some((_, count)) => *count += 1,
            None => counts.push((value.as_str(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Arithmetic mean, `None` for an empty population.
pub fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    (n > 0).then(|| sum / n as f64)
}

/// Ratio as a whole, signed percent.
fn percent(ratio: f64) -> i64 {
    whole_percent(ratio) as i64
}
