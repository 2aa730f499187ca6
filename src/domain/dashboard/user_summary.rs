//! Sidebar profile table for the selected user.

use serde::Serialize;
use thiserror::Error;

use crate::domain::feature::{FeatureValue, UserRecord, NOT_AVAILABLE};
use crate::domain::foundation::DataIntegrityError;

use super::format_magnitude;

const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, Copy)]
enum Transform {
    AsIs,
    AgeFromDays,
    Magnitude,
}

/// Source field, label and transform for every row, in display order.
const ROWS: [(&str, &str, Transform); 7] = [
    ("CODE_GENDER", "Gender", Transform::AsIs),
    ("DAYS_BIRTH", "Age", Transform::AgeFromDays),
    ("NAME_FAMILY_STATUS", "Family status", Transform::AsIs),
    ("CNT_CHILDREN", "Number of children", Transform::AsIs),
    ("AMT_INCOME_TOTAL", "Income total", Transform::Magnitude),
    ("AMT_CREDIT", "Credit amount", Transform::Magnitude),
    ("AMT_ANNUITY", "Credit annuities", Transform::Magnitude),
];

#[derive(Debug, Clone, PartialEq, Error)]
#[error("Field '{field}': {source}")]
pub struct SummaryError {
    pub field: &'static str,
    #[source]
    pub source: DataIntegrityError,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Ordered label/value rows describing a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummary {
    pub rows: Vec<SummaryRow>,
}

impl UserSummary {
    pub fn from_record(record: &UserRecord) -> Result<Self, SummaryError> {
        let rows = ROWS
            .iter()
            .map(|&(field, label, transform)| {
                render(record.get(field), transform)
                    .map(|value| SummaryRow { label, value })
                    .map_err(|source| SummaryError { field, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rows })
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }
}

fn render(value: &FeatureValue, transform: Transform) -> Result<String, DataIntegrityError> {
    if value.is_missing() {
        return Ok(NOT_AVAILABLE.to_string());
    }
    match transform {
        Transform::AsIs => Ok(value.to_string()),
        Transform::AgeFromDays => Ok(value
            .as_number()?
            .map(|days| format!("{}", (days.abs() / DAYS_PER_YEAR).round()))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())),
        Transform::Magnitude => Ok(value
            .as_number()?
            .map(format_magnitude)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string())),
    }
}
