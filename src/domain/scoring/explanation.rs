//! Per-feature contributions behind a single prediction.

use serde::Serialize;

use crate::domain::feature::{FeatureValue, UserRecord};
use crate::domain::foundation::ValidationError;

/// Additive explanation of one prediction: base value plus one contribution
/// per feature of the user's record, paired positionally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionExplanation {
    pub explained_values: Vec<f64>,
    pub expected_value: f64,
    pub user_data: UserRecord,
}

/// One feature's contribution, ready to plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution<'a> {
    pub feature: &'a str,
    pub value: &'a FeatureValue,
    pub contribution: f64,
}

impl PredictionExplanation {
    /// Pairs contributions with the record fields they explain. The two must
    /// line up one to one.
    pub fn try_new(
        explained_values: Vec<f64>,
        expected_value: f64,
        user_data: UserRecord,
    ) -> Result<Self, ValidationError> {
        if explained_values.len() != user_data.len() {
            return Err(ValidationError::invalid_format(
                "explained_values",
                format!(
                    "{} contributions for {} record fields",
                    explained_values.len(),
                    user_data.len()
                ),
            ));
        }
        Ok(Self {
            explained_values,
            expected_value,
            user_data,
        })
    }

    /// Model output implied by the explanation.
    pub fn output_value(&self) -> f64 {
        self.expected_value + self.explained_values.iter().sum::<f64>()
    }

    /// Contributions sorted by descending absolute impact.
    pub fn contributions(&self) -> Vec<Contribution<'_>> {
        let mut contributions: Vec<Contribution<'_>> = self
            .user_data
            .iter()
            .zip(self.explained_values.iter())
            .map(|((feature, value), contribution)| Contribution {
                feature,
                value,
                contribution: *contribution,
            })
            .collect();
        contributions.sort_by(|a, b| b.contribution.abs().total_cmp(&a.contribution.abs()));
        contributions
    }

    /// The `n` strongest contributions.
    pub fn top(&self, n: usize) -> Vec<Contribution<'_>> {
        let mut contributions = self.contributions();
        contributions.truncate(n);
        contributions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn explanation() -> PredictionExplanation {
        PredictionExplanation {
            explained_values: vec![0.1, -0.4, 0.05],
            expected_value: 0.2,
            user_data: UserRecord::new()
                .with("EXT_SOURCE_1", 0.08)
                .with("EXT_SOURCE_2", FeatureValue::Missing)
                .with("CODE_GENDER", "M"),
        }
    }

    #[test]
    fn output_value_adds_contributions() {
        assert!((explanation().output_value() - (-0.05)).abs() < 1e-9);
    }

    #[test]
    fn contributions_sorted_by_magnitude() {
        let e = explanation();
        let features: Vec<&str> = e.contributions().iter().map(|c| c.feature).collect();
        assert_eq!(features, vec!["EXT_SOURCE_2", "EXT_SOURCE_1", "CODE_GENDER"]);
        assert!(e.contributions()[0].value.is_missing());
    }

    #[test]
    fn try_new_rejects_misaligned_contributions() {
        let err = PredictionExplanation::try_new(
            vec![0.1, -0.4, 0.05],
            0.2,
            UserRecord::new().with("EXT_SOURCE_1", 0.08),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
        assert!(err.to_string().contains("3 contributions for 1 record fields"));

        let e = explanation();
        let rebuilt =
            PredictionExplanation::try_new(e.explained_values.clone(), 0.2, e.user_data.clone()).unwrap();
        assert_eq!(rebuilt, e);
    }

    #[test]
    fn top_truncates() {
        assert_eq!(explanation().top(1).len(), 1);
        assert_eq!(explanation().top(10).len(), 3);
    }
}
