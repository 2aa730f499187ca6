//! Default-risk prediction returned by the scoring model.

use serde::{Deserialize, Serialize};

use crate::domain::feature::UserRecord;
use crate::domain::foundation::{DataIntegrityError, Probability, ValidationError};

/// Tolerance when checking that both class probabilities sum to one.
const COMPLEMENT_TOLERANCE: f64 = 1e-6;

/// A record field that cannot stand in for a loan term.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Loan term '{field}': {source}")]
pub struct LoanTermsError {
    pub field: &'static str,
    #[source]
    pub source: DataIntegrityError,
}

/// Loan parameters sent with every scoring request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub amount: Option<f64>,
    pub annuity: Option<f64>,
}

impl LoanTerms {
    pub fn new(amount: Option<f64>, annuity: Option<f64>) -> Self {
        Self { amount, annuity }
    }

    /// Fills unspecified terms from the user's current credit and annuity.
    ///
    /// A record value that is missing leaves the term unset. Free text in
    /// either field is an error.
    pub fn or_from_record(self, record: &UserRecord) -> Result<Self, LoanTermsError> {
        let fill = |given: Option<f64>, field: &'static str| match given {
            Some(value) => Ok(Some(value)),
            None => record
                .get(field)
                .as_number()
                .map_err(|source| LoanTermsError { field, source }),
        };
        Ok(Self {
            amount: fill(self.amount, "AMT_CREDIT")?,
            annuity: fill(self.annuity, "AMT_ANNUITY")?,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.amount.is_some() && self.annuity.is_some()
    }
}

/// Solvent/insolvent probabilities, always a complementary pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskPrediction {
    solvent: Probability,
    insolvent: Probability,
}

impl RiskPrediction {
    /// Validates a raw `(negative_pred, positive_pred)` pair.
    pub fn try_new(solvent: f64, insolvent: f64) -> Result<Self, ValidationError> {
        let solvent = Probability::try_new(solvent)?;
        let insolvent = Probability::try_new(insolvent)?;
        let total = solvent.value() + insolvent.value();
        if (total - 1.0).abs() > COMPLEMENT_TOLERANCE {
            return Err(ValidationError::invalid_format(
                "prediction",
                format!("probabilities sum to {}, expected 1", total),
            ));
        }
        Ok(Self { solvent, insolvent })
    }

    pub fn solvent(&self) -> Probability {
        self.solvent
    }

    pub fn insolvent(&self) -> Probability {
        self.insolvent
    }

    pub fn solvent_text(&self) -> String {
        format!("Solvent probability: {}", self.solvent)
    }

    pub fn insolvent_text(&self) -> String {
        format!("Insolvent probability: {}", self.insolvent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::feature::FeatureValue;

    #[test]
    fn accepts_complementary_pair() {
        let prediction = RiskPrediction::try_new(0.92, 0.08).unwrap();
        assert_eq!(prediction.solvent().as_percent(), 92);
        assert_eq!(prediction.insolvent_text(), "Insolvent probability: 8%");
        assert_eq!(prediction.solvent_text(), "Solvent probability: 92%");
    }

    #[test]
    fn rejects_out_of_range_probability() {
        assert!(RiskPrediction::try_new(1.2, -0.2).is_err());
    }

    #[test]
    fn rejects_non_complementary_pair() {
        let err = RiskPrediction::try_new(0.5, 0.3).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }

    #[test]
    fn loan_terms_default_from_record() {
        let record = UserRecord::new()
            .with("AMT_CREDIT", 406_597.5)
            .with("AMT_ANNUITY", FeatureValue::Missing);

        let terms = LoanTerms::new(None, None).or_from_record(&record).unwrap();
        assert_eq!(terms.amount, Some(406_597.5));
        assert_eq!(terms.annuity, None);
        assert!(!terms.is_complete());

        let terms = LoanTerms::new(Some(1000.0), Some(100.0))
            .or_from_record(&record)
            .unwrap();
        assert_eq!(terms, LoanTerms::new(Some(1000.0), Some(100.0)));
    }

    #[test]
    fn free_text_record_term_is_an_error() {
        let record = UserRecord::new()
            .with("AMT_CREDIT", 406_597.5)
            .with("AMT_ANNUITY", "monthly");

        let err = LoanTerms::new(None, None).or_from_record(&record).unwrap_err();
        assert_eq!(err.field, "AMT_ANNUITY");
        assert_eq!(err.source.value, "monthly");

        // an explicit term never looks at the record
        let terms = LoanTerms::new(None, Some(50.0)).or_from_record(&record).unwrap();
        assert!(terms.is_complete());
    }
}
