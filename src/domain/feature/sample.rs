//! Population samples split by loan outcome.

use serde::{Deserialize, Serialize};

use super::FeatureValue;

/// Historical loan outcome a population bucket belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeClass {
    /// Negative class: the loan was repaid.
    Repaid,
    /// Positive class: the borrower defaulted.
    Defaulted,
}

impl OutcomeClass {
    pub const ALL: [OutcomeClass; 2] = [OutcomeClass::Repaid, OutcomeClass::Defaulted];

    /// Legend entry under the "Solvent" legend title.
    pub fn legend(&self) -> &'static str {
        match self {
            OutcomeClass::Repaid => "Yes",
            OutcomeClass::Defaulted => "No",
        }
    }

    /// Color shared by every chart so both charts read the same way.
    pub fn color(&self) -> &'static str {
        match self {
            OutcomeClass::Repaid => "green",
            OutcomeClass::Defaulted => "red",
        }
    }
}

/// Raw values of one feature for both outcome classes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationSample {
    pub negative: Vec<FeatureValue>,
    pub positive: Vec<FeatureValue>,
}

impl PopulationSample {
    pub fn new(negative: Vec<FeatureValue>, positive: Vec<FeatureValue>) -> Self {
        Self { negative, positive }
    }

    pub fn values(&self, class: OutcomeClass) -> &[FeatureValue] {
        match class {
            OutcomeClass::Repaid => &self.negative,
            OutcomeClass::Defaulted => &self.positive,
        }
    }

    /// Both classes concatenated, repaid first.
    pub fn pooled(&self) -> impl Iterator<Item = &FeatureValue> {
        self.negative.iter().chain(self.positive.iter())
    }

    pub fn len(&self) -> usize {
        self.negative.len() + self.positive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pooled_keeps_repaid_first() {
        let sample = PopulationSample::new(
            vec![FeatureValue::from("A"), FeatureValue::Missing],
            vec![FeatureValue::from("B")],
        );
        let pooled: Vec<_> = sample.pooled().cloned().collect();
        assert_eq!(
            pooled,
            vec![FeatureValue::from("A"), FeatureValue::Missing, FeatureValue::from("B")]
        );
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn outcome_classes_keep_color_convention() {
        assert_eq!(OutcomeClass::Repaid.color(), "green");
        assert_eq!(OutcomeClass::Defaulted.color(), "red");
        assert_eq!(OutcomeClass::Repaid.legend(), "Yes");
        assert_eq!(OutcomeClass::Defaulted.legend(), "No");
    }
}
