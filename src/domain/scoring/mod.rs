//! Scoring domain: model predictions and their explanations.

mod explanation;
mod prediction;

pub use explanation::{Contribution, PredictionExplanation};
pub use prediction::{LoanTerms, LoanTermsError, RiskPrediction};
