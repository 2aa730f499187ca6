//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, value objects and error types
//! that form the vocabulary of the credit dashboard domain.

mod errors;
mod ids;
mod probability;
mod rounding;

pub use errors::{DataIntegrityError, ValidationError};
pub use ids::{FeatureId, UserId};
pub use probability::Probability;
pub use rounding::{round_half_even, whole_percent};
