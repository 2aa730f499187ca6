//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, probabilities, errors)
//! - `feature` - Feature metadata, values, user records and population samples
//! - `scoring` - Risk predictions and prediction explanations
//! - `dashboard` - Pure computations behind each dashboard panel

pub mod dashboard;
pub mod feature;
pub mod foundation;
pub mod scoring;
