//! Credit Dashboard - Credit-default risk dashboard backend
//!
//! This crate serves the data behind an interactive credit-risk dashboard:
//! user summaries, default-risk scores and their explanations, and per-feature
//! comparisons of one applicant against the repaid and defaulted populations,
//! all sourced from a remote scoring gateway.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
