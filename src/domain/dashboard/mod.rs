//! Dashboard domain: the pure computations behind each panel.
//!
//! - `formatter` - abbreviated magnitudes for amounts
//! - `delta` - population-relative delta for a user's value
//! - `chart` - distribution charts split by loan outcome
//! - `user_summary` - sidebar profile table
//! - `analysis` - the feature analysis panel (delta + chart)

pub mod analysis;
pub mod chart;
pub mod delta;
pub mod formatter;
pub mod user_summary;

pub use analysis::{AnalysisError, FeatureAnalysis};
pub use chart::{build_chart, chart_for, ChartError, ChartSpec};
pub use delta::{compute_delta, delta_for, DeltaError, DeltaResult, Emphasis};
pub use formatter::format_magnitude;
pub use user_summary::{SummaryError, SummaryRow, UserSummary};
