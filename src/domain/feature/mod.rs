//! Feature domain: catalog metadata, raw values, user records and
//! population samples, plus the classifier that routes them to the
//! categorical or numerical comparison path.

mod catalog;
mod classifier;
mod descriptor;
mod record;
mod sample;
mod value;

pub use catalog::{FeatureCatalog, HIDDEN_FEATURES};
pub use classifier::{CategoricalComparison, Comparison, NumericalComparison};
pub use descriptor::{classify, display_label, FeatureDescriptor, ValueType, CATEGORICAL_DTYPE};
pub use record::UserRecord;
pub use sample::{OutcomeClass, PopulationSample};
pub use value::{FeatureValue, MISSING_SENTINEL, NOT_AVAILABLE};
