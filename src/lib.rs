//! ChurnScope: A Rust CLI application for customer churn risk scoring
//!
//! This library turns a pre-trained churn classifier's probability into a
//! risk tier, a natural-language explanation of the prediction, and a
//! tier-appropriate retention recommendation.

pub mod cli;
pub mod data;
pub mod error;
pub mod explain;
pub mod features;
pub mod model;
pub mod pipeline;
pub mod risk;
pub mod viz;

// Re-export public items for easier access
pub use cli::Args;
pub use data::{load_customer_batch, CustomerBatch};
pub use error::ScoreError;
pub use explain::explain;
pub use features::{FeatureContract, NamedFeatures, FEATURE_NAMES};
pub use model::{Classifier, LogisticModel, Prediction};
pub use pipeline::{ScoringPipeline, ScoringResponse};
pub use risk::{recommend, segment, RiskTier};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
