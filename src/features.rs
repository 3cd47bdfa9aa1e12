//! Feature contract: the ordered behavioral features the classifier expects

use serde::{Deserialize, Serialize};

/// Feature names in the order the classifier was trained on
pub const FEATURE_NAMES: [&str; 8] = [
    "Loans Accessed",
    "Sentiment Score",
    "Monthly Avg Balance",
    "Declined Txns",
    "Overdraft Events",
    "App Logins",
    "Tickets Raised",
    "Web Logins",
];

/// Ordered list of feature names a model artifact was trained on.
///
/// Immutable after construction. The scoring pipeline validates incoming
/// vectors against `feature_count()` before they reach the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureContract {
    names: Vec<String>,
}

impl FeatureContract {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// The standard retention-model contract (8 behavioral features)
    pub fn standard() -> Self {
        Self::new(FEATURE_NAMES.iter().map(|s| s.to_string()).collect())
    }

    pub fn feature_count(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Zip feature names with a vector in positional order.
    ///
    /// Used only for explanation; prediction consumes the vector positionally.
    pub fn named(&self, vector: &[f64]) -> NamedFeatures {
        NamedFeatures {
            pairs: self
                .names
                .iter()
                .zip(vector.iter())
                .map(|(name, value)| (name.clone(), *value))
                .collect(),
        }
    }
}

/// Feature values keyed by name, preserving contract order
#[derive(Debug, Clone)]
pub struct NamedFeatures {
    pairs: Vec<(String, f64)>,
}

impl NamedFeatures {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), *v))
    }
}
