//! Classifier adapter around a pre-trained churn model

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::features::FeatureContract;

/// Output of one classifier call: class label and positive-class probability
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub label: u8,
    pub probability: f64,
}

/// Seam for pluggable binary classifiers.
///
/// Implementations must be safe for concurrent read-only use; the scoring
/// pipeline shares one instance across invocations.
pub trait Classifier: Send + Sync {
    /// Predict the class label and churn probability for one feature vector
    fn predict(&self, features: &[f64]) -> Result<Prediction, ScoreError>;

    fn name(&self) -> &str;
}

/// Logistic scorer over coefficients exported from the training run.
///
/// The artifact is a JSON file carrying the feature names alongside the
/// coefficients, so the feature contract always matches the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub model_name: String,
    pub feature_names: Vec<String>,
    pub weights: Vec<f64>,
    pub bias: f64,
    #[serde(default = "default_decision_threshold")]
    pub decision_threshold: f64,
}

fn default_decision_threshold() -> f64 {
    0.5
}

impl LogisticModel {
    /// Load a model artifact from a JSON file
    pub fn load(path: impl AsRef<Path>) -> crate::Result<LogisticModel> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let model: LogisticModel = serde_json::from_str(&raw)?;

        if model.weights.len() != model.feature_names.len() {
            anyhow::bail!(
                "Model artifact is inconsistent: {} weights for {} feature names",
                model.weights.len(),
                model.feature_names.len()
            );
        }
        if !(0.0..=1.0).contains(&model.decision_threshold) {
            anyhow::bail!(
                "Decision threshold {} is outside [0, 1]",
                model.decision_threshold
            );
        }

        Ok(model)
    }

    /// The feature contract this model was trained on
    pub fn contract(&self) -> FeatureContract {
        FeatureContract::new(self.feature_names.clone())
    }
}

impl Classifier for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<Prediction, ScoreError> {
        if features.len() != self.weights.len() {
            return Err(ScoreError::Inference(format!(
                "model expects {} features, got {}",
                self.weights.len(),
                features.len()
            )));
        }

        let z = self
            .weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        let probability = sigmoid(z);

        if !probability.is_finite() {
            return Err(ScoreError::Inference(format!(
                "model produced non-finite probability for input {:?}",
                features
            )));
        }

        let label = u8::from(probability >= self.decision_threshold);
        Ok(Prediction { label, probability })
    }

    fn name(&self) -> &str {
        &self.model_name
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn test_model() -> LogisticModel {
        LogisticModel {
            model_name: "test-logistic".to_string(),
            feature_names: crate::features::FEATURE_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            weights: vec![-0.8, -2.5, -0.0008, 0.35, 0.4, -0.12, 0.3, -0.25],
            bias: -1.2,
            decision_threshold: 0.5,
        }
    }

    #[test]
    fn test_predict_probability_in_range() {
        let model = test_model();
        let prediction = model
            .predict(&[0.0, 0.2, 500.0, 5.0, 3.0, 2.0, 4.0, 1.0])
            .unwrap();
        assert!(prediction.probability > 0.0 && prediction.probability < 1.0);
        assert_eq!(prediction.label, 1);
    }

    #[test]
    fn test_predict_healthy_customer() {
        let model = test_model();
        let prediction = model
            .predict(&[3.0, 0.85, 8200.0, 0.0, 0.0, 34.0, 1.0, 12.0])
            .unwrap();
        assert!(prediction.probability < 0.4);
        assert_eq!(prediction.label, 0);
    }

    #[test]
    fn test_label_matches_threshold() {
        let model = test_model();
        for vector in [
            [0.0, 0.2, 500.0, 5.0, 3.0, 2.0, 4.0, 1.0],
            [3.0, 0.85, 8200.0, 0.0, 0.0, 34.0, 1.0, 12.0],
            [1.0, 0.5, 2000.0, 2.0, 1.0, 10.0, 2.0, 4.0],
        ] {
            let prediction = model.predict(&vector).unwrap();
            assert_eq!(
                prediction.label,
                u8::from(prediction.probability >= model.decision_threshold)
            );
        }
    }

    #[test]
    fn test_predict_rejects_wrong_length() {
        let model = test_model();
        let result = model.predict(&[1.0, 2.0, 3.0]);
        assert!(matches!(result, Err(ScoreError::Inference(_))));
    }

    #[test]
    fn test_load_round_trip() {
        let model = test_model();
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(&model).unwrap()).unwrap();

        let loaded = LogisticModel::load(file.path()).unwrap();
        assert_eq!(loaded.model_name, "test-logistic");
        assert_eq!(loaded.weights, model.weights);
        assert_eq!(loaded.contract().feature_count(), 8);
    }

    #[test]
    fn test_load_defaults_decision_threshold() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"model_name":"m","feature_names":["a","b"],"weights":[0.1,0.2],"bias":0.0}}"#
        )
        .unwrap();

        let loaded = LogisticModel::load(file.path()).unwrap();
        assert_eq!(loaded.decision_threshold, 0.5);
    }

    #[test]
    fn test_load_rejects_weight_name_mismatch() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"model_name":"m","feature_names":["a","b"],"weights":[0.1],"bias":0.0}}"#
        )
        .unwrap();

        assert!(LogisticModel::load(file.path()).is_err());
    }

    #[test]
    fn test_sigmoid_extremes() {
        assert!(sigmoid(50.0) > 0.999);
        assert!(sigmoid(-50.0) < 0.001);
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
    }
}
