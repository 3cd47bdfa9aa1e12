//! The scoring pipeline: validation, inference, segmentation, explanation

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ScoreError;
use crate::explain::explain;
use crate::features::FeatureContract;
use crate::model::Classifier;
use crate::risk::{recommend, segment};

const CHURN_SUMMARY: &str = "Churn risk detected – customer requires retention intervention.";
const STABLE_SUMMARY: &str = "Customer appears stable – no immediate churn indicators.";

/// The assembled scoring result returned to callers.
///
/// Every field is derived from one classifier call; nothing is persisted.
/// Serialized field names are the wire contract consumed by the API layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringResponse {
    pub prediction: u8,
    pub churn_probability: f64,
    pub risk_segment: String,
    pub message: String,
    pub churn_reason: String,
    pub recommended_strategy: String,
    pub final_action: String,
}

/// Stateless request→response transformation over a shared read-only
/// classifier and feature contract.
///
/// Reentrant: concurrent `score` calls are safe because the classifier seam
/// requires `Send + Sync` and nothing here mutates.
pub struct ScoringPipeline {
    classifier: Arc<dyn Classifier>,
    contract: FeatureContract,
}

impl ScoringPipeline {
    pub fn new(classifier: Arc<dyn Classifier>, contract: FeatureContract) -> Self {
        Self {
            classifier,
            contract,
        }
    }

    pub fn contract(&self) -> &FeatureContract {
        &self.contract
    }

    pub fn model_name(&self) -> &str {
        self.classifier.name()
    }

    /// Score one customer feature vector.
    ///
    /// The vector length must equal the contract's feature count. All
    /// non-validation faults are converted here into
    /// [`ScoreError::Internal`] with a description; nothing below this
    /// boundary reaches the caller raw.
    pub fn score(&self, vector: &[f64]) -> Result<ScoringResponse, ScoreError> {
        let expected = self.contract.feature_count();
        if vector.len() != expected {
            return Err(ScoreError::InvalidLength {
                expected,
                actual: vector.len(),
            });
        }

        let prediction = self
            .classifier
            .predict(vector)
            .and_then(|p| {
                if p.probability.is_finite() && (0.0..=1.0).contains(&p.probability) {
                    Ok(p)
                } else {
                    Err(ScoreError::Inference(format!(
                        "classifier returned out-of-range probability {}",
                        p.probability
                    )))
                }
            })
            .map_err(|e| ScoreError::Internal(format!("prediction failed: {}", e)))?;

        // Segment the probability as it is returned to the caller, so the
        // reported tier always matches the reported probability even when
        // rounding lands exactly on a tier boundary.
        let probability = round_probability(prediction.probability);
        let tier = segment(probability);
        let named = self.contract.named(vector);
        let reason = explain(&named, prediction.label);
        let action = recommend(probability);
        let message = if prediction.label == 1 {
            CHURN_SUMMARY
        } else {
            STABLE_SUMMARY
        };

        Ok(ScoringResponse {
            prediction: prediction.label,
            churn_probability: probability,
            risk_segment: tier.to_string(),
            message: message.to_string(),
            churn_reason: reason,
            recommended_strategy: action.to_string(),
            final_action: format!("{} → {}", tier, action),
        })
    }
}

/// Round a probability to 4 decimal places for the response surface
fn round_probability(probability: f64) -> f64 {
    (probability * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoreError;
    use crate::explain::STABLE_MESSAGE;
    use crate::model::Prediction;
    use crate::risk::RiskTier;

    /// Classifier stub returning a fixed prediction, for exercising the
    /// pipeline at exact probability boundaries
    struct FixedClassifier {
        label: u8,
        probability: f64,
    }

    impl Classifier for FixedClassifier {
        fn predict(&self, _features: &[f64]) -> Result<Prediction, ScoreError> {
            Ok(Prediction {
                label: self.label,
                probability: self.probability,
            })
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn predict(&self, _features: &[f64]) -> Result<Prediction, ScoreError> {
            Err(ScoreError::Inference("resource exhausted".to_string()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn pipeline_with(label: u8, probability: f64) -> ScoringPipeline {
        ScoringPipeline::new(
            Arc::new(FixedClassifier { label, probability }),
            FeatureContract::standard(),
        )
    }

    const HEALTHY: [f64; 8] = [2.0, 0.9, 5000.0, 0.0, 0.0, 30.0, 1.0, 10.0];

    #[test]
    fn test_length_mismatch_is_validation_error() {
        let pipeline = pipeline_with(0, 0.1);
        for vector in [vec![1.0; 7], vec![1.0; 9], vec![]] {
            match pipeline.score(&vector) {
                Err(ScoreError::InvalidLength { expected, actual }) => {
                    assert_eq!(expected, 8);
                    assert_eq!(actual, vector.len());
                }
                other => panic!("expected InvalidLength, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_tier_matches_segment_at_boundaries() {
        for (probability, tier) in [
            (0.80, RiskTier::Medium),
            (0.81, RiskTier::High),
            (0.40, RiskTier::Medium),
            (0.39, RiskTier::Low),
            (1.0, RiskTier::High),
            (0.0, RiskTier::Low),
        ] {
            let response = pipeline_with(1, probability).score(&HEALTHY).unwrap();
            assert_eq!(response.risk_segment, tier.to_string());
            assert_eq!(segment(response.churn_probability), tier);
        }
    }

    #[test]
    fn test_rounding_is_idempotent() {
        let response = pipeline_with(1, 0.123456789).score(&HEALTHY).unwrap();
        assert_eq!(response.churn_probability, 0.1235);
        assert_eq!(
            round_probability(response.churn_probability),
            response.churn_probability
        );
    }

    #[test]
    fn test_negative_prediction_messages() {
        let response = pipeline_with(0, 0.05).score(&HEALTHY).unwrap();
        assert_eq!(response.prediction, 0);
        assert_eq!(response.message, STABLE_SUMMARY);
        assert_eq!(response.churn_reason, STABLE_MESSAGE);
    }

    #[test]
    fn test_positive_prediction_messages() {
        let churny = [0.0, 0.2, 500.0, 5.0, 3.0, 2.0, 4.0, 1.0];
        let response = pipeline_with(1, 0.92).score(&churny).unwrap();
        assert_eq!(response.prediction, 1);
        assert_eq!(response.message, CHURN_SUMMARY);
        assert!(response
            .churn_reason
            .starts_with("The customer is likely to churn because "));
    }

    #[test]
    fn test_final_action_combines_tier_and_strategy() {
        let response = pipeline_with(1, 0.92).score(&HEALTHY).unwrap();
        assert_eq!(
            response.final_action,
            format!("{} → {}", response.risk_segment, response.recommended_strategy)
        );
    }

    #[test]
    fn test_classifier_failure_becomes_internal_error() {
        let pipeline =
            ScoringPipeline::new(Arc::new(FailingClassifier), FeatureContract::standard());
        match pipeline.score(&HEALTHY) {
            Err(ScoreError::Internal(msg)) => {
                assert!(msg.contains("prediction failed"));
                assert!(msg.contains("resource exhausted"));
            }
            other => panic!("expected Internal, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_probability_is_rejected() {
        for probability in [1.5, -0.1, f64::NAN] {
            let result = pipeline_with(1, probability).score(&HEALTHY);
            match result {
                Err(ScoreError::Internal(msg)) => {
                    assert!(msg.contains("out-of-range"));
                }
                other => panic!("expected Internal, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_response_serializes_with_wire_field_names() {
        let response = pipeline_with(1, 0.92).score(&HEALTHY).unwrap();
        let json = serde_json::to_value(&response).unwrap();
        for field in [
            "prediction",
            "churn_probability",
            "risk_segment",
            "message",
            "churn_reason",
            "recommended_strategy",
            "final_action",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
    }
}
