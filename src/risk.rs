//! Risk tier segmentation and retention recommendations

use std::fmt;

use serde::{Deserialize, Serialize};

/// Probabilities strictly above this floor are high risk
pub const HIGH_RISK_FLOOR: f64 = 0.80;
/// Probabilities at or above this floor (up to the high floor) are medium risk
pub const MEDIUM_RISK_FLOOR: f64 = 0.40;

const HIGH_ACTION: &str = "🚨 High priority: Assign a customer success agent within 24 hours. \
     Offer personalized retention benefits and begin 30-day watch with alerts.";
const MEDIUM_ACTION: &str = "⚠️ Moderate priority: Send retention email with feature suggestions and bonus. \
     Follow up if inactive for 7–14 days.";
const LOW_ACTION: &str = "✅ Low priority: Send loyalty appreciation message and invite to referral program. \
     Monitor sentiment and usage monthly.";

/// Coarse risk bucket derived from the churn probability.
///
/// Totally ordered by ascending probability thresholds; derived, never
/// stored independently of the probability that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn label(&self) -> &'static str {
        match self {
            RiskTier::High => "🔴 High Risk",
            RiskTier::Medium => "🟠 Medium Risk",
            RiskTier::Low => "🟢 Low Risk",
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a churn probability to its risk tier.
///
/// The 0.80 boundary is Medium (High is strict `>`); the 0.40 boundary is
/// Medium (inclusive `>=`). Probabilities outside [0,1] are rejected
/// upstream by the classifier seam, never clamped here.
pub fn segment(probability: f64) -> RiskTier {
    if probability > HIGH_RISK_FLOOR {
        RiskTier::High
    } else if probability >= MEDIUM_RISK_FLOOR {
        RiskTier::Medium
    } else {
        RiskTier::Low
    }
}

/// Tier-appropriate retention action for a churn probability.
///
/// Shares the segmentation thresholds through [`segment`] so the two can
/// never drift apart.
pub fn recommend(probability: f64) -> &'static str {
    match segment(probability) {
        RiskTier::High => HIGH_ACTION,
        RiskTier::Medium => MEDIUM_ACTION,
        RiskTier::Low => LOW_ACTION,
    }
}
