//! Rule-based natural-language explanations for churn predictions

use crate::features::NamedFeatures;

/// Fixed message for negative predictions; feature values are not inspected
pub const STABLE_MESSAGE: &str =
    "No strong churn signals detected. Customer appears healthy based on current usage behavior.";

/// Fallback when the prediction is positive but no rule fires (plausible
/// near the decision boundary)
pub const NO_SIGNAL_MESSAGE: &str = "No strong churn signals detected based on recent behavior.";

/// One churn signal: a single-feature threshold test and the sentence clause
/// it contributes when it holds
pub struct ChurnRule {
    pub feature: &'static str,
    pub applies: fn(f64) -> bool,
    pub clause: &'static str,
}

/// The churn signal rules, in the order their clauses appear in the
/// explanation sentence
pub const CHURN_RULES: [ChurnRule; 8] = [
    ChurnRule {
        feature: "Loans Accessed",
        applies: |v| v == 0.0,
        clause: "the customer hasn't used loan features recently",
    },
    ChurnRule {
        feature: "Sentiment Score",
        applies: |v| v < 0.3,
        clause: "they have shown low sentiment in support chats",
    },
    ChurnRule {
        feature: "Monthly Avg Balance",
        applies: |v| v < 1000.0,
        clause: "their account balance is consistently low",
    },
    ChurnRule {
        feature: "Declined Txns",
        applies: |v| v > 3.0,
        clause: "they’ve had multiple declined transaction attempts",
    },
    ChurnRule {
        feature: "Overdraft Events",
        applies: |v| v > 2.0,
        clause: "they experience frequent overdraft events",
    },
    ChurnRule {
        feature: "App Logins",
        applies: |v| v < 5.0,
        clause: "mobile app usage is very low",
    },
    ChurnRule {
        feature: "Tickets Raised",
        applies: |v| v > 3.0,
        clause: "they’ve raised frequent support tickets",
    },
    ChurnRule {
        feature: "Web Logins",
        applies: |v| v < 2.0,
        clause: "web portal usage is minimal",
    },
];

/// Produce a natural-language reason for a prediction.
///
/// Negative predictions get the fixed stable message. Positive predictions
/// collect a clause for every rule whose condition holds, in rule-table
/// order, joined into one sentence.
pub fn explain(named: &NamedFeatures, label: u8) -> String {
    if label == 0 {
        return STABLE_MESSAGE.to_string();
    }

    let clauses: Vec<&str> = CHURN_RULES
        .iter()
        .filter(|rule| {
            named
                .get(rule.feature)
                .map_or(false, |value| (rule.applies)(value))
        })
        .map(|rule| rule.clause)
        .collect();

    if clauses.is_empty() {
        NO_SIGNAL_MESSAGE.to_string()
    } else {
        format!(
            "The customer is likely to churn because {}.",
            clauses.join("; ")
        )
    }
}
