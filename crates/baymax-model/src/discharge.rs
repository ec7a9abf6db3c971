//! Discharge eligibility

use serde::{Deserialize, Serialize};

pub const DISCHARGE_ERROR_DECISION: &str = "Error";
pub const DISCHARGE_ERROR_JUSTIFICATION: &str = "Failed to evaluate discharge.";

/// Decision and justification returned by the discharge endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DischargeStatus {
    pub decision: String,
    #[serde(default)]
    pub justification: String,
}

/// Known decision classes; anything unrecognized is `Other`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionKind {
    Approved,
    Refused,
    Other,
}

impl DischargeStatus {
    pub fn new(decision: impl Into<String>, justification: impl Into<String>) -> Self {
        Self {
            decision: decision.into(),
            justification: justification.into(),
        }
    }

    /// Synthetic status shown when the evaluation fails
    pub fn failed() -> Self {
        Self::new(DISCHARGE_ERROR_DECISION, DISCHARGE_ERROR_JUSTIFICATION)
    }

    pub fn is_failure(&self) -> bool {
        self.decision == DISCHARGE_ERROR_DECISION
            && self.justification == DISCHARGE_ERROR_JUSTIFICATION
    }

    /// Case-insensitive classification of the decision
    pub fn decision_kind(&self) -> DecisionKind {
        match self.decision.trim().to_lowercase().as_str() {
            "yes" => DecisionKind::Approved,
            "absolutely not" => DecisionKind::Refused,
            _ => DecisionKind::Other,
        }
    }
}
