//! Drug order requests and results
//!
//! Two backend routes answer a drug order with different shapes. The primary
//! route returns a full safety assessment; the legacy fallback returns only
//! the top drug-drug interaction matches. [`DrugOrderResult`] keeps the two
//! apart and [`DrugOrderResult::interactions`] gives the common view.

use serde::{Deserialize, Serialize};

/// Payload sent to both drug order endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrugOrderRequest {
    pub file_path: String,
    pub new_medication: String,
}

impl DrugOrderRequest {
    /// Build a request, trimming the medication name.
    ///
    /// Returns `None` when the trimmed name is blank.
    pub fn new(patient_id: impl Into<String>, medication: &str) -> Option<Self> {
        let medication = medication.trim();
        if medication.is_empty() {
            return None;
        }
        Some(Self {
            file_path: patient_id.into(),
            new_medication: medication.to_string(),
        })
    }
}

/// One drug-drug interaction match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interaction {
    pub interaction: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// A backend-flagged reason the medication may be unsafe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contraindication {
    pub text: String,
    #[serde(default)]
    pub similarity: f64,
}

/// Safety assessment produced by the primary route
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SafetyAssessment {
    #[serde(default)]
    pub drug_interactions: Vec<Interaction>,
    /// `None` when the backend did not send a list
    #[serde(default)]
    pub contraindications: Option<Vec<Contraindication>>,
    #[serde(default)]
    pub has_alerts: bool,
    #[serde(default)]
    pub ai_assessment: Option<String>,
}

/// Body of the primary drug order endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimaryOrderResponse {
    #[serde(default)]
    pub safety_assessment: SafetyAssessment,
}

/// Body of the fallback interaction-match endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FallbackOrderResponse {
    #[serde(default)]
    pub top_5_ddi_matches: Vec<Interaction>,
}

/// Which endpoint answered a drug order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSource {
    Primary,
    Fallback,
}

/// Outcome of one drug order submission. Exactly one shape is active.
#[derive(Debug, Clone, PartialEq)]
pub enum DrugOrderResult {
    Primary(SafetyAssessment),
    Fallback(Vec<Interaction>),
}

impl DrugOrderResult {
    pub fn source(&self) -> OrderSource {
        match self {
            DrugOrderResult::Primary(_) => OrderSource::Primary,
            DrugOrderResult::Fallback(_) => OrderSource::Fallback,
        }
    }

    /// Interaction list common to both shapes
    pub fn interactions(&self) -> &[Interaction] {
        match self {
            DrugOrderResult::Primary(assessment) => &assessment.drug_interactions,
            DrugOrderResult::Fallback(matches) => matches,
        }
    }

    /// Contraindications; only the primary shape carries them
    pub fn contraindications(&self) -> Option<&[Contraindication]> {
        match self {
            DrugOrderResult::Primary(assessment) => assessment.contraindications.as_deref(),
            DrugOrderResult::Fallback(_) => None,
        }
    }

    /// Free-text AI assessment; only the primary shape carries it
    pub fn ai_assessment(&self) -> Option<&str> {
        match self {
            DrugOrderResult::Primary(assessment) => assessment
                .ai_assessment
                .as_deref()
                .filter(|text| !text.is_empty()),
            DrugOrderResult::Fallback(_) => None,
        }
    }
}

impl From<PrimaryOrderResponse> for DrugOrderResult {
    fn from(response: PrimaryOrderResponse) -> Self {
        DrugOrderResult::Primary(response.safety_assessment)
    }
}

impl From<FallbackOrderResponse> for DrugOrderResult {
    fn from(response: FallbackOrderResponse) -> Self {
        DrugOrderResult::Fallback(response.top_5_ddi_matches)
    }
}
