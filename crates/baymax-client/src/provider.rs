//! Clinical API trait

use crate::{Endpoint, PatientUpload};
use async_trait::async_trait;
use baymax_model::{
    AiSummaryResponse, ClinicalSummary, DischargeStatus, DrugOrderRequest, FallbackOrderResponse,
    PatientDirectory, PrimaryOrderResponse,
};

/// Remote clinical API consumed by the dashboard.
///
/// Each method is one request/response round trip. Implementations never
/// retry; retry policy belongs to the caller.
#[async_trait]
pub trait ClinicalApi: Send + Sync {
    /// List the record files known to the backend
    async fn list_patient_files(&self) -> Result<PatientDirectory, ApiError>;

    /// Upload a new patient record
    async fn upload_patient_file(&self, upload: &PatientUpload) -> Result<(), ApiError>;

    /// Fetch the structured clinical summary of one patient
    async fn fetch_summary(&self, patient_id: &str) -> Result<ClinicalSummary, ApiError>;

    /// Submit a drug order to the primary safety-assessment route
    async fn submit_drug_order(
        &self,
        order: &DrugOrderRequest,
    ) -> Result<PrimaryOrderResponse, ApiError>;

    /// Submit a drug order to the legacy interaction-match route
    async fn match_interactions(
        &self,
        order: &DrugOrderRequest,
    ) -> Result<FallbackOrderResponse, ApiError>;

    /// Evaluate discharge eligibility
    async fn evaluate_discharge(&self, patient_id: &str) -> Result<DischargeStatus, ApiError>;

    /// Generate the AI summary
    async fn generate_ai_summary(&self, patient_id: &str) -> Result<AiSummaryResponse, ApiError>;
}

/// Clinical API error
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("Network error on {endpoint}: {message}")]
    Transport { endpoint: Endpoint, message: String },

    #[error("HTTP error! Status: {status} ({endpoint})")]
    Status { endpoint: Endpoint, status: u16 },

    #[error("Invalid JSON response from {endpoint}: {message}")]
    Decode { endpoint: Endpoint, message: String },

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Endpoint the failure happened on, if it reached the network layer
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => Some(*endpoint),
            ApiError::InvalidUpload(_) | ApiError::Config(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
