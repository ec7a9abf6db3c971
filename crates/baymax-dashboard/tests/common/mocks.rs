//! Mock implementation of the clinical API
//!
//! Responses are configurable per operation and every call is recorded.
//! A gate holds a call open until the test releases it, which lets tests
//! control the order in which responses arrive.

use async_trait::async_trait;
use baymax_client::{ApiError, ClinicalApi, Endpoint, PatientUpload};
use baymax_model::{
    AiSummaryResponse, ClinicalSummary, DirectoryEntry, DischargeStatus, DrugOrderRequest,
    FallbackOrderResponse, PatientDirectory, PrimaryOrderResponse,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Notify;

/// A recorded API call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListPatients,
    Upload(String),
    Summary(String),
    SubmitDrugOrder(DrugOrderRequest),
    MatchInteractions(DrugOrderRequest),
    Discharge(String),
    AiSummary(String),
}

/// Holds a call until released
#[derive(Debug, Default)]
pub struct Gate {
    entered: Notify,
    release: Notify,
}

impl Gate {
    /// Wait until the gated call has been made
    pub async fn entered(&self) {
        self.entered.notified().await;
    }

    /// Let the gated call return
    pub fn release(&self) {
        self.release.notify_one();
    }
}

pub fn status_error(endpoint: Endpoint, status: u16) -> ApiError {
    ApiError::Status { endpoint, status }
}

pub struct MockClinicalApi {
    directory: RwLock<Result<PatientDirectory, ApiError>>,
    summaries: RwLock<HashMap<String, Result<ClinicalSummary, ApiError>>>,
    primary: RwLock<Result<PrimaryOrderResponse, ApiError>>,
    fallback: RwLock<Result<FallbackOrderResponse, ApiError>>,
    discharge: RwLock<Result<DischargeStatus, ApiError>>,
    ai_summary: RwLock<Result<AiSummaryResponse, ApiError>>,
    upload: RwLock<Result<(), ApiError>>,
    gates: RwLock<HashMap<String, Arc<Gate>>>,
    calls: RwLock<Vec<Call>>,
}

impl MockClinicalApi {
    pub fn new() -> Self {
        Self {
            directory: RwLock::new(Ok(PatientDirectory {
                patient_files: Vec::new(),
            })),
            summaries: RwLock::new(HashMap::new()),
            primary: RwLock::new(Ok(PrimaryOrderResponse::default())),
            fallback: RwLock::new(Ok(FallbackOrderResponse::default())),
            discharge: RwLock::new(Ok(DischargeStatus::new("Yes", "Stable vitals."))),
            ai_summary: RwLock::new(Ok(AiSummaryResponse::default())),
            upload: RwLock::new(Ok(())),
            gates: RwLock::new(HashMap::new()),
            calls: RwLock::new(Vec::new()),
        }
    }

    pub fn set_directory(&self, files: &[&str]) {
        *self.directory.write() = Ok(PatientDirectory {
            patient_files: files
                .iter()
                .map(|f| DirectoryEntry::File(f.to_string()))
                .collect(),
        });
    }

    pub fn fail_directory(&self, error: ApiError) {
        *self.directory.write() = Err(error);
    }

    pub fn set_summary(&self, patient_id: &str, summary: Result<ClinicalSummary, ApiError>) {
        self.summaries
            .write()
            .insert(patient_id.to_string(), summary);
    }

    pub fn set_primary(&self, response: Result<PrimaryOrderResponse, ApiError>) {
        *self.primary.write() = response;
    }

    pub fn set_fallback(&self, response: Result<FallbackOrderResponse, ApiError>) {
        *self.fallback.write() = response;
    }

    pub fn set_discharge(&self, response: Result<DischargeStatus, ApiError>) {
        *self.discharge.write() = response;
    }

    pub fn set_ai_summary(&self, response: Result<AiSummaryResponse, ApiError>) {
        *self.ai_summary.write() = response;
    }

    pub fn set_upload(&self, response: Result<(), ApiError>) {
        *self.upload.write() = response;
    }

    /// Gate calls with the given key, e.g. `summary:jane_doe.json` or `discharge`
    pub fn gate(&self, key: &str) -> Arc<Gate> {
        let gate = Arc::new(Gate::default());
        self.gates.write().insert(key.to_string(), gate.clone());
        gate
    }

    /// Remove a gate; later calls with the key return immediately
    pub fn ungate(&self, key: &str) {
        self.gates.write().remove(key);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.read().clone()
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.read().iter().filter(|call| matches(call)).count()
    }

    async fn record(&self, call: Call, gate_key: &str) {
        self.calls.write().push(call);
        let gate = self.gates.read().get(gate_key).cloned();
        if let Some(gate) = gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }
    }
}

impl Default for MockClinicalApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClinicalApi for MockClinicalApi {
    async fn list_patient_files(&self) -> Result<PatientDirectory, ApiError> {
        self.record(Call::ListPatients, "list").await;
        self.directory.read().clone()
    }

    async fn upload_patient_file(&self, upload: &PatientUpload) -> Result<(), ApiError> {
        self.record(Call::Upload(upload.file_name().to_string()), "upload")
            .await;
        self.upload.read().clone()
    }

    async fn fetch_summary(&self, patient_id: &str) -> Result<ClinicalSummary, ApiError> {
        self.record(
            Call::Summary(patient_id.to_string()),
            &format!("summary:{patient_id}"),
        )
        .await;
        self.summaries
            .read()
            .get(patient_id)
            .cloned()
            .unwrap_or_else(|| Ok(ClinicalSummary::default()))
    }

    async fn submit_drug_order(
        &self,
        order: &DrugOrderRequest,
    ) -> Result<PrimaryOrderResponse, ApiError> {
        self.record(Call::SubmitDrugOrder(order.clone()), "submit-drug-order")
            .await;
        self.primary.read().clone()
    }

    async fn match_interactions(
        &self,
        order: &DrugOrderRequest,
    ) -> Result<FallbackOrderResponse, ApiError> {
        self.record(Call::MatchInteractions(order.clone()), "match")
            .await;
        self.fallback.read().clone()
    }

    async fn evaluate_discharge(&self, patient_id: &str) -> Result<DischargeStatus, ApiError> {
        self.record(Call::Discharge(patient_id.to_string()), "discharge")
            .await;
        self.discharge.read().clone()
    }

    async fn generate_ai_summary(&self, patient_id: &str) -> Result<AiSummaryResponse, ApiError> {
        self.record(Call::AiSummary(patient_id.to_string()), "ai-summary")
            .await;
        self.ai_summary.read().clone()
    }
}
