//! Request bodies shared by the single-patient endpoints

use serde::{Deserialize, Serialize};

/// `{file_path}` body used by the summary, discharge and AI summary endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRequest {
    pub file_path: String,
}

impl PatientRequest {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Request whose path is `prefix` followed by the patient id
    pub fn with_prefix(prefix: &str, patient_id: &str) -> Self {
        Self::new(format!("{prefix}{patient_id}"))
    }
}
