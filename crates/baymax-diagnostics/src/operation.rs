//! Long-running dashboard operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-visible operation that owns its own busy flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Loading the patient directory
    DirectoryLoad,
    /// Fetching the clinical summary of the selected patient
    SummaryFetch,
    /// Submitting a prospective drug order
    DrugSubmission,
    /// Evaluating discharge eligibility
    DischargeCheck,
    /// Generating the AI summary
    AiSummary,
    /// Uploading a new patient record
    Upload,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::DirectoryLoad => write!(f, "directory load"),
            Operation::SummaryFetch => write!(f, "summary fetch"),
            Operation::DrugSubmission => write!(f, "drug order submission"),
            Operation::DischargeCheck => write!(f, "discharge check"),
            Operation::AiSummary => write!(f, "AI summary"),
            Operation::Upload => write!(f, "upload"),
        }
    }
}
