//! Structured clinical summary
//!
//! Every section is optional. Absence means "no data", never an error.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Clinical summary returned by the backend for one patient
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicalSummary {
    /// Record file the summary was built from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default)]
    pub demographics: Option<Demographics>,
    #[serde(default)]
    pub medications_all_time: Option<Vec<MedicationEntry>>,
    #[serde(default)]
    pub conditions_all_time: Option<Vec<ConditionEntry>>,
    #[serde(default)]
    pub recent_vitals: Option<IndexMap<String, Measurement>>,
    #[serde(default)]
    pub recent_labs: Option<IndexMap<String, Measurement>>,
    #[serde(default)]
    pub allergies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_active_medications: Option<bool>,
}

impl ClinicalSummary {
    /// True when no section carries data
    pub fn is_empty(&self) -> bool {
        self.demographics.is_none()
            && self.medications_all_time.as_ref().is_none_or(Vec::is_empty)
            && self.conditions_all_time.as_ref().is_none_or(Vec::is_empty)
            && self.recent_vitals.as_ref().is_none_or(IndexMap::is_empty)
            && self.recent_labs.as_ref().is_none_or(IndexMap::is_empty)
            && self.allergies.as_ref().is_none_or(Vec::is_empty)
    }

    /// Medications whose latest known status is `active`
    pub fn active_medications(&self) -> impl Iterator<Item = &MedicationEntry> {
        self.medications_all_time
            .iter()
            .flatten()
            .filter(|med| med.is_active())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(rename = "birthDate", default)]
    pub birth_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicationEntry {
    pub medication: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl MedicationEntry {
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|status| status.eq_ignore_ascii_case("active"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionEntry {
    pub code: String,
    #[serde(default)]
    pub onset: Option<String>,
}

/// Most recent value of a vital sign or lab
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub date: Option<String>,
}

/// What the summary panel shows for the selected patient
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SummaryPanel {
    /// No patient selected
    #[default]
    Empty,
    /// Fetch outstanding
    Loading,
    Ready(ClinicalSummary),
    /// Short-circuits all section rendering
    Failed { error: String },
}

impl SummaryPanel {
    pub fn summary(&self) -> Option<&ClinicalSummary> {
        match self {
            SummaryPanel::Ready(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SummaryPanel::Failed { error } => Some(error),
            _ => None,
        }
    }
}
