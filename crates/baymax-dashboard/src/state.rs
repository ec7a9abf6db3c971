//! Dashboard session state

use baymax_model::{AiSummary, DischargeStatus, DrugOrderResult, PatientRecord, SummaryPanel};

/// Patient directory as shown by the selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DirectoryState {
    #[default]
    NotLoaded,
    Loading,
    Loaded(Vec<PatientRecord>),
    /// Blocking error; the selector is not shown
    Failed(String),
}

impl DirectoryState {
    /// Loaded records, empty in every other state
    pub fn records(&self) -> &[PatientRecord] {
        match self {
            DirectoryState::Loaded(records) => records,
            _ => &[],
        }
    }

    pub fn find(&self, id: &str) -> Option<&PatientRecord> {
        self.records().iter().find(|record| record.id() == id)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            DirectoryState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Selected patient and the selection epoch captured when a request starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub patient_id: String,
    pub epoch: u64,
}

/// Everything the dashboard displays
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub directory: DirectoryState,
    /// Identifier of the selected patient
    pub selected: Option<String>,
    /// Bumped on every selection change
    pub epoch: u64,
    pub summary: SummaryPanel,
    /// Epoch of the outstanding summary fetch
    pub(crate) summary_in_flight: Option<u64>,
    /// Drug name typed by the clinician
    pub drug_input: String,
    pub drug_order: Option<DrugOrderResult>,
    pub discharge: Option<DischargeStatus>,
    pub ai_summary: Option<AiSummary>,
    /// Transient error message
    pub banner: Option<String>,
}

impl DashboardState {
    pub fn selected_record(&self) -> Option<&PatientRecord> {
        self.directory.find(self.selected.as_deref()?)
    }

    pub fn summary_in_flight(&self) -> bool {
        self.summary_in_flight.is_some()
    }

    /// Change the selection. Returns `false` if `id` is already selected.
    ///
    /// A change starts a new epoch and clears every patient-specific panel.
    /// The typed drug name is kept.
    pub(crate) fn set_selection(&mut self, id: Option<String>) -> bool {
        if self.selected == id {
            return false;
        }
        self.selected = id;
        self.epoch += 1;
        self.summary = SummaryPanel::Empty;
        self.summary_in_flight = None;
        self.drug_order = None;
        self.discharge = None;
        self.ai_summary = None;
        self.banner = None;
        true
    }

    pub(crate) fn ticket(&self) -> Option<Ticket> {
        Some(Ticket {
            patient_id: self.selected.clone()?,
            epoch: self.epoch,
        })
    }

    pub(crate) fn is_current(&self, ticket: &Ticket) -> bool {
        self.epoch == ticket.epoch && self.selected.as_deref() == Some(ticket.patient_id.as_str())
    }
}
