//! Dashboard session handle

use crate::{BusyFlags, BusyGuard, DashboardState, Ticket};
use baymax_client::ClinicalApi;
use baymax_diagnostics::{BaymaxError, Operation, Result};
use parking_lot::Mutex;
use std::sync::Arc;

/// One clinician session.
///
/// Cheap to clone; clones share state, busy flags and the API client, so
/// independent operations can run concurrently from different tasks.
#[derive(Clone)]
pub struct Dashboard {
    pub(crate) api: Arc<dyn ClinicalApi>,
    pub(crate) state: Arc<Mutex<DashboardState>>,
    pub(crate) busy: BusyFlags,
}

impl Dashboard {
    pub fn new(api: Arc<dyn ClinicalApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(DashboardState::default())),
            busy: BusyFlags::new(),
        }
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> DashboardState {
        self.state.lock().clone()
    }

    pub fn is_busy(&self, operation: Operation) -> bool {
        match operation {
            Operation::SummaryFetch => self.state.lock().summary_in_flight(),
            other => self.busy.is_busy(other),
        }
    }

    /// Select a loaded patient and fetch their summary.
    ///
    /// Returns `true` if the selection changed. Selecting the current patient
    /// again does nothing.
    pub async fn select_patient(&self, patient_id: &str) -> Result<bool> {
        let changed = self.focus_patient(patient_id)?;
        if changed {
            self.refresh_after_selection().await;
        }
        Ok(changed)
    }

    /// Select a loaded patient without fetching the summary
    pub fn focus_patient(&self, patient_id: &str) -> Result<bool> {
        let mut state = self.state.lock();
        if state.directory.find(patient_id).is_none() {
            return Err(BaymaxError::UnknownPatient(patient_id.to_string()));
        }
        let changed = state.set_selection(Some(patient_id.to_string()));
        if changed {
            log::debug!("selected {patient_id}");
        }
        Ok(changed)
    }

    /// Replace the typed drug name
    pub fn set_drug_input(&self, text: impl Into<String>) {
        self.state.lock().drug_input = text.into();
    }

    /// Take and clear the banner message
    pub fn take_banner(&self) -> Option<String> {
        self.state.lock().banner.take()
    }

    pub(crate) fn begin(&self, operation: Operation) -> Result<BusyGuard> {
        self.busy
            .try_begin(operation)
            .ok_or(BaymaxError::Busy(operation))
    }

    pub(crate) fn ticket(&self) -> Result<Ticket> {
        self.state
            .lock()
            .ticket()
            .ok_or(BaymaxError::NoPatientSelected)
    }

    /// Run the summary fetch a selection change calls for
    pub(crate) async fn refresh_after_selection(&self) {
        if let Err(e) = self.refresh_summary().await {
            log::debug!("summary refresh skipped: {e}");
        }
    }
}
