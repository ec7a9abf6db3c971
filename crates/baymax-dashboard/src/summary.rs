//! Patient summary fetch

use crate::{Dashboard, DashboardState, Ticket};
use baymax_diagnostics::{BaymaxError, Operation, Result};
use baymax_model::SummaryPanel;
use parking_lot::Mutex;
use std::sync::Arc;

/// Panel text when the summary cannot be fetched
pub const SUMMARY_LOAD_FAILED: &str = "Failed to load summary.";

/// Clears the in-flight marker if the fetch future is dropped early
struct InFlight {
    state: Arc<Mutex<DashboardState>>,
    epoch: u64,
}

impl Drop for InFlight {
    fn drop(&mut self) {
        let mut state = self.state.lock();
        if state.summary_in_flight == Some(self.epoch) {
            state.summary_in_flight = None;
        }
    }
}

impl Dashboard {
    /// Fetch the clinical summary of the selected patient.
    ///
    /// A failed fetch yields [`SummaryPanel::Failed`]; it is not retried.
    /// A second call while the fetch for the same selection is outstanding
    /// is rejected, and a response that arrives after the selection changed
    /// is discarded.
    pub async fn refresh_summary(&self) -> Result<SummaryPanel> {
        let (ticket, _in_flight) = {
            let mut state = self.state.lock();
            let ticket = state.ticket().ok_or(BaymaxError::NoPatientSelected)?;
            if state.summary_in_flight == Some(ticket.epoch) {
                return Err(BaymaxError::Busy(Operation::SummaryFetch));
            }
            state.summary_in_flight = Some(ticket.epoch);
            state.summary = SummaryPanel::Loading;
            let guard = InFlight {
                state: Arc::clone(&self.state),
                epoch: ticket.epoch,
            };
            (ticket, guard)
        };

        let panel = match self.api.fetch_summary(&ticket.patient_id).await {
            Ok(summary) => SummaryPanel::Ready(summary),
            Err(e) => {
                let err = BaymaxError::summary(SUMMARY_LOAD_FAILED).with_context(e.to_string());
                log::warn!("{err} ({}): {e}", ticket.patient_id);
                SummaryPanel::Failed {
                    error: SUMMARY_LOAD_FAILED.to_string(),
                }
            }
        };

        self.apply_summary(&ticket, panel)
    }

    fn apply_summary(&self, ticket: &Ticket, panel: SummaryPanel) -> Result<SummaryPanel> {
        let mut state = self.state.lock();
        if !state.is_current(ticket) {
            log::debug!("discarding stale summary for {}", ticket.patient_id);
            return Err(BaymaxError::Superseded {
                patient_id: ticket.patient_id.clone(),
            });
        }
        state.summary = panel.clone();
        Ok(panel)
    }
}
