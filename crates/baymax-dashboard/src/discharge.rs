//! Discharge evaluation

use crate::Dashboard;
use baymax_diagnostics::{BaymaxError, Operation, Result};
use baymax_model::{DISCHARGE_ERROR_JUSTIFICATION, DischargeStatus};

impl Dashboard {
    /// Ask the backend whether the selected patient can be discharged.
    ///
    /// Any failure produces [`DischargeStatus::failed`], so the result is
    /// always displayable.
    pub async fn evaluate_discharge(&self) -> Result<DischargeStatus> {
        let _guard = self.begin(Operation::DischargeCheck)?;
        let ticket = self.ticket()?;
        self.state.lock().discharge = None;

        let status = match self.api.evaluate_discharge(&ticket.patient_id).await {
            Ok(status) => status,
            Err(e) => {
                let err =
                    BaymaxError::discharge(DISCHARGE_ERROR_JUSTIFICATION).with_context(e.to_string());
                log::warn!("{err}: {e}");
                DischargeStatus::failed()
            }
        };

        let mut state = self.state.lock();
        if !state.is_current(&ticket) {
            return Err(BaymaxError::Superseded {
                patient_id: ticket.patient_id,
            });
        }
        state.discharge = Some(status.clone());
        Ok(status)
    }
}
