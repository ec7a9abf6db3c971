//! Drug order submission

use crate::Dashboard;
use baymax_diagnostics::{BaymaxError, Operation, Result};
use baymax_model::{DrugOrderRequest, DrugOrderResult};

/// Banner text when both drug order routes fail
pub const DRUG_ORDER_FAILED: &str = "Failed to check drug interaction. Please try again later.";

impl Dashboard {
    /// Check the typed drug against the selected patient.
    ///
    /// The primary route is tried first; if it fails for any reason the same
    /// payload is sent once to the fallback route. On success the results
    /// replace the previous ones and the drug input is cleared. If both fail,
    /// the banner is set and the previous results and the input are kept.
    pub async fn submit_drug_order(&self) -> Result<DrugOrderResult> {
        let _guard = self.begin(Operation::DrugSubmission)?;
        let (ticket, order) = {
            let state = self.state.lock();
            let ticket = state.ticket().ok_or(BaymaxError::NoPatientSelected)?;
            let order = DrugOrderRequest::new(ticket.patient_id.clone(), &state.drug_input)
                .ok_or(BaymaxError::BlankDrugName)?;
            (ticket, order)
        };

        log::debug!(
            "submitting {} for {}",
            order.new_medication,
            ticket.patient_id
        );
        let outcome = match self.api.submit_drug_order(&order).await {
            Ok(response) => Ok(DrugOrderResult::from(response)),
            Err(primary) => {
                log::warn!("primary drug order route failed, falling back: {primary}");
                match self.api.match_interactions(&order).await {
                    Ok(response) => Ok(DrugOrderResult::from(response)),
                    Err(fallback) => {
                        log::error!("fallback drug order route failed: {fallback}");
                        Err(BaymaxError::submission(
                            primary.to_string(),
                            fallback.to_string(),
                        ))
                    }
                }
            }
        };

        let mut state = self.state.lock();
        if !state.is_current(&ticket) {
            log::debug!("discarding drug order result for {}", ticket.patient_id);
            return Err(BaymaxError::Superseded {
                patient_id: ticket.patient_id,
            });
        }
        match outcome {
            Ok(result) => {
                state.drug_order = Some(result.clone());
                state.drug_input.clear();
                state.banner = None;
                Ok(result)
            }
            Err(err) => {
                state.banner = Some(DRUG_ORDER_FAILED.to_string());
                Err(err)
            }
        }
    }
}
