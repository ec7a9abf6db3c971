//! AI summary request

use crate::Dashboard;
use baymax_diagnostics::{BaymaxError, Operation, Result};
use baymax_model::{AI_SUMMARY_FAILED, AiSummary};

impl Dashboard {
    /// Generate the AI summary of the selected patient.
    ///
    /// Failures yield the "Failed to generate summary." text and an empty
    /// answer yields "No summary available.".
    pub async fn request_ai_summary(&self) -> Result<AiSummary> {
        let _guard = self.begin(Operation::AiSummary)?;
        let ticket = self.ticket()?;
        self.state.lock().ai_summary = None;

        let summary = match self.api.generate_ai_summary(&ticket.patient_id).await {
            Ok(response) => AiSummary::from_response(response),
            Err(e) => {
                let err = BaymaxError::ai_summary(AI_SUMMARY_FAILED).with_context(e.to_string());
                log::warn!("{err}: {e}");
                AiSummary::failed()
            }
        };

        let mut state = self.state.lock();
        if !state.is_current(&ticket) {
            return Err(BaymaxError::Superseded {
                patient_id: ticket.patient_id,
            });
        }
        state.ai_summary = Some(summary.clone());
        Ok(summary)
    }
}
