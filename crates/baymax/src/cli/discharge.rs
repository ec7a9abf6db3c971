//! Discharge command

use super::config::CommandContext;
use super::patients::open_patient;
use super::{output, view};
use anyhow::Result;

/// Evaluate discharge eligibility of a patient
pub async fn evaluate(ctx: CommandContext, patient: Option<String>) -> Result<()> {
    let dashboard = ctx.connection.connect()?;
    open_patient(&dashboard, patient.as_deref()).await?;

    let status = dashboard.evaluate_discharge().await?;
    if status.is_failure() {
        eprintln!("{}", output::format_warning("The discharge service did not answer"));
    }

    output::print_result(
        &serde_json::to_value(&status)?,
        &view::discharge(&status),
        ctx.output_format,
        ctx.output_file.as_deref(),
    )
}
