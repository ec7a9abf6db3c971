//! AI summary command

use super::config::CommandContext;
use super::patients::open_patient;
use super::{output, view};
use anyhow::Result;

/// Generate the AI summary of a patient
pub async fn generate(ctx: CommandContext, patient: Option<String>) -> Result<()> {
    let dashboard = ctx.connection.connect()?;
    open_patient(&dashboard, patient.as_deref()).await?;

    let summary = dashboard.request_ai_summary().await?;

    output::print_result(
        &serde_json::to_value(&summary)?,
        &view::ai_summary(&summary),
        ctx.output_format,
        ctx.output_file.as_deref(),
    )
}
