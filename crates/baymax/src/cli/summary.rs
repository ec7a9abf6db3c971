//! Summary command

use super::config::CommandContext;
use super::patients::open_patient;
use super::{output, view};
use anyhow::Result;
use baymax_model::SummaryPanel;
use chrono::Local;
use serde_json::{Value, json};

/// Show the clinical summary of a patient
pub async fn show(ctx: CommandContext, patient: Option<String>) -> Result<()> {
    let dashboard = ctx.connection.connect()?;
    let record = open_patient(&dashboard, patient.as_deref()).await?;
    let panel = dashboard.refresh_summary().await?;

    let value = match &panel {
        SummaryPanel::Ready(summary) => serde_json::to_value(summary)?,
        SummaryPanel::Failed { error } => json!({"error": error}),
        SummaryPanel::Empty | SummaryPanel::Loading => Value::Null,
    };
    let text = view::summary(&panel, Some(&record), Local::now().date_naive());

    output::print_result(
        &value,
        &text,
        ctx.output_format,
        ctx.output_file.as_deref(),
    )
}
