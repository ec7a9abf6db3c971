//! Drug order command

use super::config::CommandContext;
use super::patients::open_patient;
use super::{output, view};
use anyhow::Result;
use baymax_model::{DrugOrderResult, OrderSource};
use serde_json::{Value, json};

pub fn result_json(result: &DrugOrderResult) -> Value {
    let source = match result.source() {
        OrderSource::Primary => "primary",
        OrderSource::Fallback => "fallback",
    };
    json!({
        "source": source,
        "drug_interactions": result.interactions(),
        "contraindications": result.contraindications(),
        "ai_assessment": result.ai_assessment(),
    })
}

/// Check a prospective drug against a patient's record
pub async fn submit(ctx: CommandContext, patient: Option<String>, drug: String) -> Result<()> {
    let dashboard = ctx.connection.connect()?;
    let record = open_patient(&dashboard, patient.as_deref()).await?;

    dashboard.set_drug_input(drug);
    let result = dashboard.submit_drug_order().await?;
    log::info!("drug order checked for {}", record.id());

    output::print_result(
        &result_json(&result),
        &view::drug_order(&result),
        ctx.output_format,
        ctx.output_file.as_deref(),
    )
}
