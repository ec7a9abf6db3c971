//! Patient listing and selection

use super::config::CommandContext;
use super::{output, view};
use anyhow::{Context, Result, bail};
use baymax_dashboard::Dashboard;
use baymax_model::PatientRecord;
use serde_json::{Value, json};

/// Find a record by id, id without `.json`, 1-based position or display name
pub fn resolve_patient<'a>(records: &'a [PatientRecord], query: &str) -> Option<&'a PatientRecord> {
    let query = query.trim();
    if let Some(record) = records
        .iter()
        .find(|r| r.id() == query || r.id().strip_suffix(".json") == Some(query))
    {
        return Some(record);
    }
    if let Ok(position) = query.parse::<usize>() {
        return position.checked_sub(1).and_then(|i| records.get(i));
    }
    records
        .iter()
        .find(|r| r.display_name().eq_ignore_ascii_case(query))
}

/// Load the directory and select the requested patient, or the first one.
///
/// No summary is fetched; commands that show it refresh it themselves.
pub async fn open_patient(dashboard: &Dashboard, query: Option<&str>) -> Result<PatientRecord> {
    let records = dashboard
        .load_directory()
        .await
        .context("Could not load the patient directory")?;

    let record = match query {
        Some(query) => resolve_patient(&records, query)
            .with_context(|| format!("No patient matches '{query}'"))?
            .clone(),
        None => match records.first() {
            Some(first) => first.clone(),
            None => bail!("No patients found"),
        },
    };

    dashboard.focus_patient(record.id())?;
    Ok(record)
}

pub fn records_json(records: &[PatientRecord]) -> Value {
    Value::Array(
        records
            .iter()
            .enumerate()
            .map(|(i, r)| json!({"index": i + 1, "id": r.id(), "name": r.display_name()}))
            .collect(),
    )
}

/// List the patients known to the backend
pub async fn list(ctx: CommandContext) -> Result<()> {
    let dashboard = ctx.connection.connect()?;
    let records = dashboard
        .load_patients(None)
        .await
        .context("Could not load the patient directory")?;

    output::print_result(
        &records_json(&records),
        &view::patients(&records, None),
        ctx.output_format,
        ctx.output_file.as_deref(),
    )
}
