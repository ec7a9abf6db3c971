//! Upload command

use super::config::CommandContext;
use super::patients::records_json;
use super::{output, view};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Upload a patient record and list the directory with it first
pub async fn upload(ctx: CommandContext, file: PathBuf) -> Result<()> {
    let dashboard = ctx.connection.connect()?;
    let records = dashboard
        .upload_patient_file(&file)
        .await
        .with_context(|| format!("Failed to upload {}", file.display()))?;

    eprintln!("{}", output::format_success("File uploaded successfully."));
    let selected = dashboard.snapshot().selected;
    output::print_result(
        &records_json(&records),
        &view::patients(&records, selected.as_deref()),
        ctx.output_format,
        ctx.output_file.as_deref(),
    )
}
