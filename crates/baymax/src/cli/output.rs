//! Output formatting utilities

use anyhow::{Context, Result};
use baymax_diagnostics::BaymaxError;
use colored::Colorize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, IsTerminal, Write};
use std::path::Path;
use tabled::builder::Builder;
use tabled::settings::Style;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Terminal view
    #[default]
    Text,
    Json,
    JsonPretty,
    Table,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "pretty" | "json-pretty" => Self::JsonPretty,
            "table" => Self::Table,
            _ => Self::Text,
        }
    }

    pub fn from_option(s: Option<&str>) -> Self {
        s.map(Self::parse).unwrap_or_default()
    }
}

/// Set up color output based on user preference
pub fn setup_colors(mode: &str) {
    match mode.to_lowercase().as_str() {
        "always" => colored::control::set_override(true),
        "never" => colored::control::set_override(false),
        _ => colored::control::set_override(io::stdout().is_terminal()),
    }
}

/// Format an error for display, with the help text of its error code
pub fn format_error(error: &anyhow::Error) -> String {
    let mut out = format!("{} {}", "Error:".red().bold(), error);
    let help = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<BaymaxError>())
        .and_then(|err| err.code().info().help);
    if let Some(help) = help {
        out.push_str(&format!("\n  {} {}", "help:".cyan().bold(), help));
    }
    out
}

/// Format a warning for display
pub fn format_warning(warning: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), warning)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Write output to a file or stdout
pub fn write_output(content: &str, output_file: Option<&Path>) -> Result<()> {
    if let Some(path) = output_file {
        let mut file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        file.write_all(content.as_bytes())
            .with_context(|| format!("Failed to write to output file: {}", path.display()))?;
        eprintln!(
            "{}",
            format_success(&format!("Output written to {}", path.display()))
        );
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format JSON value for output
pub fn format_json(value: &Value, pretty: bool) -> Result<String> {
    if pretty {
        serde_json::to_string_pretty(value).context("Failed to serialize JSON")
    } else {
        serde_json::to_string(value).context("Failed to serialize JSON")
    }
}

/// Render a list of records, or the fields of one record, as a table.
///
/// Returns `None` for scalars and for lists that are not all objects.
pub fn format_as_table(value: &Value) -> Option<String> {
    let mut builder = Builder::default();
    match value {
        Value::Array(items) if items.is_empty() => return Some("(empty list)".to_string()),
        Value::Array(items) => {
            let Some(Value::Object(first)) = items.first() else {
                return None;
            };
            let columns: Vec<&String> = first.keys().collect();
            builder.push_record(columns.iter().map(|c| c.to_string()));
            for item in items {
                let row = item.as_object()?;
                builder.push_record(columns.iter().map(|c| cell(row.get(*c))));
            }
        }
        Value::Object(fields) => {
            builder.push_record(["Field", "Value"]);
            for (name, field) in fields {
                builder.push_record([name.clone(), cell(Some(field))]);
            }
        }
        _ => return None,
    }
    Some(builder.build().with(Style::modern()).to_string())
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => format!("[{} items]", items.len()),
        Some(other) => other.to_string(),
    }
}

/// Print a command result.
///
/// `text` is the terminal view; the JSON and table formats render `value`.
pub fn print_result(
    value: &Value,
    text: &str,
    format: OutputFormat,
    output_file: Option<&Path>,
) -> Result<()> {
    let content = match format {
        OutputFormat::Text => text.trim_end().to_string(),
        OutputFormat::Json => format_json(value, false)?,
        OutputFormat::JsonPretty => format_json(value, true)?,
        OutputFormat::Table => match format_as_table(value) {
            Some(table) => table,
            None => format_json(value, true)?,
        },
    };

    write_output(&content, output_file)
}
