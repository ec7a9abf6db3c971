//! Terminal views of dashboard panels

use baymax_dashboard::DirectoryState;
use baymax_model::{AiSummary, DischargeStatus, DrugOrderResult, PatientRecord, SummaryPanel};
use baymax_render::{
    DischargeTone, InteractionSeverity, ai_summary_entries, format_free_text, summary_sections,
};
use chrono::NaiveDate;
use colored::Colorize;
use std::fmt::Write;

/// Numbered patient list; the selected patient is marked
pub fn patients(records: &[PatientRecord], selected: Option<&str>) -> String {
    if records.is_empty() {
        return "No patients found.".to_string();
    }
    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        let marker = if Some(record.id()) == selected { "*" } else { " " };
        let _ = writeln!(
            out,
            "{marker} {:>3}. {}  {}",
            i + 1,
            record.display_name().bold(),
            record.id().dimmed()
        );
    }
    out
}

/// Directory panel, including the blocking error state
pub fn directory(state: &DirectoryState, selected: Option<&str>) -> String {
    match state {
        DirectoryState::NotLoaded | DirectoryState::Loading => "Loading patients...".to_string(),
        DirectoryState::Failed(message) => message.red().to_string(),
        DirectoryState::Loaded(records) => patients(records, selected),
    }
}

pub fn summary(panel: &SummaryPanel, patient: Option<&PatientRecord>, today: NaiveDate) -> String {
    let Some(patient) = patient else {
        return "No patient selected.".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} {}", "Selected:".bold(), patient.display_name());
    match panel {
        SummaryPanel::Empty | SummaryPanel::Loading => {
            let _ = writeln!(out, "{}", "Loading summary...".blue());
        }
        SummaryPanel::Failed { error } => {
            let _ = writeln!(out, "{}", error.red());
        }
        SummaryPanel::Ready(summary) => {
            for section in summary_sections(summary, today) {
                let _ = writeln!(out, "\n{}", section.title.bold().underline());
                for item in &section.items {
                    let _ = writeln!(out, "  {}", item.text);
                    if let Some(detail) = &item.detail {
                        let _ = writeln!(out, "    {}", detail.dimmed());
                    }
                }
            }
        }
    }
    out
}

pub fn drug_order(result: &DrugOrderResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Drug Interaction Check".bold().underline());
    if result.interactions().is_empty() {
        let _ = writeln!(out, "  {}", "No known interactions. All clear!".green());
    }
    for interaction in result.interactions() {
        let severity = InteractionSeverity::of(interaction);
        let _ = writeln!(out, "  - {}", severity.paint(&interaction.interaction));
    }

    if let Some(contraindications) = result.contraindications() {
        let _ = writeln!(out, "\n{}", "Contraindications".bold().underline());
        if contraindications.is_empty() {
            let _ = writeln!(out, "  {}", "No contraindications found.".green());
        }
        for item in contraindications {
            let _ = writeln!(out, "  - {}", item.text.red());
            let _ = writeln!(out, "    Similarity Score: {:.2}", item.similarity);
        }
    }

    if let Some(assessment) = result.ai_assessment() {
        let _ = writeln!(out, "\n{}", "AI Assessment".bold().underline());
        out.push_str(&format_free_text(assessment).to_terminal());
    }
    out
}

pub fn discharge(status: &DischargeStatus) -> String {
    format!(
        "{} {}\n{} {}\n",
        "Decision:".bold(),
        DischargeTone::of(status).paint(&status.decision),
        "Justification:".bold(),
        status.justification
    )
}

pub fn ai_summary(summary: &AiSummary) -> String {
    let mut out = String::new();
    for entry in ai_summary_entries(summary) {
        if let Some(heading) = &entry.heading {
            let _ = writeln!(out, "{}", heading.bold());
        }
        let _ = writeln!(out, "{}\n", entry.body);
    }
    out
}
