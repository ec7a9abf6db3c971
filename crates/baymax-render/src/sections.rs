//! Summary panel layout

use crate::age_from_birth_date;
use baymax_model::{AiSummary, ClinicalSummary, Measurement};
use chrono::NaiveDate;
use indexmap::IndexMap;
use serde_json::Value;

/// Placeholder for a measurement without a value
pub const NOT_AVAILABLE: &str = "N/A";

/// Allergy line when none are recorded
pub const NO_ALLERGIES: &str = "None reported";

/// A titled block of the summary panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySection {
    pub title: &'static str,
    pub items: Vec<SummaryItem>,
}

/// One line of a section with an optional secondary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryItem {
    pub text: String,
    pub detail: Option<String>,
}

impl SummaryItem {
    fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detail: None,
        }
    }

    fn with_detail(mut self, detail: Option<String>) -> Self {
        self.detail = detail;
        self
    }
}

/// Lay out a clinical summary.
///
/// Sections without data are left out, except allergies, which always
/// appear. `today` anchors the age computation.
pub fn summary_sections(summary: &ClinicalSummary, today: NaiveDate) -> Vec<SummarySection> {
    let mut sections = Vec::new();

    if let Some(demographics) = &summary.demographics {
        let birth_date = demographics.birth_date.as_deref().unwrap_or_default();
        let age = age_from_birth_date(birth_date, today)
            .map_or_else(|| NOT_AVAILABLE.to_string(), |age| age.to_string());
        sections.push(SummarySection {
            title: "Demographics",
            items: vec![
                SummaryItem::new(format!(
                    "Name: {}",
                    demographics.name.as_deref().unwrap_or_default()
                )),
                SummaryItem::new(format!(
                    "Gender: {}",
                    demographics.gender.as_deref().unwrap_or_default()
                )),
                SummaryItem::new(format!("Age: {age} ({birth_date})")),
            ],
        });
    }

    if let Some(medications) = summary.medications_all_time.as_ref().filter(|m| !m.is_empty()) {
        sections.push(SummarySection {
            title: "Medications",
            items: medications
                .iter()
                .map(|med| {
                    SummaryItem::new(format!(
                        "{} ({})",
                        med.medication,
                        med.status.as_deref().unwrap_or("unknown")
                    ))
                })
                .collect(),
        });
    }

    if let Some(conditions) = summary.conditions_all_time.as_ref().filter(|c| !c.is_empty()) {
        sections.push(SummarySection {
            title: "Conditions",
            items: conditions
                .iter()
                .map(|cond| {
                    SummaryItem::new(cond.code.clone())
                        .with_detail(cond.onset.as_deref().map(|d| format!("Onset: {}", short_date(d))))
                })
                .collect(),
        });
    }

    if let Some(vitals) = &summary.recent_vitals {
        sections.push(measurement_section("Recent Vitals", vitals));
    }
    if let Some(labs) = &summary.recent_labs {
        sections.push(measurement_section("Recent Lab Results", labs));
    }

    let allergies = match summary.allergies.as_deref() {
        Some(list) if !list.is_empty() => list.join(", "),
        _ => NO_ALLERGIES.to_string(),
    };
    sections.push(SummarySection {
        title: "Allergies",
        items: vec![SummaryItem::new(allergies)],
    });

    sections
}

fn measurement_section(
    title: &'static str,
    measurements: &IndexMap<String, Measurement>,
) -> SummarySection {
    SummarySection {
        title,
        items: measurements
            .iter()
            .map(|(name, measurement)| {
                let value = measurement
                    .value
                    .as_ref()
                    .map_or_else(|| NOT_AVAILABLE.to_string(), display_value);
                SummaryItem::new(format!("{name}: {value}")).with_detail(
                    measurement
                        .date
                        .as_deref()
                        .map(|d| format!("Date: {}", short_date(d))),
                )
            })
            .collect(),
    }
}

/// Calendar part of an ISO timestamp
fn short_date(raw: &str) -> &str {
    raw.get(..10).unwrap_or(raw)
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// One displayed block of an AI summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiSummaryEntry {
    /// Section name; `None` for a plain-text summary
    pub heading: Option<String>,
    pub body: String,
}

/// Flatten an AI summary for display.
///
/// Strings pass through, objects and arrays become pretty-printed JSON,
/// other scalars use their textual form.
pub fn ai_summary_entries(summary: &AiSummary) -> Vec<AiSummaryEntry> {
    match summary {
        AiSummary::Text(text) => vec![AiSummaryEntry {
            heading: None,
            body: text.clone(),
        }],
        AiSummary::Sections(sections) => sections
            .iter()
            .map(|(name, value)| AiSummaryEntry {
                heading: Some(name.clone()),
                body: flatten_value(value),
            })
            .collect(),
    }
}

fn flatten_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Object(_) | Value::Array(_) => {
            serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}
