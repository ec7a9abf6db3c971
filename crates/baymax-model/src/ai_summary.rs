//! AI-generated patient summary

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const AI_SUMMARY_FAILED: &str = "Failed to generate summary.";
pub const AI_SUMMARY_MISSING: &str = "No summary available.";

/// Body of the AI summary endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiSummaryResponse {
    #[serde(default)]
    pub summary: Option<Value>,
}

/// A displayable AI summary: plain text or named sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AiSummary {
    Text(String),
    Sections(IndexMap<String, Value>),
}

impl AiSummary {
    pub fn failed() -> Self {
        AiSummary::Text(AI_SUMMARY_FAILED.to_string())
    }

    pub fn missing() -> Self {
        AiSummary::Text(AI_SUMMARY_MISSING.to_string())
    }

    /// Normalize the `summary` field of a successful response.
    ///
    /// A missing, null, empty, `false` or zero summary counts as missing.
    /// Arrays become sections keyed by position and other scalars become text.
    pub fn from_response(response: AiSummaryResponse) -> Self {
        match response.summary {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Self::missing(),
            Some(Value::String(text)) if text.is_empty() => Self::missing(),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Self::missing(),
            Some(Value::String(text)) => AiSummary::Text(text),
            Some(Value::Object(map)) => AiSummary::Sections(map.into_iter().collect()),
            Some(Value::Array(items)) => AiSummary::Sections(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), v))
                    .collect(),
            ),
            Some(other) => AiSummary::Text(other.to_string()),
        }
    }
}
