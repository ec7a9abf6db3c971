//! AI assessment text formatting
//!
//! The assessment arrives as free text with an optional
//! `**Recommendation:**` marker. Everything before the marker is the
//! justification, everything after it the recommendation. Inside the
//! recommendation, `**x**` marks emphasis.

use colored::Colorize;
use regex::Regex;
use std::fmt::Write;
use std::sync::LazyLock;

/// Literal separating the justification from the recommendation
pub const RECOMMENDATION_MARKER: &str = "**Recommendation:**";

/// Inline style of emphasized recommendation text
pub const EMPHASIS_STYLE: &str = "color:#e74c3c;";

static EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("emphasis pattern is valid"));

/// A run of text within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Emphasis(String),
}

impl Span {
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Emphasis(text) => text,
        }
    }
}

/// One displayed line
pub type Line = Vec<Span>;

/// Assessment text split into its two blocks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedText {
    /// Lines before the marker; empty when there is nothing before it
    pub justification: Vec<String>,
    /// Lines after the marker; `None` when the marker is absent or only
    /// whitespace follows it
    pub recommendation: Option<Vec<Line>>,
}

/// Split and format an assessment.
///
/// Only the first marker splits; later occurrences stay in the
/// recommendation text.
pub fn format_free_text(text: &str) -> FormattedText {
    let (justification, recommendation) = match text.split_once(RECOMMENDATION_MARKER) {
        Some((before, after)) => (before, Some(after)),
        None => (text, None),
    };

    let justification = split_lines(justification)
        .into_iter()
        .map(str::to_string)
        .collect();

    let recommendation = recommendation
        .map(split_lines)
        .filter(|lines| !lines.is_empty())
        .map(|lines| lines.into_iter().map(emphasize).collect());

    FormattedText {
        justification,
        recommendation,
    }
}

fn split_lines(text: &str) -> Vec<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('\n').collect()
    }
}

fn emphasize(line: &str) -> Line {
    let mut spans = Vec::new();
    let mut last = 0;
    for captures in EMPHASIS.captures_iter(line) {
        let (Some(whole), Some(inner)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span::Plain(line[last..whole.start()].to_string()));
        }
        spans.push(Span::Emphasis(inner.as_str().to_string()));
        last = whole.end();
    }
    if last < line.len() {
        spans.push(Span::Plain(line[last..].to_string()));
    }
    spans
}

impl FormattedText {
    pub fn is_empty(&self) -> bool {
        self.justification.is_empty() && self.recommendation.is_none()
    }

    /// Justification as HTML, lines joined by `<br/>`
    pub fn justification_html(&self) -> Option<String> {
        if self.justification.is_empty() {
            return None;
        }
        let lines: Vec<String> = self.justification.iter().map(|l| escape_html(l)).collect();
        Some(lines.join("<br/>"))
    }

    /// Recommendation as HTML with emphasis rendered as colored `<strong>`
    pub fn recommendation_html(&self) -> Option<String> {
        let lines = self.recommendation.as_ref()?;
        let rendered: Vec<String> = lines
            .iter()
            .map(|line| {
                line.iter().fold(String::new(), |mut out, span| {
                    match span {
                        Span::Plain(text) => out.push_str(&escape_html(text)),
                        Span::Emphasis(text) => {
                            let _ = write!(
                                out,
                                "<strong style=\"{EMPHASIS_STYLE}\">{}</strong>",
                                escape_html(text)
                            );
                        }
                    }
                    out
                })
            })
            .collect();
        Some(rendered.join("<br/>"))
    }

    /// Both blocks as one HTML fragment
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Some(justification) = self.justification_html() {
            let _ = write!(html, "<div><strong>Key Concerns:</strong><br/>{justification}</div>");
        }
        if let Some(recommendation) = self.recommendation_html() {
            let _ = write!(
                html,
                "<div><strong>Recommendation:</strong><br/>{recommendation}</div>"
            );
        }
        html
    }

    /// Both blocks for a terminal, emphasis in bold red
    pub fn to_terminal(&self) -> String {
        let mut out = String::new();
        if !self.justification.is_empty() {
            let _ = writeln!(out, "{}", "Key Concerns:".bold());
            for line in &self.justification {
                let _ = writeln!(out, "  {line}");
            }
        }
        if let Some(lines) = &self.recommendation {
            let _ = writeln!(out, "{}", "Recommendation:".bold());
            for line in lines {
                out.push_str("  ");
                for span in line {
                    match span {
                        Span::Plain(text) => out.push_str(text),
                        Span::Emphasis(text) => {
                            let _ = write!(out, "{}", text.red().bold());
                        }
                    }
                }
                out.push('\n');
            }
        }
        out
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
