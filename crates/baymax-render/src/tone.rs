//! Color coding for assessments and interactions

use baymax_model::{DecisionKind, DischargeStatus, Interaction};
use colored::{Color, ColoredString, Colorize};

/// Color of a discharge decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DischargeTone {
    Green,
    Red,
    Blue,
}

impl DischargeTone {
    pub fn of(status: &DischargeStatus) -> Self {
        match status.decision_kind() {
            DecisionKind::Approved => Self::Green,
            DecisionKind::Refused => Self::Red,
            DecisionKind::Other => Self::Blue,
        }
    }

    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Green => "#16a34a",
            Self::Red => "#dc2626",
            Self::Blue => "#2563eb",
        }
    }

    pub const fn color(&self) -> Color {
        match self {
            Self::Green => Color::Green,
            Self::Red => Color::Red,
            Self::Blue => Color::Blue,
        }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        text.color(self.color()).bold()
    }
}

/// Severity tag of a drug interaction, read from its description
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InteractionSeverity {
    Other,
    Moderate,
    Major,
}

impl InteractionSeverity {
    /// Classify by case-insensitive substring; `major` wins over `moderate`
    pub fn classify(description: &str) -> Self {
        let lower = description.to_lowercase();
        if lower.contains("major") {
            Self::Major
        } else if lower.contains("moderate") {
            Self::Moderate
        } else {
            Self::Other
        }
    }

    pub fn of(interaction: &Interaction) -> Self {
        Self::classify(&interaction.interaction)
    }

    pub const fn hex(&self) -> &'static str {
        match self {
            Self::Major => "#e74c3c",
            Self::Moderate => "#e67e22",
            Self::Other => "#3498db",
        }
    }

    pub const fn color(&self) -> Color {
        match self {
            Self::Major => Color::Red,
            Self::Moderate => Color::TrueColor {
                r: 0xe6,
                g: 0x7e,
                b: 0x22,
            },
            Self::Other => Color::Blue,
        }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        text.color(self.color())
    }
}
