//! Baymax presentation helpers
//!
//! Pure functions that turn clinical API payloads into displayable text:
//! - [`age_from_birth_date`] for demographics
//! - [`format_free_text`] for the AI assessment with its recommendation block
//! - [`DischargeTone`] and [`InteractionSeverity`] for color coding
//! - [`summary_sections`] and [`ai_summary_entries`] for the summary panels
//!
//! Nothing here performs I/O or reads the clock except [`age_today`].

pub mod age;
pub mod free_text;
pub mod sections;
pub mod tone;

pub use age::*;
pub use free_text::*;
pub use sections::*;
pub use tone::*;
