//! Baymax data model
//!
//! This crate provides:
//! - Patient directory entries and display-name derivation
//! - Clinical summary documents
//! - Drug order requests and the primary/fallback result union
//! - Discharge and AI summary assessments
//!
//! All types mirror the JSON shapes of the remote clinical API. Nothing here
//! performs I/O.

pub mod ai_summary;
pub mod discharge;
pub mod drug_order;
pub mod patient;
pub mod request;
pub mod summary;

pub use ai_summary::*;
pub use discharge::*;
pub use drug_order::*;
pub use patient::*;
pub use request::*;
pub use summary::*;
