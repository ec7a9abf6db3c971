//! Baymax clinical dashboard client
//!
//! This crate bundles the Baymax workspace:
//! - The data model of the clinical API
//! - The HTTP client and its [`client::ClinicalApi`] seam
//! - The [`Dashboard`] session that sequences requests and reconciles results
//! - Presentation helpers for summaries, assessments and interactions
//!
//! # Example
//!
//! ```ignore
//! use baymax::{ClientConfig, Dashboard, HttpClinicalApi};
//! use std::sync::Arc;
//!
//! let api = HttpClinicalApi::new(ClientConfig::new("http://localhost:8000")?)?;
//! let dashboard = Dashboard::new(Arc::new(api));
//! dashboard.load_patients(None).await?;
//! dashboard.set_drug_input("Warfarin");
//! let result = dashboard.submit_drug_order().await?;
//! ```

pub use baymax_client as client;
pub use baymax_dashboard as dashboard;
pub use baymax_diagnostics as diagnostics;
pub use baymax_model as model;
pub use baymax_render as render;

pub use baymax_client::{ClientConfig, HttpClinicalApi};
pub use baymax_dashboard::{Companion, Dashboard};
pub use baymax_diagnostics::{BaymaxError, Result};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
