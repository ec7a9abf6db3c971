//! Baymax clinical API client
//!
//! This crate provides:
//! - The [`ClinicalApi`] trait, the seam between the dashboard and the backend
//! - [`HttpClinicalApi`], its `reqwest` implementation
//! - Endpoint routing, client configuration and upload validation

pub mod config;
pub mod endpoints;
pub mod http;
pub mod provider;
pub mod upload;

pub use config::*;
pub use endpoints::*;
pub use http::*;
pub use provider::*;
pub use upload::*;
