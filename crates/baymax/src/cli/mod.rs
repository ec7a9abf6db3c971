//! CLI functionality for the Baymax tool
//!
//! This module contains:
//! - Connection settings and patient resolution
//! - One-shot commands (patients, summary, order, discharge, AI summary, upload)
//! - The interactive dashboard session
//! - Output formatting and terminal views

pub mod ai_summary;
pub mod config;
pub mod discharge;
pub mod order;
pub mod output;
pub mod patients;
pub mod repl;
pub mod summary;
pub mod upload;
pub mod view;
