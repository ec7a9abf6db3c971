//! Baymax error codes following a structured numbering system
//!
//! Error code ranges:
//! - BMX0001-BMX0099: Directory errors (listing patient records)
//! - BMX0100-BMX0199: Summary errors (clinical summary fetch)
//! - BMX0200-BMX0299: Drug order errors (primary and fallback submission)
//! - BMX0300-BMX0399: Assessment errors (discharge, AI summary)
//! - BMX0400-BMX0499: System errors (network, configuration, upload)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BMX{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Directory errors (0001-0099)
    map.insert(1, ErrorInfo::new("Patient directory request failed")
        .with_help("Check that the API URL is reachable (--api-url or BAYMAX_API_BASE_URL)"));
    map.insert(2, ErrorInfo::new("Patient directory returned an error status"));
    map.insert(3, ErrorInfo::new("Invalid JSON response from server")
        .with_help("The directory endpoint must return {\"patient_files\": [...]}"));
    map.insert(4, ErrorInfo::new("Unknown patient identifier"));

    // Summary errors (0100-0199)
    map.insert(100, ErrorInfo::new("Failed to load summary"));

    // Drug order errors (0200-0299)
    map.insert(200, ErrorInfo::new("Failed to check drug interaction")
        .with_help("Both the primary and the fallback endpoint failed; the typed drug name was kept"));
    map.insert(201, ErrorInfo::new("Drug name is blank"));

    // Assessment errors (0300-0399)
    map.insert(300, ErrorInfo::new("Failed to evaluate discharge"));
    map.insert(301, ErrorInfo::new("Failed to generate summary"));

    // System errors (0400-0499)
    map.insert(400, ErrorInfo::new("Internal error"));
    map.insert(402, ErrorInfo::new("Configuration error")
        .with_help("The API URL must be an absolute http(s) URL"));
    map.insert(404, ErrorInfo::new("Upload rejected")
        .with_help("Only .json patient record files can be uploaded"));
    map.insert(405, ErrorInfo::new("Upload failed"));

    map
});

// Directory errors
pub const BMX0001: ErrorCode = ErrorCode::new(1);
pub const BMX0002: ErrorCode = ErrorCode::new(2);
pub const BMX0003: ErrorCode = ErrorCode::new(3);
pub const BMX0004: ErrorCode = ErrorCode::new(4);

// Summary errors
pub const BMX0100: ErrorCode = ErrorCode::new(100);

// Drug order errors
pub const BMX0200: ErrorCode = ErrorCode::new(200);
pub const BMX0201: ErrorCode = ErrorCode::new(201);

// Assessment errors
pub const BMX0300: ErrorCode = ErrorCode::new(300);
pub const BMX0301: ErrorCode = ErrorCode::new(301);

// System errors
pub const BMX0400: ErrorCode = ErrorCode::new(400);
pub const BMX0402: ErrorCode = ErrorCode::new(402);
pub const BMX0404: ErrorCode = ErrorCode::new(404);
pub const BMX0405: ErrorCode = ErrorCode::new(405);
