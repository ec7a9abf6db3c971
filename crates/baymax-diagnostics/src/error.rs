//! Baymax error types

use crate::{
    BMX0004, BMX0100, BMX0200, BMX0201, BMX0300, BMX0301, BMX0400, BMX0404, BMX0405, ErrorCode,
    Operation,
};
use thiserror::Error;

/// Main Baymax error type
///
/// Every network or decode failure is converted into one of these variants at
/// the operation boundary, so nothing escapes as an unhandled failure.
#[derive(Debug, Clone, Error)]
pub enum BaymaxError {
    /// Directory fetch or parse failure; blocks the patient selector
    #[error("{code}: {message}")]
    Load {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Summary fetch failure; rendered inline in the summary panel
    #[error("{code}: {message}")]
    Summary {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Both drug order endpoints failed
    #[error("{code}: {message}")]
    Submission {
        code: ErrorCode,
        message: String,
        primary: String,
        fallback: String,
    },

    /// Discharge evaluation failure
    #[error("{code}: {message}")]
    Discharge {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// AI summary failure
    #[error("{code}: {message}")]
    AiSummary {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Upload rejected locally or by the backend
    #[error("{code}: {message}")]
    Upload {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Configuration error
    #[error("{code}: {message}")]
    System {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// The operation is already outstanding
    #[error("{0} is already in progress")]
    Busy(Operation),

    /// The operation needs a selected patient
    #[error("No patient selected")]
    NoPatientSelected,

    /// The drug order has no drug name
    #[error("{code}: Drug name is blank", code = BMX0201)]
    BlankDrugName,

    /// The identifier is not in the loaded directory
    #[error("{code}: Unknown patient: {0}", code = BMX0004)]
    UnknownPatient(String),

    /// The selection changed while the request was in flight
    #[error("Response for {patient_id} was discarded because the selection changed")]
    Superseded { patient_id: String },
}

impl BaymaxError {
    /// Create a directory load error
    pub fn load(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Load {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Create a summary error
    pub fn summary(message: impl Into<String>) -> Self {
        Self::Summary {
            code: BMX0100,
            message: message.into(),
            context: None,
        }
    }

    /// Create a drug order error from the primary and fallback failures
    pub fn submission(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self::Submission {
            code: BMX0200,
            message: "Failed to check drug interaction. Please try again later.".to_string(),
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    /// Create a discharge error
    pub fn discharge(message: impl Into<String>) -> Self {
        Self::Discharge {
            code: BMX0300,
            message: message.into(),
            context: None,
        }
    }

    /// Create an AI summary error
    pub fn ai_summary(message: impl Into<String>) -> Self {
        Self::AiSummary {
            code: BMX0301,
            message: message.into(),
            context: None,
        }
    }

    /// Create an upload error for a file rejected before any request
    pub fn upload_rejected(message: impl Into<String>) -> Self {
        Self::Upload {
            code: BMX0404,
            message: message.into(),
            context: None,
        }
    }

    /// Create an upload error for a failed request
    pub fn upload_failed(message: impl Into<String>) -> Self {
        Self::Upload {
            code: BMX0405,
            message: message.into(),
            context: None,
        }
    }

    /// Create a system error, e.g. for invalid configuration
    pub fn system(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::System {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Attach context (usually the underlying transport error)
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        match &mut self {
            Self::Load { context, .. }
            | Self::Summary { context, .. }
            | Self::Discharge { context, .. }
            | Self::AiSummary { context, .. }
            | Self::Upload { context, .. }
            | Self::System { context, .. } => *context = Some(ctx.into()),
            _ => {}
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Load { code, .. }
            | Self::Summary { code, .. }
            | Self::Submission { code, .. }
            | Self::Discharge { code, .. }
            | Self::AiSummary { code, .. }
            | Self::Upload { code, .. }
            | Self::System { code, .. } => *code,
            Self::BlankDrugName => BMX0201,
            Self::UnknownPatient(_) => BMX0004,
            Self::Busy(_) | Self::NoPatientSelected | Self::Superseded { .. } => BMX0400,
        }
    }

    /// Get the context, if any
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Load { context, .. }
            | Self::Summary { context, .. }
            | Self::Discharge { context, .. }
            | Self::AiSummary { context, .. }
            | Self::Upload { context, .. }
            | Self::System { context, .. } => context.as_deref(),
            _ => None,
        }
    }

    /// True for requests that were skipped rather than attempted
    pub fn is_skipped(&self) -> bool {
        matches!(
            self,
            Self::Busy(_) | Self::NoPatientSelected | Self::BlankDrugName | Self::Superseded { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BMX0001, BMX0402};

    #[test]
    fn test_error_display_carries_code() {
        let err = BaymaxError::load(BMX0001, "Failed to load patient list. Please try again later.")
            .with_context("HTTP error! Status: 502");

        assert!(err.to_string().starts_with("BMX0001"));
        assert_eq!(err.context(), Some("HTTP error! Status: 502"));
    }

    #[test]
    fn test_submission_keeps_both_causes() {
        let err = BaymaxError::submission("status 500", "connection refused");
        match &err {
            BaymaxError::Submission { primary, fallback, .. } => {
                assert_eq!(primary, "status 500");
                assert_eq!(fallback, "connection refused");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.code(), BMX0200);
    }

    #[test]
    fn test_help_follows_code() {
        let err = BaymaxError::system(BMX0402, "Invalid API URL: nope");
        assert_eq!(err.code(), BMX0402);
        assert!(err.code().info().help.is_some());
        assert!(BaymaxError::NoPatientSelected.code().info().help.is_none());
    }

    #[test]
    fn test_skipped_variants() {
        assert!(BaymaxError::Busy(Operation::DischargeCheck).is_skipped());
        assert!(BaymaxError::NoPatientSelected.is_skipped());
        assert!(!BaymaxError::discharge("boom").is_skipped());
        assert_eq!(
            BaymaxError::Busy(Operation::AiSummary).to_string(),
            "AI summary is already in progress"
        );
    }
}
