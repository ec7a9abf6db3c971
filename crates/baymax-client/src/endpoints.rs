//! Backend routes

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

/// Logical endpoints of the clinical API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListPatients,
    UploadRecord,
    Summary,
    SubmitDrugOrder,
    MatchInteractions,
    Discharge,
    AiSummary,
}

impl Endpoint {
    /// Path relative to the configured base URL
    pub const fn path(&self) -> &'static str {
        match self {
            Endpoint::ListPatients => "list-all-patients",
            Endpoint::UploadRecord => "upload-fhir",
            Endpoint::Summary => "summary",
            Endpoint::SubmitDrugOrder => "submit-drug-order",
            Endpoint::MatchInteractions => "match",
            Endpoint::Discharge => "discharge",
            Endpoint::AiSummary => "ai-summary",
        }
    }

    pub const fn method(&self) -> Method {
        match self {
            Endpoint::ListPatients => Method::Get,
            _ => Method::Post,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}
