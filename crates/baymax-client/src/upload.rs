//! Patient record upload

use crate::ApiError;
use std::path::Path;

/// Only files with this suffix may be uploaded
pub const UPLOAD_SUFFIX: &str = ".json";

/// A validated patient record file ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatientUpload {
    file_name: String,
    bytes: Vec<u8>,
}

impl PatientUpload {
    /// Build an upload from a name and its content.
    ///
    /// Names without the `.json` suffix are rejected before anything is sent.
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, ApiError> {
        let file_name = file_name.into();
        validate_file_name(&file_name)?;
        Ok(Self { file_name, bytes })
    }

    /// Read and validate a file from disk. The extension is checked first.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| ApiError::InvalidUpload(format!("{} has no file name", path.display())))?
            .to_string();
        validate_file_name(&file_name)?;

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ApiError::InvalidUpload(format!("failed to read {}: {e}", path.display()))
        })?;
        Ok(Self { file_name, bytes })
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

fn validate_file_name(file_name: &str) -> Result<(), ApiError> {
    if file_name.ends_with(UPLOAD_SUFFIX) {
        Ok(())
    } else {
        Err(ApiError::InvalidUpload(
            "Please upload a valid .json file.".to_string(),
        ))
    }
}
