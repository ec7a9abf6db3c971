//! Patient directory load and record upload

use crate::{BusyGuard, Dashboard, DirectoryState};
use baymax_client::{ApiError, PatientUpload};
use baymax_diagnostics::{BMX0001, BMX0002, BMX0003, BaymaxError, Operation, Result};
use baymax_model::PatientRecord;
use std::path::Path;

/// Blocking message shown when the directory cannot be loaded
pub const DIRECTORY_LOAD_FAILED: &str = "Failed to load patient list. Please try again later.";

pub const UPLOAD_FAILED: &str = "Failed to upload file.";

/// What a directory load does with the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    /// Select the first record and fetch its summary
    First,
    /// Keep the current selection if it is still listed
    Keep,
}

impl Dashboard {
    /// Load the patient directory.
    ///
    /// With `promote`, the matching record is moved to the front. The first
    /// record becomes the selection, and its summary is fetched if that
    /// changed the selection.
    pub async fn load_patients(&self, promote: Option<&str>) -> Result<Vec<PatientRecord>> {
        let guard = self.begin(Operation::DirectoryLoad)?;
        self.fetch_directory(guard, promote, Selection::First).await
    }

    /// Load the patient directory without selecting anyone.
    ///
    /// The current selection survives if the patient is still listed and is
    /// cleared otherwise. No summary is fetched.
    pub async fn load_directory(&self) -> Result<Vec<PatientRecord>> {
        let guard = self.begin(Operation::DirectoryLoad)?;
        self.fetch_directory(guard, None, Selection::Keep).await
    }

    /// Upload a patient record file and reload the directory with it first.
    ///
    /// Files without the `.json` suffix are rejected before any request. On
    /// failure the directory is left as it was. A directory load already in
    /// progress is waited for, since it cannot list the new file.
    pub async fn upload_patient_file(&self, path: impl AsRef<Path>) -> Result<Vec<PatientRecord>> {
        let upload = {
            let _guard = self.begin(Operation::Upload)?;
            let upload = PatientUpload::from_path(path).await.map_err(|e| match e {
                ApiError::InvalidUpload(message) => BaymaxError::upload_rejected(message),
                other => BaymaxError::upload_rejected(other.to_string()),
            })?;

            self.api.upload_patient_file(&upload).await.map_err(|e| {
                let err = BaymaxError::upload_failed(UPLOAD_FAILED).with_context(e.to_string());
                log::error!("{err}: {e}");
                err
            })?;
            log::info!("uploaded {}", upload.file_name());
            upload
        };

        let guard = self.busy.begin_when_idle(Operation::DirectoryLoad).await;
        self.fetch_directory(guard, Some(upload.file_name()), Selection::First)
            .await
    }

    async fn fetch_directory(
        &self,
        _guard: BusyGuard,
        promote: Option<&str>,
        selection: Selection,
    ) -> Result<Vec<PatientRecord>> {
        {
            let mut state = self.state.lock();
            if !matches!(state.directory, DirectoryState::Loaded(_)) {
                state.directory = DirectoryState::Loading;
            }
        }

        let directory = match self.api.list_patient_files().await {
            Ok(directory) => directory,
            Err(e) => {
                let code = match &e {
                    ApiError::Status { .. } => BMX0002,
                    ApiError::Decode { .. } => BMX0003,
                    _ => BMX0001,
                };
                let err = BaymaxError::load(code, DIRECTORY_LOAD_FAILED).with_context(e.to_string());
                log::error!("{err}: {e}");
                let mut state = self.state.lock();
                state.directory = DirectoryState::Failed(DIRECTORY_LOAD_FAILED.to_string());
                state.set_selection(None);
                return Err(err);
            }
        };

        let records = directory.records(promote);
        log::info!(
            "loaded {} patient records ({} directory entries)",
            records.len(),
            directory.patient_files.len()
        );

        let changed = {
            let mut state = self.state.lock();
            state.directory = DirectoryState::Loaded(records.clone());
            let next = match selection {
                Selection::First => records.first().map(|record| record.id().to_string()),
                Selection::Keep => state
                    .selected
                    .clone()
                    .filter(|id| records.iter().any(|record| record.id() == id)),
            };
            state.set_selection(next) && state.selected.is_some()
        };

        if changed && selection == Selection::First {
            self.refresh_after_selection().await;
        }
        Ok(records)
    }
}
