//! Shared test utilities for dashboard tests

#![allow(dead_code)]

pub mod mocks;

use baymax_dashboard::Dashboard;
use mocks::MockClinicalApi;
use std::sync::Arc;

/// Dashboard over a fresh mock API
pub fn dashboard() -> (Dashboard, Arc<MockClinicalApi>) {
    let api = Arc::new(MockClinicalApi::new());
    (Dashboard::new(api.clone()), api)
}

/// Dashboard with a loaded directory and the first patient selected
pub async fn loaded_dashboard(files: &[&str]) -> (Dashboard, Arc<MockClinicalApi>) {
    let (dashboard, api) = dashboard();
    api.set_directory(files);
    dashboard.load_patients(None).await.unwrap();
    (dashboard, api)
}
