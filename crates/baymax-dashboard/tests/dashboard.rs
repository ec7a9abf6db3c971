//! Dashboard orchestration tests: directory, summary, assessments, upload

mod common;

use baymax_client::{ApiError, Endpoint};
use baymax_dashboard::{DIRECTORY_LOAD_FAILED, DirectoryState, SUMMARY_LOAD_FAILED};
use baymax_diagnostics::{
    BMX0001, BMX0002, BMX0003, BMX0404, BMX0405, BaymaxError, ErrorCode, Operation,
};
use baymax_model::{
    AiSummary, AiSummaryResponse, ClinicalSummary, Demographics, DischargeStatus, SummaryPanel,
};
use common::mocks::{Call, status_error};
use common::{dashboard, loaded_dashboard};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn summary_named(name: &str) -> ClinicalSummary {
    ClinicalSummary {
        demographics: Some(Demographics {
            name: Some(name.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn shown_name(panel: &SummaryPanel) -> Option<String> {
    panel.summary()?.demographics.as_ref()?.name.clone()
}

#[tokio::test]
async fn test_load_filters_and_selects_first() {
    let (dashboard, api) = dashboard();
    api.set_directory(&[
        "hospitalInformation1.json",
        "practitionerInformation1.json",
        "jane2_doe5.json",
        "readme.json",
        "kim_park.json",
    ]);

    let records = dashboard.load_patients(None).await.unwrap();
    let names: Vec<_> = records.iter().map(|r| r.display_name()).collect();
    assert_eq!(names, vec!["Doe, Jane", "Park, Kim"]);

    let state = dashboard.snapshot();
    assert_eq!(state.selected.as_deref(), Some("jane2_doe5.json"));
    assert_eq!(state.summary, SummaryPanel::Ready(ClinicalSummary::default()));
    assert_eq!(
        api.calls(),
        vec![Call::ListPatients, Call::Summary("jane2_doe5.json".to_string())]
    );
}

#[tokio::test]
async fn test_load_failure_is_blocking() {
    let (dashboard, api) = dashboard();
    api.fail_directory(status_error(Endpoint::ListPatients, 502));

    let err = dashboard.load_patients(None).await.unwrap_err();
    assert!(matches!(err, BaymaxError::Load { .. }));
    assert_eq!(err.context(), Some("HTTP error! Status: 502 (/list-all-patients)"));

    let state = dashboard.snapshot();
    assert_eq!(
        state.directory,
        DirectoryState::Failed(DIRECTORY_LOAD_FAILED.to_string())
    );
    assert_eq!(state.selected, None);
    assert_eq!(api.calls(), vec![Call::ListPatients]);
}

#[rstest]
#[case::status(status_error(Endpoint::ListPatients, 503), BMX0002)]
#[case::decode(
    ApiError::Decode { endpoint: Endpoint::ListPatients, message: "missing field `patient_files`".to_string() },
    BMX0003
)]
#[case::transport(
    ApiError::Transport { endpoint: Endpoint::ListPatients, message: "connection refused".to_string() },
    BMX0001
)]
#[tokio::test]
async fn test_load_failure_code_follows_cause(#[case] cause: ApiError, #[case] code: ErrorCode) {
    let (dashboard, api) = dashboard();
    api.fail_directory(cause);

    let err = dashboard.load_patients(None).await.unwrap_err();
    assert_eq!(err.code(), code);
    assert_eq!(
        dashboard.snapshot().directory.error(),
        Some(DIRECTORY_LOAD_FAILED)
    );
}

#[tokio::test]
async fn test_reload_keeps_previous_list_visible() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json", "kim_park.json"]).await;
    let gate = api.gate("list");

    let d = dashboard.clone();
    let pending = tokio::spawn(async move { d.load_patients(None).await });
    gate.entered().await;

    assert!(dashboard.is_busy(Operation::DirectoryLoad));
    assert_eq!(dashboard.snapshot().directory.records().len(), 2);
    assert!(dashboard.select_patient("kim_park.json").await.unwrap());

    gate.release();
    let records = pending.await.unwrap().unwrap();
    assert_eq!(records.len(), 2);
}

#[tokio::test]
async fn test_directory_only_load_fetches_no_summary() {
    let (dashboard, api) = dashboard();
    api.set_directory(&["jane_doe.json", "kim_park.json"]);

    dashboard.load_directory().await.unwrap();
    assert_eq!(dashboard.snapshot().selected, None);

    assert!(dashboard.focus_patient("kim_park.json").unwrap());
    dashboard.load_directory().await.unwrap();
    let state = dashboard.snapshot();
    assert_eq!(state.selected.as_deref(), Some("kim_park.json"));
    assert_eq!(state.summary, SummaryPanel::Empty);

    api.set_directory(&["jane_doe.json"]);
    dashboard.load_directory().await.unwrap();
    assert_eq!(dashboard.snapshot().selected, None);
    assert_eq!(api.count(|c| matches!(c, Call::Summary(_))), 0);
}

#[tokio::test]
async fn test_promoted_record_moves_to_front() {
    let (dashboard, api) = dashboard();
    api.set_directory(&["ann_lee.json", "jane_doe.json", "kim_park.json"]);

    let records = dashboard.load_patients(Some("kim_park.json")).await.unwrap();
    let ids: Vec<_> = records.iter().map(|r| r.id()).collect();
    assert_eq!(ids, vec!["kim_park.json", "ann_lee.json", "jane_doe.json"]);
    assert_eq!(
        dashboard.snapshot().selected.as_deref(),
        Some("kim_park.json")
    );
}

#[tokio::test]
async fn test_empty_directory_clears_selection() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json"]).await;
    api.set_directory(&["hospitalInformation1.json"]);

    let records = dashboard.load_patients(None).await.unwrap();
    assert!(records.is_empty());

    let state = dashboard.snapshot();
    assert_eq!(state.directory, DirectoryState::Loaded(vec![]));
    assert_eq!(state.selected, None);
    assert_eq!(state.summary, SummaryPanel::Empty);
}

#[tokio::test]
async fn test_reload_keeping_selection_does_not_refetch() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json", "kim_park.json"]).await;
    dashboard.load_patients(None).await.unwrap();

    assert_eq!(api.count(|c| matches!(c, Call::Summary(_))), 1);
}

#[tokio::test]
async fn test_select_unknown_patient() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json"]).await;
    let before = api.calls().len();

    let err = dashboard.select_patient("ghost_patient.json").await.unwrap_err();
    assert!(matches!(err, BaymaxError::UnknownPatient(id) if id == "ghost_patient.json"));
    assert_eq!(api.calls().len(), before);
}

#[tokio::test]
async fn test_summary_failure_becomes_panel_without_retry() {
    let (dashboard, api) = dashboard();
    api.set_directory(&["jane_doe.json"]);
    api.set_summary("jane_doe.json", Err(status_error(Endpoint::Summary, 500)));

    dashboard.load_patients(None).await.unwrap();

    assert_eq!(
        dashboard.snapshot().summary,
        SummaryPanel::Failed {
            error: SUMMARY_LOAD_FAILED.to_string()
        }
    );
    assert_eq!(api.count(|c| matches!(c, Call::Summary(_))), 1);
}

#[rstest]
#[case::older_arrives_last(false)]
#[case::older_arrives_first(true)]
#[tokio::test]
async fn test_latest_selection_summary_wins(#[case] release_older_first: bool) {
    let (dashboard, api) =
        loaded_dashboard(&["jane_doe.json", "kim_park.json", "ann_lee.json"]).await;
    api.set_summary("kim_park.json", Ok(summary_named("Kim Park")));
    api.set_summary("ann_lee.json", Ok(summary_named("Ann Lee")));
    let older = api.gate("summary:kim_park.json");
    let newer = api.gate("summary:ann_lee.json");

    let d = dashboard.clone();
    let first = tokio::spawn(async move { d.select_patient("kim_park.json").await });
    older.entered().await;

    let d = dashboard.clone();
    let second = tokio::spawn(async move { d.select_patient("ann_lee.json").await });
    newer.entered().await;

    if release_older_first {
        older.release();
        first.await.unwrap().unwrap();
        newer.release();
        second.await.unwrap().unwrap();
    } else {
        newer.release();
        second.await.unwrap().unwrap();
        older.release();
        first.await.unwrap().unwrap();
    }

    let state = dashboard.snapshot();
    assert_eq!(state.selected.as_deref(), Some("ann_lee.json"));
    assert_eq!(shown_name(&state.summary).as_deref(), Some("Ann Lee"));
    assert!(!dashboard.is_busy(Operation::SummaryFetch));
}

#[tokio::test]
async fn test_summary_retrigger_for_same_selection_is_rejected() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json"]).await;
    let gate = api.gate("summary:jane_doe.json");

    let d = dashboard.clone();
    let pending = tokio::spawn(async move { d.refresh_summary().await });
    gate.entered().await;

    assert!(dashboard.is_busy(Operation::SummaryFetch));
    assert_eq!(dashboard.snapshot().summary, SummaryPanel::Loading);
    let err = dashboard.refresh_summary().await.unwrap_err();
    assert!(matches!(err, BaymaxError::Busy(Operation::SummaryFetch)));

    gate.release();
    pending.await.unwrap().unwrap();
    assert!(!dashboard.is_busy(Operation::SummaryFetch));
    assert_eq!(api.count(|c| matches!(c, Call::Summary(_))), 2);
}

#[tokio::test]
async fn test_operations_without_selection_send_nothing() {
    let (dashboard, api) = dashboard();
    dashboard.set_drug_input("Warfarin");

    assert!(matches!(
        dashboard.refresh_summary().await,
        Err(BaymaxError::NoPatientSelected)
    ));
    assert!(matches!(
        dashboard.submit_drug_order().await,
        Err(BaymaxError::NoPatientSelected)
    ));
    assert!(matches!(
        dashboard.evaluate_discharge().await,
        Err(BaymaxError::NoPatientSelected)
    ));
    assert!(matches!(
        dashboard.request_ai_summary().await,
        Err(BaymaxError::NoPatientSelected)
    ));
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_discharge_success_and_failure() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json"]).await;
    api.set_discharge(Ok(DischargeStatus::new(
        "With manual review",
        "Recent tachycardia.",
    )));

    let status = dashboard.evaluate_discharge().await.unwrap();
    assert_eq!(status.decision, "With manual review");
    assert_eq!(dashboard.snapshot().discharge, Some(status));
    assert!(api.calls().contains(&Call::Discharge("jane_doe.json".to_string())));

    api.set_discharge(Err(status_error(Endpoint::Discharge, 500)));
    let status = dashboard.evaluate_discharge().await.unwrap();
    assert_eq!(status, DischargeStatus::failed());
    assert_eq!(status.decision, "Error");
    assert_eq!(status.justification, "Failed to evaluate discharge.");
}

#[tokio::test]
async fn test_discharge_retrigger_is_rejected_while_outstanding() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json"]).await;
    let gate = api.gate("discharge");

    let d = dashboard.clone();
    let pending = tokio::spawn(async move { d.evaluate_discharge().await });
    gate.entered().await;

    assert!(dashboard.is_busy(Operation::DischargeCheck));
    let err = dashboard.evaluate_discharge().await.unwrap_err();
    assert!(matches!(err, BaymaxError::Busy(Operation::DischargeCheck)));

    api.ungate("discharge");
    gate.release();
    pending.await.unwrap().unwrap();

    assert!(!dashboard.is_busy(Operation::DischargeCheck));
    dashboard.evaluate_discharge().await.unwrap();
    assert_eq!(api.count(|c| matches!(c, Call::Discharge(_))), 2);
}

#[tokio::test]
async fn test_selection_change_discards_discharge_result() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json", "kim_park.json"]).await;
    let gate = api.gate("discharge");

    let d = dashboard.clone();
    let pending = tokio::spawn(async move { d.evaluate_discharge().await });
    gate.entered().await;

    dashboard.select_patient("kim_park.json").await.unwrap();
    gate.release();

    let err = pending.await.unwrap().unwrap_err();
    assert!(matches!(err, BaymaxError::Superseded { patient_id } if patient_id == "jane_doe.json"));
    assert_eq!(dashboard.snapshot().discharge, None);
}

#[rstest]
#[case::missing(json!({}), AiSummary::Text("No summary available.".to_string()))]
#[case::null(json!({"summary": null}), AiSummary::Text("No summary available.".to_string()))]
#[case::empty(json!({"summary": ""}), AiSummary::Text("No summary available.".to_string()))]
#[case::text(json!({"summary": "Stable."}), AiSummary::Text("Stable.".to_string()))]
#[tokio::test]
async fn test_ai_summary_outcomes(#[case] body: serde_json::Value, #[case] expected: AiSummary) {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json"]).await;
    let response: AiSummaryResponse = serde_json::from_value(body).unwrap();
    api.set_ai_summary(Ok(response));

    assert_eq!(dashboard.request_ai_summary().await.unwrap(), expected);
    assert_eq!(dashboard.snapshot().ai_summary, Some(expected));
}

#[tokio::test]
async fn test_ai_summary_failure_and_sections() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json"]).await;

    api.set_ai_summary(Err(status_error(Endpoint::AiSummary, 503)));
    assert_eq!(
        dashboard.request_ai_summary().await.unwrap(),
        AiSummary::Text("Failed to generate summary.".to_string())
    );

    api.set_ai_summary(Ok(AiSummaryResponse {
        summary: Some(json!({"Medical Summary": "Hypertension", "Medications": ["Lisinopril"]})),
    }));
    match dashboard.request_ai_summary().await.unwrap() {
        AiSummary::Sections(sections) => {
            let keys: Vec<_> = sections.keys().cloned().collect();
            assert_eq!(keys, vec!["Medical Summary", "Medications"]);
        }
        other => panic!("expected sections, got {other:?}"),
    }
}

#[tokio::test]
async fn test_ai_summary_retrigger_is_rejected_while_outstanding() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json"]).await;
    let gate = api.gate("ai-summary");

    let d = dashboard.clone();
    let pending = tokio::spawn(async move { d.request_ai_summary().await });
    gate.entered().await;

    assert!(dashboard.is_busy(Operation::AiSummary));
    let err = dashboard.request_ai_summary().await.unwrap_err();
    assert!(matches!(err, BaymaxError::Busy(Operation::AiSummary)));

    api.ungate("ai-summary");
    gate.release();
    pending.await.unwrap().unwrap();

    assert!(!dashboard.is_busy(Operation::AiSummary));
    dashboard.request_ai_summary().await.unwrap();
    assert_eq!(api.count(|c| matches!(c, Call::AiSummary(_))), 2);
}

#[tokio::test]
async fn test_selection_change_discards_ai_summary() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json", "kim_park.json"]).await;
    api.set_ai_summary(Ok(AiSummaryResponse {
        summary: Some(json!("Jane is stable.")),
    }));
    let gate = api.gate("ai-summary");

    let d = dashboard.clone();
    let pending = tokio::spawn(async move { d.request_ai_summary().await });
    gate.entered().await;

    dashboard.select_patient("kim_park.json").await.unwrap();
    gate.release();

    let err = pending.await.unwrap().unwrap_err();
    assert!(matches!(err, BaymaxError::Superseded { patient_id } if patient_id == "jane_doe.json"));
    assert_eq!(dashboard.snapshot().ai_summary, None);
}

#[tokio::test]
async fn test_independent_operations_run_concurrently() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json"]).await;
    dashboard.set_drug_input("Aspirin");

    let (discharge, ai, order) = tokio::join!(
        dashboard.evaluate_discharge(),
        dashboard.request_ai_summary(),
        dashboard.submit_drug_order()
    );
    assert!(discharge.is_ok());
    assert!(ai.is_ok());
    assert!(order.is_ok());
    assert_eq!(api.count(|c| matches!(c, Call::SubmitDrugOrder(_))), 1);
}

#[tokio::test]
async fn test_upload_reloads_with_file_first() {
    let (dashboard, api) = loaded_dashboard(&["ann_lee.json", "jane_doe.json"]).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kim_park.json");
    std::fs::write(&path, br#"{"resourceType": "Bundle"}"#).unwrap();
    api.set_directory(&["ann_lee.json", "jane_doe.json", "kim_park.json"]);

    let records = dashboard.upload_patient_file(&path).await.unwrap();
    assert_eq!(records[0].id(), "kim_park.json");
    assert_eq!(
        dashboard.snapshot().selected.as_deref(),
        Some("kim_park.json")
    );

    let calls = api.calls();
    let upload_at = calls
        .iter()
        .position(|c| *c == Call::Upload("kim_park.json".to_string()))
        .unwrap();
    assert_eq!(calls[upload_at + 1], Call::ListPatients);
}

#[tokio::test]
async fn test_upload_during_directory_load_still_reloads() {
    let (dashboard, api) = loaded_dashboard(&["ann_lee.json", "jane_doe.json"]).await;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kim_park.json");
    std::fs::write(&path, br#"{"resourceType": "Bundle"}"#).unwrap();
    let list_gate = api.gate("list");
    let upload_gate = api.gate("upload");

    let d = dashboard.clone();
    let load = tokio::spawn(async move { d.load_patients(None).await });
    list_gate.entered().await;

    let d = dashboard.clone();
    let upload = tokio::spawn(async move { d.upload_patient_file(&path).await });
    upload_gate.entered().await;
    api.set_directory(&["ann_lee.json", "jane_doe.json", "kim_park.json"]);
    upload_gate.release();
    for _ in 0..3 {
        tokio::task::yield_now().await;
    }
    assert!(!upload.is_finished());

    api.ungate("list");
    list_gate.release();
    load.await.unwrap().unwrap();

    let records = upload.await.unwrap().unwrap();
    assert_eq!(records[0].id(), "kim_park.json");
    assert_eq!(
        dashboard.snapshot().selected.as_deref(),
        Some("kim_park.json")
    );
    assert_eq!(api.count(|c| *c == Call::ListPatients), 3);
    assert!(!dashboard.is_busy(Operation::DirectoryLoad));
}

#[tokio::test]
async fn test_upload_rejects_non_json_locally() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json"]).await;
    let before = api.calls().len();

    let err = dashboard.upload_patient_file("notes.txt").await.unwrap_err();
    assert_eq!(err.code(), BMX0404);
    assert_eq!(api.calls().len(), before);
}

#[tokio::test]
async fn test_upload_failure_keeps_directory() {
    let (dashboard, api) = loaded_dashboard(&["jane_doe.json"]).await;
    let before = dashboard.snapshot().directory;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kim_park.json");
    std::fs::write(&path, b"{}").unwrap();
    api.set_upload(Err(status_error(Endpoint::UploadRecord, 413)));

    let err = dashboard.upload_patient_file(&path).await.unwrap_err();
    assert_eq!(err.code(), BMX0405);
    assert_eq!(dashboard.snapshot().directory, before);
    assert_eq!(api.count(|c| *c == Call::ListPatients), 1);
}
