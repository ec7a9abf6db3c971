//! HTTP client tests against a local mock server

use baymax_client::{
    ApiError, AuthToken, ClientConfig, ClinicalApi, Endpoint, HttpClinicalApi, PatientUpload,
};
use baymax_model::{AiSummary, DrugOrderRequest, DrugOrderResult};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api(server: &MockServer) -> HttpClinicalApi {
    HttpClinicalApi::new(ClientConfig::new(&server.uri()).unwrap()).unwrap()
}

#[tokio::test]
async fn test_list_patient_files_sends_tunnel_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list-all-patients"))
        .and(header("ngrok-skip-browser-warning", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "patient_files": ["hospitalInformation1.json", "jane2_doe5.json"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let directory = api(&server).list_patient_files().await.unwrap();
    let records = directory.records(None);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].display_name(), "Doe, Jane");
}

#[tokio::test]
async fn test_list_patient_files_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list-all-patients"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>tunnel</html>"))
        .mount(&server)
        .await;

    let err = api(&server).list_patient_files().await.unwrap_err();
    assert!(matches!(
        err,
        ApiError::Decode {
            endpoint: Endpoint::ListPatients,
            ..
        }
    ));
}

#[tokio::test]
async fn test_list_patient_files_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list-all-patients"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = api(&server).list_patient_files().await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.endpoint(), Some(Endpoint::ListPatients));
}

#[tokio::test]
async fn test_summary_uses_server_relative_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summary"))
        .and(body_json(json!({"file_path": "../data/fhir/jane_doe.json"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "demographics": {"name": "Jane Doe", "gender": "female", "birthDate": "1990-02-01"},
            "allergies": ["Penicillin"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let summary = api(&server).fetch_summary("jane_doe.json").await.unwrap();
    assert_eq!(summary.allergies, Some(vec!["Penicillin".to_string()]));
}

#[tokio::test]
async fn test_null_summary_decodes_as_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;

    let summary = api(&server).fetch_summary("jane_doe.json").await.unwrap();
    assert!(summary.is_empty());
}

#[tokio::test]
async fn test_drug_order_routes_share_payload() {
    let server = MockServer::start().await;
    let payload = json!({"file_path": "jane_doe.json", "new_medication": "Warfarin"});

    Mock::given(method("POST"))
        .and(path("/submit-drug-order"))
        .and(body_json(payload.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "safety_assessment": {
                "drug_interactions": [],
                "contraindications": [],
                "has_alerts": false,
                "ai_assessment": ""
            }
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/match"))
        .and(body_json(payload))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "top_5_ddi_matches": [{"interaction": "warfarin and aspirin interaction (Major)", "score": 1.0}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api(&server);
    let order = DrugOrderRequest::new("jane_doe.json", " Warfarin ").unwrap();

    let primary = DrugOrderResult::from(api.submit_drug_order(&order).await.unwrap());
    assert!(primary.interactions().is_empty());
    assert_eq!(primary.contraindications(), Some(&[][..]));

    let fallback = DrugOrderResult::from(api.match_interactions(&order).await.unwrap());
    assert_eq!(fallback.interactions().len(), 1);
}

#[tokio::test]
async fn test_discharge_and_ai_summary_use_bare_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/discharge"))
        .and(body_json(json!({"file_path": "jane_doe.json"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "decision": "With manual review",
            "justification": "Recent tachycardia."
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ai-summary"))
        .and(body_json(json!({"file_path": "jane_doe.json"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "summary": {"Medical Summary": "Hypertension"}
        })))
        .mount(&server)
        .await;

    let api = api(&server);
    let status = api.evaluate_discharge("jane_doe.json").await.unwrap();
    assert_eq!(status.decision, "With manual review");

    let summary = AiSummary::from_response(api.generate_ai_summary("jane_doe.json").await.unwrap());
    assert!(matches!(summary, AiSummary::Sections(_)));
}

#[tokio::test]
async fn test_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/upload-fhir"))
        .and(header_exists("content-type"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "File 'kim_park.json' uploaded successfully."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let upload = PatientUpload::new("kim_park.json", br#"{"resourceType":"Bundle"}"#.to_vec()).unwrap();
    api(&server).upload_patient_file(&upload).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0]
        .headers
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data"));
}

#[tokio::test]
async fn test_auth_token_and_disabled_tunnel_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/list-all-patients"))
        .and(header("authorization", "Bearer id-token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"patient_files": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = ClientConfig::new(&server.uri())
        .unwrap()
        .with_tunnel_header(false)
        .with_auth_token(Some(AuthToken::new("id-token-123")));
    HttpClinicalApi::new(config)
        .unwrap()
        .list_patient_files()
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("ngrok-skip-browser-warning").is_none());
}

#[tokio::test]
async fn test_transport_failure() {
    let config = ClientConfig::new("http://127.0.0.1:9/").unwrap();
    let err = HttpClinicalApi::new(config)
        .unwrap()
        .evaluate_discharge("jane_doe.json")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport { endpoint: Endpoint::Discharge, .. }));
}
