//! `reqwest` implementation of [`ClinicalApi`]

use crate::{
    ApiError, ClientConfig, ClinicalApi, Endpoint, Method, PatientUpload, TUNNEL_WARNING_HEADER,
};
use async_trait::async_trait;
use baymax_model::{
    AiSummaryResponse, ClinicalSummary, DischargeStatus, DrugOrderRequest, FallbackOrderResponse,
    PatientDirectory, PatientRequest, PrimaryOrderResponse,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP client for the clinical API.
///
/// Construct one per process and share it; the underlying connection pool
/// and the signed-in user's token live here.
#[derive(Debug, Clone)]
pub struct HttpClinicalApi {
    client: Client,
    config: ClientConfig,
}

impl HttpClinicalApi {
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, endpoint: Endpoint) -> Result<Url, ApiError> {
        self.config
            .base_url
            .join(endpoint.path())
            .map_err(|e| ApiError::Config(format!("invalid URL for {endpoint}: {e}")))
    }

    fn request(&self, endpoint: Endpoint) -> Result<RequestBuilder, ApiError> {
        let url = self.url(endpoint)?;
        log::debug!("{:?} {}", endpoint.method(), url);

        let mut builder = match endpoint.method() {
            Method::Get => self.client.get(url),
            Method::Post => self.client.post(url),
        };
        if self.config.tunnel_header {
            builder = builder.header(TUNNEL_WARNING_HEADER, "true");
        }
        if let Some(token) = &self.config.auth_token {
            builder = builder.bearer_auth(token.expose());
        }
        Ok(builder)
    }

    /// Send a request and return the body of a 2xx response
    async fn execute(&self, endpoint: Endpoint, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await.map_err(|e| {
            log::warn!("{endpoint} request failed: {e}");
            ApiError::Transport {
                endpoint,
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("{endpoint} answered with status {status}");
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| ApiError::Transport {
            endpoint,
            message: format!("failed to read response body: {e}"),
        })
    }

    fn decode<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<T, ApiError> {
        serde_json::from_str(body).map_err(|e| {
            log::warn!("{endpoint} returned an unexpected body: {e}");
            ApiError::Decode {
                endpoint,
                message: e.to_string(),
            }
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: Endpoint) -> Result<T, ApiError> {
        let builder = self.request(endpoint)?;
        let body = self.execute(endpoint, builder).await?;
        Self::decode(endpoint, &body)
    }

    async fn post_json<B, T>(&self, endpoint: Endpoint, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let builder = self.request(endpoint)?.json(payload);
        let body = self.execute(endpoint, builder).await?;
        Self::decode(endpoint, &body)
    }
}

#[async_trait]
impl ClinicalApi for HttpClinicalApi {
    async fn list_patient_files(&self) -> Result<PatientDirectory, ApiError> {
        self.get_json(Endpoint::ListPatients).await
    }

    async fn upload_patient_file(&self, upload: &PatientUpload) -> Result<(), ApiError> {
        let endpoint = Endpoint::UploadRecord;
        let part = Part::bytes(upload.bytes().to_vec())
            .file_name(upload.file_name().to_string())
            .mime_str("application/json")
            .map_err(|e| ApiError::InvalidUpload(e.to_string()))?;
        let builder = self.request(endpoint)?.multipart(Form::new().part("file", part));

        self.execute(endpoint, builder).await?;
        log::info!("uploaded {}", upload.file_name());
        Ok(())
    }

    async fn fetch_summary(&self, patient_id: &str) -> Result<ClinicalSummary, ApiError> {
        let request = PatientRequest::with_prefix(&self.config.summary_prefix, patient_id);
        let summary: Option<ClinicalSummary> = self.post_json(Endpoint::Summary, &request).await?;
        if summary.is_none() {
            log::info!("no clinical data found for {patient_id}");
        }
        Ok(summary.unwrap_or_default())
    }

    async fn submit_drug_order(
        &self,
        order: &DrugOrderRequest,
    ) -> Result<PrimaryOrderResponse, ApiError> {
        self.post_json(Endpoint::SubmitDrugOrder, order).await
    }

    async fn match_interactions(
        &self,
        order: &DrugOrderRequest,
    ) -> Result<FallbackOrderResponse, ApiError> {
        self.post_json(Endpoint::MatchInteractions, order).await
    }

    async fn evaluate_discharge(&self, patient_id: &str) -> Result<DischargeStatus, ApiError> {
        self.post_json(Endpoint::Discharge, &PatientRequest::new(patient_id))
            .await
    }

    async fn generate_ai_summary(&self, patient_id: &str) -> Result<AiSummaryResponse, ApiError> {
        self.post_json(Endpoint::AiSummary, &PatientRequest::new(patient_id))
            .await
    }
}
