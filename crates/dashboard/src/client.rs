use async_trait::async_trait;
use serde::{Deserialize, de::DeserializeOwned};
use shared::{
    domain::responses::{CustomerListData, StatisticsData, StatisticsResponse},
    errors::ErrorResponse,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server responded with {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request was rejected: {0}")]
    Rejected(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Read-only view of the reporting API used by the dashboard.
#[async_trait]
pub trait ReportApi {
    async fn fetch_customers(&self, page: i64, limit: i64)
    -> Result<CustomerListData, ClientError>;
    async fn fetch_statistics(&self) -> Result<StatisticsResponse, ClientError>;
}

pub type DynReportApi = Arc<dyn ReportApi + Send + Sync>;

#[derive(Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    message: Option<String>,
}

/// Unwraps `{ success, data }`, treating a non-2xx status or
/// `success: false` as a failure.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ClientError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.message)
            .unwrap_or_else(|_| format!("HTTP {status}"));
        return Err(ClientError::Status { status, message });
    }

    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;

    match (envelope.success, envelope.data) {
        (true, Some(data)) => Ok(data),
        (true, None) => Err(ClientError::Decode("response carried no data".into())),
        (false, _) => Err(ClientError::Rejected(
            envelope
                .message
                .unwrap_or_else(|| "request failed".to_string()),
        )),
    }
}

#[derive(Clone)]
pub struct HttpReportApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReportApi {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get<T: DeserializeOwned>(&self, path_and_query: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path_and_query);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("❌ GET {url} failed: {e}");
            ClientError::from(e)
        })?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        decode_envelope(status, &body).inspect_err(|e| error!("❌ GET {url}: {e}"))
    }
}

#[async_trait]
impl ReportApi for HttpReportApi {
    async fn fetch_customers(
        &self,
        page: i64,
        limit: i64,
    ) -> Result<CustomerListData, ClientError> {
        info!("📥 Fetching customers page={page} limit={limit}");
        self.get(&format!("/customers?page={page}&limit={limit}"))
            .await
    }

    async fn fetch_statistics(&self) -> Result<StatisticsResponse, ClientError> {
        info!("📥 Fetching statistics");
        let data: StatisticsData = self.get("/stats").await?;
        Ok(data.statistics)
    }
}
