use std::fmt;
use std::time::Duration;

use engine_logging::{engine_debug, engine_warn};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::{CategorizationRequest, CategorizeError};

pub const DEFAULT_ENDPOINT: &str =
    "https://www.websitecategorizationapi.com/api/iab/iab_content_filtering.php";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Clone)]
pub struct ClientSettings {
    pub endpoint: String,
    pub api_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: String::new(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

// The key stays out of logs.
impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// Sends a categorization request and returns the decoded JSON body.
#[async_trait::async_trait]
pub trait CategorizationClient: Send + Sync {
    async fn call(&self, request: &CategorizationRequest) -> Result<Value, CategorizeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new(settings: ClientSettings) -> Result<Self, CategorizeError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| CategorizeError::NetworkFailure(err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn encode_body(&self, request: &CategorizationRequest) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .append_pair("query", &request.query)
            .append_pair("api_key", &self.settings.api_key)
            .append_pair("data_type", request.data_type)
            .finish()
    }
}

#[async_trait::async_trait]
impl CategorizationClient for ReqwestClient {
    async fn call(&self, request: &CategorizationRequest) -> Result<Value, CategorizeError> {
        let response = self
            .client
            .post(&self.settings.endpoint)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(self.encode_body(request))
            .send()
            .await
            .map_err(map_reqwest_error)?;

        // The body decides the outcome; a non-success status alone is not an error.
        let status = response.status();
        if !status.is_success() {
            engine_warn!("Categorization API answered {} for {}", status, request.query);
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        engine_debug!("Categorization API returned {} bytes", body.len());
        serde_json::from_slice(&body).map_err(|err| {
            CategorizeError::NetworkFailure(format!("response is not JSON: {err}"))
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> CategorizeError {
    if err.is_timeout() {
        return CategorizeError::NetworkFailure(format!("timeout: {err}"));
    }
    CategorizeError::NetworkFailure(err.to_string())
}
