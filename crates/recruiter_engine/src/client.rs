use engine_logging::{engine_info, engine_warn};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;

use crate::types::ErrorBody;
use crate::{
    AnalyzeRequest, BackendError, BackendSettings, ChatRequest, DocumentEndpoint, DocumentRequest,
};

/// The four backend operations. Each resolves to the string result field of
/// the endpoint or to a [`BackendError`].
#[async_trait::async_trait]
pub trait BackendClient: Send + Sync {
    /// Missing `content` in a successful response is treated as empty content.
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<String, BackendError>;

    async fn chat(&self, request: &ChatRequest) -> Result<String, BackendError>;

    async fn generate(
        &self,
        endpoint: DocumentEndpoint,
        request: &DocumentRequest,
    ) -> Result<String, BackendError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: BackendSettings,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: BackendSettings) -> Result<Self, BackendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| BackendError::Transport(err.to_string()))?;
        Ok(Self { settings, client })
    }

    async fn post_json<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, BackendError> {
        let url = self
            .settings
            .endpoint_url(path)
            .map_err(|err| BackendError::InvalidEndpoint(err.to_string()))?;
        let payload =
            serde_json::to_vec(body).map_err(|err| BackendError::Transport(err.to_string()))?;
        engine_info!("POST {} payload_bytes={}", url, payload.len());

        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.error)
                .filter(|message| !message.is_empty());
            engine_warn!("POST {} failed with {}: {:?}", url, status, message);
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        engine_info!("POST {} ok response_bytes={}", url, bytes.len());
        serde_json::from_slice(&bytes).map_err(|err| BackendError::InvalidResponse(err.to_string()))
    }
}

#[async_trait::async_trait]
impl BackendClient for ReqwestBackend {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<String, BackendError> {
        let body = self.post_json("analyze", request).await?;
        Ok(body
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string())
    }

    async fn chat(&self, request: &ChatRequest) -> Result<String, BackendError> {
        let body = self.post_json("chat", request).await?;
        required_field(&body, "response")
    }

    async fn generate(
        &self,
        endpoint: DocumentEndpoint,
        request: &DocumentRequest,
    ) -> Result<String, BackendError> {
        let body = self.post_json(endpoint.path(), request).await?;
        required_field(&body, endpoint.result_field())
    }
}

fn required_field(body: &Value, field: &str) -> Result<String, BackendError> {
    body.get(field)
        .and_then(Value::as_str)
        .map(ToOwned::to_owned)
        .ok_or_else(|| BackendError::InvalidResponse(format!("missing `{field}` field")))
}

fn map_reqwest_error(err: reqwest::Error) -> BackendError {
    if err.is_timeout() {
        return BackendError::Transport(format!("request timed out: {err}"));
    }
    BackendError::Transport(err.to_string())
}
