//! The compute engine behind the proxy.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::ProxyError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineRequest {
    pub app_id: String,
    /// Already trimmed.
    pub input: String,
    pub units: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineReply {
    Answer(String),
    /// The engine answered with a non-success status.
    NoResult { status: u16 },
}

#[async_trait]
pub trait ComputeEngine: Send + Sync {
    async fn ask(&self, request: &EngineRequest) -> Result<EngineReply, ProxyError>;
}

/// Plain-text short answers over HTTP.
#[derive(Clone, Debug)]
pub struct WolframEngine {
    client: Client,
    url: String,
}

impl WolframEngine {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ComputeEngine for WolframEngine {
    async fn ask(&self, request: &EngineRequest) -> Result<EngineReply, ProxyError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("appid", request.app_id.as_str()),
                ("i", request.input.as_str()),
                ("units", request.units.as_str()),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;
        debug!(%status, bytes = text.len(), "compute engine replied");

        if status.is_success() {
            Ok(EngineReply::Answer(text))
        } else {
            Ok(EngineReply::NoResult {
                status: status.as_u16(),
            })
        }
    }
}
