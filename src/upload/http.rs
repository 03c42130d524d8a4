//! HTTP collector client.

use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use url::Url;
use uuid::Uuid;

use crate::config::UploadConfig;
use crate::record::Log;
use crate::upload::{UploadError, Uploader};

/// Body returned by the collector on success.
#[derive(Debug, Deserialize)]
struct UploadReceipt {
    id: Uuid,
}

/// Uploads logs as JSON to a collector endpoint.
#[derive(Clone)]
pub struct HttpUploader {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HttpUploader {
    /// Create an uploader from configuration.
    pub fn new(config: &UploadConfig) -> Result<Self, UploadError> {
        let endpoint: Url = config.endpoint.parse().map_err(|e| {
            UploadError::InvalidEndpoint(format!("'{}': {}", config.endpoint, e))
        })?;

        let mut builder = Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Uploader for HttpUploader {
    async fn upload(&self, log: Log) -> Result<Uuid, UploadError> {
        let mut request = self.client.post(self.endpoint.clone()).json(&log);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let resp = request.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UploadError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let receipt: UploadReceipt = resp.json().await?;
        tracing::debug!(
            local_id = %log.id(),
            server_id = %receipt.id,
            endpoint = %self.endpoint,
            "Collector accepted log"
        );
        Ok(receipt.id)
    }
}
