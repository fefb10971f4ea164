// src/core/client.rs

use crate::config::ScanConfig;
use crate::core::models::{ImageFile, ScanResult};
use reqwest::multipart::{Form, Part};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use url::Url;

/// Shown for every transport failure and non-2xx answer. The endpoint's own
/// error body is never surfaced.
pub const SCAN_FAILED_MESSAGE: &str = "Failed to scan medicine. Please try again.";

/// Field name of the multipart part that carries the image.
pub const IMAGE_FIELD: &str = "image";

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("{}", SCAN_FAILED_MESSAGE)]
    Status(reqwest::StatusCode),
    #[error("{}", SCAN_FAILED_MESSAGE)]
    Transport(#[from] reqwest::Error),
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// HTTP client for the medicine scan endpoint.
#[derive(Debug, Clone)]
pub struct ScanClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ScanClient {
    pub fn new(config: &ScanConfig) -> Result<Self, ScanError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("MedicineDashboard/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ScanError::Build)?;
        Ok(Self { http, endpoint: config.endpoint.clone() })
    }

    /// Uploads `file` as a multipart form and parses the identification.
    ///
    /// Non-2xx statuses and transport failures map to the fixed scan failure
    /// message; a body that is not a valid `ScanResult` keeps the parser's
    /// own message.
    pub async fn scan(&self, file: ImageFile) -> Result<ScanResult, ScanError> {
        info!(endpoint = %self.endpoint, file = %file.name, size = file.bytes.len(), "Uploading image for scan.");

        let part = Part::bytes(file.bytes)
            .file_name(file.name)
            .mime_str(file.mime)?;
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .http
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Scan request failed.");
                ScanError::Transport(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "Scan endpoint returned a failure status.");
            return Err(ScanError::Status(status));
        }

        let body = response.text().await?;
        debug!(bytes = body.len(), "Received scan response body.");
        let result: ScanResult = serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Scan response was not a valid result.");
            ScanError::Parse(e)
        })?;

        info!(medicine = ?result.medicine_name, "Scan finished.");
        Ok(result)
    }
}
