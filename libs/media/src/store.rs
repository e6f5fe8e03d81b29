use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::MediaConfig;

/// Error type for media host operations
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Media host request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Media host rejected the request ({status}): {message}")]
    Provider { status: u16, message: String },
}

/// A file durably hosted by the media service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    /// Durable public URL
    pub url: String,
    /// Provider-side identifier, needed to delete the asset later
    pub asset_id: String,
}

/// Interface to the external media host.
///
/// Implementations upload a locally buffered file and return its durable
/// public URL. Calls may be issued concurrently; there is no retry.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload the file at `path` into the given logical folder
    async fn upload(&self, path: &Path, folder: &str) -> Result<UploadedMedia, MediaError>;

    /// Delete a previously uploaded asset
    async fn delete(&self, asset_id: &str) -> Result<(), MediaError>;
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

/// HTTP client for the media host's upload API.
pub struct HttpMediaStore {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpMediaStore {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl MediaStore for HttpMediaStore {
    #[instrument(skip(self), fields(path = %path.display()))]
    async fn upload(&self, path: &Path, folder: &str) -> Result<UploadedMedia, MediaError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        debug!(size_bytes = bytes.len(), "Uploading file to media host");

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new()
            .text("folder", folder.to_string())
            .part("file", part);

        let response = self
            .client
            .post(format!("{}/upload", self.base_url))
            .header("x-api-key", &self.api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MediaError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        let body: UploadResponse = response.json().await?;

        info!(url = %body.secure_url, "File uploaded to media host");
        Ok(UploadedMedia {
            url: body.secure_url,
            asset_id: body.public_id,
        })
    }

    #[instrument(skip(self))]
    async fn delete(&self, asset_id: &str) -> Result<(), MediaError> {
        let response = self
            .client
            .delete(format!("{}/assets/{}", self.base_url, asset_id))
            .header("x-api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MediaError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        info!("Asset deleted from media host");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = MediaConfig::new("https://media.example.com/v1/", "key", "uploads");
        let store = HttpMediaStore::new(&config);
        assert_eq!(store.base_url, "https://media.example.com/v1");
    }

    #[test]
    fn test_upload_response_parses_provider_body() {
        let body: UploadResponse = serde_json::from_str(
            r#"{"secure_url":"https://cdn.example.com/a.png","public_id":"ecommerce/a","bytes":123}"#,
        )
        .unwrap();
        assert_eq!(body.secure_url, "https://cdn.example.com/a.png");
        assert_eq!(body.public_id, "ecommerce/a");
    }
}
