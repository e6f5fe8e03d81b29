use core_config::{env_or_default, env_required, ConfigError, FromEnv};
use std::path::PathBuf;

/// Media host configuration
///
/// # Example
///
/// ```ignore
/// use core_config::FromEnv;
/// use media::MediaConfig;
///
/// let config = MediaConfig::from_env()?;
/// ```
#[derive(Clone, Debug)]
pub struct MediaConfig {
    /// Base URL of the media host API
    pub base_url: String,

    /// API key sent with every request
    pub api_key: String,

    /// Local directory where inbound multipart files are buffered before
    /// upload
    pub staging_dir: PathBuf,
}

impl MediaConfig {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        staging_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            staging_dir: staging_dir.into(),
        }
    }
}

impl FromEnv for MediaConfig {
    /// Environment variables:
    /// - `MEDIA_BASE_URL` (required) - media host API base URL
    /// - `MEDIA_API_KEY` (required)
    /// - `MEDIA_STAGING_DIR` (optional, default: "uploads")
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: env_required("MEDIA_BASE_URL")?,
            api_key: env_required("MEDIA_API_KEY")?,
            staging_dir: PathBuf::from(env_or_default("MEDIA_STAGING_DIR", "uploads")),
        })
    }
}
