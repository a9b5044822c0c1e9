use crate::core::{ApiClient, ConfigProvider, Result};
use crate::utils::error::QuakeError;
use crate::utils::validation::validate_url;
use reqwest::Client;
use url::Url;

/// [`ApiClient`] backed by a pooled `reqwest::Client`.
///
/// Cloning is cheap and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestApiClient {
    client: Client,
    base_url: Url,
}

impl ReqwestApiClient {
    /// Fails with a configuration error for a base URL that is not an
    /// absolute http(s) URL, or for a zero timeout.
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let base_url = parse_base_url(config.base_url())?;
        validate_url("base_url", base_url.as_str())?;

        for (field, value) in [
            ("timeout", config.timeout()),
            ("connect_timeout", config.connect_timeout()),
        ] {
            if value.is_zero() {
                return Err(QuakeError::InvalidConfigValueError {
                    field: field.to_string(),
                    value: format!("{:?}", value),
                    reason: "timeout must be greater than zero".to_string(),
                });
            }
        }

        let mut builder = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout());
        if let Some(user_agent) = config.user_agent() {
            builder = builder.user_agent(user_agent.to_string());
        }

        let client = builder.build().map_err(|e| QuakeError::ConfigError {
            message: format!("failed to build HTTP client: {}", e),
        })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Joins `path` onto the base URL with a single `/`. Absolute URLs are
    /// returned unchanged.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(QuakeError::MissingConfigError {
            field: "base_url".to_string(),
        });
    }

    let mut url = Url::parse(raw)?;
    if url.cannot_be_a_base() {
        return Err(QuakeError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: raw.to_string(),
            reason: "URL cannot be used as a base".to_string(),
        });
    }

    // Without the trailing slash Url::join would replace the last segment.
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[async_trait::async_trait]
impl ApiClient for ReqwestApiClient {
    async fn get(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.resolve(path)?;

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(QuakeError::HttpStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        tracing::debug!("Received {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
