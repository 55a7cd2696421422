//! `reqwest` implementation of [`AuthApi`].

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::AuthApi;
use super::types::{ApiError, Credentials};
use crate::config::{AuthClientConfig, Endpoints};
use crate::state::UserRecord;

pub struct HttpAuthApi {
    http: reqwest::Client,
    base_url: String,
    endpoints: Endpoints,
}

impl HttpAuthApi {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidBaseUrl`] if the base URL does not parse,
    /// or [`ApiError::HttpClientBuild`] if the HTTP client cannot be built.
    pub fn new(config: &AuthClientConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url.trim_end_matches('/').to_owned();
        reqwest::Url::parse(&base_url).map_err(|e| ApiError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs));
        if let Some(secs) = config.timeouts.request_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;

        Ok(Self { http, base_url, endpoints: config.endpoints.clone() })
    }

    async fn post_credentials(&self, path: &str, credentials: &Credentials) -> Result<UserRecord, ApiError> {
        let text = self.post(path, Some(credentials)).await?;
        let body: Value = serde_json::from_str(&text)?;
        Ok(UserRecord::new(body))
    }

    async fn post(&self, path: &str, body: Option<&impl Serialize>) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "auth request");

        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "auth request rejected");
            return Err(ApiError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl AuthApi for HttpAuthApi {
    async fn sign_up(&self, credentials: &Credentials) -> Result<UserRecord, ApiError> {
        self.post_credentials(&self.endpoints.sign_up, credentials).await
    }

    async fn log_in(&self, credentials: &Credentials) -> Result<UserRecord, ApiError> {
        self.post_credentials(&self.endpoints.login, credentials).await
    }

    async fn log_out(&self) -> Result<(), ApiError> {
        self.post(&self.endpoints.logout, None::<&Value>).await?;
        Ok(())
    }
}
