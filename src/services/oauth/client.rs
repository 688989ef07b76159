//! HTTP-backed access-token source.
//!
//! One `reqwest::Client` is built at startup and shared by every request
//! (connection pooling lives inside it; there is no per-call mutable state).
//!
//! Each lookup is a single `GET {base_url}/oauth/accessToken/{id}` whose send
//! *and* body read run under one deadline. On expiry the future is dropped,
//! which cancels the in-flight call and releases its connection. No retries.
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use url::Url;

use crate::error::RestErr;
use crate::services::oauth::access_token::{AccessToken, AccessTokenSource};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100);

const MSG_TRANSPORT: &str = "invalid response from oauth api while trying to get access token";
const MSG_INVALID_ERROR: &str = "invalid error interface when trying to get access token";
const MSG_INVALID_BODY: &str = "error when trying to unmarshal access token response";

#[derive(Debug, Clone)]
pub struct OAuthConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl OAuthConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OAuthClientError {
    #[error("oauth base url cannot carry path segments: {0}")]
    InvalidBaseUrl(Url),
    #[error("failed to build http client: {0}")]
    Build(#[from] reqwest::Error),
}

#[derive(Clone, Debug)]
pub struct HttpAccessTokenSource {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl HttpAccessTokenSource {
    pub fn new(config: OAuthConfig) -> Result<Self, OAuthClientError> {
        // The oauth service is addressed directly; env proxies are ignored.
        let client = reqwest::Client::builder()
            .no_proxy()
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;

        Self::with_client(client, config)
    }

    /// Reuse an already configured client (shared pool, custom transport).
    pub fn with_client(
        client: reqwest::Client,
        config: OAuthConfig,
    ) -> Result<Self, OAuthClientError> {
        if config.base_url.cannot_be_a_base() {
            return Err(OAuthClientError::InvalidBaseUrl(config.base_url));
        }

        Ok(Self {
            client,
            base_url: config.base_url,
            timeout: config.timeout,
        })
    }

    /// `{base_url}/oauth/accessToken/{id}`, the id percent-encoded as one segment.
    pub fn access_token_url(&self, access_token_id: &str) -> Url {
        let mut url = self.base_url.clone();
        // checked in `with_client`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["oauth", "accessToken", access_token_id]);
        }
        url
    }

    async fn fetch(&self, url: Url) -> Result<(StatusCode, Vec<u8>), reqwest::Error> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        let body = resp.bytes().await?;

        Ok((status, body.to_vec()))
    }
}

#[async_trait]
impl AccessTokenSource for HttpAccessTokenSource {
    async fn get_access_token(&self, access_token_id: &str) -> Result<AccessToken, RestErr> {
        let url = self.access_token_url(access_token_id);

        let (status, body) = match tokio::time::timeout(self.timeout, self.fetch(url)).await {
            Ok(Ok(res)) => res,
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "oauth request failed");
                return Err(RestErr::internal_server_error(MSG_TRANSPORT));
            }
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "oauth request timed out"
                );
                return Err(RestErr::internal_server_error(MSG_TRANSPORT));
            }
        };

        decode_response(status, &body)
    }
}

/// Status > 399 is an error body, anything else a token record.
fn decode_response(status: StatusCode, body: &[u8]) -> Result<AccessToken, RestErr> {
    if status.as_u16() > 399 {
        return match serde_json::from_slice::<RestErr>(body) {
            Ok(rest_err) => Err(rest_err),
            Err(err) => {
                tracing::warn!(status = status.as_u16(), error = %err, "undecodable oauth error body");
                Err(RestErr::internal_server_error(MSG_INVALID_ERROR))
            }
        };
    }

    serde_json::from_slice::<AccessToken>(body).map_err(|err| {
        tracing::warn!(status = status.as_u16(), error = %err, "undecodable access token body");
        RestErr::internal_server_error(MSG_INVALID_BODY)
    })
}
