//! Access-token record and the lookup interface used by the authenticator.
use async_trait::async_trait;
use serde::Deserialize;

use crate::error::RestErr;

/// Identity record returned by the oauth service for a presented token.
///
/// Lives only for the duration of one resolution; the two ids are copied into
/// request headers and the record is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub id: String,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub client_id: i64,
}

/// Source of truth for access tokens.
///
/// `Err` carries either an upstream error decoded from the service (its
/// `status` is what the authenticator classifies on) or an internal error for
/// transport / decoding failures.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait AccessTokenSource: Send + Sync + 'static {
    async fn get_access_token(&self, access_token_id: &str) -> Result<AccessToken, RestErr>;
}
