//! Access-token resolution: `?accessToken=` → oauth lookup → trusted identity headers.
//!
//! Order within one request is fixed:
//! clean trusted headers → extract token → remote lookup → write identity.
//!
//! Outcome classes:
//! - no / blank token: anonymous, no remote call
//! - upstream status 404: anonymous (unknown tokens degrade to public access)
//! - any other upstream error, transport failure or timeout: internal error
//! - resolved token: `X-Client-Id` / `X-Caller-Id` set from the record
use std::sync::Arc;

use axum::http::{Request, Uri};

use crate::error::RestErr;
use crate::services::oauth::access_token::{AccessToken, AccessTokenSource};
use crate::services::oauth::headers;

pub const PARAM_ACCESS_TOKEN: &str = "accessToken";

/// Result of classifying one remote lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(AccessToken),
    Anonymous,
    Failed(RestErr),
}

impl Resolution {
    pub fn classify(res: Result<AccessToken, RestErr>) -> Self {
        match res {
            Ok(at) => Self::Resolved(at),
            Err(err) if err.is_not_found() => Self::Anonymous,
            Err(err) => Self::Failed(RestErr::internal_server_error(err.message)),
        }
    }
}

/// What `authenticate_request` left on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Authenticated { caller_id: i64, client_id: i64 },
    Anonymous,
}

pub struct Authenticator<S: AccessTokenSource> {
    source: Arc<S>,
}

impl<S: AccessTokenSource> Clone for Authenticator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S: AccessTokenSource> std::fmt::Debug for Authenticator<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator").finish_non_exhaustive()
    }
}

impl<S: AccessTokenSource> Authenticator<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Resolves the request's access token and writes the verified identity.
    ///
    /// Forged `X-Caller-Id` / `X-Client-Id` are removed before anything else,
    /// even when no token is present. `Err` means identity could not be
    /// determined; the caller turns it into an error response.
    pub async fn authenticate_request<B>(
        &self,
        req: Option<&mut Request<B>>,
    ) -> Result<Outcome, RestErr> {
        let Some(req) = req else {
            return Ok(Outcome::Anonymous);
        };

        headers::clean_request(req.headers_mut());

        let Some(token) = access_token_param(req.uri()) else {
            tracing::debug!("no access token, anonymous request");
            return Ok(Outcome::Anonymous);
        };

        match self.resolve(&token).await {
            Resolution::Resolved(at) => {
                headers::set_identity(req.headers_mut(), at.user_id, at.client_id);
                tracing::debug!(
                    caller_id = at.user_id,
                    client_id = at.client_id,
                    "access token resolved"
                );
                Ok(Outcome::Authenticated {
                    caller_id: at.user_id,
                    client_id: at.client_id,
                })
            }
            Resolution::Anonymous => {
                tracing::debug!("unknown access token, treating request as anonymous");
                Ok(Outcome::Anonymous)
            }
            Resolution::Failed(err) => Err(err),
        }
    }

    /// One lookup, classified. Does not touch any request.
    pub async fn resolve(&self, access_token_id: &str) -> Resolution {
        let res = self.source.get_access_token(access_token_id).await;
        if let Err(err) = &res
            && !err.is_not_found()
        {
            tracing::warn!(status = err.status, message = %err.message, "access token lookup failed");
        }
        Resolution::classify(res)
    }
}

/// First `accessToken` query value, whitespace-trimmed; `None` when absent or blank.
pub fn access_token_param(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    let (_, value) = url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == PARAM_ACCESS_TOKEN)?;

    let token = value.trim();
    (!token.is_empty()).then(|| token.to_string())
}
