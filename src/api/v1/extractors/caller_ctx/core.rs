use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::services::oauth::{get_caller_id, get_client_id, is_public};

use super::CallerCtx;

/// Handler で CallerCtx を受け取るための extractor
/// middleware が trusted headers を整えた後である前提。失敗しない (anonymous は 0)
impl<S> FromRequestParts<S> for CallerCtx
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self {
            caller_id: get_caller_id(Some(&*parts)),
            client_id: get_client_id(Some(&*parts)),
            public: is_public(Some(&*parts)),
        })
    }
}
