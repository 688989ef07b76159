//! access token (`?accessToken=`) → oauth lookup → `X-Caller-Id` / `X-Client-Id`
//!
//! - 先頭で trusted headers を必ず削除する (client からの偽装対策)
//! - token なし / 未知の token は anonymous として通す
//! - oauth service に到達できない等の失敗は RestErr (500) で打ち切る
//! - 認可 (public でない route に caller が必要か) は handler/extractor 側の責務

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::RestErr;
use crate::services::oauth::{AccessTokenSource, Authenticator};

/// Runs the authenticator in front of every route of `router`.
///
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::access::apply(v1, state.authenticator.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply<T, S>(router: Router<T>, authenticator: Arc<Authenticator<S>>) -> Router<T>
where
    T: Clone + Send + Sync + 'static,
    S: AccessTokenSource,
{
    // from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に渡す
    router.layer(middleware::from_fn_with_state(
        authenticator,
        access_middleware::<S>,
    ))
}

async fn access_middleware<S: AccessTokenSource>(
    State(authenticator): State<Arc<Authenticator<S>>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, RestErr> {
    if let Err(err) = authenticator.authenticate_request(Some(&mut req)).await {
        tracing::warn!(
            method = %req.method(),
            path = req.uri().path(),
            status = err.status,
            "request authentication failed"
        );
        return Err(err);
    }

    // middleware → handler/extractor への受け渡しは headers 経由
    Ok(next.run(req).await)
}
