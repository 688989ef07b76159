// ============================================================================
// Test utilities
// ============================================================================
//
// - Fake oauth service (`GET /oauth/accessToken/{id}`) on 127.0.0.1:0
// - Config / AppState pointing at it
//
// Token ids understood by the fake service:
// - "abc"           -> 200 {"id":"abc","userId":42,"clientId":7}
// - "missing"       -> 404 {"status":404,"message":"not found"}
// - "go-missing"    -> 404 {"message":..,"status":404,"error":"not_found","causes":null}
// - "body-404"      -> 400 whose body says {"status":404,..}
// - "boom"          -> 500 {"status":500,"message":"database down"}
// - "bad-request"   -> 400 {"status":400,"message":"invalid token format"}
// - "garbled"       -> 200 with a non-JSON body
// - "garbled-error" -> 503 with a non-JSON body
// - "slow"          -> 200 after SLOW_DELAY; records whether the handler was
//                      dropped before finishing (client gave up)
// - anything else   -> 404
//
// ============================================================================
#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tokio::net::TcpListener;
use url::Url;

use oauth_interceptor::OAuthConfig;
use oauth_interceptor::services::oauth::{Authenticator, HttpAccessTokenSource};

pub const SLOW_DELAY: Duration = Duration::from_millis(400);

#[derive(Clone, Default)]
pub struct FakeOAuth {
    hits: Arc<AtomicUsize>,
    slow_cancelled: Arc<AtomicBool>,
}

impl FakeOAuth {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn slow_cancelled(&self) -> bool {
        self.slow_cancelled.load(Ordering::SeqCst)
    }
}

/// Flags `cancelled` if dropped while still armed.
struct CancelGuard {
    armed: bool,
    cancelled: Arc<AtomicBool>,
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        if self.armed {
            self.cancelled.store(true, Ordering::SeqCst);
        }
    }
}

async fn access_token(State(fake): State<FakeOAuth>, Path(id): Path<String>) -> Response {
    fake.hits.fetch_add(1, Ordering::SeqCst);

    match id.as_str() {
        "abc" => Json(json!({"id": "abc", "userId": 42, "clientId": 7})).into_response(),
        "boom" => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"status": 500, "message": "database down", "error": "internal_server_error"})),
        )
            .into_response(),
        "bad-request" => (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": 400, "message": "invalid token format", "error": "bad_request"})),
        )
            .into_response(),
        "garbled" => (StatusCode::OK, "<html>ok</html>").into_response(),
        "garbled-error" => (StatusCode::SERVICE_UNAVAILABLE, "<html>down</html>").into_response(),
        "go-missing" => (
            StatusCode::NOT_FOUND,
            Json(json!({
                "message": "no access token found with given id",
                "status": 404,
                "error": "not_found",
                "causes": null
            })),
        )
            .into_response(),
        "body-404" => (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": 404, "message": "not found", "error": null})),
        )
            .into_response(),
        "slow" => {
            let mut guard = CancelGuard {
                armed: true,
                cancelled: fake.slow_cancelled.clone(),
            };
            tokio::time::sleep(SLOW_DELAY).await;
            guard.armed = false;
            Json(json!({"id": "slow", "userId": 1, "clientId": 1})).into_response()
        }
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": 404, "message": "not found", "error": "not_found"})),
        )
            .into_response(),
    }
}

/// Starts the fake oauth service and returns its base URL.
pub async fn spawn_fake_oauth() -> (Url, FakeOAuth) {
    let fake = FakeOAuth::default();
    let app = Router::new()
        .route("/oauth/accessToken/{id}", get(access_token))
        .with_state(fake.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base_url = Url::parse(&format!("http://{addr}")).unwrap();
    (base_url, fake)
}

/// A base URL nothing listens on (connection refused).
pub async fn unreachable_base_url() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    Url::parse(&format!("http://{addr}")).unwrap()
}

pub fn authenticator(base_url: Url) -> Authenticator<HttpAccessTokenSource> {
    let source = HttpAccessTokenSource::new(OAuthConfig::new(base_url)).unwrap();
    Authenticator::new(Arc::new(source))
}
