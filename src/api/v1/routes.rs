/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /me
 * - access token の解決は middleware (app.rs で適用) に任せる
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{health::health, me::me};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/me", get(me))
}
