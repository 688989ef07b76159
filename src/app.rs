/*
 * Responsibility
 * - tracing / panic hook の初期化
 * - Config読み込み → 依存生成 (shared oauth client) → Router 組み立て
 * - Middleware の適用 (oauth access token, HTTP cross-cutting)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::{Context, Result};
use axum::Router;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::services::oauth::build_authenticator;
use crate::state::AppState;
use crate::{api, middleware};

fn init_tracing() {
    // RUST_LOG=info,oauth_interceptor=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // development: fail fast / production: default hook, keep serving
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env().context("loading configuration")?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        addr = %config.addr,
        oauth_base_url = %config.oauth.base_url,
        oauth_timeout_ms = config.oauth.timeout.as_millis() as u64,
        "starting in {:?} mode",
        config.app_env
    );

    let state = build_state(&config)?;
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("binding {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_state(config: &Config) -> Result<AppState> {
    // Process-wide: one reqwest client shared by every request.
    let authenticator = build_authenticator(config).context("building oauth client")?;

    Ok(AppState::new(authenticator))
}

pub fn build_router(state: AppState) -> Router {
    let v1 = middleware::auth::access::apply(api::v1::routes(), state.authenticator.clone());

    let router = Router::new().nest("/api/v1", v1).with_state(state);

    middleware::http::apply(router)
}
