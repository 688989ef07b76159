/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - authenticator: oauth lookup + shared reqwest client (process-wide, built once)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::services::oauth::{Authenticator, HttpAccessTokenSource};

#[derive(Clone, Debug)]
pub struct AppState {
    pub authenticator: Arc<Authenticator<HttpAccessTokenSource>>,
}

impl AppState {
    pub fn new(authenticator: Arc<Authenticator<HttpAccessTokenSource>>) -> Self {
        Self { authenticator }
    }
}
