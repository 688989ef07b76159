/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV, oauth service address / timeout)
 * - 設定値のバリデーション (不正なら起動失敗)
 */
use std::fmt;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::services::oauth::OAuthConfig;
use crate::services::oauth::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub oauth: OAuthConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (env vars in production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(s) => s.parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };

        let addr: SocketAddr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = lookup("APP_ENV")
            .map(|v| AppEnv::parse(&v))
            .unwrap_or(AppEnv::Development);

        let base_url = lookup("OAUTH_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&base_url).ok_or(ConfigError::Invalid("OAUTH_BASE_URL"))?;

        let timeout = match lookup("OAUTH_TIMEOUT_MS") {
            Some(v) => v
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .ok_or(ConfigError::Invalid("OAUTH_TIMEOUT_MS"))?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            addr,
            app_env,
            oauth: OAuthConfig::new(base_url).with_timeout(timeout),
        })
    }
}

fn parse_base_url(raw: &str) -> Option<Url> {
    let url = Url::parse(raw.trim()).ok()?;
    let http = matches!(url.scheme(), "http" | "https");

    (http && url.has_host()).then_some(url)
}
