//! Request-authentication interceptor backed by a remote oauth service.
//!
//! Every request has its trusted identity headers (`X-Caller-Id`,
//! `X-Client-Id`) stripped, then re-derived from `?accessToken=` via
//! `GET /oauth/accessToken/{id}`. Downstream code reads them back with
//! [`services::oauth::get_caller_id`] and friends.
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod state;

pub use error::RestErr;
pub use services::oauth::{
    AccessToken, AccessTokenSource, Authenticator, HttpAccessTokenSource, OAuthConfig, Outcome,
    Resolution,
};
