/*
 * Responsibility
 * - Request authentication against the oauth service
 *   - headers: trusted identity headers (sanitizer + accessors)
 *   - client: shared HTTP client for `GET /oauth/accessToken/{id}`
 *   - authenticator: token extraction, classification, header injection
 */
pub mod access_token;
pub mod authenticator;
pub mod client;
pub mod factory;
pub mod headers;

pub use access_token::{AccessToken, AccessTokenSource};
pub use authenticator::{Authenticator, Outcome, Resolution};
pub use client::{HttpAccessTokenSource, OAuthClientError, OAuthConfig};
pub use factory::build_authenticator;
pub use headers::{
    HasHeaders, caller_id, clean_request, client_id, get_caller_id, get_client_id, is_public,
};
