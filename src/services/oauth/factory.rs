/// Factory: build the process-wide `Authenticator` from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::oauth::{Authenticator, HttpAccessTokenSource, OAuthClientError};

pub fn build_authenticator(
    config: &Config,
) -> Result<Arc<Authenticator<HttpAccessTokenSource>>, OAuthClientError> {
    let source = HttpAccessTokenSource::new(config.oauth.clone())?;

    Ok(Arc::new(Authenticator::new(Arc::new(source))))
}
