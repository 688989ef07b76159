//! Trusted identity headers.
//!
//! `X-Caller-Id` / `X-Client-Id` are written only by the authenticator, from a
//! verified oauth response. `X-Public` is set upstream and only read here.
//!
//! The accessors never fail: an absent request, a missing header or a value
//! that is not a decimal i64 all read as "no identity".

use axum::http::{HeaderMap, HeaderValue, Request, request::Parts};

pub const HEADER_X_PUBLIC: &str = "x-public";
pub const HEADER_X_CLIENT_ID: &str = "x-client-id";
pub const HEADER_X_CALLER_ID: &str = "x-caller-id";

/// Anything the accessors can read headers from.
///
/// Middleware sees a whole `Request<B>`, extractors only see `Parts`.
pub trait HasHeaders {
    fn headers(&self) -> &HeaderMap;
}

impl HasHeaders for HeaderMap {
    fn headers(&self) -> &HeaderMap {
        self
    }
}

impl HasHeaders for Parts {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

impl<B> HasHeaders for Request<B> {
    fn headers(&self) -> &HeaderMap {
        Request::headers(self)
    }
}

/// Strips any client-supplied trusted identity headers. Idempotent.
pub fn clean_request(headers: &mut HeaderMap) {
    headers.remove(HEADER_X_CALLER_ID);
    headers.remove(HEADER_X_CLIENT_ID);
}

/// Writes the verified identity. Replaces, never appends.
pub(crate) fn set_identity(headers: &mut HeaderMap, caller_id: i64, client_id: i64) {
    headers.insert(HEADER_X_CLIENT_ID, HeaderValue::from(client_id));
    headers.insert(HEADER_X_CALLER_ID, HeaderValue::from(caller_id));
}

/// `true` when the request is absent or carries `X-Public: true` (exact match).
pub fn is_public<R: HasHeaders + ?Sized>(req: Option<&R>) -> bool {
    match req {
        None => true,
        Some(req) => req
            .headers()
            .get(HEADER_X_PUBLIC)
            .is_some_and(|v| v.as_bytes() == b"true"),
    }
}

/// Caller id, or `0` when absent or malformed.
pub fn get_caller_id<R: HasHeaders + ?Sized>(req: Option<&R>) -> i64 {
    caller_id(req).unwrap_or(0)
}

/// Client id, or `0` when absent or malformed.
pub fn get_client_id<R: HasHeaders + ?Sized>(req: Option<&R>) -> i64 {
    client_id(req).unwrap_or(0)
}

/// Caller id, distinguishing "no identity" (`None`) from a literal `0`.
pub fn caller_id<R: HasHeaders + ?Sized>(req: Option<&R>) -> Option<i64> {
    req.and_then(|r| parse_id(r.headers(), HEADER_X_CALLER_ID))
}

/// Client id, distinguishing "no identity" (`None`) from a literal `0`.
pub fn client_id<R: HasHeaders + ?Sized>(req: Option<&R>) -> Option<i64> {
    req.and_then(|r| parse_id(r.headers(), HEADER_X_CLIENT_ID))
}

fn parse_id(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers.get(name)?.to_str().ok()?.parse::<i64>().ok()
}
