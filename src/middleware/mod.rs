/*
 * Responsibility
 * - middleware の公開インターフェース
 *   - auth: access token → trusted identity headers
 *   - http: request id / trace / body limit / timeout
 */
pub mod auth;
pub mod http;
