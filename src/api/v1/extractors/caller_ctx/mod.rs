/*!
 * Caller context extractor
 *
 * Public API:
 * - CallerCtx
 */

mod core;
mod types;

pub use types::CallerCtx;
