pub mod caller_ctx;

pub use caller_ctx::CallerCtx;
