/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - hand the authenticated request context (AuthCtx) to handlers
 * - HTTP / axum details stay in core, the type contract in types
 *
 * Public API:
 * - AuthCtx
 * - AuthCtxExtractor
 */

mod core;
mod types;

pub use core::AuthCtxExtractor;
pub use types::AuthCtx;
