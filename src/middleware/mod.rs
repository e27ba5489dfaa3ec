/*
 * Responsibility
 * - public interface of the middleware stack (re-export)
 */
pub mod auth;
pub mod cors;
pub mod http;
pub mod security_headers;
