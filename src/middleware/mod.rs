/*
 * Responsibility
 * - public middleware interface (re-exports)
 */
pub mod cors;
pub mod http;
pub mod security_headers;
pub mod token_revocation;
