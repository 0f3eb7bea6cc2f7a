//! HTTP middleware.
//!
//! Middleware runs before route handlers.

/// Request header size limit
pub mod limits;
