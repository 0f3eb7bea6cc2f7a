//! Data models representing database entities and request bodies.

/// Account model and account request bodies
pub mod account;
/// Transfer request model
pub mod transfer;
