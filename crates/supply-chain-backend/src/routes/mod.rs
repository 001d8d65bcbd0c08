//! HTTP route handlers.

pub mod fallback;
pub mod health;
