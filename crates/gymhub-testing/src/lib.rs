//! Test utilities for Gymhub services.
//!
//! Provides signed-token helpers for exercising bearer-authenticated routes.
//! Import in `#[cfg(test)]` blocks and `tests/` only — never in production code.

pub mod auth;
