//! Authentication primitives shared across the workspace: JWT access-token
//! claims/validation and the axum principal extractors.

pub mod principal;
pub mod token;
