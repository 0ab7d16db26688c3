//! Cross-cutting service plumbing: health endpoints, request middleware,
//! tracing setup, and shared serialization helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
