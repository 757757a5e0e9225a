//! `reventa-observability` — tracing/logging setup.

pub mod tracing;

pub use tracing::init;
