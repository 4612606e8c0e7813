//! Shared test utilities used across ergraph crates.

pub mod property;
pub mod tracing;
