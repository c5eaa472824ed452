//! Process-level setup for the demo binary.

pub mod tracing;

pub use self::tracing::setup_tracing;
