//! Consumers that only see the factory abstraction.

pub mod furniture_client;

pub use furniture_client::*;
