//! Shared plumbing for the demos.
//!
//! - [`Report`] - Line-oriented console output used by every demo
//!
//! # Testing
//!
//! See [`mock`] module for a scripted [`CarBuilder`](crate::car_builder::CarBuilder)
//! that checks the exact sequence of calls a director makes.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
