//! Error types for car builders.

use thiserror::Error;

/// Errors that can occur while applying a construction step.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuilderError {
    /// A step was given a value outside its domain (zero seats, blank engine label).
    #[error("Invalid parameter for {step}: {reason}")]
    InvalidParameter { step: &'static str, reason: String },
}
