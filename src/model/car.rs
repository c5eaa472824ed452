use serde::{Deserialize, Serialize};
use std::fmt;

/// A single construction step understood by every [`CarBuilder`](crate::car_builder::CarBuilder).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feature {
    /// Number of seats. Must be positive.
    Seats(u32),
    /// Power source label, e.g. `Oil` or `Gas`. Must not be blank.
    Engine(String),
    /// Satellite navigation.
    Gps,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Seats(count) => write!(f, "- has {} seats", count),
            Feature::Engine(engine) => write!(f, "- uses {}", engine),
            Feature::Gps => f.write_str("- has GPS system"),
        }
    }
}

/// The product under construction: an ordered list of part descriptions.
///
/// Append-only while a builder owns it; replaced wholesale on reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    parts: Vec<String>,
}

impl Car {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub(crate) fn push(&mut self, feature: &Feature) {
        self.parts.push(feature.to_string());
    }
}
