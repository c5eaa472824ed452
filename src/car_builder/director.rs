//! Named construction recipes.
//!
//! The [`Director`] never resets the builder it drives. Callers must call
//! [`CarBuilder::reset`] (or [`Director::reset_builder`]) between sessions, otherwise
//! the parts of consecutive recipes are concatenated into one car.

use super::{BuilderError, CarBuilder};
use crate::model::Feature;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, instrument};

/// A fixed, ordered sequence of builder steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Recipe {
    /// Four seats and an oil engine.
    Basic,
    /// Four seats, a gas engine and GPS.
    FullFeatured,
}

impl Recipe {
    pub fn steps(self) -> Vec<Feature> {
        match self {
            Recipe::Basic => vec![Feature::Seats(4), Feature::Engine("Oil".to_string())],
            Recipe::FullFeatured => vec![
                Feature::Seats(4),
                Feature::Engine("Gas".to_string()),
                Feature::Gps,
            ],
        }
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipe::Basic => f.write_str("basic"),
            Recipe::FullFeatured => f.write_str("full-featured"),
        }
    }
}

/// Sequences builder calls into recipes.
///
/// Holds no state; the builder is borrowed for the duration of each call only.
#[derive(Debug, Clone, Copy, Default)]
pub struct Director;

impl Director {
    pub fn new() -> Self {
        Self
    }

    /// Applies every step of `recipe` to `builder`, in order.
    ///
    /// Stops at the first rejected step. Steps applied before it stay in the builder.
    #[instrument(skip(self, builder))]
    pub fn construct<B: CarBuilder + ?Sized>(
        &self,
        recipe: Recipe,
        builder: &mut B,
    ) -> Result<(), BuilderError> {
        for feature in recipe.steps() {
            builder.apply(feature)?;
        }
        info!(parts = builder.result().len(), "Recipe applied");
        Ok(())
    }

    pub fn build_basic_car<B: CarBuilder + ?Sized>(&self, builder: &mut B) -> Result<(), BuilderError> {
        self.construct(Recipe::Basic, builder)
    }

    pub fn build_full_featured_car<B: CarBuilder + ?Sized>(
        &self,
        builder: &mut B,
    ) -> Result<(), BuilderError> {
        self.construct(Recipe::FullFeatured, builder)
    }

    /// Starts a new session on `builder`. Recipes never do this on their own.
    pub fn reset_builder<B: CarBuilder + ?Sized>(&self, builder: &mut B) {
        builder.reset();
    }
}
