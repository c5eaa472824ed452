//! The builder abstraction and its concrete car implementation.

use super::BuilderError;
use crate::model::{Car, Feature};
use tracing::{debug, warn};

/// Step-wise construction of a [`Car`].
///
/// A builder is either *empty* (right after [`reset`](Self::reset)) or *accumulating*
/// (after at least one successful [`apply`](Self::apply)). Reading the result is valid
/// in both states and never clears it.
///
/// Builders hold mutable state without internal locking: one writer at a time.
pub trait CarBuilder {
    /// Discards the current car and starts a fresh, empty one.
    fn reset(&mut self);

    /// Appends one feature to the current car.
    ///
    /// # Errors
    /// [`BuilderError::InvalidParameter`] for zero seats or a blank engine label. The
    /// current car is left unchanged.
    fn apply(&mut self, feature: Feature) -> Result<(), BuilderError>;

    /// The car built so far, in application order.
    fn result(&self) -> &Car;

    fn set_seats(&mut self, count: u32) -> Result<(), BuilderError> {
        self.apply(Feature::Seats(count))
    }

    fn set_engine(&mut self, engine: &str) -> Result<(), BuilderError> {
        self.apply(Feature::Engine(engine.to_string()))
    }

    fn add_gps(&mut self) -> Result<(), BuilderError> {
        self.apply(Feature::Gps)
    }
}

/// Checks a feature's parameters before it reaches an accumulator.
pub fn validate(feature: &Feature) -> Result<(), BuilderError> {
    match feature {
        Feature::Seats(0) => Err(BuilderError::InvalidParameter {
            step: "seats",
            reason: "seat count must be positive".to_string(),
        }),
        Feature::Engine(engine) if engine.trim().is_empty() => Err(BuilderError::InvalidParameter {
            step: "engine",
            reason: "engine label must not be blank".to_string(),
        }),
        _ => Ok(()),
    }
}

/// The concrete builder. Owns exactly one [`Car`] at a time.
#[derive(Debug, Default)]
pub struct CarAssembler {
    car: Car,
}

impl CarAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the finished car out and leaves an empty one in its place.
    pub fn take_result(&mut self) -> Car {
        std::mem::take(&mut self.car)
    }
}

impl CarBuilder for CarAssembler {
    fn reset(&mut self) {
        debug!(discarded = self.car.len(), "Reset");
        self.car = Car::new();
    }

    fn apply(&mut self, feature: Feature) -> Result<(), BuilderError> {
        if let Err(e) = validate(&feature) {
            warn!(?feature, error = %e, "Feature rejected");
            return Err(e);
        }
        self.car.push(&feature);
        debug!(?feature, size = self.car.len(), "Applied");
        Ok(())
    }

    fn result(&self) -> &Car {
        &self.car
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_builder_is_empty() {
        let builder = CarAssembler::new();
        assert!(builder.result().is_empty());
    }

    #[test]
    fn test_apply_preserves_order() {
        let mut builder = CarAssembler::new();
        builder.add_gps().unwrap();
        builder.set_engine("Diesel").unwrap();
        builder.set_seats(2).unwrap();

        assert_eq!(
            builder.result().parts(),
            ["- has GPS system", "- uses Diesel", "- has 2 seats"]
        );
    }

    #[test]
    fn test_result_does_not_clear() {
        let mut builder = CarAssembler::new();
        builder.set_seats(5).unwrap();

        let first = builder.result().clone();
        let second = builder.result().clone();
        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_reset_clears() {
        let mut builder = CarAssembler::new();
        builder.set_seats(4).unwrap();
        builder.add_gps().unwrap();

        builder.reset();
        assert!(builder.result().is_empty());
    }

    #[test]
    fn test_zero_seats_rejected() {
        let mut builder = CarAssembler::new();
        builder.set_engine("Oil").unwrap();

        let err = builder.set_seats(0).unwrap_err();
        assert!(matches!(err, BuilderError::InvalidParameter { step: "seats", .. }));
        assert_eq!(builder.result().parts(), ["- uses Oil"]);
    }

    #[test]
    fn test_blank_engine_rejected() {
        let mut builder = CarAssembler::new();
        let err = builder.set_engine("   ").unwrap_err();
        assert!(matches!(err, BuilderError::InvalidParameter { step: "engine", .. }));
        assert!(builder.result().is_empty());
    }

    #[test]
    fn test_take_result_leaves_empty_builder() {
        let mut builder = CarAssembler::new();
        builder.set_seats(2).unwrap();

        let car = builder.take_result();
        assert_eq!(car.parts(), ["- has 2 seats"]);
        assert!(builder.result().is_empty());
    }
}
