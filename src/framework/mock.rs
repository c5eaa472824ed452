//! # Mock Builder
//!
//! Utilities for testing code that drives a [`CarBuilder`] without caring what the
//! builder accumulates.
//!
//! Queue the calls you expect with [`MockCarBuilder::expect_apply`] and
//! [`MockCarBuilder::expect_reset`], run the code under test, then call
//! [`MockCarBuilder::verify`]. Calls arriving out of order panic immediately.
//!
//! # Example
//! ```ignore
//! let mut mock = MockCarBuilder::new();
//! mock.expect_apply(Feature::Seats(4)).return_ok();
//! mock.expect_apply(Feature::Engine("Oil".into())).return_ok();
//!
//! Director::new().build_basic_car(&mut mock)?;
//! mock.verify();
//! ```

use crate::car_builder::{BuilderError, CarBuilder};
use crate::model::{Car, Feature};
use std::collections::VecDeque;

/// Represents one expected call on the mock builder.
#[derive(Debug)]
enum Expectation {
    Reset,
    Apply {
        feature: Feature,
        response: Result<(), BuilderError>,
    },
}

/// A [`CarBuilder`] that replays scripted responses.
///
/// Features whose expectation returns `Ok` are appended to the mock's own [`Car`], so
/// [`CarBuilder::result`] behaves like a real builder.
#[derive(Debug, Default)]
pub struct MockCarBuilder {
    expectations: VecDeque<Expectation>,
    car: Car,
}

impl MockCarBuilder {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects an `apply` call with exactly `feature`.
    pub fn expect_apply(&mut self, feature: Feature) -> ApplyExpectationBuilder<'_> {
        ApplyExpectationBuilder {
            feature,
            expectations: &mut self.expectations,
        }
    }

    /// Expects a `reset` call.
    pub fn expect_reset(&mut self) {
        self.expectations.push_back(Expectation::Reset);
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        if !self.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                self.expectations.len()
            );
        }
    }
}

impl CarBuilder for MockCarBuilder {
    fn reset(&mut self) {
        match self.expectations.pop_front() {
            Some(Expectation::Reset) => self.car = Car::new(),
            other => panic!("Unexpected reset, expected {:?}", other),
        }
    }

    fn apply(&mut self, feature: Feature) -> Result<(), BuilderError> {
        match self.expectations.pop_front() {
            Some(Expectation::Apply {
                feature: expected,
                response,
            }) => {
                assert_eq!(feature, expected, "Unexpected feature applied");
                if response.is_ok() {
                    self.car.push(&feature);
                }
                response
            }
            other => panic!("Unexpected apply({:?}), expected {:?}", feature, other),
        }
    }

    fn result(&self) -> &Car {
        &self.car
    }
}

/// Builder for `apply` expectations.
pub struct ApplyExpectationBuilder<'a> {
    feature: Feature,
    expectations: &'a mut VecDeque<Expectation>,
}

impl ApplyExpectationBuilder<'_> {
    /// Sets the expectation to accept the feature.
    pub fn return_ok(self) {
        self.expectations.push_back(Expectation::Apply {
            feature: self.feature,
            response: Ok(()),
        });
    }

    /// Sets the expectation to reject the feature with `error`.
    pub fn return_err(self, error: BuilderError) {
        self.expectations.push_back(Expectation::Apply {
            feature: self.feature,
            response: Err(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_accepted_features() {
        let mut mock = MockCarBuilder::new();
        mock.expect_apply(Feature::Gps).return_ok();
        mock.expect_reset();

        mock.add_gps().unwrap();
        assert_eq!(mock.result().parts(), ["- has GPS system"]);

        mock.reset();
        assert!(mock.result().is_empty());
        mock.verify();
    }

    #[test]
    fn test_mock_returns_scripted_error() {
        let err = BuilderError::InvalidParameter {
            step: "seats",
            reason: "scripted".to_string(),
        };
        let mut mock = MockCarBuilder::new();
        mock.expect_apply(Feature::Seats(4)).return_err(err.clone());

        assert_eq!(mock.set_seats(4), Err(err));
        assert!(mock.result().is_empty());
        mock.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected reset")]
    fn test_mock_panics_on_unexpected_call() {
        let mut mock = MockCarBuilder::new();
        mock.reset();
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_leftovers() {
        let mut mock = MockCarBuilder::new();
        mock.expect_reset();
        mock.verify();
    }
}
