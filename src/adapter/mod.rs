//! Fitting square pegs into round holes.
//!
//! [`RoundHole`] only understands [`Round`] things. [`SquarePeg`] has a width, not a
//! radius, so [`SquarePegAdapter`] wraps it and reports the radius of the smallest
//! circle the square fits in.

use tracing::debug;

/// Something with a radius.
pub trait Round {
    fn radius(&self) -> f64;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundHole {
    radius: f64,
}

impl RoundHole {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn fits<P: Round + ?Sized>(&self, peg: &P) -> bool {
        let fits = self.radius >= peg.radius();
        debug!(hole = self.radius, peg = peg.radius(), fits, "Fit check");
        fits
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundPeg {
    radius: f64,
}

impl RoundPeg {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Round for RoundPeg {
    fn radius(&self) -> f64 {
        self.radius
    }
}

/// A peg from a provider that only knows about widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePeg {
    width: f64,
}

impl SquarePeg {
    pub fn new(width: f64) -> Self {
        Self { width }
    }

    pub fn width(&self) -> f64 {
        self.width
    }
}

/// Presents a [`SquarePeg`] as [`Round`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquarePegAdapter {
    peg: SquarePeg,
}

impl SquarePegAdapter {
    pub fn new(peg: SquarePeg) -> Self {
        Self { peg }
    }

    pub fn inner(&self) -> &SquarePeg {
        &self.peg
    }
}

impl From<SquarePeg> for SquarePegAdapter {
    fn from(peg: SquarePeg) -> Self {
        Self::new(peg)
    }
}

impl Round for SquarePegAdapter {
    // Half the diagonal.
    fn radius(&self) -> f64 {
        self.peg.width() * std::f64::consts::SQRT_2 / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_peg_fits_equal_hole() {
        let hole = RoundHole::new(5.0);
        assert!(hole.fits(&RoundPeg::new(5.0)));
        assert!(!hole.fits(&RoundPeg::new(6.0)));
    }

    #[test]
    fn test_adapter_radius_is_half_diagonal() {
        let adapter = SquarePegAdapter::from(SquarePeg::new(2.0));
        assert!((adapter.radius() - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_square_pegs_through_adapter() {
        let hole = RoundHole::new(5.0);
        assert!(hole.fits(&SquarePegAdapter::new(SquarePeg::new(5.0))));
        assert!(!hole.fits(&SquarePegAdapter::new(SquarePeg::new(10.0))));
    }
}
