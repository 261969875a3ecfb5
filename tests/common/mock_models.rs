//! Mock concentration models for testing
//!
//! These models have trivial analytical responses, which makes the generic
//! machinery (zero-time rule, short-duration superposition) easy to check.

use plume_rs::physics::ConcentrationModel;

// =================================================================================================
// Linear ramp: C(t) = rate·t
// =================================================================================================

/// Continuous release into a well-mixed volume without outflow
///
/// Analytical short-duration response: rate·t up to d, then rate·d.
pub struct LinearRamp {
    pub rate: f64,
}

impl LinearRamp {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

impl ConcentrationModel for LinearRamp {
    fn concentration(&self, _point: [f64; 3], t: f64) -> f64 {
        self.rate * t
    }

    fn name(&self) -> &str {
        "Linear Ramp"
    }
}

// =================================================================================================
// Saturating: C(t) = C∞·(1 - e^{-kt})
// =================================================================================================

/// Continuous release approaching a plateau
pub struct Saturating {
    pub plateau: f64,
    pub rate: f64,
}

impl Saturating {
    pub fn new(plateau: f64, rate: f64) -> Self {
        Self { plateau, rate }
    }

    /// Analytical short-duration response after the release stopped
    pub fn analytical_after(&self, t: f64, duration: f64) -> f64 {
        self.plateau * ((-self.rate * (t - duration)).exp() - (-self.rate * t).exp())
    }
}

impl ConcentrationModel for Saturating {
    fn concentration(&self, _point: [f64; 3], t: f64) -> f64 {
        self.plateau * (1.0 - (-self.rate * t).exp())
    }

    fn name(&self) -> &str {
        "Saturating"
    }
}
