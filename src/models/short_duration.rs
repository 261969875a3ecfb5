//! Finite-duration release by superposition
//!
//! A release of length d is a continuous release minus the same release
//! started d later:
//!
//! ```text
//! C_short(t) = C_cont(t)                            t ≤ d
//! C_short(t) = max(0, C_cont(t) - C_cont(t - d))    t > d
//! ```
//!
//! For t ≤ d the continuous response is returned untouched. Past the end of
//! the release the difference is clipped, since cancellation can leave small
//! negative residues.

use crate::physics::ConcentrationModel;

/// Continuous-release model switched off after `duration`
#[derive(Debug, Clone)]
pub struct ShortDuration<M> {
    continuous: M,
    duration: f64,
    name: String,
}

impl<M: ConcentrationModel> ShortDuration<M> {
    pub fn new(continuous: M, duration: f64) -> Self {
        let name = format!("{} (short duration)", continuous.name());
        Self { continuous, duration, name }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// The underlying continuous release
    pub fn continuous(&self) -> &M {
        &self.continuous
    }
}

impl<M: ConcentrationModel> ConcentrationModel for ShortDuration<M> {
    fn concentration(&self, point: [f64; 3], t: f64) -> f64 {
        let current = self.continuous.concentration(point, t);
        if t <= self.duration {
            return current;
        }
        let shifted = self.continuous.concentration(point, t - self.duration);
        (current - shifted).max(0.0)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> Option<&str> {
        self.continuous.description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::kernel::GreenKernel;
    use crate::models::point::ContinuousPoint;
    use crate::physics::{Dispersion, TransportParameters};

    fn continuous() -> ContinuousPoint {
        let params = TransportParameters::new(0.3, 10.0, Dispersion::new(0.5, 0.1, 0.0), 0.1);
        ContinuousPoint::new(GreenKernel::for_dimension(2, &params), 50.0)
    }

    #[test]
    fn test_identical_during_release() {
        let short = ShortDuration::new(continuous(), 100.0);
        let p = [5.0, 0.5, 0.0];
        for t in [1.0, 50.0, 100.0] {
            assert_eq!(short.concentration(p, t), short.continuous().concentration(p, t));
        }
    }

    #[test]
    fn test_plume_detaches_after_release() {
        // Long after the release stops, the source area clears
        let short = ShortDuration::new(continuous(), 50.0);
        let p = [0.5, 0.0, 0.0];
        let during = short.concentration(p, 50.0);
        let after = short.concentration(p, 1000.0);
        assert!(after < 0.1 * during);
        assert!(after >= 0.0);
    }

    #[test]
    fn test_name_mentions_duration() {
        let short = ShortDuration::new(continuous(), 10.0);
        assert_eq!(short.name(), "Continuous point source (short duration)");
        assert_eq!(short.duration(), 10.0);
    }
}
