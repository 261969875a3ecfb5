//! Continuous inlet on a semi-infinite 1D column
//!
//! # Mathematical Background
//!
//! With a fixed concentration C₀ at x = 0 for t > 0, advection u, dispersion
//! D and first-order decay λ, the exact solution on x ≥ 0 is
//!
//! ```text
//! C(x,t) = C₀/2 · [ exp((u-w)·x / 2D) · erfc((x - w·t) / 2√(Dt))
//!                 + exp((u+w)·x / 2D) · erfc((x + w·t) / 2√(Dt)) ]
//!
//! w = √(u² + 4λD)
//! ```
//!
//! At x = 0 the brackets sum to 2 for every t, so C(0,t) = C₀.
//!
//! ## Evaluation
//!
//! The second product pairs a huge exponential with a vanishing erfc far
//! downstream. Both products are formed as `exp(a + ln erfc(b))`, with an
//! asymptotic expansion of `ln erfc` once erfc itself would underflow.
//!
//! Points upstream of the inlet (x < 0) lie in the source reservoir and
//! read C₀.

use crate::models::kernel::floored_dispersion;
use crate::physics::{ConcentrationModel, TransportParameters};

/// Beyond this argument erfc is taken from its asymptotic series
const ERFC_ASYMPTOTIC: f64 = 6.0;

/// Fixed-concentration inlet with the closed-form solution
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletContinuous {
    inlet: f64,
    velocity: f64,
    dispersion: f64,
    decay: f64,
}

impl InletContinuous {
    /// `dispersion` below `DISPERSION_EPSILON` is raised to it
    pub fn new(inlet: f64, velocity: f64, dispersion: f64, decay: f64) -> Self {
        Self {
            inlet,
            velocity,
            dispersion: floored_dispersion(dispersion),
            decay,
        }
    }

    /// Inlet concentration from a release, transport coefficients from `params`
    pub fn from_parameters(inlet: f64, params: &TransportParameters) -> Self {
        Self::new(
            inlet,
            params.velocity,
            params.dispersion.longitudinal,
            params.decay,
        )
    }

    /// Decay-modified wave speed w
    pub fn wave_speed(&self) -> f64 {
        (self.velocity * self.velocity + 4.0 * self.decay * self.dispersion).sqrt()
    }
}

impl ConcentrationModel for InletContinuous {
    fn concentration(&self, point: [f64; 3], t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let x = point[0];
        if x < 0.0 {
            return self.inlet;
        }

        let d = self.dispersion;
        let u = self.velocity;
        let w = self.wave_speed();
        let spread = 2.0 * (d * t).sqrt();

        let upstream = ((u - w) * x / (2.0 * d) + ln_erfc((x - w * t) / spread)).exp();
        let downstream = ((u + w) * x / (2.0 * d) + ln_erfc((x + w * t) / spread)).exp();

        0.5 * self.inlet * (upstream + downstream)
    }

    fn name(&self) -> &str {
        "Continuous 1D inlet"
    }

    fn description(&self) -> Option<&str> {
        Some("Exact advection-dispersion-decay solution for a fixed inlet concentration")
    }
}

/// Natural logarithm of erfc, finite far into the tail
fn ln_erfc(z: f64) -> f64 {
    if z < ERFC_ASYMPTOTIC {
        return libm::erfc(z).ln();
    }

    // erfc(z) ≈ exp(-z²)/(z√π) · (1 - 1/(2z²) + 3/(4z⁴) - 15/(8z⁶))
    let inv = 1.0 / (z * z);
    let series = 1.0 - 0.5 * inv + 0.75 * inv * inv - 1.875 * inv * inv * inv;
    -z * z - (z * std::f64::consts::PI.sqrt()).ln() + series.ln()
}
