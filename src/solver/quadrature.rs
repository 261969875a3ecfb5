//! Time-integration engine
//!
//! A continuous release is a superposition of instantaneous slugs released at
//! every past instant. Its concentration after elapsed time `t` is
//!
//! ```text
//! C(x, t) = ∫₀ᵗ rate · G(x, τ) dτ
//! ```
//!
//! where `G(x, τ)` is the instantaneous kernel for a slug of age `τ`.
//!
//! The integral is approximated with a fixed number of equally spaced ages,
//!
//! ```text
//! τ_k = τ₀ + k·Δτ,   k = 0 … N-1,   Δτ = (t - τ₀) / (N - 1)
//! C ≈ Δτ · Σ_k rate · G(x, τ_k)
//! ```
//!
//! with `N = QUADRATURE_STEPS` and `τ₀ = QUADRATURE_START`. The kernel is
//! singular at τ = 0, hence the small positive start. The N ages include both
//! ends of [τ₀, t], so Δτ = (t - τ₀)/(N - 1) rather than t/N. The resulting
//! left-endpoint bias is bounded and accepted; the resolution is not
//! user-tunable so that continuous and short-duration results computed at
//! different times stay comparable.

use log::trace;

use crate::constants::{QUADRATURE_START, QUADRATURE_STEPS};

/// Fixed-resolution quadrature over release age
///
/// # Example
///
/// ```rust
/// use plume_rs::solver::TimeIntegrator;
///
/// let integrator = TimeIntegrator::new();
///
/// // ∫ 1 dτ over (τ₀, t] approaches t
/// let value = integrator.integrate(50.0, |_tau| 1.0);
/// assert!((value - 50.0).abs() / 50.0 < 0.02);
///
/// // No release yet
/// assert_eq!(integrator.integrate(0.0, |_tau| 1.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeIntegrator;

impl TimeIntegrator {
    /// Create the integrator
    pub fn new() -> Self {
        Self
    }

    /// Number of sampled ages
    pub fn steps(&self) -> usize {
        QUADRATURE_STEPS
    }

    /// First sampled age and the age step for elapsed time `t > 0`
    ///
    /// For `t` shorter than [`QUADRATURE_START`] the start is pulled in to
    /// `t / N` so the samples stay inside (0, t].
    pub fn sampling(&self, t: f64) -> (f64, f64) {
        let n = QUADRATURE_STEPS as f64;
        let start = QUADRATURE_START.min(t / n);
        let step = (t - start) / (n - 1.0);
        (start, step)
    }

    /// Sampled ages for elapsed time `t` (empty for `t <= 0`)
    pub fn ages(&self, t: f64) -> Vec<f64> {
        if t <= 0.0 {
            return Vec::new();
        }
        let (start, step) = self.sampling(t);
        (0..QUADRATURE_STEPS)
            .map(|k| start + k as f64 * step)
            .collect()
    }

    /// Approximate `∫₀ᵗ kernel(τ) dτ`; zero for `t <= 0`
    pub fn integrate<F>(&self, t: f64, kernel: F) -> f64
    where
        F: Fn(f64) -> f64,
    {
        if t <= 0.0 {
            return 0.0;
        }

        let (start, step) = self.sampling(t);
        trace!("Quadrature over {} ages, start {:e}, step {:e}", QUADRATURE_STEPS, start, step);

        // Index-based ages: no accumulated rounding in τ
        let sum: f64 = (0..QUADRATURE_STEPS)
            .map(|k| kernel(start + k as f64 * step))
            .sum();

        sum * step
    }
}

// =================================================================================================
// Tests
// =================================================================================================
