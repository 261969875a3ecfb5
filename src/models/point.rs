//! Point sources
//!
//! - [`InstantaneousPoint`]: a slug of mass M, `C = M · G(r, t)`
//! - [`ContinuousPoint`]: a constant rate C₀·Q released since t = 0,
//!   `C = ∫₀ᵗ C₀·Q · G(r, τ) dτ`, evaluated by the [`TimeIntegrator`]
//!
//! Both work in 1D, 2D and 3D; the kernel fixes the dimensionality. With a
//! [`FlowFrame`] the query is rotated into the flow-aligned frame first.

use crate::models::kernel::{localize, GreenKernel};
use crate::physics::{ConcentrationModel, FlowFrame};
use crate::solver::TimeIntegrator;

// =================================================================================================
// Instantaneous
// =================================================================================================

/// Slug release at the source anchor
#[derive(Debug, Clone)]
pub struct InstantaneousPoint {
    kernel: GreenKernel,
    mass: f64,
    frame: Option<FlowFrame>,
}

impl InstantaneousPoint {
    pub fn new(kernel: GreenKernel, mass: f64) -> Self {
        Self { kernel, mass, frame: None }
    }

    /// Builder pattern: evaluate in a rotated, translated frame
    pub fn with_frame(mut self, frame: FlowFrame) -> Self {
        self.frame = Some(frame);
        self
    }
}

impl ConcentrationModel for InstantaneousPoint {
    fn concentration(&self, point: [f64; 3], t: f64) -> f64 {
        let local = localize(self.frame.as_ref(), point);
        self.mass * self.kernel.unit_response(&local, t)
    }

    fn name(&self) -> &str {
        "Instantaneous point source"
    }
}

// =================================================================================================
// Continuous
// =================================================================================================

/// Constant-rate release at the source anchor
#[derive(Debug, Clone)]
pub struct ContinuousPoint {
    kernel: GreenKernel,
    rate: f64,
    frame: Option<FlowFrame>,
    integrator: TimeIntegrator,
}

impl ContinuousPoint {
    /// `rate` is the mass release rate C₀·Q
    pub fn new(kernel: GreenKernel, rate: f64) -> Self {
        Self {
            kernel,
            rate,
            frame: None,
            integrator: TimeIntegrator::new(),
        }
    }

    pub fn with_frame(mut self, frame: FlowFrame) -> Self {
        self.frame = Some(frame);
        self
    }
}

impl ConcentrationModel for ContinuousPoint {
    fn concentration(&self, point: [f64; 3], t: f64) -> f64 {
        let local = localize(self.frame.as_ref(), point);
        self.integrator
            .integrate(t, |tau| self.rate * self.kernel.unit_response(&local, tau))
    }

    fn name(&self) -> &str {
        "Continuous point source"
    }

    fn description(&self) -> Option<&str> {
        Some("Instantaneous kernel integrated over release age")
    }
}
