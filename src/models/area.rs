//! Rectangular area sources (2D)
//!
//! The footprint (length L along the flow, width W across it) is centred on
//! the source anchor and replaced by an nₗ × n_w grid of sub-points:
//!
//! ```text
//! offsets_L = linspace(-L/2, L/2, nₗ)
//! offsets_W = linspace(-W/2, W/2, n_w)
//! ```
//!
//! Every sub-point carries an equal share of the mass (instantaneous) or of
//! the rate (continuous). The query is rotated into the flow frame once, and
//! the sub-point offsets are subtracted in that frame.
//!
//! The default resolutions are [`AREA_GRID_INSTANTANEOUS`] and
//! [`AREA_GRID_CONTINUOUS`]; the continuous grid is coarser since each
//! sub-point is integrated over the full release history.

use crate::constants::{AREA_GRID_CONTINUOUS, AREA_GRID_INSTANTANEOUS};
use crate::models::kernel::GreenKernel;
use crate::physics::{ConcentrationModel, FlowFrame};
use crate::solver::TimeIntegrator;

/// Source term of an area release
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaRelease {
    /// Total slug mass
    Instantaneous { mass: f64 },
    /// Total mass release rate C₀·Q
    Continuous { rate: f64 },
}

/// Rectangular footprint superposed from point kernels
#[derive(Debug, Clone)]
pub struct AreaSource {
    kernel: GreenKernel,
    release: AreaRelease,
    length: f64,
    width: f64,
    frame: FlowFrame,
    /// Sub-point offsets (along, across) in the flow frame
    offsets: Vec<(f64, f64)>,
    integrator: TimeIntegrator,
}

impl AreaSource {
    /// Slug of `mass` spread uniformly over the footprint
    pub fn instantaneous(kernel: GreenKernel, length: f64, width: f64, mass: f64, frame: FlowFrame) -> Self {
        Self::build(
            kernel,
            AreaRelease::Instantaneous { mass },
            length,
            width,
            frame,
            AREA_GRID_INSTANTANEOUS,
        )
    }

    /// Release `rate` spread uniformly over the footprint
    pub fn continuous(kernel: GreenKernel, length: f64, width: f64, rate: f64, frame: FlowFrame) -> Self {
        Self::build(
            kernel,
            AreaRelease::Continuous { rate },
            length,
            width,
            frame,
            AREA_GRID_CONTINUOUS,
        )
    }

    /// Builder pattern: override the sub-point grid (values below 1 read as 1)
    pub fn with_resolution(self, along: usize, across: usize) -> Self {
        Self::build(
            self.kernel,
            self.release,
            self.length,
            self.width,
            self.frame,
            (along, across),
        )
    }

    fn build(
        kernel: GreenKernel,
        release: AreaRelease,
        length: f64,
        width: f64,
        frame: FlowFrame,
        resolution: (usize, usize),
    ) -> Self {
        let along = centred_offsets(length, resolution.0.max(1));
        let across = centred_offsets(width, resolution.1.max(1));

        let offsets = along
            .iter()
            .flat_map(|&a| across.iter().map(move |&c| (a, c)))
            .collect();

        Self {
            kernel,
            release,
            length,
            width,
            frame,
            offsets,
            integrator: TimeIntegrator::new(),
        }
    }

    /// Number of sub-points
    pub fn sub_points(&self) -> usize {
        self.offsets.len()
    }

    pub fn release(&self) -> AreaRelease {
        self.release
    }

    /// Superposed unit response at local (x, y) after age `tau`
    fn footprint_response(&self, x: f64, y: f64, tau: f64) -> f64 {
        let share = 1.0 / self.offsets.len() as f64;
        self.offsets
            .iter()
            .map(|&(dx, dy)| self.kernel.unit_response(&[x - dx, y - dy], tau))
            .sum::<f64>()
            * share
    }
}

impl ConcentrationModel for AreaSource {
    fn concentration(&self, point: [f64; 3], t: f64) -> f64 {
        let (x, y) = self.frame.to_local(point[0], point[1]);

        match self.release {
            AreaRelease::Instantaneous { mass } => mass * self.footprint_response(x, y, t),
            AreaRelease::Continuous { rate } => self
                .integrator
                .integrate(t, |tau| rate * self.footprint_response(x, y, tau)),
        }
    }

    fn name(&self) -> &str {
        match self.release {
            AreaRelease::Instantaneous { .. } => "Instantaneous area source",
            AreaRelease::Continuous { .. } => "Continuous area source",
        }
    }
}

/// `n` equally spaced offsets spanning `[-extent/2, extent/2]` (centre for n = 1)
fn centred_offsets(extent: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![0.0];
    }
    let start = -0.5 * extent;
    let step = extent / (n - 1) as f64;
    (0..n).map(|i| start + i as f64 * step).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::point::InstantaneousPoint;
    use crate::physics::{Dispersion, TransportParameters};
    use approx::assert_relative_eq;

    fn kernel() -> GreenKernel {
        let params = TransportParameters::new(0.3, 10.0, Dispersion::new(0.5, 0.1, 0.0), 0.1);
        GreenKernel::for_dimension(2, &params)
    }

    #[test]
    fn test_offsets_span_footprint() {
        let offsets = centred_offsets(4.0, 5);
        assert_eq!(offsets, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
        assert_eq!(centred_offsets(4.0, 1), vec![0.0]);
    }

    #[test]
    fn test_default_resolutions() {
        let frame = FlowFrame::identity();
        assert_eq!(AreaSource::instantaneous(kernel(), 10.0, 5.0, 1.0, frame).sub_points(), 100);
        assert_eq!(AreaSource::continuous(kernel(), 10.0, 5.0, 1.0, frame).sub_points(), 25);
        assert_eq!(
            AreaSource::continuous(kernel(), 10.0, 5.0, 1.0, frame)
                .with_resolution(0, 3)
                .sub_points(),
            3
        );
    }

    #[test]
    fn test_collapsed_footprint_matches_point() {
        let frame = FlowFrame::new(2.0, -1.0, 30.0);
        let area = AreaSource::instantaneous(kernel(), 0.0, 0.0, 100.0, frame);
        let point = InstantaneousPoint::new(kernel(), 100.0).with_frame(frame);

        for p in [[10.0, 5.0, 0.0], [7.0, 3.0, 0.0], [0.0, 0.0, 0.0]] {
            assert_relative_eq!(
                area.concentration(p, 60.0),
                point.concentration(p, 60.0),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_symmetric_across_flow() {
        let area = AreaSource::instantaneous(kernel(), 6.0, 4.0, 100.0, FlowFrame::identity());
        assert_relative_eq!(
            area.concentration([8.0, 2.0, 0.0], 50.0),
            area.concentration([8.0, -2.0, 0.0], 50.0),
            max_relative = 1e-12
        );
    }
}
