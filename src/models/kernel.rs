//! Instantaneous point-source Green kernel
//!
//! # Mathematical Background
//!
//! A slug released at the origin of the flow-aligned frame spreads as a
//! product of Gaussians, one per spatial axis, drifting with the pore
//! velocity along the longitudinal axis only:
//!
//! ```text
//!                    1                          Σᵢ (rᵢ - u·τ·𝟙[i = L])²
//! G(r, τ) = ─────────────────────────── · exp( -λτ - ─────────────────────── )
//!           nₑ · N · √((4πτ)^d · Πᵢ Dᵢ)                      4·Dᵢ·τ
//! ```
//!
//! Where:
//! - **d** : number of spatial axes (1, 2 or 3)
//! - **nₑ** : effective porosity
//! - **N** : geometric normalisation, cross-section W [m²] in 1D, saturated
//!   thickness H [m] in 2D, 1 in 3D
//! - **Dᵢ** : dispersion coefficient of axis i
//! - **u** : pore velocity, **λ** : first-order decay
//!
//! `G` is the concentration per unit released mass. Multiplied by a mass it
//! is the instantaneous solution; multiplied by a rate and integrated over
//! the release age τ it is the continuous solution.
//!
//! The three dimensionalities share this single expression and differ only in
//! the axis list and `N`.

use log::warn;

use crate::constants::DISPERSION_EPSILON;
use crate::physics::{FlowFrame, TransportParameters};

/// One spatial axis of the kernel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionAxis {
    /// Dispersion coefficient D_i [m²/time]
    pub coefficient: f64,
    /// Advection applies along this axis
    pub longitudinal: bool,
}

impl DispersionAxis {
    pub fn longitudinal(coefficient: f64) -> Self {
        Self { coefficient, longitudinal: true }
    }

    pub fn lateral(coefficient: f64) -> Self {
        Self { coefficient, longitudinal: false }
    }
}

/// Unit-mass instantaneous response in the flow-aligned frame
#[derive(Debug, Clone, PartialEq)]
pub struct GreenKernel {
    axes: Vec<DispersionAxis>,
    velocity: f64,
    decay: f64,
    /// nₑ · N · √(Πᵢ Dᵢ), time independent part of the denominator
    scale: f64,
}

impl GreenKernel {
    /// Kernel over an explicit axis list
    ///
    /// Coefficients below [`DISPERSION_EPSILON`] are raised to it.
    pub fn new(
        axes: Vec<DispersionAxis>,
        porosity: f64,
        normalization: f64,
        velocity: f64,
        decay: f64,
    ) -> Self {
        let axes: Vec<DispersionAxis> = axes
            .into_iter()
            .map(|axis| DispersionAxis {
                coefficient: floored_dispersion(axis.coefficient),
                ..axis
            })
            .collect();
        let product: f64 = axes.iter().map(|axis| axis.coefficient).product();
        let scale = porosity * normalization * product.sqrt();

        Self { axes, velocity, decay, scale }
    }

    /// Kernel for a `dimensions`-axis aquifer problem
    ///
    /// Axis order is (longitudinal, transverse, vertical); `section` is used
    /// as the normalisation in 1D and 2D and ignored in 3D.
    pub fn for_dimension(dimensions: usize, params: &TransportParameters) -> Self {
        let dispersion = params.dispersion;
        let axes: Vec<DispersionAxis> = [
            DispersionAxis::longitudinal(dispersion.longitudinal),
            DispersionAxis::lateral(dispersion.transverse),
            DispersionAxis::lateral(dispersion.vertical),
        ]
        .into_iter()
        .take(dimensions)
        .collect();

        let normalization = if dimensions >= 3 { 1.0 } else { params.section };

        Self::new(axes, params.porosity, normalization, params.velocity, params.decay)
    }

    /// Number of spatial axes
    pub fn dimensions(&self) -> usize {
        self.axes.len()
    }

    /// Response at local offset `offset` (one entry per axis) after age `tau`
    ///
    /// Zero for `tau <= 0`. Missing offset entries read as zero.
    pub fn unit_response(&self, offset: &[f64], tau: f64) -> f64 {
        if tau <= 0.0 {
            return 0.0;
        }

        let mut exponent = -self.decay * tau;
        for (i, axis) in self.axes.iter().enumerate() {
            let r = offset.get(i).copied().unwrap_or(0.0);
            let drift = if axis.longitudinal { self.velocity * tau } else { 0.0 };
            let distance = r - drift;
            exponent -= distance * distance / (4.0 * axis.coefficient * tau);
        }

        let spread = (4.0 * std::f64::consts::PI * tau).powi(self.axes.len() as i32).sqrt();

        exponent.exp() / (self.scale * spread)
    }
}

/// Dispersion coefficient safe for use in a denominator
pub(crate) fn floored_dispersion(value: f64) -> f64 {
    if value < DISPERSION_EPSILON {
        warn!("Dispersion coefficient {} floored to {}", value, DISPERSION_EPSILON);
        DISPERSION_EPSILON
    } else {
        value
    }
}

/// Local (flow-aligned) coordinates of a world point
///
/// Without a frame the world coordinates are used as they are.
#[inline]
pub(crate) fn localize(frame: Option<&FlowFrame>, point: [f64; 3]) -> [f64; 3] {
    match frame {
        Some(frame) => {
            let (x, y) = frame.to_local(point[0], point[1]);
            [x, y, point[2]]
        }
        None => point,
    }
}
