//! Physical parameter sets
//!
//! Plain value types built from caller-supplied scalars right before an
//! evaluation. Units are the caller's responsibility: the evaluators return
//! concentrations in the unit implied by the source term and the volume unit
//! of the geometry (e.g. g and m³ give g/m³ = mg/L).

use serde::{Deserialize, Serialize};

use crate::error::TransportError;

// =================================================================================================
// Groundwater transport
// =================================================================================================

/// Dispersion coefficients per axis [m²/time]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dispersion {
    /// Along flow (D_L)
    pub longitudinal: f64,
    /// Horizontal, across flow (D_T)
    #[serde(default)]
    pub transverse: f64,
    /// Vertical (D_V)
    #[serde(default)]
    pub vertical: f64,
}

impl Dispersion {
    pub fn new(longitudinal: f64, transverse: f64, vertical: f64) -> Self {
        Self { longitudinal, transverse, vertical }
    }

    /// Longitudinal coefficient only (1D problems)
    pub fn longitudinal(longitudinal: f64) -> Self {
        Self::new(longitudinal, 0.0, 0.0)
    }
}

/// Aquifer and transport parameters shared by every groundwater evaluator
///
/// - `porosity`: effective porosity n_e, in (0, 1]
/// - `section`: cross-sectional area W [m²] in 1D, saturated thickness H [m]
///   in 2D, unused in 3D
/// - `velocity`: pore (seepage) velocity u [m/time] along the flow axis
/// - `decay`: first-order decay λ [1/time], 0 for a conservative solute
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransportParameters {
    pub porosity: f64,
    #[serde(default = "unit_section")]
    pub section: f64,
    pub dispersion: Dispersion,
    pub velocity: f64,
    #[serde(default)]
    pub decay: f64,
}

fn unit_section() -> f64 {
    1.0
}

impl TransportParameters {
    pub fn new(porosity: f64, section: f64, dispersion: Dispersion, velocity: f64) -> Self {
        Self {
            porosity,
            section,
            dispersion,
            velocity,
            decay: 0.0,
        }
    }

    /// Builder pattern: set first-order decay coefficient
    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    /// Check physical sanity for a problem with `dimensions` spatial axes
    pub fn validate(&self, dimensions: usize) -> Result<(), TransportError> {
        if !(self.porosity > 0.0 && self.porosity <= 1.0) {
            return Err(TransportError::invalid(
                "porosity",
                format!("must lie in (0, 1], got {}", self.porosity),
            ));
        }
        if dimensions < 3 && self.section <= 0.0 {
            return Err(TransportError::invalid(
                "section",
                format!("must be positive, got {}", self.section),
            ));
        }

        let coefficients = [
            ("dispersion.longitudinal", self.dispersion.longitudinal),
            ("dispersion.transverse", self.dispersion.transverse),
            ("dispersion.vertical", self.dispersion.vertical),
        ];
        for (name, value) in coefficients.iter().take(dimensions) {
            if *value <= 0.0 {
                return Err(TransportError::invalid(
                    *name,
                    format!("must be positive, got {}", value),
                ));
            }
        }

        if self.decay < 0.0 {
            return Err(TransportError::invalid(
                "decay",
                format!("must be non-negative, got {}", self.decay),
            ));
        }
        if !self.velocity.is_finite() {
            return Err(TransportError::invalid("velocity", "must be finite"));
        }
        Ok(())
    }
}

// =================================================================================================
// Release
// =================================================================================================

/// How the contaminant enters the aquifer, with its source term
///
/// `ShortDuration` is a continuous release switched off after `duration`;
/// its response is built from two continuous responses by superposition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Release {
    /// Slug of `mass` injected at t = 0
    Instantaneous { mass: f64 },

    /// Constant inflow of `concentration` at rate `flow` (the 1D closed form
    /// uses `concentration` as the inlet boundary value and ignores `flow`)
    Continuous {
        concentration: f64,
        #[serde(default = "unit_flow")]
        flow: f64,
    },

    /// Continuous release lasting `duration`
    ShortDuration {
        concentration: f64,
        #[serde(default = "unit_flow")]
        flow: f64,
        duration: f64,
    },
}

fn unit_flow() -> f64 {
    1.0
}

/// Release mode without its source term (scenario key component)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseKind {
    Instantaneous,
    Continuous,
    ShortDuration,
}

impl Release {
    pub fn kind(&self) -> ReleaseKind {
        match self {
            Release::Instantaneous { .. } => ReleaseKind::Instantaneous,
            Release::Continuous { .. } => ReleaseKind::Continuous,
            Release::ShortDuration { .. } => ReleaseKind::ShortDuration,
        }
    }

    /// Mass release rate C·Q of a continuous or short-duration release
    pub fn rate(&self) -> Option<f64> {
        match self {
            Release::Instantaneous { .. } => None,
            Release::Continuous { concentration, flow }
            | Release::ShortDuration { concentration, flow, .. } => Some(concentration * flow),
        }
    }

    pub fn validate(&self) -> Result<(), TransportError> {
        match self {
            Release::Instantaneous { mass } if *mass < 0.0 => {
                Err(TransportError::invalid("mass", "must be non-negative"))
            }
            Release::Continuous { concentration, flow }
            | Release::ShortDuration { concentration, flow, .. }
                if *concentration < 0.0 || *flow < 0.0 =>
            {
                Err(TransportError::invalid(
                    "concentration/flow",
                    "must be non-negative",
                ))
            }
            Release::ShortDuration { duration, .. } if *duration <= 0.0 => Err(
                TransportError::invalid("duration", format!("must be positive, got {}", duration)),
            ),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReleaseKind::Instantaneous => write!(f, "instantaneous"),
            ReleaseKind::Continuous => write!(f, "continuous"),
            ReleaseKind::ShortDuration => write!(f, "short-duration"),
        }
    }
}

// =================================================================================================
// Surface water
// =================================================================================================

/// One-dimensional steady river mixing with first-order decay
///
/// - `cp`, `qp`: discharge concentration [mg/L] and flow [m³/s]
/// - `ch`, `qh`: upstream background concentration [mg/L] and river flow [m³/s]
/// - `decay`: K [1/s]; `velocity`: u [m/s]; `dispersion`: E_x [m²/s]
/// - `width`: B [m]; `area`: cross-section A [m²]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiverSteadyParameters {
    pub cp: f64,
    pub qp: f64,
    pub ch: f64,
    pub qh: f64,
    pub decay: f64,
    pub velocity: f64,
    pub dispersion: f64,
    pub width: f64,
    pub area: f64,
}

/// Bank discharge into a wide river, steady transverse mixing
///
/// - `depth`: H [m]; `transverse_mixing`: M_y [m²/s]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShorelineParameters {
    pub cp: f64,
    pub qp: f64,
    pub ch: f64,
    pub depth: f64,
    pub transverse_mixing: f64,
    pub velocity: f64,
}
