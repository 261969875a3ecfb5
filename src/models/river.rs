//! Steady-state river mixing
//!
//! # One-dimensional mixing with decay
//!
//! A discharge (C_p, Q_p) enters a river carrying background (C_h, Q_h).
//! Two dimensionless numbers pick the governing balance:
//!
//! ```text
//! α  = K·E_x / u²       (reaction vs. dispersion)
//! Pe = u·B / E_x        (advection vs. dispersion)
//! ```
//!
//! | regime | condition | C₀ | x < 0 | x ≥ 0 |
//! |---|---|---|---|---|
//! | advection | α ≤ 0.027, Pe ≥ 1 | C_mix | C_h | C₀·e^(-Kx/u) |
//! | dispersion | α ≤ 0.027, Pe < 1 | C_mix | C₀·e^(ux/E_x) | C₀·e^(-Kx/u) |
//! | mixed | 0.027 < α ≤ 380 | C_mix/√(1+4α) | C₀·e^(ux(1+√(1+4α))/2E_x) | C₀·e^(ux(1-√(1+4α))/2E_x) |
//! | decay | α > 380 | (C_pQ_p+C_hQ_h)/(2A√(KE_x)) | C₀·e^(x√(K/E_x)) | C₀·e^(-x√(K/E_x)) |
//!
//! with `C_mix = (C_p·Q_p + C_h·Q_h)/(Q_p + Q_h)`. Every regime satisfies
//! C(0) = C₀. In the advection regime nothing travels upstream of the outfall,
//! so x < 0 reads the background concentration.
//!
//! u and E_x are floored at [`RIVER_EPSILON`]; a non-positive cross-section
//! in the decay regime is replaced by 1 m².
//!
//! # Shoreline plume
//!
//! [`shoreline_plume`] gives the steady 2D plume of a bank discharge in a wide
//! river of depth H with transverse mixing coefficient M_y:
//!
//! ```text
//! C(x, y) = C_h + 2·C_p·Q_p / (H·√(π·M_y·x·u)) · exp(-u·y² / (4·M_y·x))
//! ```

use log::{debug, warn};

use crate::constants::{
    RIVER_ALPHA_HIGH,
    RIVER_ALPHA_LOW,
    RIVER_EPSILON,
    RIVER_PECLET_THRESHOLD,
    SHORELINE_MIN_DISTANCE,
};
use crate::physics::{FieldData, QueryGrid, RiverSteadyParameters, ShorelineParameters};
use crate::solver::evaluate_points;

// =================================================================================================
// Regime classification
// =================================================================================================

/// Closed-form family selected for a river reach
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiverRegime {
    /// α ≤ 0.027, Pe ≥ 1
    AdvectionDominated,
    /// α ≤ 0.027, Pe < 1
    DispersionDominated,
    /// 0.027 < α ≤ 380
    Mixed,
    /// α > 380
    DecayDominated,
}

impl RiverRegime {
    /// Regime for the given dimensionless numbers (lower bounds inclusive)
    pub fn select(alpha: f64, peclet: f64) -> Self {
        if alpha <= RIVER_ALPHA_LOW {
            if peclet >= RIVER_PECLET_THRESHOLD {
                RiverRegime::AdvectionDominated
            } else {
                RiverRegime::DispersionDominated
            }
        } else if alpha <= RIVER_ALPHA_HIGH {
            RiverRegime::Mixed
        } else {
            RiverRegime::DecayDominated
        }
    }
}

impl std::fmt::Display for RiverRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiverRegime::AdvectionDominated => write!(f, "advection-dominated"),
            RiverRegime::DispersionDominated => write!(f, "dispersion-dominated"),
            RiverRegime::Mixed => write!(f, "mixed"),
            RiverRegime::DecayDominated => write!(f, "decay-dominated"),
        }
    }
}

/// Dimensionless numbers and the regime they select
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiverClassification {
    pub alpha: f64,
    pub peclet: f64,
    pub regime: RiverRegime,
}

impl RiverClassification {
    /// Classify with velocity and dispersion already floored
    fn from_floored(decay: f64, velocity: f64, dispersion: f64, width: f64) -> Self {
        let alpha = decay * dispersion / (velocity * velocity);
        let peclet = velocity * width / dispersion;
        Self {
            alpha,
            peclet,
            regime: RiverRegime::select(alpha, peclet),
        }
    }
}

// =================================================================================================
// Steady-state solution
// =================================================================================================

/// One-dimensional steady concentration profile along a river
#[derive(Debug, Clone, PartialEq)]
pub struct RiverSteadyState {
    params: RiverSteadyParameters,
    velocity: f64,
    dispersion: f64,
    classification: RiverClassification,
    initial: f64,
}

impl RiverSteadyState {
    pub fn new(params: RiverSteadyParameters) -> Self {
        let velocity = floored("velocity", params.velocity);
        let dispersion = floored("dispersion", params.dispersion);

        let classification =
            RiverClassification::from_floored(params.decay, velocity, dispersion, params.width);

        let load = params.cp * params.qp + params.ch * params.qh;
        let mixed = load / (params.qp + params.qh);

        let initial = match classification.regime {
            RiverRegime::AdvectionDominated | RiverRegime::DispersionDominated => mixed,
            RiverRegime::Mixed => mixed / (1.0 + 4.0 * classification.alpha).sqrt(),
            RiverRegime::DecayDominated => {
                let area = if params.area > 0.0 {
                    params.area
                } else {
                    warn!("Non-positive river cross-section {}, using 1 m²", params.area);
                    1.0
                };
                load / (2.0 * area * (params.decay * dispersion).sqrt())
            }
        };

        debug!(
            "River regime {} (alpha = {:.4e}, Pe = {:.4e}, C0 = {:.4e})",
            classification.regime, classification.alpha, classification.peclet, initial
        );

        Self {
            params,
            velocity,
            dispersion,
            classification,
            initial,
        }
    }

    pub fn classification(&self) -> RiverClassification {
        self.classification
    }

    pub fn regime(&self) -> RiverRegime {
        self.classification.regime
    }

    /// Concentration at the outfall, C₀
    pub fn initial_concentration(&self) -> f64 {
        self.initial
    }

    /// Concentration at longitudinal distance `x` (negative upstream)
    pub fn concentration_at(&self, x: f64) -> f64 {
        let u = self.velocity;
        let ex = self.dispersion;
        let k = self.params.decay;
        let c0 = self.initial;

        match self.classification.regime {
            RiverRegime::AdvectionDominated => {
                if x >= 0.0 {
                    c0 * (-k * x / u).exp()
                } else {
                    self.params.ch
                }
            }
            RiverRegime::DispersionDominated => {
                if x >= 0.0 {
                    c0 * (-k * x / u).exp()
                } else {
                    c0 * (u * x / ex).exp()
                }
            }
            RiverRegime::Mixed => {
                let root = (1.0 + 4.0 * self.classification.alpha).sqrt();
                let branch = if x >= 0.0 { 1.0 - root } else { 1.0 + root };
                c0 * (u * x / (2.0 * ex) * branch).exp()
            }
            RiverRegime::DecayDominated => c0 * (-x.abs() * (k / ex).sqrt()).exp(),
        }
    }

    /// Profile over the x component of `query`
    pub fn evaluate(&self, query: &QueryGrid) -> FieldData {
        query.field(evaluate_points(query.len(), |i| {
            self.concentration_at(query.point(i)[0])
        }))
    }
}

fn floored(name: &str, value: f64) -> f64 {
    if value < RIVER_EPSILON {
        warn!("River {} {} floored to {}", name, value, RIVER_EPSILON);
        RIVER_EPSILON
    } else {
        value
    }
}

// =================================================================================================
// Shoreline plume
// =================================================================================================

/// Steady shoreline-discharge concentration at (x downstream, y offshore)
///
/// Upstream of the outfall (x < 0) the river carries background only.
pub fn shoreline_plume(params: &ShorelineParameters, x: f64, y: f64) -> f64 {
    if x < 0.0 {
        return params.ch;
    }
    let x = if x < SHORELINE_MIN_DISTANCE {
        warn!("Shoreline distance {} raised to {}", x, SHORELINE_MIN_DISTANCE);
        SHORELINE_MIN_DISTANCE
    } else {
        x
    };
    let u = params.velocity;
    let my = params.transverse_mixing;

    let amplitude = 2.0 * params.cp * params.qp
        / (params.depth * (std::f64::consts::PI * my * x * u).sqrt());

    params.ch + amplitude * (-u * y * y / (4.0 * my * x)).exp()
}

/// Shoreline plume over a plan-view query
pub fn shoreline_field(params: &ShorelineParameters, query: &QueryGrid) -> FieldData {
    query.field(evaluate_points(query.len(), |i| {
        let [x, y, _] = query.point(i);
        shoreline_plume(params, x, y)
    }))
}
