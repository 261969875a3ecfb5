//! Numerical design constants
//!
//! Every fixed resolution and threshold used by the evaluators lives here so
//! that continuous and short-duration results computed by different call
//! sites always share the same discretisation.

// -- Time integration --

/// Number of equally spaced age samples used by the time-integration engine.
pub const QUADRATURE_STEPS: usize = 100;

/// First sampled age [time]. The instantaneous kernel is singular at τ = 0.
pub const QUADRATURE_START: f64 = 1e-5;

/// Floor applied to dispersion coefficients in kernel denominators [m²/time].
pub const DISPERSION_EPSILON: f64 = 1e-10;

// -- Area sources --

/// Sub-point grid (along length, along width) for instantaneous area sources.
pub const AREA_GRID_INSTANTANEOUS: (usize, usize) = (10, 10);

/// Sub-point grid for continuous area sources. Coarser: every sub-point
/// carries a full quadrature.
pub const AREA_GRID_CONTINUOUS: (usize, usize) = (5, 5);

// -- River steady state --

/// Upper bound of the low reaction-dispersion regimes (inclusive).
pub const RIVER_ALPHA_LOW: f64 = 0.027;

/// Upper bound of the mixed regime (inclusive).
pub const RIVER_ALPHA_HIGH: f64 = 380.0;

/// Péclet number separating advection- from dispersion-dominated mixing.
pub const RIVER_PECLET_THRESHOLD: f64 = 1.0;

/// Floor applied to velocity and dispersion in river denominators.
pub const RIVER_EPSILON: f64 = 1e-10;

/// Distance substituted for x = 0 in the shoreline plume [m].
pub const SHORELINE_MIN_DISTANCE: f64 = 1e-6;

// -- Execution --

/// Number of field elements above which element-wise evaluation is handed to
/// rayon (only with the `parallel` feature).
pub const PARALLEL_THRESHOLD: usize = 1000;
