//! Concentration model trait
//!
//! Every evaluator (closed-form kernel, time-integrated release, area
//! aggregate, short-duration superposition) implements
//! [`ConcentrationModel`]. The trait only asks for the point-wise response;
//! field evaluation over a [`QueryGrid`] and the zero-time rule are shared.

use crate::physics::{FieldData, QueryGrid};
use crate::solver::evaluate_points;

/// A stateless concentration evaluator
///
/// # Contract
///
/// - `concentration` is called with world coordinates and an elapsed time
///   `t > 0`; it returns a non-negative value.
/// - `evaluate` returns an all-zero field of the query's shape for `t <= 0`.
///
/// # Implementing a New Model
///
/// ```rust
/// use plume_rs::physics::{ConcentrationModel, QueryGrid};
///
/// struct Uniform(f64);
///
/// impl ConcentrationModel for Uniform {
///     fn concentration(&self, _point: [f64; 3], _t: f64) -> f64 {
///         self.0
///     }
///
///     fn name(&self) -> &str {
///         "Uniform"
///     }
/// }
///
/// let field = Uniform(2.0).evaluate(&QueryGrid::line(&[0.0, 1.0]), 1.0);
/// assert_eq!(field.values(), vec![2.0, 2.0]);
/// assert_eq!(Uniform(2.0).evaluate(&QueryGrid::line(&[0.0]), 0.0).values(), vec![0.0]);
/// ```
pub trait ConcentrationModel: Send + Sync {
    /// Concentration at world point `[x, y, z]` after elapsed time `t > 0`
    fn concentration(&self, point: [f64; 3], t: f64) -> f64;

    /// Model name
    fn name(&self) -> &str;

    /// Optional longer description
    fn description(&self) -> Option<&str> {
        None
    }

    /// Concentration field over `query` at elapsed time `t`
    fn evaluate(&self, query: &QueryGrid, t: f64) -> FieldData {
        if t <= 0.0 {
            return query.zeros();
        }
        query.field(evaluate_points(query.len(), |i| {
            self.concentration(query.point(i), t)
        }))
    }
}

impl<M: ConcentrationModel + ?Sized> ConcentrationModel for Box<M> {
    fn concentration(&self, point: [f64; 3], t: f64) -> f64 {
        (**self).concentration(point, t)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> Option<&str> {
        (**self).description()
    }

    fn evaluate(&self, query: &QueryGrid, t: f64) -> FieldData {
        (**self).evaluate(query, t)
    }
}
