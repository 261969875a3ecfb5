//! Scenario definition and dispatch
//!
//! A scenario is the full description of one groundwater evaluation:
//! dimensionality, source geometry, release and parameters. The dispatcher
//! maps the (dimensionality, geometry, release) key onto a model with an
//! exhaustive match; combinations without an evaluator are rejected there.
//!
//! This is the "WHAT to evaluate" (not "HOW to evaluate").

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::models::{
    AreaSource,
    ContinuousPoint,
    GreenKernel,
    InletContinuous,
    InstantaneousPoint,
    ShortDuration,
};
use crate::physics::{
    ConcentrationModel,
    FieldData,
    FlowFrame,
    QueryGrid,
    Release,
    ReleaseKind,
    TransportParameters,
};
use crate::solver::validate_field;

// =================================================================================================
// Scenario key
// =================================================================================================

/// Number of spatial axes of the problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Dimensionality {
    One,
    Two,
    Three,
}

impl Dimensionality {
    pub fn dimensions(&self) -> usize {
        match self {
            Dimensionality::One => 1,
            Dimensionality::Two => 2,
            Dimensionality::Three => 3,
        }
    }
}

impl TryFrom<u8> for Dimensionality {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Dimensionality::One),
            2 => Ok(Dimensionality::Two),
            3 => Ok(Dimensionality::Three),
            other => Err(format!("dimensionality must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<Dimensionality> for u8 {
    fn from(value: Dimensionality) -> Self {
        value.dimensions() as u8
    }
}

impl std::fmt::Display for Dimensionality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}D", self.dimensions())
    }
}

/// Source footprint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum SourceGeometry {
    Point,
    /// Rectangle of `length` along the flow and `width` across it
    Area { length: f64, width: f64 },
}

impl SourceGeometry {
    pub fn is_area(&self) -> bool {
        matches!(self, SourceGeometry::Area { .. })
    }
}

impl std::fmt::Display for SourceGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceGeometry::Point => write!(f, "point"),
            SourceGeometry::Area { .. } => write!(f, "area"),
        }
    }
}

/// (dimensionality, geometry, release) triple without parameter values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScenarioKey {
    pub dimensionality: Dimensionality,
    pub area: bool,
    pub release: ReleaseKind,
}

impl std::fmt::Display for ScenarioKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let geometry = if self.area { "area" } else { "point" };
        write!(f, "{} {} {}", self.dimensionality, geometry, self.release)
    }
}

// =================================================================================================
// Scenario
// =================================================================================================

/// One groundwater evaluation
///
/// # Example
///
/// ```rust
/// use plume_rs::physics::{Dispersion, QueryGrid, Release, TransportParameters};
/// use plume_rs::solver::{Dimensionality, Scenario, SourceGeometry};
///
/// let params = TransportParameters::new(0.3, 2.0, Dispersion::longitudinal(0.5), 0.1);
/// let scenario = Scenario::new(
///     Dimensionality::One,
///     SourceGeometry::Point,
///     Release::Instantaneous { mass: 100.0 },
///     params,
/// );
///
/// let field = scenario.evaluate(&QueryGrid::line(&[10.0, 20.0]), 100.0).unwrap();
/// let values = field.values();
/// assert!(values[0] > values[1]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub dimensionality: Dimensionality,
    pub geometry: SourceGeometry,
    pub release: Release,
    pub params: TransportParameters,
    /// Source anchor and flow direction, applied in 2D only
    pub frame: FlowFrame,
}

impl Scenario {
    /// Create a scenario anchored at the origin with flow along +x
    pub fn new(
        dimensionality: Dimensionality,
        geometry: SourceGeometry,
        release: Release,
        params: TransportParameters,
    ) -> Self {
        Self {
            dimensionality,
            geometry,
            release,
            params,
            frame: FlowFrame::identity(),
        }
    }

    /// Builder pattern: set source anchor and flow direction
    pub fn with_frame(mut self, frame: FlowFrame) -> Self {
        self.frame = frame;
        self
    }

    pub fn key(&self) -> ScenarioKey {
        ScenarioKey {
            dimensionality: self.dimensionality,
            area: self.geometry.is_area(),
            release: self.release.kind(),
        }
    }

    /// Select and build the evaluator for this scenario
    ///
    /// # Errors
    ///
    /// `UnsupportedScenario` for area sources outside 2D.
    pub fn build_model(&self) -> Result<Box<dyn ConcentrationModel>, TransportError> {
        use Dimensionality::{One, Three, Two};
        use SourceGeometry::{Area, Point};

        let params = &self.params;
        let kernel = GreenKernel::for_dimension(self.dimensionality.dimensions(), params);
        let frame = self.frame;

        let model: Box<dyn ConcentrationModel> = match (self.dimensionality, self.geometry, self.release) {
            // ====== 1D ======
            (One, Point, Release::Instantaneous { mass }) => {
                Box::new(InstantaneousPoint::new(kernel, mass))
            }
            (One, Point, Release::Continuous { concentration, .. }) => {
                Box::new(InletContinuous::from_parameters(concentration, params))
            }
            (One, Point, Release::ShortDuration { concentration, duration, .. }) => Box::new(
                ShortDuration::new(InletContinuous::from_parameters(concentration, params), duration),
            ),

            // ====== 2D ======
            (Two, Point, Release::Instantaneous { mass }) => {
                Box::new(InstantaneousPoint::new(kernel, mass).with_frame(frame))
            }
            (Two, Point, Release::Continuous { concentration, flow }) => {
                Box::new(ContinuousPoint::new(kernel, concentration * flow).with_frame(frame))
            }
            (Two, Point, Release::ShortDuration { concentration, flow, duration }) => Box::new(
                ShortDuration::new(
                    ContinuousPoint::new(kernel, concentration * flow).with_frame(frame),
                    duration,
                ),
            ),
            (Two, Area { length, width }, Release::Instantaneous { mass }) => {
                Box::new(AreaSource::instantaneous(kernel, length, width, mass, frame))
            }
            (Two, Area { length, width }, Release::Continuous { concentration, flow }) => Box::new(
                AreaSource::continuous(kernel, length, width, concentration * flow, frame),
            ),
            (Two, Area { length, width }, Release::ShortDuration { concentration, flow, duration }) => {
                Box::new(ShortDuration::new(
                    AreaSource::continuous(kernel, length, width, concentration * flow, frame),
                    duration,
                ))
            }

            // ====== 3D ======
            (Three, Point, Release::Instantaneous { mass }) => {
                Box::new(InstantaneousPoint::new(kernel, mass))
            }
            (Three, Point, Release::Continuous { concentration, flow }) => {
                Box::new(ContinuousPoint::new(kernel, concentration * flow))
            }
            (Three, Point, Release::ShortDuration { concentration, flow, duration }) => Box::new(
                ShortDuration::new(ContinuousPoint::new(kernel, concentration * flow), duration),
            ),

            // ====== No evaluator ======
            (One, Area { .. }, _) | (Three, Area { .. }, _) => {
                return Err(TransportError::UnsupportedScenario {
                    dimensionality: self.dimensionality.to_string(),
                    geometry: self.geometry.to_string(),
                    release: self.release.kind().to_string(),
                });
            }
        };

        Ok(model)
    }

    /// Concentration field over `query` after elapsed time `t`
    ///
    /// `t <= 0` gives an all-zero field of the query's shape.
    ///
    /// # Errors
    ///
    /// `UnsupportedScenario` from dispatch, `NonFinite` when the parameters
    /// drive a kernel to NaN or Inf (e.g. a zero porosity or section).
    pub fn evaluate(&self, query: &QueryGrid, t: f64) -> Result<FieldData, TransportError> {
        let model = self.build_model()?;
        self.run(model.as_ref(), query, t)
    }

    /// One field per entry of `times`, sharing a single model
    pub fn evaluate_times(&self, query: &QueryGrid, times: &[f64]) -> Result<Vec<FieldData>, TransportError> {
        let model = self.build_model()?;
        times
            .iter()
            .map(|&t| self.run(model.as_ref(), query, t))
            .collect()
    }

    /// Concentration history at one observation point
    pub fn time_series(&self, x: f64, y: f64, z: f64, times: &[f64]) -> Result<Vec<f64>, TransportError> {
        let query = QueryGrid::scalar(x, y, z);
        let fields = self.evaluate_times(&query, times)?;
        Ok(fields.iter().map(|field| field.values().first().copied().unwrap_or(0.0)).collect())
    }

    fn run(&self, model: &dyn ConcentrationModel, query: &QueryGrid, t: f64) -> Result<FieldData, TransportError> {
        let key = self.key();
        debug!(
            "Evaluating {} ({}) at t = {} over {} points",
            key,
            model.name(),
            t,
            query.len()
        );

        let field = model.evaluate(query, t);
        validate_field(&field, &key.to_string(), t)?;
        Ok(field)
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Dispersion;

    fn params() -> TransportParameters {
        TransportParameters::new(0.3, 10.0, Dispersion::new(0.5, 0.1, 0.05), 0.1)
    }

    fn releases() -> [Release; 3] {
        [
            Release::Instantaneous { mass: 100.0 },
            Release::Continuous { concentration: 10.0, flow: 1.0 },
            Release::ShortDuration { concentration: 10.0, flow: 1.0, duration: 20.0 },
        ]
    }

    #[test]
    fn test_every_supported_combination_builds() {
        let area = SourceGeometry::Area { length: 4.0, width: 2.0 };
        let mut combos = Vec::new();
        for release in releases() {
            combos.push((Dimensionality::One, SourceGeometry::Point, release));
            combos.push((Dimensionality::Two, SourceGeometry::Point, release));
            combos.push((Dimensionality::Two, area, release));
            combos.push((Dimensionality::Three, SourceGeometry::Point, release));
        }

        for (dim, geometry, release) in combos {
            let scenario = Scenario::new(dim, geometry, release, params());
            assert!(scenario.build_model().is_ok(), "{} should build", scenario);
        }
    }

    #[test]
    fn test_area_outside_2d_rejected() {
        let area = SourceGeometry::Area { length: 4.0, width: 2.0 };
        for dim in [Dimensionality::One, Dimensionality::Three] {
            for release in releases() {
                let err = Scenario::new(dim, area, release, params()).build_model().err();
                assert!(matches!(err, Some(TransportError::UnsupportedScenario { .. })));
            }
        }
    }

    #[test]
    fn test_unsupported_message() {
        let scenario = Scenario::new(
            Dimensionality::Three,
            SourceGeometry::Area { length: 1.0, width: 1.0 },
            Release::Continuous { concentration: 1.0, flow: 1.0 },
            params(),
        );
        let err = scenario.evaluate(&QueryGrid::line(&[1.0]), 10.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unsupported scenario: 3D with area source and continuous release"
        );
    }

    #[test]
    fn test_key_display() {
        let scenario = Scenario::new(
            Dimensionality::Two,
            SourceGeometry::Area { length: 1.0, width: 1.0 },
            Release::ShortDuration { concentration: 1.0, flow: 1.0, duration: 5.0 },
            params(),
        );
        assert_eq!(scenario.key().to_string(), "2D area short-duration");
    }

    #[test]
    fn test_zero_dispersion_gives_finite_field() {
        let mut lateral = params();
        lateral.dispersion.transverse = 0.0;
        lateral.dispersion.vertical = 0.0;

        let cases = [
            (Dimensionality::One, Release::Instantaneous { mass: 1.0 }, {
                let mut p = params();
                p.dispersion.longitudinal = 0.0;
                p
            }),
            (Dimensionality::Two, Release::Instantaneous { mass: 100.0 }, lateral),
            (Dimensionality::Three, Release::Continuous { concentration: 10.0, flow: 1.0 }, lateral),
        ];

        for (dim, release, p) in cases {
            let scenario = Scenario::new(dim, SourceGeometry::Point, release, p);
            let grid = QueryGrid::scattered_3d(&[0.0, 10.0, 10.0], &[0.0, 0.0, 1.0], &[0.0, 0.0, 0.0]).unwrap();
            let field = scenario.evaluate(&grid, 100.0).unwrap();
            assert!(
                field.values().iter().all(|c| c.is_finite() && *c >= 0.0),
                "{} gave {:?}",
                scenario,
                field.values()
            );
        }
    }

    #[test]
    fn test_time_series_starts_at_zero() {
        let scenario = Scenario::new(
            Dimensionality::Two,
            SourceGeometry::Point,
            Release::Instantaneous { mass: 100.0 },
            params(),
        );
        let series = scenario.time_series(30.0, 0.0, 0.0, &[0.0, 50.0, 100.0, 200.0]).unwrap();
        assert_eq!(series.len(), 4);
        assert_eq!(series[0], 0.0);
        assert!(series[2] > series[1]);
    }

    #[test]
    fn test_dimensionality_from_integer() {
        assert_eq!(Dimensionality::try_from(2u8), Ok(Dimensionality::Two));
        assert!(Dimensionality::try_from(4u8).is_err());
        assert_eq!(u8::from(Dimensionality::Three), 3);
    }
}
