//! Scenario configuration
//!
//! [`ScenarioConfig`] mirrors the parameter map a calling layer persists for
//! one evaluation and turns it into a runtime [`Scenario`].
//!
//! # JSON layout
//!
//! ```json
//! {
//!   "dimensionality": 2,
//!   "geometry": { "shape": "area", "length": 20.0, "width": 10.0 },
//!   "release": { "mode": "continuous", "concentration": 100.0, "flow": 0.5 },
//!   "parameters": {
//!     "porosity": 0.3,
//!     "section": 10.0,
//!     "dispersion": { "longitudinal": 0.5, "transverse": 0.1 },
//!     "velocity": 0.1,
//!     "decay": 0.001
//!   },
//!   "frame": { "x_s": 0.0, "y_s": 0.0, "angle_deg": 30.0 }
//! }
//! ```
//!
//! `geometry` defaults to a point source and `frame` to the identity frame.

use serde::{Deserialize, Serialize};

use crate::error::TransportError;
use crate::physics::{FlowFrame, Release, TransportParameters};
use crate::solver::{Dimensionality, Scenario, SourceGeometry};

/// Serializable description of one groundwater evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub dimensionality: Dimensionality,
    #[serde(default = "point_source")]
    pub geometry: SourceGeometry,
    pub release: Release,
    pub parameters: TransportParameters,
    #[serde(default)]
    pub frame: FlowFrame,
}

fn point_source() -> SourceGeometry {
    SourceGeometry::Point
}

impl ScenarioConfig {
    /// Parse a configuration from JSON
    ///
    /// # Errors
    ///
    /// `Config` with the parser message on malformed JSON, unknown release
    /// modes or dimensionality outside 1..=3.
    pub fn from_json_str(json: &str) -> Result<Self, TransportError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, TransportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check physical sanity of every input
    pub fn validate(&self) -> Result<(), TransportError> {
        self.parameters.validate(self.dimensionality.dimensions())?;
        self.release.validate()?;

        if let SourceGeometry::Area { length, width } = self.geometry {
            if self.dimensionality != Dimensionality::Two {
                return Err(TransportError::UnsupportedScenario {
                    dimensionality: self.dimensionality.to_string(),
                    geometry: self.geometry.to_string(),
                    release: self.release.kind().to_string(),
                });
            }
            if length <= 0.0 || width <= 0.0 {
                return Err(TransportError::invalid(
                    "geometry",
                    format!("area dimensions must be positive, got {} × {}", length, width),
                ));
            }
        }

        if !self.frame.angle_deg.is_finite() {
            return Err(TransportError::invalid("frame.angle_deg", "must be finite"));
        }

        Ok(())
    }

    /// Validate and build the runtime scenario
    pub fn into_scenario(self) -> Result<Scenario, TransportError> {
        self.validate()?;
        Ok(Scenario::new(self.dimensionality, self.geometry, self.release, self.parameters)
            .with_frame(self.frame))
    }
}
