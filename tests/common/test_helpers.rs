//! Helper functions and fixtures for integration tests

use plume_rs::physics::{Dispersion, FieldData, Release, RiverSteadyParameters, TransportParameters};
use plume_rs::solver::{Dimensionality, Scenario, SourceGeometry};

/// Install a test logger once (`RUST_LOG=debug cargo test` shows dispatch logs)
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Largest absolute element-wise difference between two fields
pub fn max_abs_difference(a: &FieldData, b: &FieldData) -> f64 {
    assert_eq!(a.shape(), b.shape(), "Field shapes differ");
    a.values()
        .iter()
        .zip(b.values().iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Assert every element is finite and non-negative
pub fn assert_non_negative(field: &FieldData, message: &str) {
    for (i, c) in field.values().iter().enumerate() {
        assert!(c.is_finite(), "{}: element {} is not finite ({})", message, i, c);
        assert!(*c >= 0.0, "{}: element {} is negative ({})", message, i, c);
    }
}

/// Assert every element is exactly zero
pub fn assert_all_zero(field: &FieldData, message: &str) {
    assert!(
        field.values().iter().all(|&c| c == 0.0),
        "{}: expected an all-zero field",
        message
    );
}

// =================================================================================================
// Fixtures
// =================================================================================================

/// Sandy aquifer: nₑ = 0.3, section/thickness 10 m, D = (0.5, 0.1, 0.05), u = 0.1
pub fn aquifer() -> TransportParameters {
    TransportParameters::new(0.3, 10.0, Dispersion::new(0.5, 0.1, 0.05), 0.1)
}

/// Column with a 2 m² cross-section, D_L = 0.5, u = 0.1
pub fn column() -> TransportParameters {
    TransportParameters::new(0.3, 2.0, Dispersion::longitudinal(0.5), 0.1)
}

pub fn continuous() -> Release {
    Release::Continuous { concentration: 100.0, flow: 0.5 }
}

pub fn short(duration: f64) -> Release {
    Release::ShortDuration { concentration: 100.0, flow: 0.5, duration }
}

pub fn scenario(dimensionality: Dimensionality, geometry: SourceGeometry, release: Release) -> Scenario {
    let params = match dimensionality {
        Dimensionality::One => column(),
        _ => aquifer(),
    };
    Scenario::new(dimensionality, geometry, release, params)
}

/// Every (dimensionality, geometry) pair that supports a continuous release
pub fn continuous_capable() -> Vec<(Dimensionality, SourceGeometry)> {
    vec![
        (Dimensionality::One, SourceGeometry::Point),
        (Dimensionality::Two, SourceGeometry::Point),
        (Dimensionality::Two, SourceGeometry::Area { length: 10.0, width: 6.0 }),
        (Dimensionality::Three, SourceGeometry::Point),
    ]
}

/// Outfall into a river: C_mix = 25/10.5 mg/L, advection-dominated
pub fn river_reach() -> RiverSteadyParameters {
    RiverSteadyParameters {
        cp: 50.0,
        qp: 0.5,
        ch: 0.0,
        qh: 10.0,
        decay: 0.2,
        velocity: 0.5,
        dispersion: 0.01,
        width: 20.0,
        area: 30.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
