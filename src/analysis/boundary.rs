//! Site-boundary sampling
//!
//! A site boundary is a polyline of (x, y) vertices. Each segment of length
//! L is sampled with ⌈L⌉ equally spaced points (about one per metre) so the
//! plume is checked along the whole fence line, not only at its corners.

use crate::error::TransportError;
use crate::physics::QueryGrid;
use crate::solver::Scenario;

/// Densify a polyline into roughly 1 m spaced points
///
/// Shared vertices appear once; zero-length segments are skipped. The final
/// vertex is kept, so a closed ring repeats its first point at the end.
pub fn sample_polyline(vertices: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let length = |pair: &[(f64, f64)]| (pair[1].0 - pair[0].0).hypot(pair[1].1 - pair[0].1);
    let last = vertices.windows(2).rposition(|pair| length(pair) > 0.0);
    let mut points = Vec::new();

    for (i, pair) in vertices.windows(2).enumerate() {
        let (x1, y1) = pair[0];
        let (x2, y2) = pair[1];
        let segment = length(pair);
        if segment == 0.0 {
            continue;
        }

        let n = (segment.ceil() as usize).max(2);
        let count = if Some(i) == last { n } else { n - 1 };

        points.extend((0..count).map(|k| {
            let s = k as f64 / (n - 1) as f64;
            (x1 + s * (x2 - x1), y1 + s * (y2 - y1))
        }));
    }

    points
}

/// Maximum boundary concentration for each entry of `times`
pub fn boundary_maximum(
    scenario: &Scenario,
    vertices: &[(f64, f64)],
    times: &[f64],
) -> Result<Vec<f64>, TransportError> {
    let points = sample_polyline(vertices);
    if points.is_empty() {
        return Err(TransportError::invalid(
            "boundary",
            "polyline has no segment of positive length",
        ));
    }

    let (xs, ys): (Vec<f64>, Vec<f64>) = points.into_iter().unzip();
    let query = QueryGrid::scattered_2d(&xs, &ys)?;

    let fields = scenario.evaluate_times(&query, times)?;
    Ok(fields.iter().map(|field| field.max().unwrap_or(0.0)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{Dispersion, Release, TransportParameters};
    use crate::solver::{Dimensionality, SourceGeometry};
    use approx::assert_relative_eq;

    #[test]
    fn test_single_segment() {
        let points = sample_polyline(&[(0.0, 0.0), (10.0, 0.0)]);
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], (0.0, 0.0));
        assert_eq!(points[9], (10.0, 0.0));
    }

    #[test]
    fn test_shared_vertex_once() {
        let points = sample_polyline(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0)]);
        // 4 points on the first leg minus its end, 3 on the second
        assert_eq!(points.len(), 3 + 3);
        assert_eq!(points.iter().filter(|&&p| p == (4.0, 0.0)).count(), 1);
        assert_eq!(*points.last().unwrap(), (4.0, 3.0));
    }

    #[test]
    fn test_trailing_zero_length_keeps_end() {
        let points = sample_polyline(&[(0.0, 0.0), (3.0, 0.0), (3.0, 0.0)]);
        assert_eq!(points.len(), 3);
        assert_eq!(*points.last().unwrap(), (3.0, 0.0));
    }

    #[test]
    fn test_zero_length_skipped() {
        let points = sample_polyline(&[(0.0, 0.0), (0.0, 0.0), (0.0, 5.0)]);
        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[1].1, 1.25);
    }

    #[test]
    fn test_boundary_maximum_grows_towards_plume() {
        let params = TransportParameters::new(0.3, 10.0, Dispersion::new(0.5, 0.1, 0.0), 0.1);
        let scenario = Scenario::new(
            Dimensionality::Two,
            SourceGeometry::Point,
            Release::Instantaneous { mass: 100.0 },
            params,
        );
        // Fence line across the flow, 20 m downstream
        let fence = [(20.0, -10.0), (20.0, 10.0)];
        let maxima = boundary_maximum(&scenario, &fence, &[0.0, 50.0, 200.0]).unwrap();

        assert_eq!(maxima[0], 0.0);
        assert!(maxima[2] > maxima[1]);
    }

    #[test]
    fn test_degenerate_boundary_rejected() {
        let params = TransportParameters::new(0.3, 10.0, Dispersion::new(0.5, 0.1, 0.0), 0.1);
        let scenario = Scenario::new(
            Dimensionality::Two,
            SourceGeometry::Point,
            Release::Instantaneous { mass: 1.0 },
            params,
        );
        assert!(boundary_maximum(&scenario, &[(1.0, 1.0)], &[10.0]).is_err());
    }
}
