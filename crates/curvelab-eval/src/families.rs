//! Per-family segment construction from a window start index.

use curvelab_core::error::{CurveError, Result};
use curvelab_geometry::curve::{
    CatmullRomSegment, CubicBezier, HermiteSegment, UniformBSplineSegment,
};
use curvelab_math::{Point3, Vector3};

/// Hermite segment between `points[i]` and `points[i + 1]`.
pub(crate) fn hermite_segment(
    points: &[Point3],
    tangents: &[Vector3],
    i: usize,
) -> Result<HermiteSegment> {
    let tangent = |index: usize| {
        tangents
            .get(index)
            .copied()
            .ok_or(CurveError::MissingTangent { index })
    };
    Ok(HermiteSegment::new(
        points[i],
        points[i + 1],
        tangent(i)?,
        tangent(i + 1)?,
    ))
}

/// Bezier segment for the group starting at `i` (a multiple of 3).
///
/// After the first group, the second control point is the previous group's
/// third point reflected through the shared end point, so adjacent groups
/// meet with matching tangents. `points[i + 1]` is unused in that case.
pub(crate) fn bezier_segment(points: &[Point3], i: usize) -> CubicBezier {
    let p1 = if i < 3 {
        points[i + 1]
    } else {
        2.0 * points[i] - points[i - 1]
    };
    CubicBezier::new(points[i], p1, points[i + 2], points[i + 3])
}

pub(crate) fn catmull_rom_segment(points: &[Point3], i: usize) -> CatmullRomSegment {
    CatmullRomSegment::new(window(points, i))
}

pub(crate) fn bspline_segment(points: &[Point3], i: usize) -> UniformBSplineSegment {
    UniformBSplineSegment::new(window(points, i))
}

fn window(points: &[Point3], i: usize) -> [Point3; 4] {
    [points[i], points[i + 1], points[i + 2], points[i + 3]]
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvelab_math::{dvec3, DVec3};

    #[test]
    fn test_first_bezier_group_uses_points_directly() {
        let pts: Vec<_> = (0..4).map(|i| dvec3(i as f64, (i * i) as f64, 0.0)).collect();
        let seg = bezier_segment(&pts, 0);
        assert_eq!(seg.control_points, [pts[0], pts[1], pts[2], pts[3]]);
    }

    #[test]
    fn test_later_bezier_group_reflects_previous_handle() {
        let pts = [
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 1.0, 0.0),
            dvec3(2.0, 1.0, 0.0),
            dvec3(3.0, 0.0, 0.0),
            dvec3(9.0, 9.0, 9.0),
            dvec3(5.0, -1.0, 0.0),
            dvec3(6.0, 0.0, 0.0),
        ];
        let seg = bezier_segment(&pts, 3);
        assert_eq!(seg.control_points[0], pts[3]);
        assert_eq!(seg.control_points[1], dvec3(4.0, -1.0, 0.0));
        assert_eq!(seg.control_points[2], pts[5]);
        assert_eq!(seg.control_points[3], pts[6]);
    }

    #[test]
    fn test_hermite_segment_reports_missing_tangent() {
        let pts = [DVec3::ZERO, DVec3::X, DVec3::Y];
        let tangents = [DVec3::X, DVec3::X];
        assert!(hermite_segment(&pts, &tangents, 0).is_ok());
        assert_eq!(
            hermite_segment(&pts, &tangents, 1).unwrap_err(),
            CurveError::MissingTangent { index: 2 }
        );
    }
}
