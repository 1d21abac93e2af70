//! Family dispatch: control points in, sampled polyline out.

use curvelab_core::error::Result;
use curvelab_geometry::sample_windows;
use curvelab_math::{Point3, Vector3};
use curvelab_points::ControlPoints;

use crate::config::SegmentsPerCurve;
use crate::families::{bezier_segment, bspline_segment, catmull_rom_segment, hermite_segment};
use crate::family::CurveFamily;
use crate::polyline::SamplePolyline;

/// Sample the curve of `family` through `points`.
///
/// `tangents` is aligned index-for-index with `points` and is only read by
/// [`CurveFamily::Hermite`]. Fewer points than the family minimum yields an
/// empty polyline, not an error.
///
/// # Errors
/// `MissingTangent` when a Hermite segment reaches a point past the end of
/// `tangents`.
pub fn evaluate(
    family: CurveFamily,
    points: &[Point3],
    tangents: &[Vector3],
    segments: SegmentsPerCurve,
) -> Result<SamplePolyline> {
    let n = points.len();
    if n < family.minimum_points() {
        log::trace!(
            "{} curve needs {} points, have {}",
            family,
            family.minimum_points(),
            n
        );
        return Ok(SamplePolyline::default());
    }

    let plan = family.window_plan();
    let rule = family.sample_rule();
    let s = segments.get();
    let samples = match family {
        CurveFamily::Hermite => {
            sample_windows(n, plan, rule, s, |i| hermite_segment(points, tangents, i))
        }
        CurveFamily::Bezier => sample_windows(n, plan, rule, s, |i| Ok(bezier_segment(points, i))),
        CurveFamily::CatmullRom => {
            sample_windows(n, plan, rule, s, |i| Ok(catmull_rom_segment(points, i)))
        }
        CurveFamily::UniformBSpline => {
            sample_windows(n, plan, rule, s, |i| Ok(bspline_segment(points, i)))
        }
    };

    match samples {
        Ok(samples) => {
            log::debug!(
                "Evaluated {} curve: {} control points -> {} samples",
                family,
                n,
                samples.len()
            );
            Ok(SamplePolyline::new(samples))
        }
        Err(e) => {
            log::warn!("{} evaluation failed: {}", family, e);
            Err(e)
        }
    }
}

/// Resolve an untyped selector, e.g. a dropdown index.
///
/// # Errors
/// `UnsupportedFamily` for an index outside the known families; the failure
/// is also logged.
pub fn family_from_index(index: usize) -> Result<CurveFamily> {
    CurveFamily::try_from(index).map_err(|e| {
        log::error!("Unsupported curve type selected: {}", index);
        e
    })
}

/// [`evaluate`] with the family given as a selector index.
pub fn evaluate_index(
    index: usize,
    points: &[Point3],
    tangents: &[Vector3],
    segments: SegmentsPerCurve,
) -> Result<SamplePolyline> {
    evaluate(family_from_index(index)?, points, tangents, segments)
}

/// [`evaluate`] over a [`ControlPoints`] sequence.
pub fn evaluate_points(
    family: CurveFamily,
    points: &ControlPoints,
    segments: SegmentsPerCurve,
) -> Result<SamplePolyline> {
    let positions = points.positions();
    let tangents = match family {
        CurveFamily::Hermite => points.tangents()?,
        _ => Vec::new(),
    };
    evaluate(family, &positions, &tangents, segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvelab_core::error::CurveError;
    use curvelab_math::{dvec3, DVec3};

    fn segs(n: usize) -> SegmentsPerCurve {
        SegmentsPerCurve::new(n).unwrap()
    }

    #[test]
    fn test_below_minimum_is_empty_for_every_family() {
        let pts = [DVec3::ZERO, DVec3::X, DVec3::Y];
        for family in CurveFamily::ALL {
            let n = family.minimum_points() - 1;
            let line = evaluate(family, &pts[..n], &[], segs(5)).unwrap();
            assert!(line.is_empty(), "{} returned samples below minimum", family);
        }
    }

    #[test]
    fn test_hermite_without_tangents_fails() {
        let pts = [DVec3::ZERO, DVec3::X, DVec3::Y];
        let err = evaluate(CurveFamily::Hermite, &pts, &[DVec3::X], segs(4)).unwrap_err();
        assert_eq!(err, CurveError::MissingTangent { index: 1 });
    }

    #[test]
    fn test_other_families_ignore_tangents() {
        let pts: Vec<_> = (0..5).map(|i| dvec3(i as f64, 1.0, 0.0)).collect();
        for family in [CurveFamily::Bezier, CurveFamily::CatmullRom, CurveFamily::UniformBSpline] {
            let line = evaluate(family, &pts, &[], segs(6)).unwrap();
            assert_eq!(line.len(), family.expected_len(pts.len(), 6));
        }
    }

    #[test]
    fn test_unknown_index() {
        let pts = [DVec3::ZERO; 4];
        let err = evaluate_index(9, &pts, &[], segs(3)).unwrap_err();
        assert_eq!(err, CurveError::UnsupportedFamily(9));
    }

    #[test]
    fn test_evaluate_points_reads_tangents() {
        let mut cps = ControlPoints::new();
        cps.append(dvec3(1.0, 1.0, -6.0), dvec3(2.0, 2.0, 0.0));
        cps.append(dvec3(3.0, 1.0, -3.0), dvec3(1.0, 4.0, 0.0));
        cps.append(dvec3(5.0, 2.0, -1.0), dvec3(3.0, 1.0, 0.0));

        let line = evaluate_points(CurveFamily::Hermite, &cps, segs(8)).unwrap();
        assert_eq!(line.len(), 16);
        assert_eq!(line.points()[0], dvec3(1.0, 1.0, -6.0));
        assert_eq!(line.points()[7], dvec3(3.0, 1.0, -3.0));
        assert_eq!(line.points()[8], dvec3(3.0, 1.0, -3.0));
        assert_eq!(line.points()[15], dvec3(5.0, 2.0, -1.0));
    }
}
