//! Cubic Hermite segment.

use curvelab_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{blend, Curve};
use crate::basis;

/// A cubic Hermite segment from `start` to `end` with explicit end tangents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HermiteSegment {
    pub start: Point3,
    pub end: Point3,
    pub start_tangent: Vector3,
    pub end_tangent: Vector3,
}

impl HermiteSegment {
    pub fn new(start: Point3, end: Point3, start_tangent: Vector3, end_tangent: Vector3) -> Self {
        Self {
            start,
            end,
            start_tangent,
            end_tangent,
        }
    }

    fn inputs(&self) -> [Vector3; 4] {
        [self.start, self.end, self.start_tangent, self.end_tangent]
    }
}

impl Curve for HermiteSegment {
    fn point_at(&self, t: f64) -> Point3 {
        blend(basis::hermite(t), self.inputs())
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        blend(basis::hermite_derivs(t), self.inputs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curvelab_math::{dvec3, DVec3};

    fn segment() -> HermiteSegment {
        HermiteSegment::new(
            dvec3(1.0, 1.0, -6.0),
            dvec3(3.0, 1.0, -3.0),
            dvec3(4.0, 2.0, 0.0),
            dvec3(7.0, 5.0, 0.0),
        )
    }

    #[test]
    fn test_hermite_endpoints() {
        let seg = segment();
        assert_eq!(seg.point_at(0.0), seg.start);
        assert_eq!(seg.point_at(1.0), seg.end);
    }

    #[test]
    fn test_hermite_zero_tangents_stay_on_chord() {
        let seg = HermiteSegment::new(DVec3::ZERO, dvec3(2.0, 0.0, 0.0), DVec3::ZERO, DVec3::ZERO);
        for i in 0..=10 {
            let p = seg.point_at(i as f64 / 10.0);
            assert!(p.x >= 0.0 && p.x <= 2.0);
            assert_eq!(p.y, 0.0);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_hermite_start_derivative_uses_first_tangent_weight() {
        let seg = segment();
        // d/dt at 0: only the third weight is non-zero.
        let d = seg.tangent_at(0.0);
        assert!((d - seg.start_tangent).length() < 1e-12);
    }
}
