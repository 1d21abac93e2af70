//! Cubic Bezier segment.

use curvelab_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{blend, Curve};
use crate::basis;

/// A cubic Bezier segment defined by four control points.
///
/// The curve interpolates the first and last point; the inner two only pull.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub control_points: [Point3; 4],
}

impl CubicBezier {
    pub fn new(p0: Point3, p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self {
            control_points: [p0, p1, p2, p3],
        }
    }
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point3 {
        blend(basis::bezier(t), self.control_points)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        blend(basis::bezier_derivs(t), self.control_points)
    }
}
