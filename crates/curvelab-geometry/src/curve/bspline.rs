//! Uniform cubic B-spline segment.

use curvelab_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{blend, Curve};
use crate::basis;

/// One span of a uniform cubic B-spline, controlled by a window of four
/// points.
///
/// The span approximates rather than interpolates: at `t = 0` it sits at
/// `(p0 + 4 p1 + p2) / 6`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformBSplineSegment {
    pub window: [Point3; 4],
}

impl UniformBSplineSegment {
    pub fn new(window: [Point3; 4]) -> Self {
        Self { window }
    }
}

impl Curve for UniformBSplineSegment {
    fn point_at(&self, t: f64) -> Point3 {
        blend(basis::uniform_bspline(t), self.window)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        blend(basis::uniform_bspline_derivs(t), self.window)
    }
}
