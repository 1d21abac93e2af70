//! Uniform Catmull-Rom segment.

use curvelab_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::{blend, Curve};
use crate::basis;

/// The Catmull-Rom piece spanned by a window of four points.
///
/// It runs from the second point to the third; the outer two shape the end
/// tangents. Parameterization is uniform in `t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatmullRomSegment {
    pub window: [Point3; 4],
}

impl CatmullRomSegment {
    pub fn new(window: [Point3; 4]) -> Self {
        Self { window }
    }
}

impl Curve for CatmullRomSegment {
    fn point_at(&self, t: f64) -> Point3 {
        blend(basis::catmull_rom(t), self.window)
    }

    fn tangent_at(&self, t: f64) -> Vector3 {
        blend(basis::catmull_rom_derivs(t), self.window)
    }
}
