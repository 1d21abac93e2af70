//! Curve trait and the cubic segment types.

mod bezier;
mod bspline;
mod catmull_rom;
mod hermite;

use curvelab_math::{Point3, Vector3};

pub use bezier::CubicBezier;
pub use bspline::UniformBSplineSegment;
pub use catmull_rom::CatmullRomSegment;
pub use hermite::HermiteSegment;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the derivative with respect to `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// Blend four vectors with four weights.
#[inline]
pub(crate) fn blend(weights: [f64; 4], v: [Vector3; 4]) -> Vector3 {
    weights[0] * v[0] + weights[1] * v[1] + weights[2] * v[2] + weights[3] * v[3]
}
