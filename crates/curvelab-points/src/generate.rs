//! Random placement of new control points and their tangents.

use curvelab_math::{DVec3, Point3, Vector3};
use rand::Rng;

use super::sequence::ControlPoints;
use super::types::PointId;

/// The two points every fresh curve starts from.
pub const INITIAL_POSITIONS: [Point3; 2] = [
    DVec3::new(1.0, 1.0, -6.0),
    DVec3::new(3.0, 1.0, -3.0),
];

/// A position for the next generated point: x in `[1, 10)`, y in `[1, 6)`,
/// z in `[-6, 0)`.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R) -> Point3 {
    DVec3::new(
        rng.gen_range(1.0..10.0),
        rng.gen_range(1.0..6.0),
        rng.gen_range(-6.0..0.0),
    )
}

/// A tangent in the XY plane: x in `[1, 10)`, y in `[1, 6)`, z = 0.
pub fn random_tangent<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    DVec3::new(rng.gen_range(1.0..10.0), rng.gen_range(1.0..6.0), 0.0)
}

impl ControlPoints {
    /// Sequence holding [`INITIAL_POSITIONS`] with random tangents.
    pub fn with_initial_points<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cps = Self::new();
        for position in INITIAL_POSITIONS {
            cps.append_random(position, rng);
        }
        cps
    }

    /// Append `position` with a tangent drawn by [`random_tangent`].
    pub fn append_random<R: Rng + ?Sized>(&mut self, position: Point3, rng: &mut R) -> PointId {
        let tangent = random_tangent(rng);
        self.append(position, tangent)
    }
}
