use curvelab_core::traits::BoundingBox;
use curvelab_math::Bounds3;

use super::sequence::ControlPoints;

impl BoundingBox for ControlPoints {
    type Bounds = Bounds3;

    fn bounding_box(&self) -> Option<Bounds3> {
        Bounds3::from_points(self.iter().map(|(_, p)| p.position))
    }
}

#[cfg(test)]
mod tests {
    use curvelab_math::{dvec3, DVec3};

    use super::*;

    #[test]
    fn test_bounds_follow_moves() {
        let mut cps = ControlPoints::new();
        assert!(cps.bounding_box().is_none());

        let a = cps.append(dvec3(1.0, 1.0, -6.0), DVec3::X);
        cps.append(dvec3(3.0, 1.0, -3.0), DVec3::X);
        let b = cps.bounding_box().unwrap();
        assert_eq!(b.min, dvec3(1.0, 1.0, -6.0));
        assert_eq!(b.max, dvec3(3.0, 1.0, -3.0));

        cps.move_point(a, dvec3(0.0, 2.0, -1.0)).unwrap();
        let b = cps.bounding_box().unwrap();
        assert_eq!(b.min, dvec3(0.0, 1.0, -3.0));
        assert_eq!(b.max, dvec3(3.0, 2.0, -1.0));
    }
}
