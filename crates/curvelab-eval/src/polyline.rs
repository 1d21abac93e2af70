use curvelab_core::traits::BoundingBox;
use curvelab_math::{Bounds3, Point3};
use serde::{Deserialize, Serialize};

/// Ordered samples of an evaluated curve, ready to hand to a line renderer.
///
/// Replaced wholesale on every evaluation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SamplePolyline {
    points: Vec<Point3>,
}

impl SamplePolyline {
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }

    pub fn first(&self) -> Option<Point3> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point3> {
        self.points.last().copied()
    }

    /// Single-precision vertex positions for a GPU line strip.
    pub fn to_vertices(&self) -> Vec<[f32; 3]> {
        self.points
            .iter()
            .map(|p| p.as_vec3().to_array())
            .collect()
    }

    pub fn bounds(&self) -> Option<Bounds3> {
        Bounds3::from_points(self.points.iter().copied())
    }
}

impl BoundingBox for SamplePolyline {
    type Bounds = Bounds3;

    fn bounding_box(&self) -> Option<Bounds3> {
        self.bounds()
    }
}

impl From<Vec<Point3>> for SamplePolyline {
    fn from(points: Vec<Point3>) -> Self {
        Self::new(points)
    }
}
