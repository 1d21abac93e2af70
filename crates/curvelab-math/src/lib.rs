pub mod bounds;

pub use bounds::Bounds3;
pub use glam::{dvec3, DVec3};

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
