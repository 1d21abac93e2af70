//! Ordered control points with a tangent side table.
//!
//! Points are addressed by stable [`PointId`] handles. Sequence order is
//! append order and defines curve traversal order.

mod bounding;
mod generate;
mod iter;
pub mod sequence;
pub mod types;
mod validate;

pub use generate::{random_position, random_tangent, INITIAL_POSITIONS};
pub use iter::ControlPointIter;
pub use sequence::ControlPoints;
pub use types::*;
