//! curvelab evaluation: turns control points, tangents, a curve family and a
//! sampling density into an ordered polyline.

pub mod config;
pub mod evaluate;
pub mod evaluator;
pub mod family;
mod families;
pub mod polyline;

pub use config::{EvaluatorConfig, SegmentsPerCurve};
pub use evaluate::{evaluate, evaluate_index, evaluate_points, family_from_index};
pub use evaluator::CurveEvaluator;
pub use family::CurveFamily;
pub use polyline::SamplePolyline;
