//! curvelab geometry: cubic segments, their basis functions, and uniform
//! sampling over control-point windows.

pub mod basis;
pub mod curve;
pub mod sample;

pub use curve::Curve;
pub use sample::{sample_curve, sample_windows, SampleRule, WindowPlan};
