//! Evaluator configuration.

use curvelab_core::error::{CurveError, Result};
use curvelab_core::traits::Validate;
use serde::{Deserialize, Serialize};

use crate::family::CurveFamily;

/// Samples generated per curve segment; always at least 2.
///
/// Hermite and Bezier place `t = j / (n - 1)`, so `n = 1` has no defined
/// sampling. The bound is applied to every family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct SegmentsPerCurve(pub(crate) usize);

impl SegmentsPerCurve {
    pub const MIN: usize = 2;
    pub const DEFAULT: usize = 100;

    pub fn new(segments: usize) -> Result<Self> {
        if segments < Self::MIN {
            return Err(CurveError::InvalidSegments(segments));
        }
        Ok(Self(segments))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for SegmentsPerCurve {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<usize> for SegmentsPerCurve {
    type Error = CurveError;

    fn try_from(segments: usize) -> Result<Self> {
        Self::new(segments)
    }
}

impl From<SegmentsPerCurve> for usize {
    fn from(segments: SegmentsPerCurve) -> usize {
        segments.0
    }
}

/// Settings a host hands to a [`CurveEvaluator`](crate::CurveEvaluator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    pub segments_per_curve: usize,
    pub family: CurveFamily,
}

impl EvaluatorConfig {
    pub fn new(segments_per_curve: usize, family: CurveFamily) -> Self {
        Self {
            segments_per_curve,
            family,
        }
    }

    pub fn segments(&self) -> Result<SegmentsPerCurve> {
        SegmentsPerCurve::new(self.segments_per_curve)
    }
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            segments_per_curve: SegmentsPerCurve::DEFAULT,
            family: CurveFamily::default(),
        }
    }
}

impl Validate for EvaluatorConfig {
    fn validate(&self) -> Result<()> {
        self.segments().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_lower_bound() {
        assert_eq!(SegmentsPerCurve::new(0).unwrap_err(), CurveError::InvalidSegments(0));
        assert_eq!(SegmentsPerCurve::new(1).unwrap_err(), CurveError::InvalidSegments(1));
        assert_eq!(SegmentsPerCurve::new(2).unwrap().get(), 2);
    }

    #[test]
    fn test_defaults() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.segments_per_curve, 100);
        assert_eq!(config.family, CurveFamily::Hermite);
        config.validate().unwrap();
        assert_eq!(SegmentsPerCurve::default().get(), 100);
    }

    #[test]
    fn test_config_from_json() {
        let config: EvaluatorConfig =
            serde_json::from_str(r#"{ "segments_per_curve": 24, "family": "catmull_rom" }"#)
                .unwrap();
        assert_eq!(config, EvaluatorConfig::new(24, CurveFamily::CatmullRom));

        let partial: EvaluatorConfig = serde_json::from_str(r#"{ "family": "bezier" }"#).unwrap();
        assert_eq!(partial.segments_per_curve, 100);
    }

    #[test]
    fn test_config_rejects_single_segment() {
        let config: EvaluatorConfig =
            serde_json::from_str(r#"{ "segments_per_curve": 1 }"#).unwrap();
        assert_eq!(config.validate().unwrap_err(), CurveError::InvalidSegments(1));
    }

    #[test]
    fn test_segments_deserialize_checked() {
        let ok: SegmentsPerCurve = serde_json::from_str("8").unwrap();
        assert_eq!(ok.get(), 8);
        assert!(serde_json::from_str::<SegmentsPerCurve>("1").is_err());
    }
}
