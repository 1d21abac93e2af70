use std::fmt;
use std::str::FromStr;

use curvelab_core::error::{CurveError, Result};
use curvelab_geometry::{SampleRule, WindowPlan};
use serde::{Deserialize, Serialize};

/// The closed set of supported interpolation schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveFamily {
    /// Cubic Hermite through every point, shaped by per-point tangents.
    #[default]
    Hermite,
    /// Piecewise cubic Bezier over groups of four points.
    Bezier,
    /// Uniform Catmull-Rom spline over sliding windows of four points.
    CatmullRom,
    /// Uniform cubic B-spline over sliding windows of four points.
    UniformBSpline,
}

impl CurveFamily {
    /// All families in selector order.
    pub const ALL: [CurveFamily; 4] = [
        CurveFamily::Hermite,
        CurveFamily::Bezier,
        CurveFamily::CatmullRom,
        CurveFamily::UniformBSpline,
    ];

    /// Position of this family in a selector list.
    pub fn index(self) -> usize {
        match self {
            CurveFamily::Hermite => 0,
            CurveFamily::Bezier => 1,
            CurveFamily::CatmullRom => 2,
            CurveFamily::UniformBSpline => 3,
        }
    }

    /// Fewest control points that produce any output.
    pub fn minimum_points(self) -> usize {
        match self {
            CurveFamily::Hermite => 3,
            CurveFamily::Bezier | CurveFamily::CatmullRom | CurveFamily::UniformBSpline => 4,
        }
    }

    pub fn window_plan(self) -> WindowPlan {
        match self {
            CurveFamily::Hermite => WindowPlan::new(2, 1),
            CurveFamily::Bezier => WindowPlan::new(4, 3),
            CurveFamily::CatmullRom | CurveFamily::UniformBSpline => WindowPlan::new(4, 1),
        }
    }

    pub fn sample_rule(self) -> SampleRule {
        match self {
            CurveFamily::Hermite | CurveFamily::Bezier => SampleRule::Spread,
            CurveFamily::CatmullRom | CurveFamily::UniformBSpline => SampleRule::Step,
        }
    }

    /// Length of the polyline produced for `points` control points.
    pub fn expected_len(self, points: usize, segments: usize) -> usize {
        if points < self.minimum_points() {
            return 0;
        }
        self.window_plan().count(points) * self.sample_rule().samples(segments)
    }

    pub fn name(self) -> &'static str {
        match self {
            CurveFamily::Hermite => "Hermite",
            CurveFamily::Bezier => "Bezier",
            CurveFamily::CatmullRom => "Catmull-Rom",
            CurveFamily::UniformBSpline => "Uniform B-Spline",
        }
    }
}

impl TryFrom<usize> for CurveFamily {
    type Error = CurveError;

    fn try_from(index: usize) -> Result<Self> {
        CurveFamily::ALL
            .get(index)
            .copied()
            .ok_or(CurveError::UnsupportedFamily(index))
    }
}

impl FromStr for CurveFamily {
    type Err = CurveError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "hermite" => Ok(CurveFamily::Hermite),
            "bezier" => Ok(CurveFamily::Bezier),
            "catmull_rom" => Ok(CurveFamily::CatmullRom),
            "uniform_b_spline" => Ok(CurveFamily::UniformBSpline),
            other => Err(CurveError::InvalidOperation(format!(
                "Unknown curve family '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for CurveFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
