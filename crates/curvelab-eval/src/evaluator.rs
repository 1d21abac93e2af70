//! Stateful evaluator a host drives from its point-editing and selector UI.

use curvelab_core::error::Result;
use curvelab_core::traits::Validate;
use curvelab_math::{Point3, Vector3};
use curvelab_points::{random_position, ControlPoints, PointId};
use rand::Rng;

use crate::config::{EvaluatorConfig, SegmentsPerCurve};
use crate::evaluate::{evaluate_points, family_from_index};
use crate::family::CurveFamily;
use crate::polyline::SamplePolyline;

/// Owns the control points, the selected family, the sampling density, and
/// the polyline currently on display.
///
/// Every mutation re-evaluates the curve. A failed evaluation leaves the
/// displayed polyline as it was.
#[derive(Debug, Clone)]
pub struct CurveEvaluator {
    points: ControlPoints,
    family: CurveFamily,
    segments: SegmentsPerCurve,
    output: SamplePolyline,
}

impl CurveEvaluator {
    pub fn new(config: EvaluatorConfig) -> Result<Self> {
        Self::with_points(config, ControlPoints::new())
    }

    /// Start from an existing sequence and evaluate it once.
    pub fn with_points(config: EvaluatorConfig, points: ControlPoints) -> Result<Self> {
        config.validate()?;
        points.validate()?;
        let mut evaluator = Self {
            points,
            family: config.family,
            segments: config.segments()?,
            output: SamplePolyline::default(),
        };
        evaluator.update_curve()?;
        Ok(evaluator)
    }

    /// Start from the two default points with random tangents.
    pub fn with_initial_points<R: Rng + ?Sized>(config: EvaluatorConfig, rng: &mut R) -> Result<Self> {
        Self::with_points(config, ControlPoints::with_initial_points(rng))
    }

    pub fn points(&self) -> &ControlPoints {
        &self.points
    }

    pub fn family(&self) -> CurveFamily {
        self.family
    }

    pub fn segments(&self) -> SegmentsPerCurve {
        self.segments
    }

    /// The polyline from the last successful evaluation.
    pub fn output(&self) -> &SamplePolyline {
        &self.output
    }

    /// Append a point with a caller-chosen tangent and redraw.
    ///
    /// If the redraw fails the point is not kept.
    pub fn append_point(&mut self, position: Point3, tangent: Vector3) -> Result<PointId> {
        let mut candidate = self.points.clone();
        let id = candidate.append(position, tangent);
        self.commit(candidate)?;
        Ok(id)
    }

    /// Append a randomly placed point with a random tangent and redraw.
    ///
    /// If the redraw fails the point is not kept.
    pub fn generate_next_segment<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<PointId> {
        let mut candidate = self.points.clone();
        let position = random_position(rng);
        let id = candidate.append_random(position, rng);
        self.commit(candidate)?;
        Ok(id)
    }

    /// Reposition a point and redraw.
    pub fn move_point(&mut self, id: PointId, position: Point3) -> Result<&SamplePolyline> {
        let mut candidate = self.points.clone();
        candidate.move_point(id, position)?;
        self.commit(candidate)
    }

    pub fn select_family(&mut self, family: CurveFamily) -> Result<&SamplePolyline> {
        self.family = family;
        self.update_curve()
    }

    /// Select a family by selector index.
    ///
    /// An unknown index is logged and rejected; the selected family and the
    /// displayed polyline stay unchanged.
    pub fn select_family_index(&mut self, index: usize) -> Result<&SamplePolyline> {
        let family = family_from_index(index)?;
        self.select_family(family)
    }

    pub fn set_segments(&mut self, segments: SegmentsPerCurve) -> Result<&SamplePolyline> {
        self.segments = segments;
        self.update_curve()
    }

    /// Recompute the displayed polyline from scratch.
    pub fn update_curve(&mut self) -> Result<&SamplePolyline> {
        self.output = evaluate_points(self.family, &self.points, self.segments)?;
        Ok(&self.output)
    }

    /// Evaluate `candidate` and adopt it only if that succeeds.
    fn commit(&mut self, candidate: ControlPoints) -> Result<&SamplePolyline> {
        self.output = evaluate_points(self.family, &candidate, self.segments)?;
        self.points = candidate;
        Ok(&self.output)
    }
}
