//! Uniform sampling of cubic segments laid over a control-point sequence.
//!
//! Every curve family is one [`WindowPlan`] (how windows of control points
//! are cut from the sequence), one [`SampleRule`] (how `t` is spread over a
//! window), and a constructor turning a window start into a [`Curve`].

use curvelab_core::error::{CurveError, Result};
use curvelab_math::Point3;

use crate::curve::Curve;

/// How the parameter `t` is spread over one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleRule {
    /// `segments` samples at `t = j / (segments - 1)`.
    Spread,
    /// `segments + 1` samples at `t = j / segments`.
    Step,
}

impl SampleRule {
    /// Number of samples emitted per segment.
    pub fn samples(self, segments: usize) -> usize {
        match self {
            SampleRule::Spread => segments,
            SampleRule::Step => segments + 1,
        }
    }

    /// Parameters in `[0, 1]`, both ends included, in increasing order.
    ///
    /// Fails with [`CurveError::InvalidSegments`] below 2 so that neither rule
    /// ever divides by zero.
    pub fn parameters(self, segments: usize) -> Result<impl Iterator<Item = f64>> {
        check_segments(segments)?;
        let denom = match self {
            SampleRule::Spread => segments - 1,
            SampleRule::Step => segments,
        };
        Ok((0..self.samples(segments)).map(move |j| j as f64 / denom as f64))
    }
}

fn check_segments(segments: usize) -> Result<()> {
    if segments < 2 {
        return Err(CurveError::InvalidSegments(segments));
    }
    Ok(())
}

/// Windows of `size` consecutive control points, starting every `stride`
/// points, for as long as a full window fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowPlan {
    pub size: usize,
    pub stride: usize,
}

impl WindowPlan {
    pub const fn new(size: usize, stride: usize) -> Self {
        Self { size, stride }
    }

    /// Start index of every full window over `len` points.
    pub fn starts(self, len: usize) -> impl Iterator<Item = usize> {
        let Self { size, stride } = self;
        (0..len)
            .step_by(stride.max(1))
            .take_while(move |&i| i + size <= len)
    }

    /// Number of full windows over `len` points.
    pub fn count(self, len: usize) -> usize {
        if len < self.size {
            0
        } else {
            (len - self.size) / self.stride.max(1) + 1
        }
    }
}

/// Sample `curve` over its whole domain following `rule`.
pub fn sample_curve<C: Curve + ?Sized>(
    curve: &C,
    rule: SampleRule,
    segments: usize,
) -> Result<Vec<Point3>> {
    let mut points = Vec::with_capacity(rule.samples(segments));
    extend_samples(curve, rule, segments, &mut points)?;
    Ok(points)
}

fn extend_samples<C: Curve + ?Sized>(
    curve: &C,
    rule: SampleRule,
    segments: usize,
    points: &mut Vec<Point3>,
) -> Result<()> {
    let (t_min, t_max) = curve.domain();
    points.extend(
        rule.parameters(segments)?
            .map(|t| curve.point_at(t_min + (t_max - t_min) * t)),
    );
    Ok(())
}

/// Sample one segment per window of a `len`-point sequence, concatenated in
/// window order.
///
/// `make_segment` receives the start index of each window and builds the
/// segment for it; an error from it aborts the whole evaluation.
pub fn sample_windows<C, F>(
    len: usize,
    plan: WindowPlan,
    rule: SampleRule,
    segments: usize,
    mut make_segment: F,
) -> Result<Vec<Point3>>
where
    C: Curve,
    F: FnMut(usize) -> Result<C>,
{
    check_segments(segments)?;

    let mut points = Vec::with_capacity(plan.count(len) * rule.samples(segments));
    for start in plan.starts(len) {
        let segment = make_segment(start)?;
        extend_samples(&segment, rule, segments, &mut points)?;
    }
    Ok(points)
}
