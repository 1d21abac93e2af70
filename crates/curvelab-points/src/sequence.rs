use curvelab_core::error::{CurveError, Result};
use curvelab_math::{Point3, Vector3};
use slotmap::{SecondaryMap, SlotMap};

use super::iter::ControlPointIter;
use super::types::*;

/// Control point sequence plus its tangent side table.
///
/// Both structures grow together in [`ControlPoints::append`], so every point
/// reachable through the public API has exactly one tangent. Tangents are
/// fixed at creation; only positions change afterwards.
#[derive(Debug, Clone, Default)]
pub struct ControlPoints {
    pub(crate) points: SlotMap<PointId, ControlPoint>,
    pub(crate) order: Vec<PointId>,
    pub(crate) tangents: SecondaryMap<PointId, Vector3>,
}

impl ControlPoints {
    pub fn new() -> Self {
        Self {
            points: SlotMap::with_key(),
            order: Vec::new(),
            tangents: SecondaryMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append a point at the end of the sequence together with its tangent.
    pub fn append(&mut self, position: Point3, tangent: Vector3) -> PointId {
        let id = self.points.insert(ControlPoint { position });
        self.tangents.insert(id, tangent);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: PointId) -> Option<&ControlPoint> {
        self.points.get(id)
    }

    pub fn tangent(&self, id: PointId) -> Option<Vector3> {
        self.tangents.get(id).copied()
    }

    /// Handle of the point at sequence position `index`.
    pub fn id_at(&self, index: usize) -> Option<PointId> {
        self.order.get(index).copied()
    }

    /// Sequence position of `id`, which is also its on-screen number.
    pub fn index_of(&self, id: PointId) -> Option<usize> {
        self.order.iter().position(|&p| p == id)
    }

    /// Reposition an existing point (the drag path).
    pub fn move_point(&mut self, id: PointId, position: Point3) -> Result<()> {
        let point = self
            .points
            .get_mut(id)
            .ok_or_else(|| CurveError::NotFound(format!("Control point {:?}", id)))?;
        point.position = position;
        Ok(())
    }

    /// Positions in curve order.
    pub fn positions(&self) -> Vec<Point3> {
        self.iter().map(|(_, p)| p.position).collect()
    }

    /// Tangents in curve order, aligned index-for-index with [`positions`].
    ///
    /// [`positions`]: ControlPoints::positions
    pub fn tangents(&self) -> Result<Vec<Vector3>> {
        self.order
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                self.tangents
                    .get(id)
                    .copied()
                    .ok_or(CurveError::MissingTangent { index })
            })
            .collect()
    }

    pub fn iter(&self) -> ControlPointIter<'_> {
        ControlPointIter::new(self)
    }
}
