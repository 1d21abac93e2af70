use super::sequence::ControlPoints;
use super::types::*;

/// Iterator over control points in curve order.
pub struct ControlPointIter<'a> {
    points: &'a ControlPoints,
    index: usize,
}

impl<'a> ControlPointIter<'a> {
    pub fn new(points: &'a ControlPoints) -> Self {
        Self { points, index: 0 }
    }
}

impl<'a> Iterator for ControlPointIter<'a> {
    type Item = (PointId, &'a ControlPoint);

    fn next(&mut self) -> Option<Self::Item> {
        // Skip handles whose point is gone; `validate` reports those.
        while let Some(&id) = self.points.order.get(self.index) {
            self.index += 1;
            if let Some(point) = self.points.points.get(id) {
                return Some((id, point));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.points.order.len() - self.index))
    }
}

#[cfg(test)]
mod tests {
    use curvelab_math::dvec3;

    use super::*;

    #[test]
    fn test_iterates_in_append_order() {
        let mut cps = ControlPoints::new();
        let ids: Vec<_> = (0..4)
            .map(|i| cps.append(dvec3(i as f64, 0.0, 0.0), dvec3(1.0, 1.0, 0.0)))
            .collect();

        let visited: Vec<_> = cps.iter().map(|(id, _)| id).collect();
        assert_eq!(visited, ids);

        let xs: Vec<_> = cps.iter().map(|(_, p)| p.position.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }
}
