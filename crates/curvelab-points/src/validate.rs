use std::collections::HashSet;

use curvelab_core::error::{CurveError, Result};
use curvelab_core::traits::Validate;

use super::sequence::ControlPoints;

impl Validate for ControlPoints {
    fn validate(&self) -> Result<()> {
        if self.order.len() != self.points.len() {
            return Err(CurveError::InvalidOperation(format!(
                "Sequence lists {} points but {} are stored",
                self.order.len(),
                self.points.len()
            )));
        }

        let mut seen = HashSet::with_capacity(self.order.len());
        for (index, &id) in self.order.iter().enumerate() {
            if !seen.insert(id) {
                return Err(CurveError::InvalidOperation(format!(
                    "Control point {:?} appears twice in the sequence (index {})",
                    id, index
                )));
            }
            if !self.points.contains_key(id) {
                return Err(CurveError::NotFound(format!(
                    "Control point {:?} at index {}",
                    id, index
                )));
            }
            if !self.tangents.contains_key(id) {
                return Err(CurveError::MissingTangent { index });
            }
        }

        if self.tangents.len() != self.points.len() {
            return Err(CurveError::InvalidOperation(format!(
                "{} tangents recorded for {} points",
                self.tangents.len(),
                self.points.len()
            )));
        }

        Ok(())
    }
}
