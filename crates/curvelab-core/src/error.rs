use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    /// A curve-type selector outside the known families, e.g. a stale UI index.
    #[error("Unsupported curve type: {0}")]
    UnsupportedFamily(usize),

    #[error("Missing tangent for control point {index}")]
    MissingTangent { index: usize },

    #[error("Segments per curve must be at least 2, got {0}")]
    InvalidSegments(usize),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, CurveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CurveError::UnsupportedFamily(7).to_string(),
            "Unsupported curve type: 7"
        );
        assert_eq!(
            CurveError::MissingTangent { index: 2 }.to_string(),
            "Missing tangent for control point 2"
        );
        assert_eq!(
            CurveError::InvalidSegments(1).to_string(),
            "Segments per curve must be at least 2, got 1"
        );
    }
}
