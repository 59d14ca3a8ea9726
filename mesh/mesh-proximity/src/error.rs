//! Error types for closest-point queries.

use thiserror::Error;

/// Result type alias for proximity operations.
pub type ProximityResult<T> = Result<T, ProximityError>;

/// Errors that can occur while building or evaluating a closest-point query.
#[derive(Debug, Error)]
pub enum ProximityError {
    /// The mesh provider yielded no vertices. Raised at construction.
    #[error("input mesh has no vertices")]
    EmptyMesh,

    /// A traversed face is neither a triangle nor a quadrilateral.
    /// Raised during query; the engine itself is not corrupted, but queries
    /// that reach the same face will keep failing.
    #[error("face has unsupported arity {arity}, expected 3 or 4")]
    UnsupportedArity {
        /// Number of vertices the offending face carries.
        arity: usize,
    },

    /// A traversed triangle has collinear vertices. Same semantics as
    /// [`ProximityError::UnsupportedArity`].
    #[error("triangle vertices are collinear")]
    DegenerateTriangle,
}

impl ProximityError {
    /// Create an empty mesh error.
    #[must_use]
    pub const fn empty_mesh() -> Self {
        Self::EmptyMesh
    }

    /// Create an unsupported arity error.
    #[must_use]
    pub const fn unsupported_arity(arity: usize) -> Self {
        Self::UnsupportedArity { arity }
    }

    /// Create a degenerate triangle error.
    #[must_use]
    pub const fn degenerate_triangle() -> Self {
        Self::DegenerateTriangle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProximityError::empty_mesh();
        assert!(format!("{err}").contains("no vertices"));

        let err = ProximityError::unsupported_arity(5);
        assert!(format!("{err}").contains('5'));

        let err = ProximityError::degenerate_triangle();
        assert!(format!("{err}").contains("collinear"));
    }
}
