//! # Mesh Error Types

use thiserror::Error;

/// Structural problems found when validating a mesh.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The index list does not describe whole triangles.
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),

    /// An index points past the end of the vertex list.
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        /// Offending index value.
        index: u16,
        /// Position of the index in the index list.
        position: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// More vertices than a 16-bit index can address.
    #[error("{0} vertices cannot be addressed by 16-bit indices")]
    TooManyVertices(usize),
}

/// Result type for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
