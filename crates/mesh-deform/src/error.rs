//! Error types for deform operations.

use thiserror::Error;

/// Result type alias for deform operations.
pub type DeformResult<T> = Result<T, DeformError>;

/// Errors that can occur during deform operations.
#[derive(Debug, Error)]
pub enum DeformError {
    /// Position and normal buffers have different lengths.
    #[error("position/normal buffer length mismatch: {positions} positions vs {normals} normals")]
    DimensionMismatch { positions: usize, normals: usize },

    /// A scalar parameter is not a finite number.
    #[error("invalid parameter {name}: {value} is not finite")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A face references a vertex index outside the position buffer.
    #[error("face {face} references vertex {index}, but only {vertex_count} vertices exist")]
    FaceIndexOutOfRange {
        face: usize,
        index: u32,
        vertex_count: usize,
    },
}
