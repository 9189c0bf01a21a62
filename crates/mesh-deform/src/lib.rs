//! Normal-push mesh deformation.
//!
//! This crate implements the pure core of a push deformer: given a mesh
//! snapshot (parallel vertex-position and vertex-normal buffers), an
//! inflation magnitude, and an envelope blend weight, it produces new vertex
//! positions offset along the normals:
//!
//! ```text
//! output[i] = positions[i] + normals[i] * inflation * envelope
//! ```
//!
//! The operator is stateless and deterministic: each call is a pure function
//! over its inputs, with no side effects and no partial results on error.
//! Host integration (attribute plumbing, evaluation scheduling, write-back)
//! lives in the `deform-host` crate.
//!
//! # Example
//!
//! ```
//! use mesh_deform::{DeformParams, MeshSnapshot, push_along_normals};
//! use nalgebra::{Point3, Vector3};
//!
//! let snapshot = MeshSnapshot::new(
//!     vec![Point3::new(0.0, 0.0, 0.0)],
//!     vec![Vector3::new(0.0, 1.0, 0.0)],
//! )?;
//! let params = DeformParams::new(2.0, 1.0)?;
//!
//! let pushed = push_along_normals(&snapshot, &params)?;
//! assert_eq!(pushed[0], Point3::new(0.0, 2.0, 0.0));
//! # Ok::<(), mesh_deform::DeformError>(())
//! ```

mod error;
mod types;

pub mod normals;
pub mod params;
pub mod push;
pub mod validate;

// Re-export core types at crate root
pub use error::{DeformError, DeformResult};
pub use types::MeshSnapshot;

// Re-export commonly used items
pub use normals::vertex_normals;
pub use params::{DeformParams, Inflation};
pub use push::push_along_normals;
pub use validate::{validate_snapshot, SnapshotReport};
