//! Vertex normal computation for hosts that supply positions and faces only.

use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::error::{DeformError, DeformResult};

/// Compute per-vertex normals as the area-weighted average of adjacent face
/// normals.
///
/// Faces are triangles with counter-clockwise winding, indexing into
/// `positions`. The result is index-aligned with `positions` and suitable as
/// the normal buffer of a [`crate::MeshSnapshot`]. Vertices referenced by no
/// face (or only by degenerate faces) get the zero vector, so a push leaves
/// them in place.
///
/// Fails with [`DeformError::FaceIndexOutOfRange`] if any face references a
/// vertex outside the position buffer; no partial result is produced.
pub fn vertex_normals(
    positions: &[Point3<f64>],
    faces: &[[u32; 3]],
) -> DeformResult<Vec<Vector3<f64>>> {
    for (face_idx, face) in faces.iter().enumerate() {
        for &index in face {
            if index as usize >= positions.len() {
                return Err(DeformError::FaceIndexOutOfRange {
                    face: face_idx,
                    index,
                    vertex_count: positions.len(),
                });
            }
        }
    }

    let mut accum: Vec<Vector3<f64>> = vec![Vector3::zeros(); positions.len()];

    for face in faces {
        let v0 = positions[face[0] as usize];
        let v1 = positions[face[1] as usize];
        let v2 = positions[face[2] as usize];

        // Unnormalized cross product has length 2*area, giving area weighting.
        let weighted = (v1 - v0).cross(&(v2 - v0));

        accum[face[0] as usize] += weighted;
        accum[face[1] as usize] += weighted;
        accum[face[2] as usize] += weighted;
    }

    for normal in &mut accum {
        let len_sq = normal.norm_squared();
        if len_sq > f64::EPSILON {
            *normal /= len_sq.sqrt();
        } else {
            *normal = Vector3::zeros();
        }
    }

    debug!("Computed vertex normals for {} vertices", positions.len());

    Ok(accum)
}
