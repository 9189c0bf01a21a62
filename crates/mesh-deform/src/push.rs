//! The normal-push operator.

use nalgebra::Point3;
use tracing::debug;

use crate::error::{DeformError, DeformResult};
use crate::params::DeformParams;
use crate::types::MeshSnapshot;

/// Push every vertex outward along its normal.
///
/// Each output position is `positions[i] + normals[i] * inflation * envelope`.
/// The input snapshot is untouched; the result is a freshly allocated buffer
/// with the same length and index order. Identical inputs always produce
/// bit-identical outputs.
///
/// When the combined scale is zero (inflation or envelope is zero) the result
/// is an exact copy of the input positions.
///
/// Fails with [`DeformError::InvalidParameter`] if the envelope or the
/// combined scale is not finite, or [`DeformError::DimensionMismatch`] if the
/// snapshot's buffers have drifted out of alignment. No partial result is
/// ever produced.
pub fn push_along_normals(
    snapshot: &MeshSnapshot,
    params: &DeformParams,
) -> DeformResult<Vec<Point3<f64>>> {
    if !params.envelope.is_finite() {
        return Err(DeformError::InvalidParameter {
            name: "envelope",
            value: params.envelope,
        });
    }

    // Snapshot construction guarantees alignment; re-check in case the
    // buffers were modified through the public fields.
    if snapshot.positions.len() != snapshot.normals.len() {
        return Err(DeformError::DimensionMismatch {
            positions: snapshot.positions.len(),
            normals: snapshot.normals.len(),
        });
    }

    let scale = params.scale();

    // A finite envelope can still overflow the product (e.g. 1e308 * 10).
    if !scale.is_finite() {
        return Err(DeformError::InvalidParameter {
            name: "scale",
            value: scale,
        });
    }

    // Zero scale must reproduce the input exactly. `p + n * 0.0` flips the
    // sign bit of -0.0 coordinates, so copy instead of computing.
    if scale == 0.0 {
        debug!(
            "Push with zero scale: returning {} positions unchanged",
            snapshot.vertex_count()
        );
        return Ok(snapshot.positions.clone());
    }

    let output: Vec<Point3<f64>> = snapshot
        .positions
        .iter()
        .zip(&snapshot.normals)
        .map(|(position, normal)| position + normal * scale)
        .collect();

    debug!(
        "Pushed {} vertices along normals (scale = {:.4})",
        output.len(),
        scale
    );

    Ok(output)
}
