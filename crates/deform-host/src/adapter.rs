//! The host-facing adapter contract.
//!
//! The embedding application's evaluation scheduler decides when a deformer
//! runs; this module defines what the host must supply per evaluation call
//! and performs the snapshot / push / write-back round trip.

use nalgebra::{Point3, Vector3};
use tracing::{debug, info};

use mesh_deform::{push_along_normals, DeformParams, Inflation, MeshSnapshot};

use crate::error::{HostError, HostResult};

/// A deformable mesh as seen from the host.
///
/// Implemented once per mesh by the embedding application. Buffers are read
/// at the start of an evaluation and the result is written back through
/// [`write_positions`](DeformTarget::write_positions); the adapter keeps no
/// state between evaluations.
pub trait DeformTarget {
    /// Diagnostic label used in logs and errors.
    fn name(&self) -> &str;

    /// Current vertex position buffer.
    fn positions(&self) -> &[Point3<f64>];

    /// Per-vertex unit normals in the mesh's local transform space,
    /// index-aligned with the positions.
    fn vertex_normals(&self) -> &[Vector3<f64>];

    /// The host's current blend weight for this deformer, typically in
    /// `[0.0, 1.0]`.
    fn envelope(&self) -> f64;

    /// Write the deformed positions back into the host's geometry.
    fn write_positions(&mut self, positions: Vec<Point3<f64>>);
}

/// Statistics from a single evaluation.
#[derive(Debug, Clone, Copy)]
pub struct EvalStats {
    /// Number of vertices deformed.
    pub vertex_count: usize,

    /// The combined displacement scale, `inflation * envelope`.
    pub scale: f64,
}

/// Run one push evaluation against a target.
///
/// Snapshots the target's buffers, pushes every vertex along its normal by
/// `inflation * envelope`, and writes the result back. The envelope comes
/// from the target; the inflation is already range-clamped by construction.
pub fn evaluate(target: &mut dyn DeformTarget, inflation: Inflation) -> HostResult<EvalStats> {
    let name = target.name().to_owned();

    let snapshot = MeshSnapshot::new(
        target.positions().to_vec(),
        target.vertex_normals().to_vec(),
    )
    .map_err(|source| HostError::TargetFailed {
        name: name.clone(),
        source,
    })?;

    let params = DeformParams {
        inflation,
        envelope: target.envelope(),
    };

    debug!(
        "Evaluating push on {}: {} vertices, inflation = {:.3}, envelope = {:.3}",
        name,
        snapshot.vertex_count(),
        inflation.value(),
        params.envelope
    );

    let pushed =
        push_along_normals(&snapshot, &params).map_err(|source| HostError::TargetFailed {
            name: name.clone(),
            source,
        })?;

    let stats = EvalStats {
        vertex_count: pushed.len(),
        scale: params.scale(),
    };

    target.write_positions(pushed);

    info!(
        "Pushed {} ({} vertices, scale = {:.4})",
        name, stats.vertex_count, stats.scale
    );

    Ok(stats)
}
