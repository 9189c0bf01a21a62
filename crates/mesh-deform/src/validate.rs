//! Snapshot validation and reporting.
//!
//! Diagnostic only: the push operator never requires a report to run. Hosts
//! can validate a snapshot once at the adapter boundary to surface bad
//! normal buffers before an evaluation loop starts.

use nalgebra::Point3;
use tracing::{debug, warn};

use crate::types::MeshSnapshot;

/// Tolerance for the unit-length normal check.
const UNIT_NORMAL_EPSILON: f64 = 1e-6;

/// Validation report for a mesh snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotReport {
    /// Total vertex count.
    pub vertex_count: usize,

    /// Positions with a non-finite coordinate.
    pub non_finite_position_count: usize,

    /// Normals with a non-finite component.
    pub non_finite_normal_count: usize,

    /// Finite normals whose length deviates from 1 by more than the
    /// tolerance (zero-length normals from unreferenced vertices included).
    pub non_unit_normal_count: usize,

    /// Bounding box as (min_corner, max_corner).
    pub bounds: Option<(Point3<f64>, Point3<f64>)>,
}

impl SnapshotReport {
    /// Check that every position and normal is finite.
    pub fn is_well_formed(&self) -> bool {
        self.non_finite_position_count == 0 && self.non_finite_normal_count == 0
    }
}

impl std::fmt::Display for SnapshotReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Snapshot Report:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;

        if let Some((min, max)) = &self.bounds {
            writeln!(
                f,
                "  Bounds: [{:.1}, {:.1}, {:.1}] to [{:.1}, {:.1}, {:.1}]",
                min.x, min.y, min.z, max.x, max.y, max.z
            )?;
        }

        writeln!(
            f,
            "  Non-finite: {} positions, {} normals",
            self.non_finite_position_count, self.non_finite_normal_count
        )?;
        writeln!(f, "  Non-unit normals: {}", self.non_unit_normal_count)?;
        writeln!(
            f,
            "  Well-formed: {}",
            if self.is_well_formed() { "yes" } else { "NO" }
        )?;

        Ok(())
    }
}

/// Validate a snapshot and return a report.
pub fn validate_snapshot(snapshot: &MeshSnapshot) -> SnapshotReport {
    let non_finite_position_count = snapshot
        .positions
        .iter()
        .filter(|p| !(p.x.is_finite() && p.y.is_finite() && p.z.is_finite()))
        .count();

    let non_finite_normal_count = snapshot
        .normals
        .iter()
        .filter(|n| !(n.x.is_finite() && n.y.is_finite() && n.z.is_finite()))
        .count();

    let non_unit_normal_count = snapshot
        .normals
        .iter()
        .filter(|n| n.x.is_finite() && n.y.is_finite() && n.z.is_finite())
        .filter(|n| (n.norm() - 1.0).abs() > UNIT_NORMAL_EPSILON)
        .count();

    let report = SnapshotReport {
        vertex_count: snapshot.vertex_count(),
        non_finite_position_count,
        non_finite_normal_count,
        non_unit_normal_count,
        bounds: snapshot.bounds(),
    };

    if !report.is_well_formed() {
        warn!(
            "Snapshot has non-finite data: {} positions, {} normals",
            report.non_finite_position_count, report.non_finite_normal_count
        );
    }

    if report.non_unit_normal_count > 0 {
        warn!(
            "Snapshot has {} non-unit normals; push displacement will not match inflation",
            report.non_unit_normal_count
        );
    }

    debug!("{}", report);

    report
}
