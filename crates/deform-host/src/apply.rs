//! Batch application across a selection of targets.
//!
//! Mirrors the workflow of attaching the deformer to every mesh in a
//! selection: each target is evaluated in order with the same inflation,
//! using its own envelope.

use tracing::{info, warn};

use mesh_deform::Inflation;

use crate::adapter::{evaluate, DeformTarget};
use crate::error::{HostError, HostResult};

/// Statistics from a batch application.
#[derive(Debug, Clone, Copy)]
pub struct ApplyStats {
    /// Number of targets deformed.
    pub target_count: usize,

    /// Total vertices deformed across all targets.
    pub total_vertex_count: usize,
}

/// Evaluate the push deformer on every target in the selection.
///
/// Targets are processed in order; the first failure aborts the batch and
/// carries the failing target's name. An empty selection fails with
/// [`HostError::NoTargets`].
pub fn apply_to_all(
    targets: &mut [&mut dyn DeformTarget],
    inflation: Inflation,
) -> HostResult<ApplyStats> {
    if targets.is_empty() {
        warn!("No deform targets supplied");
        return Err(HostError::NoTargets);
    }

    let mut total_vertex_count = 0;

    for target in targets.iter_mut() {
        let stats = evaluate(&mut **target, inflation)?;
        total_vertex_count += stats.vertex_count;
    }

    info!(
        "Applied push to {} targets ({} vertices total)",
        targets.len(),
        total_vertex_count
    );

    Ok(ApplyStats {
        target_count: targets.len(),
        total_vertex_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::adapter::tests::MockTarget;

    #[test]
    fn test_apply_to_all() {
        let mut a = MockTarget::flat_quad("a");
        let mut b = MockTarget::flat_quad("b");
        b.envelope = 0.5;
        let inflation = Inflation::new(2.0).expect("finite value");

        let mut targets: Vec<&mut dyn DeformTarget> = vec![&mut a, &mut b];
        let stats = apply_to_all(&mut targets, inflation).expect("batch succeeds");

        assert_eq!(stats.target_count, 2);
        assert_eq!(stats.total_vertex_count, 8);
        assert_relative_eq!(a.positions[0].z, 2.0, epsilon = 1e-10);
        assert_relative_eq!(b.positions[0].z, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_apply_to_empty_selection_fails() {
        let mut targets: Vec<&mut dyn DeformTarget> = Vec::new();
        let inflation = Inflation::new(1.0).expect("finite value");

        match apply_to_all(&mut targets, inflation) {
            Err(HostError::NoTargets) => {}
            other => panic!("expected NoTargets, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_aborts_on_first_failure() {
        let mut a = MockTarget::flat_quad("a");
        let mut broken = MockTarget::flat_quad("broken");
        broken.normals.pop();
        let mut c = MockTarget::flat_quad("c");
        let before_c = c.positions.clone();
        let inflation = Inflation::new(1.0).expect("finite value");

        let mut targets: Vec<&mut dyn DeformTarget> = vec![&mut a, &mut broken, &mut c];
        match apply_to_all(&mut targets, inflation) {
            Err(HostError::TargetFailed { name, .. }) => assert_eq!(name, "broken"),
            other => panic!("expected TargetFailed, got {:?}", other),
        }

        // Targets after the failure are untouched.
        assert_eq!(c.positions, before_c);
        // The target before the failure was already deformed.
        assert_relative_eq!(a.positions[0].z, 1.0, epsilon = 1e-10);
    }
}
