//! Core snapshot data types.

use nalgebra::{Point3, Vector3};

use crate::error::{DeformError, DeformResult};

/// An immutable per-evaluation view of a mesh's deformable data.
///
/// Positions and normals are parallel, index-aligned buffers: `normals[i]`
/// is the vertex normal for `positions[i]`. Normals are expected to be
/// unit-length in the mesh's local transform space; the snapshot does not
/// renormalize them (see [`crate::validate::validate_snapshot`] for a
/// diagnostic check).
///
/// Coordinates are unit-agnostic.
#[derive(Debug, Clone)]
pub struct MeshSnapshot {
    /// 3D vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Per-vertex unit normals, index-aligned with `positions`.
    pub normals: Vec<Vector3<f64>>,
}

impl MeshSnapshot {
    /// Create a snapshot from parallel position and normal buffers.
    ///
    /// Fails with [`DeformError::DimensionMismatch`] if the buffers have
    /// different lengths.
    pub fn new(positions: Vec<Point3<f64>>, normals: Vec<Vector3<f64>>) -> DeformResult<Self> {
        if positions.len() != normals.len() {
            return Err(DeformError::DimensionMismatch {
                positions: positions.len(),
                normals: normals.len(),
            });
        }
        Ok(Self { positions, normals })
    }

    /// Number of vertices in the snapshot.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Check if the snapshot has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Compute the axis-aligned bounding box of the positions.
    /// Returns (min_corner, max_corner) or None if the snapshot is empty.
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        if self.positions.is_empty() {
            return None;
        }

        let mut min = self.positions[0];
        let mut max = self.positions[0];

        for p in &self.positions[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }

        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_snapshot_creation() {
        let snapshot = MeshSnapshot::new(
            vec![Point3::new(1.0, 2.0, 3.0)],
            vec![Vector3::new(0.0, 1.0, 0.0)],
        )
        .expect("aligned buffers");

        assert_eq!(snapshot.vertex_count(), 1);
        assert!(!snapshot.is_empty());
        assert_relative_eq!(snapshot.positions[0].x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(snapshot.normals[0].y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_mismatched_buffers_rejected() {
        let result = MeshSnapshot::new(
            vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
            vec![Vector3::new(0.0, 1.0, 0.0)],
        );

        match result {
            Err(DeformError::DimensionMismatch { positions, normals }) => {
                assert_eq!(positions, 2);
                assert_eq!(normals, 1);
            }
            other => panic!("expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_snapshot() {
        let snapshot = MeshSnapshot::new(Vec::new(), Vec::new()).expect("empty is aligned");
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.vertex_count(), 0);
        assert!(snapshot.bounds().is_none());
    }

    #[test]
    fn test_snapshot_bounds() {
        let snapshot = MeshSnapshot::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(10.0, 5.0, 3.0),
                Point3::new(-2.0, 8.0, 1.0),
            ],
            vec![Vector3::z(); 3],
        )
        .expect("aligned buffers");

        let (min, max) = snapshot.bounds().expect("non-empty snapshot");
        assert_relative_eq!(min.x, -2.0, epsilon = 1e-10);
        assert_relative_eq!(min.y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(min.z, 0.0, epsilon = 1e-10);
        assert_relative_eq!(max.x, 10.0, epsilon = 1e-10);
        assert_relative_eq!(max.y, 8.0, epsilon = 1e-10);
        assert_relative_eq!(max.z, 3.0, epsilon = 1e-10);
    }
}
