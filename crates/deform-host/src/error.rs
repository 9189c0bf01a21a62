//! Error types for host-side evaluation.

use mesh_deform::DeformError;
use thiserror::Error;

/// Result type alias for host-side operations.
pub type HostResult<T> = Result<T, HostError>;

/// Errors that can occur while driving the deformer from a host.
#[derive(Debug, Error)]
pub enum HostError {
    /// Batch application was given no targets.
    #[error("no deform targets supplied")]
    NoTargets,

    /// Evaluating a single target failed.
    #[error("deform failed on target {name}: {source}")]
    TargetFailed {
        name: String,
        #[source]
        source: DeformError,
    },
}
