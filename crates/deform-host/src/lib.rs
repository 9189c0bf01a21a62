//! Host-adapter boundary for the normal-push deformer.
//!
//! The core operator in `mesh-deform` is a pure function; this crate defines
//! how an embedding application drives it. The host implements
//! [`DeformTarget`] once per deformable mesh (position and normal buffers in,
//! deformed positions out, envelope supplied per evaluation), and its own
//! scheduler calls [`evaluate`] whenever the deformer needs to run. No
//! scheduling decisions are made here.

mod adapter;
mod apply;
mod error;

pub use adapter::{evaluate, DeformTarget, EvalStats};
pub use apply::{apply_to_all, ApplyStats};
pub use error::{HostError, HostResult};
