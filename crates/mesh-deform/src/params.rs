//! Deformation parameters.

use serde::{Deserialize, Serialize};

use crate::error::{DeformError, DeformResult};

/// Push magnitude, clamped to `[0.0, 10.0]`.
///
/// The host exposes inflation as a range-limited numeric attribute; this type
/// re-expresses that range as a validated value constructed at the adapter
/// boundary, so the pure operator never sees an out-of-range magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Inflation(f64);

impl Inflation {
    /// Minimum inflation.
    pub const MIN: f64 = 0.0;

    /// Maximum inflation.
    pub const MAX: f64 = 10.0;

    /// Create an inflation value, clamping to `[MIN, MAX]`.
    ///
    /// Fails with [`DeformError::InvalidParameter`] if `value` is not finite.
    pub fn new(value: f64) -> DeformResult<Self> {
        if !value.is_finite() {
            return Err(DeformError::InvalidParameter {
                name: "inflation",
                value,
            });
        }
        Ok(Self(value.clamp(Self::MIN, Self::MAX)))
    }

    /// The clamped magnitude.
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Inflation {
    fn default() -> Self {
        Self(0.0)
    }
}

impl TryFrom<f64> for Inflation {
    type Error = DeformError;

    fn try_from(value: f64) -> DeformResult<Self> {
        Self::new(value)
    }
}

impl From<Inflation> for f64 {
    fn from(inflation: Inflation) -> f64 {
        inflation.0
    }
}

/// Parameters for a single push evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeformParams {
    /// Push magnitude along the normal.
    pub inflation: Inflation,

    /// Blend weight supplied by the host's deformer stack, typically in
    /// `[0.0, 1.0]`. Treated as an opaque multiplier: out-of-range values
    /// are allowed, only finiteness is enforced at evaluation time.
    pub envelope: f64,
}

impl DeformParams {
    /// Create parameters from a raw inflation value and an envelope weight.
    pub fn new(inflation: f64, envelope: f64) -> DeformResult<Self> {
        Ok(Self {
            inflation: Inflation::new(inflation)?,
            envelope,
        })
    }

    /// The per-vertex displacement magnitude, `inflation * envelope`.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.inflation.value() * self.envelope
    }
}

impl Default for DeformParams {
    fn default() -> Self {
        Self {
            inflation: Inflation::default(),
            envelope: 1.0,
        }
    }
}
