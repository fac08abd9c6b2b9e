//! Geometry kernel module
//!
//! Probes register themselves with a geometry kernel: a named probe
//! property, its weighting and orientation, and the box primitive that
//! locates it. The solver later reads these primitives back.
//!
//! [`GeometryKernel`] is the narrow interface probes use;
//! [`ContinuousStructure`] is an in-memory implementation.

mod structure;
mod transform;

pub use structure::{BoxPrimitive, ContinuousStructure, ProbeProperty};
pub use transform::{apply_all, parse_transform, TransformOp};

use thiserror::Error;

use crate::coordinate::{Axis, Coordinate3};
use crate::probe::ProbeKind;

/// Geometry kernel errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    #[error("a property named '{0}' already exists")]
    DuplicateName(String),

    #[error("unknown probe handle {0:?}")]
    UnknownProbe(ProbeHandle),

    #[error("unknown box handle {0:?}")]
    UnknownBox(BoxHandle),

    #[error("invalid transform: {0}")]
    InvalidTransform(String),

    #[error("invalid weighting {0}")]
    InvalidWeighting(f64),
}

/// Reference to a probe property held by a kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProbeHandle(pub usize);

/// Reference to a box primitive held by a kernel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxHandle(pub usize);

/// Spatial weighting function of a mode-matching probe
///
/// One expression per field component, in terms of the kernel's
/// coordinate variables (e.g. `"sin(pi*y/a)"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeFunction(pub [String; 3]);

impl ModeFunction {
    pub fn new(x: impl Into<String>, y: impl Into<String>, z: impl Into<String>) -> Self {
        Self([x.into(), y.into(), z.into()])
    }

    #[inline]
    pub fn components(&self) -> &[String; 3] {
        &self.0
    }
}

/// Probe-facing operations of a geometry kernel
pub trait GeometryKernel {
    /// Create a named probe property of the given kind
    fn create_probe(&mut self, name: &str, kind: ProbeKind) -> Result<ProbeHandle, KernelError>;

    /// Set the multiplier applied to the recorded signal
    fn set_weighting(&mut self, probe: ProbeHandle, weight: f64) -> Result<(), KernelError>;

    /// Set the field orientation of the probe
    fn set_normal_direction(&mut self, probe: ProbeHandle, dir: Axis) -> Result<(), KernelError>;

    /// Set the mode weighting function of the probe
    fn set_mode_function(
        &mut self,
        probe: ProbeHandle,
        mode: &ModeFunction,
    ) -> Result<(), KernelError>;

    /// Add a box primitive to the probe
    fn add_box(
        &mut self,
        probe: ProbeHandle,
        start: Coordinate3,
        stop: Coordinate3,
    ) -> Result<BoxHandle, KernelError>;

    /// Append transform operations to a box, applied in order
    fn add_transform(&mut self, primitive: BoxHandle, ops: &[TransformOp])
        -> Result<(), KernelError>;

    fn box_start(&self, primitive: BoxHandle) -> Result<Coordinate3, KernelError>;

    fn box_stop(&self, primitive: BoxHandle) -> Result<Coordinate3, KernelError>;

    fn set_box_start(&mut self, primitive: BoxHandle, start: Coordinate3)
        -> Result<(), KernelError>;

    fn set_box_stop(&mut self, primitive: BoxHandle, stop: Coordinate3) -> Result<(), KernelError>;
}
