//! In-memory geometry kernel

use std::collections::HashMap;

use tracing::trace;

use super::transform::apply_all;
use super::{BoxHandle, GeometryKernel, KernelError, ModeFunction, ProbeHandle, TransformOp};
use crate::constants::DEFAULT_WEIGHT;
use crate::coordinate::{Axis, Coordinate3};
use crate::probe::ProbeKind;

/// A probe property as registered with the kernel
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeProperty {
    pub name: String,
    pub kind: ProbeKind,
    pub weighting: f64,
    pub normal_direction: Option<Axis>,
    pub mode_function: Option<ModeFunction>,
    /// Primitives owned by this property, in insertion order
    pub boxes: Vec<BoxHandle>,
}

/// An axis-aligned box primitive with its transform stack
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPrimitive {
    pub owner: ProbeHandle,
    pub start: Coordinate3,
    pub stop: Coordinate3,
    pub transforms: Vec<TransformOp>,
}

impl BoxPrimitive {
    /// Both corners with the transform stack applied
    pub fn transformed_corners(&self) -> (Coordinate3, Coordinate3) {
        (
            apply_all(&self.transforms, self.start),
            apply_all(&self.transforms, self.stop),
        )
    }
}

/// Structure holding every property and primitive of a simulation model
#[derive(Debug, Clone, Default)]
pub struct ContinuousStructure {
    probes: Vec<ProbeProperty>,
    boxes: Vec<BoxPrimitive>,
    by_name: HashMap<String, ProbeHandle>,
}

impl ContinuousStructure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered probe properties
    #[inline]
    pub fn nprobes(&self) -> usize {
        self.probes.len()
    }

    pub fn probe(&self, handle: ProbeHandle) -> Result<&ProbeProperty, KernelError> {
        self.probes
            .get(handle.0)
            .ok_or(KernelError::UnknownProbe(handle))
    }

    /// Look up a probe property by name
    pub fn find_probe(&self, name: &str) -> Option<(ProbeHandle, &ProbeProperty)> {
        let handle = *self.by_name.get(name)?;
        self.probes.get(handle.0).map(|p| (handle, p))
    }

    pub fn primitive(&self, handle: BoxHandle) -> Result<&BoxPrimitive, KernelError> {
        self.boxes.get(handle.0).ok_or(KernelError::UnknownBox(handle))
    }

    /// Probe properties in registration order
    pub fn probes(&self) -> impl Iterator<Item = &ProbeProperty> {
        self.probes.iter()
    }

    fn probe_mut(&mut self, handle: ProbeHandle) -> Result<&mut ProbeProperty, KernelError> {
        self.probes
            .get_mut(handle.0)
            .ok_or(KernelError::UnknownProbe(handle))
    }

    fn primitive_mut(&mut self, handle: BoxHandle) -> Result<&mut BoxPrimitive, KernelError> {
        self.boxes
            .get_mut(handle.0)
            .ok_or(KernelError::UnknownBox(handle))
    }
}

impl GeometryKernel for ContinuousStructure {
    fn create_probe(&mut self, name: &str, kind: ProbeKind) -> Result<ProbeHandle, KernelError> {
        if self.by_name.contains_key(name) {
            return Err(KernelError::DuplicateName(name.to_string()));
        }
        let handle = ProbeHandle(self.probes.len());
        self.probes.push(ProbeProperty {
            name: name.to_string(),
            kind,
            weighting: DEFAULT_WEIGHT,
            normal_direction: None,
            mode_function: None,
            boxes: Vec::new(),
        });
        self.by_name.insert(name.to_string(), handle);
        trace!(name, ?kind, "probe property created");
        Ok(handle)
    }

    fn set_weighting(&mut self, probe: ProbeHandle, weight: f64) -> Result<(), KernelError> {
        if !weight.is_finite() {
            return Err(KernelError::InvalidWeighting(weight));
        }
        self.probe_mut(probe)?.weighting = weight;
        Ok(())
    }

    fn set_normal_direction(&mut self, probe: ProbeHandle, dir: Axis) -> Result<(), KernelError> {
        self.probe_mut(probe)?.normal_direction = Some(dir);
        Ok(())
    }

    fn set_mode_function(
        &mut self,
        probe: ProbeHandle,
        mode: &ModeFunction,
    ) -> Result<(), KernelError> {
        self.probe_mut(probe)?.mode_function = Some(mode.clone());
        Ok(())
    }

    fn add_box(
        &mut self,
        probe: ProbeHandle,
        start: Coordinate3,
        stop: Coordinate3,
    ) -> Result<BoxHandle, KernelError> {
        let handle = BoxHandle(self.boxes.len());
        self.probe_mut(probe)?.boxes.push(handle);
        self.boxes.push(BoxPrimitive {
            owner: probe,
            start,
            stop,
            transforms: Vec::new(),
        });
        Ok(handle)
    }

    fn add_transform(
        &mut self,
        primitive: BoxHandle,
        ops: &[TransformOp],
    ) -> Result<(), KernelError> {
        self.primitive_mut(primitive)?
            .transforms
            .extend_from_slice(ops);
        Ok(())
    }

    fn box_start(&self, primitive: BoxHandle) -> Result<Coordinate3, KernelError> {
        Ok(self.primitive(primitive)?.start)
    }

    fn box_stop(&self, primitive: BoxHandle) -> Result<Coordinate3, KernelError> {
        Ok(self.primitive(primitive)?.stop)
    }

    fn set_box_start(
        &mut self,
        primitive: BoxHandle,
        start: Coordinate3,
    ) -> Result<(), KernelError> {
        self.primitive_mut(primitive)?.start = start;
        Ok(())
    }

    fn set_box_stop(&mut self, primitive: BoxHandle, stop: Coordinate3) -> Result<(), KernelError> {
        self.primitive_mut(primitive)?.stop = stop;
        Ok(())
    }
}
