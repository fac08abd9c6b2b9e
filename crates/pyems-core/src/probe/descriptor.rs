//! Probe descriptors and kernel registration

use tracing::debug;

use super::core::Probe;
use super::{ProbeCounter, ProbeError, ProbeKind};
use crate::constants::DEFAULT_WEIGHT;
use crate::coordinate::{Axis, Box3};
use crate::geometry::{GeometryKernel, ModeFunction, TransformOp};

/// Collects probe parameters before a name is allocated
#[derive(Debug, Clone)]
pub struct ProbeBuilder {
    kind: ProbeKind,
    region: Box3,
    weight: f64,
    normal_direction: Option<Axis>,
    mode_function: Option<ModeFunction>,
    transform: Vec<TransformOp>,
}

impl ProbeBuilder {
    pub fn new(kind: ProbeKind, region: Box3) -> Self {
        Self {
            kind,
            region,
            weight: DEFAULT_WEIGHT,
            normal_direction: None,
            mode_function: None,
            transform: Vec::new(),
        }
    }

    /// Start from a solver probe type code
    ///
    /// Fails with [`ProbeError::InvalidKind`] for unknown codes.
    pub fn from_code(code: i32, region: Box3) -> Result<Self, ProbeError> {
        Ok(Self::new(ProbeKind::from_code(code)?, region))
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn normal_direction(mut self, dir: Axis) -> Self {
        self.normal_direction = Some(dir);
        self
    }

    pub fn mode_function(mut self, mode: ModeFunction) -> Self {
        self.mode_function = Some(mode);
        self
    }

    /// Transform applied to the registered box, operations in order
    pub fn transform(mut self, ops: Vec<TransformOp>) -> Self {
        self.transform = ops;
        self
    }

    /// Allocate a name from `counter` and freeze the parameters
    pub fn build(self, counter: &ProbeCounter) -> ProbeDescriptor {
        ProbeDescriptor {
            name: counter.next_name(self.kind),
            kind: self.kind,
            region: self.region,
            weight: self.weight,
            normal_direction: self.normal_direction,
            mode_function: self.mode_function,
            transform: self.transform,
        }
    }
}

/// Immutable description of a named probe, not yet known to any kernel
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeDescriptor {
    name: String,
    kind: ProbeKind,
    region: Box3,
    weight: f64,
    normal_direction: Option<Axis>,
    mode_function: Option<ModeFunction>,
    transform: Vec<TransformOp>,
}

impl ProbeDescriptor {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn kind(&self) -> ProbeKind {
        self.kind
    }

    /// Region as requested, before any mesh snapping
    #[inline]
    pub fn region(&self) -> &Box3 {
        &self.region
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    #[inline]
    pub fn normal_direction(&self) -> Option<Axis> {
        self.normal_direction
    }

    #[inline]
    pub fn mode_function(&self) -> Option<&ModeFunction> {
        self.mode_function.as_ref()
    }

    #[inline]
    pub fn transform(&self) -> &[TransformOp] {
        &self.transform
    }

    /// Record the probe with `kernel`
    ///
    /// Creates the probe property, sets its weighting, then its normal
    /// direction and mode function when given, adds the box and finally
    /// applies the transform to the box. A failing step leaves the earlier
    /// ones in place; the kernel error is returned as is.
    pub fn register<K: GeometryKernel>(self, kernel: &mut K) -> Result<Probe, ProbeError> {
        let probe = kernel.create_probe(&self.name, self.kind)?;
        kernel.set_weighting(probe, self.weight)?;

        if let Some(dir) = self.normal_direction {
            kernel.set_normal_direction(probe, dir)?;
        }
        if let Some(mode) = &self.mode_function {
            kernel.set_mode_function(probe, mode)?;
        }

        let primitive = kernel.add_box(probe, self.region.start, self.region.stop)?;
        if !self.transform.is_empty() {
            kernel.add_transform(primitive, &self.transform)?;
        }

        debug!(
            name = %self.name,
            kind = %self.kind,
            start = ?self.region.start,
            stop = ?self.region.stop,
            "probe registered"
        );
        Ok(Probe::new(self, probe, primitive))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ContinuousStructure;

    fn plane() -> Box3 {
        Box3::new([-1.0, -1.0, 0.0], [1.0, 1.0, 0.0])
    }

    #[test]
    fn test_build_defaults() {
        let counter = ProbeCounter::new();
        let desc = ProbeBuilder::new(ProbeKind::Voltage, plane()).build(&counter);

        assert_eq!(desc.name(), "v_t_0");
        assert_eq!(desc.weight(), 1.0);
        assert_eq!(desc.normal_direction(), None);
        assert!(desc.mode_function().is_none());
        assert!(desc.transform().is_empty());
    }

    #[test]
    fn test_invalid_code_does_not_consume_ordinal() {
        let counter = ProbeCounter::new();
        assert!(matches!(
            ProbeBuilder::from_code(7, plane()),
            Err(ProbeError::InvalidKind(7))
        ));
        let desc = ProbeBuilder::from_code(1, plane()).unwrap().build(&counter);
        assert_eq!(desc.name(), "i_t_0");
    }

    #[test]
    fn test_register_sets_optional_fields_only_when_given() {
        let counter = ProbeCounter::new();
        let mut csx = ContinuousStructure::new();

        let bare = ProbeBuilder::new(ProbeKind::Current, plane())
            .build(&counter)
            .register(&mut csx)
            .unwrap();
        let full = ProbeBuilder::new(ProbeKind::WeightedVoltage, plane())
            .weight(-1.0)
            .normal_direction(Axis::Z)
            .mode_function(ModeFunction::new("0", "sin(pi*y)", "0"))
            .transform(vec![TransformOp::Translate([0.0, 0.0, 1.0])])
            .build(&counter)
            .register(&mut csx)
            .unwrap();

        let (_, bare_prop) = csx.find_probe(bare.name()).unwrap();
        assert_eq!(bare_prop.normal_direction, None);
        assert_eq!(bare_prop.mode_function, None);
        assert!(csx.primitive(bare.box_handle()).unwrap().transforms.is_empty());

        let (_, full_prop) = csx.find_probe(full.name()).unwrap();
        assert_eq!(full_prop.kind, ProbeKind::WeightedVoltage);
        assert_eq!(full_prop.weighting, -1.0);
        assert_eq!(full_prop.normal_direction, Some(Axis::Z));
        assert_eq!(
            full_prop.mode_function.as_ref().unwrap().components()[1],
            "sin(pi*y)"
        );
        let primitive = csx.primitive(full.box_handle()).unwrap();
        assert_eq!(primitive.start, [-1.0, -1.0, 0.0]);
        assert_eq!(
            primitive.transforms,
            vec![TransformOp::Translate([0.0, 0.0, 1.0])]
        );
    }

    #[test]
    fn test_failed_registration_keeps_earlier_steps() {
        let counter = ProbeCounter::new();
        let mut csx = ContinuousStructure::new();

        let err = ProbeBuilder::new(ProbeKind::Voltage, plane())
            .weight(f64::NAN)
            .build(&counter)
            .register(&mut csx)
            .unwrap_err();

        assert!(matches!(err, ProbeError::Kernel(_)));
        // The property was created before the weighting step failed
        assert!(csx.find_probe("v_t_0").is_some());
        assert_eq!(counter.peek(), 1);
    }
}
