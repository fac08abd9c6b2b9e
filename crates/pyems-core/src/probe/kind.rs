//! Probe kinds and their solver type codes

use std::fmt;

use super::ProbeError;

/// Quantity recorded by a probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeKind {
    /// Line integral of the electric field
    Voltage,
    /// Loop integral of the magnetic field
    Current,
    /// Electric field at a point or over a region
    ElectricField,
    /// Magnetic field at a point or over a region
    MagneticField,
    /// Voltage weighted by a mode function
    WeightedVoltage,
    /// Current weighted by a mode function
    WeightedCurrent,
}

impl ProbeKind {
    /// Map a solver probe type code to a kind
    pub fn from_code(code: i32) -> Result<Self, ProbeError> {
        match code {
            0 => Ok(ProbeKind::Voltage),
            1 => Ok(ProbeKind::Current),
            2 => Ok(ProbeKind::ElectricField),
            3 => Ok(ProbeKind::MagneticField),
            10 => Ok(ProbeKind::WeightedVoltage),
            11 => Ok(ProbeKind::WeightedCurrent),
            _ => Err(ProbeError::InvalidKind(code)),
        }
    }

    /// Solver probe type code
    pub fn code(&self) -> i32 {
        match self {
            ProbeKind::Voltage => 0,
            ProbeKind::Current => 1,
            ProbeKind::ElectricField => 2,
            ProbeKind::MagneticField => 3,
            ProbeKind::WeightedVoltage => 10,
            ProbeKind::WeightedCurrent => 11,
        }
    }

    /// Leading part of every probe name of this kind
    pub fn prefix(&self) -> &'static str {
        match self {
            ProbeKind::Voltage => "v",
            ProbeKind::Current => "i",
            ProbeKind::ElectricField => "e",
            ProbeKind::MagneticField => "h",
            ProbeKind::WeightedVoltage => "wv",
            ProbeKind::WeightedCurrent => "wi",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProbeKind::Voltage => "voltage",
            ProbeKind::Current => "current",
            ProbeKind::ElectricField => "electric-field",
            ProbeKind::MagneticField => "magnetic-field",
            ProbeKind::WeightedVoltage => "weighted-voltage",
            ProbeKind::WeightedCurrent => "weighted-current",
        };
        f.write_str(name)
    }
}
