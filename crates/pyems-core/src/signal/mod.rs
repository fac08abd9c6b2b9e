//! Signal module - reads recorded probe signals after a solver run
//!
//! The solver writes one plain-text dump per probe into the simulation
//! directory. A [`SignalReader`] turns those dumps into time series and
//! evaluates their spectrum at the requested frequencies.

mod dft;
mod reader;

pub use dft::dft_time2freq;
pub use reader::{parse_probe_dump, ProbeFileReader, ReaderConfig};

use std::fmt;
use std::path::Path;

use ndarray::Array1;
use num_complex::Complex64;
use thiserror::Error;

/// Signal reading errors
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("IO error reading '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in '{name}' at line {line}: {message}")]
    Parse {
        name: String,
        line: usize,
        message: String,
    },

    #[error("no samples recorded in '{0}'")]
    Empty(String),

    #[error("time axis has {time} samples but values have {values}")]
    LengthMismatch { time: usize, values: usize },

    #[error("unknown signal type '{0}': expected 'pulse' or 'periodic'")]
    InvalidSignalType(String),

    #[error("frequency list is empty")]
    NoFrequencies,

    #[error("pulse signals need at least 2 samples, got {0}")]
    TooFewSamples(usize),
}

/// Excitation class, selects the DFT normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignalType {
    /// Transient excitation; spectrum scaled by the time step
    #[default]
    Pulse,
    /// Steady-state excitation; spectrum scaled by 1/N
    Periodic,
}

impl SignalType {
    pub fn from_str(s: &str) -> Result<Self, SignalError> {
        match s.to_lowercase().as_str() {
            "pulse" => Ok(SignalType::Pulse),
            "periodic" => Ok(SignalType::Periodic),
            _ => Err(SignalError::InvalidSignalType(s.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignalType::Pulse => "pulse",
            SignalType::Periodic => "periodic",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Voltage/current data of one or more probes
///
/// Entry `k` of every field belongs to the `k`-th requested name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiData {
    /// Time axis per probe
    pub time: Vec<Array1<f64>>,
    /// Time-domain values per probe
    pub values: Vec<Array1<f64>>,
    /// Frequency-domain values per probe, one per requested frequency
    pub freq_values: Vec<Array1<Complex64>>,
}

impl UiData {
    /// Number of probes held
    #[inline]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// Source of recorded probe signals
pub trait SignalReader {
    /// Read the signals of `names` from `sim_dir` and evaluate them at `freq`
    fn read_ui_data(
        &self,
        names: &[&str],
        sim_dir: &Path,
        freq: &[f64],
        signal_type: SignalType,
    ) -> Result<UiData, SignalError>;
}
