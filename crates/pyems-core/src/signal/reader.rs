//! Probe dump reader
//!
//! Dumps are whitespace-separated columns, one sample per line. Lines
//! starting with `%` or `#` are comments:
//!
//! ```text
//! % time-domain voltage probe by openEMS
//! % t/s	voltage
//! 0.000000e+00	0.000000e+00
//! 1.234567e-12	3.141593e-04
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ndarray::Array1;
use tracing::{debug, trace};

use super::dft::dft_time2freq;
use super::{SignalError, SignalReader, SignalType, UiData};
use crate::constants::{PROBE_FILE_COMMENTS, TIME_COLUMN, VALUE_COLUMN};

/// Layout of a probe dump
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Comment markers at the start of a line
    pub comments: &'static [char],
    /// Column holding the time axis
    pub time_column: usize,
    /// Column holding the recorded value
    pub value_column: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            comments: PROBE_FILE_COMMENTS,
            time_column: TIME_COLUMN,
            value_column: VALUE_COLUMN,
        }
    }
}

/// Reads probe dumps named after each probe from the simulation directory
#[derive(Debug, Clone, Default)]
pub struct ProbeFileReader {
    config: ReaderConfig,
}

impl ProbeFileReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Read the time axis and values of one probe dump
    pub fn read_file(&self, path: &Path) -> Result<(Array1<f64>, Array1<f64>), SignalError> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|source| SignalError::Io {
            name: name.clone(),
            source,
        })?;
        parse_probe_dump(BufReader::new(file), &name, &self.config)
    }
}

impl SignalReader for ProbeFileReader {
    fn read_ui_data(
        &self,
        names: &[&str],
        sim_dir: &Path,
        freq: &[f64],
        signal_type: SignalType,
    ) -> Result<UiData, SignalError> {
        let mut data = UiData::default();

        for name in names {
            let (time, values) = self.read_file(&sim_dir.join(name))?;
            let f_val = dft_time2freq(time.view(), values.view(), freq, signal_type)?;
            debug!(
                probe = *name,
                samples = time.len(),
                nfreq = freq.len(),
                %signal_type,
                "probe signal read"
            );
            data.time.push(time);
            data.values.push(values);
            data.freq_values.push(f_val);
        }

        Ok(data)
    }
}

/// Parse a probe dump from a reader
///
/// `name` is only used in error messages.
pub fn parse_probe_dump<R: BufRead>(
    reader: R,
    name: &str,
    config: &ReaderConfig,
) -> Result<(Array1<f64>, Array1<f64>), SignalError> {
    let ncols = config.time_column.max(config.value_column) + 1;
    let mut time = Vec::new();
    let mut values = Vec::new();

    for (idx, line_result) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line_result.map_err(|source| SignalError::Io {
            name: name.to_string(),
            source,
        })?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with(config.comments) {
            continue;
        }

        let cols = trimmed
            .split_whitespace()
            .map(|tok| tok.parse::<f64>())
            .collect::<Result<Vec<f64>, _>>()
            .map_err(|e| SignalError::Parse {
                name: name.to_string(),
                line: line_no,
                message: e.to_string(),
            })?;

        if cols.len() < ncols {
            return Err(SignalError::Parse {
                name: name.to_string(),
                line: line_no,
                message: format!("expected at least {ncols} columns, found {}", cols.len()),
            });
        }

        time.push(cols[config.time_column]);
        values.push(cols[config.value_column]);
    }

    if time.is_empty() {
        return Err(SignalError::Empty(name.to_string()));
    }
    trace!(probe = name, samples = time.len(), "probe dump parsed");

    Ok((Array1::from_vec(time), Array1::from_vec(values)))
}
