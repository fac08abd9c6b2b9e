//! Probe data retrieval tests
//!
//! Covers the Unread -> Read transition with a stub reader returning known
//! arrays, and the probe dump reader against files in tests/data.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use ndarray::array;
use num_complex::Complex64;
use pyems_core::coordinate::Box3;
use pyems_core::frequency::Frequency;
use pyems_core::geometry::ContinuousStructure;
use pyems_core::probe::{Probe, ProbeBuilder, ProbeCounter, ProbeError, ProbeKind};
use pyems_core::signal::{
    dft_time2freq, ProbeFileReader, SignalError, SignalReader, SignalType, UiData,
};
use std::f64::consts::PI;

const TEST_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data");

fn sim_dir() -> PathBuf {
    Path::new(TEST_DATA_DIR).join("sim")
}

/// Reader returning fixed arrays and recording what it was asked for
struct StubReader {
    data: UiData,
    calls: RefCell<Vec<(Vec<String>, PathBuf, Vec<f64>, SignalType)>>,
}

impl StubReader {
    fn new() -> Self {
        Self {
            data: UiData {
                time: vec![array![0.0, 1e-12, 2e-12, 3e-12]],
                values: vec![array![0.0, 0.5, 1.0, 0.5]],
                freq_values: vec![array![
                    Complex64::new(1.0, -1.0),
                    Complex64::new(0.5, 0.25),
                    Complex64::new(-0.1, 0.0),
                ]],
            },
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl SignalReader for StubReader {
    fn read_ui_data(
        &self,
        names: &[&str],
        sim_dir: &Path,
        freq: &[f64],
        signal_type: SignalType,
    ) -> Result<UiData, SignalError> {
        self.calls.borrow_mut().push((
            names.iter().map(|n| n.to_string()).collect(),
            sim_dir.to_path_buf(),
            freq.to_vec(),
            signal_type,
        ));
        Ok(self.data.clone())
    }
}

/// Reader that always fails
struct FailingReader;

impl SignalReader for FailingReader {
    fn read_ui_data(
        &self,
        _names: &[&str],
        _sim_dir: &Path,
        _freq: &[f64],
        _signal_type: SignalType,
    ) -> Result<UiData, SignalError> {
        Err(SignalError::NoFrequencies)
    }
}

fn voltage_probe(counter: &ProbeCounter, csx: &mut ContinuousStructure) -> Probe {
    ProbeBuilder::new(ProbeKind::Voltage, Box3::new([0.0, 0.0, 0.0], [0.0, 0.0, 1.6]))
        .build(counter)
        .register(csx)
        .unwrap()
}

#[test]
fn test_accessors_fail_before_read() {
    let mut csx = ContinuousStructure::new();
    let probe = voltage_probe(&ProbeCounter::new(), &mut csx);

    let freq_err = probe.frequency_data().unwrap_err();
    let time_err = probe.time_data().unwrap_err();
    assert!(matches!(freq_err, ProbeError::NotRead));
    assert!(matches!(time_err, ProbeError::NotRead));
    assert_eq!(
        freq_err.to_string(),
        "must call read() before retrieving data"
    );
}

#[test]
fn test_read_with_stub_reader() {
    let mut csx = ContinuousStructure::new();
    let mut probe = voltage_probe(&ProbeCounter::new(), &mut csx);
    let reader = StubReader::new();
    let freq = [1e9, 2e9, 3e9];

    probe
        .read(&reader, "/tmp/sim", &freq, SignalType::Pulse)
        .unwrap();

    let calls = reader.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, vec!["v_t_0".to_string()]);
    assert_eq!(calls[0].1, PathBuf::from("/tmp/sim"));
    assert_eq!(calls[0].2, freq.to_vec());
    assert_eq!(calls[0].3, SignalType::Pulse);

    let f_data = probe.frequency_data().unwrap();
    assert_eq!(f_data.shape(), &[2, 3]);
    let f_row: Vec<f64> = f_data.row(0).iter().map(|c| c.re).collect();
    assert_eq!(f_row, vec![1e9, 2e9, 3e9]);
    assert!(f_data.row(0).iter().all(|c| c.im == 0.0));
    assert_eq!(f_data.row(1).to_vec(), reader.data.freq_values[0].to_vec());

    let t_data = probe.time_data().unwrap();
    assert_eq!(t_data.shape(), &[4, 2]);
    assert_eq!(t_data.column(0).to_vec(), vec![0.0, 1e-12, 2e-12, 3e-12]);
    assert_eq!(t_data.column(1).to_vec(), vec![0.0, 0.5, 1.0, 0.5]);
    assert_eq!(t_data.row(2).to_vec(), vec![2e-12, 1.0]);
}

#[test]
fn test_frequency_order_kept_as_given() {
    let mut csx = ContinuousStructure::new();
    let mut probe = voltage_probe(&ProbeCounter::new(), &mut csx);
    let freq = [3e9, 1e9, 2e9];

    probe
        .read(&StubReader::new(), "/tmp/sim", &freq, SignalType::Periodic)
        .unwrap();

    let f_row: Vec<f64> = probe
        .frequency_data()
        .unwrap()
        .row(0)
        .iter()
        .map(|c| c.re)
        .collect();
    assert_eq!(f_row, freq.to_vec());
}

#[test]
fn test_failed_read_stays_unread() {
    let mut csx = ContinuousStructure::new();
    let mut probe = voltage_probe(&ProbeCounter::new(), &mut csx);

    let err = probe
        .read(&FailingReader, "/tmp/sim", &[1e9], SignalType::Pulse)
        .unwrap_err();

    assert!(matches!(err, ProbeError::Signal(SignalError::NoFrequencies)));
    assert!(!probe.is_read());
    assert!(matches!(probe.time_data(), Err(ProbeError::NotRead)));
}

#[test]
fn test_reader_shape_checked() {
    let mut csx = ContinuousStructure::new();
    let mut probe = voltage_probe(&ProbeCounter::new(), &mut csx);

    // Stub reports 3 spectral values; ask for 2 frequencies
    let err = probe
        .read(&StubReader::new(), "/tmp/sim", &[1e9, 2e9], SignalType::Pulse)
        .unwrap_err();
    assert!(matches!(
        err,
        ProbeError::FrequencyShape {
            nfreq: 2,
            values: 3
        }
    ));

    let empty = StubReader {
        data: UiData::default(),
        calls: RefCell::new(Vec::new()),
    };
    let err = probe
        .read(&empty, "/tmp/sim", &[1e9], SignalType::Pulse)
        .unwrap_err();
    assert!(matches!(err, ProbeError::MissingSeries { got: 0 }));
}

#[test]
fn test_reader_returning_extra_series_rejected() {
    let mut csx = ContinuousStructure::new();
    let mut probe = voltage_probe(&ProbeCounter::new(), &mut csx);
    let freq = [1e9, 2e9, 3e9];

    // Two complete series for a single requested name
    let mut doubled = StubReader::new();
    let one = doubled.data.clone();
    doubled.data.time.extend(one.time);
    doubled.data.values.extend(one.values);
    doubled.data.freq_values.extend(one.freq_values);

    let err = probe
        .read(&doubled, "/tmp/sim", &freq, SignalType::Pulse)
        .unwrap_err();
    assert!(matches!(err, ProbeError::MissingSeries { got: 2 }));
    assert!(!probe.is_read());
}

#[test]
fn test_reader_field_counts_must_agree() {
    let mut csx = ContinuousStructure::new();
    let mut probe = voltage_probe(&ProbeCounter::new(), &mut csx);
    let freq = [1e9, 2e9, 3e9];

    // Time series present, spectrum missing
    let mut no_spectrum = StubReader::new();
    no_spectrum.data.freq_values.clear();
    let err = probe
        .read(&no_spectrum, "/tmp/sim", &freq, SignalType::Pulse)
        .unwrap_err();
    assert!(matches!(err, ProbeError::MissingSeries { got: 0 }));

    // One time axis but two value series
    let mut extra_values = StubReader::new();
    let values = extra_values.data.values[0].clone();
    extra_values.data.values.push(values);
    let err = probe
        .read(&extra_values, "/tmp/sim", &freq, SignalType::Pulse)
        .unwrap_err();
    assert!(matches!(err, ProbeError::MissingSeries { got: 2 }));

    assert!(matches!(probe.frequency_data(), Err(ProbeError::NotRead)));

    // A well-formed reply still succeeds afterwards
    probe
        .read(&StubReader::new(), "/tmp/sim", &freq, SignalType::Pulse)
        .unwrap();
    assert!(probe.is_read());
}

#[test]
fn test_read_probe_dump_from_disk() {
    let mut csx = ContinuousStructure::new();
    let mut probe = voltage_probe(&ProbeCounter::new(), &mut csx);
    let freq = [1e9, 5e9, 10e9];

    probe
        .read(&ProbeFileReader::default(), sim_dir(), &freq, SignalType::Pulse)
        .unwrap();

    let series = probe.series().unwrap();
    assert_eq!(series.time.len(), 6);
    assert_eq!(series.values[2], 1.0);
    assert_eq!(series.frequency.f(), &freq);

    // Closed-form pulse DFT of the fixture samples
    let dt = 1e-11;
    for (k, &f) in freq.iter().enumerate() {
        let expected: Complex64 = series
            .time
            .iter()
            .zip(series.values.iter())
            .map(|(&t, &v)| v * Complex64::from_polar(1.0, -2.0 * PI * f * t))
            .sum::<Complex64>()
            * (2.0 * dt);
        assert_relative_eq!(series.freq_values[k].re, expected.re, epsilon = 1e-20);
        assert_relative_eq!(series.freq_values[k].im, expected.im, epsilon = 1e-20);
    }
}

#[test]
fn test_read_multiple_probes() {
    let reader = ProbeFileReader::default();
    let data = reader
        .read_ui_data(&["v_t_0", "i_t_1"], &sim_dir(), &[2e9], SignalType::Pulse)
        .unwrap();

    assert_eq!(data.len(), 2);
    assert_eq!(data.time[0].len(), 6);
    assert_eq!(data.time[1].len(), 4);
    assert_eq!(data.values[1][2], 2e-2);

    let expected = dft_time2freq(data.time[1].view(), data.values[1].view(), &[2e9], SignalType::Pulse)
        .unwrap();
    assert_eq!(data.freq_values[1], expected);
}

#[test]
fn test_dc_value_of_fixture() {
    let reader = ProbeFileReader::default();
    let data = reader
        .read_ui_data(&["v_t_0"], &sim_dir(), &[0.0], SignalType::Pulse)
        .unwrap();

    let sum: f64 = data.values[0].sum();
    assert_relative_eq!(data.freq_values[0][0].re, 2.0 * 1e-11 * sum, epsilon = 1e-22);
    assert_relative_eq!(sum, 1.4, epsilon = 1e-12);
}

#[test]
fn test_probe_without_dump_fails() {
    let counter = ProbeCounter::starting_at(7);
    let mut csx = ContinuousStructure::new();
    let mut probe = voltage_probe(&counter, &mut csx);

    let err = probe
        .read(&ProbeFileReader::default(), sim_dir(), &[1e9], SignalType::Pulse)
        .unwrap_err();
    assert!(matches!(err, ProbeError::Signal(SignalError::Io { .. })));
}

#[test]
fn test_read_over_frequency_sweep() {
    let mut csx = ContinuousStructure::new();
    let mut probe = voltage_probe(&ProbeCounter::new(), &mut csx);
    let sweep = Frequency::arange(1e9, 5e9, 1e9);

    probe
        .read(&ProbeFileReader::default(), sim_dir(), sweep.f(), SignalType::Periodic)
        .unwrap();

    let f_data = probe.frequency_data().unwrap();
    assert_eq!(f_data.shape(), &[2, 4]);
    assert_eq!(probe.series().unwrap().frequency, sweep);
}
