//! Python bindings for Probe

use std::path::PathBuf;

use num_complex::Complex64;
use numpy::{PyArray2, ToPyArray};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyems_core::coordinate::Box3;
use pyems_core::geometry::{parse_transform, ModeFunction};
use pyems_core::probe::{Probe, ProbeBuilder, ProbeCounter, ProbeError};
use pyems_core::signal::{ProbeFileReader, SignalError, SignalType};

use crate::mesh::{axis_from_dim, PyMesh};
use crate::structure::PyContinuousStructure;

/// Names are unique across every probe created in the interpreter
static PROBE_COUNTER: ProbeCounter = ProbeCounter::new();

fn to_py_err(err: ProbeError) -> PyErr {
    match &err {
        ProbeError::Signal(SignalError::Io { .. }) => PyIOError::new_err(err.to_string()),
        _ => PyValueError::new_err(err.to_string()),
    }
}

fn parse_box(corners: &[Vec<f64>]) -> PyResult<Box3> {
    let corner = |c: &Vec<f64>| -> PyResult<[f64; 3]> {
        <[f64; 3]>::try_from(c.as_slice()).map_err(|_| {
            PyValueError::new_err(format!("box corners need 3 coordinates, got {}", c.len()))
        })
    };
    match corners {
        [start, stop] => Ok(Box3::new(corner(start)?, corner(stop)?)),
        _ => Err(PyValueError::new_err(format!(
            "box needs 2 corners, got {}",
            corners.len()
        ))),
    }
}

/// Python wrapper for Probe
#[pyclass(name = "Probe")]
pub struct PyProbe {
    inner: Probe,
    csx: Py<PyContinuousStructure>,
}

#[pymethods]
impl PyProbe {
    /// Create a probe and register it with the structure
    ///
    /// Args:
    ///     csx: ContinuousStructure to register with
    ///     box: [[x0, y0, z0], [x1, y1, z1]] probe region
    ///     p_type: 0 voltage, 1 current, 2 E-field, 3 H-field,
    ///             10 weighted voltage, 11 weighted current
    ///     norm_dir: Normal direction (0, 1, 2 for x, y, z)
    ///     transform_args: Transform operations, e.g. ["RotateAxis", "z", "90"]
    ///     weight: Signal weighting
    ///     mode_function: Three mode function expressions
    #[new]
    #[pyo3(signature = (csx, r#box, p_type=0, norm_dir=None, transform_args=None, weight=1.0, mode_function=None))]
    pub fn new(
        csx: Bound<'_, PyContinuousStructure>,
        r#box: Vec<Vec<f64>>,
        p_type: i32,
        norm_dir: Option<usize>,
        transform_args: Option<Vec<String>>,
        weight: f64,
        mode_function: Option<Vec<String>>,
    ) -> PyResult<Self> {
        let mut builder = ProbeBuilder::from_code(p_type, parse_box(&r#box)?)
            .map_err(to_py_err)?
            .weight(weight);

        if let Some(dim) = norm_dir {
            builder = builder.normal_direction(axis_from_dim(dim)?);
        }
        if let Some(exprs) = mode_function {
            let [x, y, z] = <[String; 3]>::try_from(exprs).map_err(|v| {
                PyValueError::new_err(format!("mode_function needs 3 expressions, got {}", v.len()))
            })?;
            builder = builder.mode_function(ModeFunction::new(x, y, z));
        }
        if let Some(args) = transform_args {
            let ops = parse_transform(args.as_slice())
                .map_err(|e| PyValueError::new_err(e.to_string()))?;
            builder = builder.transform(ops);
        }

        let inner = {
            let mut structure = csx.borrow_mut();
            builder
                .build(&PROBE_COUNTER)
                .register(&mut structure.inner)
                .map_err(to_py_err)?
        };

        Ok(Self {
            inner,
            csx: csx.unbind(),
        })
    }

    /// Unique probe name
    #[getter]
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Solver probe type code
    #[getter]
    pub fn p_type(&self) -> i32 {
        self.inner.kind().code()
    }

    /// Align the probe with the mesh
    ///
    /// Must be called after the mesh is final for correct results.
    pub fn snap_to_mesh(&self, py: Python<'_>, mesh: PyRef<'_, PyMesh>) -> PyResult<()> {
        let mut structure = self.csx.borrow_mut(py);
        self.inner
            .snap_to_mesh(&mut structure.inner, &mesh.inner)
            .map_err(to_py_err)
    }

    /// Read the data recorded for this probe
    ///
    /// Args:
    ///     sim_dir: Simulation output directory
    ///     freq: Frequencies in Hz
    ///     signal_type: 'pulse' or 'periodic'
    #[pyo3(signature = (sim_dir, freq, signal_type="pulse"))]
    pub fn read(&mut self, sim_dir: PathBuf, freq: Vec<f64>, signal_type: &str) -> PyResult<()> {
        let signal_type = SignalType::from_str(signal_type)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        self.inner
            .read(&ProbeFileReader::default(), sim_dir, &freq, signal_type)
            .map_err(to_py_err)
    }

    /// Frequency data as a 2 x nfreq array: frequencies, values
    pub fn get_freq_data<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<Complex64>>> {
        let data = self.inner.frequency_data().map_err(to_py_err)?;
        Ok(data.to_pyarray(py))
    }

    /// Time data as an nsamples x 2 array of (time, value) rows
    pub fn get_time_data<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f64>>> {
        let data = self.inner.time_data().map_err(to_py_err)?;
        Ok(data.to_pyarray(py))
    }

    fn __repr__(&self) -> String {
        format!(
            "Probe('{}', {}, read={})",
            self.name(),
            self.inner.kind(),
            self.inner.is_read()
        )
    }
}
