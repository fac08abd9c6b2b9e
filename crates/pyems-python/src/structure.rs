//! Python bindings for the geometry kernel

use pyo3::prelude::*;
use pyems_core::geometry::ContinuousStructure;

/// Python wrapper for ContinuousStructure
#[pyclass(name = "ContinuousStructure")]
#[derive(Default)]
pub struct PyContinuousStructure {
    pub(crate) inner: ContinuousStructure,
}

#[pymethods]
impl PyContinuousStructure {
    #[new]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered probes
    #[getter]
    pub fn nprobes(&self) -> usize {
        self.inner.nprobes()
    }

    /// Names of registered probes in registration order
    pub fn probe_names(&self) -> Vec<String> {
        self.inner.probes().map(|p| p.name.clone()).collect()
    }

    /// Get the first box of a probe as ([start], [stop]), or None
    ///
    /// Args:
    ///     name: Probe name
    pub fn probe_box(&self, name: &str) -> Option<(Vec<f64>, Vec<f64>)> {
        let (_, prop) = self.inner.find_probe(name)?;
        let primitive = self.inner.primitive(*prop.boxes.first()?).ok()?;
        Some((primitive.start.to_vec(), primitive.stop.to_vec()))
    }

    fn __repr__(&self) -> String {
        format!("ContinuousStructure({} probes)", self.nprobes())
    }
}
