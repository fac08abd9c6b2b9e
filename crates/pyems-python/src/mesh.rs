//! Python bindings for Mesh

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyems_core::coordinate::Axis;
use pyems_core::mesh::{Mesh, MeshLines};

/// Python wrapper for Mesh
#[pyclass(name = "Mesh")]
#[derive(Clone)]
pub struct PyMesh {
    pub(crate) inner: Mesh,
}

pub(crate) fn axis_from_dim(dim: usize) -> PyResult<Axis> {
    Axis::from_index(dim).ok_or_else(|| {
        PyValueError::new_err(format!("Invalid dimension: {}. Use 0, 1 or 2", dim))
    })
}

#[pymethods]
impl PyMesh {
    /// Create a mesh from the lines along each axis
    ///
    /// Args:
    ///     x: Mesh lines along x
    ///     y: Mesh lines along y
    ///     z: Mesh lines along z
    #[new]
    pub fn new(x: Vec<f64>, y: Vec<f64>, z: Vec<f64>) -> PyResult<Self> {
        Mesh::new([x, y, z])
            .map(|inner| Self { inner })
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Sorted mesh lines along a dimension (0, 1, 2 for x, y, z)
    pub fn lines(&self, dim: usize) -> PyResult<Vec<f64>> {
        Ok(self.inner.lines(axis_from_dim(dim)?).to_vec())
    }

    /// Index and position of the mesh line nearest to `pos`
    ///
    /// Equidistant lines resolve to the lower one.
    pub fn nearest_mesh_line(&self, dim: usize, pos: f64) -> PyResult<(usize, f64)> {
        self.inner
            .nearest_mesh_line(axis_from_dim(dim)?, pos)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!(
            "Mesh({} x {} x {} lines)",
            self.inner.nlines(Axis::X),
            self.inner.nlines(Axis::Y),
            self.inner.nlines(Axis::Z)
        )
    }
}
