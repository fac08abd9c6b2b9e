//! Python bindings for pyems-core
//!
//! This module exposes the probe layer to Python via PyO3.
//!
//! ## Classes
//!
//! - `ContinuousStructure` - Geometry kernel holding probe properties
//! - `Mesh` - Simulation mesh lines
//! - `Probe` - Mesh-aligned measurement probe

use pyo3::prelude::*;

mod mesh;
mod probe;
mod structure;

pub use mesh::PyMesh;
pub use probe::PyProbe;
pub use structure::PyContinuousStructure;

/// pyems_python - probe modeling for FDTD simulations
///
/// Example:
///     >>> import pyems_python as pyems
///     >>> csx = pyems.ContinuousStructure()
///     >>> probe = pyems.Probe(csx, [[0, 0, 0], [0, 0, 1.6]], p_type=0)
///     >>> probe.snap_to_mesh(pyems.Mesh([0.0], [0.0], [0.0, 0.8, 1.6]))
///     >>> print(probe.name)
#[pymodule]
fn pyems_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyContinuousStructure>()?;
    m.add_class::<PyMesh>()?;
    m.add_class::<PyProbe>()?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
