//! pyems-core: Probe and mesh modeling layer for an FDTD field solver
//!
//! Describes measurement probes, registers them with a geometry kernel,
//! aligns zero-thickness probes to the simulation mesh and reads the
//! recorded signals back after the solver has run.
//!
//! ## Modules
//!
//! - `coordinate` - Axes, 3D coordinates and axis-aligned boxes
//! - `mesh` - Mesh line sets and nearest-line queries
//! - `geometry` - Geometry kernel interface and in-memory structure
//! - `probe` - Probe identity, registration, snapping and data access
//! - `signal` - Solver probe file reader and time-to-frequency DFT
//! - `frequency` - Frequency band representation

pub mod constants;
pub mod coordinate;
pub mod frequency;
pub mod geometry;
pub mod mesh;
pub mod probe;
pub mod signal;

pub use coordinate::{Axis, Box3, Coordinate3};
pub use frequency::Frequency;
pub use geometry::{ContinuousStructure, GeometryKernel};
pub use mesh::{Mesh, MeshLines};
pub use probe::{Probe, ProbeBuilder, ProbeCounter, ProbeError, ProbeKind};
pub use signal::{ProbeFileReader, SignalReader, SignalType};
