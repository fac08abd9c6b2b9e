//! Probe module - mesh-aligned measurement probes
//!
//! A probe is built in two phases. [`ProbeBuilder`] produces an immutable
//! [`ProbeDescriptor`] holding a unique name drawn from a [`ProbeCounter`];
//! [`ProbeDescriptor::register`] then records it with a geometry kernel and
//! returns the live [`Probe`], which can be snapped to the mesh and read
//! back after the solver has run.

mod core;
mod descriptor;
mod identity;
mod kind;

pub use self::core::{Probe, ProbeData, ProbeSeries};
pub use descriptor::{ProbeBuilder, ProbeDescriptor};
pub use identity::ProbeCounter;
pub use kind::ProbeKind;

use thiserror::Error;

use crate::geometry::KernelError;
use crate::mesh::MeshError;
use crate::signal::SignalError;

/// Probe errors
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("invalid probe type {0}")]
    InvalidKind(i32),

    #[error("must call read() before retrieving data")]
    NotRead,

    #[error(transparent)]
    Kernel(#[from] KernelError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Signal(#[from] SignalError),

    #[error("signal reader returned {got} series for 1 probe")]
    MissingSeries { got: usize },

    #[error("{values} frequency-domain values for {nfreq} frequencies")]
    FrequencyShape { nfreq: usize, values: usize },
}
