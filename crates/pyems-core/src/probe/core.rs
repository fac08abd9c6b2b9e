//! Registered probes: mesh snapping and data retrieval

use std::path::Path;

use ndarray::{Array1, Array2, Axis as ArrayAxis};
use num_complex::Complex64;
use tracing::debug;

use super::{ProbeDescriptor, ProbeError, ProbeKind};
use crate::coordinate::{Axis, Box3};
use crate::frequency::Frequency;
use crate::geometry::{BoxHandle, GeometryKernel, ProbeHandle};
use crate::mesh::MeshLines;
use crate::signal::{SignalError, SignalReader, SignalType, UiData};

/// Signals recorded by a probe during one solver run
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSeries {
    /// Frequencies the spectrum was evaluated at
    pub frequency: Frequency,
    /// Time axis of the recorded samples
    pub time: Array1<f64>,
    /// Recorded time-domain values
    pub values: Array1<f64>,
    /// Spectrum, one value per frequency
    pub freq_values: Array1<Complex64>,
}

/// Read state of a probe
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ProbeData {
    #[default]
    Unread,
    Read(ProbeSeries),
}

/// A probe registered with a geometry kernel
#[derive(Debug, Clone)]
pub struct Probe {
    descriptor: ProbeDescriptor,
    probe: ProbeHandle,
    primitive: BoxHandle,
    data: ProbeData,
}

impl Probe {
    pub(super) fn new(descriptor: ProbeDescriptor, probe: ProbeHandle, primitive: BoxHandle) -> Self {
        Self {
            descriptor,
            probe,
            primitive,
            data: ProbeData::Unread,
        }
    }

    /// Unique probe name, also the name of its solver dump
    #[inline]
    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    #[inline]
    pub fn kind(&self) -> ProbeKind {
        self.descriptor.kind()
    }

    #[inline]
    pub fn descriptor(&self) -> &ProbeDescriptor {
        &self.descriptor
    }

    /// Region as constructed; snapping only moves the kernel's box
    #[inline]
    pub fn region(&self) -> &Box3 {
        self.descriptor.region()
    }

    #[inline]
    pub fn probe_handle(&self) -> ProbeHandle {
        self.probe
    }

    #[inline]
    pub fn box_handle(&self) -> BoxHandle {
        self.primitive
    }

    #[inline]
    pub fn data(&self) -> &ProbeData {
        &self.data
    }

    /// Recorded series, if `read` has succeeded
    pub fn series(&self) -> Option<&ProbeSeries> {
        match &self.data {
            ProbeData::Read(series) => Some(series),
            ProbeData::Unread => None,
        }
    }

    #[inline]
    pub fn is_read(&self) -> bool {
        matches!(self.data, ProbeData::Read(_))
    }

    /// Align the probe with the mesh
    ///
    /// Only axes along which the probe has zero size are moved: both box
    /// corners are placed on the mesh line nearest to the start coordinate.
    /// Must be called after the mesh is final and before the solver runs,
    /// otherwise a zero-thickness probe may record nothing.
    pub fn snap_to_mesh<K, M>(&self, kernel: &mut K, mesh: &M) -> Result<(), ProbeError>
    where
        K: GeometryKernel + ?Sized,
        M: MeshLines + ?Sized,
    {
        for axis in Axis::ALL {
            self.snap_axis(kernel, mesh, axis)?;
        }
        Ok(())
    }

    fn snap_axis<K, M>(&self, kernel: &mut K, mesh: &M, axis: Axis) -> Result<(), ProbeError>
    where
        K: GeometryKernel + ?Sized,
        M: MeshLines + ?Sized,
    {
        let region = self.descriptor.region();
        if !region.is_degenerate(axis) {
            return Ok(());
        }

        let i = axis.index();
        let mut start = kernel.box_start(self.primitive)?;
        let mut stop = kernel.box_stop(self.primitive)?;
        let (line, pos) = mesh.nearest_mesh_line(axis, start[i])?;

        debug!(
            probe = self.name(),
            %axis,
            from = start[i],
            to = pos,
            line,
            "probe snapped to mesh"
        );
        start[i] = pos;
        stop[i] = pos;
        kernel.set_box_start(self.primitive, start)?;
        kernel.set_box_stop(self.primitive, stop)?;
        Ok(())
    }

    /// Read the signals recorded for this probe
    ///
    /// `freq` must match the frequencies of interest for the run; it is
    /// stored as given. Reading again replaces the stored series.
    pub fn read<R>(
        &mut self,
        reader: &R,
        sim_dir: impl AsRef<Path>,
        freq: &[f64],
        signal_type: SignalType,
    ) -> Result<(), ProbeError>
    where
        R: SignalReader + ?Sized,
    {
        let data = reader.read_ui_data(&[self.name()], sim_dir.as_ref(), freq, signal_type)?;

        // Every field must hold exactly one entry, the one for this probe
        let got = [data.time.len(), data.values.len(), data.freq_values.len()]
            .into_iter()
            .find(|&n| n != 1)
            .unwrap_or(1);
        let UiData {
            time,
            values,
            freq_values,
        } = data;
        let (Ok([time]), Ok([values]), Ok([freq_values])) = (
            <[Array1<f64>; 1]>::try_from(time),
            <[Array1<f64>; 1]>::try_from(values),
            <[Array1<Complex64>; 1]>::try_from(freq_values),
        ) else {
            return Err(ProbeError::MissingSeries { got });
        };

        if time.len() != values.len() {
            return Err(SignalError::LengthMismatch {
                time: time.len(),
                values: values.len(),
            }
            .into());
        }
        if freq_values.len() != freq.len() {
            return Err(ProbeError::FrequencyShape {
                nfreq: freq.len(),
                values: freq_values.len(),
            });
        }

        self.data = ProbeData::Read(ProbeSeries {
            frequency: Frequency::from_hz(freq.to_vec()),
            time,
            values,
            freq_values,
        });
        Ok(())
    }

    /// Frequency data as a `2 x nfreq` table
    ///
    /// Row 0 holds the frequencies (as real values), row 1 the spectrum,
    /// in the order the frequencies were given to `read`.
    pub fn frequency_data(&self) -> Result<Array2<Complex64>, ProbeError> {
        let series = self.series().ok_or(ProbeError::NotRead)?;
        let freq: Array1<Complex64> = series
            .frequency
            .f()
            .iter()
            .map(|&f| Complex64::new(f, 0.0))
            .collect();

        let mut table = Array2::zeros((2, freq.len()));
        table.row_mut(0).assign(&freq);
        table.row_mut(1).assign(&series.freq_values);
        Ok(table)
    }

    /// Time data as an `nsamples x 2` table of `(time, value)` rows
    pub fn time_data(&self) -> Result<Array2<f64>, ProbeError> {
        let series = self.series().ok_or(ProbeError::NotRead)?;
        let table = ndarray::stack(
            ArrayAxis(1),
            &[series.time.view(), series.values.view()],
        )
        .map_err(|_| SignalError::LengthMismatch {
            time: series.time.len(),
            values: series.values.len(),
        })?;
        Ok(table)
    }
}
