//! Mesh module - simulation mesh lines
//!
//! The solver samples field quantities only on mesh lines. Probes consume
//! the mesh through the narrow [`MeshLines`] interface; [`Mesh`] is a plain
//! container for lines that have already been generated.

use thiserror::Error;

use crate::coordinate::Axis;

/// Mesh query errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error("mesh has no lines along the {0} axis")]
    EmptyAxis(Axis),

    #[error("non-finite mesh coordinate {value} on the {axis} axis")]
    NonFinite { axis: Axis, value: f64 },
}

/// Nearest-line lookup on a finalized mesh
pub trait MeshLines {
    /// Return `(index, coordinate)` of the mesh line on `axis` closest to
    /// `coordinate`.
    fn nearest_mesh_line(&self, axis: Axis, coordinate: f64) -> Result<(usize, f64), MeshError>;
}

/// Rectilinear, non-uniform mesh
///
/// Lines along each axis are kept sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    lines: [Vec<f64>; 3],
}

impl Mesh {
    /// Create a mesh from per-axis line sets (in any order)
    pub fn new(lines: [Vec<f64>; 3]) -> Result<Self, MeshError> {
        let mut mesh = Self::default();
        for (axis, values) in Axis::ALL.into_iter().zip(lines) {
            for value in values {
                mesh.add_line(axis, value)?;
            }
        }
        Ok(mesh)
    }

    /// Insert a line, keeping the axis sorted. Inserting an existing
    /// coordinate is a no-op.
    pub fn add_line(&mut self, axis: Axis, value: f64) -> Result<(), MeshError> {
        if !value.is_finite() {
            return Err(MeshError::NonFinite { axis, value });
        }
        let lines = &mut self.lines[axis.index()];
        // `==` so that -0.0 and 0.0 are the same line
        let pos = lines.partition_point(|&line| line < value);
        if lines.get(pos) != Some(&value) {
            lines.insert(pos, value);
        }
        Ok(())
    }

    /// Sorted lines along `axis`
    #[inline]
    pub fn lines(&self, axis: Axis) -> &[f64] {
        &self.lines[axis.index()]
    }

    /// Number of lines along `axis`
    #[inline]
    pub fn nlines(&self, axis: Axis) -> usize {
        self.lines[axis.index()].len()
    }
}

impl MeshLines for Mesh {
    /// Equidistant lines resolve to the lower index.
    fn nearest_mesh_line(&self, axis: Axis, coordinate: f64) -> Result<(usize, f64), MeshError> {
        let lines = self.lines(axis);
        if lines.is_empty() {
            return Err(MeshError::EmptyAxis(axis));
        }
        if !coordinate.is_finite() {
            return Err(MeshError::NonFinite {
                axis,
                value: coordinate,
            });
        }

        // First line at or above the coordinate
        let upper = lines.partition_point(|&line| line < coordinate);
        let index = if upper == 0 {
            0
        } else if upper == lines.len() {
            lines.len() - 1
        } else {
            let below = coordinate - lines[upper - 1];
            let above = lines[upper] - coordinate;
            if above < below {
                upper
            } else {
                upper - 1
            }
        };

        Ok((index, lines[index]))
    }
}
