//! Coordinate module - axes, points and axis-aligned boxes

use std::fmt;

/// A 3D coordinate `[x, y, z]` in drawing units
pub type Coordinate3 = [f64; 3];

/// Cartesian axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in index order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Index of the axis in a `Coordinate3` (0, 1, 2 for x, y, z)
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Axis from its index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Axis-aligned box spanned by two corners
///
/// The corners are not reordered: `start` may be larger than `stop` on any
/// axis, matching how the geometry kernel stores primitives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3 {
    pub start: Coordinate3,
    pub stop: Coordinate3,
}

impl Box3 {
    pub fn new(start: Coordinate3, stop: Coordinate3) -> Self {
        Self { start, stop }
    }

    /// True when the box has zero extent along `axis`.
    ///
    /// Uses exact float equality. Corners that are conceptually equal but
    /// were computed along different floating-point paths are reported as
    /// non-degenerate.
    #[inline]
    pub fn is_degenerate(&self, axis: Axis) -> bool {
        let i = axis.index();
        self.start[i] == self.stop[i]
    }

    /// Axes along which the box has zero extent, in index order
    pub fn degenerate_axes(&self) -> Vec<Axis> {
        Axis::ALL
            .into_iter()
            .filter(|&axis| self.is_degenerate(axis))
            .collect()
    }

    /// Signed extent `stop - start` along `axis`
    #[inline]
    pub fn extent(&self, axis: Axis) -> f64 {
        let i = axis.index();
        self.stop[i] - self.start[i]
    }
}
