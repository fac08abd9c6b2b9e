//! Frequency module - the frequency points a probe spectrum is evaluated at
//!
//! Probe spectra are computed at an explicit, caller-chosen list of
//! frequencies in Hz. The list is kept in the order it was given.

/// A list of frequency points in Hz
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frequency {
    f: Vec<f64>,
}

impl Frequency {
    /// Create points `start, start + step, ...` strictly below `stop`, in Hz
    ///
    /// A non-positive step or `stop <= start` gives an empty list.
    ///
    /// # Example
    /// ```
    /// use pyems_core::frequency::Frequency;
    /// let freq = Frequency::arange(4e9, 18e9, 10e6);
    /// assert_eq!(freq.npoints(), 1400);
    /// ```
    pub fn arange(start: f64, stop: f64, step: f64) -> Self {
        let f = if step > 0.0 && stop > start {
            let n = ((stop - start) / step).ceil() as usize;
            (0..n).map(|i| start + i as f64 * step).collect()
        } else {
            Vec::new()
        };
        Self { f }
    }

    /// Wrap a frequency vector given in Hz
    pub fn from_hz(f: Vec<f64>) -> Self {
        Self { f }
    }

    /// Get frequency vector in Hz
    #[inline]
    pub fn f(&self) -> &[f64] {
        &self.f
    }

    /// Get the number of frequency points
    #[inline]
    pub fn npoints(&self) -> usize {
        self.f.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.f.is_empty()
    }

    /// First frequency in Hz
    #[inline]
    pub fn start(&self) -> f64 {
        *self.f.first().unwrap_or(&0.0)
    }

    /// Last frequency in Hz
    #[inline]
    pub fn stop(&self) -> f64 {
        *self.f.last().unwrap_or(&0.0)
    }
}
