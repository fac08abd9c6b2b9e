//! Discrete Fourier transform at arbitrary frequencies

use ndarray::{Array1, ArrayView1, Zip};
use num_complex::Complex64;
use std::f64::consts::PI;

use super::{SignalError, SignalType};

/// Evaluate the single-sided spectrum of `val(t)` at each frequency in `freq`
///
/// `F(f) = 2 * scale * sum_n val[n] * exp(-j*2*pi*f*t[n])`, where `scale`
/// is the time step `t[1] - t[0]` for pulse signals and `1/N` for periodic
/// ones. The time axis is assumed uniform.
pub fn dft_time2freq(
    t: ArrayView1<'_, f64>,
    val: ArrayView1<'_, f64>,
    freq: &[f64],
    signal_type: SignalType,
) -> Result<Array1<Complex64>, SignalError> {
    if t.len() != val.len() {
        return Err(SignalError::LengthMismatch {
            time: t.len(),
            values: val.len(),
        });
    }
    if freq.is_empty() {
        return Err(SignalError::NoFrequencies);
    }

    let scale = match signal_type {
        SignalType::Pulse => {
            if t.len() < 2 {
                return Err(SignalError::TooFewSamples(t.len()));
            }
            t[1] - t[0]
        }
        SignalType::Periodic => {
            if t.is_empty() {
                return Err(SignalError::TooFewSamples(0));
            }
            1.0 / t.len() as f64
        }
    };

    let f_val = freq
        .iter()
        .map(|&f| {
            let omega = -2.0 * PI * f;
            let mut acc = Complex64::new(0.0, 0.0);
            Zip::from(&t).and(&val).for_each(|&tn, &vn| {
                acc += Complex64::from_polar(vn, omega * tn);
            });
            2.0 * scale * acc
        })
        .collect();

    Ok(f_val)
}
