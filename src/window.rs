//! Window coefficients applied to time-domain samples before the transform
//! to reduce spectral leakage.

use crate::common::FftError;
use crate::kernel::cos;
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex32;

/// Hann window of length `n`: `w[k] = 0.5 - 0.5·cos(2πk / (n-1))`.
///
/// A single-point window is `[1.0]`.
pub fn hann_window(n: usize) -> Vec<f32> {
    if n < 2 {
        return alloc::vec![1.0; n];
    }

    let denom = (n - 1) as f64;
    (0..n)
        .map(|k| (0.5 - 0.5 * cos(2.0 * PI * k as f64 / denom)) as f32)
        .collect()
}

/// Multiplies both components of `buffer[k]` by `window[k]`.
///
/// Must run before the transform; windowing the spectrum is not rejected but
/// is meaningless. The buffer is left untouched on a length mismatch.
pub fn apply_window(window: &[f32], buffer: &mut [Complex32]) -> Result<(), FftError> {
    FftError::check_len(window.len(), buffer.len())?;

    for (sample, &w) in buffer.iter_mut().zip(window) {
        *sample = sample.scale(w);
    }
    Ok(())
}

/// [`apply_window`] with a Hann table, usually [`crate::FftPlan::window`].
pub fn apply_hann(window: &[f32], buffer: &mut [Complex32]) -> Result<(), FftError> {
    apply_window(window, buffer)
}
