//! Spectrum post-processing: magnitude, dBFS, peak search and centering.
//!
//! All functions borrow caller buffers. The `_into` variants write into a
//! caller-provided output and never allocate, for use on the hot path.

use crate::common::FftError;
use crate::kernel::{hypotf, log10f};
use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex32;

/// Lowest dB value reported for any bin, including bins of zero magnitude.
pub const DEFAULT_DB_FLOOR: f32 = -200.0;

#[inline]
fn bin_magnitude(c: Complex32) -> f32 {
    hypotf(c.re, c.im)
}

/// `sqrt(re² + im²)` per bin.
pub fn magnitude(buffer: &[Complex32]) -> Vec<f32> {
    buffer.iter().map(|&c| bin_magnitude(c)).collect()
}

pub fn magnitude_into(buffer: &[Complex32], out: &mut [f32]) -> Result<(), FftError> {
    FftError::check_len(buffer.len(), out.len())?;
    for (o, &c) in out.iter_mut().zip(buffer) {
        *o = bin_magnitude(c);
    }
    Ok(())
}

/// `20·log10(|x| / full_scale_ref)` per bin, clamped from below at
/// [`DEFAULT_DB_FLOOR`].
///
/// `full_scale_ref` must be positive and finite, otherwise every bin comes
/// out as NaN or infinite. [`power_dbfs_into`] rejects such references.
pub fn power_dbfs(buffer: &[Complex32], full_scale_ref: f32) -> Vec<f32> {
    power_dbfs_with_floor(buffer, full_scale_ref, DEFAULT_DB_FLOOR)
}

/// Same as [`power_dbfs`] with an explicit floor.
pub fn power_dbfs_with_floor(
    buffer: &[Complex32],
    full_scale_ref: f32,
    floor_db: f32,
) -> Vec<f32> {
    let mut out = vec![0.0; buffer.len()];
    for (o, &c) in out.iter_mut().zip(buffer) {
        *o = bin_dbfs(c, full_scale_ref, floor_db);
    }
    out
}

/// Non-allocating [`power_dbfs_with_floor`]. Fails with `InvalidInput` when
/// `full_scale_ref` is not positive and finite, leaving `out` untouched.
pub fn power_dbfs_into(
    buffer: &[Complex32],
    out: &mut [f32],
    full_scale_ref: f32,
    floor_db: f32,
) -> Result<(), FftError> {
    FftError::check_len(buffer.len(), out.len())?;
    if !(full_scale_ref > 0.0 && full_scale_ref.is_finite()) {
        return Err(FftError::InvalidInput("full scale reference must be positive and finite"));
    }

    for (o, &c) in out.iter_mut().zip(buffer) {
        *o = bin_dbfs(c, full_scale_ref, floor_db);
    }
    Ok(())
}

#[inline]
fn bin_dbfs(c: Complex32, full_scale_ref: f32, floor_db: f32) -> f32 {
    let mag = bin_magnitude(c);
    if mag == 0.0 {
        return floor_db;
    }
    (20.0 * log10f(mag / full_scale_ref)).max(floor_db)
}

/// Strongest bin in the positive half `[0, n/2)` of an unshifted spectrum.
///
/// Returns the bin index and its frequency `index·sample_rate/n`. Ties go to
/// the lowest index. NaN bins are skipped; a half made only of NaN is
/// `InvalidInput`.
pub fn peak_bin(power_db: &[f32], sample_rate: f32) -> Result<(usize, f32), FftError> {
    let n = power_db.len();
    if n < 2 {
        return Err(FftError::InvalidInput("peak search needs at least two bins"));
    }

    let mut best: Option<(usize, f32)> = None;
    for (k, &p) in power_db[..n / 2].iter().enumerate() {
        if p.is_nan() {
            continue;
        }
        match best {
            Some((_, top)) if p <= top => {}
            _ => best = Some((k, p)),
        }
    }

    let (bin, _) = best.ok_or(FftError::InvalidInput("peak search found only NaN bins"))?;
    Ok((bin, bin as f32 * sample_rate / n as f32))
}

/// Swaps the halves `[0, n/2)` and `[n/2, n)` so DC lands at index `n/2`.
/// The buffer is left untouched for odd lengths.
pub fn fft_shift_inplace<T>(buffer: &mut [T]) -> Result<(), FftError> {
    if buffer.len() % 2 != 0 {
        return Err(FftError::InvalidInput("fft shift needs an even length"));
    }
    let (lo, hi) = buffer.split_at_mut(buffer.len() / 2);
    lo.swap_with_slice(hi);
    Ok(())
}

/// Undoes [`fft_shift_inplace`]. For even lengths the half swap is its own
/// inverse.
pub fn ifft_shift_inplace<T>(buffer: &mut [T]) -> Result<(), FftError> {
    fft_shift_inplace(buffer)
}

/// Signed frequency of bin `k` in a spectrum centered by
/// [`fft_shift_inplace`]: bin `n/2` is DC, bin 0 is `-sample_rate/2`.
pub fn bin_to_hz_centered(k: usize, n: usize, sample_rate: f32) -> f32 {
    (k as f32 - (n / 2) as f32) * sample_rate / n as f32
}

/// Frequency of every bin of a centered spectrum, ascending over
/// `[-sample_rate/2, sample_rate/2)`.
pub fn frequency_axis_centered(n: usize, sample_rate: f32) -> Vec<f32> {
    (0..n).map(|k| bin_to_hz_centered(k, n, sample_rate)).collect()
}

#[cfg(test)]
#[path = "spectrum_tests.rs"]
mod tests;
