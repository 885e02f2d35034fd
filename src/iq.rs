//! CU8 (interleaved unsigned 8-bit I/Q, RTL-SDR native) ingestion.

use crate::common::FftError;
use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex32;

/// DC offset and scale of the unsigned byte range.
const CU8_OFFSET: f32 = 127.5;

#[inline]
fn cu8_component(byte: u8) -> f32 {
    (byte as f32 - CU8_OFFSET) / CU8_OFFSET
}

/// Converts `I, Q, I, Q, ...` bytes into `bytes.len() / 2` complex samples,
/// each component mapped through `(byte - 127.5) / 127.5`.
pub fn cu8_interleaved_to_complex(bytes: &[u8]) -> Result<Vec<Complex32>, FftError> {
    if bytes.len() % 2 != 0 {
        return Err(FftError::InvalidInput("cu8 input must hold whole I/Q pairs"));
    }

    let mut out = vec![Complex32::default(); bytes.len() / 2];
    cu8_interleaved_into(bytes, &mut out)?;
    Ok(out)
}

/// Non-allocating form of [`cu8_interleaved_to_complex`]; `out` must hold
/// exactly `bytes.len() / 2` samples.
pub fn cu8_interleaved_into(bytes: &[u8], out: &mut [Complex32]) -> Result<(), FftError> {
    if bytes.len() % 2 != 0 {
        return Err(FftError::InvalidInput("cu8 input must hold whole I/Q pairs"));
    }
    FftError::check_len(bytes.len() / 2, out.len())?;

    for (sample, pair) in out.iter_mut().zip(bytes.chunks_exact(2)) {
        *sample = Complex32::new(cu8_component(pair[0]), cu8_component(pair[1]));
    }
    Ok(())
}
