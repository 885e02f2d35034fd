use crate::common::{FftError, FftProcess};
use crate::kernel::{precompute_twiddles, radix_2_dit_fft_core};
use crate::window::{apply_window, hann_window};
use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex32; // Complex<f32>

/// Precomputed tables for a forward/inverse transform of one fixed size.
///
/// Owns a flat twiddle table and a Hann window, both of length `n`. The bit
/// reversal is computed on the fly, so those two tables are the only
/// allocations. A plan is never mutated after construction and can be shared
/// between threads by reference.
#[derive(Debug, Clone)]
pub struct FftPlan {
    twiddles: Vec<Complex32>,
    window: Vec<f32>,
    n: usize,
    stages: u32,
    sample_rate: f32,
}

impl FftPlan {
    /// Builds the plan for `n` points. `sample_rate` (Hz) is only used by the
    /// frequency mapping helpers; pass `0.0` when it is not known.
    pub fn new(n: usize, sample_rate: f32) -> Result<Self, FftError> {
        if n < 2 || !n.is_power_of_two() {
            tracing::debug!(size = n, "rejected fft plan size");
            return Err(FftError::NotPowerOfTwo { size: n });
        }

        let stages = n.trailing_zeros();
        let mut twiddles = vec![Complex32::default(); n];
        precompute_twiddles(&mut twiddles, n);
        let window = hann_window(n);

        tracing::debug!(size = n, stages, sample_rate, "built fft plan");

        Ok(Self { twiddles, window, n, stages, sample_rate })
    }

    /// Releases the plan's tables. Dropping the plan does the same.
    pub fn close(self) {
        tracing::debug!(size = self.n, "released fft plan");
    }

    /// Forward transform in place. `buffer` ends up in natural order with DC
    /// at index 0 and bins `n/2..n` holding negative frequencies. No scaling.
    ///
    /// Apply the window (see [`FftPlan::apply_window`]) before calling this,
    /// not after.
    pub fn transform_inplace(&self, buffer: &mut [Complex32]) -> Result<(), FftError> {
        FftError::check_len(self.n, buffer.len())?;
        radix_2_dit_fft_core::<false>(buffer, &self.twiddles, self.stages);
        Ok(())
    }

    /// Inverse transform in place, scaled by `1/n` so that a forward pass
    /// followed by an inverse pass reproduces the input.
    pub fn inverse_inplace(&self, buffer: &mut [Complex32]) -> Result<(), FftError> {
        FftError::check_len(self.n, buffer.len())?;
        radix_2_dit_fft_core::<true>(buffer, &self.twiddles, self.stages);
        Ok(())
    }

    /// Multiplies `buffer` by the plan's Hann window.
    pub fn apply_window(&self, buffer: &mut [Complex32]) -> Result<(), FftError> {
        apply_window(&self.window, buffer)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of butterfly stages, `log2(n)`.
    pub fn stages(&self) -> u32 {
        self.stages
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn window(&self) -> &[f32] {
        &self.window
    }

    /// The `2^stage` twiddle factors used by butterfly stage `stage`,
    /// or `None` past the last stage.
    pub fn stage_twiddles(&self, stage: u32) -> Option<&[Complex32]> {
        if stage >= self.stages {
            return None;
        }
        let half = 1usize << stage;
        Some(&self.twiddles[half..half << 1])
    }

    /// Width of one bin in Hz.
    pub fn bin_width(&self) -> f32 {
        self.sample_rate / self.n as f32
    }

    /// Frequency of bin `k` in the unshifted output. Bins at or above `n/2`
    /// map to negative frequencies.
    pub fn bin_to_hz(&self, k: usize) -> f32 {
        let k = k % self.n;
        if k < self.n / 2 {
            k as f32 * self.bin_width()
        } else {
            -((self.n - k) as f32) * self.bin_width()
        }
    }
}

impl FftProcess<Complex32> for FftPlan {
    fn process(&self, buffer: &mut [Complex32], inverse: bool) -> Result<(), FftError> {
        if inverse {
            self.inverse_inplace(buffer)
        } else {
            self.transform_inplace(buffer)
        }
    }
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
