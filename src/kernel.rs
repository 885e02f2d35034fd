// src/kernel.rs

use core::f64::consts::PI;
use num_complex::Complex32;

// --- Table builders, used once at plan construction ---

/// Fills the flat twiddle table for an `n`-point transform.
///
/// Stage `s` has half-span `h = 2^s` and reads its `h` factors from
/// `twiddles[h..2 * h]`, where entry `h + j` is `exp(-2πi·j / 2h)`.
/// Slot 0 is never read and holds `1 + 0i`.
pub(crate) fn precompute_twiddles(twiddles: &mut [Complex32], n: usize) {
    twiddles[0] = Complex32::new(1.0, 0.0);

    let mut half = 1;
    while half < n {
        let span = (half << 1) as f64;
        for j in 0..half {
            let angle = -2.0 * PI * (j as f64) / span;
            let (sin, cos) = sin_cos(angle);
            twiddles[half + j] = Complex32::new(cos as f32, sin as f32);
        }
        half <<= 1;
    }
}

/// Reverses the low `bits` bits of `index`.
#[inline]
pub(crate) fn bit_reverse(index: usize, bits: u32) -> usize {
    index
        .reverse_bits()
        .checked_shr(usize::BITS - bits)
        .unwrap_or(0)
}

/// In-place bit-reversal permutation. Every pair is swapped exactly once.
pub(crate) fn bit_reverse_permute<T>(buffer: &mut [T], bits: u32) {
    let n = buffer.len();
    // 0 and n-1 are their own reversal
    for i in 1..n.saturating_sub(1) {
        let j = bit_reverse(i, bits);
        if i < j {
            buffer.swap(i, j);
        }
    }
}

// --- Butterfly stages ---

/// Stage 0 (span 2): the only twiddle is 1.
#[inline]
pub(crate) fn first_stage(buffer: &mut [Complex32]) {
    for pair in buffer.chunks_exact_mut(2) {
        let a = pair[0];
        let b = pair[1];
        pair[0] = a + b;
        pair[1] = a - b;
    }
}

/// Stage 1 (span 4): twiddles are 1 and -i (or +i for the inverse),
/// so the multiply collapses into a swap of re/im and a negation.
#[inline]
pub(crate) fn second_stage<const INVERSE: bool>(buffer: &mut [Complex32]) {
    for quad in buffer.chunks_exact_mut(4) {
        let a0 = quad[0];
        let a1 = quad[1];
        let b0 = quad[2];
        let b1 = quad[3];

        let t = if INVERSE {
            Complex32::new(-b1.im, b1.re)
        } else {
            Complex32::new(b1.im, -b1.re)
        };

        quad[0] = a0 + b0;
        quad[2] = a0 - b0;
        quad[1] = a1 + t;
        quad[3] = a1 - t;
    }
}

/// General butterfly stage. `twiddles` is the stage's slice, its length is
/// the half-span of the stage.
#[inline]
pub(crate) fn butterfly_stage<const INVERSE: bool>(
    buffer: &mut [Complex32],
    twiddles: &[Complex32],
) {
    let half = twiddles.len();

    for group in buffer.chunks_exact_mut(half << 1) {
        let (lo, hi) = group.split_at_mut(half);
        for ((a, b), &w) in lo.iter_mut().zip(hi.iter_mut()).zip(twiddles) {
            // Resolved at compile time
            let w = if INVERSE { w.conj() } else { w };
            let t = *b * w;
            *b = *a - t;
            *a += t;
        }
    }
}

/// In-place iterative radix-2 DIT transform.
///
/// Callers guarantee `buffer.len() == 1 << stages`, `stages >= 1` and
/// `twiddles.len() >= buffer.len()`. The inverse conjugates the twiddles and
/// finishes with a `1/n` scaling pass.
pub(crate) fn radix_2_dit_fft_core<const INVERSE: bool>(
    buffer: &mut [Complex32],
    twiddles: &[Complex32],
    stages: u32,
) {
    let n = buffer.len();

    // 1. Bit-reverse
    bit_reverse_permute(buffer, stages);

    // 2. Butterflies, the first two stages unrolled
    if stages >= 1 {
        first_stage(buffer);
    }
    if stages >= 2 {
        second_stage::<INVERSE>(buffer);
    }

    let mut half = 4;
    while half < n {
        butterfly_stage::<INVERSE>(buffer, &twiddles[half..half << 1]);
        half <<= 1;
    }

    if INVERSE {
        let scale = 1.0 / n as f32;
        for sample in buffer.iter_mut() {
            *sample = sample.scale(scale);
        }
    }
}

// --- Float math, std or libm ---

pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return (angle.sin(), angle.cos());

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

pub(crate) fn cos(angle: f64) -> f64 {
    sin_cos(angle).1
}

/// `sqrt(x² + y²)` without squaring, so tiny and huge components keep
/// their magnitude.
pub(crate) fn hypotf(x: f32, y: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.hypot(y);

    #[cfg(not(feature = "std"))]
    return libm::hypotf(x, y);
}

pub(crate) fn log10f(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.log10();

    #[cfg(not(feature = "std"))]
    return libm::log10f(x);
}

#[cfg(test)]
#[path = "kernel_tests.rs"]
mod tests;
