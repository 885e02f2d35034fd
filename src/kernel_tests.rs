use super::*;
use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex32;

const EPSILON: f32 = 1e-4;

fn assert_feq(a: f32, b: f32) {
    assert!(
        (a - b).abs() < EPSILON,
        "Float mismatch: {} vs {}", a, b
    );
}

fn assert_cplx_eq(a: Complex32, b: Complex32) {
    assert!(
        (a - b).l1_norm() < EPSILON,
        "Complex mismatch: {} vs {}", a, b
    );
}

fn table(n: usize) -> Vec<Complex32> {
    let mut twiddles = vec![Complex32::default(); n];
    precompute_twiddles(&mut twiddles, n);
    twiddles
}

fn ramp(n: usize) -> Vec<Complex32> {
    (0..n)
        .map(|i| Complex32::new(i as f32 * 0.25 - 1.0, 0.5 - (i % 3) as f32))
        .collect()
}

#[test]
fn test_bit_reverse_8() {
    // Expected bit reversal for N=8:
    // 0 (000) -> 0 (000)
    // 1 (001) -> 4 (100)
    // 2 (010) -> 2 (010)
    // 3 (011) -> 6 (110)
    // 4 (100) -> 1 (001)
    // 5 (101) -> 5 (101)
    // 6 (110) -> 3 (011)
    // 7 (111) -> 7 (111)
    let reversed: Vec<usize> = (0..8).map(|i| bit_reverse(i, 3)).collect();
    assert_eq!(reversed, vec![0, 4, 2, 6, 1, 5, 3, 7]);
}

#[test]
fn test_bit_reverse_zero_bits() {
    assert_eq!(bit_reverse(0, 0), 0);
}

#[test]
fn test_bit_reverse_permute_8() {
    let mut buffer: Vec<usize> = (0..8).collect();
    bit_reverse_permute(&mut buffer, 3);
    assert_eq!(buffer, vec![0, 4, 2, 6, 1, 5, 3, 7]);
}

#[test]
fn test_bit_reverse_permute_is_involution() {
    for bits in 1..=10u32 {
        let n = 1usize << bits;
        let original: Vec<usize> = (0..n).collect();
        let mut buffer = original.clone();
        bit_reverse_permute(&mut buffer, bits);
        bit_reverse_permute(&mut buffer, bits);
        assert_eq!(buffer, original, "n = {}", n);
    }
}

#[test]
fn test_precompute_twiddles_8() {
    let twiddles = table(8);
    let sqrt2_2 = (2.0f32).sqrt() / 2.0;

    assert_cplx_eq(twiddles[0], Complex32::new(1.0, 0.0));

    // Stage 0 (span 2)
    assert_cplx_eq(twiddles[1], Complex32::new(1.0, 0.0));

    // Stage 1 (span 4): 1, -i
    assert_cplx_eq(twiddles[2], Complex32::new(1.0, 0.0));
    assert_cplx_eq(twiddles[3], Complex32::new(0.0, -1.0));

    // Stage 2 (span 8): e^(-j * 2*pi * k / 8)
    assert_cplx_eq(twiddles[4], Complex32::new(1.0, 0.0));
    assert_cplx_eq(twiddles[5], Complex32::new(sqrt2_2, -sqrt2_2));
    assert_cplx_eq(twiddles[6], Complex32::new(0.0, -1.0));
    assert_cplx_eq(twiddles[7], Complex32::new(-sqrt2_2, -sqrt2_2));
}

#[test]
fn test_twiddles_are_unit_magnitude() {
    for w in table(1024) {
        assert_feq(w.norm_sqr(), 1.0);
    }
}

#[test]
fn test_first_stage_matches_general_butterfly() {
    let mut fast = ramp(16);
    let mut general = fast.clone();

    first_stage(&mut fast);
    butterfly_stage::<false>(&mut general, &[Complex32::new(1.0, 0.0)]);

    for (a, b) in fast.iter().zip(&general) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_second_stage_matches_general_butterfly() {
    let stage_twiddles = [Complex32::new(1.0, 0.0), Complex32::new(0.0, -1.0)];

    let mut fast = ramp(16);
    let mut general = fast.clone();
    second_stage::<false>(&mut fast);
    butterfly_stage::<false>(&mut general, &stage_twiddles);
    for (a, b) in fast.iter().zip(&general) {
        assert_eq!(a, b);
    }

    let mut fast = ramp(16);
    let mut general = fast.clone();
    second_stage::<true>(&mut fast);
    butterfly_stage::<true>(&mut general, &stage_twiddles);
    for (a, b) in fast.iter().zip(&general) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_second_stage_matches_table_twiddles() {
    // The table's -i is only approximately (0, -1) after rounding
    let twiddles = table(4);

    let mut fast = ramp(32);
    let mut general = fast.clone();
    second_stage::<false>(&mut fast);
    butterfly_stage::<false>(&mut general, &twiddles[2..4]);

    for (&a, &b) in fast.iter().zip(&general) {
        assert_cplx_eq(a, b);
    }
}

#[test]
fn test_radix_2_dit_fft_core_basic() {
    // Simple DC signal check without the plan wrapper
    let n = 4;
    let mut buffer = vec![Complex32::new(1.0, 0.0); n];
    let twiddles = table(n);

    // Run Forward FFT
    radix_2_dit_fft_core::<false>(&mut buffer, &twiddles, 2);

    // Expected: [4, 0, 0, 0]
    assert_cplx_eq(buffer[0], Complex32::new(4.0, 0.0));
    assert_cplx_eq(buffer[1], Complex32::new(0.0, 0.0));
    assert_cplx_eq(buffer[2], Complex32::new(0.0, 0.0));
    assert_cplx_eq(buffer[3], Complex32::new(0.0, 0.0));

    // Run Inverse FFT
    radix_2_dit_fft_core::<true>(&mut buffer, &twiddles, 2);

    // Expected: [1, 1, 1, 1]
    for sample in buffer {
        assert_cplx_eq(sample, Complex32::new(1.0, 0.0));
    }
}

#[test]
fn test_radix_2_dit_fft_core_two_points() {
    let mut buffer = vec![Complex32::new(3.0, 1.0), Complex32::new(1.0, -1.0)];
    let twiddles = table(2);

    radix_2_dit_fft_core::<false>(&mut buffer, &twiddles, 1);

    assert_cplx_eq(buffer[0], Complex32::new(4.0, 0.0));
    assert_cplx_eq(buffer[1], Complex32::new(2.0, 2.0));
}

#[test]
fn test_core_matches_naive_dft() {
    let n = 64;
    let input = ramp(n);
    let twiddles = table(n);

    let mut buffer = input.clone();
    radix_2_dit_fft_core::<false>(&mut buffer, &twiddles, 6);

    for (k, &got) in buffer.iter().enumerate() {
        let mut expected = Complex32::new(0.0, 0.0);
        for (t, &x) in input.iter().enumerate() {
            let angle = -2.0 * PI * ((k * t) % n) as f64 / n as f64;
            let (sin, cos) = sin_cos(angle);
            expected += x * Complex32::new(cos as f32, sin as f32);
        }
        assert!(
            (got - expected).l1_norm() < 1e-2,
            "bin {}: {} vs {}", k, got, expected
        );
    }
}

#[test]
fn test_sin_cos() {
    let angle = PI / 4.0; // 45 degrees
    let (s, c) = sin_cos(angle);
    let sqrt2_2 = (2.0f32).sqrt() / 2.0;
    assert_feq(s as f32, sqrt2_2);
    assert_feq(c as f32, sqrt2_2);
}

#[test]
fn test_hypot_and_log10() {
    assert_feq(hypotf(3.0, -4.0), 5.0);
    // Squaring 1e-23 underflows f32, hypot does not
    assert!(hypotf(1e-23, 0.0) > 0.0);
    assert!(hypotf(2e38, 2e38).is_finite());
    assert_feq(log10f(1000.0), 3.0);
}
