#![no_std]

//! Radix-2 decimation-in-time FFT for power-of-two blocks of `Complex32`
//! samples, plus the small set of helpers needed to turn raw SDR IQ bytes into
//! a displayable spectrum.
//!
//! ```
//! use num_complex::Complex32;
//! use rs_sdr_fft::{FftPlan, power_dbfs, peak_bin};
//!
//! let plan = FftPlan::new(8, 8000.0).unwrap();
//! let mut buffer = [Complex32::new(1.0, 0.0); 8];
//! plan.transform_inplace(&mut buffer).unwrap();
//! let db = power_dbfs(&buffer, 8.0);
//! assert_eq!(peak_bin(&db, 8000.0).unwrap().0, 0);
//! ```

extern crate alloc;

// Enables the standard library for tests and for the `std` feature,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod analyzer;
pub mod common;
pub mod iq;
mod kernel;
pub mod plan;
pub mod spectrum;
pub mod window;

pub use analyzer::{AnalyzerConfig, SpectrumAnalyzer};
pub use common::{FftError, FftProcess};
pub use iq::{cu8_interleaved_into, cu8_interleaved_to_complex};
pub use plan::FftPlan;
pub use spectrum::{
    DEFAULT_DB_FLOOR, bin_to_hz_centered, fft_shift_inplace, frequency_axis_centered,
    ifft_shift_inplace, magnitude, magnitude_into, peak_bin, power_dbfs, power_dbfs_into,
    power_dbfs_with_floor,
};
pub use window::{apply_hann, apply_window, hann_window};
