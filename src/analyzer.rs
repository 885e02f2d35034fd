//! Stateful spectrum pipeline: window, transform, dBFS, peak.
//!
//! Holds a plan and its scratch buffers so that repeated calls to
//! [`SpectrumAnalyzer::analyze`] do not allocate.

use crate::common::FftError;
use crate::iq::cu8_interleaved_into;
use crate::plan::FftPlan;
use crate::spectrum::{DEFAULT_DB_FLOOR, peak_bin, power_dbfs_into};
use alloc::vec;
use alloc::vec::Vec;
use num_complex::Complex32;

/// Spectrum analyzer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// FFT size (number of samples, power of 2)
    pub fft_size: usize,

    /// Sample rate in Hz
    pub sample_rate: f32,

    /// Magnitude that reads as 0 dBFS
    pub full_scale_ref: f32,

    /// Lowest dB value reported for any bin
    pub db_floor: f32,

    /// Apply the plan's Hann window before transforming
    pub apply_window: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fft_size: 1024,
            sample_rate: 2_048_000.0,
            full_scale_ref: 1.0,
            db_floor: DEFAULT_DB_FLOOR,
            apply_window: true,
        }
    }
}

pub struct SpectrumAnalyzer {
    config: AnalyzerConfig,
    plan: FftPlan,
    scratch: Vec<Complex32>,
    power: Vec<f32>,
}

impl SpectrumAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self, FftError> {
        let plan = FftPlan::new(config.fft_size, config.sample_rate)?;
        let n = plan.size();

        Ok(Self {
            config,
            plan,
            scratch: vec![Complex32::default(); n],
            power: vec![DEFAULT_DB_FLOOR; n],
        })
    }

    /// Runs one block of `fft_size` complex samples through the pipeline and
    /// returns the spectrum in dBFS, unshifted (DC at index 0).
    pub fn analyze(&mut self, samples: &[Complex32]) -> Result<&[f32], FftError> {
        FftError::check_len(self.plan.size(), samples.len())?;
        self.scratch.copy_from_slice(samples);
        self.run()
    }

    /// Same as [`SpectrumAnalyzer::analyze`] for `2 * fft_size` CU8 bytes.
    pub fn analyze_cu8(&mut self, bytes: &[u8]) -> Result<&[f32], FftError> {
        cu8_interleaved_into(bytes, &mut self.scratch)?;
        self.run()
    }

    fn run(&mut self) -> Result<&[f32], FftError> {
        if self.config.apply_window {
            self.plan.apply_window(&mut self.scratch)?;
        }
        self.plan.transform_inplace(&mut self.scratch)?;
        power_dbfs_into(
            &self.scratch,
            &mut self.power,
            self.config.full_scale_ref,
            self.config.db_floor,
        )?;

        tracing::trace!(size = self.plan.size(), "analyzed block");
        Ok(self.power.as_slice())
    }

    /// Strongest positive-frequency bin of the last analyzed block.
    pub fn peak(&self) -> Result<(usize, f32), FftError> {
        let peak = peak_bin(&self.power, self.config.sample_rate)?;
        tracing::trace!(bin = peak.0, freq_hz = peak.1, "spectrum peak");
        Ok(peak)
    }

    /// DC-centered copy of the last spectrum, for display.
    pub fn centered_power(&self) -> Vec<f32> {
        let mut centered = self.power.clone();
        // Plan sizes are powers of two, so the halves are equal
        let (lo, hi) = centered.split_at_mut(self.plan.size() / 2);
        lo.swap_with_slice(hi);
        centered
    }

    /// Last computed spectrum in dBFS, unshifted.
    pub fn power(&self) -> &[f32] {
        &self.power
    }

    /// Rebuilds the plan only when the size or sample rate changes.
    pub fn update_config(&mut self, config: AnalyzerConfig) -> Result<(), FftError> {
        let needs_new_plan = config.fft_size != self.config.fft_size
            || config.sample_rate != self.config.sample_rate;

        if needs_new_plan {
            let plan = FftPlan::new(config.fft_size, config.sample_rate)?;
            let n = plan.size();
            self.plan = plan;
            self.scratch = vec![Complex32::default(); n];
            self.power = vec![config.db_floor; n];
        }

        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn plan(&self) -> &FftPlan {
        &self.plan
    }
}
