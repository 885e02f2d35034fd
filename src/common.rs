// src/common.rs

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    #[error("Data buffer size {actual} does not match expected size {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("Size must be a power of 2 and at least 2, got {size}")]
    NotPowerOfTwo { size: usize },
    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),
}

impl FftError {
    /// Returns `SizeMismatch` unless `actual == expected`.
    pub(crate) fn check_len(expected: usize, actual: usize) -> Result<(), FftError> {
        if expected == actual {
            Ok(())
        } else {
            Err(FftError::SizeMismatch { expected, actual })
        }
    }
}

/// Anything that can transform a buffer of `T` in place.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], inverse: bool) -> Result<(), FftError>;
}
