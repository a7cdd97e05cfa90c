use thiserror::Error;

#[derive(Error, Debug)]
pub enum CwtError {
    #[error("position {pos} is out of bounds for a buffer of {len} samples")]
    InvalidPosition { pos: usize, len: usize },

    #[error("output width {0} is below the minimum of 32")]
    InvalidWidth(usize),

    #[error("invalid frequency range: fl={fl}, fh={fh} (require 0 < fl < fh)")]
    InvalidRange { fl: f64, fh: f64 },

    #[error("frequency must be positive, got {0}")]
    InvalidFrequency(f64),

    #[error("sigma must be positive, got {0}")]
    InvalidSigma(f64),

    #[error("gabor threshold must be in (0, 1), got {0}")]
    InvalidGaborThreshold(f64),

    #[error(transparent)]
    Core(#[from] spectra_core::CoreError),

    #[error("output buffer length {got} does not match configured width {expected}")]
    OutputLengthMismatch { expected: usize, got: usize },

    #[error(transparent)]
    Decode(#[from] spectra_decode::DecodeError),
}

pub type Result<T> = std::result::Result<T, CwtError>;
