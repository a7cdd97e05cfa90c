use thiserror::Error;

#[derive(Error, Debug)]
pub enum StftError {
    #[error("shift_in count {count} exceeds capacity {capacity}")]
    InvalidLength { count: usize, capacity: usize },

    #[error("output width {width} exceeds N/2 ({max})")]
    InvalidWidth { width: usize, max: usize },

    #[error("output buffer length {got} does not match configured width {expected}")]
    OutputLengthMismatch { expected: usize, got: usize },

    #[error("invalid frequency parameters: fs={fs}, fl={fl}, fh={fh} (require 0 < fl < fh <= fs/2)")]
    InvalidFrequency { fs: f64, fl: f64, fh: f64 },

    #[error("calc_amplitude requires at least one sample to have been pushed")]
    NoSamples,

    #[error(transparent)]
    Core(#[from] spectra_core::CoreError),

    #[error(transparent)]
    Decode(#[from] spectra_decode::DecodeError),
}

pub type Result<T> = std::result::Result<T, StftError>;
