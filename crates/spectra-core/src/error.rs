use thiserror::Error;

/// Errors shared by the spectral-analysis primitives (window tables, the
/// real-DFT workspace, scale-mode parsing) that both engines build on.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("capacity must be a power of two >= 2, got {0}")]
    InvalidCapacity(usize),

    #[error("window size {0} doesn't match capacity {1}")]
    WindowSizeMismatch(usize, usize),

    #[error("unknown window kind: {0}")]
    UnknownWindow(String),

    #[error("unknown scale mode: {0}")]
    UnknownScaleMode(String),

    #[error("numerical error: {0}")]
    Numerical(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
