use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("row {row} is out of bounds for a framebuffer of height {height}")]
    InvalidRow { row: usize, height: usize },

    #[error("column {col} is out of bounds for a framebuffer of width {width}")]
    InvalidColumn { col: usize, width: usize },

    #[error("invalid framebuffer dimensions: width={width}, height={height}, column_step={column_step}")]
    InvalidDimensions {
        width: usize,
        height: usize,
        column_step: usize,
    },

    #[error("data length {got} does not match framebuffer height {expected}")]
    DataLengthMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, RenderError>;
