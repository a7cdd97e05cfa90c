use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("unknown PCM format: {0}")]
    UnknownFormat(String),

    #[error("short input: need at least {need} bytes to decode {count} samples, got {got}")]
    ShortInput {
        need: usize,
        got: usize,
        count: usize,
    },
}

pub type Result<T> = std::result::Result<T, DecodeError>;
