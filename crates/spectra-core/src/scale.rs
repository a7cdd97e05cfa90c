//! Linear/logarithmic band-frequency scale mode, shared by both engines.

use crate::{CoreError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleMode {
    Linear,
    Log,
}

impl ScaleMode {
    pub fn parse(tag: &str) -> Result<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "LINEARSCALE" | "LINEAR" => Ok(ScaleMode::Linear),
            "LOGSCALE" | "LOG" => Ok(ScaleMode::Log),
            other => Err(CoreError::UnknownScaleMode(other.to_string())),
        }
    }

    /// The canonical tag `parse` accepts back for this mode.
    pub fn tag(self) -> &'static str {
        match self {
            ScaleMode::Linear => "LINEAR",
            ScaleMode::Log => "LOG",
        }
    }
}

impl Default for ScaleMode {
    fn default() -> Self {
        ScaleMode::Log
    }
}
