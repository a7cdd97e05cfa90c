//! The STFT engine's partial-override options record, applied after the
//! positional `(format_tag, capacity)` construction arguments.

use crate::{Result, Stft};
use spectra_core::{ScaleMode, WindowKind};

/// The `set_frequency(fs, fl, fh)` triple, grouped so it can travel as a
/// single optional field on [`StftOptions`].
#[derive(Debug, Clone, Copy)]
pub struct FrequencyParams {
    pub fs: f64,
    pub fl: f64,
    pub fh: f64,
}

/// Partial override record for the STFT engine's construction surface.
/// Every field left `None` keeps whatever `Stft::new` already set up.
#[derive(Debug, Clone, Copy, Default)]
pub struct StftOptions {
    pub window: Option<WindowKind>,
    pub output_width: Option<usize>,
    pub scale_mode: Option<ScaleMode>,
    pub frequency: Option<FrequencyParams>,
}

impl StftOptions {
    /// Apply the record's `Some` fields to `stft` through its own
    /// validated setters, so a rejected field leaves the engine exactly
    /// as it was before this call (matching each setter's own failure
    /// behavior).
    pub fn apply_to(&self, stft: &mut Stft) -> Result<()> {
        if let Some(window) = self.window {
            stft.set_window(window.tag())?;
        }
        if let Some(width) = self.output_width {
            stft.set_width(width)?;
        }
        if let Some(mode) = self.scale_mode {
            stft.set_scale_mode(mode.tag())?;
        }
        if let Some(freq) = self.frequency {
            stft.set_frequency(freq.fs, freq.fl, freq.fh)?;
        }
        Ok(())
    }
}
