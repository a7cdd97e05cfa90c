//! A single-dependency facade over the spectrum-analysis engines: sample
//! decoding, the STFT and CWT transforms, and the framebuffer renderer.
//! No numerical logic lives here; it only re-exports each crate's surface.

pub use spectra_decode::{decode, DecodeError, PcmFormat};

pub use spectra_stft::{Band, FrequencyParams, ScaleMode, Stft, StftError, StftOptions, WindowKind};

pub use spectra_cwt::{Cwt, CwtConfig, CwtError, CwtOptions};

pub use spectra_render::{Framebuffer, FramebufferConfig, FramebufferOptions, RenderError};
