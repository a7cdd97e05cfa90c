//! Shared primitives for the spectrum-analysis engines: error types, window
//! tables, the scale-mode enum, a round-half-to-even numeric helper, and a
//! reusable real-DFT workspace.

mod dft;
mod error;
mod numeric;
mod scale;
mod window;

pub use dft::DftWorkspace;
pub use error::{CoreError, Result};
pub use numeric::round_half_even;
pub use scale::ScaleMode;
pub use window::{WindowKind, WindowTable};
