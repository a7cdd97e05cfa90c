//! Band-map construction: the mapping from `W` output bands to contiguous
//! runs of real-DFT bins, in either linear or logarithmic frequency spacing.

use spectra_core::{round_half_even, ScaleMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub start_bin: usize,
    pub span: usize,
}

/// Build the `W`-entry band map for a capacity-`n` real DFT over
/// `[fl, fh]` Hz at sample rate `fs`.
pub fn build(n: usize, width: usize, mode: ScaleMode, fs: f64, fl: f64, fh: f64) -> Vec<Band> {
    let mut bands = Vec::with_capacity(width);
    let mut pos = n as f64 * fl / fs;
    let mut head = round_half_even(pos);

    match mode {
        ScaleMode::Linear => {
            let step = n as f64 * (fh - fl) / (fs * width as f64);
            for _ in 0..width {
                pos += step;
                let tail = round_half_even(pos);
                bands.push(band_from(head, tail));
                head = tail;
            }
        }
        ScaleMode::Log => {
            let step = (fh / fl).powf(1.0 / width as f64);
            for _ in 0..width {
                pos *= step;
                let tail = round_half_even(pos);
                bands.push(band_from(head, tail));
                head = tail;
            }
        }
    }

    bands
}

fn band_from(head: f64, tail: f64) -> Band {
    let head = head.max(0.0) as usize;
    let tail = tail.max(0.0) as usize;
    let span = if tail > head { tail - head } else { 1 };
    Band {
        start_bin: head,
        span,
    }
}
