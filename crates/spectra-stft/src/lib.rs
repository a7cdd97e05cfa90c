//! The short-time Fourier transform engine: a power-of-two sample ring, a
//! window table, a reusable real-DFT workspace, and a band-mapping table
//! that reduces `N/2+1` bins down to `W` output values.

mod bandmap;
mod config;
mod error;

pub use bandmap::Band;
pub use config::{FrequencyParams, StftOptions};
pub use error::{Result, StftError};
pub use spectra_core::{ScaleMode, WindowKind};

use spectra_core::DftWorkspace;
use spectra_decode::{decode, PcmFormat};
use tracing::{debug, trace, warn};

const DEFAULT_FS: f64 = 44100.0;
const DEFAULT_FL: f64 = 100.0;
const DEFAULT_FH: f64 = 16000.0;
const DEFAULT_WIDTH: usize = 480;

/// The STFT engine. An instance owns its sample ring, window table, DFT
/// workspace and band map exclusively; methods must be serialized by the
/// caller (see the concurrency model: a plain `&mut self` state machine).
pub struct Stft {
    capacity: usize,
    format: PcmFormat,
    window: spectra_core::WindowTable,
    width: usize,
    mode: ScaleMode,
    fs: f64,
    fl: f64,
    fh: f64,

    samples: Vec<f64>,
    used: usize,
    running: bool,

    dft: DftWorkspace,
    windowed: Vec<f64>,
    packed: Vec<f64>,
    bands: Vec<Band>,
}

impl Stft {
    /// Construct an engine for `capacity` samples (a power of two) decoding
    /// `format_tag`-encoded input, with defaults fs=44100, fl=100,
    /// fh=16000, W=480, window=BLACKMAN, mode=LOG.
    pub fn new(format_tag: &str, capacity: usize) -> Result<Self> {
        let format = PcmFormat::parse(format_tag)?;
        let window = spectra_core::WindowTable::new(WindowKind::default(), capacity)?;
        let dft = DftWorkspace::new(capacity)?;

        let width = DEFAULT_WIDTH.min(capacity / 2).max(1);
        if DEFAULT_WIDTH > capacity / 2 {
            warn!(
                capacity,
                default_width = DEFAULT_WIDTH,
                clamped_to = width,
                "default output width exceeds N/2 for this capacity; clamping"
            );
        }

        let bands = bandmap::build(
            capacity,
            width,
            ScaleMode::default(),
            DEFAULT_FS,
            DEFAULT_FL,
            DEFAULT_FH,
        );

        debug!(capacity, width, format = format_tag, "stft engine constructed");

        Ok(Stft {
            capacity,
            format,
            window,
            width,
            mode: ScaleMode::default(),
            fs: DEFAULT_FS,
            fl: DEFAULT_FL,
            fh: DEFAULT_FH,
            samples: vec![0.0; capacity],
            used: 0,
            running: false,
            dft,
            windowed: vec![0.0; capacity],
            packed: vec![0.0; capacity],
            bands,
        })
    }

    /// Construct an engine and immediately apply a partial-override
    /// options record to it (see [`StftOptions`]).
    pub fn with_options(format_tag: &str, capacity: usize, options: StftOptions) -> Result<Self> {
        let mut stft = Self::new(format_tag, capacity)?;
        options.apply_to(&mut stft)?;
        Ok(stft)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn used(&self) -> usize {
        self.used
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Decode `count` samples from `bytes` and shift them into the tail of
    /// the sample ring, discarding the oldest `count` samples.
    pub fn shift_in(&mut self, bytes: &[u8], count: usize) -> Result<()> {
        if count > self.capacity {
            return Err(StftError::InvalidLength {
                count,
                capacity: self.capacity,
            });
        }

        let decoded = decode(self.format, bytes, count)?;

        self.samples.drain(0..count);
        self.samples.extend_from_slice(&decoded);
        debug_assert_eq!(self.samples.len(), self.capacity);

        self.used = (self.used + count).min(self.capacity);
        self.running = true;
        trace!(count, used = self.used, "shift_in");
        Ok(())
    }

    pub fn reset(&mut self) {
        self.samples.iter_mut().for_each(|s| *s = 0.0);
        self.used = 0;
        self.running = true;
        trace!("reset");
    }

    pub fn set_window(&mut self, kind_tag: &str) -> Result<()> {
        let kind = WindowKind::parse(kind_tag)?;
        self.window.set_kind(kind);
        debug!(kind = kind_tag, "set_window");
        Ok(())
    }

    /// Requires `width <= capacity/2`; on failure the previous band map is
    /// left untouched.
    pub fn set_width(&mut self, width: usize) -> Result<()> {
        let max = self.capacity / 2;
        if width == 0 || width > max {
            warn!(width, max, "rejected set_width");
            return Err(StftError::InvalidWidth { width, max });
        }
        self.width = width;
        self.rebuild_bandmap();
        Ok(())
    }

    pub fn set_scale_mode(&mut self, mode_tag: &str) -> Result<()> {
        let mode = ScaleMode::parse(mode_tag)?;
        self.mode = mode;
        self.rebuild_bandmap();
        Ok(())
    }

    /// Validates `fh <= fs/2` and `fl < fh` (and `fl > 0`) before storing.
    pub fn set_frequency(&mut self, fs: f64, fl: f64, fh: f64) -> Result<()> {
        if !(fl > 0.0 && fl < fh && fh <= fs / 2.0) {
            warn!(fs, fl, fh, "rejected set_frequency");
            return Err(StftError::InvalidFrequency { fs, fl, fh });
        }
        self.fs = fs;
        self.fl = fl;
        self.fh = fh;
        self.rebuild_bandmap();
        Ok(())
    }

    fn rebuild_bandmap(&mut self) {
        self.bands = bandmap::build(self.capacity, self.width, self.mode, self.fs, self.fl, self.fh);
        trace!(width = self.width, "bandmap rebuilt");
    }

    /// Window the sample ring and run the forward real DFT into the
    /// workspace that `calc_*` reads from.
    pub fn transform(&mut self) -> Result<()> {
        self.window.apply(&self.samples, &mut self.windowed)?;
        self.dft.transform(&self.windowed, &mut self.packed)?;
        Ok(())
    }

    fn bin(&self, k: usize) -> (f64, f64) {
        if k == 0 {
            (self.packed[0], 0.0)
        } else if k == self.capacity / 2 {
            (self.packed[1], 0.0)
        } else {
            (self.packed[2 * k], self.packed[2 * k + 1])
        }
    }

    /// Un-normalized power, in decibels: `10*log10(re^2+im^2)` averaged
    /// over each band's bins.
    pub fn calc_power(&self, out: &mut [f64]) -> Result<()> {
        self.check_output_len(out)?;
        for (i, band) in self.bands.iter().enumerate() {
            let mut v = 0.0;
            for j in 0..band.span {
                let (re, im) = self.bin(band.start_bin + j);
                v += 10.0 * (re * re + im * im).log10();
            }
            out[i] = v / band.span as f64;
        }
        Ok(())
    }

    /// Amplitude in dB full-scale, normalized by `used`.
    pub fn calc_amplitude(&self, out: &mut [f64]) -> Result<()> {
        self.check_output_len(out)?;
        if self.used == 0 {
            return Err(StftError::NoSamples);
        }
        let used = self.used as f64;
        for (i, band) in self.bands.iter().enumerate() {
            let mut v = 0.0;
            for j in 0..band.span {
                let (re, im) = self.bin(band.start_bin + j);
                v += 20.0 * ((re * re + im * im).sqrt() / used).log10();
            }
            out[i] = v / band.span as f64;
        }
        Ok(())
    }

    /// Linear absolute magnitude, normalized by `used`. Unlike
    /// `calc_amplitude`, `used == 0` is not rejected: the division
    /// produces the platform's IEEE-754 result (`+inf`, or `NaN` when the
    /// numerator is also zero) rather than a substituted finite value.
    pub fn calc_absolute(&self, out: &mut [f64]) -> Result<()> {
        self.check_output_len(out)?;
        let used = self.used as f64;
        for (i, band) in self.bands.iter().enumerate() {
            let mut v = 0.0;
            for j in 0..band.span {
                let (re, im) = self.bin(band.start_bin + j);
                v += (re * re + im * im).sqrt() / used;
            }
            out[i] = v / band.span as f64;
        }
        Ok(())
    }

    fn check_output_len(&self, out: &[f64]) -> Result<()> {
        if out.len() != self.width {
            return Err(StftError::OutputLengthMismatch {
                expected: self.width,
                got: out.len(),
            });
        }
        Ok(())
    }
}
