//! The continuous wavelet transform engine: a Gabor-bounded Morlet kernel
//! evaluated at a tabulated set of target frequencies.

mod config;
mod error;

pub use config::{CwtConfig, CwtOptions};
pub use error::{CwtError, Result};
pub use spectra_core::ScaleMode;

use spectra_decode::{decode, PcmFormat};
use tracing::{debug, trace, warn};

const MIN_WIDTH: usize = 32;

pub struct Cwt {
    config: CwtConfig,

    wk0: f64,
    wk1: f64,
    wk2: f64,
    ft: Vec<f64>,
    ws: Vec<i64>,
    wt: Vec<(f64, f64)>,
    ws_dirty: bool,

    samples: Vec<f64>,
}

impl Cwt {
    pub fn new(options: CwtOptions) -> Result<Self> {
        let mut config = CwtConfig::default();
        options.apply_to(&mut config);
        Self::from_config(config)
    }

    fn from_config(config: CwtConfig) -> Result<Self> {
        validate(&config)?;

        let mut cwt = Cwt {
            config,
            wk0: 0.0,
            wk1: 0.0,
            wk2: 0.0,
            ft: vec![0.0; config.width],
            ws: vec![0; config.width],
            wt: vec![(0.0, 0.0); config.width],
            ws_dirty: true,
            samples: Vec::new(),
        };

        cwt.recompute_wk();
        cwt.rebuild_ft();
        cwt.rebuild_ws();
        debug!(width = config.width, sigma = config.sigma, "cwt engine constructed");
        Ok(cwt)
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn config(&self) -> &CwtConfig {
        &self.config
    }

    pub fn target_frequencies(&self) -> &[f64] {
        &self.ft
    }

    pub fn set_sigma(&mut self, sigma: f64) -> Result<()> {
        if !(sigma > 0.0) {
            warn!(sigma, "rejected set_sigma");
            return Err(CwtError::InvalidSigma(sigma));
        }
        self.config.sigma = sigma;
        self.recompute_wk();
        self.ws_dirty = true;
        debug!(sigma, "set_sigma");
        Ok(())
    }

    pub fn set_gabor_threshold(&mut self, gth: f64) -> Result<()> {
        if !(gth > 0.0 && gth < 1.0) {
            warn!(gth, "rejected set_gabor_threshold");
            return Err(CwtError::InvalidGaborThreshold(gth));
        }
        self.config.gabor_threshold = gth;
        self.recompute_wk();
        self.ws_dirty = true;
        debug!(gth, "set_gabor_threshold");
        Ok(())
    }

    /// Sets fs=freq, fh=freq/2, fl=freq/5, exactly as `CwtOptions`'s
    /// `frequency` field does at construction time.
    pub fn set_frequency(&mut self, freq: f64) -> Result<()> {
        if !(freq > 0.0) {
            return Err(CwtError::InvalidFrequency(freq));
        }
        self.config.fs = freq;
        self.config.fh = freq / 2.0;
        self.config.fl = freq / 5.0;
        self.rebuild_ft();
        self.ws_dirty = true;
        debug!(freq, "set_frequency");
        Ok(())
    }

    pub fn set_range(&mut self, fl: f64, fh: f64) -> Result<()> {
        if !(fl > 0.0 && fl < fh) {
            warn!(fl, fh, "rejected set_range");
            return Err(CwtError::InvalidRange { fl, fh });
        }
        self.config.fl = fl;
        self.config.fh = fh;
        self.rebuild_ft();
        self.ws_dirty = true;
        Ok(())
    }

    pub fn set_scale_mode(&mut self, mode_tag: &str) -> Result<()> {
        let mode = ScaleMode::parse(mode_tag)?;
        self.config.mode = mode;
        self.rebuild_ft();
        self.ws_dirty = true;
        Ok(())
    }

    pub fn set_output_width(&mut self, width: usize) -> Result<()> {
        if width < MIN_WIDTH {
            warn!(width, "rejected set_output_width");
            return Err(CwtError::InvalidWidth(width));
        }
        self.config.width = width;
        self.ft = vec![0.0; width];
        self.ws = vec![0; width];
        self.wt = vec![(0.0, 0.0); width];
        self.rebuild_ft();
        self.ws_dirty = true;
        Ok(())
    }

    /// Decode `count` samples of `fmt_tag` and replace the internal sample
    /// buffer. Also accepts `dbl` (raw host-endian f64) in addition to the
    /// integer PCM tags the STFT engine's decoder accepts.
    pub fn put_in(&mut self, fmt_tag: &str, bytes: &[u8], count: usize) -> Result<()> {
        let fmt = PcmFormat::parse(fmt_tag)?;
        self.samples = decode(fmt, bytes, count)?;
        trace!(count, fmt = fmt_tag, "put_in");
        Ok(())
    }

    fn recompute_wk(&mut self) {
        self.wk0 = self.config.sigma * (-2.0 * self.config.gabor_threshold.ln()).sqrt();
        self.wk1 = 1.0 / (2.0 * std::f64::consts::PI * self.config.sigma.powi(2)).sqrt();
        self.wk2 = 2.0 * self.config.sigma.powi(2);
    }

    fn rebuild_ft(&mut self) {
        let w = self.config.width;
        for (i, f) in self.ft.iter_mut().enumerate() {
            *f = match self.config.mode {
                ScaleMode::Linear => {
                    self.config.fl + i as f64 * (self.config.fh - self.config.fl) / w as f64
                }
                ScaleMode::Log => {
                    self.config.fl * (self.config.fh / self.config.fl).powf(i as f64 / w as f64)
                }
            };
        }
        trace!(width = w, "ft rebuilt");
    }

    fn rebuild_ws(&mut self) {
        for i in 0..self.config.width {
            self.ws[i] = ((self.wk0 / self.ft[i]) * self.config.fs).floor() as i64;
        }
        self.ws_dirty = false;
        trace!("ws rebuilt");
    }

    /// Evaluate the Gabor-bounded Morlet kernel for every band centered at
    /// sample `pos`.
    pub fn transform(&mut self, pos: usize) -> Result<()> {
        let n = self.samples.len();
        if n == 0 || pos >= n {
            return Err(CwtError::InvalidPosition { pos, len: n });
        }
        if self.ws_dirty {
            self.rebuild_ws();
        }

        let fs = self.config.fs;
        for i in 0..self.config.width {
            let ft = self.ft[i];
            let dx = self.ws[i];
            let lo = (-dx).max(-(pos as i64));
            let hi = dx.min(n as i64 - pos as i64 - 1);

            let mut re = 0.0;
            let mut im = 0.0;
            let mut j = lo;
            while j <= hi {
                let t = (j as f64 / fs) * ft;
                let g = self.wk1 * (-(t * t) / self.wk2).exp() * self.samples[(pos as i64 + j) as usize];
                re += (2.0 * std::f64::consts::PI * t).cos() * g;
                im += (2.0 * std::f64::consts::PI * t).sin() * g;
                j += 1;
            }
            self.wt[i] = (re, im);
        }
        Ok(())
    }

    pub fn calc_power(&self, out: &mut [f64]) -> Result<()> {
        self.check_output_len(out)?;
        for (i, &(re, im)) in self.wt.iter().enumerate() {
            out[i] = ((re * re + im * im).sqrt() / self.ft[i]) * 256.0;
        }
        Ok(())
    }

    pub fn calc_amplitude(&self, out: &mut [f64]) -> Result<()> {
        self.check_output_len(out)?;
        for (i, &(re, im)) in self.wt.iter().enumerate() {
            let base = 2.0 * self.ws[i] as f64;
            out[i] = 20.0 * ((re * re + im * im) / base).sqrt().log10();
        }
        Ok(())
    }

    fn check_output_len(&self, out: &[f64]) -> Result<()> {
        if out.len() != self.config.width {
            return Err(CwtError::OutputLengthMismatch {
                expected: self.config.width,
                got: out.len(),
            });
        }
        Ok(())
    }
}

fn validate(cfg: &CwtConfig) -> Result<()> {
    if !(cfg.sigma > 0.0) {
        return Err(CwtError::InvalidSigma(cfg.sigma));
    }
    if !(cfg.gabor_threshold > 0.0 && cfg.gabor_threshold < 1.0) {
        return Err(CwtError::InvalidGaborThreshold(cfg.gabor_threshold));
    }
    if !(cfg.fl > 0.0 && cfg.fl < cfg.fh) {
        return Err(CwtError::InvalidRange {
            fl: cfg.fl,
            fh: cfg.fh,
        });
    }
    if cfg.width < MIN_WIDTH {
        return Err(CwtError::InvalidWidth(cfg.width));
    }
    Ok(())
}
