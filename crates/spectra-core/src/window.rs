//! Window-function tables shared by the STFT engine.

use crate::{CoreError, Result};
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Rectangular,
    Hamming,
    Hann,
    Blackman,
    BlackmanNuttall,
    FlatTop,
}

impl WindowKind {
    /// Parse a case-insensitive identifier, as accepted by the engine's
    /// `set_window` option surface.
    pub fn parse(tag: &str) -> Result<Self> {
        match tag.to_ascii_uppercase().as_str() {
            "RECTANGULAR" => Ok(WindowKind::Rectangular),
            "HAMMING" => Ok(WindowKind::Hamming),
            "HANN" => Ok(WindowKind::Hann),
            "BLACKMAN" => Ok(WindowKind::Blackman),
            "BLACKMAN_NUTTALL" => Ok(WindowKind::BlackmanNuttall),
            "FLAT_TOP" => Ok(WindowKind::FlatTop),
            other => Err(CoreError::UnknownWindow(other.to_string())),
        }
    }

    /// The canonical tag `parse` accepts back for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            WindowKind::Rectangular => "RECTANGULAR",
            WindowKind::Hamming => "HAMMING",
            WindowKind::Hann => "HANN",
            WindowKind::Blackman => "BLACKMAN",
            WindowKind::BlackmanNuttall => "BLACKMAN_NUTTALL",
            WindowKind::FlatTop => "FLAT_TOP",
        }
    }
}

impl Default for WindowKind {
    fn default() -> Self {
        WindowKind::Blackman
    }
}

/// A precomputed window table of length `n`, regenerated whenever the
/// capacity or the window kind changes.
#[derive(Debug, Clone)]
pub struct WindowTable {
    kind: WindowKind,
    coefficients: Vec<f64>,
}

impl WindowTable {
    pub fn new(kind: WindowKind, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(CoreError::InvalidCapacity(n));
        }
        Ok(WindowTable {
            kind,
            coefficients: Self::calculate(kind, n),
        })
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Regenerate in place for a (possibly new) kind, keeping the length.
    pub fn set_kind(&mut self, kind: WindowKind) {
        self.kind = kind;
        self.coefficients = Self::calculate(kind, self.coefficients.len());
    }

    pub fn apply(&self, samples: &[f64], out: &mut [f64]) -> Result<()> {
        if samples.len() != self.coefficients.len() || out.len() != self.coefficients.len() {
            return Err(CoreError::WindowSizeMismatch(
                samples.len(),
                self.coefficients.len(),
            ));
        }
        for ((s, w), o) in samples.iter().zip(&self.coefficients).zip(out.iter_mut()) {
            *o = s * w;
        }
        Ok(())
    }

    fn calculate(kind: WindowKind, n: usize) -> Vec<f64> {
        let mut coeffs = vec![0.0; n];
        let denom = (n - 1) as f64;
        for (i, c) in coeffs.iter_mut().enumerate() {
            let x = 2.0 * PI * i as f64 / denom;
            *c = match kind {
                WindowKind::Rectangular => 1.0,
                WindowKind::Hamming => 0.54 - 0.46 * x.cos(),
                WindowKind::Hann => 0.50 - 0.50 * x.cos(),
                WindowKind::Blackman => 0.42 - 0.50 * x.cos() + 0.08 * (2.0 * x).cos(),
                WindowKind::BlackmanNuttall => {
                    0.3635819 - 0.4891775 * x.cos() + 0.1365995 * (2.0 * x).cos()
                        - 0.0106411 * (3.0 * x).cos()
                }
                WindowKind::FlatTop => {
                    1.0 - 1.93 * x.cos() + 1.29 * (2.0 * x).cos() - 0.388 * (3.0 * x).cos()
                        + 0.032 * (4.0 * x).cos()
                }
            };
        }
        coeffs
    }
}
