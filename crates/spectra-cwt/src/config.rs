//! CWT configuration and its partial-override options record: a record
//! of independently optional fields, not a dynamic string map.

use spectra_core::ScaleMode;

#[derive(Debug, Clone, Copy)]
pub struct CwtConfig {
    pub sigma: f64,
    pub gabor_threshold: f64,
    pub fs: f64,
    pub fl: f64,
    pub fh: f64,
    pub mode: ScaleMode,
    pub width: usize,
}

impl Default for CwtConfig {
    fn default() -> Self {
        CwtConfig {
            sigma: 3.0,
            gabor_threshold: 0.01,
            fs: 44100.0,
            fl: 100.0,
            fh: 2000.0,
            mode: ScaleMode::Log,
            width: 360,
        }
    }
}

/// Partial override record for the CWT's construction surface.
/// `frequency` is applied before `range`, so a caller that sets both
/// has `range` win.
#[derive(Debug, Clone, Copy, Default)]
pub struct CwtOptions {
    pub sigma: Option<f64>,
    pub gabor_threshold: Option<f64>,
    pub frequency: Option<f64>,
    pub range: Option<(f64, f64)>,
    pub scale_mode: Option<ScaleMode>,
    pub output_width: Option<usize>,
}

impl CwtOptions {
    pub(crate) fn apply_to(&self, cfg: &mut CwtConfig) {
        if let Some(sigma) = self.sigma {
            cfg.sigma = sigma;
        }
        if let Some(gth) = self.gabor_threshold {
            cfg.gabor_threshold = gth;
        }
        if let Some(freq) = self.frequency {
            cfg.fs = freq;
            cfg.fh = freq / 2.0;
            cfg.fl = freq / 5.0;
        }
        if let Some((fl, fh)) = self.range {
            cfg.fl = fl;
            cfg.fh = fh;
        }
        if let Some(mode) = self.scale_mode {
            cfg.mode = mode;
        }
        if let Some(width) = self.output_width {
            cfg.width = width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_none_leaves_defaults_unchanged() {
        let mut cfg = CwtConfig::default();
        let before = cfg;
        CwtOptions::default().apply_to(&mut cfg);
        assert_eq!(cfg.sigma, before.sigma);
        assert_eq!(cfg.fs, before.fs);
        assert_eq!(cfg.width, before.width);
    }

    #[test]
    fn frequency_sets_fs_fh_fl() {
        let mut cfg = CwtConfig::default();
        let opts = CwtOptions {
            frequency: Some(8000.0),
            ..Default::default()
        };
        opts.apply_to(&mut cfg);
        assert_eq!(cfg.fs, 8000.0);
        assert_eq!(cfg.fh, 4000.0);
        assert_eq!(cfg.fl, 1600.0);
    }

    #[test]
    fn range_overrides_frequency_derived_bounds() {
        let mut cfg = CwtConfig::default();
        let opts = CwtOptions {
            frequency: Some(8000.0),
            range: Some((50.0, 500.0)),
            ..Default::default()
        };
        opts.apply_to(&mut cfg);
        assert_eq!(cfg.fs, 8000.0);
        assert_eq!(cfg.fl, 50.0);
        assert_eq!(cfg.fh, 500.0);
    }

    #[test]
    fn only_touched_fields_change() {
        let mut cfg = CwtConfig::default();
        let opts = CwtOptions {
            sigma: Some(5.0),
            ..Default::default()
        };
        opts.apply_to(&mut cfg);
        assert_eq!(cfg.sigma, 5.0);
        assert_eq!(cfg.width, CwtConfig::default().width);
    }
}
