//! An RGB raster renderer for spectral columns: power/amplitude column
//! draws, gridlines, and glyph-labeled axes over a plain byte buffer.

mod config;
mod error;
mod font;

pub use config::{FramebufferConfig, FramebufferOptions};
pub use error::{RenderError, Result};

use spectra_core::round_half_even;
use tracing::{debug, trace};

const BYTES_PER_PIXEL: usize = 3;

pub struct Framebuffer {
    config: FramebufferConfig,
    raster: Vec<u8>,
    stride: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize, options: FramebufferOptions) -> Result<Self> {
        let mut config = FramebufferConfig::new(width, height);
        options.apply_to(&mut config);
        Self::from_config(config)
    }

    fn from_config(config: FramebufferConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 || config.column_step == 0 {
            return Err(RenderError::InvalidDimensions {
                width: config.width,
                height: config.height,
                column_step: config.column_step,
            });
        }
        let stride = (config.margin_x + config.width * config.column_step) * BYTES_PER_PIXEL;
        let rows = config.height + config.margin_y;
        debug!(
            width = config.width,
            height = config.height,
            column_step = config.column_step,
            "framebuffer constructed"
        );
        Ok(Framebuffer {
            config,
            raster: vec![0u8; stride * rows],
            stride,
        })
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn config(&self) -> &FramebufferConfig {
        &self.config
    }

    /// Row-major, top-down RGB bytes: `(margin_x + width*column_step)` pixels
    /// per row, `(height + margin_y)` rows.
    pub fn to_bytes(&self) -> &[u8] {
        &self.raster
    }

    fn set_pixel(&mut self, row: usize, col: usize, rgb: (u8, u8, u8)) {
        let offset = row * self.stride + col * BYTES_PER_PIXEL;
        self.raster[offset] = rgb.0;
        self.raster[offset + 1] = rgb.1;
        self.raster[offset + 2] = rgb.2;
    }

    fn pixel(&self, row: usize, col: usize) -> (u8, u8, u8) {
        let offset = row * self.stride + col * BYTES_PER_PIXEL;
        (self.raster[offset], self.raster[offset + 1], self.raster[offset + 2])
    }

    fn fill_column_block(&mut self, col: usize, row: usize, rgb: (u8, u8, u8)) {
        let x0 = self.config.margin_x + col * self.config.column_step;
        for x in x0..x0 + self.config.column_step {
            self.set_pixel(row, x, rgb);
        }
    }

    fn check_column(&self, col: usize) -> Result<()> {
        if col >= self.config.width {
            return Err(RenderError::InvalidColumn {
                col,
                width: self.config.width,
            });
        }
        Ok(())
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.config.height {
            return Err(RenderError::InvalidRow {
                row,
                height: self.config.height,
            });
        }
        Ok(())
    }

    fn check_data_len(&self, data: &[f64]) -> Result<()> {
        if data.len() != self.config.height {
            return Err(RenderError::DataLengthMismatch {
                expected: self.config.height,
                got: data.len(),
            });
        }
        Ok(())
    }

    /// Paints one spectral column from raw power-dB values (STFT
    /// `calc_power` domain). `v = clamp(round(x*3.5), 0, 255)`, RGB =
    /// `(v/3, v, v/2)` with integer division.
    pub fn draw_power(&mut self, col: usize, data: &[f64]) -> Result<()> {
        self.check_column(col)?;
        self.check_data_len(data)?;
        let h = self.config.height;
        for r in 0..h {
            let x = data[h - 1 - r];
            let v = round_half_even(x * 3.5).clamp(0.0, 255.0) as u8;
            self.fill_column_block(col, r, pixel_from_level(v));
        }
        Ok(())
    }

    /// Paints one spectral column from amplitude-dB values, mapped
    /// linearly between `floor` and `ceil`.
    pub fn draw_amplitude(&mut self, col: usize, data: &[f64]) -> Result<()> {
        self.check_column(col)?;
        self.check_data_len(data)?;
        let h = self.config.height;
        let ceil = self.config.ceil;
        let floor = self.config.floor;
        let range = ceil - floor;
        for r in 0..h {
            let x = data[h - 1 - r];
            let v: u8 = if x >= ceil {
                255
            } else if x <= floor {
                0
            } else {
                round_half_even(255.0 * (x - floor) / range).clamp(0.0, 255.0) as u8
            };
            self.fill_column_block(col, r, pixel_from_level(v));
        }
        Ok(())
    }

    /// Saturates red to 0xff across the full raster row and draws `label`
    /// in red just above the line.
    pub fn hline(&mut self, row: usize, label: &str) -> Result<()> {
        self.check_row(row)?;
        let pixels_per_row = self.stride / BYTES_PER_PIXEL;
        for x in 0..pixels_per_row {
            let (_, g, b) = self.pixel(row, x);
            self.set_pixel(row, x, (0xff, g, b));
        }
        self.write_label(row as isize - 11, 4, label, (0xff, 0x00, 0x00));
        trace!(row, "hline drawn");
        Ok(())
    }

    /// Tints one raster column (red/green +0x40 saturating, blue pinned to
    /// 0xff) and draws `label` in blue-tinted color below the plot.
    pub fn vline(&mut self, col: usize, label: &str) -> Result<()> {
        self.check_column(col)?;
        let x = self.config.margin_x + col * self.config.column_step;
        let rows = self.config.height + self.config.margin_y;
        for row in 0..rows {
            let (r, g, _) = self.pixel(row, x);
            self.set_pixel(row, x, (r.saturating_add(0x40), g.saturating_add(0x40), 0xff));
        }
        let label_col = x + 4;
        self.write_label((self.config.height + 14) as isize, label_col as isize, label, (0x80, 0x80, 0xff));
        trace!(col, "vline drawn");
        Ok(())
    }

    fn write_label(&mut self, row0: isize, col0: isize, text: &str, rgb: (u8, u8, u8)) {
        let raster_rows = (self.raster.len() / self.stride) as isize;
        let raster_cols = (self.stride / BYTES_PER_PIXEL) as isize;
        for (i, byte) in text.bytes().enumerate() {
            let glyph = font::glyph_for(byte);
            let char_col0 = col0 + (i * font::GLYPH_ADVANCE) as isize;
            for r in 0..font::GLYPH_ROWS {
                let row = row0 + r as isize;
                if row < 0 || row >= raster_rows {
                    continue;
                }
                let packed = glyph[r];
                for k in 0..font::GLYPH_COLS {
                    if packed & (0x80 >> k) == 0 {
                        continue;
                    }
                    let col = char_col0 + k as isize;
                    if col < 0 || col >= raster_cols {
                        continue;
                    }
                    self.set_pixel(row as usize, col as usize, rgb);
                }
            }
        }
    }
}

fn pixel_from_level(v: u8) -> (u8, u8, u8) {
    (v / 3, v, v / 2)
}
