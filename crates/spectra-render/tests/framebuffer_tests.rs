use spectra_render::{Framebuffer, FramebufferOptions};

#[test]
fn fresh_raster_is_all_zero() {
    let fb = Framebuffer::new(8, 4, FramebufferOptions::default()).unwrap();
    assert!(fb.to_bytes().iter().all(|&b| b == 0));
}

#[test]
fn draw_power_paints_expected_rgb_triplet() {
    let mut fb = Framebuffer::new(4, 1, FramebufferOptions::default()).unwrap();
    // x * 3.5 == 200 implies x == 200.0 / 3.5
    let x = 200.0 / 3.5;
    fb.draw_power(0, &[x]).unwrap();
    let bytes = fb.to_bytes();
    assert_eq!(&bytes[0..3], &[200 / 3, 200, 200 / 2]);
}

#[test]
fn draw_amplitude_saturates_at_ceil_and_floor() {
    let mut fb = Framebuffer::new(4, 2, FramebufferOptions::default()).unwrap();
    let ceil = fb.config().ceil;
    let floor = fb.config().floor;
    fb.draw_amplitude(0, &[ceil, floor]).unwrap();
    let bytes = fb.to_bytes();
    let stride = fb.to_bytes().len() / fb.height();
    let row0 = &bytes[0..3];
    let row1 = &bytes[stride..stride + 3];
    // row r reads data[h-1-r]: row0 <- data[1] (floor, v=0), row1 <- data[0] (ceil, v=255)
    assert_eq!(row0, &[0, 0, 0]);
    assert_eq!(row1, &[255 / 3, 255, 255 / 2]);
}

#[test]
fn hline_saturates_red_and_preserves_other_channels() {
    let mut fb = Framebuffer::new(4, 4, FramebufferOptions::default()).unwrap();
    fb.draw_power(1, &[128.0, 64.0, 32.0, 16.0]).unwrap();
    let before_row2: Vec<u8> = {
        let stride = fb.to_bytes().len() / (fb.height() + fb.config().margin_y);
        fb.to_bytes()[2 * stride..2 * stride + stride].to_vec()
    };
    fb.hline(2, "").unwrap();
    let stride = fb.to_bytes().len() / (fb.height() + fb.config().margin_y);
    let after_row2 = &fb.to_bytes()[2 * stride..2 * stride + stride];
    for px in 0..stride / 3 {
        assert_eq!(after_row2[px * 3], 0xff);
        assert_eq!(after_row2[px * 3 + 1], before_row2[px * 3 + 1]);
        assert_eq!(after_row2[px * 3 + 2], before_row2[px * 3 + 2]);
    }
}

#[test]
fn vline_tints_red_green_and_saturates_blue() {
    let mut fb = Framebuffer::new(4, 4, FramebufferOptions::default()).unwrap();
    fb.vline(2, "").unwrap();
    let stride = fb.to_bytes().len() / (fb.height() + fb.config().margin_y);
    let col_offset = 2 * 3;
    for row in 0..fb.height() {
        let px = &fb.to_bytes()[row * stride + col_offset..row * stride + col_offset + 3];
        assert_eq!(px, &[0x40, 0x40, 0xff]);
    }
}

#[test]
fn glyph_writes_outside_raster_cause_no_out_of_bounds_change() {
    let mut fb = Framebuffer::new(2, 2, FramebufferOptions::default()).unwrap();
    // row 0's label sits at row - 11, far above the raster; must not panic
    // and must leave every in-bounds byte untouched by the glyph itself.
    fb.hline(0, "A").unwrap();
    assert_eq!(fb.to_bytes().len(), 2 * 2 * 3);
}

#[test]
fn draw_power_rejects_mismatched_data_length() {
    let mut fb = Framebuffer::new(4, 4, FramebufferOptions::default()).unwrap();
    assert!(fb.draw_power(0, &[1.0, 2.0]).is_err());
}

#[test]
fn draw_rejects_out_of_range_column() {
    let mut fb = Framebuffer::new(4, 4, FramebufferOptions::default()).unwrap();
    assert!(fb.draw_power(10, &[0.0; 4]).is_err());
}

#[test]
fn hline_rejects_out_of_range_row() {
    let mut fb = Framebuffer::new(4, 4, FramebufferOptions::default()).unwrap();
    assert!(fb.hline(10, "x").is_err());
}

#[test]
fn options_override_ceil_and_floor() {
    let fb = Framebuffer::new(
        4,
        4,
        FramebufferOptions {
            ceil: Some(-5.0),
            floor: Some(-50.0),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(fb.config().ceil, -5.0);
    assert_eq!(fb.config().floor, -50.0);
}

#[test]
fn zero_width_is_rejected() {
    assert!(Framebuffer::new(0, 4, FramebufferOptions::default()).is_err());
}
