//! Small numeric conventions shared across the engines and the renderer.

/// Round half to even (banker's rounding). `f64::round` rounds half away
/// from zero, which disagrees with this on tie values, so band-map
/// and CWT table construction route through this helper instead.
pub fn round_half_even(x: f64) -> f64 {
    let floor = x.floor();
    let diff = x - floor;
    if diff < 0.5 {
        floor
    } else if diff > 0.5 {
        floor + 1.0
    } else if (floor as i64) % 2 == 0 {
        floor
    } else {
        floor + 1.0
    }
}
