//! HSV → RGB colour transform.
//!
//! Standard hue/saturation/value construction: chroma `c = v × s`,
//! secondary `x = c × (1 − |(h/60 mod 2) − 1|)`, offset `m = v − c`,
//! sector selection by 60° band.  Pure function, no side effects.
//!
//! The controller always calls this with s = v = 1 (only hue varies),
//! so the outputs land in [0, 255] by construction.  Wiring inversion
//! for active-low drivers happens in the RGB LED driver, not here.

/// Convert hue (degrees, [0, 360]), saturation and value ([0, 1]) into
/// 8-bit RGB intensities.  Hue 360 falls through the final sector and
/// produces the same triple as hue 0.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> (u8, u8, u8) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r1, g1, b1) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r1 + m) * 255.0) as u8,
        ((g1 + m) * 255.0) as u8,
        ((b1 + m) * 255.0) as u8,
    )
}
