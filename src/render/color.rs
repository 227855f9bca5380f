//! Bubble stroke colours
//!
//! Bubbles fade from dark green (full size) to dark red (smallest) by
//! interpolating hue in HSL space.

use palette::{FromColor, Hsl, RgbHue, Srgb};

/// Dark red, the colour of a vanishing bubble
const SMALL_RGB: (u8, u8, u8) = (172, 15, 11);
/// Hue of a full-size bubble (dark green, in turns)
const FULL_HUE: f64 = 0.283;

/// Stroke colour for a bubble of the given size, as a CSS `rgb()` string.
///
/// Saturation and lightness stay at the dark red's; only hue moves.
pub fn bubble_stroke(size_modifier: f64) -> String {
    let (r, g, b) = SMALL_RGB;
    let red = Srgb::new(r, g, b).into_format::<f64>();
    let mut hsl = Hsl::<palette::encoding::Srgb, f64>::from_color(red);

    let small = hsl.hue.into_positive_degrees();
    let full = FULL_HUE * 360.0;
    hsl.hue = RgbHue::from_degrees(small + (full - small) * size_modifier);

    let out = Srgb::<f64>::from_color(hsl).into_format::<u8>();
    format!("rgb({},{},{})", out.red, out.green, out.blue)
}
