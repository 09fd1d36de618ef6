//! Color-space conversions between the host attribute model and RGB.
//!
//! Both conversions are total: every input produces a valid [`Color`],
//! with degenerate values clamped away rather than rejected.

use crate::types::Color;

/// Convert CIE-1931 xy chromaticity coordinates to an sRGB color.
///
/// `x` and `y` are 16-bit values on the host model's scale, where the
/// normalized coordinate is `raw / 65535`. Luminance is assumed to be 1;
/// the result carries chromaticity only and brightness travels separately
/// in the dimming field.
///
/// # Examples
///
/// ```
/// use wiz_bridge_rs::convert::xy_to_rgb;
///
/// // D65 white point (x=0.3127, y=0.3290) comes out near full white.
/// let white = xy_to_rgb(20493, 21561);
/// assert!(white.red() > 250 && white.green() > 250 && white.blue() > 250);
/// ```
pub fn xy_to_rgb(x: u16, y: u16) -> Color {
    let fx = x as f32 / 65535.0;
    let mut fy = y as f32 / 65535.0;

    // Prevent division by zero
    if fy < 0.001 {
        fy = 0.001;
    }

    let fz = 1.0 - fx - fy;

    // Assume full luminance for the conversion
    let big_y = 1.0f32;
    let big_x = (big_y / fy) * fx;
    let big_z = (big_y / fy) * fz;

    // XYZ to linear RGB (sRGB D65 matrix)
    let r = big_x * 3.2406 - big_y * 1.5372 - big_z * 0.4986;
    let g = -big_x * 0.9689 + big_y * 1.8758 + big_z * 0.0415;
    let b = big_x * 0.0557 - big_y * 0.2040 + big_z * 1.0570;

    Color::rgb(gamma_encode(r), gamma_encode(g), gamma_encode(b))
}

/// sRGB gamma encoding of one linear channel, clamped to [0,1] and
/// truncated onto the 0-255 scale.
fn gamma_encode(linear: f32) -> u8 {
    let c = if linear <= 0.0031308 {
        12.92 * linear
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    };
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

/// Convert HSV to RGB using integer percentage arithmetic.
///
/// `hue` is in degrees (0-360), `saturation` and `value` in percent
/// (0-100, clamped). The intermediate p/q/t terms stay in the 0-100
/// percentage domain until the final 0-255 scale; converting earlier
/// changes the rounding at sector boundaries. Hue values of 360 and
/// above fall into the last sector.
///
/// When saturation is 0 the result is achromatic: `value` replicated
/// unscaled on all three channels. Callers that need the 0-255 scale on
/// that branch own the conversion.
///
/// # Examples
///
/// ```
/// use wiz_bridge_rs::convert::hsv_to_rgb;
/// use wiz_bridge_rs::Color;
///
/// assert_eq!(hsv_to_rgb(0, 100, 100), Color::rgb(255, 0, 0));
/// assert_eq!(hsv_to_rgb(120, 100, 100), Color::rgb(0, 255, 0));
/// ```
pub fn hsv_to_rgb(hue: u16, saturation: u8, value: u8) -> Color {
    let sat = saturation.min(100) as u32;
    let val = value.min(100) as u32;

    if sat == 0 {
        let v = val as u8;
        return Color::rgb(v, v, v);
    }

    let region = hue / 60;
    let remainder = (hue as u32 - (region as u32 * 60)) * 6;

    let p = (val * (100 - sat)) / 100;
    let q = (val * (100 - ((sat * remainder) / 600))) / 100;
    let t = (val * (100 - ((sat * (600 - remainder)) / 600))) / 100;

    // Scale from the percentage domain to 0-255
    let val = ((val * 255) / 100) as u8;
    let p = ((p * 255) / 100) as u8;
    let q = ((q * 255) / 100) as u8;
    let t = ((t * 255) / 100) as u8;

    match region {
        0 => Color::rgb(val, t, p),
        1 => Color::rgb(q, val, p),
        2 => Color::rgb(p, val, t),
        3 => Color::rgb(p, q, val),
        4 => Color::rgb(t, p, val),
        _ => Color::rgb(val, p, q),
    }
}
