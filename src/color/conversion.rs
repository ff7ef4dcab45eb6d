//! Color space conversion engine
//!
//! Stateless transforms between the color-space tuples:
//! - RGB to HSL, HSV and CMYK, and back
//! - direct HSL to HSV formulas (both directions)
//! - hexadecimal encoding of RGB
//!
//! Functions producing HSL, HSV or CMYK return unrounded values; functions
//! producing RGB round and clamp to 8-bit channels. Inputs are expected to
//! be in range already (see [`Hsl::clamped`] and friends).

use super::space::{Cmyk, ColorValue, Hsl, Hsv, Rgb, Space};
use crate::constants::ranges::{HUE_MAX, PERCENT_MAX, RGB_MAX};

/// Normalized min, max and hue shared by the HSL and HSV formulas
struct Chroma {
    min: f64,
    max: f64,
    delta: f64,
    hue: f64,
}

impl Chroma {
    fn of(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_array().map(|c| c / RGB_MAX);
        let min = r.min(g).min(b);
        let max = r.max(g).max(b);
        let delta = max - min;

        let sector = if delta == 0.0 {
            0.0
        } else if r == max {
            (g - b) / delta
        } else if g == max {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };

        let mut hue = (sector * 60.0).min(HUE_MAX);
        if hue < 0.0 {
            hue += HUE_MAX;
        }

        Self {
            min,
            max,
            delta,
            hue,
        }
    }
}

/// Convert RGB to HSL
///
/// Hue in degrees, saturation and lightness in percent.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let Chroma {
        min,
        max,
        delta,
        hue,
    } = Chroma::of(rgb);
    let l = (min + max) / 2.0;

    let s = if delta == 0.0 {
        0.0
    } else if l <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    Hsl::new(hue, s * PERCENT_MAX, l * PERCENT_MAX)
}

/// Convert RGB to HSV
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let Chroma {
        max, delta, hue, ..
    } = Chroma::of(rgb);
    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv::new(hue, s * PERCENT_MAX, max * PERCENT_MAX)
}

/// Convert RGB to CMYK
///
/// Pure black yields `cmyk(0, 0, 0, 100)`; the `k == 1` case would otherwise
/// divide zero by zero.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    let [r, g, b] = rgb.to_array().map(|c| c / RGB_MAX);
    let k = (1.0 - r).min(1.0 - g).min(1.0 - b);

    if k >= 1.0 {
        return Cmyk::new(0.0, 0.0, 0.0, PERCENT_MAX);
    }

    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);

    Cmyk::new(
        c * PERCENT_MAX,
        m * PERCENT_MAX,
        y * PERCENT_MAX,
        k * PERCENT_MAX,
    )
}

/// Convert HSL to RGB
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / HUE_MAX;
    let s = hsl.s / PERCENT_MAX;
    let l = hsl.l / PERCENT_MAX;

    if s == 0.0 {
        let grey = l * RGB_MAX;
        return Rgb::from_channels(grey, grey, grey);
    }

    let t2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let t1 = 2.0 * l - t2;

    // red leads the hue by a third of the circle, blue trails it
    let channel = |offset: f64| {
        let mut t3 = h + offset;
        if t3 < 0.0 {
            t3 += 1.0;
        }
        if t3 > 1.0 {
            t3 -= 1.0;
        }

        let value = if 6.0 * t3 < 1.0 {
            t1 + (t2 - t1) * 6.0 * t3
        } else if 2.0 * t3 < 1.0 {
            t2
        } else if 3.0 * t3 < 2.0 {
            t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
        } else {
            t1
        };
        value * RGB_MAX
    };

    Rgb::from_channels(channel(1.0 / 3.0), channel(0.0), channel(-1.0 / 3.0))
}

/// Convert HSV to RGB
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.h / 60.0;
    let s = hsv.s / PERCENT_MAX;
    let v = hsv.v / PERCENT_MAX;

    let sector = (h.floor() as i64).rem_euclid(6);
    let f = h - h.floor();

    let p = RGB_MAX * v * (1.0 - s);
    let q = RGB_MAX * v * (1.0 - s * f);
    let t = RGB_MAX * v * (1.0 - s * (1.0 - f));
    let v = RGB_MAX * v;

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb::from_channels(r, g, b)
}

/// Convert CMYK to RGB
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    let [c, m, y, k] = cmyk.to_array().map(|x| x / PERCENT_MAX);
    let channel = |ink: f64| (1.0 - (ink * (1.0 - k) + k).min(1.0)) * RGB_MAX;

    Rgb::from_channels(channel(c), channel(m), channel(y))
}

/// Convert HSL to HSV without passing through RGB
pub fn hsl_to_hsv(hsl: Hsl) -> Hsv {
    let s = hsl.s / PERCENT_MAX;
    let l = hsl.l / PERCENT_MAX * 2.0;

    let s = s * if l <= 1.0 { l } else { 2.0 - l };
    let v = (l + s) / 2.0;
    let sv = if l + s == 0.0 { 0.0 } else { 2.0 * s / (l + s) };

    Hsv::new(hsl.h, sv * PERCENT_MAX, v * PERCENT_MAX)
}

/// Convert HSV to HSL without passing through RGB
pub fn hsv_to_hsl(hsv: Hsv) -> Hsl {
    let s = hsv.s / PERCENT_MAX;
    let v = hsv.v / PERCENT_MAX;

    let l = (2.0 - s) * v;
    let divisor = if l <= 1.0 { l } else { 2.0 - l };
    let sl = if divisor == 0.0 { 0.0 } else { s * v / divisor };

    Hsl::new(hsv.h, sl * PERCENT_MAX, l / 2.0 * PERCENT_MAX)
}

/// Decode a 3- or 6-digit hex string, with or without a leading `#`
///
/// Returns `None` for anything else, including 4- and 8-digit forms.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |pair: &str| u8::from_str_radix(pair, 16).ok();
    match digits.len() {
        3 => {
            let nibble = |i: usize| channel(&digits[i..=i]).map(|n| n * 17);
            Some(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => Some(Rgb::new(
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        _ => None,
    }
}

/// Encode RGB as six lowercase hex digits, without `#`
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Convert a value into the target space
///
/// Dispatches on the (from, to) pair: direct formulas where they exist,
/// otherwise through RGB as the pivot.
pub fn convert(value: ColorValue, to: Space) -> ColorValue {
    match (value, to) {
        (ColorValue::Hsl(hsl), Space::Hsv) => ColorValue::Hsv(hsl_to_hsv(hsl)),
        (ColorValue::Hsv(hsv), Space::Hsl) => ColorValue::Hsl(hsv_to_hsl(hsv)),
        (value, to) if value.space() == to => value,
        (value, to) => from_rgb(to_rgb(value), to),
    }
}

/// Convert any value to RGB
pub fn to_rgb(value: ColorValue) -> Rgb {
    match value {
        ColorValue::Rgb(rgb) => rgb,
        ColorValue::Hsl(hsl) => hsl_to_rgb(hsl),
        ColorValue::Hsv(hsv) => hsv_to_rgb(hsv),
        ColorValue::Cmyk(cmyk) => cmyk_to_rgb(cmyk),
    }
}

/// Convert RGB into any space
pub fn from_rgb(rgb: Rgb, to: Space) -> ColorValue {
    match to {
        Space::Rgb => ColorValue::Rgb(rgb),
        Space::Hsl => ColorValue::Hsl(rgb_to_hsl(rgb)),
        Space::Hsv => ColorValue::Hsv(rgb_to_hsv(rgb)),
        Space::Cmyk => ColorValue::Cmyk(rgb_to_cmyk(rgb)),
    }
}
