//! Classification of constructor input
//!
//! Text is tried against each grammar in a fixed priority order:
//! 1. hex (`#f00`, `ff0000`)
//! 2. functional RGB (`rgb(255, 0, 0)`, `rgba(100%, 0%, 0%, 0.5)`)
//! 3. functional HSL (`hsl(0, 100%, 50%)`, `hsla(...)`)
//! 4. CSS color names
//!
//! Structured input is discriminated by its keys: `r`/`red` (RGB), then
//! `l`/`lightness` (HSL), then `v`/`value` (HSV), then `c`/`cyan` (CMYK).
//! Alpha components are recognized but never stored.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use log::{debug, trace};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use super::conversion::hex_to_rgb;
use super::named;
use super::space::{Cmyk, ColorValue, Hsl, Hsv, Rgb, Space};
use crate::constants::ranges::{PERCENT_MAX, RGB_MAX};
use crate::error::{ColorError, Result};

static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{3}|([0-9a-fA-F]{2}){3})$").expect("valid regex")
});

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^rgba?\(\s*(\d+(?:\.\d+)?%|\d+)\s*,\s*(\d+(?:\.\d+)?%|\d+)\s*,\s*(\d+(?:\.\d+)?%|\d+)\s*(?:,\s*([\d.]+)\s*)?\)$",
    )
    .expect("valid regex")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^hsla?\(\s*(\d+)\s*,\s*([\d.]+)%\s*,\s*([\d.]+)%\s*(?:,\s*([\d.]+)\s*)?\)$",
    )
    .expect("valid regex")
});

const RGB_KEYS: [[&str; 2]; 3] = [["r", "red"], ["g", "green"], ["b", "blue"]];
const HSL_KEYS: [[&str; 2]; 3] = [["h", "hue"], ["s", "saturation"], ["l", "lightness"]];
const HSV_KEYS: [[&str; 2]; 3] = [["h", "hue"], ["s", "saturation"], ["v", "value"]];
const CMYK_KEYS: [[&str; 2]; 4] = [
    ["c", "cyan"],
    ["m", "magenta"],
    ["y", "yellow"],
    ["k", "black"],
];

/// Anything a [`Color`](crate::Color) can be built from
///
/// Deserializes from a string, a map of channel names to numbers, or a
/// `[space, [channels...]]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorInput {
    /// Hex, functional notation or a color name
    Text(String),
    /// Channel name to value, e.g. `{"r": 255, "g": 0, "b": 0}`
    Map(BTreeMap<String, f64>),
    /// Positional channels in the space's channel order
    Array(Space, Vec<f64>),
}

impl ColorInput {
    /// Build a channel map from name/value pairs
    pub fn map<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        ColorInput::Map(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        ColorInput::Text(text.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        ColorInput::Text(text)
    }
}

impl From<BTreeMap<String, f64>> for ColorInput {
    fn from(map: BTreeMap<String, f64>) -> Self {
        ColorInput::Map(map)
    }
}

impl From<(Space, Vec<f64>)> for ColorInput {
    fn from((space, channels): (Space, Vec<f64>)) -> Self {
        ColorInput::Array(space, channels)
    }
}

impl From<ColorValue> for ColorInput {
    fn from(value: ColorValue) -> Self {
        ColorInput::Array(value.space(), value.channels())
    }
}

impl From<Rgb> for ColorInput {
    fn from(rgb: Rgb) -> Self {
        ColorValue::Rgb(rgb).into()
    }
}

impl From<Hsl> for ColorInput {
    fn from(hsl: Hsl) -> Self {
        ColorValue::Hsl(hsl).into()
    }
}

impl From<Hsv> for ColorInput {
    fn from(hsv: Hsv) -> Self {
        ColorValue::Hsv(hsv).into()
    }
}

impl From<Cmyk> for ColorInput {
    fn from(cmyk: Cmyk) -> Self {
        ColorValue::Cmyk(cmyk).into()
    }
}

/// Input after classification, with channels already clamped
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedColor {
    Hex(Rgb),
    RgbString { rgb: Rgb, alpha: Option<f64> },
    HslString { hsl: Hsl, alpha: Option<f64> },
    Named(Rgb),
    RgbObject(Rgb),
    HslObject(Hsl),
    HsvObject(Hsv),
    CmykObject(Cmyk),
    Array(ColorValue),
}

impl ParsedColor {
    /// The color value carried by this input
    pub fn value(&self) -> ColorValue {
        match *self {
            ParsedColor::Hex(rgb)
            | ParsedColor::RgbString { rgb, .. }
            | ParsedColor::Named(rgb)
            | ParsedColor::RgbObject(rgb) => ColorValue::Rgb(rgb),
            ParsedColor::HslString { hsl, .. } | ParsedColor::HslObject(hsl) => {
                ColorValue::Hsl(hsl)
            }
            ParsedColor::HsvObject(hsv) => ColorValue::Hsv(hsv),
            ParsedColor::CmykObject(cmyk) => ColorValue::Cmyk(cmyk),
            ParsedColor::Array(value) => value,
        }
    }

    /// Alpha component of a functional string, if one was given
    pub fn alpha(&self) -> Option<f64> {
        match *self {
            ParsedColor::RgbString { alpha, .. } | ParsedColor::HslString { alpha, .. } => alpha,
            _ => None,
        }
    }
}

/// Classify any constructor input
pub fn classify(input: &ColorInput) -> Result<ParsedColor> {
    match input {
        ColorInput::Text(text) => parse_str(text),
        ColorInput::Map(map) => parse_map(map),
        ColorInput::Array(space, channels) => {
            ColorValue::from_channels(*space, channels).map(ParsedColor::Array)
        }
    }
}

/// Parse a color string, trying each grammar in priority order
pub fn parse_str(input: &str) -> Result<ParsedColor> {
    let text = input.trim();

    if let Some(rgb) = parse_hex(text) {
        trace!("parsed {text:?} as hex");
        return Ok(ParsedColor::Hex(rgb));
    }
    if let Some(parsed) = parse_rgb_function(text) {
        trace!("parsed {text:?} as rgb()");
        return Ok(parsed);
    }
    if let Some(parsed) = parse_hsl_function(text) {
        trace!("parsed {text:?} as hsl()");
        return Ok(parsed);
    }
    if let Some(rgb) = named::lookup(text) {
        trace!("parsed {text:?} as a color name");
        return Ok(ParsedColor::Named(rgb));
    }

    debug!("no color grammar matched {input:?}");
    Err(ColorError::invalid_format(input))
}

fn parse_hex(text: &str) -> Option<Rgb> {
    if HEX_RE.is_match(text) {
        hex_to_rgb(text)
    } else {
        None
    }
}

fn parse_rgb_function(text: &str) -> Option<ParsedColor> {
    let caps = RGB_RE.captures(text)?;

    let channel = |i: usize| -> Option<f64> {
        let token = caps.get(i)?.as_str();
        match token.strip_suffix('%') {
            Some(percent) => percent
                .parse::<f64>()
                .ok()
                .map(|p| p * RGB_MAX / PERCENT_MAX),
            None => token.parse::<f64>().ok(),
        }
    };

    let rgb = Rgb::from_channels(channel(1)?, channel(2)?, channel(3)?);
    Some(ParsedColor::RgbString {
        rgb,
        alpha: alpha(&caps),
    })
}

fn parse_hsl_function(text: &str) -> Option<ParsedColor> {
    let caps = HSL_RE.captures(text)?;
    let number = |i: usize| caps.get(i)?.as_str().parse::<f64>().ok();

    let hsl = Hsl::new(number(1)?, number(2)?, number(3)?).clamped();
    Some(ParsedColor::HslString {
        hsl,
        alpha: alpha(&caps),
    })
}

fn alpha(caps: &Captures<'_>) -> Option<f64> {
    let alpha = caps.get(4)?.as_str().parse::<f64>().ok();
    if let Some(a) = alpha {
        trace!("discarding alpha component {a}");
    }
    alpha
}

/// Classify a channel map by its discriminator keys
pub fn parse_map(map: &BTreeMap<String, f64>) -> Result<ParsedColor> {
    let has = |[short, long]: [&str; 2]| map.contains_key(short) || map.contains_key(long);
    let channels = |keys: &[[&str; 2]]| -> Vec<f64> {
        keys.iter()
            .map(|[short, long]| map.get(*short).or_else(|| map.get(*long)).copied().unwrap_or(0.0))
            .collect()
    };

    let space = if has(RGB_KEYS[0]) {
        Space::Rgb
    } else if has(HSL_KEYS[2]) {
        Space::Hsl
    } else if has(HSV_KEYS[2]) {
        Space::Hsv
    } else if has(CMYK_KEYS[0]) {
        Space::Cmyk
    } else {
        debug!("no discriminator key in {:?}", map.keys().collect::<Vec<_>>());
        return Err(ColorError::invalid_format(format!("{map:?}")));
    };

    let keys: &[[&str; 2]] = match space {
        Space::Rgb => &RGB_KEYS,
        Space::Hsl => &HSL_KEYS,
        Space::Hsv => &HSV_KEYS,
        Space::Cmyk => &CMYK_KEYS,
    };

    Ok(match ColorValue::from_channels(space, &channels(keys))? {
        ColorValue::Rgb(rgb) => ParsedColor::RgbObject(rgb),
        ColorValue::Hsl(hsl) => ParsedColor::HslObject(hsl),
        ColorValue::Hsv(hsv) => ParsedColor::HsvObject(hsv),
        ColorValue::Cmyk(cmyk) => ParsedColor::CmykObject(cmyk),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_hex_forms() {
        for text in ["#ff0000", "ff0000", "#FF0000", "#f00", "F00", "  #f00  "] {
            assert_eq!(parse_str(text).unwrap(), ParsedColor::Hex(RED), "{text}");
        }
    }

    #[test]
    fn test_hex_wins_over_names() {
        // "fed" is hex-like and not a color name
        assert_eq!(parse_str("fed").unwrap(), ParsedColor::Hex(Rgb::new(0xff, 0xee, 0xdd)));
    }

    #[test]
    fn test_rgb_function() {
        assert_eq!(
            parse_str("rgb(255, 0, 0)").unwrap(),
            ParsedColor::RgbString {
                rgb: RED,
                alpha: None
            }
        );
        assert_eq!(
            parse_str("rgb(255,0,0)").unwrap().value(),
            ColorValue::Rgb(RED)
        );
    }

    #[test]
    fn test_rgba_alpha_is_captured() {
        let parsed = parse_str("rgba(10, 20, 30, 0.5)").unwrap();
        assert_eq!(parsed.value(), ColorValue::Rgb(Rgb::new(10, 20, 30)));
        assert_eq!(parsed.alpha(), Some(0.5));
    }

    #[test]
    fn test_rgb_percentages() {
        let parsed = parse_str("rgb(100%, 50%, 0%)").unwrap();
        assert_eq!(parsed.value(), ColorValue::Rgb(Rgb::new(255, 128, 0)));
    }

    #[test]
    fn test_rgb_function_clamps() {
        let parsed = parse_str("rgb(300, 0, 999999999999)").unwrap();
        assert_eq!(parsed.value(), ColorValue::Rgb(Rgb::new(255, 0, 255)));
    }

    #[test]
    fn test_hsl_function() {
        let parsed = parse_str("hsl(0, 100%, 50%)").unwrap();
        assert_eq!(parsed.value(), ColorValue::Hsl(Hsl::new(0.0, 100.0, 50.0)));

        let parsed = parse_str("HSLA(120, 50.5%, 25%, 1)").unwrap();
        assert_eq!(parsed.value(), ColorValue::Hsl(Hsl::new(120.0, 50.5, 25.0)));
        assert_eq!(parsed.alpha(), Some(1.0));
    }

    #[test]
    fn test_hsl_function_requires_percent_signs() {
        assert!(parse_str("hsl(0, 100, 50)").is_err());
    }

    #[test]
    fn test_hsl_function_clamps() {
        let parsed = parse_str("hsl(720, 150%, 50%)").unwrap();
        assert_eq!(parsed.value(), ColorValue::Hsl(Hsl::new(360.0, 100.0, 50.0)));
    }

    #[test]
    fn test_malformed_number_falls_through() {
        assert!(parse_str("hsl(0, 1.2.3%, 50%)").is_err());
    }

    #[test]
    fn test_named() {
        assert_eq!(parse_str("red").unwrap(), ParsedColor::Named(RED));
        assert_eq!(
            parse_str("Teal").unwrap(),
            ParsedColor::Named(Rgb::new(0, 128, 128))
        );
    }

    #[test]
    fn test_invalid_strings() {
        for text in ["", "#ff00", "rgb(1, 2)", "notacolor", "rgb(a, b, c)"] {
            let err = parse_str(text).unwrap_err();
            assert!(matches!(err, ColorError::InvalidColorFormat { .. }), "{text}");
        }
    }

    #[test]
    fn test_map_discriminators() {
        let rgb = ColorInput::map([("r", 300.0), ("g", -5.0), ("b", 10.0)]);
        assert_eq!(
            classify(&rgb).unwrap(),
            ParsedColor::RgbObject(Rgb::new(255, 0, 10))
        );

        let hsl = ColorInput::map([("hue", 0.0), ("saturation", 100.0), ("lightness", 50.0)]);
        assert_eq!(
            classify(&hsl).unwrap(),
            ParsedColor::HslObject(Hsl::new(0.0, 100.0, 50.0))
        );

        let hsv = ColorInput::map([("h", 0.0), ("s", 100.0), ("v", 100.0)]);
        assert_eq!(
            classify(&hsv).unwrap(),
            ParsedColor::HsvObject(Hsv::new(0.0, 100.0, 100.0))
        );

        let cmyk = ColorInput::map([("cyan", 0.0), ("magenta", 100.0), ("yellow", 100.0)]);
        assert_eq!(
            classify(&cmyk).unwrap(),
            ParsedColor::CmykObject(Cmyk::new(0.0, 100.0, 100.0, 0.0))
        );
    }

    #[test]
    fn test_map_zero_red_is_still_rgb() {
        let green = ColorInput::map([("r", 0.0), ("g", 255.0), ("b", 0.0)]);
        assert_eq!(
            classify(&green).unwrap(),
            ParsedColor::RgbObject(Rgb::new(0, 255, 0))
        );
    }

    #[test]
    fn test_map_priority() {
        // both red and lightness present: red wins
        let mixed = ColorInput::map([("red", 10.0), ("l", 50.0)]);
        assert_eq!(
            classify(&mixed).unwrap(),
            ParsedColor::RgbObject(Rgb::new(10, 0, 0))
        );
    }

    #[test]
    fn test_map_without_discriminator() {
        let err = classify(&ColorInput::map([("h", 10.0), ("s", 20.0)])).unwrap_err();
        assert!(matches!(err, ColorError::InvalidColorFormat { .. }));
    }

    #[test]
    fn test_array_input() {
        let input = ColorInput::Array(Space::Hsv, vec![0.0, 100.0, 100.0]);
        assert_eq!(
            classify(&input).unwrap().value(),
            ColorValue::Hsv(Hsv::new(0.0, 100.0, 100.0))
        );

        let short = ColorInput::Array(Space::Rgb, vec![1.0]);
        assert!(matches!(
            classify(&short).unwrap_err(),
            ColorError::InvalidChannelCount { .. }
        ));
    }

    #[test]
    fn test_input_deserializes_untagged() {
        let text: ColorInput = serde_json::from_str(r#""red""#).unwrap();
        assert_eq!(text, ColorInput::Text("red".into()));

        let map: ColorInput = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
        assert_eq!(classify(&map).unwrap(), ParsedColor::RgbObject(Rgb::new(1, 2, 3)));

        let array: ColorInput = serde_json::from_str(r#"["cmyk", [0, 0, 0, 100]]"#).unwrap();
        assert_eq!(array, ColorInput::Array(Space::Cmyk, vec![0.0, 0.0, 0.0, 100.0]));
    }
}
