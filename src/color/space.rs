//! Color-space descriptors
//!
//! Value types for each supported space plus the enums used to name a
//! space, one of its channels, or a string output format. Only [`Rgb`] is
//! ever stored by a [`Color`](crate::Color); the others are computed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::ranges::{
    CMYK_SPACE_MAX, HUE_MAX, HUE_SPACE_MAX, PERCENT_MAX, RGB_MAX, RGB_SPACE_MAX,
};
use crate::error::{ColorError, Result};

/// Clamp `value` into `[min, max]`, mapping NaN to `min`
#[inline]
pub fn scale(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}

/// Round to the nearest integer inside `[0, max]`
#[inline]
fn quantize(value: f64, max: f64) -> f64 {
    // adding zero turns -0.0 into 0.0
    scale(value.round(), 0.0, max) + 0.0
}

/// Round a hue to whole degrees in `[0, 360)`
#[inline]
fn quantize_hue(value: f64) -> f64 {
    quantize(value, HUE_MAX) % HUE_MAX
}

/// A color space with a numeric channel tuple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Space {
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
}

impl Space {
    /// Number of channels in this space
    pub fn channel_count(self) -> usize {
        self.maxima().len()
    }

    /// Upper bound of every channel, in channel order
    pub fn maxima(self) -> &'static [f64] {
        match self {
            Space::Rgb => &RGB_SPACE_MAX,
            Space::Hsl | Space::Hsv => &HUE_SPACE_MAX,
            Space::Cmyk => &CMYK_SPACE_MAX,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Space::Rgb => "rgb",
            Space::Hsl => "hsl",
            Space::Hsv => "hsv",
            Space::Cmyk => "cmyk",
        }
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Space {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Space::Rgb),
            "hsl" => Ok(Space::Hsl),
            "hsv" => Ok(Space::Hsv),
            "cmyk" => Ok(Space::Cmyk),
            _ => Err(ColorError::UnknownFormat { name: s.to_string() }),
        }
    }
}

/// String output format accepted by [`Color::string`](crate::Color::string)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Rgb,
    Hsl,
    Hsv,
    Cmyk,
    Hex,
}

impl FromStr for Format {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("hex") {
            return Ok(Format::Hex);
        }
        Ok(match s.parse::<Space>()? {
            Space::Rgb => Format::Rgb,
            Space::Hsl => Format::Hsl,
            Space::Hsv => Format::Hsv,
            Space::Cmyk => Format::Cmyk,
        })
    }
}

/// 8-bit RGB, the canonical stored representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    #[serde(alias = "red")]
    pub r: u8,
    #[serde(alias = "green")]
    pub g: u8,
    #[serde(alias = "blue")]
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from real-valued channels, clamping to [0, 255] and rounding
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        let channel = |x: f64| scale(x, 0.0, RGB_MAX).round() as u8;
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.r as f64, self.g as f64, self.b as f64]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue (degrees), saturation and lightness (percent)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    #[serde(alias = "hue")]
    pub h: f64,
    #[serde(alias = "saturation")]
    pub s: f64,
    #[serde(alias = "lightness")]
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Clamp every channel into its domain
    pub fn clamped(self) -> Self {
        Self {
            h: scale(self.h, 0.0, HUE_MAX),
            s: scale(self.s, 0.0, PERCENT_MAX),
            l: scale(self.l, 0.0, PERCENT_MAX),
        }
    }

    /// Round every channel to an integer, wrapping hue into [0, 360)
    pub fn rounded(self) -> Self {
        Self {
            h: quantize_hue(self.h),
            s: quantize(self.s, PERCENT_MAX),
            l: quantize(self.l, PERCENT_MAX),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.l]
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Hsl { h, s, l } = self.rounded();
        write!(f, "hsl({}, {}%, {}%)", h, s, l)
    }
}

/// Hue (degrees), saturation and value (percent)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    #[serde(alias = "hue")]
    pub h: f64,
    #[serde(alias = "saturation")]
    pub s: f64,
    #[serde(alias = "value")]
    pub v: f64,
}

impl Hsv {
    pub const fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }

    /// Clamp every channel into its domain
    pub fn clamped(self) -> Self {
        Self {
            h: scale(self.h, 0.0, HUE_MAX),
            s: scale(self.s, 0.0, PERCENT_MAX),
            v: scale(self.v, 0.0, PERCENT_MAX),
        }
    }

    /// Round every channel to an integer, wrapping hue into [0, 360)
    pub fn rounded(self) -> Self {
        Self {
            h: quantize_hue(self.h),
            s: quantize(self.s, PERCENT_MAX),
            v: quantize(self.v, PERCENT_MAX),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.h, self.s, self.v]
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Hsv { h, s, v } = self.rounded();
        write!(f, "hsv({}, {}%, {}%)", h, s, v)
    }
}

/// Cyan, magenta, yellow and key (black), all percent
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cmyk {
    #[serde(alias = "cyan")]
    pub c: f64,
    #[serde(alias = "magenta")]
    pub m: f64,
    #[serde(alias = "yellow")]
    pub y: f64,
    #[serde(alias = "black")]
    pub k: f64,
}

impl Cmyk {
    pub const fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        Self { c, m, y, k }
    }

    /// Clamp every channel into [0, 100]
    pub fn clamped(self) -> Self {
        Self {
            c: scale(self.c, 0.0, PERCENT_MAX),
            m: scale(self.m, 0.0, PERCENT_MAX),
            y: scale(self.y, 0.0, PERCENT_MAX),
            k: scale(self.k, 0.0, PERCENT_MAX),
        }
    }

    pub fn rounded(self) -> Self {
        Self {
            c: quantize(self.c, PERCENT_MAX),
            m: quantize(self.m, PERCENT_MAX),
            y: quantize(self.y, PERCENT_MAX),
            k: quantize(self.k, PERCENT_MAX),
        }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.c, self.m, self.y, self.k]
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Cmyk { c, m, y, k } = self.rounded();
        write!(f, "cmyk({}, {}, {}, {})", c, m, y, k)
    }
}

/// A value in any one of the numeric color spaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorValue {
    Rgb(Rgb),
    Hsl(Hsl),
    Hsv(Hsv),
    Cmyk(Cmyk),
}

impl ColorValue {
    pub fn space(&self) -> Space {
        match self {
            ColorValue::Rgb(_) => Space::Rgb,
            ColorValue::Hsl(_) => Space::Hsl,
            ColorValue::Hsv(_) => Space::Hsv,
            ColorValue::Cmyk(_) => Space::Cmyk,
        }
    }

    /// Build a value from positional channels in the space's channel order
    ///
    /// Channels are clamped into range. Extra channels are ignored; too few
    /// is an error.
    pub fn from_channels(space: Space, channels: &[f64]) -> Result<Self> {
        let expected = space.channel_count();
        if channels.len() < expected {
            return Err(ColorError::InvalidChannelCount {
                space,
                expected,
                actual: channels.len(),
            });
        }
        let c = channels;
        let value = match space {
            Space::Rgb => ColorValue::Rgb(Rgb::from_channels(c[0], c[1], c[2])),
            Space::Hsl => ColorValue::Hsl(Hsl::new(c[0], c[1], c[2])),
            Space::Hsv => ColorValue::Hsv(Hsv::new(c[0], c[1], c[2])),
            Space::Cmyk => ColorValue::Cmyk(Cmyk::new(c[0], c[1], c[2], c[3])),
        };
        Ok(value.clamped())
    }

    /// Channels in the space's channel order
    pub fn channels(&self) -> Vec<f64> {
        match self {
            ColorValue::Rgb(rgb) => rgb.to_array().to_vec(),
            ColorValue::Hsl(hsl) => hsl.to_array().to_vec(),
            ColorValue::Hsv(hsv) => hsv.to_array().to_vec(),
            ColorValue::Cmyk(cmyk) => cmyk.to_array().to_vec(),
        }
    }

    /// Replace the channel at `index`, clamping the new value into range
    pub fn with_channel(self, index: usize, value: f64) -> Self {
        let mut channels = self.channels();
        if let Some(slot) = channels.get_mut(index) {
            *slot = value;
        }
        Self::from_channels(self.space(), &channels).unwrap_or(self)
    }

    pub fn clamped(self) -> Self {
        match self {
            ColorValue::Rgb(rgb) => ColorValue::Rgb(rgb),
            ColorValue::Hsl(hsl) => ColorValue::Hsl(hsl.clamped()),
            ColorValue::Hsv(hsv) => ColorValue::Hsv(hsv.clamped()),
            ColorValue::Cmyk(cmyk) => ColorValue::Cmyk(cmyk.clamped()),
        }
    }

    pub fn rounded(self) -> Self {
        match self {
            ColorValue::Rgb(rgb) => ColorValue::Rgb(rgb),
            ColorValue::Hsl(hsl) => ColorValue::Hsl(hsl.rounded()),
            ColorValue::Hsv(hsv) => ColorValue::Hsv(hsv.rounded()),
            ColorValue::Cmyk(cmyk) => ColorValue::Cmyk(cmyk.rounded()),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Rgb(rgb) => rgb.fmt(f),
            ColorValue::Hsl(hsl) => hsl.fmt(f),
            ColorValue::Hsv(hsv) => hsv.fmt(f),
            ColorValue::Cmyk(cmyk) => cmyk.fmt(f),
        }
    }
}

impl From<Rgb> for ColorValue {
    fn from(rgb: Rgb) -> Self {
        ColorValue::Rgb(rgb)
    }
}

impl From<Hsl> for ColorValue {
    fn from(hsl: Hsl) -> Self {
        ColorValue::Hsl(hsl)
    }
}

impl From<Hsv> for ColorValue {
    fn from(hsv: Hsv) -> Self {
        ColorValue::Hsv(hsv)
    }
}

impl From<Cmyk> for ColorValue {
    fn from(cmyk: Cmyk) -> Self {
        ColorValue::Cmyk(cmyk)
    }
}

/// A single channel of one of the color spaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Red,
    Green,
    Blue,
    /// HSL hue (identical to HSV hue)
    Hue,
    /// HSL saturation
    Saturation,
    Lightness,
    /// HSV saturation
    SaturationV,
    Value,
    Cyan,
    Magenta,
    Yellow,
    Black,
}

impl Channel {
    pub fn space(self) -> Space {
        match self {
            Channel::Red | Channel::Green | Channel::Blue => Space::Rgb,
            Channel::Hue | Channel::Saturation | Channel::Lightness => Space::Hsl,
            Channel::SaturationV | Channel::Value => Space::Hsv,
            Channel::Cyan | Channel::Magenta | Channel::Yellow | Channel::Black => Space::Cmyk,
        }
    }

    /// Position of the channel within its space's tuple
    pub fn index(self) -> usize {
        match self {
            Channel::Red | Channel::Hue | Channel::Cyan => 0,
            Channel::Green | Channel::Saturation | Channel::SaturationV | Channel::Magenta => 1,
            Channel::Blue | Channel::Lightness | Channel::Value | Channel::Yellow => 2,
            Channel::Black => 3,
        }
    }
}
