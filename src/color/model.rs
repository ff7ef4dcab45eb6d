//! The color value object
//!
//! A [`Color`] stores a single RGB triple. Every other representation is
//! computed from it on request, and every setter converts its argument back
//! to RGB and overwrites the stored value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use super::conversion::{self, rgb_to_hex, rgb_to_hsl};
use super::parse::{self, ColorInput};
use super::space::{Channel, Cmyk, ColorValue, Format, Hsl, Hsv, Rgb, Space};
use crate::constants::{adjust, luma};
use crate::error::{ColorError, Result};

/// A color backed by one canonical 8-bit RGB value
///
/// Mutators take `&mut self` and return `&mut Self` so they can be chained
/// on the same instance. Use [`Color::adjusted`] to apply a chain to a copy
/// instead.
///
/// ```
/// use colorama::Color;
///
/// let mut color = Color::new("#ff0000")?;
/// color.darken(0.5).desaturate(1.0);
/// assert_eq!(color.hex(), "404040");
/// # Ok::<(), colorama::ColorError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "ColorInput")]
pub struct Color {
    base: Rgb,
}

impl Color {
    /// Build a color from a string, channel map or positional channels
    ///
    /// # Errors
    ///
    /// Returns `ColorError::InvalidColorFormat` if the input matches no
    /// known grammar or discriminator key, and
    /// `ColorError::InvalidChannelCount` for a too-short channel array.
    pub fn new(input: impl Into<ColorInput>) -> Result<Self> {
        let parsed = parse::classify(&input.into())?;
        Ok(Self::from_value(parsed.value()))
    }

    /// Build a color from a value in any space, clamping it first
    pub fn from_value(value: impl Into<ColorValue>) -> Self {
        Self {
            base: conversion::to_rgb(value.into().clamped()),
        }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            base: Rgb::new(r, g, b),
        }
    }

    /// The stored RGB value
    pub fn base(&self) -> Rgb {
        self.base
    }

    pub fn rgb(&self) -> Rgb {
        self.base
    }

    pub fn hsl(&self) -> Hsl {
        self.hsl_exact().rounded()
    }

    pub fn hsv(&self) -> Hsv {
        conversion::rgb_to_hsv(self.base).rounded()
    }

    pub fn cmyk(&self) -> Cmyk {
        conversion::rgb_to_cmyk(self.base).rounded()
    }

    /// Six lowercase hex digits without `#`
    pub fn hex(&self) -> String {
        rgb_to_hex(self.base)
    }

    /// Current value in the given space, rounded to integers
    pub fn get(&self, space: Space) -> ColorValue {
        conversion::convert(ColorValue::Rgb(self.base), space).rounded()
    }

    /// Unrounded HSL, the starting point of manipulations and palettes
    pub(crate) fn hsl_exact(&self) -> Hsl {
        rgb_to_hsl(self.base)
    }

    /// Overwrite the color with a value from any space
    pub fn set(&mut self, value: impl Into<ColorValue>) -> &mut Self {
        *self = Self::from_value(value);
        self
    }

    pub fn set_rgb(&mut self, rgb: Rgb) -> &mut Self {
        self.set(rgb)
    }

    pub fn set_hsl(&mut self, hsl: Hsl) -> &mut Self {
        self.set(hsl)
    }

    pub fn set_hsv(&mut self, hsv: Hsv) -> &mut Self {
        self.set(hsv)
    }

    pub fn set_cmyk(&mut self, cmyk: Cmyk) -> &mut Self {
        self.set(cmyk)
    }

    /// Overwrite the color from a 3- or 6-digit hex string
    ///
    /// The color is left unchanged on error.
    pub fn set_hex(&mut self, hex: &str) -> Result<&mut Self> {
        let rgb = conversion::hex_to_rgb(hex.trim())
            .ok_or_else(|| ColorError::invalid_format(hex))?;
        Ok(self.set(rgb))
    }

    /// Overwrite the color from any constructor input
    pub fn set_input(&mut self, input: impl Into<ColorInput>) -> Result<&mut Self> {
        *self = Self::new(input)?;
        Ok(self)
    }

    /// A single channel of the current value, rounded like [`Color::get`]
    pub fn channel(&self, channel: Channel) -> f64 {
        self.get(channel.space()).channels()[channel.index()]
    }

    /// Replace a single channel, keeping the other channels of its space
    pub fn set_channel(&mut self, channel: Channel, value: f64) -> &mut Self {
        let current = conversion::from_rgb(self.base, channel.space());
        self.set(current.with_channel(channel.index(), value))
    }

    /// Render in the named format: `rgb`, `hsl`, `hsv`, `cmyk` or `hex`
    ///
    /// Returns `None` for any other name.
    pub fn string(&self, format: &str) -> Option<String> {
        format.parse::<Format>().ok().map(|format| self.to_css(format))
    }

    /// Render in CSS functional syntax, or `#rrggbb` for hex
    pub fn to_css(&self, format: Format) -> String {
        match format {
            Format::Rgb => self.rgb().to_string(),
            Format::Hsl => self.hsl().to_string(),
            Format::Hsv => self.hsv().to_string(),
            Format::Cmyk => self.cmyk().to_string(),
            Format::Hex => format!("#{}", self.hex()),
        }
    }

    /// Invert every RGB channel
    pub fn negate(&mut self) -> &mut Self {
        let Rgb { r, g, b } = self.base;
        self.base = Rgb::new(u8::MAX - r, u8::MAX - g, u8::MAX - b);
        self
    }

    /// Raise lightness by `lightness * ratio` (default 0.5)
    pub fn lighten(&mut self, ratio: impl Into<Option<f64>>) -> &mut Self {
        let ratio = ratio.into().unwrap_or(adjust::DEFAULT_RATIO);
        self.adjust_hsl(|hsl| hsl.l += hsl.l * ratio)
    }

    /// Lower lightness by `lightness * ratio` (default 0.5)
    pub fn darken(&mut self, ratio: impl Into<Option<f64>>) -> &mut Self {
        let ratio = ratio.into().unwrap_or(adjust::DEFAULT_RATIO);
        self.adjust_hsl(|hsl| hsl.l -= hsl.l * ratio)
    }

    /// Raise saturation by `saturation * ratio` (default 0.5)
    pub fn saturate(&mut self, ratio: impl Into<Option<f64>>) -> &mut Self {
        let ratio = ratio.into().unwrap_or(adjust::DEFAULT_RATIO);
        self.adjust_hsl(|hsl| hsl.s += hsl.s * ratio)
    }

    /// Lower saturation by `saturation * ratio` (default 0.5)
    pub fn desaturate(&mut self, ratio: impl Into<Option<f64>>) -> &mut Self {
        let ratio = ratio.into().unwrap_or(adjust::DEFAULT_RATIO);
        self.adjust_hsl(|hsl| hsl.s -= hsl.s * ratio)
    }

    pub fn greyscale(&mut self) -> &mut Self {
        self.desaturate(1.0)
    }

    fn adjust_hsl(&mut self, f: impl FnOnce(&mut Hsl)) -> &mut Self {
        let mut hsl = self.hsl_exact();
        f(&mut hsl);
        self.set(hsl)
    }

    /// Apply a chain of mutators to a copy, leaving `self` untouched
    ///
    /// ```
    /// use colorama::Color;
    ///
    /// let red = Color::new("red")?;
    /// let pink = red.adjusted(|c| c.lighten(0.5).desaturate(0.2));
    /// assert_eq!(red.hex(), "ff0000");
    /// assert_ne!(pink, red);
    /// # Ok::<(), colorama::ColorError>(())
    /// ```
    pub fn adjusted<F>(&self, f: F) -> Color
    where
        F: FnOnce(&mut Color) -> &mut Color,
    {
        let mut copy = *self;
        f(&mut copy);
        copy
    }

    /// YIQ luma in [0, 255]
    pub fn luma(&self) -> f64 {
        let [r, g, b] = self.base.to_array();
        (r * luma::RED_WEIGHT + g * luma::GREEN_WEIGHT + b * luma::BLUE_WEIGHT) / 1000.0
    }

    pub fn dark(&self) -> bool {
        self.luma() < luma::DARK_THRESHOLD
    }

    pub fn light(&self) -> bool {
        !self.dark()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css(Format::Rgb))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<ColorInput> for Color {
    type Error = ColorError;

    fn try_from(input: ColorInput) -> Result<Self> {
        Self::new(input)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self { base: rgb }
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        color.base
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css(Format::Hex))
    }
}
