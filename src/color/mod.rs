//! Color model and conversion module
//!
//! This module handles parsing of color inputs, conversions between the
//! RGB, HSL, HSV and CMYK spaces, and palette generation on top of the
//! [`Color`] value object.

pub mod conversion;
pub mod model;
pub mod named;
pub mod parse;
pub mod scheme;
pub mod space;

pub use model::Color;
pub use parse::{ColorInput, ParsedColor};
pub use scheme::Scheme;
pub use space::{Channel, Cmyk, ColorValue, Format, Hsl, Hsv, Rgb, Space};
