//! # Colorama
//!
//! A Rust crate for parsing, converting and deriving colors.
//!
//! This library provides:
//! - Parsing of hex, `rgb()`/`rgba()`, `hsl()`/`hsla()` and CSS named colors
//! - Structured input as channel maps or positional channel arrays
//! - Conversion between RGB, HSL, HSV, CMYK and hex
//! - Lighten, darken, saturate, desaturate, negate and greyscale operations
//! - Triad, tetrad, split-complement, analogous and monochromatic palettes
//!
//! ## Example
//!
//! ```rust
//! use colorama::{Color, Hsl};
//!
//! let mut color = Color::new("rgb(255, 0, 0)")?;
//! assert_eq!(color.hsl(), Hsl::new(0.0, 100.0, 50.0));
//!
//! color.lighten(0.5);
//! assert_eq!(color.string("hsl").as_deref(), Some("hsl(0, 100%, 75%)"));
//!
//! let hues: Vec<f64> = color.triad().iter().map(|c| c.hsl().h).collect();
//! assert_eq!(hues, vec![0.0, 120.0, 240.0]);
//! # Ok::<(), colorama::ColorError>(())
//! ```

pub mod color;
pub mod config;
pub mod constants;
pub mod error;

pub use color::{
    Channel, Cmyk, Color, ColorInput, ColorValue, Format, Hsl, Hsv, ParsedColor, Rgb, Scheme,
    Space,
};
pub use config::{Adjustment, PaletteConfig};
pub use error::{ColorError, Result};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_serialization() {
        let palettes = PaletteConfig::default().generate(&Color::new("teal").unwrap());

        let json = serde_json::to_string(&palettes).unwrap();
        let deserialized: Vec<(Scheme, Vec<Color>)> = serde_json::from_str(&json).unwrap();

        assert_eq!(palettes, deserialized);
    }
}
