//! Channel ranges and reference values for color conversion
//!
//! Compile-time constants shared by the conversion engine, the color
//! value object and the palette generators.

/// Upper bounds of each color space's channels
///
/// Every lower bound is zero.
pub mod ranges {
    /// Maximum of an 8-bit RGB channel
    pub const RGB_MAX: f64 = 255.0;

    /// Maximum hue in degrees
    pub const HUE_MAX: f64 = 360.0;

    /// Maximum of any percentage channel (saturation, lightness, value, CMYK)
    pub const PERCENT_MAX: f64 = 100.0;

    /// Per-channel maxima for HSL and HSV
    pub const HUE_SPACE_MAX: [f64; 3] = [HUE_MAX, PERCENT_MAX, PERCENT_MAX];

    /// Per-channel maxima for RGB
    pub const RGB_SPACE_MAX: [f64; 3] = [RGB_MAX, RGB_MAX, RGB_MAX];

    /// Per-channel maxima for CMYK
    pub const CMYK_SPACE_MAX: [f64; 4] = [PERCENT_MAX; 4];
}

/// YIQ luma used for light/dark classification
pub mod luma {
    /// Red weight (per mille)
    pub const RED_WEIGHT: f64 = 299.0;

    /// Green weight (per mille)
    pub const GREEN_WEIGHT: f64 = 587.0;

    /// Blue weight (per mille)
    pub const BLUE_WEIGHT: f64 = 114.0;

    /// Luma below this value is dark
    pub const DARK_THRESHOLD: f64 = 128.0;
}

/// Manipulation operator defaults
pub mod adjust {
    /// Relative ratio applied by lighten/darken/saturate/desaturate
    pub const DEFAULT_RATIO: f64 = 0.5;
}

/// Palette generation parameters
pub mod harmony {
    /// Hue offsets of a triad
    pub const TRIAD_OFFSETS: [f64; 3] = [0.0, 120.0, 240.0];

    /// Hue offsets of a tetrad
    pub const TETRAD_OFFSETS: [f64; 4] = [0.0, 90.0, 180.0, 270.0];

    /// Hue offsets of a split complement
    pub const SPLIT_COMPLEMENT_OFFSETS: [f64; 3] = [0.0, 72.0, 216.0];

    /// Default number of analogous colors
    pub const ANALOGOUS_RESULTS: usize = 6;

    /// Default number of slices the hue circle is cut into for analogous colors
    pub const ANALOGOUS_SLICES: usize = 30;

    /// Default number of monochromatic colors
    pub const MONOCHROMATIC_RESULTS: usize = 6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights_sum_to_one_thousand() {
        let total = luma::RED_WEIGHT + luma::GREEN_WEIGHT + luma::BLUE_WEIGHT;
        assert_eq!(total, 1000.0);
        assert!(luma::DARK_THRESHOLD < ranges::RGB_MAX);
    }

    #[test]
    fn test_harmony_offsets_within_circle() {
        let all = harmony::TRIAD_OFFSETS
            .iter()
            .chain(harmony::TETRAD_OFFSETS.iter())
            .chain(harmony::SPLIT_COMPLEMENT_OFFSETS.iter());
        for offset in all {
            assert!(*offset >= 0.0 && *offset < ranges::HUE_MAX);
        }
    }

    #[test]
    fn test_defaults_are_positive() {
        assert!(harmony::ANALOGOUS_RESULTS > 0);
        assert!(harmony::ANALOGOUS_SLICES > 0);
        assert!(harmony::MONOCHROMATIC_RESULTS > 0);
        assert!(adjust::DEFAULT_RATIO > 0.0 && adjust::DEFAULT_RATIO <= 1.0);
    }
}
