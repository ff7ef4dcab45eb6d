//! Palette generation
//!
//! Every generator reads the unrounded HSL or HSV of the receiver and
//! returns freshly built colors. Hue arithmetic is done in degrees and
//! wrapped with `% 360`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::conversion::rgb_to_hsv;
use super::model::Color;
use super::space::{Hsl, Hsv};
use crate::config::PaletteConfig;
use crate::constants::harmony;
use crate::constants::ranges::{HUE_MAX, PERCENT_MAX};

/// A named palette generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scheme {
    Triad,
    Tetrad,
    SplitComplement,
    Analogous,
    Monochromatic,
}

impl Scheme {
    pub const ALL: [Scheme; 5] = [
        Scheme::Triad,
        Scheme::Tetrad,
        Scheme::SplitComplement,
        Scheme::Analogous,
        Scheme::Monochromatic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Triad => "triad",
            Scheme::Tetrad => "tetrad",
            Scheme::SplitComplement => "split_complement",
            Scheme::Analogous => "analogous",
            Scheme::Monochromatic => "monochromatic",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Color {
    /// Three colors 120 degrees apart, starting with the receiver's hue
    pub fn triad(&self) -> Vec<Color> {
        self.hue_offsets(&harmony::TRIAD_OFFSETS)
    }

    /// Four colors 90 degrees apart
    pub fn tetrad(&self) -> Vec<Color> {
        self.hue_offsets(&harmony::TETRAD_OFFSETS)
    }

    /// The receiver plus two colors at +72 and +216 degrees
    pub fn split_complement(&self) -> Vec<Color> {
        self.hue_offsets(&harmony::SPLIT_COMPLEMENT_OFFSETS)
    }

    /// Neighbouring hues on a wheel cut into `slices` segments
    ///
    /// The first color is a copy of the receiver. The walk then starts
    /// `floor(results / 2)` segments behind the receiver's hue and emits
    /// `results - 1` colors, each one segment further along the wheel.
    ///
    /// # Arguments
    ///
    /// * `results` - Number of colors returned (default 6)
    /// * `slices` - Number of segments on the hue wheel (default 30)
    pub fn analogous(
        &self,
        results: impl Into<Option<usize>>,
        slices: impl Into<Option<usize>>,
    ) -> Vec<Color> {
        let results = non_zero_or(results.into(), harmony::ANALOGOUS_RESULTS);
        let slices = non_zero_or(slices.into(), harmony::ANALOGOUS_SLICES);
        let step = HUE_MAX / slices as f64;

        let mut hsl = self.hsl_exact();
        let mut palette = Vec::with_capacity(results);
        palette.push(*self);

        hsl.h = (hsl.h - step * (results / 2) as f64 + 2.0 * HUE_MAX) % HUE_MAX;
        for _ in 1..results {
            hsl.h = (hsl.h + step) % HUE_MAX;
            palette.push(Color::from_value(hsl));
        }
        palette
    }

    /// Colors sharing the receiver's hue and saturation
    ///
    /// Value steps forward by `1 / results` of its range, wrapping back to
    /// black after full brightness.
    ///
    /// # Arguments
    ///
    /// * `results` - Number of colors returned (default 6)
    pub fn monochromatic(&self, results: impl Into<Option<usize>>) -> Vec<Color> {
        let results = non_zero_or(results.into(), harmony::MONOCHROMATIC_RESULTS);
        let Hsv { h, s, v } = rgb_to_hsv(self.base());
        let increment = 1.0 / results as f64;

        let mut value = v / PERCENT_MAX;
        (0..results)
            .map(|_| {
                let color = Color::from_value(Hsv::new(h, s, value * PERCENT_MAX));
                value = (value + increment) % 1.0;
                color
            })
            .collect()
    }

    /// Run a named generator, taking its parameters from `config`
    pub fn scheme(&self, scheme: Scheme, config: &PaletteConfig) -> Vec<Color> {
        match scheme {
            Scheme::Triad => self.triad(),
            Scheme::Tetrad => self.tetrad(),
            Scheme::SplitComplement => self.split_complement(),
            Scheme::Analogous => {
                self.analogous(config.analogous.results, config.analogous.slices)
            }
            Scheme::Monochromatic => self.monochromatic(config.monochromatic.results),
        }
    }

    fn hue_offsets(&self, offsets: &[f64]) -> Vec<Color> {
        let Hsl { h, s, l } = self.hsl_exact();
        offsets
            .iter()
            .map(|offset| Color::from_value(Hsl::new((h + offset) % HUE_MAX, s, l)))
            .collect()
    }
}

fn non_zero_or(value: Option<usize>, default: usize) -> usize {
    match value {
        Some(0) | None => default,
        Some(n) => n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::space::Rgb;

    fn hues(colors: &[Color]) -> Vec<f64> {
        colors.iter().map(|c| c.hsl().h).collect()
    }

    #[test]
    fn test_triad_of_red() {
        let palette = Color::from_rgb(255, 0, 0).triad();
        let rgbs: Vec<Rgb> = palette.iter().map(Color::rgb).collect();
        assert_eq!(
            rgbs,
            vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 0), Rgb::new(0, 0, 255)]
        );
    }

    #[test]
    fn test_tetrad_wraps_hue() {
        let palette = Color::from_rgb(255, 0, 255).tetrad();
        assert_eq!(hues(&palette), vec![300.0, 30.0, 120.0, 210.0]);
    }

    #[test]
    fn test_split_complement() {
        let palette = Color::from_rgb(255, 0, 0).split_complement();
        assert_eq!(hues(&palette), vec![0.0, 72.0, 216.0]);
    }

    #[test]
    fn test_offsets_keep_saturation_and_lightness() {
        let base = Color::new("hsl(30, 60%, 40%)").unwrap();
        for color in base.triad() {
            assert!((color.hsl().s - base.hsl().s).abs() <= 1.0);
            assert!((color.hsl().l - base.hsl().l).abs() <= 1.0);
        }
    }

    #[test]
    fn test_analogous_defaults() {
        let red = Color::from_rgb(255, 0, 0);
        let palette = red.analogous(None, None);
        assert_eq!(palette.len(), 6);
        assert_eq!(palette[0], red);
        assert_eq!(hues(&palette), vec![0.0, 336.0, 348.0, 0.0, 12.0, 24.0]);
    }

    #[test]
    fn test_analogous_custom_and_zero_fallback() {
        let red = Color::from_rgb(255, 0, 0);
        let palette = red.analogous(3, 12);
        // start = 330, then 0 and 30
        assert_eq!(hues(&palette), vec![0.0, 0.0, 30.0]);

        assert_eq!(red.analogous(0, 0), red.analogous(None, None));
        assert_eq!(red.analogous(1, None), vec![red]);
    }

    #[test]
    fn test_monochromatic_steps_value() {
        let palette = Color::from_rgb(255, 0, 0).monochromatic(None);
        assert_eq!(palette.len(), 6);
        assert_eq!(palette[0].hsv().v, 100.0);

        let expected = [100.0, 16.67, 33.33, 50.0, 66.67, 83.33];
        for (color, want) in palette.iter().zip(expected) {
            assert!((color.hsv().v - want).abs() <= 1.0, "{} vs {}", color.hsv().v, want);
        }
        for color in &palette[1..] {
            assert_eq!(color.hsv().h, 0.0);
            assert_eq!(color.hsv().s, 100.0);
        }
    }

    #[test]
    fn test_monochromatic_from_black_rises() {
        let palette = Color::from_rgb(0, 0, 0).monochromatic(4);
        let values: Vec<f64> = palette.iter().map(|c| c.hsv().v).collect();
        assert_eq!(values, vec![0.0, 25.0, 50.0, 75.0]);
    }

    #[test]
    fn test_generators_leave_receiver() {
        let color = Color::new("teal").unwrap();
        let _ = color.triad();
        let _ = color.analogous(None, None);
        let _ = color.monochromatic(None);
        assert_eq!(color.hex(), "008080");
    }

    #[test]
    fn test_scheme_uses_config() {
        let mut config = PaletteConfig::default();
        config.analogous.results = 4;
        config.monochromatic.results = 3;

        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(red.scheme(Scheme::Analogous, &config).len(), 4);
        assert_eq!(red.scheme(Scheme::Monochromatic, &config).len(), 3);
        assert_eq!(red.scheme(Scheme::Tetrad, &config), red.tetrad());
    }

    #[test]
    fn test_scheme_names() {
        assert_eq!(Scheme::SplitComplement.to_string(), "split_complement");
        let json = serde_json::to_string(&Scheme::ALL).unwrap();
        assert_eq!(
            json,
            r#"["triad","tetrad","split_complement","analogous","monochromatic"]"#
        );
    }
}
