//! Theme presets and ANSI escape sequence generation.
//!
//! The whole UI is drawn with two presentation colors, the *dark* variable and
//! the *light* variable. Text uses the dark color on the light color; selected
//! rows and buttons invert them. A [`Palette`] supplies the base pair of colors
//! and a [`ThemePreset`] decides which color goes to which variable:
//!
//! - `day`: dark variable = palette dark, light variable = palette light
//! - `night`: the two are swapped
//!
//! # Built-in Palettes
//!
//! - `classic`: `10, 10, 20` on `255, 255, 255` (default)
//! - `sepia`: warm brown on paper
//!
//! # TOML Format
//!
//! Colors are either CSS-style `r, g, b` triples or `#rrggbb` hex strings.
//!
//! ```toml
//! name = "my-palette"
//!
//! [colors]
//! dark = "10, 10, 20"
//! light = "#ffffff"
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookcase::ui::theme::{Palette, Theme, ThemePreset};
//!
//! let mut theme = Theme::new(Palette::default(), ThemePreset::Day);
//! let (dark, light) = (theme.color_dark(), theme.color_light());
//!
//! theme.set_preset(ThemePreset::Night);
//! assert_eq!(theme.color_dark(), light);
//! assert_eq!(theme.color_light(), dark);
//! ```

use crate::domain::error::{BookcaseError, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = BookcaseError;

    /// Parses `r, g, b` (whitespace optional) or `#rrggbb`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(BookcaseError::Theme(format!("invalid hex color '{s}'")));
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16)
                    .map_err(|e| BookcaseError::Theme(format!("invalid hex color '{s}': {e}")))
            };
            return Ok(Self(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        let channels = s
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| BookcaseError::Theme(format!("invalid color '{s}': {e}")))?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self(*r, *g, *b)),
            _ => Err(BookcaseError::Theme(format!(
                "invalid color '{s}': expected three channels"
            ))),
        }
    }
}

impl TryFrom<String> for Rgb {
    type Error = BookcaseError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}

/// Named assignment of palette colors to the two presentation variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreset {
    /// Dark text on a light background.
    #[default]
    Day,
    /// Light text on a dark background.
    Night,
}

impl ThemePreset {
    /// Picks the startup preset from the host's color-scheme preference.
    ///
    /// `None` means the preference is unavailable and selects `Day`.
    #[must_use]
    pub const fn from_color_scheme(scheme: Option<ColorScheme>) -> Self {
        match scheme {
            Some(ColorScheme::Dark) => Self::Night,
            Some(ColorScheme::Light) | None => Self::Day,
        }
    }

    /// Lowercase name as used in configuration and the settings form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Night => "night",
        }
    }

    /// The other preset.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Day => Self::Night,
            Self::Night => Self::Day,
        }
    }
}

impl FromStr for ThemePreset {
    type Err = BookcaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            other => Err(BookcaseError::Config(format!("unknown theme preset '{other}'"))),
        }
    }
}

/// The host's ambient light/dark preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Dark,
    Light,
}

impl FromStr for ColorScheme {
    type Err = BookcaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(BookcaseError::Config(format!("unknown color scheme '{other}'"))),
        }
    }
}

/// Base pair of colors that presets assign to the presentation variables.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Palette {
    /// Human-readable palette name.
    pub name: String,
    /// The two base colors.
    pub colors: PaletteColors,
}

/// The two base colors of a palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PaletteColors {
    /// Color of the dark variable under the day preset.
    pub dark: Rgb,
    /// Color of the light variable under the day preset.
    pub light: Rgb,
}

impl Palette {
    /// Loads a built-in palette by name (`classic` or `sepia`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "classic" => include_str!("../../themes/classic.toml"),
            "sepia" => include_str!("../../themes/sepia.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| BookcaseError::Theme(format!("failed to parse palette TOML: {e}")))
    }
}

impl Default for Palette {
    /// Returns the `classic` palette.
    ///
    /// # Panics
    ///
    /// Panics if the built-in palette fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("classic").expect("built-in classic palette should always parse")
    }
}

/// Active color state: a palette, a preset, and the resulting variable values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    palette: Palette,
    preset: ThemePreset,
    color_dark: Rgb,
    color_light: Rgb,
}

impl Theme {
    /// Creates a theme with the preset already applied.
    #[must_use]
    pub fn new(palette: Palette, preset: ThemePreset) -> Self {
        let mut theme = Self {
            color_dark: palette.colors.dark,
            color_light: palette.colors.light,
            palette,
            preset,
        };
        theme.set_preset(preset);
        theme
    }

    /// Assigns the palette colors to the dark/light variables for `preset`.
    pub fn set_preset(&mut self, preset: ThemePreset) {
        let PaletteColors { dark, light } = self.palette.colors;
        (self.color_dark, self.color_light) = match preset {
            ThemePreset::Day => (dark, light),
            ThemePreset::Night => (light, dark),
        };
        self.preset = preset;

        tracing::debug!(
            preset = preset.as_str(),
            color_dark = %self.color_dark,
            color_light = %self.color_light,
            "theme preset applied"
        );
    }

    /// The active preset.
    #[must_use]
    pub const fn preset(&self) -> ThemePreset {
        self.preset
    }

    /// Current value of the dark variable.
    #[must_use]
    pub const fn color_dark(&self) -> Rgb {
        self.color_dark
    }

    /// Current value of the light variable.
    #[must_use]
    pub const fn color_light(&self) -> Rgb {
        self.color_light
    }

    /// Name of the underlying palette.
    #[must_use]
    pub fn palette_name(&self) -> &str {
        &self.palette.name
    }

    /// Escape sequence for normal text: dark on light.
    #[must_use]
    pub fn text(&self) -> String {
        format!("{}{}", Self::fg(self.color_dark), Self::bg(self.color_light))
    }

    /// Escape sequence for selected rows and focused controls: light on dark.
    #[must_use]
    pub fn inverted(&self) -> String {
        format!("{}{}", Self::fg(self.color_light), Self::bg(self.color_dark))
    }

    /// Generates an ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(color: Rgb) -> String {
        let Rgb(r, g, b) = color;
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Generates an ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(color: Rgb) -> String {
        let Rgb(r, g, b) = color;
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// Returns the ANSI bold escape sequence (`\x1b[1m`).
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// Returns the ANSI dim escape sequence (`\x1b[2m`).
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Returns the ANSI reset escape sequence (`\x1b[0m`).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Palette::default(), ThemePreset::Day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_both_color_notations() {
        assert_eq!("10, 10, 20".parse::<Rgb>().unwrap(), Rgb(10, 10, 20));
        assert_eq!("255,255,255".parse::<Rgb>().unwrap(), Rgb(255, 255, 255));
        assert_eq!("#f4ecd8".parse::<Rgb>().unwrap(), Rgb(0xf4, 0xec, 0xd8));
        assert!("1, 2".parse::<Rgb>().is_err());
        assert!("300, 0, 0".parse::<Rgb>().is_err());
        assert!("#12345".parse::<Rgb>().is_err());
    }

    #[test]
    fn day_preset_uses_classic_values() {
        let theme = Theme::default();
        assert_eq!(theme.preset(), ThemePreset::Day);
        assert_eq!(theme.color_dark(), Rgb(10, 10, 20));
        assert_eq!(theme.color_light(), Rgb(255, 255, 255));
        assert_eq!(theme.color_dark().to_string(), "10, 10, 20");
    }

    #[test]
    fn night_swaps_and_day_restores_exactly() {
        let mut theme = Theme::new(Palette::default(), ThemePreset::Day);
        let original = (theme.color_dark(), theme.color_light());

        theme.set_preset(ThemePreset::Night);
        assert_eq!((theme.color_dark(), theme.color_light()), (original.1, original.0));

        theme.set_preset(ThemePreset::Day);
        assert_eq!((theme.color_dark(), theme.color_light()), original);
    }

    #[test]
    fn applying_the_same_preset_twice_is_stable() {
        let mut theme = Theme::new(Palette::default(), ThemePreset::Night);
        let once = theme.clone();
        theme.set_preset(ThemePreset::Night);
        assert_eq!(theme, once);
    }

    #[test]
    fn ambient_scheme_selects_startup_preset() {
        assert_eq!(ThemePreset::from_color_scheme(Some(ColorScheme::Dark)), ThemePreset::Night);
        assert_eq!(ThemePreset::from_color_scheme(Some(ColorScheme::Light)), ThemePreset::Day);
        assert_eq!(ThemePreset::from_color_scheme(None), ThemePreset::Day);
    }

    #[test]
    fn builtin_palettes_parse() {
        assert_eq!(Palette::from_name("sepia").unwrap().colors.light, Rgb(0xf4, 0xec, 0xd8));
        assert!(Palette::from_name("neon").is_none());
    }

    #[test]
    fn palette_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"mine\"\n[colors]\ndark = \"1, 2, 3\"\nlight = \"#0a0b0c\"").unwrap();

        let palette = Palette::from_file(file.path()).unwrap();
        assert_eq!(palette.colors.dark, Rgb(1, 2, 3));
        assert_eq!(palette.colors.light, Rgb(10, 11, 12));
    }

    #[test]
    fn palette_with_bad_color_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"bad\"\n[colors]\ndark = \"nope\"\nlight = \"1, 1, 1\"").unwrap();
        assert!(matches!(Palette::from_file(file.path()), Err(BookcaseError::Theme(_))));
    }

    #[test]
    fn preset_names_round_trip_through_config_strings() {
        for preset in [ThemePreset::Day, ThemePreset::Night] {
            assert_eq!(preset.as_str().parse::<ThemePreset>().unwrap(), preset);
        }
        assert!("dusk".parse::<ThemePreset>().is_err());
    }
}
