use alloc::string::String;
use core::{
    fmt::{self, Debug, Display},
    str::FromStr,
};

use crate::{
    Foreground, HexColorError, Hsv,
    parse::{format_hex_color, parse_hex_color, parse_hex_color_runtime},
};

/// A 32-bit color packed as `0xAARRGGBB`.
///
/// This is the value a swatch carries around: cheap to copy, compared and
/// hashed by its raw bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Argb(u32);

impl Argb {
    /// Red color.
    pub const RED: Self = Self::from_hex("#F44336");
    /// Pink color.
    pub const PINK: Self = Self::from_hex("#E91E63");
    /// Purple color.
    pub const PURPLE: Self = Self::from_hex("#9C27B0");
    /// Deep purple color.
    pub const DEEP_PURPLE: Self = Self::from_hex("#673AB7");
    /// Indigo color.
    pub const INDIGO: Self = Self::from_hex("#3F51B5");
    /// Blue color.
    pub const BLUE: Self = Self::from_hex("#2196F3");
    /// Light blue color.
    pub const LIGHT_BLUE: Self = Self::from_hex("#03A9F4");
    /// Cyan color.
    pub const CYAN: Self = Self::from_hex("#00BCD4");
    /// Teal color.
    pub const TEAL: Self = Self::from_hex("#009688");
    /// Green color.
    pub const GREEN: Self = Self::from_hex("#4CAF50");
    /// Light green color.
    pub const LIGHT_GREEN: Self = Self::from_hex("#8BC34A");
    /// Lime color.
    pub const LIME: Self = Self::from_hex("#CDDC39");
    /// Yellow color.
    pub const YELLOW: Self = Self::from_hex("#FFEB3B");
    /// Amber color.
    pub const AMBER: Self = Self::from_hex("#FFC107");
    /// Orange color.
    pub const ORANGE: Self = Self::from_hex("#FF9800");
    /// Deep orange color.
    pub const DEEP_ORANGE: Self = Self::from_hex("#FF5722");
    /// Brown color.
    pub const BROWN: Self = Self::from_hex("#795548");
    /// Grey color.
    pub const GREY: Self = Self::from_hex("#9E9E9E");
    /// Blue grey color.
    pub const BLUE_GREY: Self = Self::from_hex("#607D8B");
    /// Black color.
    pub const BLACK: Self = Self::from_hex("#000000");
    /// White color.
    pub const WHITE: Self = Self::from_hex("#FFFFFF");
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);

    /// Wraps a packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn from_u32(argb: u32) -> Self {
        Self(argb)
    }

    /// Creates a color from its four 8-bit channels.
    #[must_use]
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(
            ((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32,
        )
    }

    /// Creates a fully opaque color.
    #[must_use]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::from_argb(0xFF, red, green, blue)
    }

    /// Creates a color from a hex literal at compile time.
    ///
    /// Accepts the same forms as [`parse_hex_string`](crate::parse_hex_string)
    /// and panics on malformed input. Use [`Argb::try_from_hex`] for
    /// user-supplied text.
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        Self(parse_hex_color(hex))
    }

    /// Parses a hex color without panicking.
    ///
    /// # Errors
    ///
    /// Returns [`HexColorError`] if the text is not 6 or 8 hexadecimal digits
    /// after an optional `#`.
    pub fn try_from_hex(hex: &str) -> Result<Self, HexColorError> {
        parse_hex_color_runtime(hex).map(Self)
    }

    /// Returns the packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// The color with its alpha channel cleared.
    #[must_use]
    pub const fn rgb(self) -> Self {
        Self(self.0 & 0x00FF_FFFF)
    }

    /// Returns a copy of this color with the provided alpha.
    #[must_use]
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self(self.rgb().0 | ((alpha as u32) << 24))
    }

    /// Renders the color as uppercase hex, `RRGGBB` or `AARRGGBB`.
    #[must_use]
    pub fn to_hex(self, include_alpha: bool) -> String {
        format_hex_color(self.0, include_alpha)
    }

    /// Perceptual luminance on a 0–255 scale.
    #[must_use]
    pub fn luminance(self) -> f64 {
        0.114_f64.mul_add(
            f64::from(self.blue()),
            0.299_f64.mul_add(f64::from(self.red()), 0.587 * f64::from(self.green())),
        )
    }

    /// Whether a light foreground (a white tick, white text) should be drawn
    /// on top of this color.
    #[must_use]
    pub fn is_light_color(self) -> bool {
        self.luminance() <= LUMINANCE_THRESHOLD
    }

    /// The foreground that contrasts with this color.
    #[must_use]
    pub fn contrast_foreground(self) -> Foreground {
        if self.is_light_color() {
            Foreground::Light
        } else {
            Foreground::Dark
        }
    }

    /// Converts this color to HSV.
    #[must_use]
    pub fn to_hsv(self) -> Hsv {
        Hsv::from_argb(self)
    }
}

const LUMINANCE_THRESHOLD: f64 = 255.0 / 2.0;

impl Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb({:#010X})", self.0)
    }
}

impl Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Argb {
    type Err = HexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_hex(s)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

impl From<(u8, u8, u8)> for Argb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::opaque(value.0, value.1, value.2)
    }
}

impl From<[u8; 4]> for Argb {
    fn from(value: [u8; 4]) -> Self {
        Self::from_argb(value[0], value[1], value[2], value[3])
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Argb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Argb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from_hex(&text).map_err(serde::de::Error::custom)
    }
}
