//! # Color Module
//!
//! Packed ARGB colors and the small amount of color logic a swatch picker
//! needs: hex text in both directions, a perceptual-luminance contrast
//! decision for tick marks and labels, HSV conversion for the custom editor,
//! and the built-in material palette.
//!
//! The primary type is [`Argb`], a `0xAARRGGBB` value that is cheap to copy
//! and compare.
//!
//! ```
//! use swatch_color::{Argb, parse_hex_string, to_hex_string};
//!
//! let red = parse_hex_string("#FF0000").unwrap();
//! assert_eq!(red, Argb::from_u32(0xFFFF_0000));
//! assert_eq!(to_hex_string(red, false), "FF0000");
//! assert_eq!(to_hex_string(red, true), "FFFF0000");
//! ```

extern crate alloc;

mod argb;
pub use argb::Argb;
mod hsv;
pub use hsv::Hsv;
mod parse;

use alloc::string::String;

/// Errors that can occur when parsing hexadecimal color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HexColorError {
    /// The text after the optional `#` is not 6 or 8 characters long.
    #[error("expected 6 or 8 hexadecimal digits, found {0}")]
    InvalidLength(usize),
    /// A non-hexadecimal character was encountered at the provided byte index.
    #[error("invalid hexadecimal digit at byte index {0}")]
    InvalidDigit(usize),
}

/// Which foreground to draw over a swatch so it stays readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Foreground {
    /// Draw white on top (dark backgrounds).
    Light,
    /// Draw black on top (light backgrounds).
    Dark,
}

impl Foreground {
    /// The concrete foreground color.
    #[must_use]
    pub const fn color(self) -> Argb {
        match self {
            Self::Light => Argb::WHITE,
            Self::Dark => Argb::BLACK,
        }
    }
}

/// The built-in preset palette, in display order.
pub const DEFAULT_PALETTE: [Argb; 19] = [
    Argb::RED,
    Argb::PINK,
    Argb::PURPLE,
    Argb::DEEP_PURPLE,
    Argb::INDIGO,
    Argb::BLUE,
    Argb::LIGHT_BLUE,
    Argb::CYAN,
    Argb::TEAL,
    Argb::GREEN,
    Argb::LIGHT_GREEN,
    Argb::LIME,
    Argb::YELLOW,
    Argb::AMBER,
    Argb::ORANGE,
    Argb::DEEP_ORANGE,
    Argb::BROWN,
    Argb::GREY,
    Argb::BLUE_GREY,
];

/// Formats `color` as fixed-width uppercase hex without a leading `#`.
///
/// With `include_alpha` the result is `AARRGGBB`; otherwise the alpha channel
/// is masked out and the result is `RRGGBB`.
#[must_use]
pub fn to_hex_string(color: Argb, include_alpha: bool) -> String {
    color.to_hex(include_alpha)
}

/// Parses `RRGGBB` or `AARRGGBB`, with an optional leading `#`.
///
/// Six digits produce an opaque color.
///
/// # Errors
///
/// Returns [`HexColorError`] when the digit count is wrong or a character is
/// not a hexadecimal digit.
pub fn parse_hex_string(text: &str) -> Result<Argb, HexColorError> {
    Argb::try_from_hex(text)
}

/// Whether a light foreground should be drawn over `color`.
///
/// Uses `0.299 R + 0.587 G + 0.114 B` and returns `true` at or below the
/// midpoint of the 0–255 range.
#[must_use]
pub fn is_light_color(color: Argb) -> bool {
    color.is_light_color()
}

fn normalize_hue(mut hue: f32) -> f32 {
    hue %= 360.0;
    if hue < 0.0 {
        hue += 360.0;
    }
    if hue >= 360.0 { 0.0 } else { hue }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_roundtrip_without_alpha() {
        for rgb in (0..=0x00FF_FFFF_u32).step_by(0x1_0301) {
            let color = Argb::from_u32(rgb | 0xFF00_0000);
            let text = to_hex_string(color, false);
            assert_eq!(text.len(), 6);
            assert_eq!(parse_hex_string(&text), Ok(color));
        }
    }

    #[test]
    fn alpha_is_ignored_when_not_included() {
        let translucent = Argb::from_u32(0x4012_3456);
        let parsed = parse_hex_string(&to_hex_string(translucent, false)).unwrap();
        assert_eq!(parsed.rgb(), translucent.rgb());
    }

    #[test]
    fn any_color_roundtrips_with_alpha() {
        for value in (0..=u32::MAX).step_by(0x0101_0101 / 3) {
            let color = Argb::from_u32(value);
            let text = to_hex_string(color, true);
            assert_eq!(text.len(), 8);
            assert_eq!(parse_hex_string(&text), Ok(color));
            assert_eq!(parse_hex_string(&format!("#{text}")), Ok(color));
        }
    }

    #[test]
    fn hex_output_is_uppercase() {
        assert_eq!(to_hex_string(Argb::from_u32(0xFFAB_CDEF), false), "ABCDEF");
    }

    #[test]
    fn malformed_text_is_rejected() {
        assert_eq!(
            parse_hex_string("ZZZZZZ"),
            Err(HexColorError::InvalidDigit(0))
        );
        assert!(parse_hex_string("#FFF").is_err());
    }

    #[test]
    fn error_messages_are_descriptive() {
        assert_eq!(
            HexColorError::InvalidLength(3).to_string(),
            "expected 6 or 8 hexadecimal digits, found 3"
        );
        assert_eq!(
            HexColorError::InvalidDigit(2).to_string(),
            "invalid hexadecimal digit at byte index 2"
        );
    }

    #[test]
    fn contrast_helper_matches_method() {
        assert!(!is_light_color(Argb::from_u32(0xFFFF_FFFF)));
        assert!(is_light_color(Argb::from_u32(0xFF00_0000)));
        assert_eq!(Foreground::Light.color(), Argb::WHITE);
        assert_eq!(Foreground::Dark.color(), Argb::BLACK);
    }

    #[test]
    fn default_palette_has_no_duplicates() {
        for (i, a) in DEFAULT_PALETTE.iter().enumerate() {
            for b in &DEFAULT_PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn hue_normalization_wraps() {
        assert!((normalize_hue(370.0) - 10.0).abs() < 1e-4);
        assert!((normalize_hue(-90.0) - 270.0).abs() < 1e-4);
        assert!(normalize_hue(-1e-9) < 360.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn argb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Argb::from_u32(0x80FF_0000)).unwrap();
        assert_eq!(json, "\"#80FF0000\"");
        let back: Argb = serde_json::from_str("\"#00FF00\"").unwrap();
        assert_eq!(back, Argb::from_u32(0xFF00_FF00));
        assert!(serde_json::from_str::<Argb>("\"nope\"").is_err());
    }
}
