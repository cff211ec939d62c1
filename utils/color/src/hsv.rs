use crate::{Argb, normalize_hue};

/// A color in the HSV (hue, saturation, value) model with 8-bit alpha.
///
/// This is what a custom picker edits: hue around the wheel, saturation and
/// value on the square, alpha on the slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue angle in degrees, `[0, 360)`.
    pub hue: f32,
    /// Saturation, 0.0 to 1.0.
    pub saturation: f32,
    /// Value (brightness), 0.0 to 1.0.
    pub value: f32,
    /// Alpha channel.
    pub alpha: u8,
}

impl Hsv {
    /// Creates an opaque HSV color. Hue wraps, saturation and value clamp.
    #[must_use]
    pub fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self::with_alpha(hue, saturation, value, 0xFF)
    }

    /// Creates an HSV color with an explicit alpha.
    #[must_use]
    pub fn with_alpha(hue: f32, saturation: f32, value: f32, alpha: u8) -> Self {
        Self {
            hue: if hue.is_finite() { normalize_hue(hue) } else { 0.0 },
            saturation: clamp_unit(saturation),
            value: clamp_unit(value),
            alpha,
        }
    }

    /// Converts a packed color into HSV.
    #[must_use]
    pub fn from_argb(color: Argb) -> Self {
        let red = f32::from(color.red()) / 255.0;
        let green = f32::from(color.green()) / 255.0;
        let blue = f32::from(color.blue()) / 255.0;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let delta = max - min;

        let hue = if delta <= f32::EPSILON {
            0.0
        } else if (max - red).abs() <= f32::EPSILON {
            60.0 * ((green - blue) / delta)
        } else if (max - green).abs() <= f32::EPSILON {
            60.0 * ((blue - red) / delta + 2.0)
        } else {
            60.0 * ((red - green) / delta + 4.0)
        };

        let saturation = if max <= f32::EPSILON { 0.0 } else { delta / max };

        Self::with_alpha(hue, saturation, max, color.alpha())
    }

    /// Converts back into a packed color, rounding each channel.
    #[must_use]
    #[allow(clippy::many_single_char_names)]
    pub fn to_argb(self) -> Argb {
        let c = self.value * self.saturation;
        let sector = self.hue / 60.0;
        let x = c * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = self.value - c;

        // `hue` is kept in [0, 360) so the sector index is in 0..6.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (r, g, b) = match sector as u8 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Argb::from_argb(
            self.alpha,
            to_channel(r + m),
            to_channel(g + m),
            to_channel(b + m),
        )
    }
}

impl From<Argb> for Hsv {
    fn from(value: Argb) -> Self {
        Self::from_argb(value)
    }
}

impl From<Hsv> for Argb {
    fn from(value: Hsv) -> Self {
        value.to_argb()
    }
}

const fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(unit: f32) -> u8 {
    (clamp_unit(unit) * 255.0).round() as u8
}
