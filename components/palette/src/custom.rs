//! State behind the custom color tab: an HSV picker plus a hex text field.
//!
//! The picker and the text field both edit the same color. Changes coming
//! from the picker rewrite the text; changes typed into the field never do,
//! so the text the user is typing is never replaced under the cursor.

use alloc::string::String;

use swatch_color::{Argb, HexColorError, Hsv};

use crate::PaletteError;

/// Where a color change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeOrigin {
    /// Programmatic or picker-driven change.
    Picker,
    /// The user typed into the hex field.
    HexField,
}

/// A change applied to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorChange {
    /// The new current color.
    pub color: Argb,
    /// Who made the change.
    pub origin: ChangeOrigin,
}

impl EditorChange {
    /// Whether the host should push [`CustomColorEditor::hex_text`] into its
    /// text field.
    #[must_use]
    pub fn rewrites_hex_text(&self) -> bool {
        self.origin == ChangeOrigin::Picker
    }
}

/// Custom color editor state.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomColorEditor {
    original: Argb,
    current: Argb,
    hsv: Hsv,
    hex_text: String,
    show_alpha: bool,
}

impl Default for CustomColorEditor {
    fn default() -> Self {
        Self::new(Self::INITIAL_COLOR, false)
    }
}

impl CustomColorEditor {
    /// Color shown when nothing else was configured.
    pub const INITIAL_COLOR: Argb = Argb::from_u32(0xFF00_00FF);

    /// Creates an editor starting at `color`.
    #[must_use]
    pub fn new(color: Argb, show_alpha: bool) -> Self {
        Self {
            original: color,
            current: color,
            hsv: color.to_hsv(),
            hex_text: color.to_hex(show_alpha),
            show_alpha,
        }
    }

    /// The color the editor was opened with.
    #[must_use]
    pub const fn original(&self) -> Argb {
        self.original
    }

    /// The color being edited.
    #[must_use]
    pub const fn current(&self) -> Argb {
        self.current
    }

    /// Whether the current color differs from the original.
    #[must_use]
    pub fn is_changed(&self) -> bool {
        self.current != self.original
    }

    /// The current color in HSV.
    ///
    /// Hue and saturation survive passes through grey and black when they
    /// were set through [`set_hsv`](Self::set_hsv).
    #[must_use]
    pub const fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// Text for the hex field, without `#`.
    #[must_use]
    pub fn hex_text(&self) -> &str {
        &self.hex_text
    }

    /// Whether alpha is shown and editable.
    #[must_use]
    pub const fn shows_alpha(&self) -> bool {
        self.show_alpha
    }

    /// Maximum number of characters the hex field accepts.
    #[must_use]
    pub const fn max_hex_len(&self) -> usize {
        if self.show_alpha { 8 } else { 6 }
    }

    /// Toggles the alpha channel and re-renders the hex text.
    pub fn set_show_alpha(&mut self, show: bool) {
        self.show_alpha = show;
        self.hex_text = self.current.to_hex(show);
    }

    /// Sets the color from the picker or from code. Rewrites the hex text.
    ///
    /// Returns `None` when the color did not change.
    pub fn set_color(&mut self, color: Argb) -> Option<EditorChange> {
        if color == self.current {
            return None;
        }
        self.hsv = color.to_hsv();
        Some(self.apply(color, ChangeOrigin::Picker))
    }

    /// Sets the color from HSV components.
    pub fn set_hsv(&mut self, hsv: Hsv) -> Option<EditorChange> {
        self.hsv = hsv;
        let color = hsv.to_argb();
        (color != self.current).then(|| self.apply(color, ChangeOrigin::Picker))
    }

    /// Applies text typed into the hex field.
    ///
    /// The text itself is kept as typed. Returns `None` when it parses to the
    /// current color.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidColorFormat`] when the text is not a color, or
    /// carries alpha digits while alpha is hidden. The editor is unchanged.
    pub fn edit_hex(&mut self, text: &str) -> Result<Option<EditorChange>, PaletteError> {
        let digits = text.strip_prefix('#').unwrap_or(text).len();
        if digits > self.max_hex_len() {
            return Err(PaletteError::invalid_color(
                text,
                HexColorError::InvalidLength(digits),
            ));
        }
        let color = Argb::try_from_hex(text).map_err(|source| {
            tracing::debug!(input = text, %source, "hex field holds no color yet");
            PaletteError::invalid_color(text, source)
        })?;

        self.hex_text = text.into();
        if color == self.current {
            return Ok(None);
        }
        self.current = color;
        self.hsv = color.to_hsv();
        Ok(Some(EditorChange {
            color,
            origin: ChangeOrigin::HexField,
        }))
    }

    /// Returns to the original color.
    pub fn reset(&mut self) -> Option<EditorChange> {
        self.set_color(self.original)
    }

    fn apply(&mut self, color: Argb, origin: ChangeOrigin) -> EditorChange {
        self.current = color;
        self.hex_text = color.to_hex(self.show_alpha);
        tracing::debug!(%color, ?origin, "custom color changed");
        EditorChange { color, origin }
    }
}
