//! Picker configuration.
//!
//! A [`PaletteConfig`] is assembled once with its consuming builder methods and then
//! handed to [`PalettePicker::new`](crate::PalettePicker::new). The picker
//! never mutates it, so the order in which options were set does not matter:
//! the default color is always applied after the palette is loaded.

use alloc::{string::String, vec::Vec};
use core::num::NonZeroU16;

use swatch_color::Argb;

use crate::{DefaultColorMode, PaletteError, PaletteSelectionModel};

/// Where the swatches of a picker come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum PaletteSource {
    /// The built-in preset palette.
    #[default]
    Defaults,
    /// Explicit colors, in display order.
    Colors(Vec<Argb>),
    /// Hex strings such as `#FF0000` or `80FF0000`, in display order.
    Hex(Vec<String>),
}

impl PaletteSource {
    /// Loads this source into `model`, replacing its swatches.
    ///
    /// An empty list falls back to the built-in presets.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidColorFormat`] if a hex string does not parse.
    pub fn load_into(&self, model: &mut PaletteSelectionModel) -> Result<(), PaletteError> {
        match self {
            Self::Colors(colors) if !colors.is_empty() => {
                model.load_from_colors(colors.iter().copied());
            }
            Self::Hex(strings) if !strings.is_empty() => model.load_from_hex_strings(strings)?,
            _ => model.load_defaults(),
        }
        Ok(())
    }
}

/// How a pick is committed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChooseMode {
    /// Tapping selects; a confirm button reports the choice.
    #[default]
    Confirm,
    /// The first tap reports the choice and closes the picker. No confirm or
    /// cancel buttons are shown.
    Fast,
}

/// Configuration for a [`PalettePicker`](crate::PalettePicker).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
pub struct PaletteConfig {
    /// Swatches to show.
    pub source: PaletteSource,
    /// Color to select when the picker opens.
    pub default_color: Option<Argb>,
    /// What happens when `default_color` is not in the palette.
    pub default_color_mode: DefaultColorMode,
    /// Number of grid columns.
    pub columns: NonZeroU16,
    /// Dialog title; `None` lets the host use its own.
    pub title: Option<String>,
    /// Tick color over the selected swatch; `None` picks black or white per
    /// swatch for contrast.
    pub tick_color: Option<Argb>,
    /// How a pick is committed.
    pub choose_mode: ChooseMode,
    /// Whether confirm/cancel close the picker.
    pub dismiss_on_button: bool,
    /// Labels of extra action buttons that report the current choice.
    pub actions: Vec<String>,
    /// Whether the custom editor shows and accepts an alpha channel.
    pub show_alpha: bool,
}

const DEFAULT_COLUMNS: NonZeroU16 = match NonZeroU16::new(5) {
    Some(columns) => columns,
    None => unreachable!(),
};

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            source: PaletteSource::Defaults,
            default_color: None,
            default_color_mode: DefaultColorMode::LeaveUnchanged,
            columns: DEFAULT_COLUMNS,
            title: None,
            tick_color: None,
            choose_mode: ChooseMode::Confirm,
            dismiss_on_button: true,
            actions: Vec::new(),
            show_alpha: false,
        }
    }
}

impl PaletteConfig {
    /// Creates a configuration showing the built-in presets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses explicit colors.
    #[must_use]
    pub fn colors(mut self, colors: impl IntoIterator<Item = impl Into<Argb>>) -> Self {
        self.source = PaletteSource::Colors(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Uses colors given as hex strings. They are validated when the picker
    /// is created.
    #[must_use]
    pub fn hex_colors(mut self, colors: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.source = PaletteSource::Hex(colors.into_iter().map(Into::into).collect());
        self
    }

    /// Selects `color` when the picker opens.
    #[must_use]
    pub const fn default_color(mut self, color: Argb) -> Self {
        self.default_color = Some(color);
        self
    }

    /// Sets what happens when the default color is not in the palette.
    #[must_use]
    pub const fn default_color_mode(mut self, mode: DefaultColorMode) -> Self {
        self.default_color_mode = mode;
        self
    }

    /// Sets the number of grid columns.
    #[must_use]
    pub const fn columns(mut self, columns: NonZeroU16) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the dialog title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Forces one tick color for every swatch.
    #[must_use]
    pub const fn tick_color(mut self, color: Argb) -> Self {
        self.tick_color = Some(color);
        self
    }

    /// Reports the first tap immediately and closes.
    #[must_use]
    pub const fn fast_choose(mut self) -> Self {
        self.choose_mode = ChooseMode::Fast;
        self
    }

    /// Sets whether confirm/cancel close the picker.
    #[must_use]
    pub const fn dismiss_on_button(mut self, dismiss: bool) -> Self {
        self.dismiss_on_button = dismiss;
        self
    }

    /// Adds an extra action button.
    #[must_use]
    pub fn action(mut self, label: impl Into<String>) -> Self {
        self.actions.push(label.into());
        self
    }

    /// Shows the alpha channel in the custom editor.
    #[must_use]
    pub const fn show_alpha(mut self, show: bool) -> Self {
        self.show_alpha = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_dialog() {
        let config = PaletteConfig::new();
        assert_eq!(config.source, PaletteSource::Defaults);
        assert_eq!(config.columns.get(), 5);
        assert_eq!(config.choose_mode, ChooseMode::Confirm);
        assert!(config.dismiss_on_button);
        assert!(config.actions.is_empty());
        assert!(!config.show_alpha);
    }

    #[test]
    fn option_order_does_not_matter() {
        let a = PaletteConfig::new()
            .default_color(Argb::BLUE)
            .colors([Argb::RED, Argb::BLUE]);
        let b = PaletteConfig::new()
            .colors([Argb::RED, Argb::BLUE])
            .default_color(Argb::BLUE);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_sources_fall_back_to_presets() {
        let mut model = PaletteSelectionModel::new();
        PaletteSource::Colors(Vec::new()).load_into(&mut model).unwrap();
        assert_eq!(model.len(), swatch_color::DEFAULT_PALETTE.len());

        PaletteSource::Hex(Vec::new()).load_into(&mut model).unwrap();
        assert_eq!(model.len(), swatch_color::DEFAULT_PALETTE.len());
    }

    #[test]
    fn hex_source_propagates_parse_errors() {
        let mut model = PaletteSelectionModel::new();
        let source = PaletteSource::Hex(vec!["#00FF00".into(), "#0F".into()]);
        assert!(matches!(
            source.load_into(&mut model),
            Err(PaletteError::InvalidColorFormat { .. })
        ));
        assert!(model.is_empty());
    }

    #[test]
    fn builder_collects_actions_in_order() {
        let config = PaletteConfig::new().action("Copy").action("Share");
        assert_eq!(config.actions, ["Copy", "Share"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn config_deserializes_with_defaults() {
        let config: PaletteConfig = serde_json::from_str(
            r##"{
                "source": { "hex": ["#FF0000", "#00FF00"] },
                "default_color": "#00FF00",
                "columns": 4,
                "choose_mode": "fast"
            }"##,
        )
        .unwrap();

        assert_eq!(
            config.source,
            PaletteSource::Hex(vec!["#FF0000".into(), "#00FF00".into()])
        );
        assert_eq!(config.default_color, Some(Argb::from_u32(0xFF00_FF00)));
        assert_eq!(config.columns.get(), 4);
        assert_eq!(config.choose_mode, ChooseMode::Fast);
        assert!(config.dismiss_on_button);
    }
}
