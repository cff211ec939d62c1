//! The single-selection palette.

use alloc::{boxed::Box, vec::Vec};
use core::fmt::{self, Debug};

use swatch_color::{Argb, DEFAULT_PALETTE};

use crate::{ColorEntry, PaletteError, PaletteObserver, SelectionChange};

/// What [`PaletteSelectionModel::select_by_color`] does when the color is not
/// in the palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum DefaultColorMode {
    /// Leave the palette and selection untouched.
    #[default]
    LeaveUnchanged,
    /// Drop the last swatch, insert the color at the front and select it.
    InsertIfAbsent,
}

/// An ordered palette with at most one selected swatch.
///
/// Population always replaces the whole sequence and clears the selection.
/// Selection changes are reported to subscribed [`PaletteObserver`]s after
/// the state has been updated, one event per call. Population first reports
/// the cleared selection, if there was one, then the replacement.
///
/// ```
/// use swatch_color::Argb;
/// use swatch_palette::PaletteSelectionModel;
///
/// let mut palette = PaletteSelectionModel::new();
/// palette.load_from_hex_strings(["#FF0000", "00FF00", "0000FF"]).unwrap();
/// palette.select(1).unwrap();
///
/// assert_eq!(palette.selected_index(), Some(1));
/// assert_eq!(palette.selected_color(), Some(Argb::from_u32(0xFF00_FF00)));
/// ```
#[derive(Default)]
pub struct PaletteSelectionModel {
    entries: Vec<ColorEntry>,
    selected: Option<usize>,
    observers: Vec<Box<dyn PaletteObserver>>,
}

impl Debug for PaletteSelectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaletteSelectionModel")
            .field("entries", &self.entries)
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl PaletteSelectionModel {
    /// Creates an empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a palette holding the built-in presets.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut model = Self::new();
        model.load_defaults();
        model
    }

    /// Registers an observer. Observers live as long as the model.
    pub fn subscribe(&mut self, observer: impl PaletteObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replaces the palette with `colors`, all unselected, in order.
    pub fn load_from_colors<I>(&mut self, colors: I)
    where
        I: IntoIterator,
        I::Item: Into<Argb>,
    {
        let entries = colors
            .into_iter()
            .map(|color| ColorEntry::new(color.into()))
            .collect();
        self.replace_entries(entries);
    }

    /// Replaces the palette with colors parsed from hex strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidColorFormat`] for the first string that
    /// does not parse. The palette is left untouched in that case.
    pub fn load_from_hex_strings<I>(&mut self, hex_strings: I) -> Result<(), PaletteError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let entries = hex_strings
            .into_iter()
            .map(|text| {
                let text = text.as_ref();
                Argb::try_from_hex(text)
                    .map(ColorEntry::new)
                    .map_err(|source| {
                        tracing::warn!(input = text, %source, "rejected palette color");
                        PaletteError::invalid_color(text, source)
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.replace_entries(entries);
        Ok(())
    }

    /// Replaces the palette with the built-in presets.
    pub fn load_defaults(&mut self) {
        self.load_from_colors(DEFAULT_PALETTE);
    }

    fn replace_entries(&mut self, entries: Vec<ColorEntry>) {
        // Report the lost selection against the old entries before they go.
        self.clear_selection();
        self.entries = entries;
        let len = self.entries.len();
        tracing::debug!(len, "palette replaced");
        for observer in &mut self.observers {
            observer.entries_replaced(len);
        }
    }

    /// Selects the swatch at `index`, unchecking the previous one.
    ///
    /// Selecting the swatch that is already selected succeeds without
    /// notifying anyone.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::IndexOutOfRange`] if `index >= len()`; nothing
    /// changes in that case.
    pub fn select(&mut self, index: usize) -> Result<(), PaletteError> {
        self.check_index(index)?;
        if self.selected == Some(index) {
            return Ok(());
        }

        let previous = self.selected;
        if let Some(previous) = previous {
            self.entries[previous].set_selected(false);
        }
        self.entries[index].set_selected(true);
        self.selected = Some(index);

        self.notify(SelectionChange {
            previous,
            current: Some(index),
        });
        Ok(())
    }

    /// Selects the first swatch whose color equals `color`.
    ///
    /// When no swatch matches, `mode` decides: [`DefaultColorMode::LeaveUnchanged`]
    /// does nothing and returns `Ok(None)`; [`DefaultColorMode::InsertIfAbsent`]
    /// evicts the last swatch, inserts `color` at the front and selects it.
    ///
    /// Inserting is a reload followed by a select, so observers may hear up
    /// to three notifications from one call: the cleared selection,
    /// `entries_replaced`, then the selection of index 0.
    ///
    /// Returns the index that ends up selected.
    ///
    /// # Errors
    ///
    /// Never fails for the modes defined today; the `Result` mirrors
    /// [`select`](Self::select).
    pub fn select_by_color(
        &mut self,
        color: Argb,
        mode: DefaultColorMode,
    ) -> Result<Option<usize>, PaletteError> {
        if let Some(index) = self.position_of(color) {
            self.select(index)?;
            return Ok(Some(index));
        }

        match mode {
            DefaultColorMode::LeaveUnchanged => {
                tracing::debug!(%color, "color not in palette, selection unchanged");
                Ok(None)
            }
            DefaultColorMode::InsertIfAbsent => {
                tracing::debug!(%color, "color not in palette, inserting at front");
                let mut entries = core::mem::take(&mut self.entries);
                entries.pop();
                entries.insert(0, ColorEntry::new(color));
                self.replace_entries(entries);
                self.select(0)?;
                Ok(Some(0))
            }
        }
    }

    /// Clears the selection, if any.
    pub fn clear_selection(&mut self) {
        let Some(previous) = self.selected.take() else {
            return;
        };
        self.entries[previous].set_selected(false);
        self.notify(SelectionChange {
            previous: Some(previous),
            current: None,
        });
    }

    /// Index of the selected swatch.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Color of the selected swatch.
    #[must_use]
    pub fn selected_color(&self) -> Option<Argb> {
        self.selected.map(|index| self.entries[index].color())
    }

    /// All swatches in display order.
    #[must_use]
    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// The swatch at `index`.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<&ColorEntry> {
        self.entries.get(index)
    }

    /// Iterates over the swatch colors in display order.
    pub fn colors(&self) -> impl Iterator<Item = Argb> + '_ {
        self.entries.iter().map(ColorEntry::color)
    }

    /// Number of swatches.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no swatches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the first swatch with this color.
    #[must_use]
    pub fn position_of(&self, color: Argb) -> Option<usize> {
        let needle = ColorEntry::new(color);
        self.entries.iter().position(|entry| *entry == needle)
    }

    /// Row and column of `index` in a grid with `columns` columns.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidColumns`] when `columns` is zero,
    /// [`PaletteError::IndexOutOfRange`] when `index` is not a swatch.
    pub fn grid_position(&self, index: usize, columns: usize) -> Result<(usize, usize), PaletteError> {
        if columns == 0 {
            return Err(PaletteError::InvalidColumns);
        }
        self.check_index(index)?;
        Ok((index / columns, index % columns))
    }

    fn check_index(&self, index: usize) -> Result<(), PaletteError> {
        let len = self.entries.len();
        if index < len {
            Ok(())
        } else {
            Err(PaletteError::IndexOutOfRange { index, len })
        }
    }

    fn notify(&mut self, change: SelectionChange) {
        tracing::debug!(previous = ?change.previous, current = ?change.current, "selection changed");
        for observer in &mut self.observers {
            observer.selection_changed(change);
        }
    }
}
