//! A single swatch in a palette.

use core::hash::{Hash, Hasher};

use swatch_color::Argb;

/// One swatch: a color plus whether it is currently checked.
///
/// Two entries are equal when their colors are equal, whatever their
/// selection state. Lookups such as [`PaletteSelectionModel::position_of`]
/// rely on this.
///
/// [`PaletteSelectionModel::position_of`]: crate::PaletteSelectionModel::position_of
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorEntry {
    color: Argb,
    selected: bool,
}

impl ColorEntry {
    /// Creates an unselected entry.
    #[must_use]
    pub const fn new(color: Argb) -> Self {
        Self::with_selected(color, false)
    }

    /// Creates an entry with an explicit selection flag.
    #[must_use]
    pub const fn with_selected(color: Argb, selected: bool) -> Self {
        Self { color, selected }
    }

    /// The swatch color.
    #[must_use]
    pub const fn color(&self) -> Argb {
        self.color
    }

    /// Replaces the swatch color.
    pub const fn set_color(&mut self, color: Argb) {
        self.color = color;
    }

    /// Whether the swatch is checked.
    #[must_use]
    pub const fn is_selected(&self) -> bool {
        self.selected
    }

    /// Sets the check flag. Observers are not notified; that is the owning
    /// model's job.
    pub const fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl PartialEq for ColorEntry {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl Eq for ColorEntry {}

impl Hash for ColorEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.color.hash(state);
    }
}

impl From<Argb> for ColorEntry {
    fn from(color: Argb) -> Self {
        Self::new(color)
    }
}
