//! # Palette
//!
//! The framework-independent half of a swatch color picker.
//!
//! [`PaletteSelectionModel`] keeps an ordered list of [`ColorEntry`] swatches
//! with at most one selected, and tells [`PaletteObserver`]s exactly which
//! swatches changed so a host can redraw only those. [`PalettePicker`] wraps a
//! model built from an immutable [`PaletteConfig`] and turns taps and button
//! presses into [`PickerEvent`]s. [`CustomColorEditor`] holds the custom tab's
//! state and keeps a hex text field in sync with an HSV picker.
//!
//! Drawing the grid, the dialog chrome and the tabs is left to the host
//! toolkit.

extern crate alloc;

mod config;
pub use config::{ChooseMode, PaletteConfig, PaletteSource};
mod custom;
pub use custom::{ChangeOrigin, CustomColorEditor, EditorChange};
mod entry;
pub use entry::ColorEntry;
mod error;
pub use error::PaletteError;
mod model;
pub use model::{DefaultColorMode, PaletteSelectionModel};
mod observer;
pub use observer::{PaletteObserver, SelectionChange};
mod picker;
pub use picker::{Choice, PalettePicker, PickerEvent};

pub use swatch_color::{Argb, is_light_color, parse_hex_string, to_hex_string};
