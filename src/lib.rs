#![doc = include_str!("../README.md")]
#![allow(clippy::multiple_crate_versions)]

pub mod logging;

pub mod prelude {
    //! A collection of commonly used types for easy importing.
    //!
    //! ```rust
    //! use swatch::prelude::*;
    //!
    //! let mut palette = PaletteSelectionModel::with_defaults();
    //! palette.select(0).unwrap();
    //! assert_eq!(palette.selected_color(), Some(Argb::RED));
    //! ```
    pub use super::color::{Argb, Foreground, Hsv, is_light_color, parse_hex_string, to_hex_string};
    pub use super::palette::{
        Choice, ChooseMode, ColorEntry, CustomColorEditor, DefaultColorMode, PaletteConfig,
        PaletteError, PaletteObserver, PalettePicker, PaletteSelectionModel, PaletteSource,
        PickerEvent, SelectionChange,
    };
}

pub use swatch_color as color;
pub use swatch_palette as palette;

#[doc(inline)]
pub use color::Argb;
#[doc(inline)]
pub use palette::{PaletteConfig, PalettePicker, PaletteSelectionModel};

#[cfg(all(test, feature = "serde"))]
mod tests {
    use crate::prelude::*;

    #[test]
    fn json_config_opens_a_picker() {
        let config: PaletteConfig = serde_json::from_str(
            r##"{
                "source": { "colors": ["#FFF44336", "#FF4CAF50"] },
                "default_color": "#FF4CAF50",
                "title": "Accent"
            }"##,
        )
        .unwrap();

        let picker = PalettePicker::new(config.clone(), |_| {}).unwrap();
        assert_eq!(picker.model().selected_index(), Some(1));
        assert_eq!(picker.model().selected_color(), Some(Argb::GREEN));

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r##""default_color":"#FF4CAF50""##));
        assert_eq!(serde_json::from_str::<PaletteConfig>(&json).unwrap(), config);
    }
}
