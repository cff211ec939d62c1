//! Errors reported by palette operations.

use alloc::string::String;

use swatch_color::HexColorError;
use thiserror::Error;

/// Failures of palette and picker operations.
///
/// Every operation that returns one of these leaves the palette exactly as it
/// was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// A swatch index outside `0..len`.
    #[error("swatch index {index} is out of range for a palette of {len}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of swatches in the palette.
        len: usize,
    },
    /// Text that is not a `#RRGGBB` or `#AARRGGBB` color.
    #[error("invalid color format {input:?}: {source}")]
    InvalidColorFormat {
        /// The rejected text.
        input: String,
        /// Why parsing failed.
        source: HexColorError,
    },
    /// A grid needs at least one column.
    #[error("a palette grid needs at least one column")]
    InvalidColumns,
    /// An action button index that was never configured.
    #[error("action {action} does not exist, {count} configured")]
    UnknownAction {
        /// The rejected action index.
        action: usize,
        /// Number of configured actions.
        count: usize,
    },
}

impl PaletteError {
    pub(crate) fn invalid_color(input: &str, source: HexColorError) -> Self {
        Self::InvalidColorFormat {
            input: input.into(),
            source,
        }
    }
}
