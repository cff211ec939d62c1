//! Change notification for hosts that render a palette.

/// A selection transition: which swatch lost the check and which gained it.
///
/// `None` stands for "no swatch". A host re-renders exactly the indices named
/// here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectionChange {
    /// The index that was selected before the change.
    pub previous: Option<usize>,
    /// The index that is selected after the change.
    pub current: Option<usize>,
}

impl SelectionChange {
    /// Indices whose swatches need redrawing, previous first.
    pub fn changed_indices(self) -> impl Iterator<Item = usize> {
        self.previous
            .into_iter()
            .chain(self.current.filter(|current| Some(*current) != self.previous))
    }
}

/// Receives palette mutations after they have been applied.
///
/// Callbacks run synchronously on the thread that mutated the model, in the
/// order observers were subscribed.
pub trait PaletteObserver {
    /// The single selection moved.
    fn selection_changed(&mut self, change: SelectionChange);

    /// The whole swatch sequence was replaced; `len` is the new length.
    fn entries_replaced(&mut self, len: usize) {
        let _ = len;
    }
}

impl<F> PaletteObserver for F
where
    F: FnMut(SelectionChange),
{
    fn selection_changed(&mut self, change: SelectionChange) {
        self(change);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn changed_indices_lists_both_ends() {
        let change = SelectionChange {
            previous: Some(2),
            current: Some(5),
        };
        assert_eq!(change.changed_indices().collect::<Vec<_>>(), [2, 5]);
    }

    #[test]
    fn changed_indices_skips_missing_ends() {
        let change = SelectionChange {
            previous: None,
            current: Some(0),
        };
        assert_eq!(change.changed_indices().collect::<Vec<_>>(), [0]);

        let cleared = SelectionChange {
            previous: Some(4),
            current: None,
        };
        assert_eq!(cleared.changed_indices().collect::<Vec<_>>(), [4]);
    }

    #[test]
    fn closures_are_observers() {
        let mut seen = Vec::new();
        {
            let mut observer = |change: SelectionChange| seen.push(change);
            observer.selection_changed(SelectionChange {
                previous: None,
                current: Some(1),
            });
            observer.entries_replaced(3);
        }
        assert_eq!(seen.len(), 1);
    }
}
