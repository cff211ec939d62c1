//! A picker session: a palette, a custom editor and the callbacks that
//! report the user's choice.

use alloc::{boxed::Box, string::String};
use core::fmt::{self, Debug};

use swatch_color::Argb;

use crate::{
    ChooseMode, CustomColorEditor, PaletteConfig, PaletteError, PaletteObserver,
    PaletteSelectionModel,
};

/// A chosen color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Choice {
    /// Index of the swatch, or `None` for a custom color that is not in the
    /// palette.
    pub index: Option<usize>,
    /// The color itself.
    pub color: Argb,
}

/// What a picker reports to its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PickerEvent {
    /// The user committed a choice. `None` when confirming with nothing
    /// selected.
    Chosen(Option<Choice>),
    /// The user backed out.
    Cancelled,
    /// An extra action button was pressed.
    Action {
        /// Index into [`PaletteConfig::actions`].
        action: usize,
        /// The button label.
        label: String,
        /// The current selection when the button was pressed.
        choice: Option<Choice>,
    },
}

/// Drives one opening of a color picker.
///
/// The host renders [`model`](Self::model), forwards taps and button presses,
/// and closes its dialog once [`is_open`](Self::is_open) turns false. The
/// picker holds no reference to the dialog; everything it has to say goes
/// through the event callback.
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
///
/// use swatch_color::Argb;
/// use swatch_palette::{PaletteConfig, PalettePicker, PickerEvent};
///
/// let events = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&events);
/// let config = PaletteConfig::new()
///     .colors([Argb::RED, Argb::GREEN])
///     .fast_choose();
///
/// let mut picker = PalettePicker::new(config, move |event| sink.borrow_mut().push(event)).unwrap();
/// picker.tap(1).unwrap();
///
/// assert!(!picker.is_open());
/// assert!(matches!(events.borrow()[0], PickerEvent::Chosen(Some(choice)) if choice.color == Argb::GREEN));
/// ```
pub struct PalettePicker {
    config: PaletteConfig,
    model: PaletteSelectionModel,
    custom: CustomColorEditor,
    on_event: Box<dyn FnMut(PickerEvent)>,
    open: bool,
}

impl Debug for PalettePicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PalettePicker")
            .field("config", &self.config)
            .field("model", &self.model)
            .field("custom", &self.custom)
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

impl PalettePicker {
    /// Opens a picker: loads the palette, then applies the default color.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidColorFormat`] if the configured hex colors do
    /// not parse.
    pub fn new(
        config: PaletteConfig,
        on_event: impl FnMut(PickerEvent) + 'static,
    ) -> Result<Self, PaletteError> {
        let mut model = PaletteSelectionModel::new();
        config.source.load_into(&mut model)?;
        if let Some(color) = config.default_color {
            model.select_by_color(color, config.default_color_mode)?;
        }

        let custom = CustomColorEditor::new(
            config
                .default_color
                .unwrap_or(CustomColorEditor::INITIAL_COLOR),
            config.show_alpha,
        );

        tracing::debug!(
            swatches = model.len(),
            selected = ?model.selected_index(),
            mode = ?config.choose_mode,
            "color picker opened"
        );

        Ok(Self {
            config,
            model,
            custom,
            on_event: Box::new(on_event),
            open: true,
        })
    }

    /// The configuration the picker was opened with.
    #[must_use]
    pub const fn config(&self) -> &PaletteConfig {
        &self.config
    }

    /// The palette being shown.
    #[must_use]
    pub const fn model(&self) -> &PaletteSelectionModel {
        &self.model
    }

    /// Registers an observer on the palette.
    pub fn subscribe(&mut self, observer: impl PaletteObserver + 'static) {
        self.model.subscribe(observer);
    }

    /// The custom color tab.
    #[must_use]
    pub const fn custom(&self) -> &CustomColorEditor {
        &self.custom
    }

    /// Mutable access to the custom color tab.
    pub const fn custom_mut(&mut self) -> &mut CustomColorEditor {
        &mut self.custom
    }

    /// Whether the picker still accepts input.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the host should show confirm and cancel buttons.
    #[must_use]
    pub fn shows_default_buttons(&self) -> bool {
        self.config.choose_mode == ChooseMode::Confirm
    }

    /// The current selection.
    #[must_use]
    pub fn choice(&self) -> Option<Choice> {
        let index = self.model.selected_index()?;
        let color = self.model.selected_color()?;
        Some(Choice {
            index: Some(index),
            color,
        })
    }

    /// Handles a tap on the swatch at `index`.
    ///
    /// In fast mode the tap also reports the choice and closes the picker.
    ///
    /// # Errors
    ///
    /// [`PaletteError::IndexOutOfRange`] if `index` is not a swatch.
    pub fn tap(&mut self, index: usize) -> Result<(), PaletteError> {
        if self.ignore_closed("tap") {
            return Ok(());
        }
        self.model.select(index)?;
        if self.config.choose_mode == ChooseMode::Fast {
            let choice = self.choice();
            self.emit(PickerEvent::Chosen(choice));
            self.dismiss();
        }
        Ok(())
    }

    /// Handles the confirm button.
    pub fn confirm(&mut self) {
        if self.ignore_closed("confirm") {
            return;
        }
        if self.config.choose_mode == ChooseMode::Confirm {
            let choice = self.choice();
            self.emit(PickerEvent::Chosen(choice));
        }
        if self.config.dismiss_on_button {
            self.dismiss();
        }
    }

    /// Handles the cancel button.
    pub fn cancel(&mut self) {
        if self.ignore_closed("cancel") {
            return;
        }
        if self.config.dismiss_on_button {
            self.dismiss();
        }
        self.emit(PickerEvent::Cancelled);
    }

    /// Commits the custom tab's color.
    pub fn choose_custom(&mut self) {
        if self.ignore_closed("choose_custom") {
            return;
        }
        let color = self.custom.current();
        let choice = Choice {
            index: self.model.position_of(color),
            color,
        };
        self.emit(PickerEvent::Chosen(Some(choice)));
        if self.config.dismiss_on_button {
            self.dismiss();
        }
    }

    /// Handles a press on extra action button `action`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::UnknownAction`] if no such button was configured.
    pub fn press_action(&mut self, action: usize) -> Result<(), PaletteError> {
        if self.ignore_closed("press_action") {
            return Ok(());
        }
        let label = self
            .config
            .actions
            .get(action)
            .cloned()
            .ok_or(PaletteError::UnknownAction {
                action,
                count: self.config.actions.len(),
            })?;
        let choice = self.choice();
        self.emit(PickerEvent::Action {
            action,
            label,
            choice,
        });
        Ok(())
    }

    /// Tick color to draw over the swatch at `index`.
    ///
    /// A configured tick color is used as given, white included; otherwise
    /// the swatch's contrast foreground.
    ///
    /// # Errors
    ///
    /// [`PaletteError::IndexOutOfRange`] if `index` is not a swatch.
    pub fn tick_color(&self, index: usize) -> Result<Argb, PaletteError> {
        let entry = self
            .model
            .entry(index)
            .ok_or(PaletteError::IndexOutOfRange {
                index,
                len: self.model.len(),
            })?;
        Ok(self
            .config
            .tick_color
            .unwrap_or_else(|| entry.color().contrast_foreground().color()))
    }

    /// Row and column of `index` in the configured grid.
    ///
    /// # Errors
    ///
    /// [`PaletteError::IndexOutOfRange`] if `index` is not a swatch.
    pub fn grid_position(&self, index: usize) -> Result<(usize, usize), PaletteError> {
        self.model
            .grid_position(index, usize::from(self.config.columns.get()))
    }

    /// Closes the picker without reporting anything.
    pub fn dismiss(&mut self) {
        if self.open {
            self.open = false;
            tracing::debug!("color picker dismissed");
        }
    }

    fn ignore_closed(&self, interaction: &'static str) -> bool {
        if !self.open {
            tracing::debug!(interaction, "ignoring input on a dismissed color picker");
        }
        !self.open
    }

    fn emit(&mut self, event: PickerEvent) {
        tracing::debug!(?event, "color picker event");
        (self.on_event)(event);
    }
}

#[cfg(test)]
mod tests {
    use alloc::{rc::Rc, vec::Vec};
    use core::cell::RefCell;

    use super::*;
    use crate::DefaultColorMode;

    const RED: Argb = Argb::from_u32(0xFFFF_0000);
    const GREEN: Argb = Argb::from_u32(0xFF00_FF00);
    const BLUE: Argb = Argb::from_u32(0xFF00_00FF);

    fn open(config: PaletteConfig) -> (PalettePicker, Rc<RefCell<Vec<PickerEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let picker =
            PalettePicker::new(config, move |event| sink.borrow_mut().push(event)).unwrap();
        (picker, events)
    }

    fn rgb() -> PaletteConfig {
        PaletteConfig::new().colors([RED, GREEN, BLUE])
    }

    #[test]
    fn default_color_is_preselected() {
        let (picker, _) = open(rgb().default_color(GREEN));
        assert_eq!(picker.model().selected_index(), Some(1));
        assert_eq!(picker.custom().current(), GREEN);
    }

    #[test]
    fn absent_default_color_follows_mode() {
        let (picker, _) = open(rgb().default_color(Argb::WHITE));
        assert_eq!(picker.model().selected_index(), None);
        assert_eq!(picker.model().len(), 3);

        let (picker, _) = open(
            rgb()
                .default_color(Argb::WHITE)
                .default_color_mode(DefaultColorMode::InsertIfAbsent),
        );
        assert_eq!(picker.model().selected_color(), Some(Argb::WHITE));
        assert_eq!(
            picker.model().colors().collect::<Vec<_>>(),
            [Argb::WHITE, RED, GREEN]
        );
    }

    #[test]
    fn invalid_hex_config_fails_to_open() {
        let result = PalettePicker::new(PaletteConfig::new().hex_colors(["#GG0000"]), |_| {});
        assert!(matches!(
            result,
            Err(PaletteError::InvalidColorFormat { .. })
        ));
    }

    #[test]
    fn confirm_reports_selection_and_closes() {
        let (mut picker, events) = open(rgb());
        picker.tap(2).unwrap();
        assert!(events.borrow().is_empty());

        picker.confirm();
        assert!(!picker.is_open());
        assert_eq!(
            *events.borrow(),
            [PickerEvent::Chosen(Some(Choice {
                index: Some(2),
                color: BLUE
            }))]
        );
    }

    #[test]
    fn confirm_without_selection_reports_none() {
        let (mut picker, events) = open(rgb());
        picker.confirm();
        assert_eq!(*events.borrow(), [PickerEvent::Chosen(None)]);
    }

    #[test]
    fn fast_mode_reports_first_tap() {
        let (mut picker, events) = open(rgb().fast_choose());
        assert!(!picker.shows_default_buttons());

        picker.tap(0).unwrap();
        picker.tap(1).unwrap();

        assert_eq!(
            *events.borrow(),
            [PickerEvent::Chosen(Some(Choice {
                index: Some(0),
                color: RED
            }))]
        );
        assert_eq!(picker.model().selected_index(), Some(0));
    }

    #[test]
    fn cancel_reports_and_closes() {
        let (mut picker, events) = open(rgb());
        picker.tap(0).unwrap();
        picker.cancel();

        assert!(!picker.is_open());
        assert_eq!(*events.borrow(), [PickerEvent::Cancelled]);
    }

    #[test]
    fn buttons_can_keep_the_picker_open() {
        let (mut picker, events) = open(rgb().dismiss_on_button(false));
        picker.cancel();
        picker.tap(1).unwrap();
        picker.confirm();

        assert!(picker.is_open());
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn actions_report_current_choice() {
        let (mut picker, events) = open(rgb().action("Copy"));
        picker.tap(1).unwrap();
        picker.press_action(0).unwrap();

        assert_eq!(
            *events.borrow(),
            [PickerEvent::Action {
                action: 0,
                label: "Copy".into(),
                choice: Some(Choice {
                    index: Some(1),
                    color: GREEN
                }),
            }]
        );
        assert!(picker.is_open());
        assert_eq!(
            picker.press_action(1),
            Err(PaletteError::UnknownAction {
                action: 1,
                count: 1
            })
        );
    }

    #[test]
    fn custom_color_reports_palette_position() {
        let (mut picker, events) = open(rgb());
        picker.custom_mut().edit_hex("00FF00").unwrap();
        picker.choose_custom();

        assert_eq!(
            *events.borrow(),
            [PickerEvent::Chosen(Some(Choice {
                index: Some(1),
                color: GREEN
            }))]
        );
    }

    #[test]
    fn tick_color_contrasts_unless_forced() {
        let (picker, _) = open(PaletteConfig::new().colors([Argb::WHITE, Argb::BLACK]));
        assert_eq!(picker.tick_color(0), Ok(Argb::BLACK));
        assert_eq!(picker.tick_color(1), Ok(Argb::WHITE));
        assert!(picker.tick_color(2).is_err());

        let (picker, _) = open(
            PaletteConfig::new()
                .colors([Argb::WHITE, Argb::BLACK])
                .tick_color(Argb::RED),
        );
        assert_eq!(picker.tick_color(0), Ok(Argb::RED));
        assert_eq!(picker.tick_color(1), Ok(Argb::RED));

        let (picker, _) = open(
            PaletteConfig::new()
                .colors([Argb::WHITE])
                .tick_color(Argb::WHITE),
        );
        assert_eq!(picker.tick_color(0), Ok(Argb::WHITE));
    }

    #[test]
    fn grid_uses_configured_columns() {
        let (picker, _) = open(PaletteConfig::new());
        assert_eq!(picker.grid_position(6), Ok((1, 1)));
    }

    #[test]
    fn input_after_dismissal_is_ignored() {
        let (mut picker, events) = open(rgb());
        picker.dismiss();

        picker.tap(0).unwrap();
        picker.confirm();
        picker.cancel();
        picker.press_action(5).unwrap();

        assert!(events.borrow().is_empty());
        assert_eq!(picker.model().selected_index(), None);
    }

    #[test]
    fn out_of_range_tap_keeps_picker_open() {
        let (mut picker, events) = open(rgb().fast_choose());
        assert_eq!(
            picker.tap(3),
            Err(PaletteError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(picker.is_open());
        assert!(events.borrow().is_empty());
    }
}
