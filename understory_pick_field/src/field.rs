// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pick field state machine.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use understory_event_state::tap::{TapResult, TapState, TouchEvent};
use understory_selection::ChoiceSet;

use crate::config::{FieldConfig, InputType, non_empty};
use crate::deferred::Deferred;
use crate::dialog::{ChoiceDialog, strip_marker};
use crate::error::FieldError;
use crate::host::FieldHost;
#[cfg(feature = "std")]
use crate::text::{TextChanges, TextWatchers};

/// Text shown by [`PickField::preview`] when there is no hint to show instead.
pub const PREVIEW_PLACEHOLDER: &str = "Pick Field";

/// Resolves a tap into text. Receives the field's current text.
pub type DisambiguationCallback = Box<dyn FnMut(&str) -> Deferred>;

/// Notified with `(item, index)` once per committed choice.
pub type SelectionListener<T> = Box<dyn FnMut(&T, usize)>;

/// Which interaction mode a field is in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InteractionMode {
    /// The field is a plain text input.
    FreeText,
    /// Taps are resolved by a custom callback.
    CustomCallback,
    /// Taps open the built-in choice dialog.
    ChoiceDialog,
}

/// What [`PickField::handle_touch`] did with an event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TouchOutcome {
    /// The field is in free-text mode or detached; the host should handle the event normally.
    Passthrough,
    /// The event was consumed by gesture tracking.
    Consumed,
    /// A release was classified as a drag; nothing happens.
    Dragged,
    /// A clean tap was resolved.
    Resolved(ResolveOutcome),
}

/// Result of resolving a tap, or of polling a pending resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// The choice dialog was presented.
    DialogShown,
    /// The choice dialog was already showing; nothing was presented.
    DialogAlreadyShowing,
    /// The custom callback produced a value, which was committed.
    Committed,
    /// The custom callback produced nothing; the field is unchanged.
    Empty,
    /// The custom callback has not answered yet. Poll with [`PickField::poll_resolution_with`]
    /// to be woken when it does.
    Pending,
    /// A previous custom callback is still pending; the tap was ignored.
    Busy,
}

enum Strategy<T> {
    Custom(DisambiguationCallback),
    Choices {
        choices: ChoiceSet<T>,
        dialog: Option<ChoiceDialog>,
    },
}

enum Mode<T> {
    FreeText,
    TapArmed(Strategy<T>),
}

/// A floating-label text field that can be armed to act as a tap-to-pick selector.
///
/// A new field is a plain text input ([`InteractionMode::FreeText`]). Giving it a custom
/// disambiguation callback or a choice list arms it: from then on it has no keyboard and no
/// caret, and a clean tap (see [`understory_event_state::tap`]) resolves a value instead.
/// Arming is one-way; arming again replaces the previous strategy.
///
/// The field is headless. The host forwards touch events to [`PickField::handle_touch`],
/// renders [`PickField::dialog`] when asked to through [`FieldHost::present_dialog`], and
/// reports the user's choice back with [`PickField::on_dialog_pick`].
pub struct PickField<T> {
    config: FieldConfig,
    text: String,
    error: Option<String>,
    mode: Mode<T>,
    gesture: TapState,
    listener: Option<SelectionListener<T>>,
    pending: Option<Deferred>,
    attached: bool,
    dialog_builds: u64,
    #[cfg(feature = "std")]
    watchers: TextWatchers,
}

impl<T> PickField<T> {
    /// Create a free-text field.
    pub fn new(config: FieldConfig) -> Self {
        Self {
            gesture: TapState::new(config.touch_slop),
            config,
            text: String::new(),
            error: None,
            mode: Mode::FreeText,
            listener: None,
            pending: None,
            attached: true,
            dialog_builds: 0,
            #[cfg(feature = "std")]
            watchers: TextWatchers::default(),
        }
    }

    /// Create a field for a design preview: without a hint, it shows [`PREVIEW_PLACEHOLDER`].
    pub fn preview(config: FieldConfig) -> Self {
        let mut field = Self::new(config);
        if field.config.hint.is_none() {
            field.text.push_str(PREVIEW_PLACEHOLDER);
        }
        field
    }

    /// The construction parameters, as updated by the setters.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current hint.
    pub fn hint(&self) -> Option<&str> {
        self.config.hint.as_deref()
    }

    /// The validation message currently shown, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The current interaction mode.
    pub fn mode(&self) -> InteractionMode {
        match &self.mode {
            Mode::FreeText => InteractionMode::FreeText,
            Mode::TapArmed(Strategy::Custom(_)) => InteractionMode::CustomCallback,
            Mode::TapArmed(Strategy::Choices { .. }) => InteractionMode::ChoiceDialog,
        }
    }

    /// Whether taps resolve values instead of editing text.
    pub fn is_tap_armed(&self) -> bool {
        matches!(self.mode, Mode::TapArmed(_))
    }

    /// The effective input type. Armed fields take no keyboard input.
    pub fn input_type(&self) -> InputType {
        if self.is_tap_armed() {
            InputType::Null
        } else {
            self.config.input_type
        }
    }

    /// Whether the host should draw a caret.
    pub fn cursor_visible(&self) -> bool {
        !self.is_tap_armed()
    }

    /// The choice list, when armed with one.
    pub fn choices(&self) -> Option<&ChoiceSet<T>> {
        match &self.mode {
            Mode::TapArmed(Strategy::Choices { choices, .. }) => Some(choices),
            _ => None,
        }
    }

    /// The choice dialog, once built.
    pub fn dialog(&self) -> Option<&ChoiceDialog> {
        match &self.mode {
            Mode::TapArmed(Strategy::Choices { dialog, .. }) => dialog.as_ref(),
            _ => None,
        }
    }

    /// Whether a custom callback result is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the field is attached to a live host surface.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Replace the text and clear any validation error.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.error = None;
        self.text_changed();
    }

    /// Clear the text and any validation error. Never notifies the selection listener.
    pub fn clear_text(&mut self) {
        self.text.clear();
        self.error = None;
        self.text_changed();
    }

    /// Apply text typed by the user. Ignored while the field is armed.
    pub fn on_text_input(&mut self, text: impl Into<String>) {
        if self.is_tap_armed() {
            log::debug!("keyboard input ignored: field is tap-armed");
            return;
        }
        self.text = text.into();
        self.text_changed();
    }

    /// Set the hint. An existing dialog is retitled.
    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.config.hint = non_empty(hint.into());
        let title = self.dialog_title();
        if let Mode::TapArmed(Strategy::Choices {
            dialog: Some(dialog),
            ..
        }) = &mut self.mode
        {
            dialog.set_title(title);
        }
    }

    /// Show a validation message without touching the text.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    /// Hide the validation message.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Set the keyboard class used in free-text mode.
    pub fn set_input_type(&mut self, input_type: InputType) {
        self.config.input_type = input_type;
    }

    /// Set the maximum line count.
    pub fn set_max_lines(&mut self, max_lines: u32) {
        self.config.max_lines = max_lines;
    }

    /// Set the minimum line count.
    pub fn set_min_lines(&mut self, min_lines: u32) {
        self.config.min_lines = min_lines;
    }

    /// Set the exact line count.
    pub fn set_lines(&mut self, lines: u32) {
        self.config.lines = lines;
    }

    /// Set the text size.
    pub fn set_text_size(&mut self, size: f64) {
        self.config.text_size = Some(size);
    }

    /// Arm the field with a custom disambiguation callback.
    pub fn set_disambiguation_callback(&mut self, callback: impl FnMut(&str) -> Deferred + 'static) {
        self.arm(Strategy::Custom(Box::new(callback)));
    }

    /// Arm the field with a prepared choice list.
    pub fn set_choices(&mut self, choices: ChoiceSet<T>) {
        self.arm(Strategy::Choices {
            choices,
            dialog: None,
        });
    }

    /// Change how choices are labelled.
    ///
    /// Arms the field with an empty choice list if it has none yet. Any built dialog is dropped.
    pub fn set_string_projector(&mut self, projector: impl Fn(&T) -> String + 'static) {
        match &mut self.mode {
            Mode::TapArmed(Strategy::Choices { choices, dialog }) => {
                choices.set_projector(projector);
                *dialog = None;
            }
            _ => self.set_choices(ChoiceSet::with_projector(Vec::new(), projector)),
        }
    }

    /// Set or replace the selection listener.
    pub fn set_selection_listener(&mut self, listener: impl FnMut(&T, usize) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the selection listener.
    pub fn clear_selection_listener(&mut self) {
        self.listener = None;
    }

    /// Select `index` and show its label, or clear the selection with `None`.
    ///
    /// The label replaces the text, but the selection listener is not notified and the
    /// validation error is left alone. Clearing the selection leaves the text as is.
    pub fn set_selected_index(&mut self, index: Option<usize>) -> Result<(), FieldError> {
        let Mode::TapArmed(Strategy::Choices { choices, .. }) = &mut self.mode else {
            return Err(FieldError::NoChoices);
        };
        choices.select(index)?;
        if let Some(label) = choices.selected_label() {
            self.text.clear();
            self.text.push_str(label);
            self.text_changed();
        }
        Ok(())
    }

    /// The selected index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.choices().and_then(ChoiceSet::selected_index)
    }

    /// The selected item.
    ///
    /// Callers must ensure a selection exists; without one this reports
    /// [`ChoiceError::NoSelection`](understory_selection::ChoiceError::NoSelection).
    pub fn selected_item(&self) -> Result<&T, FieldError> {
        let choices = self.choices().ok_or(FieldError::NoChoices)?;
        Ok(choices.selected_item()?)
    }

    /// Commit choice `index`: show its label, clear the error, select it and notify the
    /// listener once.
    ///
    /// Returns `false`, after logging, if there is no such choice.
    pub fn commit_index(&mut self, index: usize) -> bool {
        let Mode::TapArmed(Strategy::Choices { choices, .. }) = &mut self.mode else {
            log::warn!("commit of choice {index} ignored: field has no choice list");
            return false;
        };
        let (item, label) = match choices.choose(index) {
            Ok(chosen) => chosen,
            Err(err) => {
                log::warn!("commit ignored: {err}");
                return false;
            }
        };
        self.text.clear();
        self.text.push_str(label);
        self.error = None;
        #[cfg(feature = "std")]
        self.watchers.emit(&self.text);
        if let Some(listener) = self.listener.as_mut() {
            listener(item, index);
        }
        true
    }

    /// Feed a touch event.
    ///
    /// A clean tap is resolved before the gesture state is reset, so anything the resolution
    /// triggers still observes the touch in progress.
    pub fn handle_touch(&mut self, event: TouchEvent, host: &mut dyn FieldHost) -> TouchOutcome {
        if !self.attached || !self.is_tap_armed() {
            return TouchOutcome::Passthrough;
        }
        match event {
            TouchEvent::Up(_) => {
                let outcome = match self.gesture.classify_release() {
                    TapResult::Tap => TouchOutcome::Resolved(self.resolve_tap(host)),
                    TapResult::Drag => TouchOutcome::Dragged,
                };
                self.gesture.reset();
                outcome
            }
            other => {
                self.gesture.handle(other);
                TouchOutcome::Consumed
            }
        }
    }

    fn resolve_tap(&mut self, host: &mut dyn FieldHost) -> ResolveOutcome {
        if let Err(err) = host.hide_soft_input() {
            log::debug!("soft input not hidden: {err}");
        }

        // A result that arrived since the last poll is delivered before anything else.
        if let Some(deferred) = self.pending.take() {
            return match self.settle(deferred, None) {
                ResolveOutcome::Pending => {
                    log::debug!("tap ignored: disambiguation already pending");
                    ResolveOutcome::Busy
                }
                settled => settled,
            };
        }

        let title = self.dialog_title();
        let deferred = match &mut self.mode {
            Mode::FreeText => {
                log::debug!("tap ignored: field is not armed");
                return ResolveOutcome::Empty;
            }
            Mode::TapArmed(Strategy::Custom(callback)) => callback(&self.text),
            Mode::TapArmed(Strategy::Choices { choices, dialog }) => {
                let dialog = dialog.get_or_insert_with(|| {
                    self.dialog_builds += 1;
                    log::debug!("building choice dialog #{}", self.dialog_builds);
                    ChoiceDialog::new(self.dialog_builds, String::new(), choices.labels().to_vec())
                });
                if !title.is_empty() {
                    dialog.set_title(title);
                }
                if dialog.is_showing() {
                    return ResolveOutcome::DialogAlreadyShowing;
                }
                dialog.set_showing(true);
                host.present_dialog(dialog);
                return ResolveOutcome::DialogShown;
            }
        };
        self.settle(deferred, None)
    }

    /// Check on an outstanding custom callback result without registering for a wakeup.
    ///
    /// Returns `None` when nothing is outstanding.
    pub fn poll_resolution(&mut self) -> Option<ResolveOutcome> {
        let deferred = self.pending.take()?;
        Some(self.settle(deferred, None))
    }

    /// Check on an outstanding custom callback result, waking `cx` when it arrives.
    ///
    /// Call from the UI thread's event loop. While this returns `Some(Pending)`, the waker in
    /// `cx` is woken once the producer resolves or drops its [`Resolver`](crate::Resolver).
    /// Returns `None` when nothing is outstanding.
    pub fn poll_resolution_with(&mut self, cx: &mut Context<'_>) -> Option<ResolveOutcome> {
        let deferred = self.pending.take()?;
        Some(self.settle(deferred, Some(cx)))
    }

    fn settle(&mut self, mut deferred: Deferred, cx: Option<&mut Context<'_>>) -> ResolveOutcome {
        let poll = match cx {
            Some(cx) => Pin::new(&mut deferred).poll(cx),
            None => deferred.try_take(),
        };
        match poll {
            Poll::Ready(Some(text)) => {
                self.set_text(text);
                ResolveOutcome::Committed
            }
            Poll::Ready(None) => ResolveOutcome::Empty,
            Poll::Pending => {
                self.pending = Some(deferred);
                ResolveOutcome::Pending
            }
        }
    }

    /// The user picked dialog entry `index`. Hides the dialog and commits the choice.
    ///
    /// Picks reported while no dialog is showing (for example after [`PickField::detach`]) are
    /// ignored. Returns whether a choice was committed.
    pub fn on_dialog_pick(&mut self, index: usize) -> bool {
        let Some(dialog) = self.showing_dialog() else {
            log::warn!("dialog pick {index} ignored: no dialog is showing");
            return false;
        };
        dialog.set_showing(false);
        self.commit_index(index)
    }

    /// The dialog was dismissed without a pick.
    pub fn on_dialog_dismissed(&mut self) {
        if let Some(dialog) = self.showing_dialog() {
            dialog.set_showing(false);
        }
    }

    /// The field's surface became live again.
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// The field's surface went away.
    ///
    /// Any outstanding custom callback result is discarded, the dialog is hidden, and touch
    /// events pass through until [`PickField::attach`].
    pub fn detach(&mut self) {
        self.attached = false;
        if self.pending.take().is_some() {
            log::debug!("field detached: pending disambiguation discarded");
        }
        self.on_dialog_dismissed();
        self.gesture.reset();
    }

    /// Subscribe to text changes. Each call returns an independent stream.
    #[cfg(feature = "std")]
    pub fn text_changes(&mut self) -> TextChanges {
        self.watchers.subscribe()
    }

    /// Number of live text-change subscribers. Dropped streams are pruned.
    #[cfg(feature = "std")]
    pub fn text_change_subscribers(&mut self) -> usize {
        self.watchers.live()
    }

    fn arm(&mut self, strategy: Strategy<T>) {
        if self.pending.take().is_some() {
            log::debug!("strategy replaced: pending disambiguation discarded");
        }
        self.mode = Mode::TapArmed(strategy);
        self.gesture.reset();
    }

    fn showing_dialog(&mut self) -> Option<&mut ChoiceDialog> {
        match &mut self.mode {
            Mode::TapArmed(Strategy::Choices {
                dialog: Some(dialog),
                ..
            }) if dialog.is_showing() => Some(dialog),
            _ => None,
        }
    }

    fn dialog_title(&self) -> String {
        self.config
            .hint
            .as_deref()
            .map(|hint| strip_marker(hint, self.config.emphasis_marker))
            .unwrap_or_default()
    }

    fn text_changed(&mut self) {
        #[cfg(feature = "std")]
        self.watchers.emit(&self.text);
    }
}

impl<T: ToString + 'static> PickField<T> {
    /// Replace the choices, labelling new ones with [`ToString`].
    ///
    /// Arms the field with a choice list if it has none yet. The selection is cleared and any
    /// built dialog is dropped, so the next tap shows the new items.
    pub fn set_items(&mut self, items: Vec<T>) {
        match &mut self.mode {
            Mode::TapArmed(Strategy::Choices { choices, dialog }) => {
                choices.set_items(items);
                *dialog = None;
            }
            _ => self.set_choices(ChoiceSet::new(items)),
        }
    }
}

impl<T: PartialEq> PickField<T> {
    /// Select the first choice equal to `item` and show its label, or clear the selection.
    ///
    /// An item that is not among the choices clears the selection. The listener is not notified.
    pub fn set_selected_item(&mut self, item: Option<&T>) -> Result<Option<usize>, FieldError> {
        let Mode::TapArmed(Strategy::Choices { choices, .. }) = &mut self.mode else {
            return Err(FieldError::NoChoices);
        };
        let selected = choices.select_item(item);
        if let Some(label) = choices.selected_label() {
            self.text.clear();
            self.text.push_str(label);
            self.text_changed();
        }
        Ok(selected)
    }
}

impl<T> Default for PickField<T> {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for PickField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickField")
            .field("config", &self.config)
            .field("text", &self.text)
            .field("error", &self.error)
            .field("mode", &self.mode())
            .field("choices", &self.choices())
            .field("dialog", &self.dialog())
            .field("pending", &self.pending.is_some())
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}
