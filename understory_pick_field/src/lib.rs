// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pick_field --heading-base-level=0

//! Understory Pick Field: a headless floating-label input that can act as a picker.
//!
//! ## Overview
//!
//! Forms often mix typed fields with fields whose value comes from a list ("Country",
//! "Color"). Both should look the same: a text field with a floating label. This crate owns the
//! interaction logic of such a field and leaves rendering to the host toolkit.
//!
//! A [`PickField`] starts as a plain text input. Arming it turns it into a picker:
//!
//! - [`PickField::set_items`] / [`PickField::set_choices`] arm it with a built-in single-choice
//!   dialog over a [`ChoiceSet`].
//! - [`PickField::set_disambiguation_callback`] arms it with a custom callback that resolves a
//!   tap into text, possibly asynchronously (see [`Deferred`]).
//!
//! Only one strategy is active at a time; arming again replaces it along with any built dialog.
//!
//! ## Workflow
//!
//! 1) Forward raw touch events to [`PickField::handle_touch`]. Scroll gestures that start on the
//!    field break the touch slop and are ignored; only a clean tap resolves.
//! 2) On a tap, the field asks the [`FieldHost`] to hide the keyboard, then either calls the
//!    custom callback or builds (once) and presents its [`ChoiceDialog`].
//! 3) Report the user's pick with [`PickField::on_dialog_pick`], or a dismissal with
//!    [`PickField::on_dialog_dismissed`]. A pick commits: the label becomes the text, the
//!    validation error is cleared, the index is selected and the selection listener runs once.
//! 4) If a custom callback answers asynchronously, call [`PickField::poll_resolution_with`] from
//!    the UI thread's event loop; its waker fires once the answer arrives, and the next call
//!    commits it. [`PickField::detach`] discards whatever is still outstanding.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::Point;
//! use understory_event_state::tap::TouchEvent;
//! use understory_pick_field::{
//!     ChoiceDialog, FieldConfig, FieldHost, HostError, PickField, ResolveOutcome, TouchOutcome,
//! };
//!
//! #[derive(Default)]
//! struct Host {
//!     shown: Vec<String>,
//! }
//!
//! impl FieldHost for Host {
//!     fn hide_soft_input(&mut self) -> Result<(), HostError> {
//!         Ok(())
//!     }
//!     fn present_dialog(&mut self, dialog: &ChoiceDialog) {
//!         self.shown.push(dialog.title().to_string());
//!     }
//! }
//!
//! let mut field = PickField::new(FieldConfig::default().with_hint("*Color"));
//! field.set_items(vec!["Red", "Green", "Blue"]);
//!
//! let picked = Rc::new(RefCell::new(None));
//! let sink = picked.clone();
//! field.set_selection_listener(move |item: &&str, index| {
//!     *sink.borrow_mut() = Some((item.to_string(), index));
//! });
//!
//! let mut host = Host::default();
//! field.handle_touch(TouchEvent::Down(Point::new(100.0, 100.0)), &mut host);
//! let outcome = field.handle_touch(TouchEvent::Up(Point::new(101.0, 100.0)), &mut host);
//! assert_eq!(outcome, TouchOutcome::Resolved(ResolveOutcome::DialogShown));
//! assert_eq!(host.shown, ["Color"]);
//!
//! assert!(field.on_dialog_pick(1));
//! assert_eq!(field.text(), "Green");
//! assert_eq!(field.selected_index(), Some(1));
//! assert_eq!(*picked.borrow(), Some(("Green".to_string(), 1)));
//! ```
//!
//! ## Errors
//!
//! Toolkit failures ([`HostError`]) and invalid picks never reach the caller; they are logged
//! through the [`log`] facade and the interaction carries on. Selection commands return
//! [`FieldError`].
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies and the
//!   [`PickField::text_changes`] stream.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`FieldConfig`] and [`InputType`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod deferred;
mod dialog;
mod error;
mod field;
mod host;
pub mod text;

pub use config::{DEFAULT_EMPHASIS_MARKER, FieldConfig, InputType};
pub use deferred::{Deferred, Resolver};
pub use dialog::ChoiceDialog;
pub use error::FieldError;
pub use field::{
    DisambiguationCallback, InteractionMode, PREVIEW_PLACEHOLDER, PickField, ResolveOutcome,
    SelectionListener, TouchOutcome,
};
pub use host::{FieldHost, HostError};
pub use understory_selection::{ChoiceError, ChoiceSet};
