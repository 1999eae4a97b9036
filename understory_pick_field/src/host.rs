// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The toolkit side of a [`PickField`](crate::PickField).

use alloc::string::String;

use crate::dialog::ChoiceDialog;

/// Failures reported by a [`FieldHost`].
///
/// The field never propagates these; they are logged and the interaction continues.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// There is no input method to talk to (headless, detached window, ...).
    #[error("soft input method unavailable")]
    SoftInputUnavailable,
    /// Anything else the toolkit wants to report.
    #[error("{0}")]
    Other(String),
}

/// Services a field needs from the host toolkit while resolving a tap.
///
/// All calls happen synchronously on the UI thread, from inside
/// [`PickField::handle_touch`](crate::PickField::handle_touch).
pub trait FieldHost {
    /// Hide the on-screen keyboard if it is showing.
    fn hide_soft_input(&mut self) -> Result<(), HostError>;

    /// Show `dialog`. Called only when it is not already showing.
    ///
    /// The host reports the outcome later through
    /// [`PickField::on_dialog_pick`](crate::PickField::on_dialog_pick) or
    /// [`PickField::on_dialog_dismissed`](crate::PickField::on_dialog_dismissed).
    fn present_dialog(&mut self, dialog: &ChoiceDialog);
}
