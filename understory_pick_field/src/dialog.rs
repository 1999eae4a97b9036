// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in single-choice dialog model.

use alloc::string::String;
use alloc::vec::Vec;

/// A single-choice list dialog, as the field wants it shown.
///
/// The field builds one lazily on the first tap and keeps it until its items or its strategy
/// change. Hosts render it; they never construct it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceDialog {
    serial: u64,
    title: String,
    labels: Vec<String>,
    showing: bool,
}

impl ChoiceDialog {
    pub(crate) fn new(serial: u64, title: String, labels: Vec<String>) -> Self {
        Self {
            serial,
            title,
            labels,
            showing: false,
        }
    }

    /// Build number within the owning field. A new value means the old dialog was thrown away.
    pub fn serial(&self) -> u64 {
        self.serial
    }

    /// Dialog title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Entries, in order. Picking entry `i` commits choice `i`.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether the dialog is currently presented.
    pub fn is_showing(&self) -> bool {
        self.showing
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_showing(&mut self, showing: bool) {
        self.showing = showing;
    }
}

/// Remove the first `marker` from `hint`.
pub(crate) fn strip_marker(hint: &str, marker: char) -> String {
    hint.replacen(marker, "", 1)
}
