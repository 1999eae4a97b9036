// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters for a [`PickField`](crate::PickField).

use alloc::string::String;

use understory_event_state::tap::DEFAULT_TOUCH_SLOP;

/// Marker stripped from the hint when it is used as a dialog title.
///
/// Forms commonly render required fields as `*Name`; the picker dialog should just say `Name`.
pub const DEFAULT_EMPHASIS_MARKER: char = '*';

/// Keyboard class requested from the host's input method.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputType {
    /// No keyboard at all. Tap-armed fields always report this.
    Null,
    /// Generic text.
    #[default]
    Text,
    /// Numbers.
    Number,
    /// Phone numbers.
    Phone,
    /// Dates and times.
    Datetime,
}

/// Optional construction parameters, typically resolved from host layout or styling data.
///
/// ```
/// use understory_pick_field::{FieldConfig, InputType};
///
/// let config = FieldConfig::default()
///     .with_hint("*Country")
///     .with_input_type(InputType::Text)
///     .with_touch_slop(12.0);
/// assert_eq!(config.lines, 1);
/// assert_eq!(config.text_size, None);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldConfig {
    /// Floating label text. Also titles the picker dialog.
    pub hint: Option<String>,
    /// Keyboard class used while the field is in free-text mode.
    pub input_type: InputType,
    /// Maximum visible lines.
    pub max_lines: u32,
    /// Minimum visible lines.
    pub min_lines: u32,
    /// Exact visible lines.
    pub lines: u32,
    /// Text size in host units, or `None` for the theme default.
    pub text_size: Option<f64>,
    /// Movement on either axis that turns a tap into a drag.
    pub touch_slop: f64,
    /// First occurrence is removed from the hint when titling the dialog.
    pub emphasis_marker: char,
}

impl FieldConfig {
    /// Set the hint. An empty hint is stored as `None`.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = non_empty(hint.into());
        self
    }

    /// Set the input type.
    pub fn with_input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    /// Set minimum, maximum and exact line counts at once.
    pub fn with_lines(mut self, lines: u32) -> Self {
        self.lines = lines;
        self.min_lines = lines;
        self.max_lines = lines;
        self
    }

    /// Set the maximum line count.
    pub fn with_max_lines(mut self, max_lines: u32) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Set the minimum line count.
    pub fn with_min_lines(mut self, min_lines: u32) -> Self {
        self.min_lines = min_lines;
        self
    }

    /// Set the text size.
    pub fn with_text_size(mut self, size: f64) -> Self {
        self.text_size = Some(size);
        self
    }

    /// Set the touch slop.
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Set the emphasis marker stripped from dialog titles.
    pub fn with_emphasis_marker(mut self, marker: char) -> Self {
        self.emphasis_marker = marker;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            hint: None,
            input_type: InputType::Text,
            max_lines: 1,
            min_lines: 1,
            lines: 1,
            text_size: None,
            touch_slop: DEFAULT_TOUCH_SLOP,
            emphasis_marker: DEFAULT_EMPHASIS_MARKER,
        }
    }
}

pub(crate) fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
