// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by selection commands.

use understory_selection::ChoiceError;

/// Errors returned by selection commands on a [`PickField`](crate::PickField).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// The field is not armed with a choice list.
    #[error("field has no choice list")]
    NoChoices,
    /// The choice list rejected the request.
    #[error(transparent)]
    Choice(#[from] ChoiceError),
}
