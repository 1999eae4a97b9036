// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_selection --heading-base-level=0

//! Understory Selection: single-selection choice lists.
//!
//! A [`ChoiceSet`] is the model behind pickers, dropdowns and "tap to choose" fields: an ordered
//! list of items, the label each item is displayed with, and at most one selected index.
//!
//! Labels are computed once, when the items or the label projector change, so hosts can hand
//! [`ChoiceSet::labels`] straight to a list widget without re-projecting on every frame.
//!
//! ```
//! use understory_selection::{ChoiceError, ChoiceSet};
//!
//! let mut colors = ChoiceSet::new(vec!["Red", "Green", "Blue"]);
//! assert_eq!(colors.labels(), ["Red", "Green", "Blue"]);
//! assert_eq!(colors.selected_item(), Err(ChoiceError::NoSelection));
//!
//! colors.select(Some(1)).unwrap();
//! assert_eq!(colors.selected_item(), Ok(&"Green"));
//!
//! // New items invalidate the old selection.
//! colors.set_items(vec!["Cyan", "Magenta"]);
//! assert_eq!(colors.selected_index(), None);
//! ```
//!
//! Custom labels come from a projector:
//!
//! ```
//! use understory_selection::ChoiceSet;
//!
//! struct Size { name: &'static str, inches: u32 }
//!
//! let sizes = ChoiceSet::with_projector(
//!     vec![Size { name: "Small", inches: 10 }, Size { name: "Large", inches: 14 }],
//!     |s: &Size| format!("{} ({}\")", s.name, s.inches),
//! );
//! assert_eq!(sizes.label(1), Some("Large (14\")"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Maps an item to the label it is displayed with.
pub type Projector<T> = Box<dyn Fn(&T) -> String>;

/// Contract violations reported by [`ChoiceSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    /// An index did not name an item.
    #[error("choice index {index} out of range for {len} items")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of items at the time of the call.
        len: usize,
    },
    /// A selected item was requested while nothing is selected.
    #[error("no choice is selected")]
    NoSelection,
}

/// Ordered items with projected labels and an optional selection.
pub struct ChoiceSet<T> {
    items: Vec<T>,
    labels: Vec<String>,
    projector: Projector<T>,
    selected: Option<usize>,
}

impl<T: ToString + 'static> ChoiceSet<T> {
    /// Create a choice set labelled with each item's [`ToString`] output.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_projector(items, T::to_string)
    }
}

impl<T> ChoiceSet<T> {
    /// Create a choice set labelled by `projector`.
    pub fn with_projector(items: Vec<T>, projector: impl Fn(&T) -> String + 'static) -> Self {
        let projector: Projector<T> = Box::new(projector);
        let labels = items.iter().map(&projector).collect();
        Self {
            items,
            labels,
            projector,
            selected: None,
        }
    }

    /// Replace the items. Labels are recomputed and the selection is cleared.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.labels = items.iter().map(&self.projector).collect();
        self.items = items;
        if self.selected.take().is_some() {
            log::debug!("choice items replaced, selection cleared");
        }
    }

    /// Replace the label projector and recompute every label. The selection is kept.
    pub fn set_projector(&mut self, projector: impl Fn(&T) -> String + 'static) {
        self.projector = Box::new(projector);
        self.labels = self.items.iter().map(&self.projector).collect();
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items, in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The display labels, parallel to [`ChoiceSet::items`].
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The item at `index`.
    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The label at `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// The selected index, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Select `index`, or clear the selection with `None`.
    ///
    /// An out-of-range index is rejected and leaves the selection unchanged.
    pub fn select(&mut self, index: Option<usize>) -> Result<(), ChoiceError> {
        if let Some(index) = index {
            self.check(index)?;
        }
        self.selected = index;
        Ok(())
    }

    /// Select `index` and return the chosen item together with its label.
    pub fn choose(&mut self, index: usize) -> Result<(&T, &str), ChoiceError> {
        self.check(index)?;
        self.selected = Some(index);
        Ok((&self.items[index], &self.labels[index]))
    }

    /// The selected item.
    ///
    /// Callers must ensure a selection exists; asking without one is reported as
    /// [`ChoiceError::NoSelection`].
    pub fn selected_item(&self) -> Result<&T, ChoiceError> {
        let index = self.selected.ok_or(ChoiceError::NoSelection)?;
        self.items.get(index).ok_or(ChoiceError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// The label of the selected item, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.and_then(|i| self.label(i))
    }

    /// Check that `index` names an item.
    pub fn check(&self, index: usize) -> Result<(), ChoiceError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(ChoiceError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<T: PartialEq> ChoiceSet<T> {
    /// Index of the first item equal to `item`.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|candidate| candidate == item)
    }

    /// Select the first item equal to `item`, or clear the selection.
    ///
    /// Passing `None`, or an item that is not in the set, clears the selection.
    /// Returns the new selected index.
    pub fn select_item(&mut self, item: Option<&T>) -> Option<usize> {
        self.selected = item.and_then(|item| self.position(item));
        if item.is_some() && self.selected.is_none() {
            log::debug!("selected item not found among {} choices", self.items.len());
        }
        self.selected
    }
}

impl<T: ToString + 'static> Default for ChoiceSet<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: fmt::Debug> fmt::Debug for ChoiceSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChoiceSet")
            .field("items", &self.items)
            .field("labels", &self.labels)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    #[test]
    fn labels_follow_to_string() {
        let set = ChoiceSet::new(vec![1, 22, 333]);
        assert_eq!(set.labels(), ["1", "22", "333"]);
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());
    }

    #[test]
    fn projector_labels() {
        let set = ChoiceSet::with_projector(vec![1, 2], |n: &i32| format!("#{n}"));
        assert_eq!(set.label(0), Some("#1"));
        assert_eq!(set.label(1), Some("#2"));
        assert_eq!(set.label(2), None);
    }

    #[test]
    fn set_projector_relabels_and_keeps_selection() {
        let mut set = ChoiceSet::new(vec!["a", "b"]);
        set.select(Some(1)).unwrap();
        set.set_projector(|s: &&str| s.to_uppercase());
        assert_eq!(set.labels(), ["A", "B"]);
        assert_eq!(set.selected_index(), Some(1));
        assert_eq!(set.selected_label(), Some("B"));
    }

    #[test]
    fn set_items_clears_selection() {
        let mut set = ChoiceSet::with_projector(vec![1, 2, 3], |n: &i32| format!("{}", n * 10));
        set.select(Some(2)).unwrap();
        set.set_items(vec![7]);
        assert_eq!(set.selected_index(), None);
        // The projector survives the new items.
        assert_eq!(set.labels(), ["70"]);
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut set = ChoiceSet::new(vec!["only"]);
        set.select(Some(0)).unwrap();
        assert_eq!(
            set.select(Some(3)),
            Err(ChoiceError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(set.selected_index(), Some(0));
    }

    #[test]
    fn choose_returns_item_and_label() {
        let mut set = ChoiceSet::with_projector(vec![10, 20], |n: &i32| format!("{n} px"));
        assert_eq!(set.choose(1), Ok((&20, "20 px")));
        assert_eq!(set.selected_index(), Some(1));
        assert_eq!(
            set.choose(2),
            Err(ChoiceError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(set.selected_index(), Some(1));
    }

    #[test]
    fn selected_item_without_selection() {
        let set: ChoiceSet<&str> = ChoiceSet::default();
        assert_eq!(set.selected_item(), Err(ChoiceError::NoSelection));
        assert_eq!(set.selected_label(), None);
    }

    #[test]
    fn select_item_by_value() {
        let mut set = ChoiceSet::new(vec!["Red", "Green", "Blue", "Green"]);
        assert_eq!(set.select_item(Some(&"Green")), Some(1));
        assert_eq!(set.selected_item(), Ok(&"Green"));

        assert_eq!(set.select_item(Some(&"Purple")), None);
        assert_eq!(set.selected_index(), None);

        set.select(Some(0)).unwrap();
        assert_eq!(set.select_item(None), None);
        assert_eq!(set.selected_index(), None);
    }

    #[test]
    fn clear_selection() {
        let mut set = ChoiceSet::new(vec!['x', 'y']);
        set.select(Some(1)).unwrap();
        set.select(None).unwrap();
        assert_eq!(set.selected_index(), None);
    }

    #[test]
    fn debug_lists_items() {
        let set = ChoiceSet::new(vec![1]);
        let text = format!("{set:?}");
        assert!(text.contains("items: [1]"));
    }
}
