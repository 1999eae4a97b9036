// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text-change notifications.
//!
//! Every change to a field's text, whatever its source, produces a [`TextChangedEvent`]
//! carrying the full new text. With the `std` feature, [`PickField::text_changes`] hands out
//! independent [`TextChanges`] streams of those events.
//!
//! [`PickField::text_changes`]: crate::PickField::text_changes

use alloc::string::String;

/// The field's full text after a change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextChangedEvent {
    text: String,
}

impl TextChangedEvent {
    pub(crate) fn new(text: String) -> Self {
        Self { text }
    }

    /// The text after the change.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Take the text out of the event.
    pub fn into_text(self) -> String {
        self.text
    }
}

#[cfg(feature = "std")]
pub use stream::TextChanges;

#[cfg(feature = "std")]
pub(crate) use stream::TextWatchers;

#[cfg(feature = "std")]
mod stream {
    use alloc::string::String;
    use alloc::vec::Vec;
    use core::pin::Pin;
    use core::task::{Context, Poll};

    use futures::channel::mpsc;
    use futures::{Stream, StreamExt};

    use super::TextChangedEvent;

    /// An unbounded stream of [`TextChangedEvent`]s for one subscriber.
    ///
    /// Dropping it unsubscribes. The stream ends when the field is dropped.
    #[derive(Debug)]
    #[must_use = "streams do nothing unless polled"]
    pub struct TextChanges {
        rx: mpsc::UnboundedReceiver<TextChangedEvent>,
    }

    impl TextChanges {
        /// Project the stream onto the text alone.
        pub fn texts(self) -> impl Stream<Item = String> {
            self.map(TextChangedEvent::into_text)
        }
    }

    impl Stream for TextChanges {
        type Item = TextChangedEvent;

        fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
            Pin::new(&mut self.rx).poll_next(cx)
        }
    }

    /// Registered text-change subscribers.
    #[derive(Debug, Default)]
    pub(crate) struct TextWatchers {
        senders: Vec<mpsc::UnboundedSender<TextChangedEvent>>,
    }

    impl TextWatchers {
        /// Register a new subscriber, pruning the ones whose streams were dropped.
        pub(crate) fn subscribe(&mut self) -> TextChanges {
            self.senders.retain(|tx| !tx.is_closed());
            let (tx, rx) = mpsc::unbounded();
            self.senders.push(tx);
            TextChanges { rx }
        }

        /// Send `text` to every live subscriber, dropping the ones that went away.
        pub(crate) fn emit(&mut self, text: &str) {
            if self.senders.is_empty() {
                return;
            }
            let event = TextChangedEvent::new(String::from(text));
            self.senders
                .retain(|tx| tx.unbounded_send(event.clone()).is_ok());
        }

        pub(crate) fn live(&mut self) -> usize {
            self.senders.retain(|tx| !tx.is_closed());
            self.senders.len()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn dropped_subscribers_do_not_pile_up_without_emits() {
            let mut watchers = TextWatchers::default();
            for _ in 0..1000 {
                drop(watchers.subscribe());
            }
            assert!(watchers.senders.len() <= 1);

            let _kept = watchers.subscribe();
            for _ in 0..10 {
                drop(watchers.subscribe());
            }
            assert_eq!(watchers.live(), 1);
        }
    }
}
