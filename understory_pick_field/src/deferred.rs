// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-or-empty results from custom disambiguation callbacks.
//!
//! A callback returns a [`Deferred`] right away. The value behind it may already be there
//! ([`Deferred::ready`], [`Deferred::empty`]) or arrive later through the paired [`Resolver`],
//! possibly from another thread. Dropping the [`Resolver`] without resolving means "no value".
//!
//! ```
//! use core::task::Poll;
//! use understory_pick_field::Deferred;
//!
//! let (resolver, mut deferred) = Deferred::channel();
//! assert_eq!(deferred.try_take(), Poll::Pending);
//!
//! std::thread::spawn(move || resolver.resolve("Lisbon")).join().unwrap();
//! assert_eq!(deferred.try_take(), Poll::Ready(Some("Lisbon".into())));
//! ```

use alloc::string::String;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures::channel::oneshot;

/// Receiving side of a custom disambiguation result.
#[derive(Debug)]
#[must_use = "a dropped Deferred discards its value"]
pub struct Deferred {
    rx: oneshot::Receiver<String>,
}

/// Producing side of a [`Deferred`].
#[derive(Debug)]
pub struct Resolver {
    tx: oneshot::Sender<String>,
}

impl Deferred {
    /// A pending result and the handle that completes it.
    pub fn channel() -> (Resolver, Self) {
        let (tx, rx) = oneshot::channel();
        (Resolver { tx }, Self { rx })
    }

    /// A result that is already available.
    pub fn ready(value: impl Into<String>) -> Self {
        let (resolver, deferred) = Self::channel();
        resolver.resolve(value);
        deferred
    }

    /// A result that is already known to be empty.
    pub fn empty() -> Self {
        let (resolver, deferred) = Self::channel();
        drop(resolver);
        deferred
    }

    /// Check for the result without blocking.
    ///
    /// `Ready(Some(_))` carries the value, `Ready(None)` means the producer gave up, and
    /// `Pending` means it has not answered yet. After `Ready` the result has been taken.
    pub fn try_take(&mut self) -> Poll<Option<String>> {
        match self.rx.try_recv() {
            Ok(Some(value)) => Poll::Ready(Some(value)),
            Ok(None) => Poll::Pending,
            Err(oneshot::Canceled) => Poll::Ready(None),
        }
    }
}

impl Future for Deferred {
    type Output = Option<String>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(Result::ok)
    }
}

impl Resolver {
    /// Deliver the value. Discarded silently if the receiving field has gone away.
    pub fn resolve(self, value: impl Into<String>) {
        if self.tx.send(value.into()).is_err() {
            log::debug!("disambiguation result discarded: receiver dropped");
        }
    }

    /// Give up without a value.
    pub fn dismiss(self) {}

    /// Whether the receiving side no longer wants a value (for example the field was detached).
    pub fn is_canceled(&self) -> bool {
        self.tx.is_canceled()
    }
}
