// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap recognition with touch slop.
//!
//! [`TapState`] tracks one continuous touch (down, any number of moves, then up or cancel) and
//! decides whether its release should count as a tap. The decision only depends on how far the
//! pointer strayed from where it went down:
//!
//! - While both axis displacements stay strictly below the touch slop, the touch is a tap
//!   candidate.
//! - As soon as a move reaches the slop on either axis, the slop is *broken*. A broken slop
//!   stays broken for the rest of the touch, even if the pointer later returns to its origin.
//! - Release on an unbroken slop yields [`TapResult::Tap`], otherwise [`TapResult::Drag`].
//! - Cancel never yields anything.
//!
//! Both release and cancel reset the tracker to its idle state (origin at `(0, 0)`, slop intact).
//!
//! This is what keeps a list row or a picker field from reacting when the user only meant to
//! scroll past it.
//!
//! ## Usage
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::tap::{TapResult, TapState};
//!
//! let mut state = TapState::new(10.0);
//!
//! // 5px of jitter is still a tap.
//! state.on_down(Point::new(100.0, 100.0));
//! state.on_move(Point::new(105.0, 100.0));
//! assert_eq!(state.on_up(Point::new(105.0, 100.0)), TapResult::Tap);
//!
//! // 15px is a drag, even after coming back.
//! state.on_down(Point::new(100.0, 100.0));
//! assert!(state.on_move(Point::new(115.0, 100.0)));
//! state.on_move(Point::new(100.0, 100.0));
//! assert_eq!(state.on_up(Point::new(100.0, 100.0)), TapResult::Drag);
//! ```
//!
//! ## Splitting release
//!
//! [`TapState::on_up`] classifies and resets in one call. Owners that need to act on a tap while
//! the touch is still formally in progress (so that anything they trigger observes the
//! pre-release state) can call [`TapState::classify_release`], do their work, and then call
//! [`TapState::reset`].
//!
//! ```
//! # use kurbo::Point;
//! # use understory_event_state::tap::{TapResult, TapState};
//! let mut state = TapState::new(8.0);
//! state.on_down(Point::new(0.0, 0.0));
//! if state.classify_release() == TapResult::Tap {
//!     // open a picker, etc.
//! }
//! state.reset();
//! assert_eq!(state.origin(), Point::ZERO);
//! ```

use kurbo::Point;

/// Touch slop used when the host does not provide one, in logical pixels.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Raw pointer input for a single continuous touch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TouchEvent {
    /// The pointer went down at the given position.
    Down(Point),
    /// The pointer moved to the given position.
    Move(Point),
    /// The pointer was released at the given position.
    Up(Point),
    /// The touch was taken away from us (for example by a scrolling parent).
    Cancel,
}

/// Outcome of releasing a touch.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TapResult {
    /// The touch never broke the slop.
    Tap,
    /// The slop was broken at some point during the touch.
    Drag,
}

/// Tap vs drag tracker for one pointer.
#[derive(Clone, Debug)]
pub struct TapState {
    touch_slop: f64,
    origin: Point,
    slop_broken: bool,
}

impl TapState {
    /// Create a tracker that breaks the slop once a move reaches `touch_slop` on either axis.
    pub fn new(touch_slop: f64) -> Self {
        Self {
            touch_slop,
            origin: Point::ZERO,
            slop_broken: false,
        }
    }

    /// The configured touch slop.
    pub fn touch_slop(&self) -> f64 {
        self.touch_slop
    }

    /// Where the current touch went down, or `(0, 0)` when idle.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Whether the current touch has broken the slop.
    pub fn is_slop_broken(&self) -> bool {
        self.slop_broken
    }

    /// Record a pointer down. Starts a fresh touch even if the previous one never ended.
    pub fn on_down(&mut self, position: Point) {
        self.origin = position;
        self.slop_broken = false;
    }

    /// Record a pointer move.
    ///
    /// Returns `true` only for the move that newly broke the slop.
    pub fn on_move(&mut self, position: Point) -> bool {
        if self.slop_broken {
            return false;
        }
        let dx = (position.x - self.origin.x).abs();
        let dy = (position.y - self.origin.y).abs();
        if dx >= self.touch_slop || dy >= self.touch_slop {
            log::trace!("touch slop broken: dx={dx} dy={dy} slop={}", self.touch_slop);
            self.slop_broken = true;
            return true;
        }
        false
    }

    /// Classify a release without resetting. Pair with [`TapState::reset`].
    pub fn classify_release(&self) -> TapResult {
        if self.slop_broken {
            TapResult::Drag
        } else {
            TapResult::Tap
        }
    }

    /// Record a pointer release: classify, then reset.
    ///
    /// The release position is not used; only moves can break the slop.
    pub fn on_up(&mut self, _position: Point) -> TapResult {
        let result = self.classify_release();
        self.reset();
        result
    }

    /// Abandon the current touch without producing a result.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Return to idle: origin `(0, 0)`, slop intact.
    pub fn reset(&mut self) {
        self.origin = Point::ZERO;
        self.slop_broken = false;
    }

    /// Feed any [`TouchEvent`]. Returns `Some` only for releases.
    pub fn handle(&mut self, event: TouchEvent) -> Option<TapResult> {
        match event {
            TouchEvent::Down(p) => {
                self.on_down(p);
                None
            }
            TouchEvent::Move(p) => {
                self.on_move(p);
                None
            }
            TouchEvent::Up(p) => Some(self.on_up(p)),
            TouchEvent::Cancel => {
                self.cancel();
                None
            }
        }
    }
}

impl Default for TapState {
    fn default() -> Self {
        Self::new(DEFAULT_TOUCH_SLOP)
    }
}
