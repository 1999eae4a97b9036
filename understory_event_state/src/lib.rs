// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: small gesture state machines for pointer input.
//!
//! ## Overview
//!
//! Host toolkits deliver raw pointer events (down, move, up, cancel). Widgets usually want a
//! higher-level signal instead, such as "the user tapped me" as opposed to "the user started
//! scrolling and happened to begin on top of me". The state machines in this crate turn the
//! former into the latter without knowing anything about widgets, trees, or rendering.
//!
//! - [`tap`]: classifies a single continuous touch as a tap or a drag using a touch-slop
//!   threshold. Once the slop is broken it stays broken until the touch ends.
//!
//! ## Example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::tap::{TapResult, TapState};
//!
//! let mut state = TapState::new(10.0);
//! state.on_down(Point::new(100.0, 100.0));
//! state.on_move(Point::new(105.0, 100.0));
//! assert_eq!(state.on_up(Point::new(105.0, 100.0)), TapResult::Tap);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

pub mod tap;
