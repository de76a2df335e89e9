// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slip Gesture: a single-finger touch gesture recognizer.
//!
//! This crate turns raw touch start/move/end events into a small directional
//! vocabulary ([`Gesture`]): a tap, an axis-dominant swipe towards one of four
//! edges, or a "resume" when the finger travelled too little (or too
//! diagonally) to count as a swipe.
//!
//! It does not bind to any platform event system. Hosts forward each delivered
//! event to a [`Recognizer`] and apply the returned [`EventResponse`] flags
//! (prevent default, stop propagation) to the platform event themselves.
//!
//! ## Concepts
//!
//! - [`TouchEvent`]: the event the host delivers, carrying the target and the
//!   currently active touch points.
//! - [`GestureConfig`]: per-recognizer options, immutable after attaching.
//! - [`GestureHandler`]: named callbacks (`start`, `moving`, `top`, `left`,
//!   `right`, `bottom`, `tap`, `resume`). Every method defaults to a no-op.
//! - [`Callbacks`]: a [`GestureHandler`] assembled from optional closures.
//! - [`classify`]: the pure classification of a net displacement.
//!
//! ## Sign convention
//!
//! Displacement is measured as `origin - current`. A positive `y` means the
//! finger moved up (content should advance), a negative `x` means the finger
//! moved right.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use slip_gesture::{Callbacks, Gesture, GestureConfig, Recognizer, TouchEvent};
//!
//! let mut recognizer = Recognizer::attach(7_u32, GestureConfig::default(), Callbacks::new());
//!
//! recognizer.touch_start(&TouchEvent::single(7, Point::new(100.0, 300.0)));
//! recognizer.touch_move(&TouchEvent::single(7, Point::new(102.0, 200.0)));
//! let outcome = recognizer.touch_end(&TouchEvent::released(7));
//!
//! // The finger moved 100 logical pixels up: a swipe towards the top edge.
//! assert_eq!(outcome.gesture, Some(Gesture::Top));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod classify;
mod event;
mod handler;
mod recognizer;

pub use classify::{Gesture, TAP_SLOP, classify};
pub use event::{EventResponse, TouchEvent, TouchOutcome, Touches};
pub use handler::{Callbacks, GestureHandler};
pub use recognizer::{DEFAULT_AXIS_THRESHOLD, GestureConfig, Recognizer};
