// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slip Page: a three-slot page-flip controller.
//!
//! ## Overview
//!
//! This crate presents an ordered list of scenes through exactly three page
//! containers ("slots"), recycling them as the user drags vertically. One
//! slot holds the settled scene, one holds the candidate the current drag is
//! revealing, and the third is parked off screen. Slots trade roles on every
//! commit; the three roles are always a permutation of the three slots.
//!
//! The controller does not touch any UI toolkit. It drives two collaborator
//! traits implemented by the host:
//!
//! - [`SlotRenderer`]: reports the viewport size and applies a
//!   [`SlotTransform`] (translate, scale, stacking order, duration) to a slot.
//! - [`SceneTemplater`]: injects scene content into a slot and reports which
//!   [`SceneId`] a slot currently holds, so content is only re-injected when it
//!   actually differs.
//!
//! When the host finishes animating a committed transition it calls
//! [`PageFlip::transition_complete`], which runs the scene's `on_show` hook
//! exactly once.
//!
//! ## Gestures
//!
//! [`PageFlip`] implements [`slip_gesture::GestureHandler`]. Attach it to a
//! [`slip_gesture::Recognizer`] with [`PageFlip::gesture_config`]:
//!
//! - touch start → [`PageFlip::move_start`]
//! - touch move → [`PageFlip::move_on`]
//! - swipe up → [`PageFlip::next`], swipe down → [`PageFlip::prev`]
//! - anything else → [`PageFlip::go_back`]
//!
//! ## Boundaries
//!
//! With looping disabled, dragging forward from the last scene or back from
//! the first one is rejected. With looping enabled the cursor wraps.
//!
//! ## Animation
//!
//! [`FlipEasing`] holds the tuned curve: the page being covered recedes to
//! `recede_scale`, the incoming page follows the finger at `follow_ratio`, and
//! commit/revert transitions take `settle_duration_ms`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod easing;
mod host;
mod scene;
mod slot;

pub use controller::{
    FlipConfig, FlipOutcome, FlipPhase, MIN_SCENES, PAGE_AXIS_THRESHOLD, PageFlip,
};
pub use easing::{Direction, FlipEasing, Frame};
pub use host::{SceneTemplater, SlotRenderer, SlotTransform};
pub use scene::{InitPolicy, Scene, SceneHook, SceneId};
pub use slot::{SlotId, SlotRing, third_slot};
