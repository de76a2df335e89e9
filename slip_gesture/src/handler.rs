// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture callbacks.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Vec2;

use crate::TouchEvent;

/// Receiver for recognized gesture phases.
///
/// Every method has an empty default body, so implementors only override the
/// callbacks they care about.
///
/// The end callbacks (`on_tap`, `on_top`, `on_bottom`, `on_left`, `on_right`,
/// `on_resume`) receive the touch-end event for convenience, for example to
/// inspect its target. They carry no displacement of their own: direction and
/// magnitude were already reported through [`on_move`](Self::on_move).
pub trait GestureHandler<K> {
    /// A new touch began.
    fn on_start(&mut self) {}

    /// The finger moved; `delta` is `origin - current`.
    ///
    /// This is the only per-frame signal during a drag.
    fn on_move(&mut self, delta: Vec2) {
        let _ = delta;
    }

    /// The touch ended without meaningful movement.
    fn on_tap(&mut self, event: &TouchEvent<K>) {
        let _ = event;
    }

    /// The touch ended as a swipe towards the top edge.
    fn on_top(&mut self, event: &TouchEvent<K>) {
        let _ = event;
    }

    /// The touch ended as a swipe towards the bottom edge.
    fn on_bottom(&mut self, event: &TouchEvent<K>) {
        let _ = event;
    }

    /// The touch ended as a swipe towards the left edge.
    fn on_left(&mut self, event: &TouchEvent<K>) {
        let _ = event;
    }

    /// The touch ended as a swipe towards the right edge.
    fn on_right(&mut self, event: &TouchEvent<K>) {
        let _ = event;
    }

    /// The touch ended too short or too diagonal to be a swipe.
    fn on_resume(&mut self, event: &TouchEvent<K>) {
        let _ = event;
    }
}

type StartFn = Box<dyn FnMut()>;
type MoveFn = Box<dyn FnMut(Vec2)>;
type EndFn<K> = Box<dyn FnMut(&TouchEvent<K>)>;

/// A [`GestureHandler`] assembled from optional closures.
///
/// Unset callbacks do nothing.
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// use slip_gesture::{Callbacks, GestureHandler, TouchEvent};
///
/// let taps = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&taps);
/// let mut callbacks = Callbacks::<u32>::new().tap(move |_| counter.set(counter.get() + 1));
///
/// callbacks.on_tap(&TouchEvent::released(1));
/// callbacks.on_left(&TouchEvent::released(1));
/// assert_eq!(taps.get(), 1);
/// ```
pub struct Callbacks<K> {
    start: Option<StartFn>,
    moving: Option<MoveFn>,
    top: Option<EndFn<K>>,
    left: Option<EndFn<K>>,
    right: Option<EndFn<K>>,
    bottom: Option<EndFn<K>>,
    tap: Option<EndFn<K>>,
    resume: Option<EndFn<K>>,
}

impl<K> Callbacks<K> {
    /// Create a set of callbacks where every callback is a no-op.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: None,
            moving: None,
            top: None,
            left: None,
            right: None,
            bottom: None,
            tap: None,
            resume: None,
        }
    }

    /// Set the touch-start callback.
    #[must_use]
    pub fn start(mut self, f: impl FnMut() + 'static) -> Self {
        self.start = Some(Box::new(f));
        self
    }

    /// Set the per-move callback.
    #[must_use]
    pub fn moving(mut self, f: impl FnMut(Vec2) + 'static) -> Self {
        self.moving = Some(Box::new(f));
        self
    }

    /// Set the swipe-up callback.
    #[must_use]
    pub fn top(mut self, f: impl FnMut(&TouchEvent<K>) + 'static) -> Self {
        self.top = Some(Box::new(f));
        self
    }

    /// Set the swipe-left callback.
    #[must_use]
    pub fn left(mut self, f: impl FnMut(&TouchEvent<K>) + 'static) -> Self {
        self.left = Some(Box::new(f));
        self
    }

    /// Set the swipe-right callback.
    #[must_use]
    pub fn right(mut self, f: impl FnMut(&TouchEvent<K>) + 'static) -> Self {
        self.right = Some(Box::new(f));
        self
    }

    /// Set the swipe-down callback.
    #[must_use]
    pub fn bottom(mut self, f: impl FnMut(&TouchEvent<K>) + 'static) -> Self {
        self.bottom = Some(Box::new(f));
        self
    }

    /// Set the tap callback.
    #[must_use]
    pub fn tap(mut self, f: impl FnMut(&TouchEvent<K>) + 'static) -> Self {
        self.tap = Some(Box::new(f));
        self
    }

    /// Set the resume callback.
    #[must_use]
    pub fn resume(mut self, f: impl FnMut(&TouchEvent<K>) + 'static) -> Self {
        self.resume = Some(Box::new(f));
        self
    }
}

impl<K> Default for Callbacks<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Callbacks<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("start", &self.start.is_some())
            .field("moving", &self.moving.is_some())
            .field("top", &self.top.is_some())
            .field("left", &self.left.is_some())
            .field("right", &self.right.is_some())
            .field("bottom", &self.bottom.is_some())
            .field("tap", &self.tap.is_some())
            .field("resume", &self.resume.is_some())
            .finish()
    }
}

fn call_end<K>(slot: &mut Option<EndFn<K>>, event: &TouchEvent<K>) {
    if let Some(f) = slot {
        f(event);
    }
}

impl<K> GestureHandler<K> for Callbacks<K> {
    fn on_start(&mut self) {
        if let Some(f) = &mut self.start {
            f();
        }
    }

    fn on_move(&mut self, delta: Vec2) {
        if let Some(f) = &mut self.moving {
            f(delta);
        }
    }

    fn on_tap(&mut self, event: &TouchEvent<K>) {
        call_end(&mut self.tap, event);
    }

    fn on_top(&mut self, event: &TouchEvent<K>) {
        call_end(&mut self.top, event);
    }

    fn on_bottom(&mut self, event: &TouchEvent<K>) {
        call_end(&mut self.bottom, event);
    }

    fn on_left(&mut self, event: &TouchEvent<K>) {
        call_end(&mut self.left, event);
    }

    fn on_right(&mut self, event: &TouchEvent<K>) {
        call_end(&mut self.right, event);
    }

    fn on_resume(&mut self, event: &TouchEvent<K>) {
        call_end(&mut self.resume, event);
    }
}
