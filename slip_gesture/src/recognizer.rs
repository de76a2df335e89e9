// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The touch session state machine.

use kurbo::{Point, Vec2};
use tracing::{debug, trace};

use crate::{EventResponse, Gesture, GestureHandler, TouchEvent, TouchOutcome, classify};

/// Default minimum half-displacement along the dominant axis for a swipe.
pub const DEFAULT_AXIS_THRESHOLD: f64 = 20.0;

/// Options for a [`Recognizer`], fixed once attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// When `false` (the default), every touch move asks the host to prevent
    /// the platform's default scrolling.
    pub cancel_prevent_default: bool,
    /// When `true`, touch end asks the host to stop propagation.
    pub stop_propagation: bool,
    /// Minimum half-displacement along the dominant axis for a swipe.
    pub axis_threshold: f64,
}

impl GestureConfig {
    /// Default configuration: prevent default scrolling, let touch end
    /// propagate, and use [`DEFAULT_AXIS_THRESHOLD`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cancel_prevent_default: false,
            stop_propagation: false,
            axis_threshold: DEFAULT_AXIS_THRESHOLD,
        }
    }

    /// Set the axis threshold.
    #[must_use]
    pub const fn with_axis_threshold(mut self, axis_threshold: f64) -> Self {
        self.axis_threshold = axis_threshold;
        self
    }

    /// Set whether default scroll suppression on touch move is cancelled.
    #[must_use]
    pub const fn with_cancel_prevent_default(mut self, cancel: bool) -> Self {
        self.cancel_prevent_default = cancel;
        self
    }

    /// Set whether touch end stops propagation.
    #[must_use]
    pub const fn with_stop_propagation(mut self, stop: bool) -> Self {
        self.stop_propagation = stop;
        self
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks one touch session at a time and reports it to a [`GestureHandler`].
///
/// A session starts at every touch start: the first touch point becomes the
/// origin and the accumulated displacement resets to zero. Each touch move
/// recomputes `delta = origin - current` and forwards it to
/// [`GestureHandler::on_move`]. Touch end classifies the last displacement with
/// [`classify`] and calls exactly one end callback.
///
/// Touch start and move events without active touch points are ignored.
#[derive(Clone, Debug)]
pub struct Recognizer<K, H> {
    target: K,
    config: GestureConfig,
    handler: H,
    origin: Point,
    delta: Vec2,
    tracking: bool,
}

impl<K, H: GestureHandler<K>> Recognizer<K, H> {
    /// Attach a recognizer to `target`.
    ///
    /// The returned value is the handle; the host keeps it for as long as the
    /// target lives and forwards that target's touch events to it.
    pub fn attach(target: K, config: GestureConfig, handler: H) -> Self {
        Self {
            target,
            config,
            handler,
            origin: Point::ZERO,
            delta: Vec2::ZERO,
            tracking: false,
        }
    }

    /// Handle a touch start event.
    pub fn touch_start(&mut self, event: &TouchEvent<K>) -> TouchOutcome {
        let Some(position) = event.first() else {
            trace!("touch start without active touches ignored");
            return TouchOutcome::pending(EventResponse::empty());
        };
        self.origin = position;
        self.delta = Vec2::ZERO;
        self.tracking = true;
        debug!(x = position.x, y = position.y, "touch session started");
        self.handler.on_start();
        TouchOutcome::pending(EventResponse::empty())
    }

    /// Handle a touch move event.
    pub fn touch_move(&mut self, event: &TouchEvent<K>) -> TouchOutcome {
        let response = if self.config.cancel_prevent_default {
            EventResponse::empty()
        } else {
            EventResponse::PREVENT_DEFAULT
        };
        let Some(position) = event.first() else {
            trace!("touch move without active touches ignored");
            return TouchOutcome::pending(response);
        };
        self.delta = self.origin - position;
        self.handler.on_move(self.delta);
        TouchOutcome::pending(response)
    }

    /// Handle a touch end event, classifying the session.
    ///
    /// An end without a session in progress is ignored.
    pub fn touch_end(&mut self, event: &TouchEvent<K>) -> TouchOutcome {
        let response = if self.config.stop_propagation {
            EventResponse::STOP_PROPAGATION
        } else {
            EventResponse::empty()
        };
        if !self.tracking {
            trace!("touch end without a session ignored");
            return TouchOutcome::pending(response);
        }
        let gesture = classify(self.delta, self.config.axis_threshold);
        self.tracking = false;
        self.delta = Vec2::ZERO;
        trace!(dx = self.delta.x, dy = self.delta.y, ?gesture, "touch session classified");

        match gesture {
            Gesture::Tap => self.handler.on_tap(event),
            Gesture::Top => self.handler.on_top(event),
            Gesture::Bottom => self.handler.on_bottom(event),
            Gesture::Left => self.handler.on_left(event),
            Gesture::Right => self.handler.on_right(event),
            Gesture::Resume => self.handler.on_resume(event),
        }
        TouchOutcome::recognized(gesture, response)
    }

    /// The element this recognizer was attached to.
    pub fn target(&self) -> &K {
        &self.target
    }

    /// The configuration given at attach time.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Touch position captured at the most recent touch start.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Displacement `origin - current` as of the most recent touch move.
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Returns `true` between a touch start and the following touch end.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Shared access to the handler.
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Mutable access to the handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Detach, returning the handler.
    pub fn into_handler(self) -> H {
        self.handler
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        Start,
        Move(Vec2),
        End(Gesture, u32),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl GestureHandler<u32> for Recorder {
        fn on_start(&mut self) {
            self.calls.push(Call::Start);
        }
        fn on_move(&mut self, delta: Vec2) {
            self.calls.push(Call::Move(delta));
        }
        fn on_tap(&mut self, event: &TouchEvent<u32>) {
            self.calls.push(Call::End(Gesture::Tap, event.target));
        }
        fn on_top(&mut self, event: &TouchEvent<u32>) {
            self.calls.push(Call::End(Gesture::Top, event.target));
        }
        fn on_bottom(&mut self, event: &TouchEvent<u32>) {
            self.calls.push(Call::End(Gesture::Bottom, event.target));
        }
        fn on_left(&mut self, event: &TouchEvent<u32>) {
            self.calls.push(Call::End(Gesture::Left, event.target));
        }
        fn on_right(&mut self, event: &TouchEvent<u32>) {
            self.calls.push(Call::End(Gesture::Right, event.target));
        }
        fn on_resume(&mut self, event: &TouchEvent<u32>) {
            self.calls.push(Call::End(Gesture::Resume, event.target));
        }
    }

    fn recognizer(config: GestureConfig) -> Recognizer<u32, Recorder> {
        Recognizer::attach(1, config, Recorder::default())
    }

    fn at(x: f64, y: f64) -> TouchEvent<u32> {
        TouchEvent::single(1, Point::new(x, y))
    }

    #[test]
    fn drag_reports_start_moves_and_classified_end() {
        let mut r = recognizer(GestureConfig::default());

        r.touch_start(&at(50.0, 200.0));
        r.touch_move(&at(50.0, 180.0));
        r.touch_move(&at(52.0, 120.0));
        let outcome = r.touch_end(&TouchEvent::released(1));

        assert_eq!(outcome.gesture, Some(Gesture::Top));
        assert_eq!(
            r.handler().calls,
            vec![
                Call::Start,
                Call::Move(Vec2::new(0.0, 20.0)),
                Call::Move(Vec2::new(-2.0, 80.0)),
                Call::End(Gesture::Top, 1),
            ]
        );
    }

    #[test]
    fn finger_moving_right_and_down_uses_negative_deltas() {
        let mut r = recognizer(GestureConfig::default());

        r.touch_start(&at(0.0, 0.0));
        r.touch_move(&at(100.0, 10.0));
        assert_eq!(r.delta(), Vec2::new(-100.0, -10.0));
        assert_eq!(r.touch_end(&TouchEvent::released(1)).gesture, Some(Gesture::Right));

        r.touch_start(&at(0.0, 0.0));
        r.touch_move(&at(5.0, 100.0));
        assert_eq!(r.touch_end(&TouchEvent::released(1)).gesture, Some(Gesture::Bottom));
    }

    #[test]
    fn touch_start_resets_the_session() {
        let mut r = recognizer(GestureConfig::default());

        r.touch_start(&at(0.0, 0.0));
        r.touch_move(&at(0.0, -200.0));
        r.touch_end(&TouchEvent::released(1));

        r.touch_start(&at(10.0, 10.0));
        assert_eq!(r.origin(), Point::new(10.0, 10.0));
        assert_eq!(r.delta(), Vec2::ZERO);
        assert!(r.is_tracking());
        assert_eq!(r.touch_end(&TouchEvent::released(1)).gesture, Some(Gesture::Tap));
        assert!(!r.is_tracking());
    }

    #[test]
    fn events_without_touches_are_ignored() {
        let mut r = recognizer(GestureConfig::default());

        r.touch_start(&TouchEvent::released(1));
        assert!(r.handler().calls.is_empty());
        assert!(!r.is_tracking());

        r.touch_start(&at(0.0, 0.0));
        let outcome = r.touch_move(&TouchEvent::released(1));
        assert_eq!(outcome.gesture, None);
        // Default scroll is still suppressed for the ignored move.
        assert_eq!(outcome.response, EventResponse::PREVENT_DEFAULT);
        assert_eq!(r.handler().calls, vec![Call::Start]);
    }

    #[test]
    fn only_the_first_touch_point_counts() {
        let mut r = recognizer(GestureConfig::default());
        r.touch_start(&TouchEvent::new(
            1,
            [Point::new(0.0, 0.0), Point::new(500.0, 500.0)],
        ));
        r.touch_move(&TouchEvent::new(
            1,
            [Point::new(0.0, -60.0), Point::new(0.0, 0.0)],
        ));
        assert_eq!(r.delta(), Vec2::new(0.0, 60.0));
    }

    #[test]
    fn responses_follow_config() {
        let mut r = recognizer(GestureConfig::default());
        r.touch_start(&at(0.0, 0.0));
        assert_eq!(r.touch_move(&at(0.0, 1.0)).response, EventResponse::PREVENT_DEFAULT);
        assert_eq!(r.touch_end(&TouchEvent::released(1)).response, EventResponse::empty());

        let config = GestureConfig::new()
            .with_cancel_prevent_default(true)
            .with_stop_propagation(true);
        let mut r = recognizer(config);
        r.touch_start(&at(0.0, 0.0));
        assert_eq!(r.touch_move(&at(0.0, 1.0)).response, EventResponse::empty());
        assert_eq!(
            r.touch_end(&TouchEvent::released(1)).response,
            EventResponse::STOP_PROPAGATION
        );
    }

    #[test]
    fn axis_threshold_changes_what_counts_as_a_swipe() {
        let mut r = recognizer(GestureConfig::new().with_axis_threshold(100.0));
        r.touch_start(&at(0.0, 300.0));
        r.touch_move(&at(0.0, 150.0));
        assert_eq!(r.touch_end(&TouchEvent::released(1)).gesture, Some(Gesture::Resume));

        r.touch_start(&at(0.0, 300.0));
        r.touch_move(&at(0.0, 90.0));
        assert_eq!(r.touch_end(&TouchEvent::released(1)).gesture, Some(Gesture::Top));
    }

    #[test]
    fn touch_end_closes_the_session() {
        let mut r = recognizer(GestureConfig::default());
        assert_eq!(r.touch_end(&TouchEvent::released(1)).gesture, None);
        assert!(r.handler().calls.is_empty());

        r.touch_start(&at(0.0, 300.0));
        r.touch_move(&at(0.0, 100.0));
        assert_eq!(r.touch_end(&TouchEvent::released(1)).gesture, Some(Gesture::Top));
        assert_eq!(r.delta(), Vec2::ZERO);

        let repeated = r.touch_end(&TouchEvent::released(1));
        assert_eq!(repeated.gesture, None);
        assert_eq!(
            r.handler().calls.last(),
            Some(&Call::End(Gesture::Top, 1)),
            "a second end must not fire another callback"
        );
        assert_eq!(r.handler().calls.len(), 3);
    }

    #[test]
    fn end_callbacks_receive_the_delivered_event() {
        let mut r = recognizer(GestureConfig::default());
        r.touch_start(&at(0.0, 0.0));
        r.touch_move(&at(-100.0, 0.0));
        r.touch_end(&TouchEvent::released(42));
        assert_eq!(r.handler().calls.last(), Some(&Call::End(Gesture::Left, 42)));
    }

    #[test]
    fn default_config_values() {
        let config = GestureConfig::default();
        assert!(!config.cancel_prevent_default);
        assert!(!config.stop_propagation);
        assert_eq!(config.axis_threshold, DEFAULT_AXIS_THRESHOLD);
    }
}
