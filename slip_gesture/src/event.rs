// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch events delivered by the host and the responses handed back.

use kurbo::Point;
use smallvec::SmallVec;

use crate::Gesture;

/// Active touch points of an event, in page coordinates.
pub type Touches = SmallVec<[Point; 2]>;

/// A touch event as delivered to a handler.
///
/// Only the first active touch point is consulted; additional fingers are
/// carried along untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent<K> {
    /// Element the platform delivered the event to.
    pub target: K,
    /// Touch points that are still in contact with the surface.
    pub touches: Touches,
}

impl<K> TouchEvent<K> {
    /// Create an event with the given active touch points.
    pub fn new(target: K, touches: impl IntoIterator<Item = Point>) -> Self {
        Self {
            target,
            touches: touches.into_iter().collect(),
        }
    }

    /// Create an event with exactly one active touch point.
    pub fn single(target: K, position: Point) -> Self {
        let mut touches = Touches::new();
        touches.push(position);
        Self { target, touches }
    }

    /// Create an event with no active touch points, as seen on touch end.
    pub fn released(target: K) -> Self {
        Self {
            target,
            touches: Touches::new(),
        }
    }

    /// The first active touch point, if any.
    #[must_use]
    pub fn first(&self) -> Option<Point> {
        self.touches.first().copied()
    }
}

bitflags::bitflags! {
    /// What the host should do with the platform event it just forwarded.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct EventResponse: u8 {
        /// Suppress the platform's default scrolling/zooming.
        const PREVENT_DEFAULT  = 0b0000_0001;
        /// Stop the event from propagating further.
        const STOP_PROPAGATION = 0b0000_0010;
    }
}

/// Result of forwarding one touch event to a [`Recognizer`](crate::Recognizer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchOutcome {
    /// The classified gesture; only set on touch end.
    pub gesture: Option<Gesture>,
    /// Flags the host should apply to the platform event.
    pub response: EventResponse,
}

impl TouchOutcome {
    pub(crate) const fn pending(response: EventResponse) -> Self {
        Self {
            gesture: None,
            response,
        }
    }

    pub(crate) const fn recognized(gesture: Gesture, response: EventResponse) -> Self {
        Self {
            gesture: Some(gesture),
            response,
        }
    }
}
