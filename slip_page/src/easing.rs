// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag direction and the slot placements used for each flip phase.
//!
//! The curves here are tuned for a page that slides up over a receding
//! predecessor. They are defaults, not invariants; every constant lives in
//! [`FlipEasing`].

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Size, Vec2};

use crate::SlotTransform;

/// Direction of a page drag, latched on its first qualifying move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Finger moving up: the next scene slides in from below.
    Forward,
    /// Finger moving down: the current scene slides away, revealing the previous one.
    Back,
}

impl Direction {
    /// Direction for a vertical displacement `origin - current`, or `None` when it is zero.
    #[must_use]
    pub fn from_displacement(y: f64) -> Option<Self> {
        if y > 0.0 {
            Some(Self::Forward)
        } else if y < 0.0 {
            Some(Self::Back)
        } else {
            None
        }
    }
}

/// Placements for the active and pending slots at one instant.
///
/// The idle slot is always [parked](FlipEasing::parked).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// Placement of the slot holding the settled scene.
    pub active: SlotTransform,
    /// Placement of the slot holding the candidate scene.
    pub pending: SlotTransform,
}

/// Tunable parameters of the flip animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlipEasing {
    /// Scale of a page fully pushed behind its successor.
    pub recede_scale: f64,
    /// Fraction of the finger's travel the sliding page follows.
    pub follow_ratio: f64,
    /// Duration of commit and revert transitions.
    pub settle_duration_ms: u32,
    /// Stacking order around which the two live slots are layered.
    pub z_base: i32,
}

impl FlipEasing {
    /// Scale 0.8, half-speed follow, 300ms settle, z around 100.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            recede_scale: 0.8,
            follow_ratio: 0.5,
            settle_duration_ms: 300,
            z_base: 100,
        }
    }

    /// Placement of the idle slot: fully outside the viewport, below everything.
    #[must_use]
    pub fn parked(viewport: Size) -> SlotTransform {
        SlotTransform::at(
            Vec2::new(viewport.width * 2.0, viewport.height * 2.0),
            1.0,
            -1,
        )
    }

    /// Settled layout: active page on screen, pending staged just below it.
    #[must_use]
    pub fn resting(&self, viewport: Size) -> Frame {
        Frame {
            active: SlotTransform::at(Vec2::ZERO, 1.0, self.z_base + 1),
            pending: SlotTransform::at(Vec2::new(0.0, viewport.height), 1.0, self.z_base - 1),
        }
    }

    /// Live layout for a drag displacement `y` (`origin - current`).
    ///
    /// `y` is clamped to the half-axis of `direction`.
    #[must_use]
    pub fn drag(&self, direction: Direction, y: f64, viewport: Size) -> Frame {
        let height = viewport.height;
        let depth = 1.0 - self.recede_scale;
        match direction {
            Direction::Forward => {
                let y = y.max(0.0);
                let lift = (y * self.follow_ratio).floor();
                Frame {
                    active: SlotTransform::at(
                        Vec2::ZERO,
                        1.0 - depth * ratio(y, height),
                        self.z_base - 2,
                    ),
                    pending: SlotTransform::at(
                        Vec2::new(0.0, height - lift),
                        1.0,
                        self.z_base + 2,
                    ),
                }
            }
            Direction::Back => {
                let y = y.min(0.0);
                let drop = (y * self.follow_ratio).floor().abs();
                Frame {
                    active: SlotTransform::at(Vec2::new(0.0, drop), 1.0, self.z_base + 1),
                    pending: SlotTransform::at(
                        Vec2::ZERO,
                        self.recede_scale + depth * ratio(y, height),
                        self.z_base - 1,
                    ),
                }
            }
        }
    }

    /// Target layout when a drag is committed.
    #[must_use]
    pub fn commit(&self, direction: Direction, viewport: Size) -> Frame {
        let d = self.settle_duration_ms;
        match direction {
            Direction::Forward => Frame {
                active: SlotTransform::at(Vec2::ZERO, self.recede_scale, self.z_base - 2)
                    .animated(d),
                pending: SlotTransform::at(Vec2::ZERO, 1.0, self.z_base + 2).animated(d),
            },
            Direction::Back => Frame {
                active: SlotTransform::at(Vec2::new(0.0, viewport.height), 1.0, self.z_base + 2)
                    .animated(d),
                pending: SlotTransform::at(Vec2::ZERO, 1.0, self.z_base - 2).animated(d),
            },
        }
    }

    /// Target layout when a drag is abandoned.
    #[must_use]
    pub fn revert(&self, direction: Direction, viewport: Size) -> Frame {
        let d = self.settle_duration_ms;
        let active = SlotTransform::at(Vec2::ZERO, 1.0, self.z_base + 1).animated(d);
        let pending = match direction {
            Direction::Forward => {
                SlotTransform::at(Vec2::new(0.0, viewport.height), 1.0, self.z_base - 1)
            }
            Direction::Back => SlotTransform::at(Vec2::ZERO, self.recede_scale, self.z_base - 1),
        };
        Frame {
            active,
            pending: pending.animated(d),
        }
    }
}

impl Default for FlipEasing {
    fn default() -> Self {
        Self::new()
    }
}

/// `|y| / height`, or zero for a degenerate viewport.
fn ratio(y: f64, height: f64) -> f64 {
    if height > 0.0 { y.abs() / height } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size::new(320.0, 500.0);

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn direction_from_displacement() {
        assert_eq!(Direction::from_displacement(3.0), Some(Direction::Forward));
        assert_eq!(Direction::from_displacement(-0.5), Some(Direction::Back));
        assert_eq!(Direction::from_displacement(0.0), None);
    }

    #[test]
    fn forward_drag_shrinks_active_and_lifts_pending() {
        let frame = FlipEasing::new().drag(Direction::Forward, 100.0, VIEW);
        assert!(close(frame.active.scale, 0.96), "scale was {}", frame.active.scale);
        assert_eq!(frame.active.z_index, 98);
        assert_eq!(frame.pending.translate, Vec2::new(0.0, 450.0));
        assert_eq!(frame.pending.z_index, 102);
        assert_eq!(frame.pending.duration_ms, 0);
    }

    #[test]
    fn back_drag_drops_active_and_grows_pending() {
        let frame = FlipEasing::new().drag(Direction::Back, -101.0, VIEW);
        // floor(-50.5) == -51
        assert_eq!(frame.active.translate, Vec2::new(0.0, 51.0));
        assert_eq!(frame.active.z_index, 101);
        assert!(close(frame.pending.scale, 0.8 + 0.2 * 101.0 / 500.0));
        assert_eq!(frame.pending.z_index, 99);
    }

    #[test]
    fn drag_clamps_to_the_latched_half_axis() {
        let easing = FlipEasing::new();
        assert_eq!(
            easing.drag(Direction::Forward, -40.0, VIEW),
            easing.drag(Direction::Forward, 0.0, VIEW)
        );
        assert_eq!(
            easing.drag(Direction::Back, 40.0, VIEW),
            easing.drag(Direction::Back, 0.0, VIEW)
        );
    }

    #[test]
    fn commit_and_revert_are_animated() {
        let easing = FlipEasing::new();
        for direction in [Direction::Forward, Direction::Back] {
            for frame in [easing.commit(direction, VIEW), easing.revert(direction, VIEW)] {
                assert_eq!(frame.active.duration_ms, 300);
                assert_eq!(frame.pending.duration_ms, 300);
            }
        }
        let forward = easing.commit(Direction::Forward, VIEW);
        assert!(close(forward.active.scale, 0.8));
        assert_eq!(forward.pending.translate, Vec2::ZERO);
        let back = easing.commit(Direction::Back, VIEW);
        assert_eq!(back.active.translate, Vec2::new(0.0, 500.0));
        assert!(close(back.pending.scale, 1.0));
    }

    #[test]
    fn revert_returns_pending_to_its_staging_place() {
        let easing = FlipEasing::new();
        let forward = easing.revert(Direction::Forward, VIEW);
        assert_eq!(forward.pending.translate, easing.resting(VIEW).pending.translate);
        let back = easing.revert(Direction::Back, VIEW);
        assert!(close(back.pending.scale, 0.8));
        assert_eq!(back.active.translate, Vec2::ZERO);
    }

    #[test]
    fn parked_is_outside_the_viewport() {
        let parked = FlipEasing::parked(VIEW);
        assert!(parked.translate.x >= VIEW.width);
        assert!(parked.translate.y >= VIEW.height);
        assert_eq!(parked.z_index, -1);
    }

    #[test]
    fn degenerate_viewport_does_not_divide_by_zero() {
        let frame = FlipEasing::new().drag(Direction::Forward, 50.0, Size::ZERO);
        assert!(close(frame.active.scale, 1.0));
    }
}
