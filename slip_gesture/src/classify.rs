// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification of a finished touch into a [`Gesture`].

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Vec2;

/// Displacement (per axis, exclusive) below which a touch is a tap.
pub const TAP_SLOP: f64 = 2.0;

/// The outcome of a finished touch.
///
/// Swipe variants are named after the edge the finger travelled towards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// The finger barely moved on either axis.
    Tap,
    /// Vertical swipe, finger moved up.
    Top,
    /// Vertical swipe, finger moved down.
    Bottom,
    /// Horizontal swipe, finger moved left.
    Left,
    /// Horizontal swipe, finger moved right.
    Right,
    /// Too short or too diagonal to be a swipe; callers usually restore state.
    Resume,
}

impl Gesture {
    /// Returns `true` for the four directional swipes.
    #[must_use]
    pub const fn is_swipe(self) -> bool {
        matches!(self, Self::Top | Self::Bottom | Self::Left | Self::Right)
    }

    /// Returns `true` for [`Gesture::Top`] and [`Gesture::Bottom`].
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Classify a net displacement `delta = origin - current`.
///
/// Rules are evaluated in a fixed priority order against `|dx|` and `|dy|`:
///
/// 1. both below [`TAP_SLOP`]: [`Gesture::Tap`];
/// 2. `|dx| / 2 > axis_threshold` and `|dx| > |dy|`: [`Gesture::Right`] if
///    `dx < 0`, otherwise [`Gesture::Left`];
/// 3. `|dy| / 2 > axis_threshold` and `|dy| > |dx|`: [`Gesture::Bottom`] if
///    `dy < 0`, otherwise [`Gesture::Top`];
/// 4. anything else: [`Gesture::Resume`].
///
/// Ties between the axes are never a swipe.
///
/// ```
/// use kurbo::Vec2;
/// use slip_gesture::{Gesture, classify};
///
/// assert_eq!(classify(Vec2::new(1.0, -1.5), 20.0), Gesture::Tap);
/// assert_eq!(classify(Vec2::new(-60.0, 10.0), 20.0), Gesture::Right);
/// assert_eq!(classify(Vec2::new(50.0, 50.0), 20.0), Gesture::Resume);
/// ```
#[must_use]
pub fn classify(delta: Vec2, axis_threshold: f64) -> Gesture {
    let abs_x = delta.x.abs();
    let abs_y = delta.y.abs();

    if abs_x < TAP_SLOP && abs_y < TAP_SLOP {
        return Gesture::Tap;
    }
    if abs_x / 2.0 > axis_threshold && abs_x > abs_y {
        return if delta.x < 0.0 {
            Gesture::Right
        } else {
            Gesture::Left
        };
    }
    if abs_y / 2.0 > axis_threshold && abs_y > abs_x {
        return if delta.y < 0.0 {
            Gesture::Bottom
        } else {
            Gesture::Top
        };
    }
    Gesture::Resume
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEPS: [f64; 9] = [-1.99, -1.5, -1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 1.99];

    #[test]
    fn small_displacements_are_taps_regardless_of_sign() {
        for dx in STEPS {
            for dy in STEPS {
                assert_eq!(
                    classify(Vec2::new(dx, dy), 20.0),
                    Gesture::Tap,
                    "({dx}, {dy}) should be a tap"
                );
            }
        }
    }

    #[test]
    fn tap_slop_is_exclusive() {
        // Exactly 2 on one axis is no longer a tap, and far below threshold.
        assert_eq!(classify(Vec2::new(2.0, 0.0), 20.0), Gesture::Resume);
        assert_eq!(classify(Vec2::new(0.0, -2.0), 20.0), Gesture::Resume);
    }

    #[test]
    fn horizontal_swipes_follow_the_sign_of_dx() {
        assert_eq!(classify(Vec2::new(-41.0, 0.0), 20.0), Gesture::Right);
        assert_eq!(classify(Vec2::new(41.0, 0.0), 20.0), Gesture::Left);
        assert_eq!(classify(Vec2::new(-300.0, 299.0), 20.0), Gesture::Right);
        assert_eq!(classify(Vec2::new(300.0, -299.0), 20.0), Gesture::Left);
    }

    #[test]
    fn vertical_swipes_follow_the_sign_of_dy() {
        assert_eq!(classify(Vec2::new(0.0, -41.0), 20.0), Gesture::Bottom);
        assert_eq!(classify(Vec2::new(0.0, 41.0), 20.0), Gesture::Top);
        assert_eq!(classify(Vec2::new(-120.0, 121.0), 20.0), Gesture::Top);
    }

    #[test]
    fn half_displacement_must_strictly_exceed_threshold() {
        // 40 / 2 == 20 is not enough.
        assert_eq!(classify(Vec2::new(40.0, 0.0), 20.0), Gesture::Resume);
        assert_eq!(classify(Vec2::new(0.0, 40.0), 20.0), Gesture::Resume);
        assert_eq!(classify(Vec2::new(0.0, 40.5), 20.0), Gesture::Top);
    }

    #[test]
    fn diagonal_ties_resume() {
        assert_eq!(classify(Vec2::new(80.0, 80.0), 20.0), Gesture::Resume);
        assert_eq!(classify(Vec2::new(-80.0, 80.0), 20.0), Gesture::Resume);
    }

    #[test]
    fn threshold_is_configurable() {
        let delta = Vec2::new(0.0, 150.0);
        assert_eq!(classify(delta, 20.0), Gesture::Top);
        assert_eq!(classify(delta, 100.0), Gesture::Resume);
        assert_eq!(classify(Vec2::new(0.0, 201.0), 100.0), Gesture::Top);
    }

    #[test]
    fn every_outcome_matches_the_rule_table() {
        let threshold = 20.0;
        let mut v: f64 = -120.0;
        while v <= 120.0 {
            let mut w: f64 = -120.0;
            while w <= 120.0 {
                let (ax, ay) = (v.abs(), w.abs());
                let expected = if ax < 2.0 && ay < 2.0 {
                    Gesture::Tap
                } else if ax / 2.0 > threshold && ax > ay {
                    if v < 0.0 { Gesture::Right } else { Gesture::Left }
                } else if ay / 2.0 > threshold && ay > ax {
                    if w < 0.0 { Gesture::Bottom } else { Gesture::Top }
                } else {
                    Gesture::Resume
                };
                assert_eq!(classify(Vec2::new(v, w), threshold), expected);
                w += 7.5;
            }
            v += 7.5;
        }
    }

    #[test]
    fn swipe_predicates() {
        assert!(Gesture::Left.is_swipe());
        assert!(!Gesture::Left.is_vertical());
        assert!(Gesture::Bottom.is_vertical());
        assert!(!Gesture::Tap.is_swipe());
        assert!(!Gesture::Resume.is_swipe());
    }
}
