// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collaborator interfaces the controller drives.

use kurbo::{Size, Vec2};

use crate::{SceneId, SlotId};

/// Placement of one slot.
///
/// Renderers typically map this to a 3D translate plus uniform scale, a
/// stacking order, and a transition duration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SlotTransform {
    /// Offset from the slot's resting position, in viewport units.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
    /// Stacking order; higher is drawn on top.
    pub z_index: i32,
    /// Transition duration in milliseconds; zero applies immediately.
    pub duration_ms: u32,
}

impl SlotTransform {
    /// An immediate placement.
    #[must_use]
    pub const fn at(translate: Vec2, scale: f64, z_index: i32) -> Self {
        Self {
            translate,
            scale,
            z_index,
            duration_ms: 0,
        }
    }

    /// The same placement, animated over `duration_ms`.
    #[must_use]
    pub const fn animated(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Applies slot placements.
///
/// When an animated transition finishes, the host reports it back through
/// [`PageFlip::transition_complete`](crate::PageFlip::transition_complete).
pub trait SlotRenderer {
    /// Size of the container the slots live in.
    ///
    /// Read once when the controller is built.
    fn viewport(&self) -> Size;

    /// Move, scale and restack `slot`.
    fn apply_transform(&mut self, slot: SlotId, transform: &SlotTransform);
}

/// Injects scene content into slots.
pub trait SceneTemplater<C> {
    /// Replace the content of `slot` with the given scene.
    ///
    /// Implementations must remember `scene` so that
    /// [`current_scene_identity`](Self::current_scene_identity) reports it.
    fn render_scene_into(&mut self, slot: SlotId, scene: SceneId, content: &C);

    /// The scene `slot` currently holds, or `None` if it is empty.
    fn current_scene_identity(&self, slot: SlotId) -> Option<SceneId>;
}
