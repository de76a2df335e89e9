// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page-flip state machine.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Size, Vec2};
use slip_gesture::{GestureConfig, GestureHandler, TouchEvent};
use tracing::{debug, trace, warn};

use crate::{
    Direction, FlipEasing, Frame, InitPolicy, Scene, SceneId, SceneTemplater, SlotId, SlotRenderer,
    SlotRing,
};

/// Axis threshold used for the recognizer that drives a [`PageFlip`].
pub const PAGE_AXIS_THRESHOLD: f64 = 100.0;

/// Minimum scene count for distinct scenes in every slot.
pub const MIN_SCENES: usize = 3;

/// Options for a [`PageFlip`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlipConfig {
    /// Wrap around at both ends of the scene list.
    pub looping: bool,
    /// Scene settled on screen after construction.
    pub initial_scene: usize,
    /// Animation curve.
    pub easing: FlipEasing,
    /// When scene `on_init` hooks run.
    pub init_policy: InitPolicy,
}

impl FlipConfig {
    /// Non-looping, starting at scene 0, with default easing and [`InitPolicy::Once`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            looping: false,
            initial_scene: 0,
            easing: FlipEasing::new(),
            init_policy: InitPolicy::Once,
        }
    }

    /// Set whether the scene list wraps around.
    #[must_use]
    pub const fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Set the scene shown first.
    #[must_use]
    pub const fn with_initial_scene(mut self, initial_scene: usize) -> Self {
        self.initial_scene = initial_scene;
        self
    }

    /// Set the animation curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: FlipEasing) -> Self {
        self.easing = easing;
        self
    }

    /// Set when `on_init` hooks run.
    #[must_use]
    pub const fn with_init_policy(mut self, init_policy: InitPolicy) -> Self {
        self.init_policy = init_policy;
        self
    }
}

impl Default for FlipConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Observable state of a [`PageFlip`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipPhase {
    /// Settled; no slot is tracking a finger.
    Idle,
    /// A touch started but no move has latched a direction yet.
    Pressed,
    /// A drag is in progress in the given direction.
    Dragging(Direction),
}

/// What a controller operation did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Nothing to do in the current phase.
    Ignored,
    /// A touch was registered; waiting for a move.
    Pressed,
    /// The move could not start a drag: no vertical travel, an empty scene
    /// list, or the boundary of a non-looping list.
    Blocked,
    /// The first qualifying move latched a direction and moved the cursor.
    Latched(Direction),
    /// A drag move updated the live transforms.
    Tracked,
    /// The drag was committed towards the given scene.
    Committed(SceneId),
    /// The drag was abandoned and the prior state restored.
    Reverted,
    /// A committed transition finished and the scene's `on_show` ran.
    Settled(SceneId),
    /// A reverted slot finished animating and was parked off screen.
    Parked(SlotId),
}

#[derive(Copy, Clone, Debug)]
struct Drag {
    direction: Direction,
    origin_cursor: usize,
    origin_ring: SlotRing,
}

#[derive(Copy, Clone, Debug)]
enum State {
    Idle,
    Pressed,
    Dragging(Drag),
}

/// A three-slot page-flip controller.
///
/// Presents an arbitrarily long ordered list of [`Scene`]s through exactly
/// three slots, recycling them as the user drags vertically:
///
/// - a drag first *latches* a direction, moves the scene cursor and fills the
///   pending slot with the candidate scene (only if it does not already hold it);
/// - every further move updates the active and pending placements while the
///   idle slot stays parked;
/// - release either *commits* (the pending slot becomes active and the scene's
///   `on_show` runs once the host reports the transition complete) or
///   *reverts* (cursor and slot roles go back to their pre-drag values).
///
/// `PageFlip` implements [`GestureHandler`], so it can be attached directly to
/// a [`Recognizer`](slip_gesture::Recognizer) configured with
/// [`PageFlip::gesture_config`].
///
/// ```
/// use kurbo::{Size, Vec2};
/// use slip_page::{
///     FlipOutcome, PageFlip, Scene, SceneId, SceneTemplater, SlotId, SlotRenderer, SlotTransform,
/// };
///
/// #[derive(Default)]
/// struct Host {
///     held: [Option<SceneId>; 3],
/// }
///
/// impl SlotRenderer for Host {
///     fn viewport(&self) -> Size {
///         Size::new(320.0, 480.0)
///     }
///     fn apply_transform(&mut self, _slot: SlotId, _transform: &SlotTransform) {}
/// }
///
/// impl SceneTemplater<&'static str> for Host {
///     fn render_scene_into(&mut self, slot: SlotId, scene: SceneId, _content: &&'static str) {
///         self.held[slot.index()] = Some(scene);
///     }
///     fn current_scene_identity(&self, slot: SlotId) -> Option<SceneId> {
///         self.held[slot.index()]
///     }
/// }
///
/// let scenes = vec![Scene::new("a"), Scene::new("b"), Scene::new("c")];
/// let mut flip = PageFlip::create(Host::default(), scenes, false, 0);
///
/// flip.move_start();
/// flip.move_on(Vec2::new(0.0, 240.0));
/// assert_eq!(flip.next(), FlipOutcome::Committed(SceneId(1)));
/// assert_eq!(flip.scene_cursor(), 1);
/// ```
#[derive(Debug)]
pub struct PageFlip<C, H> {
    scenes: Vec<Scene<C>>,
    initialized: Vec<bool>,
    host: H,
    config: FlipConfig,
    viewport: Size,
    cursor: usize,
    ring: SlotRing,
    state: State,
    /// Committed scenes awaiting their transition end, by slot.
    settles: [Option<SceneId>; SlotId::COUNT],
    /// Slot a revert left outside the ring roles, parked once it stops animating.
    parking: Option<SlotId>,
}

impl<C, H> PageFlip<C, H>
where
    H: SlotRenderer + SceneTemplater<C>,
{
    /// Build a controller and render its initial state.
    ///
    /// The three slots are filled with the initial scene and its two
    /// successors (wrapping past the end), the initial scene's `on_show` runs
    /// immediately, and the viewport size is read from `host` once.
    ///
    /// Fewer than [`MIN_SCENES`] scenes is logged and tolerated: slots then
    /// repeat scenes. An empty list yields an inert controller.
    pub fn new(config: FlipConfig, scenes: Vec<Scene<C>>, host: H) -> Self {
        let len = scenes.len();
        if len < MIN_SCENES {
            warn!(
                scenes = len,
                "page flip needs at least {MIN_SCENES} scenes; slots will repeat scenes"
            );
        }
        let cursor = match len {
            0 => 0,
            _ if config.initial_scene < len => config.initial_scene,
            _ => {
                warn!(
                    initial = config.initial_scene,
                    scenes = len,
                    "initial scene out of range; starting at the first scene"
                );
                0
            }
        };
        let viewport = host.viewport();

        let mut flip = Self {
            scenes,
            initialized: vec![false; len],
            host,
            config,
            viewport,
            cursor,
            ring: SlotRing::new(),
            state: State::Idle,
            settles: [None; SlotId::COUNT],
            parking: None,
        };
        flip.render_initial();
        flip
    }

    /// Build a controller from positional arguments, with default easing.
    pub fn create(host: H, scenes: Vec<Scene<C>>, looping: bool, initial_scene: usize) -> Self {
        let config = FlipConfig::new()
            .with_looping(looping)
            .with_initial_scene(initial_scene);
        Self::new(config, scenes, host)
    }

    /// Recognizer options for driving this controller.
    #[must_use]
    pub const fn gesture_config() -> GestureConfig {
        GestureConfig::new().with_axis_threshold(PAGE_AXIS_THRESHOLD)
    }

    fn render_initial(&mut self) {
        let len = self.scenes.len();
        if len > 0 {
            for (offset, slot) in SlotId::ALL.into_iter().enumerate() {
                self.fill_scene(slot, (self.cursor + offset) % len);
            }
        }
        let frame = self.config.easing.resting(self.viewport);
        self.apply_frame(frame);
        debug!(scene = self.cursor, "page flip rendered");
        let active = self.ring.active();
        if let Some(scene) = self.scenes.get_mut(self.cursor) {
            scene.show(active);
        }
    }

    /// A touch started.
    pub fn move_start(&mut self) -> FlipOutcome {
        match self.state {
            State::Idle | State::Pressed => {
                self.state = State::Pressed;
                FlipOutcome::Pressed
            }
            State::Dragging(_) => FlipOutcome::Ignored,
        }
    }

    /// The finger moved; `delta` is `origin - current`.
    ///
    /// The first move with vertical travel latches the drag direction. If the
    /// list does not wrap and the cursor sits at the matching end, the move is
    /// rejected and the next move tries again.
    pub fn move_on(&mut self, delta: Vec2) -> FlipOutcome {
        let drag = match self.state {
            State::Dragging(drag) => {
                self.apply_drag(drag.direction, delta.y);
                return FlipOutcome::Tracked;
            }
            State::Idle | State::Pressed => {
                let Some(direction) = Direction::from_displacement(delta.y) else {
                    return FlipOutcome::Blocked;
                };
                let Some(target) = self.step(direction) else {
                    trace!(scene = self.cursor, ?direction, "drag blocked at boundary");
                    return FlipOutcome::Blocked;
                };
                let drag = Drag {
                    direction,
                    origin_cursor: self.cursor,
                    origin_ring: self.ring,
                };
                self.cursor = target;
                drag
            }
        };

        self.ring.aim(drag.direction == Direction::Forward);
        self.fill_scene(self.ring.pending(), self.cursor);
        self.state = State::Dragging(drag);
        debug!(
            from = drag.origin_cursor,
            to = self.cursor,
            direction = ?drag.direction,
            "drag latched"
        );
        self.apply_drag(drag.direction, delta.y);
        FlipOutcome::Latched(drag.direction)
    }

    /// Release after a swipe towards the top: commit a forward drag.
    ///
    /// A drag latched in the other direction is reverted instead.
    pub fn next(&mut self) -> FlipOutcome {
        self.release(Direction::Forward)
    }

    /// Release after a swipe towards the bottom: commit a backward drag.
    ///
    /// A drag latched in the other direction is reverted instead.
    pub fn prev(&mut self) -> FlipOutcome {
        self.release(Direction::Back)
    }

    /// Release without a qualifying swipe: revert the drag.
    pub fn go_back(&mut self) -> FlipOutcome {
        match self.state {
            State::Dragging(drag) => self.revert(drag),
            State::Idle | State::Pressed => {
                self.state = State::Idle;
                FlipOutcome::Ignored
            }
        }
    }

    /// The host finished animating `slot`.
    ///
    /// Fires `on_show` once for the scene the last commit into `slot` animated
    /// in, and parks a slot a revert left idle. Every commit keeps its own
    /// settle, so back-to-back commits each report their scene. Other slots
    /// and repeated reports are ignored.
    pub fn transition_complete(&mut self, slot: SlotId) -> FlipOutcome {
        let parked = self.parking == Some(slot);
        if parked {
            self.parking = None;
            self.host.apply_transform(slot, &FlipEasing::parked(self.viewport));
            trace!(slot = slot.index(), "reverted slot parked");
        }
        match self.settles[slot.index()].take() {
            Some(id) => {
                debug!(scene = id.0, slot = slot.index(), "page settled");
                if let Some(scene) = self.scenes.get_mut(id.0) {
                    scene.show(slot);
                }
                FlipOutcome::Settled(id)
            }
            None if parked => FlipOutcome::Parked(slot),
            None => FlipOutcome::Ignored,
        }
    }

    fn release(&mut self, direction: Direction) -> FlipOutcome {
        match self.state {
            State::Dragging(drag) if drag.direction == direction => self.commit(drag),
            State::Dragging(drag) => self.revert(drag),
            State::Idle | State::Pressed => {
                self.state = State::Idle;
                FlipOutcome::Ignored
            }
        }
    }

    fn commit(&mut self, drag: Drag) -> FlipOutcome {
        let frame = self.config.easing.commit(drag.direction, self.viewport);
        self.apply_frame(frame);
        let scene = SceneId(self.cursor);
        let slot = self.ring.pending();
        if let Some(stale) = self.settles[slot.index()].replace(scene) {
            trace!(scene = stale.0, slot = slot.index(), "superseded settle dropped");
        }
        self.ring.swap();
        self.state = State::Idle;
        debug!(scene = scene.0, direction = ?drag.direction, "drag committed");
        FlipOutcome::Committed(scene)
    }

    fn revert(&mut self, drag: Drag) -> FlipOutcome {
        let frame = self.config.easing.revert(drag.direction, self.viewport);
        let aimed = self.ring.pending();
        self.host.apply_transform(self.ring.active(), &frame.active);
        self.host.apply_transform(aimed, &frame.pending);
        self.cursor = drag.origin_cursor;
        self.ring = drag.origin_ring;

        // The drag aimed away from the staged slot: restage it and park the
        // aimed slot once its revert animation ends.
        let staged = self.ring.pending();
        if aimed != staged {
            let resting = self.config.easing.resting(self.viewport);
            self.host.apply_transform(staged, &resting.pending);
            self.parking = Some(aimed);
        }
        self.state = State::Idle;
        debug!(scene = self.cursor, "drag reverted");
        FlipOutcome::Reverted
    }

    fn step(&self, direction: Direction) -> Option<usize> {
        let len = self.scenes.len();
        if len == 0 {
            return None;
        }
        let last = len - 1;
        match direction {
            Direction::Forward if self.cursor < last => Some(self.cursor + 1),
            Direction::Back if self.cursor > 0 => Some(self.cursor - 1),
            Direction::Forward if self.config.looping => Some(0),
            Direction::Back if self.config.looping => Some(last),
            _ => None,
        }
    }

    fn fill_scene(&mut self, slot: SlotId, index: usize) {
        let id = SceneId(index);
        if self.host.current_scene_identity(slot) == Some(id) {
            return;
        }
        let Some(scene) = self.scenes.get_mut(index) else {
            return;
        };
        self.host.render_scene_into(slot, id, &scene.content);
        trace!(scene = index, slot = slot.index(), "scene filled");

        let first = match self.initialized.get_mut(index) {
            Some(seen) => !core::mem::replace(seen, true),
            None => false,
        };
        if first || self.config.init_policy == InitPolicy::EveryFill {
            scene.init(slot);
        }
    }

    fn apply_drag(&mut self, direction: Direction, y: f64) {
        let frame = self.config.easing.drag(direction, y, self.viewport);
        self.apply_frame(frame);
    }

    fn apply_frame(&mut self, frame: Frame) {
        let [active, pending, idle] = self.ring.roles();
        self.parking = None;
        self.host.apply_transform(active, &frame.active);
        self.host.apply_transform(pending, &frame.pending);
        self.host.apply_transform(idle, &FlipEasing::parked(self.viewport));
    }
}

impl<C, H> PageFlip<C, H> {
    /// Index of the current scene.
    ///
    /// During a drag this is the candidate scene; it returns to
    /// [`settled_scene`](Self::settled_scene) if the drag is reverted.
    #[must_use]
    pub fn scene_cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the scene on screen before the current drag, if any.
    #[must_use]
    pub fn settled_scene(&self) -> usize {
        match self.state {
            State::Dragging(drag) => drag.origin_cursor,
            State::Idle | State::Pressed => self.cursor,
        }
    }

    /// Current slot roles.
    #[must_use]
    pub fn ring(&self) -> SlotRing {
        self.ring
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> FlipPhase {
        match self.state {
            State::Idle => FlipPhase::Idle,
            State::Pressed => FlipPhase::Pressed,
            State::Dragging(drag) => FlipPhase::Dragging(drag.direction),
        }
    }

    /// Direction of the drag in progress.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        match self.state {
            State::Dragging(drag) => Some(drag.direction),
            State::Idle | State::Pressed => None,
        }
    }

    /// Returns `true` between the first qualifying move and commit/revert.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging(_))
    }

    /// Slots and scenes of commits whose transitions have not completed yet.
    pub fn pending_settles(&self) -> impl Iterator<Item = (SlotId, SceneId)> {
        SlotId::ALL
            .into_iter()
            .zip(self.settles)
            .filter_map(|(slot, scene)| Some((slot, scene?)))
    }

    /// Slot a revert left outside the ring roles and still has to park.
    #[must_use]
    pub fn pending_park(&self) -> Option<SlotId> {
        self.parking
    }

    /// Number of scenes.
    #[must_use]
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// The scenes, in order.
    #[must_use]
    pub fn scenes(&self) -> &[Scene<C>] {
        &self.scenes
    }

    /// The configuration given at construction.
    #[must_use]
    pub fn config(&self) -> &FlipConfig {
        &self.config
    }

    /// Viewport size read from the host at construction.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Shared access to the host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

impl<K, C, H> GestureHandler<K> for PageFlip<C, H>
where
    H: SlotRenderer + SceneTemplater<C>,
{
    fn on_start(&mut self) {
        self.move_start();
    }

    fn on_move(&mut self, delta: Vec2) {
        self.move_on(delta);
    }

    fn on_top(&mut self, _event: &TouchEvent<K>) {
        self.next();
    }

    fn on_bottom(&mut self, _event: &TouchEvent<K>) {
        self.prev();
    }

    fn on_resume(&mut self, _event: &TouchEvent<K>) {
        self.go_back();
    }

    // Horizontal swipes and taps never commit a vertical flip.
    fn on_tap(&mut self, _event: &TouchEvent<K>) {
        self.go_back();
    }

    fn on_left(&mut self, _event: &TouchEvent<K>) {
        self.go_back();
    }

    fn on_right(&mut self, _event: &TouchEvent<K>) {
        self.go_back();
    }
}
