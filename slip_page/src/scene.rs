// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenes: the ordered pages of content and their lifecycle hooks.

use alloc::boxed::Box;
use core::fmt;

use crate::SlotId;

/// Stable identity of a scene: its index in the scene list.
///
/// Templaters record it alongside injected content so the controller can tell
/// whether a slot already holds a given scene.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(pub usize);

/// Lifecycle hook, called with the slot the scene lives in.
pub type SceneHook = Box<dyn FnMut(SlotId)>;

/// When a scene's `on_init` hook runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum InitPolicy {
    /// The first time the scene's content is injected into any slot.
    #[default]
    Once,
    /// Every time the scene's content is actually (re-)injected into a slot.
    ///
    /// Useful when the templater rebuilds markup and bindings must be redone.
    EveryFill,
}

/// One page of content with `on_init` and `on_show` hooks.
pub struct Scene<C> {
    /// Content handed to the templater.
    pub content: C,
    on_init: Option<SceneHook>,
    on_show: Option<SceneHook>,
}

impl<C> Scene<C> {
    /// A scene without hooks.
    pub fn new(content: C) -> Self {
        Self {
            content,
            on_init: None,
            on_show: None,
        }
    }

    /// Set the hook run when the content is injected (see [`InitPolicy`]).
    #[must_use]
    pub fn on_init(mut self, hook: impl FnMut(SlotId) + 'static) -> Self {
        self.on_init = Some(Box::new(hook));
        self
    }

    /// Set the hook run every time a settle lands on this scene.
    #[must_use]
    pub fn on_show(mut self, hook: impl FnMut(SlotId) + 'static) -> Self {
        self.on_show = Some(Box::new(hook));
        self
    }

    pub(crate) fn init(&mut self, slot: SlotId) {
        if let Some(hook) = &mut self.on_init {
            hook(slot);
        }
    }

    pub(crate) fn show(&mut self, slot: SlotId) {
        if let Some(hook) = &mut self.on_show {
            hook(slot);
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for Scene<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("content", &self.content)
            .field("on_init", &self.on_init.is_some())
            .field("on_show", &self.on_show.is_some())
            .finish()
    }
}
