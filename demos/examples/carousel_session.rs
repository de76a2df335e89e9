// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted touch session driving a five-scene page flip.
//!
//! This example shows how to combine:
//! - `slip_gesture` for turning raw touch events into swipes,
//! - `slip_page` for recycling three slots over a longer scene list,
//! - an in-memory host that records what a real renderer would be asked to do.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p slip_demos --example carousel_session`

use kurbo::{Point, Size};
use slip_gesture::{Recognizer, TouchEvent};
use slip_page::{
    FlipConfig, PageFlip, Scene, SceneId, SceneTemplater, SlotId, SlotRenderer, SlotTransform,
};
use tracing_subscriber::EnvFilter;

/// Stand-in for a DOM or retained scene graph.
#[derive(Debug, Default)]
struct MemoryHost {
    held: [Option<SceneId>; 3],
    titles: [&'static str; 3],
}

impl SlotRenderer for MemoryHost {
    fn viewport(&self) -> Size {
        Size::new(375.0, 667.0)
    }

    fn apply_transform(&mut self, slot: SlotId, t: &SlotTransform) {
        println!(
            "  slot {} <- translate ({:>5.1}, {:>5.1}) scale {:.3} z {:>3} over {}ms",
            slot.index(),
            t.translate.x,
            t.translate.y,
            t.scale,
            t.z_index,
            t.duration_ms
        );
    }
}

impl SceneTemplater<&'static str> for MemoryHost {
    fn render_scene_into(&mut self, slot: SlotId, scene: SceneId, content: &&'static str) {
        println!("  slot {} <- scene {} ({content})", slot.index(), scene.0);
        self.held[slot.index()] = Some(scene);
        self.titles[slot.index()] = content;
    }

    fn current_scene_identity(&self, slot: SlotId) -> Option<SceneId> {
        self.held[slot.index()]
    }
}

/// One finger going down at `from`, moving through `path`, and lifting.
fn swipe(
    recognizer: &mut Recognizer<&'static str, PageFlip<&'static str, MemoryHost>>,
    from: Point,
    path: &[Point],
) {
    recognizer.touch_start(&TouchEvent::single("stage", from));
    for point in path {
        let outcome = recognizer.touch_move(&TouchEvent::single("stage", *point));
        if !outcome.response.is_empty() {
            println!("  move response: {:?}", outcome.response);
        }
    }
    let outcome = recognizer.touch_end(&TouchEvent::released("stage"));
    println!("  gesture: {:?}", outcome.gesture);

    // A real host reports this from its transition-end callback.
    let flip = recognizer.handler_mut();
    let settles: Vec<_> = flip.pending_settles().map(|(slot, _)| slot).collect();
    for slot in settles.into_iter().chain(flip.pending_park()) {
        println!("  outcome: {:?}", flip.transition_complete(slot));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let scenes = ["cover", "intro", "schedule", "venue", "rsvp"]
        .into_iter()
        .map(|title| {
            Scene::new(title)
                .on_init(move |slot| println!("  [{title}] init in slot {}", slot.index()))
                .on_show(move |slot| println!("  [{title}] shown in slot {}", slot.index()))
        })
        .collect();

    println!("build:");
    let flip = PageFlip::new(
        FlipConfig::new().with_looping(true),
        scenes,
        MemoryHost::default(),
    );
    let mut recognizer = Recognizer::attach(
        "stage",
        PageFlip::<&str, MemoryHost>::gesture_config(),
        flip,
    );

    let bottom = Point::new(180.0, 600.0);
    let top = Point::new(180.0, 80.0);

    println!("\nswipe up:");
    swipe(&mut recognizer, bottom, &[Point::new(182.0, 400.0), top]);

    println!("\nshort drag up, released early:");
    swipe(&mut recognizer, bottom, &[Point::new(181.0, 520.0)]);

    println!("\nswipe down:");
    swipe(&mut recognizer, top, &[Point::new(178.0, 300.0), bottom]);

    println!("\nswipe down past the first scene:");
    swipe(&mut recognizer, top, &[bottom]);

    let flip = recognizer.into_handler();
    let active = flip.ring().active();
    println!(
        "\nsettled on scene {} in slot {} ({})",
        flip.scene_cursor(),
        active.index(),
        flip.host().titles[active.index()]
    );
}
