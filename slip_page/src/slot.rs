// Copyright 2025 the Slip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The three page slots and the roles they rotate through.

/// One of the three persistent page containers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u8);

impl SlotId {
    /// Number of slots in the ring.
    pub const COUNT: usize = 3;

    /// All slots, in container order.
    pub const ALL: [Self; Self::COUNT] = [Self(0), Self(1), Self(2)];

    /// Slot for a container index, if it is in `0..3`.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "Index is checked against COUNT above"
            )]
            let index = index as u8;
            Some(Self(index))
        } else {
            None
        }
    }

    /// Container index in `0..3`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The following slot, wrapping from 2 to 0.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % 3)
    }

    /// The preceding slot, wrapping from 0 to 2.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self((self.0 + 2) % 3)
    }
}

/// The slot that is neither `first` nor `second`.
///
/// With two distinct slots occupied, the remaining one is uniquely determined.
#[must_use]
pub fn third_slot(first: SlotId, second: SlotId) -> SlotId {
    debug_assert_ne!(first, second, "third_slot needs two distinct slots");
    SlotId::ALL
        .into_iter()
        .find(|slot| *slot != first && *slot != second)
        .unwrap_or(first)
}

/// Role assignment over the three slots.
///
/// `active` holds the settled scene, `pending` is the candidate for the
/// current (or next) gesture and the remaining slot is idle, parked off
/// screen. The three roles are always a permutation of the three slots.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SlotRing {
    active: SlotId,
    pending: SlotId,
}

impl SlotRing {
    /// Slot 0 active, slot 1 staged as pending, slot 2 idle.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: SlotId(0),
            pending: SlotId(1),
        }
    }

    /// The slot holding the settled scene.
    #[must_use]
    pub const fn active(&self) -> SlotId {
        self.active
    }

    /// The slot that would become active on commit.
    #[must_use]
    pub const fn pending(&self) -> SlotId {
        self.pending
    }

    /// The spare slot, parked off screen.
    #[must_use]
    pub fn idle(&self) -> SlotId {
        third_slot(self.active, self.pending)
    }

    /// `[active, pending, idle]`.
    #[must_use]
    pub fn roles(&self) -> [SlotId; 3] {
        [self.active, self.pending, self.idle()]
    }

    /// Point `pending` at the neighbor of `active` in the given direction.
    pub(crate) fn aim(&mut self, forward: bool) {
        self.pending = if forward {
            self.active.next()
        } else {
            self.active.prev()
        };
    }

    /// Swap the active and pending roles.
    pub(crate) fn swap(&mut self) {
        core::mem::swap(&mut self.active, &mut self.pending);
    }
}

impl Default for SlotRing {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation(roles: [SlotId; 3]) -> bool {
        let mut seen = [false; 3];
        for slot in roles {
            seen[slot.index()] = true;
        }
        seen.iter().all(|s| *s)
    }

    #[test]
    fn third_slot_is_the_set_difference() {
        for a in SlotId::ALL {
            for b in SlotId::ALL {
                if a == b {
                    continue;
                }
                let c = third_slot(a, b);
                assert_ne!(c, a);
                assert_ne!(c, b);
                assert_eq!(a.index() + b.index() + c.index(), 3);
            }
        }
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(SlotId::ALL[2].next(), SlotId::ALL[0]);
        assert_eq!(SlotId::ALL[0].prev(), SlotId::ALL[2]);
        for slot in SlotId::ALL {
            assert_eq!(slot.next().prev(), slot);
        }
    }

    #[test]
    fn slot_ids_are_bounded() {
        assert_eq!(SlotId::new(2).map(SlotId::index), Some(2));
        assert_eq!(SlotId::new(3), None);
    }

    #[test]
    fn aim_and_swap_keep_a_permutation() {
        let mut ring = SlotRing::new();
        assert_eq!(ring.roles(), SlotId::ALL);

        for step in 0..12 {
            ring.aim(step % 3 != 0);
            assert!(is_permutation(ring.roles()));
            ring.swap();
            assert!(is_permutation(ring.roles()));
        }
    }

    #[test]
    fn aim_back_selects_the_previous_slot() {
        let mut ring = SlotRing::new();
        ring.aim(false);
        assert_eq!(ring.pending(), SlotId::ALL[2]);
        assert_eq!(ring.idle(), SlotId::ALL[1]);
    }
}
