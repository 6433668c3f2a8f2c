// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Barrier bookkeeping for window systems that arbitrate barriers in the
//! display server.
//!
//! On such platforms the server clamps the pointer itself and reports hits
//! back to the host; this side only tracks which handles are live and
//! forwards honored release requests through a host-supplied hook (which
//! wraps the actual protocol call). Repeated releases of the same episode
//! are suppressed here so a jittery host cannot spam the server.

use alloc::vec::Vec;

use crate::arena::{Arena, BarrierId};
use crate::backend::PointerBarriers;
use crate::event::BarrierEvent;

struct RemoteSlot {
    last_release: Option<u32>,
}

/// The remote-arbitration backend.
///
/// `release_hook` receives the slot index of the barrier (the stable number
/// hosts key their server-side registry by, see [`BarrierId::index`]) and
/// the episode serial being released.
pub struct RemoteBarriers<F> {
    slots: Arena<RemoteSlot>,
    release_hook: F,
}

impl<F> core::fmt::Debug for RemoteBarriers<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RemoteBarriers")
            .field("barriers", &self.slots.len())
            .finish_non_exhaustive()
    }
}

impl<F: FnMut(u32, u32)> RemoteBarriers<F> {
    /// Creates an empty backend that forwards releases to `release_hook`.
    pub const fn new(release_hook: F) -> Self {
        Self {
            slots: Arena::new(),
            release_hook,
        }
    }

    /// Registers a barrier the display server already knows about.
    pub fn insert(&mut self) -> BarrierId {
        self.slots.insert(RemoteSlot { last_release: None })
    }

    /// Unregisters a barrier. Returns `false` for stale handles.
    pub fn remove(&mut self, id: BarrierId) -> bool {
        self.slots.remove(id).is_some()
    }

    /// The number of registered barriers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no barriers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.len() == 0
    }

    /// The handles of all live barriers, in slot order.
    #[must_use]
    pub fn ids(&self) -> Vec<BarrierId> {
        self.slots.iter().map(|(id, _)| id).collect()
    }
}

impl<F: FnMut(u32, u32)> PointerBarriers for RemoteBarriers<F> {
    fn is_active(&self, id: BarrierId) -> bool {
        self.slots.contains(id)
    }

    fn release(&mut self, id: BarrierId, event: &BarrierEvent) {
        if let Some(slot) = self.slots.get_mut(id) {
            if slot.last_release == Some(event.event_id) {
                return;
            }
            slot.last_release = Some(event.event_id);
            (self.release_hook)(id.index(), event.event_id);
        }
    }

    fn destroy(&mut self, id: BarrierId) {
        self.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::RefCell;

    use kurbo::{Point, Vec2};

    use super::*;

    fn event(event_id: u32) -> BarrierEvent {
        BarrierEvent {
            event_id,
            device: 0,
            time_ms: 0,
            position: Point::ZERO,
            delta: Vec2::ZERO,
            dt_ms: 0,
            grabbed: true,
            released: false,
        }
    }

    #[test]
    fn release_forwards_once_per_episode() {
        let forwarded = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&forwarded);
        let mut remote = RemoteBarriers::new(move |slot, serial| {
            sink.borrow_mut().push((slot, serial));
        });

        let id = remote.insert();
        assert!(remote.is_active(id));

        remote.release(id, &event(7));
        remote.release(id, &event(7));
        remote.release(id, &event(8));
        assert_eq!(&*forwarded.borrow(), &[(id.index(), 7), (id.index(), 8)]);
    }

    #[test]
    fn destroyed_handles_ignore_release() {
        let forwarded = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&forwarded);
        let mut remote = RemoteBarriers::new(move |slot, serial| {
            sink.borrow_mut().push((slot, serial));
        });

        let id = remote.insert();
        remote.destroy(id);
        assert!(!remote.is_active(id));

        remote.release(id, &event(7));
        assert!(forwarded.borrow().is_empty());
    }
}
