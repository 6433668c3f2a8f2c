// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-barrier arbitration: closest-blocker selection, motion clamping,
//! and hold/dismiss bookkeeping.

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Line, Point};
use palisade_geom::{Directions, Orientation, segment_intersection};

use crate::arena::{Arena, BarrierId};
use crate::event::{BarrierEvent, BarrierSignal};
use crate::state::{BarrierState, RuntimeState};
use crate::types::Barrier;

/// One pointer-motion sample, before clamping.
///
/// The previous confirmed position is an explicit input; the manager keeps
/// no hidden per-device position state. `device` is carried through into
/// emitted events untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample {
    /// Host-assigned identifier of the moving device.
    pub device: u32,
    /// Sample timestamp, in milliseconds.
    pub time_ms: u64,
    /// The previous confirmed pointer position.
    pub prev: Point,
    /// The proposed, unclamped new position.
    pub proposed: Point,
}

/// The outcome of processing one motion sample.
#[derive(Clone, Debug)]
pub struct ProcessedMotion {
    /// The final clamped position the host should apply.
    pub position: Point,
    /// Hit/left signals for every barrier whose episode advanced this
    /// sample, in slot order.
    pub signals: Vec<BarrierSignal>,
}

struct Slot {
    barrier: Barrier,
    runtime: RuntimeState,
}

/// Owns the set of registered barriers and arbitrates pointer motion
/// against them.
///
/// The manager is driven once per pointer-motion sample through
/// [`process`](Self::process). It is strictly single-threaded: all state is
/// mutated through `&mut self`, and a host integrating from multiple
/// threads must provide its own mutual exclusion.
///
/// Trigger serials are owned by the manager (not process-global), so
/// independent managers in one process do not interfere and each is
/// testable in isolation.
pub struct BarrierManager {
    barriers: Arena<Slot>,
    serial: u32,
}

impl core::fmt::Debug for BarrierManager {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BarrierManager")
            .field("barriers", &self.barriers.len())
            .field("serial", &self.serial)
            .finish()
    }
}

impl Default for BarrierManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BarrierManager {
    /// Creates an empty manager.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            barriers: Arena::new(),
            serial: 0,
        }
    }

    /// Registers a barrier and returns its handle.
    pub fn insert(&mut self, barrier: Barrier) -> BarrierId {
        self.barriers.insert(Slot {
            barrier,
            runtime: RuntimeState::new(),
        })
    }

    /// Unregisters a barrier, returning its descriptor.
    ///
    /// Returns `None` for stale or already-removed handles. The caller is
    /// responsible for not removing a barrier while events referencing it
    /// are still in flight elsewhere in the host.
    pub fn remove(&mut self, id: BarrierId) -> Option<Barrier> {
        self.barriers.remove(id).map(|slot| slot.barrier)
    }

    /// Whether `id` refers to a currently registered barrier.
    #[must_use]
    pub fn is_active(&self, id: BarrierId) -> bool {
        self.barriers.contains(id)
    }

    /// The descriptor registered under `id`, if it is still live.
    #[must_use]
    pub fn barrier(&self, id: BarrierId) -> Option<&Barrier> {
        self.barriers.get(id).map(|slot| &slot.barrier)
    }

    /// The runtime state of the barrier under `id`, if it is still live.
    #[must_use]
    pub fn state(&self, id: BarrierId) -> Option<BarrierState> {
        self.barriers.get(id).map(|slot| slot.runtime.state)
    }

    /// The number of registered barriers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.barriers.len()
    }

    /// Whether no barriers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.barriers.len() == 0
    }

    /// Requests the release of a held barrier.
    ///
    /// Honored only if the barrier is currently `Held` and `event.event_id`
    /// matches the episode's trigger serial; everything else (stale serials,
    /// repeated requests, unknown handles) is a silent no-op. The honored
    /// request transitions the barrier to `Release`; the pointer passes
    /// through on the next sample and the episode's tail event fires then.
    pub fn release(&mut self, id: BarrierId, event: &BarrierEvent) {
        if let Some(slot) = self.barriers.get_mut(id) {
            slot.runtime.request_release(event.event_id);
        }
    }

    /// Processes one pointer-motion sample and returns the clamped position
    /// together with the barrier signals it produced.
    ///
    /// Per sample this:
    /// 1. clamps the motion against the closest blocking barrier per
    ///    remaining motion direction (at most two iterations, one per axis);
    /// 2. dismisses held barriers whose episode no longer tracks the final
    ///    position (outside the segment's extent or its hit box);
    /// 3. emits hit/left signals for every barrier whose episode advanced.
    pub fn process(&mut self, sample: &MotionSample) -> ProcessedMotion {
        let mut position = sample.proposed;
        let delta = sample.proposed - sample.prev;
        let mut remaining = Directions::of_motion(sample.prev, sample.proposed);

        while !remaining.is_empty() {
            let Some((id, matched)) = self.closest_blocker(sample.prev, position, remaining)
            else {
                break;
            };

            let fresh_serial = match self.state(id) {
                Some(BarrierState::Active) => Some(bump_serial(&mut self.serial)),
                _ => None,
            };
            if let Some(slot) = self.barriers.get_mut(id) {
                match slot.barrier.orientation() {
                    Orientation::Horizontal => position.y = slot.barrier.coordinate(),
                    Orientation::Vertical => position.x = slot.barrier.coordinate(),
                }
                match fresh_serial {
                    Some(serial) => slot.runtime.begin_episode(serial, matched),
                    None => slot.runtime.continue_episode(matched),
                }
            }
            remaining -= matched;
        }

        // Held barriers are dismissed once the final clamped position slides
        // past their extent or escapes the hit box.
        for (_, slot) in self.barriers.iter_mut() {
            if slot.runtime.state == BarrierState::Held
                && !slot
                    .barrier
                    .hit_box_contains(slot.runtime.blocked_dir, position)
            {
                slot.runtime.state = BarrierState::Left;
            }
        }

        let mut signals = Vec::new();
        for (id, slot) in self.barriers.iter_mut() {
            let serial = slot.runtime.trigger_serial;
            let Some(emission) = slot.runtime.emit_transition(sample.time_ms) else {
                continue;
            };
            let event = Arc::new(BarrierEvent {
                event_id: serial,
                device: sample.device,
                time_ms: sample.time_ms,
                position,
                delta,
                dt_ms: emission.dt_ms,
                grabbed: emission.grabbed,
                released: emission.released,
            });
            signals.push(if emission.left_signal {
                BarrierSignal::Left(id, event)
            } else {
                BarrierSignal::Hit(id, event)
            });
        }

        ProcessedMotion { position, signals }
    }

    /// Finds the barrier whose segment intersects the motion line closest to
    /// its start, among barriers that block a remaining direction.
    ///
    /// Released barriers never block (that is what lets the pointer
    /// through), and held barriers only count while the motion still pushes
    /// into the side they clamped. Equidistant candidates tie-break to the
    /// lowest slot index: the scan is in index order and only a strictly
    /// smaller distance displaces the current best.
    fn closest_blocker(
        &self,
        prev: Point,
        current: Point,
        remaining: Directions,
    ) -> Option<(BarrierId, Directions)> {
        let motion = Line::new(prev, current);
        let mut nearest: Option<(BarrierId, f64, Directions)> = None;
        for (id, slot) in self.barriers.iter() {
            if slot.runtime.state == BarrierState::Release {
                continue;
            }
            let matched = slot.barrier.blocked() & remaining;
            if matched.is_empty() {
                continue;
            }
            if slot.runtime.state == BarrierState::Held
                && (remaining & slot.runtime.blocked_dir).is_empty()
            {
                continue;
            }
            let Some(crossing) = segment_intersection(motion, slot.barrier.line()) else {
                continue;
            };
            let dist_sq = prev.distance_squared(crossing);
            if nearest.is_none_or(|(_, best, _)| dist_sq < best) {
                nearest = Some((id, dist_sq, matched));
            }
        }
        nearest.map(|(id, _, matched)| (id, matched))
    }
}

/// Advances the manager's serial counter, skipping 0 on wraparound so event
/// ids are always non-zero.
fn bump_serial(counter: &mut u32) -> u32 {
    *counter = counter.wrapping_add(1);
    if *counter == 0 {
        *counter = 1;
    }
    *counter
}
