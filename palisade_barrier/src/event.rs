// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Barrier-crossing events and the signals that deliver them.

use alloc::sync::Arc;

use kurbo::{Point, Vec2};

use crate::arena::BarrierId;

/// One barrier-crossing event.
///
/// Events are handed out behind [`Arc`]: the manager creates each event with
/// a single reference and listeners clone the handle if they need to keep it
/// past the [`process`](crate::BarrierManager::process) call that produced
/// it. An event is also the token for
/// [`release`](crate::BarrierManager::release): its `event_id` names the
/// hit/hold episode a release request targets, so late or duplicated
/// requests against a newer episode fall through harmlessly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarrierEvent {
    /// The trigger serial of the episode this event belongs to. Never 0.
    pub event_id: u32,
    /// The input device whose motion produced this event.
    pub device: u32,
    /// Sample timestamp, in milliseconds.
    pub time_ms: u64,
    /// The clamped pointer position.
    pub position: Point,
    /// The raw, unclamped delta of this sample.
    pub delta: Vec2,
    /// Milliseconds since the episode's previous event; 0 at the hit.
    pub dt_ms: u64,
    /// The barrier was already holding the pointer before this sample.
    pub grabbed: bool,
    /// This event is the tail of an explicitly released episode.
    pub released: bool,
}

/// A state-transition notification for one barrier.
///
/// These are the two signals a host observes: `Hit` while the pointer
/// presses against a barrier (the first carrying `dt_ms == 0`), and `Left`
/// when an episode ends, whether by the pointer escaping the hit box or by
/// an honored release request (`released` distinguishes the two).
#[derive(Clone, Debug)]
pub enum BarrierSignal {
    /// The pointer was clamped against, or keeps pressing on, the barrier.
    Hit(BarrierId, Arc<BarrierEvent>),
    /// The episode ended; the barrier is back to watching for motion.
    Left(BarrierId, Arc<BarrierEvent>),
}

impl BarrierSignal {
    /// The barrier this signal concerns.
    #[must_use]
    pub fn barrier(&self) -> BarrierId {
        match self {
            Self::Hit(id, _) | Self::Left(id, _) => *id,
        }
    }

    /// The event payload.
    #[must_use]
    pub fn event(&self) -> &Arc<BarrierEvent> {
        match self {
            Self::Hit(_, event) | Self::Left(_, event) => event,
        }
    }
}
