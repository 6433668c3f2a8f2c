// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-barrier runtime state and the hit/held/left transition machine.

use palisade_geom::Directions;

/// The runtime state of a registered barrier.
///
/// `Hit`, `Release`, and `Left` are momentary: they exist between the clamp
/// (or release request) that entered them and the emission step of the same
/// or the following [`process`](crate::BarrierManager::process) call, which
/// advances them onward after producing their one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarrierState {
    /// Registered but not currently blocking anything.
    Active,
    /// This sample's motion was just clamped against the barrier.
    Hit,
    /// The pointer keeps pressing against the barrier across samples.
    Held,
    /// An explicit release request was honored; one more event fires.
    Release,
    /// The pointer exited the hit box; one more event fires.
    Left,
}

/// What the emission step produces for one barrier this sample.
pub(crate) struct Emission {
    pub(crate) left_signal: bool,
    pub(crate) dt_ms: u64,
    pub(crate) grabbed: bool,
    pub(crate) released: bool,
}

/// Mutable per-slot record driven exclusively by the manager.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RuntimeState {
    pub(crate) state: BarrierState,
    pub(crate) trigger_serial: u32,
    pub(crate) last_event_time_ms: u64,
    pub(crate) blocked_dir: Directions,
}

impl RuntimeState {
    pub(crate) const fn new() -> Self {
        Self {
            state: BarrierState::Active,
            trigger_serial: 0,
            last_event_time_ms: 0,
            blocked_dir: Directions::empty(),
        }
    }

    /// Starts a fresh hit episode with the serial the manager assigned.
    pub(crate) fn begin_episode(&mut self, serial: u32, blocked: Directions) {
        self.state = BarrierState::Hit;
        self.trigger_serial = serial;
        self.blocked_dir = blocked;
    }

    /// Records an additional clamp against an ongoing episode.
    pub(crate) fn continue_episode(&mut self, blocked: Directions) {
        self.blocked_dir |= blocked;
    }

    /// Honors a release request for the given episode serial.
    ///
    /// Stale or duplicate serials, and requests against a barrier that is not
    /// held, are silently ignored.
    pub(crate) fn request_release(&mut self, serial: u32) {
        if self.state == BarrierState::Held && self.trigger_serial == serial {
            self.state = BarrierState::Release;
        }
    }

    /// Advances the state machine for this sample's emission step.
    ///
    /// Returns `None` for `Active` barriers (nothing to report). Otherwise
    /// returns the event parameters and applies the scheduled transition:
    /// `Hit` becomes `Held`, `Held` stays, `Release` and `Left` return to
    /// `Active`. The `grabbed`/`released` flags describe the state *before*
    /// the transition, so a fresh hit reports `grabbed = false` and a repeat
    /// while held reports `grabbed = true`.
    pub(crate) fn emit_transition(&mut self, time_ms: u64) -> Option<Emission> {
        match self.state {
            BarrierState::Active => None,
            BarrierState::Hit => {
                self.state = BarrierState::Held;
                self.last_event_time_ms = time_ms;
                Some(Emission {
                    left_signal: false,
                    dt_ms: 0,
                    grabbed: false,
                    released: false,
                })
            }
            BarrierState::Held => {
                let dt_ms = time_ms.saturating_sub(self.last_event_time_ms);
                self.last_event_time_ms = time_ms;
                Some(Emission {
                    left_signal: false,
                    dt_ms,
                    grabbed: true,
                    released: false,
                })
            }
            BarrierState::Release | BarrierState::Left => {
                let released = self.state == BarrierState::Release;
                let dt_ms = time_ms.saturating_sub(self.last_event_time_ms);
                self.state = BarrierState::Active;
                self.blocked_dir = Directions::empty();
                Some(Emission {
                    left_signal: true,
                    dt_ms,
                    grabbed: false,
                    released,
                })
            }
        }
    }
}
