// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense generational arena backing the barrier collections.
//!
//! Barriers live in a flat `Vec` of slots and are addressed by
//! [`BarrierId`]. The per-sample arbitration pass is a linear scan over the
//! slots, which is cache-friendly for the handful of barriers a host
//! typically registers.

use alloc::vec::Vec;

/// Identifier for a registered barrier.
///
/// This is a small, copyable handle that stays stable while the barrier is
/// registered and becomes invalid when the underlying slot is reused. It
/// consists of a slot index and a generation counter: on removal the slot is
/// freed, and on reuse its generation is incremented, so a stale `BarrierId`
/// never aliases a different live barrier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BarrierId(pub(crate) u32, pub(crate) u32);

impl BarrierId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    /// The slot index of this handle.
    ///
    /// Exposed for hosts that mirror barriers into an external table (for
    /// example a display-server-side barrier registry).
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

struct Entry<T> {
    generation: u32,
    occupant: Option<T>,
}

pub(crate) struct Arena<T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, value: T) -> BarrierId {
        if let Some(idx) = self.free.pop() {
            let entry = &mut self.entries[idx as usize];
            entry.generation += 1;
            entry.occupant = Some(value);
            BarrierId::new(idx, entry.generation)
        } else {
            let idx = u32::try_from(self.entries.len()).expect("barrier arena exceeds u32 slots");
            self.entries.push(Entry {
                generation: 1,
                occupant: Some(value),
            });
            BarrierId::new(idx, 1)
        }
    }

    pub(crate) fn remove(&mut self, id: BarrierId) -> Option<T> {
        let entry = self.entries.get_mut(id.idx())?;
        if entry.generation != id.1 {
            return None;
        }
        let value = entry.occupant.take()?;
        self.free.push(id.0);
        Some(value)
    }

    pub(crate) fn get(&self, id: BarrierId) -> Option<&T> {
        let entry = self.entries.get(id.idx())?;
        if entry.generation != id.1 {
            return None;
        }
        entry.occupant.as_ref()
    }

    pub(crate) fn get_mut(&mut self, id: BarrierId) -> Option<&mut T> {
        let entry = self.entries.get_mut(id.idx())?;
        if entry.generation != id.1 {
            return None;
        }
        entry.occupant.as_mut()
    }

    pub(crate) fn contains(&self, id: BarrierId) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.occupant.is_some()).count()
    }

    /// Iterates live slots in index order.
    pub(crate) fn iter(&self) -> impl Iterator<Item = (BarrierId, &T)> {
        (0_u32..).zip(self.entries.iter()).filter_map(|(idx, entry)| {
            entry
                .occupant
                .as_ref()
                .map(|value| (BarrierId::new(idx, entry.generation), value))
        })
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (BarrierId, &mut T)> {
        (0_u32..)
            .zip(self.entries.iter_mut())
            .filter_map(|(idx, entry)| {
                entry
                    .occupant
                    .as_mut()
                    .map(|value| (BarrierId::new(idx, entry.generation), value))
            })
    }
}
