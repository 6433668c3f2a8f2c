// Copyright 2026 the Palisade Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability seam between barrier handles and their arbitration
//! backend.

use crate::arena::BarrierId;
use crate::event::BarrierEvent;
use crate::manager::BarrierManager;

/// The operations a barrier handle needs from whichever backend arbitrates
/// it.
///
/// Two backends implement this: [`BarrierManager`], which clamps motion
/// in-process, and [`RemoteBarriers`](crate::RemoteBarriers), for window
/// systems where the display server does the clamping and the host only
/// forwards release requests. Hosts pick one at startup based on the
/// platform they run on; barrier-handling code above this trait is
/// backend-agnostic.
pub trait PointerBarriers {
    /// Whether `id` refers to a live barrier in this backend.
    fn is_active(&self, id: BarrierId) -> bool;

    /// Requests the release of the episode `event` belongs to.
    ///
    /// Stale or repeated requests are silent no-ops.
    fn release(&mut self, id: BarrierId, event: &BarrierEvent);

    /// Tears the barrier down. Safe to call with a stale handle.
    fn destroy(&mut self, id: BarrierId);
}

impl PointerBarriers for BarrierManager {
    fn is_active(&self, id: BarrierId) -> bool {
        BarrierManager::is_active(self, id)
    }

    fn release(&mut self, id: BarrierId, event: &BarrierEvent) {
        BarrierManager::release(self, id, event);
    }

    fn destroy(&mut self, id: BarrierId) {
        self.remove(id);
    }
}
