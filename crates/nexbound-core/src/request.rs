//! Sequence numbers for collaborator requests.
//!
//! Each state slot that receives asynchronous results gets a monotonically
//! increasing counter. A result is applied only if its ticket is still the
//! latest one issued for the slot, so a slow earlier call can never overwrite
//! the outcome of a later one.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestSlot {
    Login,
    DashboardData,
    Draft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    slot: RequestSlot,
    seq: u64,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: HashMap<RequestSlot, u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes every earlier one for `slot`.
    pub fn issue(&mut self, slot: RequestSlot) -> RequestTicket {
        let seq = self.latest.entry(slot).or_insert(0);
        *seq += 1;
        RequestTicket { slot, seq: *seq }
    }

    /// Makes every outstanding ticket for `slot` stale.
    pub fn invalidate(&mut self, slot: RequestSlot) {
        *self.latest.entry(slot).or_insert(0) += 1;
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get(&ticket.slot).copied() == Some(ticket.seq)
    }
}
