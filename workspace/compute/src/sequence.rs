//! Monotonic tickets used to drop results of superseded actions.
//!
//! Every invocation of an action takes a ticket before it suspends. When it
//! resumes, it applies its result only if no later invocation has taken a
//! ticket in the meantime. Nothing is cancelled; stale work simply finishes
//! without touching the view.

use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct ActionSequence {
    latest: Cell<u64>,
}

impl ActionSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}
