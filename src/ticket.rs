//! Lottery tickets and the process-wide ticket id allocator.

use std::sync::atomic::{AtomicU64, Ordering};

/// A single lottery ticket. Immutable after creation.
///
/// `owner` is a back-reference to the owning player's identifier, not
/// ownership of the player itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub id: u64,
    pub owner: String,
}

/// Hands out globally unique, strictly increasing ticket ids.
///
/// Ids start at 1 and are never reused or reset for the lifetime of the
/// allocator. The counter is atomic so ids stay unique even if several
/// games share one allocator across threads; shared via `Arc` between
/// every player in a game.
#[derive(Debug)]
pub struct TicketIdAllocator {
    next: AtomicU64,
}

impl TicketIdAllocator {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Returns the next id and advances the counter.
    pub fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for TicketIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}
