//! Players and the ticket purchase rules.

use crate::error::PurchaseError;
use crate::ticket::{Ticket, TicketIdAllocator};
use std::sync::Arc;

/// A lottery player, human or CPU.
///
/// Purchase bounds and ticket cost are captured at construction as plain
/// values rather than a reference to the configuration, so players with
/// different rules can coexist in one game.
#[derive(Debug)]
pub struct Player {
    id: String,
    balance: f64,
    tickets: Vec<Ticket>,
    ticket_cost: f64,
    min_ticket_count: u32,
    max_ticket_count: u32,
    ids: Arc<TicketIdAllocator>,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        initial_balance: f64,
        ticket_cost: f64,
        min_ticket_count: u32,
        max_ticket_count: u32,
        ids: Arc<TicketIdAllocator>,
    ) -> Self {
        Self {
            id: id.into(),
            balance: initial_balance,
            tickets: Vec::new(),
            ticket_cost,
            min_ticket_count,
            max_ticket_count,
            ids,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// The tickets this player owns, in purchase order.
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Purchases `count` tickets: deducts the cost and appends the new
    /// tickets with consecutive ids from the shared allocator.
    ///
    /// All-or-nothing: on any error the balance and ticket list are left
    /// exactly as they were.
    pub fn purchase_tickets(&mut self, count: u32) -> Result<(), PurchaseError> {
        if count < self.min_ticket_count || count > self.max_ticket_count {
            return Err(PurchaseError::InvalidTicketCount {
                count,
                min: self.min_ticket_count,
                max: self.max_ticket_count,
            });
        }

        let total_cost = count as f64 * self.ticket_cost;
        if total_cost > self.balance {
            return Err(PurchaseError::InsufficientBalance {
                required: total_cost,
                available: self.balance,
            });
        }

        self.balance -= total_cost;
        for _ in 0..count {
            self.tickets.push(Ticket {
                id: self.ids.next_id(),
                owner: self.id.clone(),
            });
        }
        Ok(())
    }
}
