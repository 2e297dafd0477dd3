//! Error types for the lottery engine.

use thiserror::Error;

/// Errors raised while loading or validating the lottery configuration.
///
/// All of these are fatal at startup: a game never runs against an
/// invalid configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("min_ticket_count must be at least 1")]
    MinTicketCountTooLow,

    #[error("max_ticket_count must be greater than or equal to min_ticket_count")]
    MaxBelowMin,

    #[error("ticket_cost must be greater than 0")]
    NonPositiveTicketCost,

    #[error("total prize percentages cannot exceed 100%")]
    PercentagesExceedRevenue,

    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised by a single ticket purchase.
///
/// A failed purchase leaves the player completely untouched; the
/// human-facing input loop retries, CPU generation propagates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PurchaseError {
    /// Requested count is outside the player's allowed closed interval.
    #[error("ticket count must be between {min} and {max}, got {count}")]
    InvalidTicketCount { count: u32, min: u32, max: u32 },

    /// The purchase would cost more than the player has.
    #[error("insufficient balance: required ${required:.2}, available ${available:.2}")]
    InsufficientBalance { required: f64, available: f64 },
}

/// Errors raised by the game orchestrator.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GameError {
    #[error(transparent)]
    Purchase(#[from] PurchaseError),

    /// A draw or results projection was requested before `initialize`.
    #[error("game has not been initialized")]
    NotInitialized,

    /// `initialize` was called twice; the transition is one-way.
    #[error("game has already been initialized")]
    AlreadyInitialized,
}
