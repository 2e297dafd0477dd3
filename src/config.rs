//! Lottery configuration: tunable parameters and their validation.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// All tunable parameters for one lottery game.
///
/// Loaded once (from `lottery.json` or defaults), validated once, then
/// treated as immutable by the whole engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LotteryConfig {
    /// Minimum number of tickets a player can purchase
    pub min_ticket_count: u32,

    /// Maximum number of tickets a player can purchase
    pub max_ticket_count: u32,

    /// Starting balance for every player
    pub initial_balance: f64,

    /// Cost of a single ticket
    pub ticket_cost: f64,

    /// Fraction of total revenue paid to the grand prize winner (0.0 to 1.0)
    pub grand_prize_percentage: f64,

    /// Fraction of total revenue allocated to the second tier pool (0.0 to 1.0)
    pub second_tier_percentage: f64,

    /// Fraction of total revenue allocated to the third tier pool (0.0 to 1.0)
    pub third_tier_percentage: f64,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            min_ticket_count: 1,
            max_ticket_count: 10,
            initial_balance: 10.0,
            ticket_cost: 1.0,
            grand_prize_percentage: 0.5,
            second_tier_percentage: 0.3,
            third_tier_percentage: 0.1,
        }
    }
}

impl LotteryConfig {
    /// Loads configuration from a JSON settings file.
    ///
    /// A missing file is not an error: the defaults apply. A file that
    /// exists but cannot be read or parsed is fatal.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parses configuration from a JSON string. Unspecified fields keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks the structural invariants, reporting the first violated rule.
    ///
    /// Deliberately does NOT check that `initial_balance` can afford
    /// `min_ticket_count` tickets; an underfunded configuration surfaces
    /// as an insufficient-balance purchase error at game time instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_ticket_count < 1 {
            return Err(ConfigError::MinTicketCountTooLow);
        }
        if self.max_ticket_count < self.min_ticket_count {
            return Err(ConfigError::MaxBelowMin);
        }
        if self.ticket_cost <= 0.0 {
            return Err(ConfigError::NonPositiveTicketCost);
        }
        let total = self.grand_prize_percentage
            + self.second_tier_percentage
            + self.third_tier_percentage;
        if total > 1.0 {
            return Err(ConfigError::PercentagesExceedRevenue);
        }
        Ok(())
    }
}
