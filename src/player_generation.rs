//! CPU player generation.
//!
//! Fills the game up to a randomly chosen total player count, giving each
//! CPU player a random ticket purchase within the configured bounds.

use crate::config::LotteryConfig;
use crate::error::PurchaseError;
use crate::player::Player;
use crate::ticket::TicketIdAllocator;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::sync::Arc;

/// Smallest total player count (human + CPU) a game may have.
pub const MIN_TOTAL_PLAYERS: u32 = 10;

/// Largest total player count (human + CPU) a game may have.
pub const MAX_TOTAL_PLAYERS: u32 = 15;

/// Capability contract for producing the CPU player population.
pub trait PlayerGenerator {
    /// Generates CPU players so that human + CPU reaches a total in
    /// [`MIN_TOTAL_PLAYERS`, `MAX_TOTAL_PLAYERS`], each having already
    /// purchased their tickets.
    ///
    /// Precondition: `human_player_count <= MIN_TOTAL_PLAYERS`, so the
    /// CPU count never goes negative. Not checked.
    fn generate_cpu_players(&mut self, human_player_count: u32)
        -> Result<Vec<Player>, PurchaseError>;
}

/// Standard generator backed by its own random source, independent of the
/// prize calculator's.
pub struct RandomPlayerGenerator<R: Rng> {
    config: LotteryConfig,
    ids: Arc<TicketIdAllocator>,
    rng: R,
}

impl RandomPlayerGenerator<ThreadRng> {
    pub fn new(config: LotteryConfig, ids: Arc<TicketIdAllocator>) -> Self {
        Self::with_rng(config, ids, rand::thread_rng())
    }
}

impl<R: Rng> RandomPlayerGenerator<R> {
    pub fn with_rng(config: LotteryConfig, ids: Arc<TicketIdAllocator>, rng: R) -> Self {
        Self { config, ids, rng }
    }
}

impl<R: Rng> PlayerGenerator for RandomPlayerGenerator<R> {
    fn generate_cpu_players(
        &mut self,
        human_player_count: u32,
    ) -> Result<Vec<Player>, PurchaseError> {
        let total_players = self.rng.gen_range(MIN_TOTAL_PLAYERS..=MAX_TOTAL_PLAYERS);
        let cpu_player_count = total_players - human_player_count;

        let mut cpu_players = Vec::with_capacity(cpu_player_count as usize);
        for i in 0..cpu_player_count {
            let mut player = Player::new(
                format!("CPU{}", i + 1),
                self.config.initial_balance,
                self.config.ticket_cost,
                self.config.min_ticket_count,
                self.config.max_ticket_count,
                Arc::clone(&self.ids),
            );

            let tickets_to_buy = self
                .rng
                .gen_range(self.config.min_ticket_count..=self.config.max_ticket_count);
            // An underfunded configuration can legitimately fail here;
            // the error propagates uncaught.
            player.purchase_tickets(tickets_to_buy)?;

            cpu_players.push(player);
        }

        Ok(cpu_players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PurchaseError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn generator_with_seed(
        config: LotteryConfig,
        seed: u64,
    ) -> RandomPlayerGenerator<ChaCha8Rng> {
        let ids = Arc::new(TicketIdAllocator::new());
        RandomPlayerGenerator::with_rng(config, ids, ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_cpu_count_fills_game_to_between_ten_and_fifteen_players() {
        for seed in 0..50 {
            let mut generator = generator_with_seed(LotteryConfig::default(), seed);
            let players = generator.generate_cpu_players(1).unwrap();
            assert!(
                (9..=14).contains(&players.len()),
                "seed {} produced {} CPU players",
                seed,
                players.len()
            );
        }
    }

    #[test]
    fn test_players_are_numbered_sequentially() {
        let mut generator = generator_with_seed(LotteryConfig::default(), 7);
        let players = generator.generate_cpu_players(1).unwrap();

        for (i, player) in players.iter().enumerate() {
            assert_eq!(player.id(), format!("CPU{}", i + 1));
        }
    }

    #[test]
    fn test_each_player_buys_within_bounds_and_pays_for_it() {
        let config = LotteryConfig::default();
        for seed in 0..20 {
            let mut generator = generator_with_seed(config.clone(), seed);
            let players = generator.generate_cpu_players(1).unwrap();

            for player in &players {
                let bought = player.tickets().len() as u32;
                assert!((config.min_ticket_count..=config.max_ticket_count).contains(&bought));
                assert_eq!(
                    player.balance(),
                    config.initial_balance - bought as f64 * config.ticket_cost
                );
            }
        }
    }

    #[test]
    fn test_underfunded_config_propagates_insufficient_balance() {
        let config = LotteryConfig {
            initial_balance: 1.0,
            ticket_cost: 5.0,
            ..Default::default()
        };
        let mut generator = generator_with_seed(config, 0);

        assert!(matches!(
            generator.generate_cpu_players(1).unwrap_err(),
            PurchaseError::InsufficientBalance { .. }
        ));
    }
}
