//! Prize pools, the winner draw, and per-winner payouts.
//!
//! All dollar figures derive from total revenue and the configured pool
//! percentages. Winner counts are a separate axis: always one grand
//! winner, 10% of tickets second tier, 20% third tier, regardless of how
//! the pools are configured.

use crate::config::LotteryConfig;
use crate::ticket::Ticket;
use rand::rngs::ThreadRng;
use rand::Rng;

/// Share of all tickets that win a second tier prize.
pub const SECOND_TIER_WINNER_SHARE: f64 = 0.10;

/// Share of all tickets that win a third tier prize.
pub const THIRD_TIER_WINNER_SHARE: f64 = 0.20;

/// Winning tickets of one draw, grouped by tier. The three lists are
/// disjoint: a ticket wins at most once.
#[derive(Debug, Clone, Default)]
pub struct DrawResults {
    pub grand_prize_winners: Vec<Ticket>,
    pub second_tier_winners: Vec<Ticket>,
    pub third_tier_winners: Vec<Ticket>,
}

/// Capability contract for revenue/prize arithmetic and the winner draw.
pub trait PrizeCalculator {
    /// Total revenue: ticket count times ticket cost, exact.
    fn total_revenue(&self, tickets: &[Ticket]) -> f64;

    /// Grand prize: configured fraction of revenue, exact (no rounding).
    fn grand_prize(&self, tickets: &[Ticket]) -> f64;

    /// Dollar pool shared by all second tier winners.
    fn second_tier_pool(&self, tickets: &[Ticket]) -> f64;

    /// Dollar pool shared by all third tier winners.
    fn third_tier_pool(&self, tickets: &[Ticket]) -> f64;

    /// Raw house profit: revenue minus the three pools. Superseded by the
    /// orchestrator's reconciled figure, which accounts for payout
    /// rounding.
    fn house_profit(&self, tickets: &[Ticket]) -> f64;

    /// Runs the three-tier draw over all sold tickets.
    fn draw_winners(&mut self, tickets: &[Ticket]) -> DrawResults;

    /// Per-winner second tier payout: floor(pool / winners), 0 for no
    /// winners. The discarded remainder ends up in house profit.
    fn second_tier_prize_per_winner(&self, tickets: &[Ticket], winner_count: usize) -> f64;

    /// Per-winner third tier payout, same rounding rule.
    fn third_tier_prize_per_winner(&self, tickets: &[Ticket], winner_count: usize) -> f64;
}

/// Standard calculator with its own uniform random source.
pub struct RandomPrizeCalculator<R: Rng> {
    config: LotteryConfig,
    rng: R,
}

impl RandomPrizeCalculator<ThreadRng> {
    pub fn new(config: LotteryConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> RandomPrizeCalculator<R> {
    pub fn with_rng(config: LotteryConfig, rng: R) -> Self {
        Self { config, rng }
    }
}

/// Removes and returns one uniformly chosen ticket, or None once the pool
/// is empty. Removal is what guarantees no ticket wins twice.
fn draw_one<R: Rng>(pool: &mut Vec<Ticket>, rng: &mut R) -> Option<Ticket> {
    if pool.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..pool.len());
    Some(pool.swap_remove(index))
}

fn per_winner(pool: f64, winner_count: usize) -> f64 {
    if winner_count == 0 {
        return 0.0;
    }
    (pool / winner_count as f64).floor()
}

impl<R: Rng> PrizeCalculator for RandomPrizeCalculator<R> {
    fn total_revenue(&self, tickets: &[Ticket]) -> f64 {
        tickets.len() as f64 * self.config.ticket_cost
    }

    fn grand_prize(&self, tickets: &[Ticket]) -> f64 {
        self.total_revenue(tickets) * self.config.grand_prize_percentage
    }

    fn second_tier_pool(&self, tickets: &[Ticket]) -> f64 {
        self.total_revenue(tickets) * self.config.second_tier_percentage
    }

    fn third_tier_pool(&self, tickets: &[Ticket]) -> f64 {
        self.total_revenue(tickets) * self.config.third_tier_percentage
    }

    fn house_profit(&self, tickets: &[Ticket]) -> f64 {
        let total_prizes = self.grand_prize(tickets)
            + self.second_tier_pool(tickets)
            + self.third_tier_pool(tickets);
        self.total_revenue(tickets) - total_prizes
    }

    fn draw_winners(&mut self, tickets: &[Ticket]) -> DrawResults {
        let mut results = DrawResults::default();
        let mut pool: Vec<Ticket> = tickets.to_vec();

        // One grand prize winner.
        if let Some(ticket) = draw_one(&mut pool, &mut self.rng) {
            results.grand_prize_winners.push(ticket);
        }

        // Tier quotas come from the ORIGINAL ticket count, not the
        // shrinking pool. If the pool runs dry a tier under-fills.
        let second_tier_count = (tickets.len() as f64 * SECOND_TIER_WINNER_SHARE).floor() as usize;
        for _ in 0..second_tier_count {
            match draw_one(&mut pool, &mut self.rng) {
                Some(ticket) => results.second_tier_winners.push(ticket),
                None => break,
            }
        }

        let third_tier_count = (tickets.len() as f64 * THIRD_TIER_WINNER_SHARE).floor() as usize;
        for _ in 0..third_tier_count {
            match draw_one(&mut pool, &mut self.rng) {
                Some(ticket) => results.third_tier_winners.push(ticket),
                None => break,
            }
        }

        results
    }

    fn second_tier_prize_per_winner(&self, tickets: &[Ticket], winner_count: usize) -> f64 {
        per_winner(self.second_tier_pool(tickets), winner_count)
    }

    fn third_tier_prize_per_winner(&self, tickets: &[Ticket], winner_count: usize) -> f64 {
        per_winner(self.third_tier_pool(tickets), winner_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn tickets(count: u64) -> Vec<Ticket> {
        (1..=count)
            .map(|id| Ticket {
                id,
                owner: format!("P{}", id),
            })
            .collect()
    }

    fn calculator(seed: u64) -> RandomPrizeCalculator<ChaCha8Rng> {
        RandomPrizeCalculator::with_rng(
            LotteryConfig::default(),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    #[test]
    fn test_revenue_is_count_times_cost() {
        let calc = calculator(0);
        assert_eq!(calc.total_revenue(&tickets(50)), 50.0);
        assert_eq!(calc.total_revenue(&[]), 0.0);

        let pricier = RandomPrizeCalculator::with_rng(
            LotteryConfig {
                ticket_cost: 2.5,
                ..Default::default()
            },
            ChaCha8Rng::seed_from_u64(0),
        );
        assert_eq!(pricier.total_revenue(&tickets(4)), 10.0);
    }

    #[test]
    fn test_pool_amounts_follow_configured_percentages() {
        let calc = calculator(0);
        let all = tickets(50);
        assert_eq!(calc.grand_prize(&all), 25.0);
        assert_eq!(calc.second_tier_pool(&all), 15.0);
        assert_eq!(calc.third_tier_pool(&all), 5.0);
        assert_eq!(calc.house_profit(&all), 5.0);
    }

    #[test]
    fn test_draw_counts_follow_winner_shares_not_pool_percentages() {
        let mut calc = calculator(42);
        let all = tickets(50);
        let results = calc.draw_winners(&all);

        assert_eq!(results.grand_prize_winners.len(), 1);
        assert_eq!(results.second_tier_winners.len(), 5);
        assert_eq!(results.third_tier_winners.len(), 10);
    }

    #[test]
    fn test_winner_counts_floor_fractional_quotas() {
        let mut calc = calculator(1);
        // 37 tickets: floor(3.7) = 3 second tier, floor(7.4) = 7 third tier.
        let results = calc.draw_winners(&tickets(37));
        assert_eq!(results.second_tier_winners.len(), 3);
        assert_eq!(results.third_tier_winners.len(), 7);
    }

    #[test]
    fn test_no_ticket_wins_twice() {
        for seed in 0..25 {
            let mut calc = calculator(seed);
            let results = calc.draw_winners(&tickets(50));

            let mut seen = HashSet::new();
            for ticket in results
                .grand_prize_winners
                .iter()
                .chain(&results.second_tier_winners)
                .chain(&results.third_tier_winners)
            {
                assert!(seen.insert(ticket.id), "ticket {} drawn twice", ticket.id);
            }
            assert_eq!(seen.len(), 16);
        }
    }

    #[test]
    fn test_single_ticket_draw_only_fills_the_grand_tier() {
        let mut calc = calculator(3);
        let results = calc.draw_winners(&tickets(1));
        assert_eq!(results.grand_prize_winners.len(), 1);
        assert!(results.second_tier_winners.is_empty());
        assert!(results.third_tier_winners.is_empty());
    }

    #[test]
    fn test_empty_ticket_list_draws_nothing() {
        let mut calc = calculator(3);
        let results = calc.draw_winners(&[]);
        assert!(results.grand_prize_winners.is_empty());
        assert!(results.second_tier_winners.is_empty());
        assert!(results.third_tier_winners.is_empty());
    }

    #[test]
    fn test_per_winner_prize_floors_the_split() {
        let calc = calculator(0);
        let all = tickets(50);
        // Second tier pool is 15.0; 4 winners -> floor(3.75) = 3.
        assert_eq!(calc.second_tier_prize_per_winner(&all, 4), 3.0);
        assert_eq!(calc.second_tier_prize_per_winner(&all, 5), 3.0);
        // Third tier pool is 5.0; 10 winners -> floor(0.5) = 0.
        assert_eq!(calc.third_tier_prize_per_winner(&all, 10), 0.0);
    }

    #[test]
    fn test_per_winner_prize_is_zero_for_zero_winners() {
        let calc = calculator(0);
        let all = tickets(50);
        assert_eq!(calc.second_tier_prize_per_winner(&all, 0), 0.0);
        assert_eq!(calc.third_tier_prize_per_winner(&all, 0), 0.0);
    }

    #[test]
    fn test_zero_percent_pool_still_selects_winners() {
        let config = LotteryConfig {
            second_tier_percentage: 0.0,
            ..Default::default()
        };
        let mut calc =
            RandomPrizeCalculator::with_rng(config, ChaCha8Rng::seed_from_u64(9));
        let all = tickets(50);

        let results = calc.draw_winners(&all);
        assert_eq!(results.second_tier_winners.len(), 5);
        assert_eq!(calc.second_tier_prize_per_winner(&all, 5), 0.0);
    }
}
