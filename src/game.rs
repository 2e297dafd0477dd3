//! Game orchestration: wires the human player, the CPU population, the
//! draw, and the final results projection together.

use crate::config::LotteryConfig;
use crate::error::GameError;
use crate::player::Player;
use crate::player_generation::PlayerGenerator;
use crate::prize_logic::{DrawResults, PrizeCalculator};
use crate::ticket::{Ticket, TicketIdAllocator};
use std::sync::Arc;

/// Identifier given to the human player.
pub const HUMAN_PLAYER_ID: &str = "You";

/// Human-readable projection of one draw: winners grouped by player, flat
/// per-winner amounts, and the reconciled house profit.
#[derive(Debug, Clone, PartialEq)]
pub struct GameResults {
    pub grand_prize_winner: String,
    pub grand_prize_amount: f64,
    /// (player id, winning ticket count) in first-encountered order.
    pub second_tier_winners: Vec<(String, u32)>,
    pub second_tier_prize_per_winner: f64,
    pub third_tier_winners: Vec<(String, u32)>,
    pub third_tier_prize_per_winner: f64,
    /// Exact residual of revenue after all payouts; absorbs every payout
    /// rounding remainder so the totals always reconcile.
    pub house_profit: f64,
}

/// One round of the lottery.
///
/// Two states: uninitialized at construction, initialized once
/// [`initialize`](Self::initialize) succeeds. The transition is one-way.
pub struct LotteryGame<G: PlayerGenerator, C: PrizeCalculator> {
    generator: G,
    calculator: C,
    config: LotteryConfig,
    ids: Arc<TicketIdAllocator>,
    human_player: Option<Player>,
    cpu_players: Vec<Player>,
}

impl<G: PlayerGenerator, C: PrizeCalculator> LotteryGame<G, C> {
    pub fn new(
        generator: G,
        calculator: C,
        config: LotteryConfig,
        ids: Arc<TicketIdAllocator>,
    ) -> Self {
        Self {
            generator,
            calculator,
            config,
            ids,
            human_player: None,
            cpu_players: Vec::new(),
        }
    }

    pub fn human_player(&self) -> Option<&Player> {
        self.human_player.as_ref()
    }

    pub fn cpu_players(&self) -> &[Player] {
        &self.cpu_players
    }

    /// Human plus CPU players; zero before initialization.
    pub fn total_player_count(&self) -> usize {
        self.human_player.iter().count() + self.cpu_players.len()
    }

    /// Creates the human player, purchases their tickets, and generates
    /// the CPU population.
    ///
    /// A failed human purchase leaves the game uninitialized so the
    /// caller can retry with a corrected count.
    pub fn initialize(&mut self, human_ticket_count: u32) -> Result<(), GameError> {
        if self.human_player.is_some() {
            return Err(GameError::AlreadyInitialized);
        }

        let mut human = Player::new(
            HUMAN_PLAYER_ID,
            self.config.initial_balance,
            self.config.ticket_cost,
            self.config.min_ticket_count,
            self.config.max_ticket_count,
            Arc::clone(&self.ids),
        );
        human.purchase_tickets(human_ticket_count)?;

        self.cpu_players = self.generator.generate_cpu_players(1)?;
        self.human_player = Some(human);
        Ok(())
    }

    /// All sold tickets: the human player's first, then each CPU player's,
    /// in player order.
    pub fn all_tickets(&self) -> Vec<Ticket> {
        let mut all_tickets = Vec::new();
        if let Some(human) = &self.human_player {
            all_tickets.extend_from_slice(human.tickets());
        }
        for cpu_player in &self.cpu_players {
            all_tickets.extend_from_slice(cpu_player.tickets());
        }
        all_tickets
    }

    /// Runs the draw over every sold ticket.
    pub fn draw_winners(&mut self) -> Result<DrawResults, GameError> {
        if self.human_player.is_none() {
            return Err(GameError::NotInitialized);
        }
        let all_tickets = self.all_tickets();
        Ok(self.calculator.draw_winners(&all_tickets))
    }

    /// Projects raw draw results into grouped winners and final amounts.
    ///
    /// Per-winner payouts use the ACTUAL winner counts from the draw, and
    /// house profit is recomputed as revenue minus everything distributed,
    /// so `grand + tier2 + tier3 + profit == revenue` holds exactly.
    pub fn game_results(&self, draw_results: &DrawResults) -> Result<GameResults, GameError> {
        if self.human_player.is_none() {
            return Err(GameError::NotInitialized);
        }
        let all_tickets = self.all_tickets();

        let grand_prize_amount = self.calculator.grand_prize(&all_tickets);
        let second_tier_prize_per_winner = self
            .calculator
            .second_tier_prize_per_winner(&all_tickets, draw_results.second_tier_winners.len());
        let third_tier_prize_per_winner = self
            .calculator
            .third_tier_prize_per_winner(&all_tickets, draw_results.third_tier_winners.len());

        let distributed_prizes = grand_prize_amount
            + second_tier_prize_per_winner * draw_results.second_tier_winners.len() as f64
            + third_tier_prize_per_winner * draw_results.third_tier_winners.len() as f64;
        let total_revenue = self.calculator.total_revenue(&all_tickets);
        let house_profit = total_revenue - distributed_prizes;

        let grand_prize_winner = draw_results
            .grand_prize_winners
            .first()
            .map(|ticket| ticket.owner.clone())
            .unwrap_or_default();

        Ok(GameResults {
            grand_prize_winner,
            grand_prize_amount,
            second_tier_winners: group_winners_by_player(&draw_results.second_tier_winners),
            second_tier_prize_per_winner,
            third_tier_winners: group_winners_by_player(&draw_results.third_tier_winners),
            third_tier_prize_per_winner,
            house_profit,
        })
    }
}

/// Collapses a tier's flat winning tickets into per-player counts,
/// keeping first-encountered player order.
fn group_winners_by_player(tickets: &[Ticket]) -> Vec<(String, u32)> {
    let mut grouped: Vec<(String, u32)> = Vec::new();
    for ticket in tickets {
        match grouped.iter_mut().find(|(id, _)| *id == ticket.owner) {
            Some((_, count)) => *count += 1,
            None => grouped.push((ticket.owner.clone(), 1)),
        }
    }
    grouped
}
