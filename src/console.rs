//! Console input/output for the lottery game.
//!
//! The engine itself never prints; everything user-facing goes through the
//! [`Console`] capability so tests can script input and capture output.

use crate::config::LotteryConfig;
use crate::game::GameResults;
use crate::player::Player;
use std::io::{self, BufRead, Write};

/// Minimal console capability: line output and line input.
pub trait Console {
    fn write_line(&mut self, message: &str);
    fn write(&mut self, message: &str);
    /// Returns the next input line without its trailing newline, or None
    /// on end of input.
    fn read_line(&mut self) -> Option<String>;
}

/// Console backed by stdin/stdout.
pub struct StdConsole;

impl Console for StdConsole {
    fn write_line(&mut self, message: &str) {
        println!("{}", message);
    }

    fn write(&mut self, message: &str) {
        print!("{}", message);
        let _ = io::stdout().flush();
    }

    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

/// Formats a currency amount, dropping a trailing ".00".
fn format_amount(amount: f64) -> String {
    if amount == amount.trunc() {
        format!("${}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn display_welcome(console: &mut impl Console, config: &LotteryConfig) {
    console.write_line("Welcome to the Lottery!");
    console.write_line(&format!(
        "You start with a balance of {}.",
        format_amount(config.initial_balance)
    ));
    console.write_line(&format!(
        "Each ticket costs {}.",
        format_amount(config.ticket_cost)
    ));
    console.write_line("");
}

/// Prompts until the user enters a valid ticket count within the
/// configured bounds. Returns None when input ends (EOF).
pub fn prompt_ticket_count(console: &mut impl Console, config: &LotteryConfig) -> Option<u32> {
    loop {
        console.write(&format!(
            "How many tickets would you like to buy? ({}-{}): ",
            config.min_ticket_count, config.max_ticket_count
        ));
        let input = console.read_line()?;

        match input.trim().parse::<u32>() {
            Ok(count)
                if (config.min_ticket_count..=config.max_ticket_count).contains(&count) =>
            {
                return Some(count);
            }
            Ok(_) => {
                console.write_line(&format!(
                    "Invalid input. Please enter a number between {} and {}.",
                    config.min_ticket_count, config.max_ticket_count
                ));
            }
            Err(_) => {
                console.write_line("Invalid input. Please enter a valid number.");
            }
        }
    }
}

pub fn display_cpu_players(console: &mut impl Console, cpu_players: &[Player]) {
    console.write_line("");
    console.write_line("CPU Players:");
    for player in cpu_players {
        console.write_line(&format!(
            "{}: {} ticket(s) purchased",
            player.id(),
            player.tickets().len()
        ));
    }
    console.write_line("");
}

pub fn display_results(console: &mut impl Console, results: &GameResults) {
    console.write_line("=== DRAW RESULTS ===");
    console.write_line("");

    console.write_line(&format!(
        "Grand Prize Winner: {} - {}",
        results.grand_prize_winner,
        format_amount(results.grand_prize_amount)
    ));
    console.write_line("");

    console.write_line("Second Tier Winners:");
    for (player_id, count) in &results.second_tier_winners {
        display_tier_winner(console, player_id, *count, results.second_tier_prize_per_winner);
    }
    console.write_line("");

    console.write_line("Third Tier Winners:");
    for (player_id, count) in &results.third_tier_winners {
        display_tier_winner(console, player_id, *count, results.third_tier_prize_per_winner);
    }
    console.write_line("");

    console.write_line(&format!(
        "House Profit: {}",
        format_amount(results.house_profit)
    ));
}

fn display_tier_winner(console: &mut impl Console, player_id: &str, count: u32, per_winner: f64) {
    let ticket_text = if count == 1 { "ticket" } else { "tickets" };
    console.write_line(&format!(
        "  {} ({} {}): {}",
        player_id,
        count,
        ticket_text,
        format_amount(per_winner * count as f64)
    ));
}
