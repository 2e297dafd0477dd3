//! Console lottery game.
//!
//! Loads settings from `lottery.json` in the working directory (defaults
//! apply when absent), asks the player how many tickets to buy, fills the
//! game with CPU players, runs the draw, and prints the results.

use lotto::config::LotteryConfig;
use lotto::console::{
    display_cpu_players, display_results, display_welcome, prompt_ticket_count, Console,
    StdConsole,
};
use lotto::error::GameError;
use lotto::game::LotteryGame;
use lotto::player_generation::RandomPlayerGenerator;
use lotto::prize_logic::RandomPrizeCalculator;
use lotto::ticket::TicketIdAllocator;
use std::error::Error;
use std::path::Path;
use std::sync::Arc;

const SETTINGS_FILE: &str = "lottery.json";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = LotteryConfig::load(Path::new(SETTINGS_FILE))?;
    config.validate()?;

    let mut console = StdConsole;
    display_welcome(&mut console, &config);

    let ids = Arc::new(TicketIdAllocator::new());
    let generator = RandomPlayerGenerator::new(config.clone(), Arc::clone(&ids));
    let calculator = RandomPrizeCalculator::new(config.clone());
    let mut game = LotteryGame::new(generator, calculator, config.clone(), ids);

    loop {
        let Some(ticket_count) = prompt_ticket_count(&mut console, &config) else {
            // Input ended before a valid count; nothing to play.
            return Ok(());
        };
        match game.initialize(ticket_count) {
            Ok(()) => break,
            // A failed purchase leaves the game untouched; ask again.
            Err(GameError::Purchase(e)) => console.write_line(&e.to_string()),
            Err(e) => return Err(e.into()),
        }
    }
    display_cpu_players(&mut console, game.cpu_players());

    let draw_results = game.draw_winners()?;
    let game_results = game.game_results(&draw_results)?;
    display_results(&mut console, &game_results);

    Ok(())
}
