//! Lotto - Console Lottery Simulation Library
//!
//! This module exposes the game engine for testing and external use:
//! configuration, the player/ticket model, CPU player generation, prize
//! calculation with the three-tier draw, and the game orchestrator.

pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod player;
pub mod player_generation;
pub mod prize_logic;
pub mod ticket;
