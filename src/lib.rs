//! Detective Quest
//!
//! A text adventure where you explore an old manor room by room, gather
//! the clues left behind, and close the case by accusing a suspect.
//!
//! # Game Mechanics
//!
//! - **Exploration**: Walk the manor's rooms; every clue you stumble on is
//!   picked up automatically, and duplicates are recognized and ignored
//! - **Deduction**: Each clue implicates exactly one suspect
//! - **Accusation**: Name a suspect at the end; the case only closes in
//!   your favor if enough collected clues point at them
//!
//! # Architecture
//!
//! - `game` - Core game logic: exploration engine, verdict evaluation, the fixed case
//! - `console` - Line-oriented terminal frontend
//! - `data` - Data structures for rooms, clues, and suspects

pub mod console;
pub mod data;
pub mod game;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Exploration is already over")]
    ExplorationOver,

    #[error("The case is already closed")]
    CaseClosed,
}
