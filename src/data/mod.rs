//! Data structures for the game world
//!
//! Defines the room tree, the clue catalogue, and the suspect index.

pub mod clues;
pub mod rooms;
pub mod suspects;

pub use clues::*;
pub use rooms::*;
pub use suspects::*;

/// Direction of a passage out of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// Severity levels for console notices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Alert,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Success => write!(f, "SUCCESS"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Alert => write!(f, "ALERT"),
        }
    }
}
