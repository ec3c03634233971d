//! Verdict evaluation
//!
//! Counts how many collected clues implicate the accused suspect and
//! turns the count into an accept/reject verdict.

use crate::data::{CollectedLog, SuspectIndex};

/// Clues that must point at the accused for the accusation to stand.
/// Fixed policy, independent of how many clues the case holds.
pub const EVIDENCE_THRESHOLD: u32 = 2;

/// Outcome of an accusation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected,
}

impl Verdict {
    pub fn from_supporting(count: u32) -> Self {
        if count >= EVIDENCE_THRESHOLD {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::Rejected => write!(f, "rejected"),
        }
    }
}

/// A closed accusation: who was accused, with how much support
#[derive(Debug, Clone)]
pub struct Accusation {
    pub accused: String,
    pub supporting: u32,
    pub verdict: Verdict,
}

/// Count the collected clues whose associated suspect is exactly
/// `accused`. Clues the index does not know contribute nothing.
pub fn tally(collected: &CollectedLog, suspects: &SuspectIndex, accused: &str) -> u32 {
    collected
        .iter()
        .filter(|clue| suspects.lookup(clue) == Some(accused))
        .count() as u32
}
