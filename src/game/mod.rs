//! Core game logic and state management

pub mod exploration;
pub mod manor;
pub mod verdict;

use crate::data::*;
use crate::{GameError, Result};
use exploration::{Command, Explorer, MoveOutcome};
use manor::Case;
use verdict::{tally, Accusation, Verdict};

/// The main game state: one object owns everything a session touches,
/// and dropping it releases the map, the catalogue, and the index alike.
#[derive(Debug)]
pub struct Game {
    /// Current game phase
    phase: GamePhase,

    /// The case being investigated: manor map plus suspect index
    case: Case,

    /// Where the detective currently stands
    explorer: Explorer,

    /// Distinct clues gathered so far
    catalogue: ClueCatalogue,

    /// Clues in first-collection order, for the final tally
    collected: CollectedLog,

    /// Session statistics
    stats: GameStats,
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Exploring,
    Accusation,
    Closed(Verdict),
}

/// Session statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct GameStats {
    pub rooms_entered: u32,
    pub clues_collected: u32,
    pub duplicate_finds: u32,
    pub blocked_moves: u32,
    pub invalid_commands: u32,
}

/// What happened when a room's clue was submitted for collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectOutcome {
    /// New clue: catalogued and logged
    Collected,
    /// Exact text already catalogued earlier this session
    AlreadyCollected,
    /// The collection log is full; the event was dropped entirely
    LogFull,
}

/// Everything that happened on entering the current room
#[derive(Debug, Clone)]
pub struct RoomReport {
    pub room: String,
    pub clue: Option<String>,
    pub collection: Option<CollectOutcome>,
    pub is_leaf: bool,
}

/// Result of executing one navigation command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Blocked(Direction),
    ExplorationEnded,
    Invalid(String),
}

impl Game {
    /// Start a new session on the given case
    pub fn new(case: Case) -> Self {
        Self {
            phase: GamePhase::Exploring,
            case,
            explorer: Explorer::new(),
            catalogue: ClueCatalogue::new(),
            collected: CollectedLog::new(),
            stats: GameStats::default(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_exploring(&self) -> bool {
        self.phase == GamePhase::Exploring
    }

    pub fn case(&self) -> &Case {
        &self.case
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn catalogue(&self) -> &ClueCatalogue {
        &self.catalogue
    }

    pub fn collected(&self) -> &CollectedLog {
        &self.collected
    }

    pub fn current_room(&self) -> &Room {
        self.explorer.current(&self.case.manor)
    }

    /// Enter the room the detective is standing in: report it and, if it
    /// holds a clue, submit the clue for collection. Re-entering the same
    /// room resubmits its clue, which the catalogue recognizes and ignores.
    pub fn enter_current(&mut self) -> Result<RoomReport> {
        if !self.is_exploring() {
            return Err(GameError::ExplorationOver.into());
        }

        let room = self.explorer.current(&self.case.manor);
        let name = room.name().to_string();
        let clue = room.clue().map(str::to_owned);
        let is_leaf = room.is_leaf();

        self.stats.rooms_entered += 1;
        let collection = clue.as_deref().map(|c| self.collect_clue(c));

        Ok(RoomReport {
            room: name,
            clue,
            collection,
            is_leaf,
        })
    }

    /// Execute one navigation command
    pub fn execute(&mut self, command: Command) -> Result<StepOutcome> {
        if !self.is_exploring() {
            return Err(GameError::ExplorationOver.into());
        }

        let outcome = match command {
            Command::Quit => {
                self.phase = GamePhase::Accusation;
                StepOutcome::ExplorationEnded
            }
            Command::Go(direction) => {
                match self.explorer.go(&self.case.manor, direction) {
                    MoveOutcome::Moved => StepOutcome::Moved,
                    MoveOutcome::NoPath => {
                        self.stats.blocked_moves += 1;
                        StepOutcome::Blocked(direction)
                    }
                }
            }
            Command::Unknown(token) => {
                self.stats.invalid_commands += 1;
                StepOutcome::Invalid(token)
            }
        };

        Ok(outcome)
    }

    /// Move the game out of exploration without a quit command, e.g. when
    /// the input stream closes. Does nothing once exploration is over.
    pub fn end_exploration(&mut self) {
        if self.is_exploring() {
            self.phase = GamePhase::Accusation;
        }
    }

    /// Accuse a suspect and close the case
    pub fn accuse(&mut self, accused: &str) -> Result<Accusation> {
        if matches!(self.phase, GamePhase::Closed(_)) {
            return Err(GameError::CaseClosed.into());
        }

        let supporting = tally(&self.collected, &self.case.suspects, accused);
        let verdict = Verdict::from_supporting(supporting);
        self.phase = GamePhase::Closed(verdict);

        Ok(Accusation {
            accused: accused.to_string(),
            supporting,
            verdict,
        })
    }

    // A full log swallows the event before the catalogue sees it.
    pub(crate) fn collect_clue(&mut self, clue: &str) -> CollectOutcome {
        if self.collected.is_full() {
            return CollectOutcome::LogFull;
        }
        if self.catalogue.insert(clue) {
            self.collected.push(clue);
            self.stats.clues_collected += 1;
            CollectOutcome::Collected
        } else {
            self.stats.duplicate_finds += 1;
            CollectOutcome::AlreadyCollected
        }
    }
}
