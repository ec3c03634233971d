//! Line-oriented console frontend
//!
//! Reads one command per line from its input collaborator and writes
//! human-readable notices to its output collaborator. Generic over both
//! ends, so tests can play a whole session against in-memory buffers.

use crate::data::Severity;
use crate::game::exploration::Command;
use crate::game::manor::Case;
use crate::game::verdict::{Accusation, Verdict};
use crate::game::{CollectOutcome, Game, GameStats, RoomReport, StepOutcome};
use crate::Result;
use crossterm::style::{Color, Stylize};
use std::io::{BufRead, Write};

/// Title banner
pub const BANNER: &str = r#"
╔══════════════════════════════════════════════╗
║               DETECTIVE  QUEST               ║
║    A manor, seven clues, three suspects.     ║
╚══════════════════════════════════════════════╝
"#;

/// Navigation help shown before exploration begins
pub const COMMAND_HELP: &str = "Navigation: 'e' = left, 'd' = right, 's' = stop exploring";

/// Get color for severity level
pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Grey,
        Severity::Success => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Alert => Color::Red,
    }
}

/// The game's terminal surface
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Plain console; color is opt-in so piped output stays clean
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            color: false,
        }
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Play a full session: welcome, exploration, clue review, accusation.
    /// Returns the closed accusation so callers can inspect the outcome.
    pub fn run(&mut self, game: &mut Game) -> Result<Accusation> {
        self.welcome(game.case())?;
        self.read_line()?;

        while game.is_exploring() {
            let report = game.enter_current()?;
            self.room_report(&report)?;
            self.prompt(report.is_leaf)?;

            match self.read_line()? {
                // Closed input ends the tour quietly
                None => game.end_exploration(),
                Some(line) => match game.execute(Command::parse(&line))? {
                    StepOutcome::Moved => {}
                    StepOutcome::Blocked(direction) => self.notice(
                        Severity::Warning,
                        &format!("There is no passage to the {direction}."),
                    )?,
                    StepOutcome::ExplorationEnded => {
                        self.notice(Severity::Info, "You leave the exploration behind.")?
                    }
                    StepOutcome::Invalid(_) => self
                        .notice(Severity::Warning, "Invalid command. Use 'e', 'd' or 's'.")?,
                },
            }
        }

        self.clue_listing(game)?;

        self.prompt_text("\nWho do you accuse? Enter the suspect's name: ")?;
        let accused = self.read_line()?.unwrap_or_default();
        let accusation = game.accuse(&accused)?;

        self.verdict_report(&accusation)?;
        self.debrief(game.stats())?;

        Ok(accusation)
    }

    fn welcome(&mut self, case: &Case) -> Result<()> {
        writeln!(self.output, "{}", BANNER.trim_end())?;
        self.notice(Severity::Info, &case.briefing)?;
        self.notice(Severity::Info, COMMAND_HELP)?;
        self.notice(Severity::Info, "Press Enter to step inside...")?;
        self.output.flush()?;
        Ok(())
    }

    fn room_report(&mut self, report: &RoomReport) -> Result<()> {
        writeln!(self.output)?;
        self.notice(Severity::Info, &format!("You are in: {}", report.room))?;

        match &report.clue {
            Some(clue) => {
                self.notice(Severity::Info, &format!("There is a clue here: \"{clue}\""))?;
                match report.collection {
                    Some(CollectOutcome::Collected) => {
                        self.notice(Severity::Success, &format!("Clue collected: \"{clue}\""))?
                    }
                    Some(CollectOutcome::AlreadyCollected) => self.notice(
                        Severity::Warning,
                        &format!("You already collected this clue: \"{clue}\""),
                    )?,
                    // A full log swallows the event without a word
                    Some(CollectOutcome::LogFull) | None => {}
                }
            }
            None => self.notice(Severity::Info, "Nothing of interest in this room.")?,
        }

        Ok(())
    }

    fn prompt(&mut self, is_leaf: bool) -> Result<()> {
        if is_leaf {
            self.notice(
                Severity::Info,
                "This room is a dead end. Enter 's' to stop exploring.",
            )?;
            self.output.flush()?;
        } else {
            self.prompt_text("Choose: (e) left | (d) right | (s) stop: ")?;
        }
        Ok(())
    }

    fn clue_listing(&mut self, game: &Game) -> Result<()> {
        writeln!(self.output)?;
        self.notice(Severity::Info, "Clues collected (alphabetical):")?;
        if game.catalogue().is_empty() {
            self.notice(Severity::Warning, "No clues were collected.")?;
        } else {
            for clue in game.catalogue() {
                self.notice(Severity::Success, &format!("- {clue}"))?;
            }
        }
        Ok(())
    }

    fn verdict_report(&mut self, accusation: &Accusation) -> Result<()> {
        writeln!(self.output)?;
        self.notice(
            Severity::Info,
            &format!(
                "Clues pointing to {}: {}",
                accusation.accused, accusation.supporting
            ),
        )?;
        match accusation.verdict {
            Verdict::Accepted => self.notice(
                Severity::Success,
                "Accusation accepted: the evidence is conclusive. Congratulations, detective!",
            ),
            Verdict::Rejected => self.notice(
                Severity::Alert,
                "Accusation rejected: there is not enough evidence.",
            ),
        }
    }

    fn debrief(&mut self, stats: &GameStats) -> Result<()> {
        writeln!(self.output)?;
        self.notice(
            Severity::Info,
            &format!(
                "Case file: {} rooms entered, {} clues collected, {} duplicate finds, {} blocked passages, {} invalid commands.",
                stats.rooms_entered,
                stats.clues_collected,
                stats.duplicate_finds,
                stats.blocked_moves,
                stats.invalid_commands
            ),
        )
    }

    fn notice(&mut self, severity: Severity, text: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", text.with(severity_color(severity)))?;
        } else {
            writeln!(self.output, "{text}")?;
        }
        Ok(())
    }

    fn prompt_text(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// One line from the input collaborator, without its trailing newline.
    /// `None` means the stream is closed.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn read_line_strips_newline_variants() {
        let mut c = console("e\r\nd\nlast");
        assert_eq!(c.read_line().unwrap(), Some("e".to_string()));
        assert_eq!(c.read_line().unwrap(), Some("d".to_string()));
        assert_eq!(c.read_line().unwrap(), Some("last".to_string()));
        assert_eq!(c.read_line().unwrap(), None);
    }

    #[test]
    fn read_line_keeps_interior_whitespace() {
        let mut c = console(" e \n");
        assert_eq!(c.read_line().unwrap(), Some(" e ".to_string()));
    }
}
