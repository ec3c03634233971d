//! Detective Quest
//!
//! Explore the manor, gather the clues, accuse a suspect.

use crossterm::tty::IsTty;
use detective_quest::console::Console;
use detective_quest::game::manor::create_manor_case;
use detective_quest::game::Game;
use std::io;

fn main() -> detective_quest::Result<()> {
    let color = io::stdout().is_tty();

    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut game = Game::new(create_manor_case());
    let mut console = Console::new(stdin.lock(), stdout.lock()).with_color(color);
    console.run(&mut game)?;
    drop(console);

    println!();
    println!("╔════════════════════════════════════════╗");
    println!("║  Thanks for playing Detective Quest!   ║");
    println!("║  Keep your eyes open, detective.       ║");
    println!("╚════════════════════════════════════════╝");

    Ok(())
}
