//! Interactive entry point: one nine-hole round on stdin/stdout.

use anyhow::Result;
use colored::Colorize;

use fairway::{GameRng, Round, Terminal};

fn main() -> Result<()> {
    env_logger::init();

    println!(
        "{}",
        "🏌️ Welcome to Golf With Your Friends (Terminal Edition)!"
            .bold()
            .green()
    );
    println!("Play 9 holes, avoid hazards, and chase the best score versus par.");

    let mut io = Terminal::new();
    let mut rng = GameRng::from_entropy();

    let round = Round::from_prompts(&mut io, &mut rng)?;
    round.run(&mut io, &mut rng)?;

    Ok(())
}
