//! Terminal I/O collaborator.
//!
//! The game treats I/O as an external collaborator with two jobs: request a
//! validated value and display a line of text. [`GameIo`] is that seam;
//! [`Terminal`] is the real stdin/stdout implementation built on `dialoguer`
//! prompts. Validation rules live in pure `validate_*` helpers shared by the
//! prompt validators and the unit tests, so re-prompt behavior is testable
//! without a terminal.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use crate::engine::{POWER_MAX, POWER_MIN};

/// Fewest players in a round.
pub const MIN_PLAYERS: usize = 1;
/// Most players in a round.
pub const MAX_PLAYERS: usize = 6;

/// The I/O collaborator the game plays against.
///
/// Prompt methods re-prompt internally until they have a valid value, so the
/// engine only ever sees in-range input. Errors mean the input source ended.
pub trait GameIo {
    /// Ask how many players are in the round, in `[1, 6]`.
    fn prompt_player_count(&mut self) -> Result<usize>;

    /// Ask for the name of player `number` (1-based). Never empty.
    fn prompt_player_name(&mut self, number: usize) -> Result<String>;

    /// Ask for a shot power in `[20, 90]`.
    fn prompt_power(&mut self) -> Result<u32>;

    /// Display one line of narration.
    fn line(&mut self, text: &str);

    /// Display a section header.
    fn headline(&mut self, text: &str);
}

/// Check a raw player-count entry.
///
/// One message covers both non-numeric and out-of-range entries.
pub fn validate_player_count(raw: &str) -> Result<usize, &'static str> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|count| (MIN_PLAYERS..=MAX_PLAYERS).contains(count))
        .ok_or("Enter a number from 1 to 6.")
}

/// Check a raw name entry; returns the trimmed name.
pub fn validate_player_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        Err("Name cannot be empty.")
    } else {
        Ok(name.to_owned())
    }
}

/// Check a raw power entry.
///
/// Non-numeric entries (including negatives) and out-of-range powers get
/// distinct messages.
pub fn validate_power(raw: &str) -> Result<u32, &'static str> {
    let power = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| "Please enter a whole number.")?;
    if (POWER_MIN..=POWER_MAX).contains(&power) {
        Ok(power)
    } else {
        Err("Power must be between 20 and 90.")
    }
}

/// Interactive stdin/stdout implementation of [`GameIo`].
#[derive(Debug, Default)]
pub struct Terminal;

impl Terminal {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl GameIo for Terminal {
    fn prompt_player_count(&mut self) -> Result<usize> {
        let raw: String = Input::new()
            .with_prompt("How many friends are playing? (1-6)")
            .validate_with(|entry: &String| validate_player_count(entry).map(|_| ()))
            .interact_text()?;
        validate_player_count(&raw).map_err(anyhow::Error::msg)
    }

    fn prompt_player_name(&mut self, number: usize) -> Result<String> {
        let raw: String = Input::new()
            .with_prompt(format!("Name for Player {number}"))
            .validate_with(|entry: &String| validate_player_name(entry).map(|_| ()))
            .interact_text()?;
        validate_player_name(&raw).map_err(anyhow::Error::msg)
    }

    fn prompt_power(&mut self) -> Result<u32> {
        let raw: String = Input::new()
            .with_prompt("Choose shot power (20-90)")
            .validate_with(|entry: &String| validate_power(entry).map(|_| ()))
            .interact_text()?;
        validate_power(&raw).map_err(anyhow::Error::msg)
    }

    fn line(&mut self, text: &str) {
        println!("{text}");
    }

    fn headline(&mut self, text: &str) {
        println!("{}", text.bold().cyan());
    }
}

#[cfg(test)]
pub(crate) mod script {
    //! Scripted collaborator for exercising the play loop in tests.

    use std::collections::VecDeque;

    use anyhow::{bail, Result};

    use super::GameIo;

    /// Replays queued answers and records everything displayed.
    pub struct ScriptedIo {
        counts: VecDeque<usize>,
        names: VecDeque<String>,
        powers: VecDeque<u32>,
        transcript: Vec<String>,
    }

    impl ScriptedIo {
        pub fn new(powers: &[u32]) -> Self {
            Self {
                counts: VecDeque::new(),
                names: VecDeque::new(),
                powers: powers.iter().copied().collect(),
                transcript: Vec::new(),
            }
        }

        pub fn with_roster(count: usize, names: &[&str], powers: &[u32]) -> Self {
            let mut io = Self::new(powers);
            io.counts.push_back(count);
            io.names = names.iter().map(|n| n.to_string()).collect();
            io
        }

        pub fn transcript(&self) -> &[String] {
            &self.transcript
        }
    }

    impl GameIo for ScriptedIo {
        fn prompt_player_count(&mut self) -> Result<usize> {
            match self.counts.pop_front() {
                Some(count) => Ok(count),
                None => bail!("script ran out of player counts"),
            }
        }

        fn prompt_player_name(&mut self, _number: usize) -> Result<String> {
            match self.names.pop_front() {
                Some(name) => Ok(name),
                None => bail!("script ran out of names"),
            }
        }

        fn prompt_power(&mut self) -> Result<u32> {
            match self.powers.pop_front() {
                Some(power) => Ok(power),
                None => bail!("script ran out of powers"),
            }
        }

        fn line(&mut self, text: &str) {
            self.transcript.push(text.to_owned());
        }

        fn headline(&mut self, text: &str) {
            self.transcript.push(text.to_owned());
        }
    }
}
