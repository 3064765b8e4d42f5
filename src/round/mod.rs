//! Round orchestration.
//!
//! A [`Round`] owns the roster and the course, then sequences play: every
//! player plays every hole in roster order, with a leaderboard after each
//! hole and a final one when the back nine is done. Roster order is fixed at
//! entry; standings never change who tees off first.

use anyhow::Result;
use log::info;

use crate::console::{GameIo, MAX_PLAYERS, MIN_PLAYERS};
use crate::core::{Course, GameRng, Player};
use crate::engine::play_hole;
use crate::scoring;

/// One nine-hole round for a roster of players.
pub struct Round {
    players: Vec<Player>,
    course: Course,
}

impl Round {
    /// Create a round over an existing roster and course.
    ///
    /// # Panics
    ///
    /// Panics if the roster is empty or larger than [`MAX_PLAYERS`].
    #[must_use]
    pub fn new(players: Vec<Player>, course: Course) -> Self {
        assert!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()),
            "Roster must have 1 to 6 players"
        );
        Self { players, course }
    }

    /// Build a round interactively: prompt for the roster, then generate a
    /// fresh course from the given randomness source.
    pub fn from_prompts(io: &mut impl GameIo, rng: &mut GameRng) -> Result<Self> {
        let count = io.prompt_player_count()?;
        let mut players = Vec::with_capacity(count);
        for number in 1..=count {
            players.push(Player::new(io.prompt_player_name(number)?));
        }

        info!("starting a round with {} players, seed {}", count, rng.seed());
        Ok(Self::new(players, Course::generate(rng)))
    }

    /// Play the full round and return the final scorecards.
    ///
    /// Every player completes every hole; the leaderboard is shown after
    /// each hole and again at the end.
    pub fn run(mut self, io: &mut impl GameIo, rng: &mut GameRng) -> Result<Vec<Player>> {
        for hole in self.course.holes() {
            for index in 0..self.players.len() {
                let strokes = play_hole(&self.players[index], hole, io, rng)?;
                self.players[index].record_hole(strokes);
            }
            print_leaderboard(&self.players, io);
        }

        io.line("");
        io.line("Round complete! Final results:");
        print_leaderboard(&self.players, io);
        Ok(self.players)
    }
}

fn print_leaderboard(players: &[Player], io: &mut impl GameIo) {
    io.line("");
    io.headline("=== Leaderboard ===");
    for standing in scoring::standings(players) {
        io.line(&standing.row());
    }
}
