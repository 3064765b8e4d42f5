//! # fairway
//!
//! A turn-based terminal mini-golf party game: nine holes, stochastic
//! shots, hazards, and a leaderboard ranked against par.
//!
//! ## Design Principles
//!
//! 1. **Injected randomness**: All stochastic events flow through a
//!    [`core::GameRng`] owned by the caller. Seeded rounds replay exactly;
//!    nothing touches global RNG state.
//!
//! 2. **I/O as a collaborator**: The game logic talks to a
//!    [`console::GameIo`] trait with two jobs — request a validated value
//!    and display a line — so whole rounds run against a scripted double
//!    in tests.
//!
//! 3. **Append-only scorecards**: A [`core::Player`] only ever gains one
//!    stroke entry per completed hole; past holes are never rewritten.
//!
//! ## Modules
//!
//! - `core`: RNG, players, the course data model and generation
//! - `engine`: shot resolution and the per-hole play loop
//! - `scoring`: leaderboard ranking and rendering
//! - `round`: the round orchestrator
//! - `console`: terminal prompts, narration, and input validation

pub mod console;
pub mod core;
pub mod engine;
pub mod round;
pub mod scoring;

// Re-export commonly used types
pub use crate::console::{GameIo, Terminal, MAX_PLAYERS, MIN_PLAYERS};
pub use crate::core::{par_through, Course, GameRng, Hole, Player, HOLE_COUNT, PAR_PATTERN};
pub use crate::engine::{play_hole, resolve_shot, Shot, ShotEvent, POWER_MAX, POWER_MIN};
pub use crate::round::Round;
pub use crate::scoring::{format_to_par, standings, Standing};
