//! Core game types: RNG, players, and the course.
//!
//! These are the fundamental building blocks the engine and orchestrator
//! operate on. Everything stochastic flows through an injected [`GameRng`].

pub mod course;
pub mod player;
pub mod rng;

pub use course::{par_through, Course, Hole, HOLE_COUNT, PAR_PATTERN};
pub use player::Player;
pub use rng::GameRng;
