//! Shot resolution and the per-hole play loop.

pub mod hole;
pub mod shot;

pub use hole::play_hole;
pub use shot::{resolve_shot, Shot, ShotEvent, POWER_MAX, POWER_MIN};
