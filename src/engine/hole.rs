//! The per-player, per-hole play loop.
//!
//! Drives one player from the tee to the cup: repeatedly request a power
//! from the input collaborator, resolve the stroke, and narrate the result
//! until the remaining distance reaches zero.

use anyhow::Result;
use log::debug;

use crate::console::GameIo;
use crate::core::{GameRng, Hole, Player};

use super::shot::resolve_shot;

/// Play one hole for one player and return their stroke count.
///
/// The returned count is always at least 1. Termination: a clean shot moves
/// at least `power - 8 >= 12` yards for any valid power, and the remaining
/// distance is a shrinking integer, so only an unbroken run of low-power
/// hazards can stall the ball (see [`resolve_shot`]).
///
/// Errors surface only from the input collaborator, e.g. end of input.
pub fn play_hole(
    player: &Player,
    hole: &Hole,
    io: &mut impl GameIo,
    rng: &mut GameRng,
) -> Result<u32> {
    io.line("");
    io.headline(&format!(
        "--- Hole {} | Par {} | {} yards ---",
        hole.number, hole.par, hole.distance
    ));

    let mut distance_left = hole.distance;
    let mut strokes = 0u32;

    while distance_left > 0 {
        strokes += 1;
        io.line(&format!(
            "{}, shot {}. Distance left: {} yards",
            player.name(),
            strokes,
            distance_left
        ));

        let power = io.prompt_power()?;
        let shot = resolve_shot(power, hole, rng);

        if shot.movement >= distance_left {
            io.line(&format!("{} You sink it! 🎉", shot.event.narration()));
            distance_left = 0;
        } else {
            distance_left -= shot.movement;
            io.line(&format!(
                "{} Ball moved {} yards.",
                shot.event.narration(),
                shot.movement
            ));
        }
    }

    debug!("{} holed out #{} in {} strokes", player.name(), hole.number, strokes);
    io.line(&format!("{} finished in {} stroke(s).", player.name(), strokes));
    Ok(strokes)
}
