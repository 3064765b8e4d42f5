//! Single-stroke shot resolution.
//!
//! One stroke turns a chosen power into yards of movement plus an event:
//!
//! 1. Base distance is the power plus a uniform offset in [-8, 8].
//! 2. A hazard roll against the hole's hazard chance comes first. On a
//!    hazard, a setback in [8, 22] is subtracted. Hazard and bonus are
//!    mutually exclusive; hazard wins.
//! 3. Clean shots in the sweet spot ([45, 65] power) gain a bonus in
//!    [5, 15] with probability 0.25.
//!
//! Movement is always clamped to be non-negative. The arithmetic lives in
//! the pure [`Shot::hazard`] and [`Shot::clean`] constructors so exact
//! outcomes are testable without steering the RNG.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Hole};

/// Lowest power a player may choose.
pub const POWER_MIN: u32 = 20;
/// Highest power a player may choose.
pub const POWER_MAX: u32 = 90;

/// Power band where clean shots can earn a distance bonus.
const SWEET_SPOT: std::ops::RangeInclusive<u32> = 45..=65;
/// Probability of a bonus for a sweet-spot clean shot.
const BONUS_CHANCE: f64 = 0.25;

/// What happened on a stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotEvent {
    /// The ball found a hazard and lost distance.
    Hazard,
    /// An unhindered shot, possibly with a sweet-spot bonus.
    Clean,
}

impl ShotEvent {
    /// Narration line for this event.
    #[must_use]
    pub fn narration(self) -> &'static str {
        match self {
            ShotEvent::Hazard => "Hazard hit! Ball slowed down.",
            ShotEvent::Clean => "Clean shot.",
        }
    }
}

/// Outcome of a single stroke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    /// Yards the ball advanced. Never negative.
    pub movement: u32,
    /// The event that produced the movement.
    pub event: ShotEvent,
}

impl Shot {
    /// A hazarded stroke: the setback is subtracted from the base distance.
    ///
    /// ```
    /// use fairway::engine::{Shot, ShotEvent};
    ///
    /// let shot = Shot::hazard(50, 10);
    /// assert_eq!(shot.movement, 40);
    /// assert_eq!(shot.event, ShotEvent::Hazard);
    /// ```
    #[must_use]
    pub fn hazard(base_distance: i32, setback: u32) -> Self {
        Self {
            movement: (base_distance - setback as i32).max(0) as u32,
            event: ShotEvent::Hazard,
        }
    }

    /// A clean stroke: any bonus is added to the base distance.
    #[must_use]
    pub fn clean(base_distance: i32, bonus: u32) -> Self {
        Self {
            movement: (base_distance + bonus as i32).max(0) as u32,
            event: ShotEvent::Clean,
        }
    }
}

/// Resolve one stroke at the given power on the given hole.
///
/// Any power and any generated hole produce a result; there are no error
/// conditions. Clean shots always move at least `power - 8` yards, and a
/// hazarded shot moves at least `power - 30`, so movement is strictly
/// positive for every power of 31 or more. Only hazarded low-power shots
/// can leave the ball where it lies.
pub fn resolve_shot(power: u32, hole: &Hole, rng: &mut GameRng) -> Shot {
    let base_distance = power as i32 + rng.roll_range(-8..=8);

    let shot = if rng.roll_chance(hole.hazard_chance) {
        let setback = rng.roll_range(8..=22) as u32;
        Shot::hazard(base_distance, setback)
    } else {
        let bonus = if SWEET_SPOT.contains(&power) && rng.roll_chance(BONUS_CHANCE) {
            rng.roll_range(5..=15) as u32
        } else {
            0
        };
        Shot::clean(base_distance, bonus)
    };

    debug!(
        "power {} on hole {} -> {:?} for {} yards",
        power, hole.number, shot.event, shot.movement
    );
    shot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hole_with_hazard(hazard_chance: f64) -> Hole {
        Hole {
            number: 1,
            par: 3,
            distance: 50,
            hazard_chance,
        }
    }

    #[test]
    fn test_hazard_subtracts_setback() {
        // Mirrors the canonical example: power 50, offset 0, setback 10.
        let shot = Shot::hazard(50, 10);
        assert_eq!(shot.movement, 40);
        assert_eq!(shot.event, ShotEvent::Hazard);
    }

    #[test]
    fn test_hazard_clamps_to_zero() {
        let shot = Shot::hazard(12, 22);
        assert_eq!(shot.movement, 0);
    }

    #[test]
    fn test_clean_adds_bonus() {
        let shot = Shot::clean(55, 15);
        assert_eq!(shot.movement, 70);
        assert_eq!(shot.event, ShotEvent::Clean);
    }

    #[test]
    fn test_certain_hazard_always_hazards() {
        let hole = hole_with_hazard(1.0);
        let mut rng = GameRng::new(42);

        for _ in 0..200 {
            let shot = resolve_shot(50, &hole, &mut rng);
            assert_eq!(shot.event, ShotEvent::Hazard);
            // Worst case: offset -8, setback 22.
            assert!(shot.movement >= 50 - 30);
            assert!(shot.movement <= 50 + 8 - 8);
        }
    }

    #[test]
    fn test_impossible_hazard_always_clean() {
        let hole = hole_with_hazard(0.0);
        let mut rng = GameRng::new(42);

        for _ in 0..200 {
            let shot = resolve_shot(50, &hole, &mut rng);
            assert_eq!(shot.event, ShotEvent::Clean);
            assert!(shot.movement >= 50 - 8);
        }
    }

    #[test]
    fn test_no_bonus_outside_sweet_spot() {
        let hole = hole_with_hazard(0.0);
        let mut rng = GameRng::new(42);

        for &power in &[POWER_MIN, 44, 66, POWER_MAX] {
            for _ in 0..200 {
                let shot = resolve_shot(power, &hole, &mut rng);
                assert!(shot.movement <= power + 8);
            }
        }
    }

    #[test]
    fn test_sweet_spot_bonus_stays_in_range() {
        let hole = hole_with_hazard(0.0);
        let mut rng = GameRng::new(42);

        let mut saw_bonus = false;
        for _ in 0..500 {
            let shot = resolve_shot(55, &hole, &mut rng);
            assert!(shot.movement <= 55 + 8 + 15);
            if shot.movement > 55 + 8 {
                saw_bonus = true;
            }
        }
        assert!(saw_bonus, "A quarter of 500 sweet-spot shots should bonus");
    }

    #[test]
    fn test_movement_positive_for_power_31_and_up() {
        let hole = hole_with_hazard(1.0);
        let mut rng = GameRng::new(7);

        for _ in 0..500 {
            let shot = resolve_shot(31, &hole, &mut rng);
            assert!(shot.movement >= 1);
        }
    }

    #[test]
    fn test_resolution_is_deterministic_per_seed() {
        let hole = hole_with_hazard(0.2);
        let mut a = GameRng::new(9);
        let mut b = GameRng::new(9);

        for _ in 0..100 {
            assert_eq!(resolve_shot(60, &hole, &mut a), resolve_shot(60, &hole, &mut b));
        }
    }
}
