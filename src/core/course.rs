//! Course data model and generation.
//!
//! A round is played on a [`Course`] of exactly nine [`Hole`]s. Par values
//! follow a fixed pattern; only each hole's distance and hazard chance are
//! randomized. Holes are built once at round start and never mutated.

use log::debug;
use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Number of holes in a round.
pub const HOLE_COUNT: usize = 9;

/// Fixed par pattern for every course, front to back.
pub const PAR_PATTERN: [u8; HOLE_COUNT] = [3, 4, 5, 3, 4, 5, 3, 4, 5];

/// Sum of par for the first `holes_played` holes.
///
/// ```
/// use fairway::core::par_through;
///
/// assert_eq!(par_through(0), 0);
/// assert_eq!(par_through(3), 12);
/// assert_eq!(par_through(9), 36);
/// ```
///
/// # Panics
///
/// Panics if `holes_played` exceeds [`HOLE_COUNT`].
#[must_use]
pub fn par_through(holes_played: usize) -> u32 {
    assert!(holes_played <= HOLE_COUNT, "A round has at most 9 holes");
    PAR_PATTERN[..holes_played].iter().map(|&p| u32::from(p)).sum()
}

/// One mini-golf hole.
///
/// Immutable once generated. `hazard_chance` is the per-shot probability of
/// an adverse event, rounded to two decimal places.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// Hole number, 1-based.
    pub number: u8,
    /// Expected stroke count: 3, 4, or 5.
    pub par: u8,
    /// Tee-to-cup distance in yards, within [30, 90].
    pub distance: u32,
    /// Hazard probability per shot, within [0.12, 0.30].
    pub hazard_chance: f64,
}

/// An ordered nine-hole course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    holes: Vec<Hole>,
}

impl Course {
    /// Generate a course from the given randomness source.
    ///
    /// Distances are uniform over [30, 90] yards; hazard chances are uniform
    /// over [0.12, 0.30], rounded to two decimals. The same generator state
    /// always yields the same course.
    #[must_use]
    pub fn generate(rng: &mut GameRng) -> Self {
        let holes = PAR_PATTERN
            .iter()
            .enumerate()
            .map(|(index, &par)| {
                let distance = rng.roll_range(30..=90) as u32;
                let hazard_chance = round_to_hundredths(rng.roll_fraction(0.12..=0.30));
                let hole = Hole {
                    number: index as u8 + 1,
                    par,
                    distance,
                    hazard_chance,
                };
                debug!(
                    "hole {}: par {}, {} yards, hazard {:.2}",
                    hole.number, hole.par, hole.distance, hole.hazard_chance
                );
                hole
            })
            .collect();

        Self { holes }
    }

    /// Generate a deterministic course from a seed.
    ///
    /// ```
    /// use fairway::core::Course;
    ///
    /// assert_eq!(Course::seeded(123), Course::seeded(123));
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::generate(&mut GameRng::new(seed))
    }

    /// Iterate over the holes in play order.
    pub fn holes(&self) -> impl Iterator<Item = &Hole> {
        self.holes.iter()
    }

    /// Number of holes on the course.
    #[must_use]
    pub fn len(&self) -> usize {
        self.holes.len()
    }

    /// Whether the course has no holes. Always false for generated courses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holes.is_empty()
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
