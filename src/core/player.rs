//! Players and their scorecards.
//!
//! A [`Player`] owns an append-only stroke sequence: one entry per completed
//! hole, written exactly once when the hole finishes. Totals and score to
//! par are derived on demand rather than stored.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::course::{par_through, HOLE_COUNT};

/// One golfer and their score card.
///
/// ```
/// use fairway::core::Player;
///
/// let mut player = Player::new("Alex");
/// player.record_hole(3);
/// player.record_hole(4);
/// player.record_hole(6);
/// assert_eq!(player.total_strokes(), 13);
/// assert_eq!(player.score_to_par(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    strokes: SmallVec<[u32; HOLE_COUNT]>,
}

impl Player {
    /// Create a player with an empty scorecard.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty after trimming. The console collaborator
    /// re-prompts before a name ever gets here.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.trim().is_empty(), "Player name must be non-empty");
        Self {
            name,
            strokes: SmallVec::new(),
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Strokes per completed hole, in play order.
    #[must_use]
    pub fn strokes(&self) -> &[u32] {
        &self.strokes
    }

    /// Number of holes this player has completed.
    #[must_use]
    pub fn holes_played(&self) -> usize {
        self.strokes.len()
    }

    /// Append the stroke count for a completed hole.
    ///
    /// The only mutation a player ever sees; past entries are never edited.
    ///
    /// # Panics
    ///
    /// Panics if `strokes` is zero or the scorecard is already full.
    pub fn record_hole(&mut self, strokes: u32) {
        assert!(strokes >= 1, "A completed hole takes at least one stroke");
        assert!(
            self.strokes.len() < HOLE_COUNT,
            "Scorecard already has 9 holes"
        );
        self.strokes.push(strokes);
    }

    /// Total strokes across all completed holes.
    #[must_use]
    pub fn total_strokes(&self) -> u32 {
        self.strokes.iter().sum()
    }

    /// Score relative to par for the holes completed so far.
    ///
    /// Negative is favorable. Valid mid-round and at round end.
    #[must_use]
    pub fn score_to_par(&self) -> i32 {
        self.total_strokes() as i32 - par_through(self.holes_played()) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_has_empty_card() {
        let player = Player::new("Sam");
        assert_eq!(player.name(), "Sam");
        assert_eq!(player.holes_played(), 0);
        assert_eq!(player.total_strokes(), 0);
        assert_eq!(player.score_to_par(), 0);
    }

    #[test]
    fn test_score_to_par_mid_round() {
        let mut player = Player::new("Alex");
        player.record_hole(3);
        player.record_hole(4);
        player.record_hole(6);

        // Pars for the first three holes are 3, 4, 5.
        assert_eq!(player.total_strokes(), 13);
        assert_eq!(player.score_to_par(), 1);
    }

    #[test]
    fn test_score_to_par_can_be_negative() {
        let mut player = Player::new("Birdie");
        player.record_hole(2);
        assert_eq!(player.score_to_par(), -1);
    }

    #[test]
    fn test_record_hole_appends_in_order() {
        let mut player = Player::new("Sam");
        player.record_hole(4);
        player.record_hole(2);
        player.record_hole(7);
        assert_eq!(player.strokes(), &[4, 2, 7]);
    }

    #[test]
    #[should_panic(expected = "at least one stroke")]
    fn test_record_hole_rejects_zero() {
        let mut player = Player::new("Sam");
        player.record_hole(0);
    }

    #[test]
    #[should_panic(expected = "already has 9 holes")]
    fn test_record_hole_rejects_tenth_hole() {
        let mut player = Player::new("Sam");
        for _ in 0..10 {
            player.record_hole(3);
        }
    }

    #[test]
    #[should_panic(expected = "non-empty")]
    fn test_blank_name_rejected() {
        let _ = Player::new("   ");
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new("Alex");
        player.record_hole(3);
        player.record_hole(5);

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
