//! Leaderboard ranking and rendering.
//!
//! Ranking is a total order over players: ascending score to par, then total
//! strokes, then lowercased name. Rendering is split from printing so rows
//! can be asserted on directly; the orchestrator pushes them through the
//! output collaborator.

use crate::core::Player;

/// One rendered leaderboard position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Standing {
    /// 1-based rank after sorting.
    pub rank: usize,
    pub name: String,
    pub total_strokes: u32,
    pub score_to_par: i32,
}

impl Standing {
    /// Render this standing as a leaderboard row.
    ///
    /// Positive scores get an explicit `+`; zero and negative do not.
    #[must_use]
    pub fn row(&self) -> String {
        format!(
            "{}. {:<14} Strokes: {:<3} To Par: {}",
            self.rank,
            self.name,
            self.total_strokes,
            format_to_par(self.score_to_par)
        )
    }
}

/// Signed score-to-par text: `+` prefix only for positive values.
#[must_use]
pub fn format_to_par(score: i32) -> String {
    if score > 0 {
        format!("+{score}")
    } else {
        score.to_string()
    }
}

/// Rank players into leaderboard standings.
///
/// The sort key is `(score_to_par, total_strokes, lowercase name)`, so the
/// result is a deterministic total order for any roster.
#[must_use]
pub fn standings(players: &[Player]) -> Vec<Standing> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by_key(|p| (p.score_to_par(), p.total_strokes(), p.name().to_lowercase()));

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, player)| Standing {
            rank: index + 1,
            name: player.name().to_owned(),
            total_strokes: player.total_strokes(),
            score_to_par: player.score_to_par(),
        })
        .collect()
}
