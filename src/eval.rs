//! Heuristic evaluators for pursuit/blocking games.
//!
//! All three start from the mobility difference (own legal moves minus the
//! opponent's) and differ in how they weigh distance from the board center.
//! Each returns the exact utility at terminal states, so they stay
//! consistent with [`GameState::utility`] everywhere the search can call
//! them.

use crate::interface::*;

fn mobility<G: GameState>(s: &G, player: G::P) -> Score {
    s.legal_moves(player).len() as Score
}

// Manhattan distance from the board center.
fn center_distance<G: GameState>(s: &G, player: G::P) -> Score {
    let (row, col) = s.player_location(player);
    let center_row = (s.height() / 2) as Score;
    let center_col = (s.width() / 2) as Score;
    (row as Score - center_row).abs() + (col as Score - center_col).abs()
}

/// Plain mobility difference: own legal moves minus the opponent's.
pub struct Mobility;

impl<G: GameState> Evaluator<G> for Mobility {
    fn score(&self, s: &G, player: G::P) -> Score {
        if s.is_winner(player) {
            return WIN;
        }
        if s.is_loser(player) {
            return LOSS;
        }
        mobility(s, player) - mobility(s, s.opponent(player))
    }
}

/// Mobility difference weighted 10x, biased by the difference in distance
/// from the board center.
pub struct CenterWeighted;

impl<G: GameState> Evaluator<G> for CenterWeighted {
    fn score(&self, s: &G, player: G::P) -> Score {
        if s.is_winner(player) {
            return WIN;
        }
        if s.is_loser(player) {
            return LOSS;
        }
        let opponent = s.opponent(player);
        let moves = mobility(s, player) - mobility(s, opponent);
        moves * 10.0 + center_distance(s, player) - center_distance(s, opponent)
    }
}

/// Mobility difference, with a small center-proximity bonus used only to
/// break exact mobility ties.
pub struct MobilityThenCenter;

impl<G: GameState> Evaluator<G> for MobilityThenCenter {
    fn score(&self, s: &G, player: G::P) -> Score {
        if s.is_winner(player) {
            return WIN;
        }
        if s.is_loser(player) {
            return LOSS;
        }
        let opponent = s.opponent(player);
        let diff = mobility(s, player) - mobility(s, opponent);
        if diff != 0.0 {
            diff
        } else {
            (center_distance(s, opponent) - center_distance(s, player)) / 10.0
        }
    }
}
