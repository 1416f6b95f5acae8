//! Depth-limited minimax, plain and with alpha-beta pruning.
//!
//! Both traversals alternate a maximizing layer (the player the search
//! optimizes for) with a minimizing layer (the opponent), consulting the
//! evaluator at the horizon. Pruning changes how much of the tree is
//! visited, never the value: for the same state, depth, and evaluator,
//! [`Searcher::alphabeta`] returns the same score and move as
//! [`Searcher::minimax`].

use std::marker::PhantomData;
use std::time::Duration;

use crate::interface::*;

/// One depth-limited search over a game tree, borrowed together with its
/// evaluator and time oracle for the span of a single turn.
///
/// Every recursive call checks the oracle once on entry; when the remaining
/// time falls below the threshold the call returns `Err(Timeout)`, which `?`
/// carries through every enclosing frame to the caller. An already expired
/// budget cancels on the very first call the same way.
pub struct Searcher<'a, G: GameState, E: Evaluator<G>> {
    eval: &'a E,
    clock: &'a dyn TimeOracle,
    threshold: Duration,
    _game: PhantomData<G>,
}

impl<'a, G: GameState, E: Evaluator<G>> Searcher<'a, G, E> {
    pub fn new(eval: &'a E, clock: &'a dyn TimeOracle, threshold: Duration) -> Self {
        Searcher { eval, clock, threshold, _game: PhantomData }
    }

    fn check_time(&self) -> Result<(), Timeout> {
        if self.clock.remaining() < self.threshold {
            Err(Timeout)
        } else {
            Ok(())
        }
    }

    // Terminal and horizon handling shared by both algorithms. The player
    // being optimized for is the active player on maximizing layers and the
    // inactive one on minimizing layers.
    fn leaf_value(&self, s: &G, depth: usize, maximizing: bool) -> Option<Score> {
        let target = if maximizing { s.active_player() } else { s.inactive_player() };
        let exact = s.utility(target);
        if exact != 0.0 {
            return Some(exact);
        }
        if depth == 0 {
            return Some(self.eval.score(s, target));
        }
        None
    }

    /// Plain minimax to the given depth.
    pub fn minimax(&self, s: &G, depth: usize, maximizing: bool) -> SearchResult<G::M> {
        self.check_time()?;
        if let Some(value) = self.leaf_value(s, depth, maximizing) {
            return Ok((value, None));
        }

        let moves = s.legal_moves(s.active_player());
        let mut best_move = moves.first().copied();
        if maximizing {
            let mut best = LOSS;
            for &m in &moves {
                let (value, _) = self.minimax(&s.forecast_move(m), depth - 1, false)?;
                if value > best {
                    best = value;
                    best_move = Some(m);
                }
            }
            Ok((best, best_move))
        } else {
            let mut best = WIN;
            for &m in &moves {
                let (value, _) = self.minimax(&s.forecast_move(m), depth - 1, true)?;
                if value < best {
                    best = value;
                    best_move = Some(m);
                }
            }
            Ok((best, best_move))
        }
    }

    /// Minimax with alpha-beta pruning. Start a search with the full window
    /// `(LOSS, WIN)`.
    ///
    /// The candidate move is updated only when a child strictly improves the
    /// running best value, never when the window merely tightens, so tied
    /// scores resolve to the first move in enumeration order exactly as in
    /// [`Searcher::minimax`].
    pub fn alphabeta(
        &self, s: &G, depth: usize, mut alpha: Score, mut beta: Score, maximizing: bool,
    ) -> SearchResult<G::M> {
        self.check_time()?;
        if let Some(value) = self.leaf_value(s, depth, maximizing) {
            return Ok((value, None));
        }

        let moves = s.legal_moves(s.active_player());
        let mut best_move = moves.first().copied();
        if maximizing {
            let mut best = LOSS;
            for &m in &moves {
                let (value, _) =
                    self.alphabeta(&s.forecast_move(m), depth - 1, alpha, beta, false)?;
                if value > best {
                    best = value;
                    best_move = Some(m);
                }
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            Ok((best, best_move))
        } else {
            let mut best = WIN;
            for &m in &moves {
                let (value, _) =
                    self.alphabeta(&s.forecast_move(m), depth - 1, alpha, beta, true)?;
                if value < best {
                    best = value;
                    best_move = Some(m);
                }
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            Ok((best, best_move))
        }
    }
}
