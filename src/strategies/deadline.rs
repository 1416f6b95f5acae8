//! The iterative-deepening controller and its options.
//!
//! [`DeadlineSearch`] is the externally callable surface of the engine: it
//! drives [`Searcher`] once at a fixed depth, or at depth 0, 1, 2, ... until
//! the turn clock runs low, and owns the fallback policy when a search is
//! cancelled before finishing.

use std::marker::PhantomData;
use std::time::Duration;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::interface::*;
use crate::strategies::minimax::Searcher;

/// Which traversal [`DeadlineSearch`] runs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

/// Options for [`DeadlineSearch`], supplied at construction.
#[derive(Copy, Clone, Debug)]
pub struct SearchOptions {
    search_depth: usize,
    algorithm: Algorithm,
    iterative: bool,
    timer_threshold: Duration,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            search_depth: 3,
            algorithm: Algorithm::Minimax,
            iterative: true,
            timer_threshold: Duration::from_millis(10),
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// The depth used in fixed-depth mode. Must be positive.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.search_depth = depth;
        self
    }

    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Whether to deepen iteratively until cancelled (true) or run once at
    /// the fixed depth (false).
    pub fn with_iterative_deepening(mut self, iterative: bool) -> Self {
        self.iterative = iterative;
        self
    }

    /// Remaining turn time below which search stops and the retained result
    /// is returned. Should leave enough slack for the caller to act on the
    /// move before the turn actually expires.
    pub fn with_timer_threshold(mut self, threshold: Duration) -> Self {
        self.timer_threshold = threshold;
        self
    }
}

/// A strategy that picks the minimax-optimal move discoverable within the
/// turn's time budget.
///
/// Holds no state between turns beyond its options, evaluator, and rng; each
/// [`DeadlineSearch::get_move`] call is independent.
pub struct DeadlineSearch<G: GameState, E: Evaluator<G>, R: Rng = StdRng> {
    opts: SearchOptions,
    eval: E,
    rng: R,
    _game: PhantomData<G>,
}

impl<G: GameState, E: Evaluator<G>> DeadlineSearch<G, E, StdRng> {
    pub fn new(eval: E, opts: SearchOptions) -> Self {
        Self::with_rng(eval, opts, StdRng::from_entropy())
    }
}

impl<G: GameState, E: Evaluator<G>, R: Rng> DeadlineSearch<G, E, R> {
    /// Construct with an explicit randomness source, so the random-fallback
    /// path is deterministic under test.
    pub fn with_rng(eval: E, opts: SearchOptions, rng: R) -> Self {
        DeadlineSearch { opts, eval, rng, _game: PhantomData }
    }

    /// Choose a move for the active player of `s` before the turn clock runs
    /// out.
    ///
    /// `legal_moves` must be the active player's legal moves in `s`; an
    /// empty slice returns `None` with no search performed. Otherwise some
    /// element of `legal_moves` is always returned: the retained result of
    /// the deepest completed search, or a uniformly random legal move if
    /// time expired before any depth produced one.
    pub fn get_move(
        &mut self, s: &G, legal_moves: &[G::M], clock: &dyn TimeOracle,
    ) -> Option<G::M> {
        if legal_moves.is_empty() {
            return None;
        }

        let searcher = Searcher::new(&self.eval, clock, self.opts.timer_threshold);
        let mut retained = None;
        if self.opts.iterative {
            for depth in 0.. {
                match run(&searcher, s, depth, self.opts.algorithm) {
                    Ok((value, best)) => {
                        trace!("depth {} complete, value {}", depth, value);
                        retained = best;
                    }
                    // A cancelled depth never overwrites the retained move.
                    Err(Timeout) => {
                        debug!("cancelled during depth {}", depth);
                        break;
                    }
                }
            }
        } else {
            match run(&searcher, s, self.opts.search_depth, self.opts.algorithm) {
                Ok((value, best)) => {
                    trace!("depth {} complete, value {}", self.opts.search_depth, value);
                    retained = best;
                }
                Err(Timeout) => {
                    debug!("cancelled during fixed depth {}", self.opts.search_depth);
                }
            }
        }

        retained.or_else(|| {
            debug!("no completed search, falling back to a random legal move");
            Some(legal_moves[self.rng.gen_range(0..legal_moves.len())])
        })
    }
}

fn run<G: GameState, E: Evaluator<G>>(
    searcher: &Searcher<'_, G, E>, s: &G, depth: usize, algorithm: Algorithm,
) -> SearchResult<G::M> {
    match algorithm {
        Algorithm::Minimax => searcher.minimax(s, depth, true),
        Algorithm::AlphaBeta => searcher.alphabeta(s, depth, LOSS, WIN, true),
    }
}

impl<G: GameState, E: Evaluator<G>, R: Rng> Strategy<G> for DeadlineSearch<G, E, R> {
    fn choose_move(&mut self, s: &G, clock: &dyn TimeOracle) -> Option<G::M> {
        let moves = s.legal_moves(s.active_player());
        self.get_move(s, &moves, clock)
    }
}
