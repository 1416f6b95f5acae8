//! The common structures and traits.

use std::fmt;
use std::time::{Duration, Instant};

/// An assessment of a game state from the perspective of a given player.
/// Higher values mean a more favorable state.
pub type Score = f64;

/// The score of a state the player has provably won.
pub const WIN: Score = f64::INFINITY;
/// The score of a state the player has provably lost.
pub const LOSS: Score = f64::NEG_INFINITY;

/// Search was abandoned because the remaining turn time dropped below the
/// configured threshold.
///
/// This is the cooperative cancellation signal, not a failure: every
/// recursive frame propagates it with `?` and only the top-level controller
/// handles it, by falling back to the best previously completed result.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Timeout;

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "search cancelled: turn time nearly exhausted")
    }
}

impl std::error::Error for Timeout {}

/// The outcome of one depth-limited search: the value of the root and the
/// move achieving it (`None` at depth 0 and at terminal states), unless the
/// search was cancelled partway.
pub type SearchResult<M> = Result<(Score, Option<M>), Timeout>;

/// A capability reporting how much wall-clock time is left in the current
/// turn. An expired budget reports [`Duration::ZERO`].
///
/// The search queries the oracle exactly once per recursive call, so
/// implementations should be cheap but need not cache.
pub trait TimeOracle {
    fn remaining(&self) -> Duration;
}

/// An oracle that always reports the same remaining time. A generous value
/// disables cancellation and [`Duration::ZERO`] forces it on the very first
/// call, which makes this mostly a testing tool.
pub struct FixedRemaining(pub Duration);

impl TimeOracle for FixedRemaining {
    fn remaining(&self) -> Duration {
        self.0
    }
}

/// The stock [`TimeOracle`]: a fixed budget counting down from the moment of
/// construction.
pub struct TurnClock {
    deadline: Instant,
}

impl TurnClock {
    pub fn new(budget: Duration) -> Self {
        TurnClock { deadline: Instant::now() + budget }
    }
}

impl TimeOracle for TurnClock {
    fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }
}

/// The per-turn snapshot contract for a two-player, zero-sum,
/// perfect-information game with alternating turns on a discrete board.
///
/// Implementations are immutable: [`GameState::forecast_move`] returns a new,
/// independent snapshot with the active and inactive roles swapped, and
/// nothing in this crate ever mutates a state. The search assumes this
/// contract holds exactly; a snapshot that violates it (for example,
/// `forecast_move` mutating `self`, or `utility` nonzero at a non-terminal
/// state) produces unspecified move choices.
pub trait GameState: Clone {
    /// A move of the game, typically a board coordinate pair.
    type M: Copy + Eq;
    /// A player identifier.
    type P: Copy + Eq;

    /// The player whose turn it is to move.
    fn active_player(&self) -> Self::P;

    /// The player waiting for their turn.
    fn inactive_player(&self) -> Self::P {
        self.opponent(self.active_player())
    }

    /// The other player.
    fn opponent(&self, player: Self::P) -> Self::P;

    /// All legal moves for the given player, in a stable order. Ties between
    /// equally valued moves are broken by this order.
    fn legal_moves(&self, player: Self::P) -> Vec<Self::M>;

    /// Apply a move of the active player to a copy of this state and return
    /// the copy, with the active and inactive roles swapped.
    fn forecast_move(&self, m: Self::M) -> Self;

    /// Whether the game has ended with a win for the given player.
    fn is_winner(&self, player: Self::P) -> bool;

    /// Whether the game has ended with a loss for the given player.
    fn is_loser(&self, player: Self::P) -> bool;

    /// The exact terminal value for the given player: [`WIN`], [`LOSS`], or
    /// 0.0 while the game is still in progress.
    fn utility(&self, player: Self::P) -> Score {
        if self.is_winner(player) {
            WIN
        } else if self.is_loser(player) {
            LOSS
        } else {
            0.0
        }
    }

    /// The (row, col) square the given player currently occupies.
    fn player_location(&self, player: Self::P) -> (usize, usize);

    /// Board width in columns.
    fn width(&self) -> usize;

    /// Board height in rows.
    fn height(&self) -> usize;
}

/// A heuristic assessment of a non-terminal state, interchangeable across
/// strategies of play.
///
/// At a terminal state the score must agree with [`GameState::utility`];
/// elsewhere it is an unconstrained estimate, totally ordered by ordinary
/// `f64` comparison including the [`WIN`]/[`LOSS`] sentinels.
pub trait Evaluator<G: GameState> {
    fn score(&self, s: &G, player: G::P) -> Score;
}

/// Defines a method of choosing a move for the active player within a turn
/// time budget.
pub trait Strategy<G: GameState> {
    /// Pick a move for the active player, or `None` if there is none.
    fn choose_move(&mut self, s: &G, clock: &dyn TimeOracle) -> Option<G::M>;
}
