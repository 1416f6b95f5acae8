//! Time-bounded adversarial search for two-player, zero-sum,
//! perfect-information board games with alternating turns.
//!
//! The engine picks a move for the active player within a wall-clock budget
//! by running depth-limited minimax (optionally with alpha-beta pruning)
//! under an iterative-deepening controller. Search is cooperative-cancelled:
//! every recursive call checks a remaining-time oracle and unwinds the whole
//! stack once time runs low, and the controller falls back to the deepest
//! completed result, or a random legal move when nothing finished in time.
//!
//! Games plug in through the [`GameState`] contract (immutable snapshots
//! producing successors via [`GameState::forecast_move`]) and scoring plugs
//! in through [`Evaluator`]. [`isolation`] is a complete example game.
//!
//! ```
//! use std::time::Duration;
//! use deadline_minimax::{
//!     Algorithm, DeadlineSearch, GameState, Mobility, SearchOptions, TurnClock,
//! };
//! use deadline_minimax::isolation::Board;
//!
//! let board = Board::new(7, 7);
//! let opts = SearchOptions::new()
//!     .with_algorithm(Algorithm::AlphaBeta)
//!     .with_timer_threshold(Duration::from_millis(10));
//! let mut player = DeadlineSearch::new(Mobility, opts);
//!
//! let legal = board.legal_moves(board.active_player());
//! let clock = TurnClock::new(Duration::from_millis(150));
//! let m = player.get_move(&board, &legal, &clock);
//! assert!(m.is_some());
//! ```

pub mod eval;
pub mod interface;
pub mod isolation;
pub mod strategies;
pub mod util;

pub use eval::{CenterWeighted, Mobility, MobilityThenCenter};
pub use interface::{
    Evaluator, FixedRemaining, GameState, Score, SearchResult, Strategy, TimeOracle, Timeout,
    TurnClock, LOSS, WIN,
};
pub use strategies::deadline::{Algorithm, DeadlineSearch, SearchOptions};
pub use strategies::minimax::Searcher;
pub use strategies::random::Random;
