//! Utility functions for testing.

use std::time::Duration;

use crate::interface::{GameState, Strategy, TurnClock};

/// Play a complete game from `start` with the two provided strategies, each
/// turn on a fresh clock with the given budget.
///
/// The first strategy plays the active player of `start`. Returns the
/// winning player; a strategy that produces no move while moves exist, or an
/// illegal move, counts as a loss for it.
pub fn battle_royale<G, S1, S2>(
    start: &G, s1: &mut S1, s2: &mut S2, budget: Duration,
) -> G::P
where
    G: GameState,
    S1: Strategy<G>,
    S2: Strategy<G>,
{
    let mut state = start.clone();
    let mut strategies: [&mut dyn Strategy<G>; 2] = [s1, s2];
    let mut turn = 0;
    loop {
        let active = state.active_player();
        if state.is_loser(active) {
            return state.opponent(active);
        }
        let clock = TurnClock::new(budget);
        let legal = state.legal_moves(active);
        match strategies[turn].choose_move(&state, &clock) {
            Some(m) if legal.contains(&m) => state = state.forecast_move(m),
            _ => return state.opponent(active),
        }
        turn = 1 - turn;
    }
}
