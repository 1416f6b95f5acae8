//! A strategy that randomly chooses a move, for use in tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::interface::*;

pub struct Random<R: Rng = StdRng> {
    rng: R,
}

impl Random<StdRng> {
    pub fn new() -> Self {
        Random { rng: StdRng::from_entropy() }
    }
}

impl Default for Random<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Random<R> {
    pub fn with_rng(rng: R) -> Self {
        Random { rng }
    }
}

impl<G: GameState, R: Rng> Strategy<G> for Random<R> {
    fn choose_move(&mut self, s: &G, _clock: &dyn TimeOracle) -> Option<G::M> {
        let moves = s.legal_moves(s.active_player());
        if moves.is_empty() {
            None
        } else {
            Some(moves[self.rng.gen_range(0..moves.len())])
        }
    }
}
