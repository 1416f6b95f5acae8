//! A definition of knight-move Isolation using the library, for use in tests
//! and benchmarks.
//!
//! Two players hop around a rectangular grid with knight moves. Every square
//! a player lands on (including the starting squares) is blocked for the
//! rest of the game, and the first player left without a legal move loses.

use std::fmt::{Display, Formatter, Result};

use crate::interface::GameState;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

impl Player {
    fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

const KNIGHT_DELTAS: [(i64, i64); 8] =
    [(-2, -1), (-2, 1), (-1, -2), (-1, 2), (1, -2), (1, 2), (2, -1), (2, 1)];

#[derive(Clone)]
pub struct Board {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
    locations: [(usize, usize); 2],
    active: Player,
}

impl Board {
    /// A fresh board with the players in opposite corners and player one to
    /// move.
    pub fn new(width: usize, height: usize) -> Board {
        Board::with_positions(width, height, (0, 0), (height - 1, width - 1))
    }

    /// A fresh board with explicit starting squares, which begin blocked.
    /// Player one moves first.
    pub fn with_positions(
        width: usize, height: usize, one: (usize, usize), two: (usize, usize),
    ) -> Board {
        let mut board = Board {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [one, two],
            active: Player::One,
        };
        board.block(one);
        board.block(two);
        board
    }

    /// Mark a square as unavailable, as if it had been visited.
    pub fn block(&mut self, (row, col): (usize, usize)) {
        let index = self.index(row, col);
        self.blocked[index] = true;
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn is_open(&self, row: i64, col: i64) -> bool {
        row >= 0
            && col >= 0
            && (row as usize) < self.height
            && (col as usize) < self.width
            && !self.blocked[row as usize * self.width + col as usize]
    }
}

impl GameState for Board {
    type M = (usize, usize);
    type P = Player;

    fn active_player(&self) -> Player {
        self.active
    }

    fn opponent(&self, player: Player) -> Player {
        player.other()
    }

    fn legal_moves(&self, player: Player) -> Vec<(usize, usize)> {
        let (row, col) = self.locations[player.index()];
        KNIGHT_DELTAS
            .iter()
            .map(|&(dr, dc)| (row as i64 + dr, col as i64 + dc))
            .filter(|&(r, c)| self.is_open(r, c))
            .map(|(r, c)| (r as usize, c as usize))
            .collect()
    }

    fn forecast_move(&self, m: (usize, usize)) -> Board {
        let mut next = self.clone();
        next.block(m);
        next.locations[self.active.index()] = m;
        next.active = self.active.other();
        next
    }

    fn is_winner(&self, player: Player) -> bool {
        self.is_loser(player.other())
    }

    fn is_loser(&self, player: Player) -> bool {
        player == self.active && self.legal_moves(player).is_empty()
    }

    fn player_location(&self, player: Player) -> (usize, usize) {
        self.locations[player.index()]
    }

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let square = if self.locations[0] == (row, col) {
                    '1'
                } else if self.locations[1] == (row, col) {
                    '2'
                } else if self.blocked[self.index(row, col)] {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{}", square)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
