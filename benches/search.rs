#[macro_use]
extern crate bencher;

use std::time::Duration;

use bencher::Bencher;
use deadline_minimax::isolation::Board;
use deadline_minimax::{FixedRemaining, GameState, Mobility, Searcher, LOSS, WIN};

fn bench_minimax(b: &mut Bencher) {
    let board = Board::new(7, 7);
    let clock = FixedRemaining(Duration::from_secs(3600));
    b.iter(|| {
        let searcher = Searcher::new(&Mobility, &clock, Duration::ZERO);
        let (_, m) = searcher.minimax(&board, 4, true).unwrap();
        assert!(m.is_some());
    });
}

fn bench_alphabeta(b: &mut Bencher) {
    let board = Board::new(7, 7);
    let clock = FixedRemaining(Duration::from_secs(3600));
    b.iter(|| {
        let searcher = Searcher::new(&Mobility, &clock, Duration::ZERO);
        let (_, m) = searcher.alphabeta(&board, 4, LOSS, WIN, true).unwrap();
        assert!(m.is_some());
    });
}

fn bench_midgame_alphabeta(b: &mut Bencher) {
    // Walk a few plies in so both players have full knight mobility.
    let mut board = Board::new(7, 7);
    for _ in 0..4 {
        let moves = board.legal_moves(board.active_player());
        board = board.forecast_move(moves[0]);
    }
    let clock = FixedRemaining(Duration::from_secs(3600));
    b.iter(|| {
        let searcher = Searcher::new(&Mobility, &clock, Duration::ZERO);
        let (_, m) = searcher.alphabeta(&board, 4, LOSS, WIN, true).unwrap();
        assert!(m.is_some());
    });
}

benchmark_group!(benches, bench_minimax, bench_alphabeta, bench_midgame_alphabeta);
benchmark_main!(benches);
