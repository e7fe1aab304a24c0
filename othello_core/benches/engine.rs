//! `othello_core::engine` の性能計測（合法手の評価、着手と取り消し）。

use core::hint::black_box;
use criterion::BatchSize;
use criterion::Criterion;
use othello_core::engine;
use othello_core::engine::capture;

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 初期局面（黒番）での代表的な合法手を返す。
const fn initial_black_move_square() -> Option<engine::Square> {
    engine::Square::from_row_col(2, 3)
}

/// `capture::apply_move` と `capture::revert_move` の組を計測する。
fn bench_apply_revert(criterion: &mut Criterion) {
    let Some(square) = initial_black_move_square() else {
        return;
    };

    criterion.bench_function("engine/apply_revert_initial", |bench| {
        bench.iter_batched(
            engine::Board::initial,
            |mut board| {
                let flipped = capture::apply_move(&mut board, square, engine::Color::Black);
                capture::revert_move(&mut board, square, engine::Color::Black, flipped);
                black_box(board)
            },
            BatchSize::SmallInput,
        );
    });
}

/// `scorer::score_all_moves` を計測する。
fn bench_score_all_moves(criterion: &mut Criterion) {
    criterion.bench_function("engine/score_all_moves_initial", |bench| {
        bench.iter(|| {
            black_box(engine::scorer::score_all_moves(
                &engine::Board::initial(),
                engine::Color::Black,
            ))
        });
    });
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();

    bench_apply_revert(&mut criterion);
    bench_score_all_moves(&mut criterion);

    criterion.final_summary();
}
