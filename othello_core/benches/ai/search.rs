//! `othello_core::ai::search` の性能計測（幅・深さごとの1手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use othello_core::ai::types::Ai;
use othello_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 序盤を少し進めた局面（ランダム 10 手）。
fn midgame_sample() -> engine::Game {
    let mut agent = ai::random::Agent::new(u64::MIN);
    let mut game = engine::Game::new();
    for _turn in 0_u8..10 {
        let mv = agent.select_move(&game);
        if game.play(mv.square()).is_err() {
            break;
        }
    }
    game
}

/// `search::ai_move` を計測する。
fn bench_ai_move(criterion: &mut Criterion) {
    let game = midgame_sample();
    let mut group = criterion.benchmark_group("ai/search/ai_move");

    for (breadth, depth) in [(0_u8, 0_u8), (5, 0), (2, 3), (3, 4), (5, 3)] {
        let config = ai::SearchConfig::new(breadth, depth);
        let bench_id = BenchmarkId::new("breadth_depth", format!("{breadth}x{depth}"));
        group.bench_with_input(bench_id, &config, |bench, input| {
            bench.iter(|| black_box(ai::search::ai_move(&game, *input)));
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_ai_move(&mut criterion);
    criterion.final_summary();
}
