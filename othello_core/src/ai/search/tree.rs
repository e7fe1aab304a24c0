use tracing::debug;

use crate::ai::types::Move;
use crate::engine::board::Board;
use crate::engine::capture::{apply_move, revert_move};
use crate::engine::scorer::{ScoredMove, score_all_moves};
use crate::engine::types::Color;

use super::config::SearchConfig;
use super::context::{SearchContext, SearchStats};

/// 探索結果。
#[derive(Clone, Copy, Debug)]
pub struct SearchResult {
    /// ルートで選択した最善手。
    best_move: Move,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchResult {
    /// ルートで選択した最善手を返す。
    #[inline]
    #[must_use]
    pub const fn best_move(self) -> Move {
        self.best_move
    }

    /// 探索統計を返す。
    #[inline]
    #[must_use]
    pub const fn stats(self) -> SearchStats {
        self.stats
    }
}

/// ルート探索。
///
/// 盤面上で試し手を打っては戻すため `board` を可変で借りるが、戻るときには元の盤面に戻っている。
/// 選んだ手の `score` は正味の優位、`captured` はその手で反転する石の数。
#[inline]
pub fn search_root(board: &mut Board, color: Color, config: SearchConfig) -> SearchResult {
    let mut ctx = SearchContext::new(config);
    let best_move = search(board, color, u8::MIN, &mut ctx);
    let stats = ctx.stats();

    debug!(
        ?color,
        breadth = config.breadth(),
        depth = config.depth(),
        nodes = stats.nodes(),
        max_level = stats.max_level(),
        chosen = ?best_move.square().map(|sq| sq.to_string()),
        net = best_move.score(),
        "search finished"
    );

    SearchResult { best_move, stats }
}

/// 幅・深さ制限付きの再帰探索。
///
/// 候補を評価値順に並べて上位だけ残し、深さ制限に達したら最も評価値の高い手を返す。
/// それ以外は各候補を打って相手の最善応手を再帰で求め、`候補の評価値 - 応手の評価値` が
/// 最大の手を選ぶ。手番の偶奇で符号は変えない。
pub(super) fn search(board: &mut Board, color: Color, level: u8, ctx: &mut SearchContext) -> Move {
    ctx.stats_mut().visit(level);

    let mut moves = score_all_moves(board, color);
    if moves.is_empty() {
        return Move::Pass;
    }

    let keep = ctx.config().breadth_count(moves.len());
    let candidates = moves.split_off(moves.len().saturating_sub(keep));

    if level.saturating_add(1) > ctx.config().depth() {
        return candidates.last().copied().map_or(Move::Pass, Move::Place);
    }

    let mut best: Option<ScoredMove> = None;
    for candidate in candidates.iter().rev() {
        let flipped = apply_move(board, candidate.square, color);
        let reply = search(board, color.swap(), level.saturating_add(1), ctx);
        revert_move(board, candidate.square, color, flipped);

        let net = candidate.score.saturating_sub(reply.score());
        if best.is_none_or(|current| net > current.score) {
            best = Some(ScoredMove {
                score: net,
                ..*candidate
            });
        }
    }

    best.map_or(Move::Pass, Move::Place)
}
