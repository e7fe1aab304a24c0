use crate::ai::types::{Ai, Move};
use crate::engine::game::Game;

/// 探索の幅・深さの設定。
pub mod config;
/// 探索中の統計と共有状態。
pub mod context;
/// 再帰探索本体。
pub mod tree;


use config::SearchConfig;

/// 幅・深さ制限付きの再帰探索で手を選ぶAI。
#[derive(Debug)]
#[non_exhaustive]
pub struct Agent {
    /// 探索設定。
    config: SearchConfig,
}

impl Agent {
    /// 探索設定を返す。
    #[inline]
    #[must_use]
    pub const fn config(&self) -> SearchConfig {
        self.config
    }

    /// `config` を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn new(config: SearchConfig) -> Self {
        Self { config }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, game: &Game) -> Move {
        ai_move(game, self.config)
    }
}

/// 現手番の手を探索で選ぶ。合法手が無ければ `Move::Pass`。
///
/// 探索は盤面のコピー上で行い、ゲームの状態や履歴には触れない。
#[inline]
#[must_use]
pub fn ai_move(game: &Game, config: SearchConfig) -> Move {
    let mut scratch = game.board();
    tree::search_root(&mut scratch, game.side_to_move(), config).best_move()
}
