use crate::engine::game::Game;
use crate::engine::scorer::ScoredMove;
use crate::engine::types::Square;

/// AIが選択する手。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Move {
    /// パス（合法手なし）。
    Pass,
    /// 評価値付きの着手。
    Place(ScoredMove),
}

impl Move {
    /// 評価値を返す。パスは 0。
    #[inline]
    #[must_use]
    pub const fn score(self) -> i32 {
        match self {
            Self::Pass => 0,
            Self::Place(mv) => mv.score,
        }
    }

    /// 着手するマスを返す。パスは `None`（`Game::play` にそのまま渡せる）。
    #[inline]
    #[must_use]
    pub const fn square(self) -> Option<Square> {
        match self {
            Self::Pass => None,
            Self::Place(mv) => Some(mv.square),
        }
    }
}

/// 手を選択するAI。
pub trait Ai {
    /// 現在のゲームから次の手を選択する。ゲームの状態は変更しない。
    fn select_move(&mut self, game: &Game) -> Move;
}
