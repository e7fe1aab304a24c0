use tracing::{debug, info};

use crate::engine::board::Board;
use crate::engine::capture::{apply_move, evaluate_cell, legal_moves};
use crate::engine::history::{History, Snapshot};
use crate::engine::scorer::{ScoredMove, score_all_moves};
use crate::engine::types::{Color, Score, Square};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局。
    GameOver {
        /// 黒の石数。
        black: u32,
        /// 白の石数。
        white: u32,
    },
    /// 進行中。
    InProgress,
}

impl Status {
    /// 終局していれば勝敗を返す。
    #[inline]
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::GameOver { black, white } => Some(if black > white {
                Outcome::BlackWins
            } else if white > black {
                Outcome::WhiteWins
            } else {
                Outcome::Draw
            }),
            Self::InProgress => None,
        }
    }
}

/// 勝敗。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Outcome {
    /// 黒の勝ち。
    BlackWins,
    /// 引き分け。
    Draw,
    /// 白の勝ち。
    WhiteWins,
}

/// 手の適用（打つ/パス）に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// 指定マスが合法手ではない（空きでない、または1つも反転しない）。
    IllegalMove,
}

impl core::fmt::Display for PlayError {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::GameOver => write!(f, "the game is already over"),
            Self::IllegalMove => write!(f, "that square is not a legal move"),
        }
    }
}

impl core::error::Error for PlayError {}

/// 1ゲームの進行（盤面、手番、石数、履歴）を管理する構造体。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    board: Board,
    /// 打てずにパスした連続回数。
    consecutive_passes: u8,
    /// undo/redo 履歴。
    history: History,
    /// 現在の石数。
    score: Score,
    /// 現手番。
    side_to_move: Color,
}

impl Game {
    /// 現手番に合法手が無い場合、パスを自動適用する。
    ///
    /// - すでに終局している場合は何もしない（`false`）。
    /// - 合法手がある場合は何もしない（`false`）。
    /// - パスを適用できた場合は `true`。
    #[inline]
    pub fn auto_pass_if_needed(&mut self) -> bool {
        if self.is_game_over() || self.can_play_for(self.side_to_move) {
            return false;
        }

        self.play(None).is_ok()
    }

    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> Board {
        self.board
    }

    /// 指定色に合法手があるかを返す。
    #[inline]
    #[must_use]
    pub fn can_play_for(&self, color: Color) -> bool {
        legal_moves(&self.board, color) != u64::MIN
    }

    /// 履歴を返す。
    #[inline]
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// 終局しているかどうかを返す。
    ///
    /// 片方の石が 0、盤面が埋まった、または双方とも打てない（連続パス）場合に終局。
    #[inline]
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        let Score { black, white } = self.score;
        if black == u32::MIN || white == u32::MIN || self.score.total() >= u32::from(Square::COUNT)
        {
            return true;
        }

        if self.consecutive_passes >= 2 {
            return true;
        }

        !self.can_play_for(self.side_to_move) && !self.can_play_for(self.side_to_move.swap())
    }

    /// 現手番の合法手を評価値の昇順で返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> Vec<ScoredMove> {
        score_all_moves(&self.board, self.side_to_move)
    }

    /// 初期局面からゲームを開始し、最初のエントリを履歴に保存する。
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        let mut history = History::new();
        history.save(Board::initial(), Color::Black, Score::INITIAL);
        info!("new game");

        Self {
            board: Board::initial(),
            consecutive_passes: u8::MIN,
            history,
            score: Score::INITIAL,
            side_to_move: Color::Black,
        }
    }

    /// 1手（打つ/パス）を適用する。`None` はパス。
    ///
    /// 着手は石数を更新して履歴に保存する。パスは履歴に残さない。
    /// 合法手があるのにパスした場合（任意パス）は連続パスに数えない。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す（局面は変更しない）：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: 指定されたマスが合法手でない場合
    #[inline]
    pub fn play(&mut self, mv: Option<Square>) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        let mover = self.side_to_move;
        if let Some(square) = mv {
            let captured = evaluate_cell(&self.board, square, mover);
            if captured == u32::MIN {
                return Err(PlayError::IllegalMove);
            }

            let _flipped = apply_move(&mut self.board, square, mover);
            self.score = self.score.after_move(mover, captured);
            self.side_to_move = mover.swap();
            self.consecutive_passes = u8::MIN;
            self.history.save(self.board, self.side_to_move, self.score);
            debug!(?mover, %square, captured, black = self.score.black, white = self.score.white, "move played");
        } else {
            if !self.can_play_for(mover) {
                self.consecutive_passes = self.consecutive_passes.saturating_add(1);
            }
            self.side_to_move = mover.swap();
            debug!(?mover, passes = self.consecutive_passes, "pass");
        }

        let status = self.status();
        if let Status::GameOver { black, white } = status {
            info!(black, white, "game over");
        }
        Ok(status)
    }

    /// 履歴を1つ進める。進められなければ何もせず `false`。
    #[inline]
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(entry) => {
                self.restore(entry);
                true
            }
            None => false,
        }
    }

    /// 履歴のエントリを現在の状態へ書き戻す。
    fn restore(&mut self, entry: Snapshot) {
        self.board = entry.board;
        self.side_to_move = entry.side_to_move;
        self.score = entry.score;
        self.consecutive_passes = u8::MIN;
    }

    /// 現在の石数を返す。
    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_game_over() {
            let Score { black, white } = self.score;
            return Status::GameOver { black, white };
        }

        Status::InProgress
    }

    /// 履歴を1つ戻す。最古のエントリでは最古の状態を再適用する。
    ///
    /// 履歴が空なら何もせず `false`。
    #[inline]
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(entry) => {
                self.restore(entry);
                true
            }
            None => false,
        }
    }
}

impl Default for Game {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
