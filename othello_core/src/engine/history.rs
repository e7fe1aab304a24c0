use tracing::trace;

use crate::engine::board::Board;
use crate::engine::types::{Color, Score};

/// 履歴の1エントリ（盤面、次の手番、石数）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Snapshot {
    /// 盤面。
    pub board: Board,
    /// このエントリ直後の手番。
    pub side_to_move: Color,
    /// 石数。
    pub score: Score,
}

/// 線形の undo/redo 履歴。
///
/// `cursor` は現在のエントリ、`entries` の末尾が redo できる最新のエントリ。
/// 空のとき `cursor` は `None`。
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct History {
    /// 現在位置。
    cursor: Option<usize>,
    /// 保存済みのエントリ。
    entries: Vec<Snapshot>,
}

impl History {
    /// 現在位置のエントリを返す。
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.and_then(|index| self.entries.get(index))
    }

    /// 現在位置（0 始まり）を返す。
    #[inline]
    #[must_use]
    pub const fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// 空の履歴を生成する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cursor: None,
            entries: Vec::new(),
        }
    }

    /// 1つ先へ進め、そのエントリを返す。最新なら何もせず `None`。
    #[inline]
    pub fn redo(&mut self) -> Option<Snapshot> {
        let Some(next) = self.cursor.and_then(|index| index.checked_add(1)) else {
            return None;
        };
        let Some(entry) = self.entries.get(next).copied() else {
            return None;
        };
        self.cursor = Some(next);
        trace!(cursor = next, top = ?self.top(), "history redo");
        Some(entry)
    }

    /// redo 可能な部分を捨ててから、エントリを追加して現在位置にする。
    #[inline]
    pub fn save(&mut self, board: Board, side_to_move: Color, score: Score) {
        let keep = self.cursor.map_or(0, |index| index.saturating_add(1));
        self.entries.truncate(keep);
        self.entries.push(Snapshot {
            board,
            side_to_move,
            score,
        });
        self.cursor = self.top();
        trace!(cursor = ?self.cursor, "history save");
    }

    /// 最新エントリの位置を返す。
    #[inline]
    #[must_use]
    pub fn top(&self) -> Option<usize> {
        self.entries.len().checked_sub(1)
    }

    /// 1つ戻り、そのエントリを返す。
    ///
    /// 最古のエントリにいる場合は位置を変えずに最古のエントリを返す。空なら `None`。
    #[inline]
    pub fn undo(&mut self) -> Option<Snapshot> {
        let Some(index) = self.cursor.map(|current| current.saturating_sub(1)) else {
            return None;
        };
        let Some(entry) = self.entries.get(index).copied() else {
            return None;
        };
        self.cursor = Some(index);
        trace!(cursor = index, top = ?self.top(), "history undo");
        Some(entry)
    }
}
