use crate::engine::types::{Cell, Color, Score, Square};

/// 初期配置（黒）: (3, 4) と (4, 3)。
const START_BLACK: u64 = (1 << 28) | (1 << 35);

/// 初期配置（白）: (3, 3) と (4, 4)。
const START_WHITE: u64 = (1 << 27) | (1 << 36);

/// マスごとの位置ボーナス。角が最も高く、角の隣は 0。
const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [8, 0, 3, 2, 2, 3, 0, 8],
    [0, 0, 2, 0, 0, 2, 0, 0],
    [3, 2, 4, 3, 3, 4, 2, 3],
    [2, 0, 3, 0, 0, 3, 0, 2],
    [2, 0, 3, 0, 0, 3, 0, 2],
    [3, 2, 4, 3, 3, 4, 2, 3],
    [0, 0, 2, 0, 0, 2, 0, 0],
    [8, 0, 3, 2, 2, 3, 0, 8],
];

/// 8x8 の盤面（色ごとのビットボード）。
///
/// 妥当性の検証はしない。`black & white == 0` などの不変条件は呼び出し側が守る。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 黒石のビットボード。
    black: u64,
    /// 白石のビットボード。
    white: u64,
}

impl Board {
    /// 指定色の石のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn bits(self, color: Color) -> u64 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// 指定マスの中身を返す。
    #[inline]
    #[must_use]
    pub fn cell(self, square: Square) -> Cell {
        let mask = square.bit();
        if self.black & mask != u64::MIN {
            Cell::Black
        } else if self.white & mask != u64::MIN {
            Cell::White
        } else {
            Cell::Empty
        }
    }

    /// 石数を返す。
    #[inline]
    #[must_use]
    pub const fn counts(self) -> Score {
        Score {
            black: self.black.count_ones(),
            white: self.white.count_ones(),
        }
    }

    /// 空きマスのビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn empty(self) -> u64 {
        !self.occupied()
    }

    /// 石の無い盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty_board() -> Self {
        Self {
            black: u64::MIN,
            white: u64::MIN,
        }
    }

    /// 生のビットボードから盤面を生成する（テスト・ベンチ向け）。
    ///
    /// `black` と `white` は重複しないこと。
    #[inline]
    #[must_use]
    pub const fn from_bits(black: u64, white: u64) -> Self {
        Self { black, white }
    }

    /// 初期局面を返す。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            black: START_BLACK,
            white: START_WHITE,
        }
    }

    /// 盤面の占有ビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn occupied(self) -> u64 {
        self.black | self.white
    }

    /// 指定マスを書き換える。
    #[inline]
    pub fn set_cell(&mut self, square: Square, cell: Cell) {
        let mask = square.bit();
        self.black &= !mask;
        self.white &= !mask;
        match cell {
            Cell::Black => self.black |= mask,
            Cell::White => self.white |= mask,
            Cell::Empty => {}
        }
    }

    /// 指定色の石を `mask` の全マスに置く（既存の石は上書き）。
    #[inline]
    pub(crate) const fn set_bits(&mut self, color: Color, mask: u64) {
        match color {
            Color::Black => {
                self.black |= mask;
                self.white &= !mask;
            }
            Color::White => {
                self.white |= mask;
                self.black &= !mask;
            }
        }
    }

    /// `mask` の全マスを空にする。
    #[inline]
    pub(crate) const fn clear_bits(&mut self, mask: u64) {
        self.black &= !mask;
        self.white &= !mask;
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl core::fmt::Display for Board {
    /// 1行1列ずつ `X`（黒）/`O`（白）/`.`（空き）で表示する。
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut text = String::from("  a b c d e f g h\n");
        for row in 0..Square::BOARD_LEN {
            text.push(char::from(b'1'.wrapping_add(row)));
            for col in 0..Square::BOARD_LEN {
                let glyph = match Square::from_row_col(row, col).map(|sq| self.cell(sq)) {
                    Some(Cell::Black) => 'X',
                    Some(Cell::White) => 'O',
                    _ => '.',
                };
                text.push(' ');
                text.push(glyph);
            }
            text.push('\n');
        }
        f.write_str(&text)
    }
}

/// 位置ボーナスを返す。
#[inline]
#[must_use]
pub fn position_weight(square: Square) -> i32 {
    POSITION_WEIGHTS
        .get(usize::from(square.row()))
        .and_then(|row| row.get(usize::from(square.col())))
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{Board, position_weight};
    use crate::engine::types::{Cell, Score, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::from_row_col(row, col).unwrap_or(Square::from_index_unchecked(0))
    }

    #[test]
    fn initial_board_has_standard_opening() {
        let board = Board::initial();
        assert_eq!(board.cell(sq(3, 3)), Cell::White);
        assert_eq!(board.cell(sq(4, 4)), Cell::White);
        assert_eq!(board.cell(sq(3, 4)), Cell::Black);
        assert_eq!(board.cell(sq(4, 3)), Cell::Black);
        assert_eq!(board.cell(sq(0, 0)), Cell::Empty);
        assert_eq!(board.counts(), Score::INITIAL);
    }

    #[test]
    fn set_cell_overwrites_and_clears() {
        let mut board = Board::initial();
        board.set_cell(sq(3, 3), Cell::Black);
        assert_eq!(board.cell(sq(3, 3)), Cell::Black);
        assert_eq!(board.counts(), Score { black: 3, white: 1 });

        board.set_cell(sq(3, 3), Cell::Empty);
        assert_eq!(board.cell(sq(3, 3)), Cell::Empty);
        assert_eq!(board.occupied().count_ones(), 3);
    }

    #[test]
    fn corners_carry_the_highest_weight() {
        let corners = [sq(0, 0), sq(0, 7), sq(7, 0), sq(7, 7)];
        for corner in corners {
            assert_eq!(position_weight(corner), 8);
        }
        assert_eq!(position_weight(sq(1, 1)), 0);
        assert_eq!(position_weight(sq(0, 1)), 0);
        assert_eq!(position_weight(sq(2, 2)), 4);
    }

    #[test]
    fn display_renders_grid() {
        let text = Board::initial().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines.first().copied(), Some("  a b c d e f g h"));
        assert_eq!(lines.get(1).copied(), Some("1 . . . . . . . ."));
        assert!(text.ends_with("8 . . . . . . . .\n"));
        assert_eq!(lines.get(4).copied(), Some("4 . . . O X . . ."));
        assert_eq!(lines.get(5).copied(), Some("5 . . . X O . . ."));
    }
}
