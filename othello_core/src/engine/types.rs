/// 手番（石の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 先手。
    Black,
    /// 後手。
    White,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn swap(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

/// マスの中身。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Cell {
    /// 黒石。
    Black,
    /// 空きマス。
    Empty,
    /// 白石。
    White,
}

impl From<Color> for Cell {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}

/// 盤面上のマス（`row * 8 + col` の 0..=63）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Square(
    /// `row * 8 + col` に対応する0..=63の値。
    u8,
);

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// マスの総数。
    pub const COUNT: u8 = 64;

    /// そのマスを表すビット（`u64`）を返す。
    #[inline]
    #[must_use]
    pub fn bit(self) -> u64 {
        let one = u64::MIN.wrapping_add(1);
        one.checked_shl(u32::from(self.0)).unwrap_or(u64::MIN)
    }

    /// 列（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        match self.0.checked_rem(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// インデックスから `Square` を生成する（範囲チェックなし）。
    #[inline]
    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }

    /// 1ビットだけ立ったビットボードから `Square` を生成する。
    #[inline]
    #[must_use]
    pub fn from_bit(bit: u64) -> Option<Self> {
        if bit == u64::MIN {
            return None;
        }

        u8::try_from(bit.trailing_zeros()).ok().map(Self)
    }

    /// 行・列から `Square` を生成する（盤外なら `None`）。
    #[inline]
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Option<Self> {
        if row >= Self::BOARD_LEN || col >= Self::BOARD_LEN {
            return None;
        }

        let base = match row.checked_mul(Self::BOARD_LEN) {
            Some(value) => value,
            None => return None,
        };

        match base.checked_add(col) {
            Some(value) => Some(Self(value)),
            None => None,
        }
    }

    /// 0..=63 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// 行（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        match self.0.checked_div(Self::BOARD_LEN) {
            Some(value) => value,
            None => u8::MIN,
        }
    }

    /// ビットボード中の各マスを行優先（インデックス昇順）で返す。
    #[inline]
    pub fn iter_bits(bits: u64) -> impl Iterator<Item = Self> {
        let mut rest = bits;
        core::iter::from_fn(move || {
            let lowest = rest & rest.wrapping_neg();
            rest &= rest.wrapping_sub(1);
            Self::from_bit(lowest)
        })
    }
}

impl core::fmt::Display for Square {
    /// `d3` 形式（列を a..h、行を 1..8）で表示する。
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let file = char::from(b'a'.wrapping_add(self.col()));
        let rank = self.row().wrapping_add(1);
        write!(f, "{file}{rank}")
    }
}

/// 石数の組（黒、白）。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Score {
    /// 黒の石数。
    pub black: u32,
    /// 白の石数。
    pub white: u32,
}

impl Score {
    /// 初期局面の石数（2, 2）。
    pub const INITIAL: Self = Self { black: 2, white: 2 };

    /// `captured` 個を相手から奪い、置いた1石を加える。
    #[inline]
    #[must_use]
    pub const fn after_move(self, mover: Color, captured: u32) -> Self {
        let gain = captured.saturating_add(1);
        match mover {
            Color::Black => Self {
                black: self.black.saturating_add(gain),
                white: self.white.saturating_sub(captured),
            },
            Color::White => Self {
                black: self.black.saturating_sub(captured),
                white: self.white.saturating_add(gain),
            },
        }
    }

    /// 指定色の石数を返す。
    #[inline]
    #[must_use]
    pub const fn of(self, color: Color) -> u32 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    /// 盤上の石の総数を返す。
    #[inline]
    #[must_use]
    pub const fn total(self) -> u32 {
        self.black.saturating_add(self.white)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Score, Square};

    #[test]
    fn square_round_trips_row_and_col() {
        let square = Square::from_row_col(5, 4);
        assert_eq!(square.map(Square::index), Some(44));
        assert_eq!(square.map(Square::row), Some(5));
        assert_eq!(square.map(Square::col), Some(4));
        assert_eq!(Square::from_row_col(8, 0), None);
        assert_eq!(Square::from_row_col(0, 8), None);
    }

    #[test]
    fn iter_bits_yields_row_major_order() {
        let bits = (1_u64 << 44) | (1_u64 << 19) | (1_u64 << 26);
        let indices: Vec<u8> = Square::iter_bits(bits).map(Square::index).collect();
        assert_eq!(indices, vec![19, 26, 44]);
    }

    #[test]
    fn square_displays_in_algebraic_form() {
        let square = Square::from_row_col(2, 3);
        assert_eq!(square.map(|sq| sq.to_string()), Some("d3".to_owned()));
    }

    #[test]
    fn score_after_move_transfers_captures() {
        let score = Score::INITIAL.after_move(Color::Black, 1);
        assert_eq!(score, Score { black: 4, white: 1 });
        assert_eq!(score.total(), 5);

        let score = score.after_move(Color::White, 2);
        assert_eq!(score, Score { black: 2, white: 4 });
        assert_eq!(score.of(Color::White), 4);
    }

    #[test]
    fn swap_toggles_color() {
        assert_eq!(Color::Black.swap(), Color::White);
        assert_eq!(Color::White.swap(), Color::Black);
    }
}
