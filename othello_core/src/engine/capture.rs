//! 石の反転（キャプチャ）の計算と適用。
//!
//! 各方向の走査は盤端のマスクでシフトを打ち切るため、盤外を読むことはない。

use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 列 0 のマスク。
const COL_FIRST: u64 = 0x0101_0101_0101_0101;

/// 列 7 のマスク。
const COL_LAST: u64 = 0x8080_8080_8080_8080;

/// 1方向に並びうる相手石の最大数（6）から初回分を除いた拡張回数。
const SPREAD_STEPS: u8 = 5;

/// 8方向のシフト。
const DIRECTIONS: [fn(u64) -> u64; 8] = [
    step_up,
    step_up_left,
    step_up_right,
    step_left,
    step_right,
    step_down,
    step_down_left,
    step_down_right,
];

/// 1手で反転した石の集合。`revert_move` に渡すと着手前に戻せる。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Flips(
    /// 反転したマスのビットボード。
    u64,
);

impl Flips {
    /// 反転したマスのビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// 反転した石の数を返す。
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// 1つも反転していないかを返す。
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == u64::MIN
    }
}

/// `color` が `square` に打った場合に反転する石の数を返す（盤面は変更しない）。
///
/// `square` が空きマスでなければ 0。
#[inline]
#[must_use]
pub fn evaluate_cell(board: &Board, square: Square, color: Color) -> u32 {
    if board.occupied() & square.bit() != u64::MIN {
        return u32::MIN;
    }

    flips(board, square, color).count()
}

/// `square` に `color` の石を置き、挟んだ相手石をすべて反転する。
///
/// 盤端や空きマスで途切れる方向は反転しない。戻り値を `revert_move` に渡すと元に戻る。
#[inline]
pub fn apply_move(board: &mut Board, square: Square, color: Color) -> Flips {
    let flipped = flips(board, square, color);
    board.set_bits(color, square.bit() | flipped.bits());
    flipped
}

/// `apply_move` の逆操作。置いた石を取り除き、反転した石を相手色へ戻す。
#[inline]
pub fn revert_move(board: &mut Board, square: Square, color: Color, flipped: Flips) {
    board.clear_bits(square.bit());
    board.set_bits(color.swap(), flipped.bits());
}

/// 指定色の合法手（1つ以上反転できる空きマス）のビットボードを返す。
#[inline]
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> u64 {
    let player = board.bits(color);
    let opponent = board.bits(color.swap());
    let empty = board.empty();

    DIRECTIONS.iter().fold(u64::MIN, |acc, &step| {
        let first = step(player) & opponent;
        if first == u64::MIN {
            return acc;
        }
        acc | (step(spread(first, opponent, step)) & empty)
    })
}

/// 反転させる石の集合を返す（全方向）。
fn flips(board: &Board, square: Square, color: Color) -> Flips {
    let player = board.bits(color);
    let opponent = board.bits(color.swap());
    let origin = square.bit();

    let bits = DIRECTIONS.iter().fold(u64::MIN, |acc, &step| {
        acc | flips_toward(player, opponent, origin, step)
    });
    Flips(bits)
}

/// 1方向に連続する相手石が自分の石で閉じていれば、その連続部分を返す。
fn flips_toward(player: u64, opponent: u64, origin: u64, step: fn(u64) -> u64) -> u64 {
    let first = step(origin) & opponent;
    if first == u64::MIN {
        return u64::MIN;
    }

    let run = spread(first, opponent, step);
    if step(run) & player == u64::MIN {
        return u64::MIN;
    }
    run
}

/// 相手石が続く限り `step` 方向へ伸ばす（Kogge-Stone）。
fn spread(mut run: u64, opponent: u64, step: fn(u64) -> u64) -> u64 {
    for _ in u8::MIN..SPREAD_STEPS {
        run |= step(run) & opponent;
    }
    run
}

/// row - 1。
#[inline]
const fn step_up(bb: u64) -> u64 {
    bb.wrapping_shr(8)
}

/// row - 1, col - 1。
#[inline]
const fn step_up_left(bb: u64) -> u64 {
    (bb & !COL_FIRST).wrapping_shr(9)
}

/// row - 1, col + 1。
#[inline]
const fn step_up_right(bb: u64) -> u64 {
    (bb & !COL_LAST).wrapping_shr(7)
}

/// col - 1。
#[inline]
const fn step_left(bb: u64) -> u64 {
    (bb & !COL_FIRST).wrapping_shr(1)
}

/// col + 1。
#[inline]
const fn step_right(bb: u64) -> u64 {
    (bb & !COL_LAST).wrapping_shl(1)
}

/// row + 1。
#[inline]
const fn step_down(bb: u64) -> u64 {
    bb.wrapping_shl(8)
}

/// row + 1, col - 1。
#[inline]
const fn step_down_left(bb: u64) -> u64 {
    (bb & !COL_FIRST).wrapping_shl(7)
}

/// row + 1, col + 1。
#[inline]
const fn step_down_right(bb: u64) -> u64 {
    (bb & !COL_LAST).wrapping_shl(9)
}
