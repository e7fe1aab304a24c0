use crate::engine::board::{Board, position_weight};
use crate::engine::capture::{evaluate_cell, legal_moves};
use crate::engine::types::{Color, Square};

/// 評価値付きの合法手。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ScoredMove {
    /// 反転する石の数。
    pub captured: u32,
    /// 評価値。通常は `captured + 位置ボーナス`、探索のルートでは正味の優位。
    pub score: i32,
    /// 着手するマス。
    pub square: Square,
}

impl ScoredMove {
    /// `square` に打つ手を、反転数と位置ボーナスから評価する。
    #[inline]
    #[must_use]
    pub fn new(square: Square, captured: u32) -> Self {
        let base = i32::try_from(captured).unwrap_or(i32::MAX);
        Self {
            captured,
            score: base.saturating_add(position_weight(square)),
            square,
        }
    }
}

/// 指定色の全合法手を評価値の昇順で返す。
///
/// 同点は行優先の順序を保つ（安定ソート）。空なら合法手なし（パス）。
#[inline]
#[must_use]
pub fn score_all_moves(board: &Board, color: Color) -> Vec<ScoredMove> {
    let mut moves: Vec<ScoredMove> = Square::iter_bits(legal_moves(board, color))
        .filter_map(|square| {
            let captured = evaluate_cell(board, square, color);
            (captured != u32::MIN).then(|| ScoredMove::new(square, captured))
        })
        .collect();

    moves.sort_by_key(|mv| mv.score);
    moves
}

#[cfg(test)]
mod tests {
    use super::score_all_moves;
    use crate::engine::board::{Board, position_weight};
    use crate::engine::capture::evaluate_cell;
    use crate::engine::types::{Cell, Color, Square};

    #[test]
    fn opening_has_four_moves_with_one_capture() {
        let moves = score_all_moves(&Board::initial(), Color::Black);
        let mut squares: Vec<(u8, u8)> = moves
            .iter()
            .map(|mv| (mv.square.row(), mv.square.col()))
            .collect();
        squares.sort_unstable();

        assert_eq!(squares, vec![(2, 3), (3, 2), (4, 5), (5, 4)]);
        assert!(moves.iter().all(|mv| mv.captured == 1));
        assert!(moves.iter().all(|mv| mv.score == 1));
    }

    #[test]
    fn moves_are_sorted_ascending_by_score() {
        let mut board = Board::initial();
        board.set_cell(
            Square::from_row_col(2, 3).unwrap_or(Square::from_index_unchecked(0)),
            Cell::Black,
        );
        board.set_cell(
            Square::from_row_col(3, 3).unwrap_or(Square::from_index_unchecked(0)),
            Cell::Black,
        );

        let moves = score_all_moves(&board, Color::White);
        assert!(!moves.is_empty());
        for pair in moves.windows(2) {
            if let [lhs, rhs] = pair {
                assert!(lhs.score <= rhs.score);
            }
        }
        for mv in &moves {
            let expected = i32::try_from(evaluate_cell(&board, mv.square, Color::White))
                .unwrap_or(i32::MAX)
                + position_weight(mv.square);
            assert_eq!(mv.score, expected);
        }
    }

    #[test]
    fn full_board_has_no_moves() {
        let board = Board::from_bits(u64::MAX, u64::MIN);
        assert!(score_all_moves(&board, Color::White).is_empty());
        assert!(score_all_moves(&board, Color::Black).is_empty());
    }
}
