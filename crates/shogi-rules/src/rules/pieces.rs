//! 駒種ごとの移動判定
//!
//! どの関数も盤面・手番・移動元・移動先を受け取り、その駒の動きとして
//! 可能かどうかだけを返す。移動先の駒（自駒・敵駒）は見ない。
//! 遠方駒以外は盤面を参照しない。

use super::path::is_path_clear;
use crate::board::Board;
use crate::types::{Color, Square};

/// 移動判定関数の型
pub type Predicate = fn(&Board, Color, Square, Square) -> bool;

/// 手番から見た (前方向の行差分, 列差分)
///
/// 先手・後手どちらでも「前」が正になるように行差分の符号を揃える。
#[inline]
fn relative_delta(color: Color, from: Square, to: Square) -> (i8, i8) {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    (d_row * color.forward(), d_col)
}

/// 周囲1マス（同一升は除く）
#[inline]
fn is_king_step(from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).abs();
    let d_col = (to.col() as i8 - from.col() as i8).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

/// 玉
pub fn king(_board: &Board, _color: Color, from: Square, to: Square) -> bool {
    is_king_step(from, to)
}

/// 金（成銀・と・成香・成桂も同じ）
///
/// 縦横1マスと斜め前1マス。斜め後ろには動けない。
pub fn gold(_board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (fwd, side) = relative_delta(color, from, to);
    matches!((fwd, side.abs()), (1, 0) | (1, 1) | (0, 1) | (-1, 0))
}

/// 銀
///
/// 前1マスと斜め4方向1マス。
pub fn silver(_board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (fwd, side) = relative_delta(color, from, to);
    matches!((fwd, side.abs()), (1, 0) | (1, 1) | (-1, 1))
}

/// 桂
///
/// 2マス前の左右1列。間の駒は飛び越える。
pub fn knight(_board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (fwd, side) = relative_delta(color, from, to);
    fwd == 2 && side.abs() == 1
}

/// 歩
pub fn pawn(_board: &Board, color: Color, from: Square, to: Square) -> bool {
    relative_delta(color, from, to) == (1, 0)
}

/// 香
pub fn lance(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let (fwd, side) = relative_delta(color, from, to);
    side == 0 && fwd > 0 && is_path_clear(board, from, to)
}

/// 飛
pub fn rook(board: &Board, _color: Color, from: Square, to: Square) -> bool {
    let straight = (from.row() == to.row()) != (from.col() == to.col());
    straight && is_path_clear(board, from, to)
}

/// 角
pub fn bishop(board: &Board, _color: Color, from: Square, to: Square) -> bool {
    let d_row = (to.row() as i8 - from.row() as i8).abs();
    let d_col = (to.col() as i8 - from.col() as i8).abs();
    d_row == d_col && d_row > 0 && is_path_clear(board, from, to)
}

/// 龍（成飛）: 飛の動き + 周囲1マス
pub fn dragon(board: &Board, color: Color, from: Square, to: Square) -> bool {
    rook(board, color, from, to) || is_king_step(from, to)
}

/// 馬（成角）: 角の動き + 周囲1マス
pub fn horse(board: &Board, color: Color, from: Square, to: Square) -> bool {
    bishop(board, color, from, to) || is_king_step(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceType};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    /// 空盤上で (4,4) から動ける升目を列挙
    fn reachable(pred: Predicate, color: Color) -> Vec<(i8, i8)> {
        let board = Board::empty();
        let from = sq(4, 4);
        let mut out: Vec<(i8, i8)> = Square::all()
            .filter(|&to| pred(&board, color, from, to))
            .map(|to| (to.row() as i8 - 4, to.col() as i8 - 4))
            .collect();
        out.sort();
        out
    }

    #[test]
    fn test_king_steps() {
        let moves = reachable(king, Color::Sente);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&(0, 0)));
    }

    #[test]
    fn test_gold_sente_and_gote() {
        assert_eq!(
            reachable(gold, Color::Sente),
            vec![(-1, 0), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)]
        );
        assert_eq!(
            reachable(gold, Color::Gote),
            vec![(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0)]
        );
    }

    #[test]
    fn test_silver_sente_and_gote() {
        assert_eq!(
            reachable(silver, Color::Sente),
            vec![(-1, -1), (-1, 1), (1, -1), (1, 0), (1, 1)]
        );
        assert_eq!(
            reachable(silver, Color::Gote),
            vec![(-1, -1), (-1, 0), (-1, 1), (1, -1), (1, 1)]
        );
    }

    #[test]
    fn test_knight_and_pawn() {
        assert_eq!(reachable(knight, Color::Sente), vec![(2, -1), (2, 1)]);
        assert_eq!(reachable(knight, Color::Gote), vec![(-2, -1), (-2, 1)]);
        assert_eq!(reachable(pawn, Color::Sente), vec![(1, 0)]);
        assert_eq!(reachable(pawn, Color::Gote), vec![(-1, 0)]);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let blocker = Piece::new(Color::Gote, PieceType::Pawn);
        let board = Board::empty()
            .with_piece(sq(5, 4), blocker)
            .with_piece(sq(6, 4), blocker)
            .with_piece(sq(5, 5), blocker);
        assert!(knight(&board, Color::Sente, sq(4, 4), sq(6, 5)));
    }

    #[test]
    fn test_lance_forward_only() {
        let sente = reachable(lance, Color::Sente);
        assert_eq!(sente, vec![(1, 0), (2, 0), (3, 0), (4, 0)]);
        let gote = reachable(lance, Color::Gote);
        assert_eq!(gote, vec![(-4, 0), (-3, 0), (-2, 0), (-1, 0)]);
    }

    #[test]
    fn test_rook_and_bishop_counts() {
        assert_eq!(reachable(rook, Color::Sente).len(), 16);
        assert_eq!(reachable(bishop, Color::Sente).len(), 16);
        // 龍・馬は周囲1マスが加わる
        assert_eq!(reachable(dragon, Color::Sente).len(), 20);
        assert_eq!(reachable(horse, Color::Gote).len(), 20);
    }

    #[test]
    fn test_sliders_blocked() {
        let blocker = Piece::new(Color::Sente, PieceType::Pawn);
        let board = Board::empty().with_piece(sq(4, 6), blocker).with_piece(sq(6, 6), blocker);

        assert!(rook(&board, Color::Sente, sq(4, 4), sq(4, 6)));
        assert!(!rook(&board, Color::Sente, sq(4, 4), sq(4, 7)));
        assert!(bishop(&board, Color::Gote, sq(4, 4), sq(6, 6)));
        assert!(!bishop(&board, Color::Gote, sq(4, 4), sq(7, 7)));
        // 龍は遮られても周囲1マスには動ける
        assert!(dragon(&board, Color::Sente, sq(5, 6), sq(4, 5)));
    }
}
