//! 指し手の合法判定
//!
//! 駒種と成りフラグの組から移動判定関数を引き、盤面を変えずに判定する。
//! 移動先に自駒があるかどうかはここでは見ない（`Session` 側で弾く）。
//! 王手放置などの局面全体に関わる判定は行わない。

mod path;
pub mod pieces;

pub use path::is_path_clear;
pub use pieces::Predicate;

use log::trace;

use crate::board::Board;
use crate::error::RuleError;
use crate::types::{Move, Piece, PieceType, Square};

/// (駒種, 成り) に対応する移動判定関数
///
/// 成銀・と・成香・成桂は金、龍・馬は飛・角に周囲1マスを加えた動き。
pub fn predicate_for(piece_type: PieceType, promoted: bool) -> Predicate {
    match (piece_type, promoted) {
        (PieceType::King, _) => pieces::king,
        (PieceType::Gold, _) => pieces::gold,
        (PieceType::Rook, false) => pieces::rook,
        (PieceType::Rook, true) => pieces::dragon,
        (PieceType::Bishop, false) => pieces::bishop,
        (PieceType::Bishop, true) => pieces::horse,
        (PieceType::Silver, false) => pieces::silver,
        (PieceType::Knight, false) => pieces::knight,
        (PieceType::Lance, false) => pieces::lance,
        (PieceType::Pawn, false) => pieces::pawn,
        (PieceType::Silver | PieceType::Knight | PieceType::Lance | PieceType::Pawn, true) => {
            pieces::gold
        }
    }
}

/// 駒 `piece` が `from` から `to` へ動けるか
pub fn can_move(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    predicate_for(piece.piece_type(), piece.is_promoted())(board, piece.color(), from, to)
}

/// 移動元の駒で指し手が可能か（移動元が空、または移動元と移動先が同じなら false）
pub fn is_legal_move(board: &Board, mv: Move) -> bool {
    if mv.is_null() {
        trace!("rejected null move {mv}");
        return false;
    }
    let Some(piece) = board.piece_on(mv.from()) else {
        return false;
    };
    let legal = can_move(board, piece, mv.from(), mv.to());
    if !legal {
        trace!("rejected {mv} for {piece}");
    }
    legal
}

/// 整数座標を検証してから合法判定する
///
/// 盤外の座標は判定の前に `OutOfBounds` で弾く。
pub fn check_move(
    board: &Board,
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
) -> Result<Move, RuleError> {
    let from = Square::from_coords(from_row, from_col)?;
    let to = Square::from_coords(to_row, to_col)?;
    let mv = Move::new(from, to);
    if is_legal_move(board, mv) {
        Ok(mv)
    } else {
        Err(RuleError::IllegalMove { from, to })
    }
}

/// `from` の駒が動ける升目の一覧（自駒のある升は除く）
///
/// 移動元が空なら空リスト。
pub fn destinations(board: &Board, from: Square) -> Vec<Square> {
    let Some(piece) = board.piece_on(from) else {
        return Vec::new();
    };
    let pred = predicate_for(piece.piece_type(), piece.is_promoted());
    Square::all()
        .filter(|&to| pred(board, piece.color(), from, to))
        .filter(|&to| board.piece_on(to).is_none_or(|pc| pc.color() != piece.color()))
        .collect()
}
