//! 成り判定と指し手の適用
//!
//! `apply_move` は合法性も手番も確認しない純粋な状態遷移で、
//! 呼び出し側（`Session`）が事前に `rules::is_legal_move` で判定する前提。

use crate::board::Board;
use crate::types::{Color, Move, Piece, PieceType};

/// 成りの可否
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// 成れない
    Never,
    /// 成っても成らなくてもよい
    Optional,
    /// 成らなければならない（歩・桂・香が最奥段に入る）
    Mandatory,
}

impl Promotion {
    /// 成れるかどうか
    #[inline]
    pub const fn is_eligible(self) -> bool {
        !matches!(self, Promotion::Never)
    }
}

/// 移動元・移動先の行と駒種から成りの可否を判定
///
/// 移動元か移動先のどちらかが敵陣（先手は6-8行、後手は0-2行）にあれば成れる。
pub const fn promotion_status(
    from_row: u8,
    to_row: u8,
    piece_type: PieceType,
    color: Color,
) -> Promotion {
    if !piece_type.can_promote() {
        return Promotion::Never;
    }
    if piece_type.must_promote_on_last_rank() && to_row == color.furthest_row() {
        return Promotion::Mandatory;
    }
    if color.in_promotion_zone(from_row) || color.in_promotion_zone(to_row) {
        Promotion::Optional
    } else {
        Promotion::Never
    }
}

/// 成れるかどうか（強制成りを含む）
#[inline]
pub const fn promotion_eligible(
    from_row: u8,
    to_row: u8,
    piece_type: PieceType,
    color: Color,
) -> bool {
    promotion_status(from_row, to_row, piece_type, color).is_eligible()
}

/// 指し手適用の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// 適用後の盤面
    pub board: Board,
    /// 適用した指し手
    pub mv: Move,
    /// 移動先に置かれた駒（成った場合は成駒）
    pub moved: Option<Piece>,
    /// 取られた駒
    pub captured: Option<Piece>,
    /// この指し手で新たに成ったか
    pub promoted: bool,
}

/// 指し手を適用した新しい盤面を返す
///
/// 元の盤面は変更しない。移動元が空なら元と同じ盤面を返す。
#[must_use]
pub fn apply_move(board: &Board, mv: Move, promote: bool) -> Board {
    apply_move_detailed(board, mv, promote).board
}

/// 指し手を適用し、取った駒・成りの情報と共に返す
pub fn apply_move_detailed(board: &Board, mv: Move, promote: bool) -> MoveOutcome {
    let Some(piece) = board.piece_on(mv.from()) else {
        return MoveOutcome {
            board: *board,
            mv,
            moved: None,
            captured: None,
            promoted: false,
        };
    };

    let captured = board.piece_on(mv.to());
    let placed = if promote { piece.promote() } else { piece };
    let next = board.without_piece(mv.from()).with_piece(mv.to(), placed);

    MoveOutcome {
        board: next,
        mv,
        moved: Some(placed),
        captured,
        promoted: placed.is_promoted() && !piece.is_promoted(),
    }
}
