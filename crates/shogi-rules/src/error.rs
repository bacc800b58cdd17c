//! ルールエンジンのエラー型
//!
//! いずれも致命的ではなく、エラーを返した操作は盤面・選択状態を変更しない。

use crate::types::{Color, Square};

/// ルール違反・入力不正
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// 盤外の座標
    #[error("square ({row},{col}) is off the 9x9 board")]
    OutOfBounds { row: i32, col: i32 },

    /// 駒の動きとして不正
    #[error("illegal move {from}->{to}")]
    IllegalMove { from: Square, to: Square },

    /// 自駒のある升を移動先に選んだ
    #[error("square {square} holds a piece of the moving side")]
    InvalidSelection { square: Square },

    /// 手番でない側の駒を選んだ（手番管理が有効な場合のみ）
    #[error("it is not {color}'s turn")]
    NotYourTurn { color: Color },
}
