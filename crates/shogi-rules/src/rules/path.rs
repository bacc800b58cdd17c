//! 遠方駒の経路の遮り判定

use crate::board::Board;
use crate::types::Square;

/// 縦・横・斜めの単位方向を返す（それ以外の向き、または同一升なら None）
#[inline]
pub(crate) fn unit_direction(from: Square, to: Square) -> Option<(i8, i8)> {
    let d_row = to.row() as i8 - from.row() as i8;
    let d_col = to.col() as i8 - from.col() as i8;
    if d_row == 0 && d_col == 0 {
        return None;
    }
    if d_row != 0 && d_col != 0 && d_row.abs() != d_col.abs() {
        return None;
    }
    Some((d_row.signum(), d_col.signum()))
}

/// 移動元と移動先の間（両端を含まない）に駒がないか
///
/// 駒の先後は問わない。縦・横・斜めでない組は常に false。
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let Some((d_row, d_col)) = unit_direction(from, to) else {
        return false;
    };

    let mut cur = from;
    loop {
        cur = match cur.offset(d_row, d_col) {
            Some(next) => next,
            None => return false,
        };
        if cur == to {
            return true;
        }
        if board.is_occupied(cur) {
            return false;
        }
    }
}
