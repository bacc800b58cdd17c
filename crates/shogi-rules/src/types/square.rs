//! 升目（Square）

use super::BOARD_SIZE;
use crate::error::RuleError;

/// 升目（行・列とも 0-8）
///
/// 行0が先手の一段目、行8が後手の一段目。
/// 範囲外の座標を持つ `Square` は存在しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// 行・列から生成（範囲チェックあり）
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Square> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// 外部から渡された整数座標を検証して生成
    pub fn from_coords(row: i32, col: i32) -> Result<Square, RuleError> {
        let out_of_bounds = RuleError::OutOfBounds { row, col };
        let row = u8::try_from(row).map_err(|_| out_of_bounds.clone())?;
        let col = u8::try_from(col).map_err(|_| out_of_bounds.clone())?;
        Square::new(row, col).ok_or(out_of_bounds)
    }

    /// 行
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// 列
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 差分だけずらした升目（盤外なら None）
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i16 + d_row as i16;
        let col = self.col as i16 + d_col as i16;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// 全升目（行優先）
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
