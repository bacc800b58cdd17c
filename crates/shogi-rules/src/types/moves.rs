//! 指し手（Move）

use super::Square;

/// 盤上の指し手（移動元 → 移動先）
///
/// 成るかどうかは指し手に含めず、適用時に決める。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// 移動元
    #[inline]
    pub const fn from(self) -> Square {
        self.from
    }

    /// 移動先
    #[inline]
    pub const fn to(self) -> Square {
        self.to
    }

    /// 移動元と移動先が同じか
    #[inline]
    pub const fn is_null(self) -> bool {
        self.from.row() == self.to.row() && self.from.col() == self.to.col()
    }

    /// (行差分, 列差分)
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        (
            self.to.row() as i8 - self.from.row() as i8,
            self.to.col() as i8 - self.from.col() as i8,
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}
