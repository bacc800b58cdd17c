//! 手番（Color）

use serde::{Deserialize, Serialize};

/// 手番（先手/後手）
///
/// 先手は行番号が増える方向、後手は減る方向が「前」。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Sente = 0,
    Gote = 1,
}

impl Color {
    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Sente => Color::Gote,
            Color::Gote => Color::Sente,
        }
    }

    /// 前進方向の行差分（先手 +1、後手 -1）
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Sente => 1,
            Color::Gote => -1,
        }
    }

    /// 最奥段（先手は8行目、後手は0行目）
    #[inline]
    pub const fn furthest_row(self) -> u8 {
        match self {
            Color::Sente => 8,
            Color::Gote => 0,
        }
    }

    /// 敵陣（成れる3段）に含まれる行かどうか
    ///
    /// 盤外の行は常に false。
    #[inline]
    pub const fn in_promotion_zone(self, row: u8) -> bool {
        match self {
            Color::Sente => row >= 6 && row <= 8,
            Color::Gote => row <= 2,
        }
    }

    /// JSON/表示用の名前
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Sente => "sente",
            Color::Gote => "gote",
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
