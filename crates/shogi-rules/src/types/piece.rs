//! 駒（Piece）
//!
//! 手番・駒種・成りフラグの3つ組。玉と金は成れないので、
//! コンストラクタ経由でしか生成できないようにして `promoted == false` を保証する。

use super::{Color, PieceType};

/// 駒（先後の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    piece_type: PieceType,
    promoted: bool,
}

impl Piece {
    /// 生駒を生成
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece {
            color,
            piece_type,
            promoted: false,
        }
    }

    /// 成駒を生成（成れない駒種の場合は None）
    #[inline]
    pub const fn new_promoted(color: Color, piece_type: PieceType) -> Option<Piece> {
        if piece_type.can_promote() {
            Some(Piece {
                color,
                piece_type,
                promoted: true,
            })
        } else {
            None
        }
    }

    /// 手番を取得
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// 駒種を取得
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        self.piece_type
    }

    /// 成駒かどうか
    #[inline]
    pub const fn is_promoted(self) -> bool {
        self.promoted
    }

    /// 成った駒を返す
    ///
    /// 成れない駒、既に成っている駒はそのまま返す。
    #[inline]
    pub const fn promote(self) -> Piece {
        Piece {
            promoted: self.piece_type.can_promote(),
            ..self
        }
    }

    /// SFEN 表記（先手は大文字、後手は小文字、成駒は `+` 付き）
    pub fn to_sfen(self) -> String {
        let c = self.piece_type.to_char();
        let c = match self.color {
            Color::Sente => c,
            Color::Gote => c.to_ascii_lowercase(),
        };
        if self.promoted { format!("+{c}") } else { c.to_string() }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_sfen())
    }
}
