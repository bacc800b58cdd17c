//! 駒種（PieceType）

/// 駒種（先後・成りの区別なし）
///
/// 成りは `Piece` 側のフラグで表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceType {
    King = 0,
    Rook = 1,
    Bishop = 2,
    Gold = 3,
    Silver = 4,
    Knight = 5,
    Lance = 6,
    Pawn = 7,
}

impl PieceType {
    /// 全ての駒種
    pub const ALL: [PieceType; 8] = [
        PieceType::King,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Gold,
        PieceType::Silver,
        PieceType::Knight,
        PieceType::Lance,
        PieceType::Pawn,
    ];

    /// 成れるかどうか（玉・金以外）
    #[inline]
    pub const fn can_promote(self) -> bool {
        !matches!(self, PieceType::King | PieceType::Gold)
    }

    /// 最奥段で成りが強制される駒（歩・桂・香）かどうか
    #[inline]
    pub const fn must_promote_on_last_rank(self) -> bool {
        matches!(self, PieceType::Pawn | PieceType::Knight | PieceType::Lance)
    }

    /// SFEN の駒文字（大文字）
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::King => 'K',
            PieceType::Rook => 'R',
            PieceType::Bishop => 'B',
            PieceType::Gold => 'G',
            PieceType::Silver => 'S',
            PieceType::Knight => 'N',
            PieceType::Lance => 'L',
            PieceType::Pawn => 'P',
        }
    }

    /// SFEN の駒文字から変換（大文字小文字は問わない）
    #[inline]
    pub const fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_uppercase() {
            'K' => Some(PieceType::King),
            'R' => Some(PieceType::Rook),
            'B' => Some(PieceType::Bishop),
            'G' => Some(PieceType::Gold),
            'S' => Some(PieceType::Silver),
            'N' => Some(PieceType::Knight),
            'L' => Some(PieceType::Lance),
            'P' => Some(PieceType::Pawn),
            _ => None,
        }
    }
}
