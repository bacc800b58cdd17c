//! 盤面（Board）
//!
//! 9x9 の升目配列を値として持つ。`Board` は `Copy` で、
//! 盤面を変える操作はすべて新しい `Board` を返す（元の盤面は変わらない）。

mod sfen;

pub use sfen::{SFEN_STARTPOS, SfenError};

use crate::types::{BOARD_SIZE, Color, Piece, PieceType, Square};

/// 盤面
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

/// 一段目の駒並び（列0から列8）
const BACK_RANK: [PieceType; BOARD_SIZE] = [
    PieceType::Lance,
    PieceType::Knight,
    PieceType::Silver,
    PieceType::Gold,
    PieceType::King,
    PieceType::Gold,
    PieceType::Silver,
    PieceType::Knight,
    PieceType::Lance,
];

impl Board {
    /// 駒のない盤面
    pub const fn empty() -> Board {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 平手初期局面
    ///
    /// 先手は行0-2、後手は行6-8。後手側は先手側の180度回転。
    pub fn startpos() -> Board {
        let mut board = Board::empty();
        for (col, &pt) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Sente, pt));
            board.squares[8][BOARD_SIZE - 1 - col] = Some(Piece::new(Color::Gote, pt));
        }
        for col in 0..BOARD_SIZE {
            board.squares[2][col] = Some(Piece::new(Color::Sente, PieceType::Pawn));
            board.squares[6][col] = Some(Piece::new(Color::Gote, PieceType::Pawn));
        }
        board.squares[1][1] = Some(Piece::new(Color::Sente, PieceType::Bishop));
        board.squares[1][7] = Some(Piece::new(Color::Sente, PieceType::Rook));
        board.squares[7][1] = Some(Piece::new(Color::Gote, PieceType::Rook));
        board.squares[7][7] = Some(Piece::new(Color::Gote, PieceType::Bishop));
        board
    }

    /// 升目の駒
    #[inline]
    pub const fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// 升目に駒があるか
    #[inline]
    pub const fn is_occupied(&self, sq: Square) -> bool {
        self.piece_on(sq).is_some()
    }

    /// 升目に駒を置いた盤面を返す（既存の駒は上書き）
    #[must_use]
    pub fn with_piece(mut self, sq: Square, piece: Piece) -> Board {
        self.squares[sq.row() as usize][sq.col() as usize] = Some(piece);
        self
    }

    /// 升目を空にした盤面を返す
    #[must_use]
    pub fn without_piece(mut self, sq: Square) -> Board {
        self.squares[sq.row() as usize][sq.col() as usize] = None;
        self
    }

    /// 行ごとの升目配列（描画用）
    #[inline]
    pub const fn rows(&self) -> &[[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        &self.squares
    }

    /// 盤上の全ての駒（行優先）
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_on(sq).map(|pc| (sq, pc)))
    }

    /// 指定手番の駒の数
    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, pc)| pc.color() == color).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

/// テキスト表示（行0が上、空升は `.`）
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "    0  1  2  3  4  5  6  7  8")?;
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{row} ")?;
            for cell in cells {
                match cell {
                    Some(pc) => write!(f, "{:>3}", pc.to_sfen())?,
                    None => write!(f, "  .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Board({})", self.to_sfen())
    }
}
