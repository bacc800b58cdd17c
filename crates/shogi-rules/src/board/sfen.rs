//! SFEN 盤面表記の読み書き
//!
//! SFEN の盤面部分のみを扱う（手番・持ち駒・手数は扱わない）。
//! 段は行0から行8の順、各段の中は列0から列8の順に並べる。

use super::Board;
use crate::types::{BOARD_SIZE, Color, Piece, PieceType, Square};

/// 平手初期局面の盤面表記
pub const SFEN_STARTPOS: &str = "LNSGKGSNL/1B5R1/PPPPPPPPP/9/9/9/ppppppppp/1r5b1/lnsgkgsnl";

/// SFEN 解析エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SfenError {
    /// 段の数が9でない
    #[error("expected 9 ranks, got {0}")]
    RankCount(usize),
    /// 段の升数が9でない
    #[error("rank {rank} has width {width}")]
    RankWidth { rank: usize, width: usize },
    /// 未知の駒文字
    #[error("unknown piece character '{0}'")]
    UnknownPiece(char),
    /// 成れない駒に `+` が付いている
    #[error("'+{0}' cannot be promoted")]
    Unpromotable(char),
    /// `+` の後に駒文字がない
    #[error("dangling '+' in rank {0}")]
    DanglingPromotion(usize),
}

impl Board {
    /// SFEN 盤面表記から生成
    pub fn from_sfen(sfen: &str) -> Result<Board, SfenError> {
        let ranks: Vec<&str> = sfen.trim().split('/').collect();
        if ranks.len() != BOARD_SIZE {
            return Err(SfenError::RankCount(ranks.len()));
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0usize;
            let mut promoted = false;

            for c in rank.chars() {
                if let Some(n) = c.to_digit(10) {
                    if promoted {
                        return Err(SfenError::DanglingPromotion(row));
                    }
                    col += n as usize;
                    continue;
                }
                if c == '+' {
                    if promoted {
                        return Err(SfenError::DanglingPromotion(row));
                    }
                    promoted = true;
                    continue;
                }

                let pt = PieceType::from_char(c).ok_or(SfenError::UnknownPiece(c))?;
                let color = if c.is_ascii_uppercase() {
                    Color::Sente
                } else {
                    Color::Gote
                };
                let piece = if promoted {
                    Piece::new_promoted(color, pt).ok_or(SfenError::Unpromotable(c))?
                } else {
                    Piece::new(color, pt)
                };
                promoted = false;

                if col >= BOARD_SIZE {
                    return Err(SfenError::RankWidth {
                        rank: row,
                        width: col + 1,
                    });
                }
                if let Some(sq) = Square::new(row as u8, col as u8) {
                    board = board.with_piece(sq, piece);
                }
                col += 1;
            }

            if promoted {
                return Err(SfenError::DanglingPromotion(row));
            }
            if col != BOARD_SIZE {
                return Err(SfenError::RankWidth {
                    rank: row,
                    width: col,
                });
            }
        }

        Ok(board)
    }

    /// SFEN 盤面表記を出力
    pub fn to_sfen(&self) -> String {
        let mut result = String::new();

        for (row, cells) in self.rows().iter().enumerate() {
            let mut empty_count = 0;

            for cell in cells {
                match cell {
                    Some(pc) => {
                        if empty_count > 0 {
                            result.push_str(&empty_count.to_string());
                            empty_count = 0;
                        }
                        result.push_str(&pc.to_sfen());
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                result.push_str(&empty_count.to_string());
            }

            if row < BOARD_SIZE - 1 {
                result.push('/');
            }
        }

        result
    }
}
