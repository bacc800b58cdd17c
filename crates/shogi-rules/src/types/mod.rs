//! 基本型定義

mod color;
pub mod json;
mod moves;
mod piece;
mod piece_type;
mod square;

pub use color::Color;
pub use moves::Move;
pub use piece::Piece;
pub use piece_type::PieceType;
pub use square::Square;

/// 盤の一辺の升数
pub const BOARD_SIZE: usize = 9;
