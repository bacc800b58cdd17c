//! 将棋の指し手ルールエンジン
//!
//! - `types`: 手番・駒種・駒・升目・指し手などの基本型
//! - `board`: 9x9 の盤面（値型）と SFEN 盤面表記
//! - `rules`: 駒種ごとの合法判定と経路の遮り判定
//! - `transition`: 成り判定と指し手適用（新しい盤面を返す）
//! - `session`: 升目選択によるステートマシン（表示層からの唯一の入口）
//!
//! 王手・詰み判定、持ち駒打ち、千日手、棋譜は扱わない。

pub mod board;
pub mod error;
pub mod rules;
pub mod session;
pub mod transition;
pub mod types;

pub use board::{Board, SFEN_STARTPOS, SfenError};
pub use error::RuleError;
pub use rules::{can_move, check_move, destinations, is_legal_move};
pub use session::{Activation, PromotionPolicy, Session, SessionConfig};
pub use transition::{MoveOutcome, Promotion, apply_move, apply_move_detailed, promotion_eligible};
pub use types::{Color, Move, Piece, PieceType, Square};
