//! 升目選択による対局セッション
//!
//! 表示層からは `activate_square` だけが呼ばれる。状態は
//! `Idle`（未選択）と `PieceSelected`（駒を選択中）の2つで、
//! 合法な指し手が適用されるか同じ升を再度選ぶと `Idle` に戻る。
//!
//! エラーを返した呼び出しは盤面・選択状態を一切変更しない。

use log::debug;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::RuleError;
use crate::rules::is_legal_move;
use crate::transition::{MoveOutcome, Promotion, apply_move_detailed, promotion_status};
use crate::types::{Color, Move, Square};

/// 成りの方針
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromotionPolicy {
    /// 成れるときは常に成る
    #[default]
    WhenEligible,
    /// 強制成りのときだけ成る
    MandatoryOnly,
}

impl PromotionPolicy {
    #[inline]
    const fn should_promote(self, status: Promotion) -> bool {
        match self {
            PromotionPolicy::WhenEligible => status.is_eligible(),
            PromotionPolicy::MandatoryOnly => matches!(status, Promotion::Mandatory),
        }
    }
}

/// セッション設定
///
/// 既定値は手番管理なし・成れるときは常に成る。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// 手番を管理し、手番でない側の駒の選択を拒否する
    pub enforce_turns: bool,
    pub promotion: PromotionPolicy,
}

/// 選択状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectionState {
    Idle,
    PieceSelected(Square),
}

/// `activate_square` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// 駒を選択した
    Selected(Square),
    /// 選択を解除した
    Deselected(Square),
    /// 未選択で空升を選んだ（何もしない）
    Ignored,
    /// 指し手を適用した
    Moved(MoveOutcome),
}

/// 対局セッション
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    state: SelectionState,
    config: SessionConfig,
    side_to_move: Color,
}

impl Session {
    /// 平手初期局面から開始
    pub fn new(config: SessionConfig) -> Self {
        Self::with_board(Board::startpos(), config)
    }

    /// 任意の盤面から開始
    pub fn with_board(board: Board, config: SessionConfig) -> Self {
        Self {
            board,
            state: SelectionState::Idle,
            config,
            side_to_move: Color::Sente,
        }
    }

    /// 平手初期局面・未選択に戻す
    pub fn reset(&mut self) {
        debug!("session reset");
        self.board = Board::startpos();
        self.state = SelectionState::Idle;
        self.side_to_move = Color::Sente;
    }

    /// 現在の盤面
    #[inline]
    pub fn current_board(&self) -> &Board {
        &self.board
    }

    /// 選択中の升目
    #[inline]
    pub fn current_selection(&self) -> Option<Square> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::PieceSelected(sq) => Some(sq),
        }
    }

    /// 手番（手番管理が無効なら None）
    #[inline]
    pub fn side_to_move(&self) -> Option<Color> {
        self.config.enforce_turns.then_some(self.side_to_move)
    }

    /// セッション設定
    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// 升目 (row, col) が押されたときの状態遷移
    pub fn activate_square(&mut self, row: i32, col: i32) -> Result<Activation, RuleError> {
        let sq = Square::from_coords(row, col)?;

        match self.state {
            SelectionState::PieceSelected(selected) if selected == sq => {
                debug!("deselect {sq}");
                self.state = SelectionState::Idle;
                Ok(Activation::Deselected(sq))
            }
            SelectionState::PieceSelected(selected) => self.try_move(Move::new(selected, sq)),
            SelectionState::Idle => self.select(sq),
        }
    }

    fn select(&mut self, sq: Square) -> Result<Activation, RuleError> {
        let Some(piece) = self.board.piece_on(sq) else {
            return Ok(Activation::Ignored);
        };
        if self.config.enforce_turns && piece.color() != self.side_to_move {
            return Err(RuleError::NotYourTurn {
                color: piece.color(),
            });
        }
        debug!("select {sq} ({piece})");
        self.state = SelectionState::PieceSelected(sq);
        Ok(Activation::Selected(sq))
    }

    fn try_move(&mut self, mv: Move) -> Result<Activation, RuleError> {
        // 選択中の升は常に駒がある
        let Some(piece) = self.board.piece_on(mv.from()) else {
            self.state = SelectionState::Idle;
            return Ok(Activation::Ignored);
        };

        if let Some(target) = self.board.piece_on(mv.to()) {
            if target.color() == piece.color() {
                return Err(RuleError::InvalidSelection { square: mv.to() });
            }
        }

        if !is_legal_move(&self.board, mv) {
            debug!("illegal {mv} for {piece}");
            return Err(RuleError::IllegalMove {
                from: mv.from(),
                to: mv.to(),
            });
        }

        let status =
            promotion_status(mv.from().row(), mv.to().row(), piece.piece_type(), piece.color());
        let promote = self.config.promotion.should_promote(status);
        let outcome = apply_move_detailed(&self.board, mv, promote);

        debug!(
            "move {mv} {piece} promote={promote} captured={:?}",
            outcome.captured.map(|pc| pc.to_sfen())
        );

        self.board = outcome.board;
        self.state = SelectionState::Idle;
        if self.config.enforce_turns {
            self.side_to_move = !self.side_to_move;
        }
        Ok(Activation::Moved(outcome))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Piece, PieceType};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_select_and_deselect() {
        let mut session = Session::default();

        assert_eq!(session.activate_square(2, 0), Ok(Activation::Selected(sq(2, 0))));
        assert_eq!(session.current_selection(), Some(sq(2, 0)));

        assert_eq!(session.activate_square(2, 0), Ok(Activation::Deselected(sq(2, 0))));
        assert_eq!(session.current_selection(), None);
        assert_eq!(*session.current_board(), Board::startpos());
    }

    #[test]
    fn test_idle_empty_square_is_ignored() {
        let mut session = Session::default();
        assert_eq!(session.activate_square(4, 4), Ok(Activation::Ignored));
        assert_eq!(session.current_selection(), None);
    }

    #[test]
    fn test_out_of_bounds_keeps_selection() {
        let mut session = Session::default();
        session.activate_square(2, 0).unwrap();

        assert_eq!(
            session.activate_square(9, 0),
            Err(RuleError::OutOfBounds { row: 9, col: 0 })
        );
        assert_eq!(session.current_selection(), Some(sq(2, 0)));
    }

    #[test]
    fn test_own_piece_target_is_invalid_selection() {
        let mut session = Session::default();
        session.activate_square(0, 4).unwrap();

        assert_eq!(
            session.activate_square(0, 3),
            Err(RuleError::InvalidSelection { square: sq(0, 3) })
        );
        assert_eq!(session.current_selection(), Some(sq(0, 4)));
        assert_eq!(*session.current_board(), Board::startpos());
    }

    #[test]
    fn test_capture_enemy_piece() {
        let board = Board::empty()
            .with_piece(sq(4, 4), Piece::new(Color::Sente, PieceType::Pawn))
            .with_piece(sq(5, 4), Piece::new(Color::Gote, PieceType::Pawn));
        let mut session = Session::with_board(board, SessionConfig::default());

        session.activate_square(4, 4).unwrap();
        let Ok(Activation::Moved(outcome)) = session.activate_square(5, 4) else {
            panic!("capture should succeed");
        };

        assert_eq!(outcome.captured, Some(Piece::new(Color::Gote, PieceType::Pawn)));
        assert_eq!(
            session.current_board().piece_on(sq(5, 4)),
            Some(Piece::new(Color::Sente, PieceType::Pawn))
        );
        assert_eq!(session.current_board().count(Color::Gote), 0);
    }

    #[test]
    fn test_no_turn_enforcement_by_default() {
        let mut session = Session::default();

        session.activate_square(2, 0).unwrap();
        session.activate_square(3, 0).unwrap();
        // 先手が続けて指せる
        session.activate_square(3, 0).unwrap();
        assert!(matches!(session.activate_square(4, 0), Ok(Activation::Moved(_))));
        assert_eq!(session.side_to_move(), None);
    }

    #[test]
    fn test_turn_enforcement() {
        let config = SessionConfig {
            enforce_turns: true,
            ..SessionConfig::default()
        };
        let mut session = Session::new(config);
        assert!(session.config().enforce_turns);
        assert_eq!(session.side_to_move(), Some(Color::Sente));

        assert_eq!(
            session.activate_square(6, 0),
            Err(RuleError::NotYourTurn { color: Color::Gote })
        );
        assert_eq!(session.current_selection(), None);

        session.activate_square(2, 0).unwrap();
        session.activate_square(3, 0).unwrap();
        assert_eq!(session.side_to_move(), Some(Color::Gote));

        assert_eq!(
            session.activate_square(3, 0),
            Err(RuleError::NotYourTurn { color: Color::Sente })
        );
        assert_eq!(session.activate_square(6, 0), Ok(Activation::Selected(sq(6, 0))));
    }

    #[test]
    fn test_mandatory_only_policy() {
        let board = Board::empty()
            .with_piece(sq(5, 4), Piece::new(Color::Sente, PieceType::Silver))
            .with_piece(sq(7, 0), Piece::new(Color::Sente, PieceType::Pawn));
        let config = SessionConfig {
            promotion: PromotionPolicy::MandatoryOnly,
            ..SessionConfig::default()
        };
        let mut session = Session::with_board(board, config);

        // 銀の敵陣進入は任意なので成らない
        session.activate_square(5, 4).unwrap();
        session.activate_square(6, 4).unwrap();
        assert!(!session.current_board().piece_on(sq(6, 4)).unwrap().is_promoted());

        // 歩の最奥段は強制
        session.activate_square(7, 0).unwrap();
        session.activate_square(8, 0).unwrap();
        assert!(session.current_board().piece_on(sq(8, 0)).unwrap().is_promoted());
    }

    #[test]
    fn test_reset() {
        let mut session = Session::default();
        session.activate_square(2, 0).unwrap();
        session.activate_square(3, 0).unwrap();
        session.activate_square(3, 0).unwrap();

        session.reset();

        assert_eq!(*session.current_board(), Board::startpos());
        assert_eq!(session.current_selection(), None);
    }

    #[test]
    fn test_config_deserialize() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"enforce_turns":true,"promotion":"mandatory-only"}"#)
                .unwrap();
        assert!(config.enforce_turns);
        assert_eq!(config.promotion, PromotionPolicy::MandatoryOnly);

        let partial: SessionConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(partial, SessionConfig::default());
    }
}
