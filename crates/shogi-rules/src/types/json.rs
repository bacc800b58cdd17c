use serde::{Deserialize, Serialize};

use super::{Piece, Square};
use crate::board::Board;
use crate::session::Session;

/// 表示層で扱う駒のJSON表現
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PieceJson {
    /// "sente" | "gote"
    pub owner: String,
    /// "K" | "R" | "B" | "G" | "S" | "N" | "L" | "P"
    #[serde(rename = "type")]
    pub piece_type: String,
    /// 成駒かどうか
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promoted: Option<bool>,
}

/// 盤面の1マス
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CellJson {
    pub row: u8,
    pub col: u8,
    /// 駒（存在しない場合はnull）
    pub piece: Option<PieceJson>,
}

/// 選択中の升目
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectionJson {
    pub row: u8,
    pub col: u8,
}

/// 盤面全体の状態
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardStateJson {
    /// 9x9のセル配列（cells[row][col]）
    pub cells: Vec<Vec<CellJson>>,
    /// 選択中の升目（未選択ならnull）
    pub selection: Option<SelectionJson>,
    /// 手番: "sente" | "gote"（手番管理が無効なら省略）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn: Option<String>,
}

impl From<Piece> for PieceJson {
    fn from(pc: Piece) -> Self {
        PieceJson {
            owner: pc.color().name().to_string(),
            piece_type: pc.piece_type().to_char().to_string(),
            promoted: pc.is_promoted().then_some(true),
        }
    }
}

impl From<Square> for SelectionJson {
    fn from(sq: Square) -> Self {
        SelectionJson {
            row: sq.row(),
            col: sq.col(),
        }
    }
}

impl BoardStateJson {
    /// 盤面と選択状態から生成
    pub fn from_board(board: &Board, selection: Option<Square>) -> Self {
        let cells = board
            .rows()
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, cell)| CellJson {
                        row: row as u8,
                        col: col as u8,
                        piece: cell.map(PieceJson::from),
                    })
                    .collect()
            })
            .collect();

        BoardStateJson {
            cells,
            selection: selection.map(SelectionJson::from),
            turn: None,
        }
    }

    /// セッションの現在状態から生成
    pub fn from_session(session: &Session) -> Self {
        let mut state = Self::from_board(session.current_board(), session.current_selection());
        state.turn = session.side_to_move().map(|c| c.name().to_string());
        state
    }

    /// 1行のJSON文字列に変換
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionConfig;
    use crate::types::{Color, PieceType};

    #[test]
    fn test_board_state_json_startpos() {
        let state = BoardStateJson::from_board(&Board::startpos(), None);

        assert_eq!(state.cells.len(), 9);
        assert!(state.cells.iter().all(|row| row.len() == 9));

        let king = state.cells[0][4].piece.as_ref().unwrap();
        assert_eq!(king.owner, "sente");
        assert_eq!(king.piece_type, "K");
        assert_eq!(king.promoted, None);
        assert_eq!(state.cells[8][4].piece.as_ref().unwrap().owner, "gote");
        assert!(state.cells[4][4].piece.is_none());
    }

    #[test]
    fn test_board_state_json_serialization() {
        let mut session = Session::new(SessionConfig {
            enforce_turns: true,
            ..SessionConfig::default()
        });
        session.activate_square(2, 0).unwrap();

        let json = serde_json::to_value(BoardStateJson::from_session(&session)).unwrap();

        assert_eq!(json["selection"]["row"], 2);
        assert_eq!(json["selection"]["col"], 0);
        assert_eq!(json["turn"], "sente");
        assert_eq!(json["cells"][2][0]["piece"]["type"], "P");
        assert!(json["cells"][2][0]["piece"].get("promoted").is_none());
    }

    #[test]
    fn test_promoted_piece_json() {
        let pc = Piece::new(Color::Gote, PieceType::Bishop).promote();
        let json = PieceJson::from(pc);
        assert_eq!(json.promoted, Some(true));
        assert_eq!(json.owner, "gote");
    }
}
