//! 着手エラー

use crate::types::Cell;

/// `Position::play` の検証エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// 盤外のマス
    #[error("cell {cell} is outside the board ({cells} cells)")]
    OutOfRange { cell: Cell, cells: usize },

    /// 既に石があるマス
    #[error("cell {cell} is already occupied")]
    Occupied { cell: Cell },

    /// 終局後の着手
    #[error("game is already over")]
    GameOver,
}
