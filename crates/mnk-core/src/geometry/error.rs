//! 盤面形状の検証エラー

/// `BoardGeometry::new` の引数エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// 列数または行数が0
    #[error("board dimensions must be positive: {columns}x{rows}")]
    ZeroDimension { columns: usize, rows: usize },

    /// マス数が64を超える（1ワードのビットボードに収まらない）
    #[error("board {columns}x{rows} exceeds 64 cells")]
    TooManyCells { columns: usize, rows: usize },

    /// 並べる数が0
    #[error("run length must be positive")]
    ZeroRunLength,

    /// 並べる数が盤の縦横どちらにも収まらない
    #[error("run length {run_length} exceeds board extent {max}")]
    RunLengthTooLong { run_length: usize, max: usize },

    /// Zobristテーブルのマス数が盤と一致しない
    #[error("zobrist table has {zobrist_cells} cells but the board has {cells}")]
    ZobristSizeMismatch { cells: usize, zobrist_cells: usize },
}
