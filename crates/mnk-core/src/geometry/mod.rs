//! 盤面形状モジュール
//!
//! (列数 m, 行数 n, 並べる数 k) から一度だけ計算する不変データ。
//!
//! - `BoardGeometry`: 着手マスク・勝ちラインマスク・引き分けマスク
//! - `GeometryError`: 構築時の引数検証エラー
//!
//! マス番号は行優先（`row * columns + col`）。
//! 勝ちラインは盤端で折り返さないものだけを列挙する。

mod error;
mod lines;

pub use error::GeometryError;

use crate::bitboard::Bitboard;
use crate::types::Cell;

/// 盤面形状
///
/// 同じ (columns, rows, k) からは常に同じ順序のマスク列が得られる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGeometry {
    columns: usize,
    rows: usize,
    run_length: usize,
    /// マスごとの着手マスク [Cell.index()]
    move_masks: Vec<Bitboard>,
    /// 勝ちラインのマスク（k bit）
    win_masks: Vec<Bitboard>,
    /// 全マスが埋まった状態
    draw_mask: Bitboard,
}

impl BoardGeometry {
    /// 盤面形状を構築
    ///
    /// `columns * rows <= 64`、各値が1以上、`k <= max(columns, rows)` を要求する。
    pub fn new(columns: usize, rows: usize, run_length: usize) -> Result<Self, GeometryError> {
        if columns == 0 || rows == 0 {
            return Err(GeometryError::ZeroDimension { columns, rows });
        }
        let cells = columns
            .checked_mul(rows)
            .filter(|&cells| cells <= Cell::MAX_CELLS)
            .ok_or(GeometryError::TooManyCells { columns, rows })?;
        if run_length == 0 {
            return Err(GeometryError::ZeroRunLength);
        }
        let max = columns.max(rows);
        if run_length > max {
            return Err(GeometryError::RunLengthTooLong { run_length, max });
        }

        let move_masks = (0..cells as u8)
            .map(|i| Bitboard::from_cell(Cell::new(i)))
            .collect();
        let win_masks = lines::win_masks(columns, rows, run_length);

        log::debug!(
            "geometry {columns}x{rows} k={run_length}: {cells} cells, {} win lines",
            win_masks.len()
        );

        Ok(Self {
            columns,
            rows,
            run_length,
            move_masks,
            win_masks,
            draw_mask: Bitboard::low_bits(cells),
        })
    }

    /// 列数（m）
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// 行数（n）
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// 勝利に必要な連続数（k）
    #[inline]
    pub fn run_length(&self) -> usize {
        self.run_length
    }

    /// マス数（m * n）
    #[inline]
    pub fn cells(&self) -> usize {
        self.move_masks.len()
    }

    /// 着手マスク
    #[inline]
    pub fn move_mask(&self, cell: Cell) -> Bitboard {
        self.move_masks[cell.index()]
    }

    /// 全マスの着手マスク（マス番号順）
    #[inline]
    pub fn move_masks(&self) -> &[Bitboard] {
        &self.move_masks
    }

    /// 勝ちラインのマスク
    #[inline]
    pub fn win_masks(&self) -> &[Bitboard] {
        &self.win_masks
    }

    /// 引き分け判定用マスク（全マス）
    #[inline]
    pub fn draw_mask(&self) -> Bitboard {
        self.draw_mask
    }

    /// 盤内のマスかどうか
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.index() < self.cells()
    }

    /// (列, 行) からマスを取得（盤外なら `None`）
    pub fn cell(&self, col: usize, row: usize) -> Option<Cell> {
        if col < self.columns && row < self.rows {
            Some(Cell::new((row * self.columns + col) as u8))
        } else {
            None
        }
    }

    /// 置換表エントリ用の形状タグ (列数, 行数, k)
    ///
    /// 各値は64以下なので u8 に収まる。
    #[inline]
    pub fn shape(&self) -> [u8; 3] {
        [self.columns as u8, self.rows as u8, self.run_length as u8]
    }

    /// マスの (列, 行)
    #[inline]
    pub fn coords(&self, cell: Cell) -> (usize, usize) {
        (cell.index() % self.columns, cell.index() / self.columns)
    }
}
