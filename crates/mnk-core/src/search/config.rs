//! 探索器の設定

use serde::{Deserialize, Serialize};

use crate::geometry::GeometryError;
use crate::position::{Position, process_seed};
use crate::tt::DEFAULT_CAPACITY;

/// 探索器の設定
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// 置換表の容量（エントリ数、1エントリ32バイト）
    pub tt_capacity: usize,
    /// Zobristテーブルのシード（`None` ならプロセス共通シード）
    pub zobrist_seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tt_capacity: DEFAULT_CAPACITY,
            zobrist_seed: None,
        }
    }
}

impl SolverConfig {
    /// 置換表容量を変更した設定
    pub fn with_tt_capacity(mut self, tt_capacity: usize) -> Self {
        self.tt_capacity = tt_capacity;
        self
    }

    /// Zobristシードを固定した設定
    pub fn with_zobrist_seed(mut self, seed: u64) -> Self {
        self.zobrist_seed = Some(seed);
        self
    }

    /// この設定のシードで空の局面を作成
    pub fn position(
        &self,
        columns: usize,
        rows: usize,
        run_length: usize,
    ) -> Result<Position, GeometryError> {
        let seed = self.zobrist_seed.unwrap_or_else(process_seed);
        Position::with_seed(columns, rows, run_length, seed)
    }
}
