//! 置換表モジュール
//!
//! 探索結果をキャッシュする置換表（Transposition Table）。
//!
//! - `TTEntry`: エントリ（32バイト、局面の完全な Bitboard・手番・盤面形状を保持）
//! - `TTData`: 読み取り用データ（評価値 / perft ノード数のタグ付き）
//! - `TranspositionTable`: テーブル本体（固定容量のフラット配列）
//!
//! インデックスは `key % capacity`。チェイン・拡張はせず、書き込みは常に上書き。
//! 読み取りは Bitboard・手番・盤面形状の完全一致を確認してから使うので、
//! キー衝突で別局面の値を返すことはない（衝突時は再計算になるだけ）。

mod entry;
mod table;

pub use entry::{TTData, TTEntry};
pub use table::TranspositionTable;

/// 置換表の構築エラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TtError {
    /// 容量0
    #[error("transposition table capacity must be positive")]
    ZeroCapacity,
}

/// デフォルト容量（エントリ数）: 2^25 × 32バイト = 1GB
pub const DEFAULT_CAPACITY: usize = 1 << 25;
