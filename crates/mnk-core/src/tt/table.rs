//! TranspositionTable本体
//!
//! - TranspositionTable: 固定容量のエントリ配列
//! - probe/store操作

use super::entry::{TTData, TTEntry};
use super::TtError;
use crate::position::Position;

/// 置換表
pub struct TranspositionTable {
    /// エントリの配列（長さ = 容量、構築後は変わらない）
    entries: Box<[TTEntry]>,
}

impl TranspositionTable {
    /// 容量（エントリ数）を指定して作成
    pub fn new(capacity: usize) -> Result<Self, TtError> {
        if capacity == 0 {
            return Err(TtError::ZeroCapacity);
        }
        let entries = vec![TTEntry::EMPTY; capacity].into_boxed_slice();
        log::info!(
            "transposition table allocated: {capacity} entries ({} MiB)",
            capacity * std::mem::size_of::<TTEntry>() / (1024 * 1024)
        );
        Ok(Self { entries })
    }

    /// 容量（エントリ数）
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// 使用メモリ（バイト）
    #[inline]
    pub fn memory_bytes(&self) -> usize {
        self.entries.len() * std::mem::size_of::<TTEntry>()
    }

    /// クリア
    pub fn clear(&mut self) {
        self.entries.fill(TTEntry::EMPTY);
        log::debug!("transposition table cleared ({} entries)", self.entries.len());
    }

    /// スロット番号（キーを容量で割った余り）
    #[inline]
    pub fn index(&self, key: u64) -> usize {
        (key % self.entries.len() as u64) as usize
    }

    /// 置換表を検索
    ///
    /// スロットのエントリが `pos` の Bitboard・手番・盤面形状と完全一致した場合のみデータを返す。
    #[inline]
    pub fn probe(&self, key: u64, pos: &Position) -> Option<TTData> {
        let entry = &self.entries[self.index(key)];
        if entry.matches(pos.boards(), pos.turn(), pos.geometry().shape()) {
            entry.read()
        } else {
            None
        }
    }

    /// 書き込み（スロットの既存エントリは無条件に上書き）
    #[inline]
    pub fn store(&mut self, key: u64, pos: &Position, data: TTData) {
        let index = self.index(key);
        let shape = pos.geometry().shape();
        self.entries[index] = TTEntry::new(pos.boards(), pos.turn(), shape, data);
    }

    /// 置換表の使用率を1000分率で返す（先頭1000エントリのサンプル）
    pub fn hashfull(&self) -> usize {
        let sample = 1000.min(self.entries.len());
        let used = self.entries[..sample].iter().filter(|e| e.is_occupied()).count();
        used * 1000 / sample
    }
}

impl std::fmt::Debug for TranspositionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranspositionTable")
            .field("capacity", &self.capacity())
            .field("hashfull", &self.hashfull())
            .finish()
    }
}
