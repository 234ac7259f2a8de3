//! search モジュールのテスト

mod perft;

use crate::position::Position;
use crate::types::Cell;

/// テスト用の置換表容量（32MiB）
pub(super) const TEST_TT_CAPACITY: usize = 1 << 20;

/// 固定シードの空局面
pub(super) fn empty(columns: usize, rows: usize, k: usize) -> Position {
    Position::with_seed(columns, rows, k, 0x00C0_FFEE).unwrap()
}

/// 空局面から手順を適用した局面
pub(super) fn after(columns: usize, rows: usize, k: usize, moves: &[u8]) -> Position {
    let mut pos = empty(columns, rows, k);
    for &i in moves {
        pos.play(Cell::new(i)).unwrap();
    }
    pos
}
