//! 指し手生成器

use smallvec::SmallVec;

use crate::bitboard::Bitboard;
use crate::position::Position;
use crate::types::Cell;

/// 指し手リスト（64マス以下なのでヒープ確保しない）
pub type MoveList = SmallVec<[Cell; 64]>;

/// 空きマスのBitboard
#[inline]
pub fn empty_cells(pos: &Position) -> Bitboard {
    // occupied は常に draw_mask の部分集合
    pos.geometry().draw_mask() ^ pos.occupied()
}

/// 合法手を昇順に生成
///
/// 終局判定は行わない（呼び出し側が先に `eval` で判定する）。
pub fn generate_moves(pos: &Position) -> MoveList {
    empty_cells(pos).iter().collect()
}
