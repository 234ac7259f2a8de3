//! 局面表現モジュール
//!
//! m,n,k 盤の局面を表現し、手の実行・巻き戻しを行う。
//!
//! - `Position`: 局面本体（2人分のBitboard・手番・Zobristキー）
//! - `MoveGuard`: `do_move` が返すガード。drop時に必ず手を巻き戻す
//! - `Zobrist`: Zobristハッシュ乱数テーブル（マス×手番・手番反転）
//! - `MoveError`: `play` による検証付き着手のエラー
//!
//! Bitboard・手番・Zobristキーは `Position` のメソッド経由でのみ更新され、
//! 常に互いに整合しているように保つ。探索中の着手は `do_move` のガードで
//! スコープに閉じ込めるため、巻き戻しの呼び忘れや順序違いは起こらない。

mod error;
mod guard;
mod pos;
mod zobrist;

pub use error::MoveError;
pub use guard::MoveGuard;
pub use pos::Position;
pub use zobrist::{Zobrist, process_seed};
