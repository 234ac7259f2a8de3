//! ビットボードモジュール
//!
//! 最大64マスの盤面を64bitで表現する。bit i がマス i（行優先）に対応する。
//!
//! - `Bitboard`: 64bit盤面表現
//! - `BitboardIter`: 立っているビットを昇順に列挙するイテレータ

mod core;

pub use self::core::Bitboard;
pub use self::core::BitboardIter;
