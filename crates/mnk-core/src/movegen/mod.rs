//! 合法手生成モジュール
//!
//! 空きマスをマス番号の昇順に列挙する。
//! 順序は最善手選択のタイブレーク（同値なら番号の小さい手）を決めるため重要。

mod generator;

pub use generator::{MoveList, empty_cells, generate_moves};
