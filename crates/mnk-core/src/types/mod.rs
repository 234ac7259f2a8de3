//! 基本型
//!
//! - `Player`: 手番（先手/後手）と手番符号（+1/-1）
//! - `Cell`: マス番号（`row * columns + col`）
//! - `Value`: 手番側から見た評価値（勝ち/引き分け/負け）

mod cell;
mod player;
mod value;

pub use cell::Cell;
pub use player::Player;
pub use value::Value;
