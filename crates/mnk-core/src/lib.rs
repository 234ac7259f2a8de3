//! # mnk-core
//!
//! m×n 盤・k目並べ（一般化三目並べ）の完全解析エンジンコアライブラリ。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Player, Cell, Value）
//! - `bitboard`: 64bitビットボード演算
//! - `geometry`: 盤面形状（着手マスク・勝ちライン・引き分けマスク）
//! - `position`: 局面表現と do_move（スコープ付き巻き戻し）
//! - `movegen`: 合法手生成
//! - `eval`: 終局判定
//! - `tt`: 置換表（Transposition Table）
//! - `search`: 全幅negamax探索・perft
//!
//! 盤面は64マスまで。1マス = 1bit で2人分のビットボードを持つ。

// 基本型
pub mod types;

// 盤面表現
pub mod bitboard;
pub mod geometry;
pub mod position;

// 合法手生成・終局判定
pub mod eval;
pub mod movegen;

// 置換表
pub mod tt;

// 探索
pub mod search;

pub use geometry::{BoardGeometry, GeometryError};
pub use position::{MoveError, MoveGuard, Position, Zobrist};
pub use search::{MnkResult, SearchStats, Solver, SolverConfig, SolverError};
pub use types::{Cell, Player, Value};
