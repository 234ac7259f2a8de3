//! 探索モジュール
//!
//! 終局まで全幅で読み切る negamax と、合法手生成の検証・計測用の perft。
//! どちらも同じ置換表を参照・更新する（エントリは種別タグで区別）。
//!
//! - `Solver`: 置換表と統計を持つ探索器
//! - `SolverConfig`: 置換表容量・Zobristシード
//! - `SearchStats`: ノード数・置換表ヒット数
//!
//! 枝刈り・反復深化・並列探索は行わない。64マスに近い盤の完全解析は
//! 指数時間がかかり、実用時間で終わらないことがある。

mod config;
mod perft;
mod solver;
mod stats;

#[cfg(test)]
mod tests;

pub use config::SolverConfig;
pub use solver::Solver;
pub use stats::SearchStats;

use crate::geometry::GeometryError;
use crate::position::MoveError;
use crate::tt::TtError;

/// mnk-core のエラー
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// 盤面形状が不正
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// 着手が不正
    #[error(transparent)]
    Move(#[from] MoveError),

    /// 置換表の構築に失敗
    #[error(transparent)]
    Tt(#[from] TtError),
}

/// mnk-core の Result 型
pub type MnkResult<T> = Result<T, SolverError>;
