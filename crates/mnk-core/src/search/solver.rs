//! negamax 探索器

use super::{MnkResult, SearchStats, SolverConfig};
use crate::eval;
use crate::movegen::generate_moves;
use crate::position::Position;
use crate::tt::{TTData, TranspositionTable};
use crate::types::{Cell, Value};

/// 探索器
///
/// 置換表は negamax と perft で共有する。独立した計測の前には
/// 呼び出し側が `clear_tt` を呼んで条件を揃えること。
/// エントリは盤面形状も照合するので、形状の違う局面を同じ探索器で扱ってよい。
#[derive(Debug)]
pub struct Solver {
    pub(super) tt: TranspositionTable,
    pub(super) stats: SearchStats,
}

impl Solver {
    /// 設定から探索器を作成
    pub fn new(config: &SolverConfig) -> MnkResult<Self> {
        Self::with_capacity(config.tt_capacity)
    }

    /// 置換表容量を指定して探索器を作成
    pub fn with_capacity(tt_capacity: usize) -> MnkResult<Self> {
        Ok(Self {
            tt: TranspositionTable::new(tt_capacity)?,
            stats: SearchStats::default(),
        })
    }

    /// 置換表
    #[inline]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// 置換表をクリア
    pub fn clear_tt(&mut self) {
        self.tt.clear();
    }

    /// 探索統計（`reset_stats` 以降の累計）
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計をリセット
    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// 局面の値（手番側から見た 勝ち/引き分け/負け）
    ///
    /// 終局まで全幅で読み切る。`pos` は呼び出し前の状態に戻って返る。
    pub fn negamax(&mut self, pos: &mut Position) -> Value {
        let value = self.search(pos);
        log::debug!(
            "negamax: value={value} nodes={} tt_hits={}",
            self.stats.nodes,
            self.stats.tt_hits
        );
        value
    }

    /// 最善手
    ///
    /// 各手を指した後の値の符号反転が最大の手を返す。同値なら番号の小さい手。
    /// 終局済み・空きマスなしなら `None`。
    pub fn best_move(&mut self, pos: &mut Position) -> Option<Cell> {
        self.best_move_with_value(pos).map(|(cell, _)| cell)
    }

    /// 最善手とその値
    pub fn best_move_with_value(&mut self, pos: &mut Position) -> Option<(Cell, Value)> {
        if eval::is_end_game(pos) {
            return None;
        }

        let mut best: Option<(Cell, Value)> = None;
        for cell in generate_moves(pos) {
            let mut child = pos.do_move(cell);
            let value = -self.search(&mut child);
            // 厳密に大きいときだけ更新（先に見つけた小さい番号の手を優先）
            if best.is_none_or(|(_, v)| value > v) {
                best = Some((cell, value));
            }
        }

        if let Some((cell, value)) = best {
            log::debug!("best move: cell={cell} value={value} nodes={}", self.stats.nodes);
        }
        best
    }

    /// negamax 本体
    fn search(&mut self, pos: &mut Position) -> Value {
        self.stats.nodes += 1;
        let key = pos.key();

        // 局面が完全一致した評価値エントリのみ使う（全幅探索なので常に確定値）
        if let Some(TTData::Score(value)) = self.tt.probe(key, pos) {
            self.stats.tt_hits += 1;
            return value;
        }

        // 直前の手で相手がラインを完成させている
        if eval::is_end_game(pos) {
            return Value::LOSS;
        }
        if eval::is_draw(pos) {
            return Value::DRAW;
        }

        let mut best = Value::MIN;
        for cell in generate_moves(pos) {
            let mut child = pos.do_move(cell);
            let value = -self.search(&mut child);
            if value > best {
                best = value;
            }
        }

        self.tt.store(key, pos, TTData::Score(best));
        self.stats.tt_stores += 1;
        best
    }
}
