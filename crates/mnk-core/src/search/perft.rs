//! perft（ノード数計測）
//!
//! 終局（勝ちライン完成・全マス埋まり）と残り深さ0は、どれも葉として1を返す。
//! 「ゲーム終了による葉」と「深さ打ち切りによる葉」を区別しないのが計測の約束事。

use super::Solver;
use crate::eval;
use crate::movegen::{empty_cells, generate_moves};
use crate::position::Position;
use crate::tt::TTData;
use crate::types::Cell;

impl Solver {
    /// 指定深さまでのノード数（葉の数）
    ///
    /// 空きマス数を超える深さは空きマス数と同じ結果になるので、そこで切り詰める。
    pub fn perft(&mut self, pos: &mut Position, depth: u32) -> u64 {
        let depth = clamp_depth(pos, depth);
        let nodes = self.perft_node(pos, depth);
        log::debug!(
            "perft({depth}) = {nodes} (visited={} tt_hits={})",
            self.stats.nodes,
            self.stats.tt_hits
        );
        nodes
    }

    /// ルートの手ごとの perft（`depth - 1` で数えた子の葉数）
    ///
    /// 合計は `perft(depth)` と一致する。`depth == 0` またはルートが終局なら空。
    pub fn perft_divide(&mut self, pos: &mut Position, depth: u32) -> Vec<(Cell, u64)> {
        let depth = clamp_depth(pos, depth);
        if depth == 0 || eval::is_end_game(pos) || eval::is_draw(pos) {
            return Vec::new();
        }
        generate_moves(pos)
            .into_iter()
            .map(|cell| {
                let mut child = pos.do_move(cell);
                (cell, self.perft_node(&mut child, depth - 1))
            })
            .collect()
    }

    fn perft_node(&mut self, pos: &mut Position, depth: u8) -> u64 {
        self.stats.nodes += 1;
        let key = pos.key();

        // ノード数エントリは残り深さも一致したものだけ使う
        if let Some(TTData::Nodes { depth: d, count }) = self.tt.probe(key, pos) {
            if d == depth {
                self.stats.tt_hits += 1;
                return count;
            }
        }

        if eval::is_end_game(pos) || eval::is_draw(pos) || depth == 0 {
            return 1;
        }

        let mut total = 0;
        for cell in generate_moves(pos) {
            let mut child = pos.do_move(cell);
            total += self.perft_node(&mut child, depth - 1);
        }

        self.tt.store(key, pos, TTData::Nodes { depth, count: total });
        self.stats.tt_stores += 1;
        total
    }
}

/// 深さを空きマス数で切り詰める（空きマス数は64以下なので u8 に収まる）
#[inline]
fn clamp_depth(pos: &Position, depth: u32) -> u8 {
    depth.min(empty_cells(pos).count()) as u8
}
