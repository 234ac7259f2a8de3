//! 探索統計
//!
//! ノード数と置換表の利用状況。チューニングやデバッグに使用する。

/// 探索統計カウンタ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// 総ノード数（探索関数の呼び出し回数）
    pub nodes: u64,
    /// 置換表ヒット数（種別・局面が一致したもの）
    pub tt_hits: u64,
    /// 置換表書き込み数
    pub tt_stores: u64,
}

impl SearchStats {
    /// 置換表ヒット率（0.0〜1.0）
    pub fn tt_hit_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.nodes as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate() {
        assert_eq!(SearchStats::default().tt_hit_rate(), 0.0);
        let stats = SearchStats {
            nodes: 10,
            tt_hits: 4,
            tt_stores: 6,
        };
        assert!((stats.tt_hit_rate() - 0.4).abs() < 1e-12);
    }
}
