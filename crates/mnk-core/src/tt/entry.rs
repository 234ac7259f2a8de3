//! 置換表エントリー
//!
//! TTEntry: 32バイトの固定長エントリ
//! TTData: 読み取り用のデータ構造

use crate::bitboard::Bitboard;
use crate::types::{Player, Value};

/// エントリの種別タグ
const KIND_EMPTY: u8 = 0;
const KIND_SCORE: u8 = 1;
const KIND_NODES: u8 = 2;

/// 置換表に保存するデータ
///
/// negamax の評価値と perft のノード数を同じテーブルに置くため、種別をタグで区別する。
/// 種別が違うエントリはヒットとして扱わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TTData {
    /// negamax の確定値（手番側から見た値）
    Score(Value),
    /// perft のノード数（残り深さごと）
    Nodes { depth: u8, count: u64 },
}

/// 置換表エントリー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct TTEntry {
    /// 先手・後手の石（完全一致の検証用）
    boards: [u64; Player::NUM],
    /// 評価値（i8）またはノード数
    payload: u64,
    /// 手番符号
    turn: i8,
    /// KIND_*
    kind: u8,
    /// perft の残り深さ
    depth: u8,
    /// 盤面形状 (列数, 行数, k)
    shape: [u8; 3],
    _padding: [u8; 2],
}

// エントリサイズが32バイトであることを保証
const _: () = assert!(std::mem::size_of::<TTEntry>() == 32);

impl TTEntry {
    /// 空のエントリ
    pub const EMPTY: TTEntry = TTEntry {
        boards: [0; Player::NUM],
        payload: 0,
        turn: 0,
        kind: KIND_EMPTY,
        depth: 0,
        shape: [0; 3],
        _padding: [0; 2],
    };

    /// データを詰めたエントリを作成
    #[inline]
    pub fn new(boards: [Bitboard; Player::NUM], turn: i8, shape: [u8; 3], data: TTData) -> Self {
        let (kind, depth, payload) = match data {
            TTData::Score(v) => (KIND_SCORE, 0, v.raw() as u8 as u64),
            TTData::Nodes { depth, count } => (KIND_NODES, depth, count),
        };
        Self {
            boards: [boards[0].raw(), boards[1].raw()],
            payload,
            turn,
            kind,
            depth,
            shape,
            _padding: [0; 2],
        }
    }

    /// エントリが使用されているか
    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.kind != KIND_EMPTY
    }

    /// 局面（Bitboard・手番・盤面形状）が一致するか
    ///
    /// マス数が同じ形状どうしは Bitboard もキーも同じになり得るので、形状も比較する。
    #[inline]
    pub fn matches(&self, boards: [Bitboard; Player::NUM], turn: i8, shape: [u8; 3]) -> bool {
        self.is_occupied()
            && self.boards[0] == boards[0].raw()
            && self.boards[1] == boards[1].raw()
            && self.turn == turn
            && self.shape == shape
    }

    /// エントリを読み取る
    #[inline]
    pub fn read(&self) -> Option<TTData> {
        match self.kind {
            KIND_SCORE => Some(TTData::Score(Value::new(self.payload as u8 as i8))),
            KIND_NODES => Some(TTData::Nodes {
                depth: self.depth,
                count: self.payload,
            }),
            _ => None,
        }
    }
}

impl Default for TTEntry {
    fn default() -> Self {
        Self::EMPTY
    }
}
