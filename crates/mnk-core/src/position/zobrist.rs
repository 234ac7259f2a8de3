//! Zobristハッシュ
//!
//! 乱数テーブルはシードの純関数として生成する（Xoshiro256++）。
//! シードを省略した場合はプロセス起動後に一度だけ決めたシードを共有し、
//! 構築のたびに時刻から再シードするようなことはしない。

use std::sync::OnceLock;

use rand_xoshiro::Xoshiro256PlusPlus;
use rand_xoshiro::rand_core::{RngCore, SeedableRng};

use crate::types::{Cell, Player};

/// プロセス共通のデフォルトシード
static PROCESS_SEED: OnceLock<u64> = OnceLock::new();

/// プロセス内で一度だけ生成されるシードを取得
pub fn process_seed() -> u64 {
    *PROCESS_SEED.get_or_init(rand::random)
}

/// Zobristハッシュ用乱数テーブル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zobrist {
    /// マス×手番 [Cell.index()][Player.index()]
    psq: Vec<[u64; Player::NUM]>,
    /// 手番反転用（1手ごとにXORする）
    side: u64,
    /// 生成に使ったシード
    seed: u64,
}

impl Zobrist {
    /// `cells` マス分のテーブルをシードから生成
    pub fn new(cells: usize, seed: u64) -> Self {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let psq = (0..cells)
            .map(|_| [rng.next_u64(), rng.next_u64()])
            .collect();
        let side = rng.next_u64();
        Self { psq, side, seed }
    }

    /// プロセス共通シードでテーブルを生成
    pub fn with_process_seed(cells: usize) -> Self {
        Self::new(cells, process_seed())
    }

    /// マス数
    #[inline]
    pub fn cells(&self) -> usize {
        self.psq.len()
    }

    /// 生成に使ったシード
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// マスと手番のハッシュを取得
    #[inline]
    pub fn psq(&self, cell: Cell, player: Player) -> u64 {
        self.psq[cell.index()][player.index()]
    }

    /// 手番反転のハッシュを取得
    #[inline]
    pub fn side(&self) -> u64 {
        self.side
    }
}
