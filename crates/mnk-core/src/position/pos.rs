//! 局面本体

use std::fmt;
use std::sync::Arc;

use super::{MoveError, MoveGuard, Zobrist};
use crate::bitboard::Bitboard;
use crate::eval;
use crate::geometry::{BoardGeometry, GeometryError};
use crate::search::MnkResult;
use crate::types::{Cell, Player};

/// 局面
///
/// 2人分のBitboardは互いに素（同じマスに両者の石はない）。
/// 盤面形状とZobristテーブルは不変なので `Arc` で共有する。
#[derive(Debug, Clone)]
pub struct Position {
    geometry: Arc<BoardGeometry>,
    zobrist: Arc<Zobrist>,
    /// 手番ごとの石 [Player.index()]
    boards: [Bitboard; Player::NUM],
    /// 手番
    side_to_move: Player,
    /// Zobristキー（差分更新）
    key: u64,
}

impl Position {
    /// 空の盤面（先手番）を作成
    ///
    /// `zobrist` のマス数が `geometry` と違えばエラー。
    pub fn new(
        geometry: Arc<BoardGeometry>,
        zobrist: Arc<Zobrist>,
    ) -> Result<Self, GeometryError> {
        if geometry.cells() != zobrist.cells() {
            return Err(GeometryError::ZobristSizeMismatch {
                cells: geometry.cells(),
                zobrist_cells: zobrist.cells(),
            });
        }
        Ok(Self::with_tables(geometry, zobrist))
    }

    /// 検証済みのテーブルから空の盤面を作成
    fn with_tables(geometry: Arc<BoardGeometry>, zobrist: Arc<Zobrist>) -> Self {
        Self {
            geometry,
            zobrist,
            boards: [Bitboard::EMPTY; Player::NUM],
            side_to_move: Player::First,
            key: 0,
        }
    }

    /// 盤面パラメータとシードから空の盤面を作成
    pub fn with_seed(
        columns: usize,
        rows: usize,
        run_length: usize,
        seed: u64,
    ) -> Result<Self, GeometryError> {
        let geometry = BoardGeometry::new(columns, rows, run_length)?;
        let zobrist = Zobrist::new(geometry.cells(), seed);
        Ok(Self::with_tables(Arc::new(geometry), Arc::new(zobrist)))
    }

    /// 盤面パラメータから空の盤面を作成（プロセス共通シード）
    pub fn empty(columns: usize, rows: usize, run_length: usize) -> Result<Self, GeometryError> {
        Self::with_seed(columns, rows, run_length, super::process_seed())
    }

    /// 空の盤面から手順を検証付きで適用した局面を作成
    pub fn from_moves<I>(
        geometry: Arc<BoardGeometry>,
        zobrist: Arc<Zobrist>,
        moves: I,
    ) -> MnkResult<Self>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut pos = Self::new(geometry, zobrist)?;
        for cell in moves {
            pos.play(cell)?;
        }
        Ok(pos)
    }

    /// 同じ盤面形状・Zobristテーブルを共有する空の局面
    pub fn fresh(&self) -> Self {
        Self::with_tables(Arc::clone(&self.geometry), Arc::clone(&self.zobrist))
    }

    // =========================================================================
    // アクセサ
    // =========================================================================

    /// 盤面形状
    #[inline]
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// 共有中の盤面形状
    #[inline]
    pub fn geometry_arc(&self) -> &Arc<BoardGeometry> {
        &self.geometry
    }

    /// Zobristテーブル
    #[inline]
    pub fn zobrist(&self) -> &Arc<Zobrist> {
        &self.zobrist
    }

    /// 手番ごとの石
    #[inline]
    pub fn boards(&self) -> [Bitboard; Player::NUM] {
        self.boards
    }

    /// 指定手番の石
    #[inline]
    pub fn board(&self, player: Player) -> Bitboard {
        self.boards[player.index()]
    }

    /// 全石
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.boards[0] | self.boards[1]
    }

    /// 手番
    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    /// 手番符号（先手 +1 / 後手 -1）
    #[inline]
    pub fn turn(&self) -> i8 {
        self.side_to_move.sign()
    }

    /// Zobristキー
    #[inline]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// 盤上の石数（= 手数）
    #[inline]
    pub fn ply(&self) -> u32 {
        self.occupied().count()
    }

    /// 指定マスの石
    pub fn piece_on(&self, cell: Cell) -> Option<Player> {
        if self.boards[Player::First.index()].contains(cell) {
            Some(Player::First)
        } else if self.boards[Player::Second.index()].contains(cell) {
            Some(Player::Second)
        } else {
            None
        }
    }

    /// Zobristキーを盤面から再計算する（差分更新の検証用）
    pub fn compute_key(&self) -> u64 {
        let mut key = 0;
        for player in [Player::First, Player::Second] {
            for cell in self.board(player) {
                key ^= self.zobrist.psq(cell, player);
            }
        }
        if self.side_to_move == Player::Second {
            key ^= self.zobrist.side();
        }
        key
    }

    // =========================================================================
    // 着手
    // =========================================================================

    /// 手を指し、drop時に巻き戻すガードを返す
    ///
    /// `cell` は盤内の空きマスであること（`generate_moves` の結果を渡す前提）。
    /// 検査は debug ビルドのみ。
    #[inline]
    pub fn do_move(&mut self, cell: Cell) -> MoveGuard<'_> {
        MoveGuard::new(self, cell)
    }

    /// 検証付きで手を指す（巻き戻さない）
    pub fn play(&mut self, cell: Cell) -> Result<(), MoveError> {
        if !self.geometry.contains(cell) {
            return Err(MoveError::OutOfRange {
                cell,
                cells: self.geometry.cells(),
            });
        }
        if self.occupied().contains(cell) {
            return Err(MoveError::Occupied { cell });
        }
        if eval::is_end_game(self) {
            return Err(MoveError::GameOver);
        }
        self.make_move(cell);
        Ok(())
    }

    /// 手を指す（`MoveGuard` 経由でのみ呼ぶ）
    #[inline]
    pub(super) fn make_move(&mut self, cell: Cell) {
        debug_assert!(self.geometry.contains(cell), "cell {cell} out of range");
        debug_assert!(!self.occupied().contains(cell), "cell {cell} occupied");

        let us = self.side_to_move;
        self.boards[us.index()] |= self.geometry.move_mask(cell);
        self.side_to_move = !us;

        self.key ^= self.zobrist.psq(cell, us);
        self.key ^= self.zobrist.side();
    }

    /// 手を戻す（`MoveGuard` の drop からのみ呼ぶ）
    #[inline]
    pub(super) fn unmake_move(&mut self, cell: Cell) {
        self.side_to_move = !self.side_to_move;
        let us = self.side_to_move;
        debug_assert!(self.boards[us.index()].contains(cell), "cell {cell} not ours");
        self.boards[us.index()] ^= self.geometry.move_mask(cell);

        self.key ^= self.zobrist.psq(cell, us);
        self.key ^= self.zobrist.side();
    }
}

impl fmt::Display for Position {
    /// 上の行から順に `X`（先手）`O`（後手）`.`（空き）で出力
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = self.geometry.columns();
        for row in 0..self.geometry.rows() {
            for col in 0..columns {
                let cell = Cell::new((row * columns + col) as u8);
                let c = self.piece_on(cell).map_or('.', Player::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
