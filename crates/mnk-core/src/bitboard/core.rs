//! Bitboard本体

use crate::types::Cell;

/// 64bit盤面表現
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// 空のBitboard
    pub const EMPTY: Bitboard = Bitboard(0);

    /// 生の値から生成
    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    /// 単一マスのBitboard
    #[inline]
    pub const fn from_cell(cell: Cell) -> Bitboard {
        Bitboard(cell.mask())
    }

    /// 下位 `n` bit がすべて立ったBitboard（n <= 64）
    #[inline]
    pub const fn low_bits(n: usize) -> Bitboard {
        if n >= 64 {
            Bitboard(u64::MAX)
        } else {
            Bitboard((1u64 << n) - 1)
        }
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// 空かどうか
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// 指定マスのビットが立っているか
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        self.0 & cell.mask() != 0
    }

    /// `mask` のビットをすべて含むか
    #[inline]
    pub const fn contains_all(self, mask: Bitboard) -> bool {
        self.0 & mask.0 == mask.0
    }

    /// 共通ビットがあるか
    #[inline]
    pub const fn intersects(self, other: Bitboard) -> bool {
        self.0 & other.0 != 0
    }

    /// 立っているビット数
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// 最下位ビットのマスを取り出して消す（空の場合は呼ばないこと）
    #[inline]
    pub fn pop(&mut self) -> Cell {
        debug_assert!(!self.is_empty());
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Cell::new(idx)
    }

    /// 昇順イテレータ
    #[inline]
    pub const fn iter(self) -> BitboardIter {
        BitboardIter(self)
    }
}

// ビット演算
impl std::ops::BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Bitboard) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Bitboard) {
        self.0 ^= rhs.0;
    }
}

impl IntoIterator for Bitboard {
    type Item = Cell;
    type IntoIter = BitboardIter;

    #[inline]
    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}

/// Bitboardのイテレータ（マス番号の昇順）
pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Cell> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.pop())
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let count = self.0.count() as usize;
        (count, Some(count))
    }
}

impl ExactSizeIterator for BitboardIter {}
