//! マス（Cell）

/// マス番号（0-63）
///
/// 配置: 行優先。`index = row * columns + col`、bit `index` が対応する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Cell(u8);

impl Cell {
    /// マス数の上限（u64 1ワードに収まる範囲）
    pub const MAX_CELLS: usize = 64;

    /// 番号から生成（範囲チェックなし、debugビルドのみ検査）
    #[inline]
    pub const fn new(index: u8) -> Cell {
        debug_assert!((index as usize) < Self::MAX_CELLS);
        Cell(index)
    }

    /// u8から生成（範囲チェックあり）
    #[inline]
    pub const fn from_u8(n: u8) -> Option<Cell> {
        if (n as usize) < Self::MAX_CELLS {
            Some(Cell(n))
        } else {
            None
        }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 内部値を取得
    #[inline]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// このマスだけが立ったビットマスク
    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.0
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> usize {
        cell.index()
    }
}
