//! 手番（Player）

/// 手番（先手/後手）
///
/// 先手の手番符号は +1、後手は -1。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    /// 手番の数
    pub const NUM: usize = 2;

    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// インデックスとして使用（配列アクセス用）
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// 手番符号（先手 +1 / 後手 -1）
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Player::First => 1,
            Player::Second => -1,
        }
    }

    /// 手番符号から生成（正なら先手、それ以外は後手）
    #[inline]
    pub const fn from_sign(sign: i8) -> Player {
        if sign > 0 { Player::First } else { Player::Second }
    }

    /// 盤面表示用の記号
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}
