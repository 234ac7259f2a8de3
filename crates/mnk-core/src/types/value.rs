//! 評価値（Value）
//!
//! 全幅探索で終局まで読み切るため、値は 勝ち(+1) / 引き分け(0) / 負け(-1) の3値のみ。
//! 常に「その局面の手番側」から見た値で、親ノードでは符号反転して比較する（negamax）。

/// 評価値
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Value(i8);

impl Value {
    /// 勝ち
    pub const WIN: Value = Value(1);
    /// 引き分け
    pub const DRAW: Value = Value(0);
    /// 負け
    pub const LOSS: Value = Value(-1);
    /// 子ノード未評価時の初期値（どの実値よりも小さい）
    pub const MIN: Value = Value(-100);

    /// 値から生成
    #[inline]
    pub const fn new(v: i8) -> Value {
        Value(v)
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i8 {
        self.0
    }

    /// 勝ちかどうか
    #[inline]
    pub const fn is_win(self) -> bool {
        self.0 > 0
    }

    /// 負けかどうか
    #[inline]
    pub const fn is_loss(self) -> bool {
        self.0 < 0
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::DRAW
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl From<Value> for i8 {
    fn from(v: Value) -> i8 {
        v.0
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            v if v > 0 => write!(f, "win"),
            0 => write!(f, "draw"),
            _ => write!(f, "loss"),
        }
    }
}
