//! スコープ付き着手

use std::ops::{Deref, DerefMut};

use super::Position;
use crate::types::Cell;

/// `Position::do_move` が返すガード
///
/// 生存中は手を指した後の局面として `Position` に deref する。
/// drop 時（早期 return・panic による巻き戻しを含む）に必ず手を戻す。
/// 入れ子のガードは借用規則により必ず内側から順に drop される。
#[must_use = "dropping the guard immediately undoes the move"]
pub struct MoveGuard<'a> {
    pos: &'a mut Position,
    cell: Cell,
}

impl<'a> MoveGuard<'a> {
    #[inline]
    pub(super) fn new(pos: &'a mut Position, cell: Cell) -> Self {
        pos.make_move(cell);
        Self { pos, cell }
    }

    /// このガードが指した手
    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    #[inline]
    fn deref(&self) -> &Position {
        &*self.pos
    }
}

impl DerefMut for MoveGuard<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Position {
        &mut *self.pos
    }
}

impl Drop for MoveGuard<'_> {
    #[inline]
    fn drop(&mut self) {
        self.pos.unmake_move(self.cell);
    }
}
