//! 終局判定モジュール
//!
//! 探索の各ノードでは `is_end_game` → `is_draw` の順に判定する。
//! 勝ちラインを完成させられるのは直前に指した側だけなので、
//! `is_end_game` が真なら手番側の負けが確定している。

use crate::position::Position;
use crate::types::Player;

/// いずれかの手番が勝ちラインを完成させているか
#[inline]
pub fn is_end_game(pos: &Position) -> bool {
    let [first, second] = pos.boards();
    pos.geometry()
        .win_masks()
        .iter()
        .any(|&line| first.contains_all(line) || second.contains_all(line))
}

/// 全マスが埋まっているか
///
/// 勝ちライン判定より後に呼ぶこと（最後の1手で勝った場合は勝ちが優先）。
#[inline]
pub fn is_draw(pos: &Position) -> bool {
    pos.occupied() == pos.geometry().draw_mask()
}

/// 勝ちラインを完成させた手番
pub fn winner(pos: &Position) -> Option<Player> {
    [Player::First, Player::Second].into_iter().find(|&player| {
        let board = pos.board(player);
        pos.geometry()
            .win_masks()
            .iter()
            .any(|&line| board.contains_all(line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn play_all(columns: usize, rows: usize, k: usize, moves: &[u8]) -> Position {
        let mut pos = Position::with_seed(columns, rows, k, 3).unwrap();
        for &i in moves {
            pos.play(Cell::new(i)).unwrap();
        }
        pos
    }

    #[test]
    fn test_empty_board_not_terminal() {
        let pos = play_all(3, 3, 3, &[]);
        assert!(!is_end_game(&pos));
        assert!(!is_draw(&pos));
        assert_eq!(winner(&pos), None);
    }

    #[test]
    fn test_vertical_win() {
        // X: 1,4,7
        let pos = play_all(3, 3, 3, &[1, 0, 4, 2, 7]);
        assert!(is_end_game(&pos));
        assert_eq!(winner(&pos), Some(Player::First));
    }

    #[test]
    fn test_diagonal_left_win_second_player() {
        // O: 2,4,6
        let pos = play_all(3, 3, 3, &[0, 2, 1, 4, 8, 6]);
        assert!(is_end_game(&pos));
        assert_eq!(winner(&pos), Some(Player::Second));
    }

    #[test]
    fn test_draw_full_board() {
        // X O X / X O O / O X X
        let pos = play_all(3, 3, 3, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(!is_end_game(&pos));
        assert!(is_draw(&pos));
    }

    #[test]
    fn test_single_cell_board() {
        let pos = play_all(1, 1, 1, &[0]);
        assert!(is_end_game(&pos));
        assert!(is_draw(&pos));
        assert_eq!(winner(&pos), Some(Player::First));
    }
}
