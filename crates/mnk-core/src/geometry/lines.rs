//! 勝ちラインの列挙
//!
//! 各マスを始点として 縦 → 横 → 右下がり斜め → 左下がり斜め の順に、
//! 盤からはみ出さない（行をまたいで折り返さない）ラインだけを生成する。

use crate::bitboard::Bitboard;

/// 方向ごとのマス番号の増分と、始点から k マス伸ばせるかの判定
#[derive(Clone, Copy)]
enum Direction {
    /// 下方向（行+1）
    Vertical,
    /// 右方向（列+1）
    Horizontal,
    /// 右下（行+1, 列+1）
    DiagonalRight,
    /// 左下（行+1, 列-1）
    DiagonalLeft,
}

impl Direction {
    const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::DiagonalRight,
        Direction::DiagonalLeft,
    ];

    /// (列の増分, 行の増分)
    #[inline]
    const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (0, 1),
            Direction::Horizontal => (1, 0),
            Direction::DiagonalRight => (1, 1),
            Direction::DiagonalLeft => (-1, 1),
        }
    }
}

/// (col, row) から `dir` 方向に k マスのラインが盤内に収まればマスクを返す
fn line_from(
    col: usize,
    row: usize,
    dir: Direction,
    columns: usize,
    rows: usize,
    k: usize,
) -> Option<Bitboard> {
    let (dc, dr) = dir.delta();
    let span = k as isize - 1;
    let end_col = col as isize + dc * span;
    let end_row = row as isize + dr * span;
    if end_col < 0 || end_col >= columns as isize || end_row >= rows as isize {
        return None;
    }

    let mut mask = 0u64;
    for j in 0..k as isize {
        let c = (col as isize + dc * j) as usize;
        let r = (row as isize + dr * j) as usize;
        mask |= 1u64 << (r * columns + c);
    }
    Some(Bitboard::new(mask))
}

/// 盤上のすべての勝ちラインを列挙
pub(super) fn win_masks(columns: usize, rows: usize, k: usize) -> Vec<Bitboard> {
    let mut masks = Vec::new();
    for i in 0..columns * rows {
        let (col, row) = (i % columns, i / columns);
        masks.extend(
            Direction::ALL
                .iter()
                .filter_map(|&dir| line_from(col, row, dir, columns, rows, k)),
        );
    }
    masks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(masks: &[Bitboard]) -> Vec<u64> {
        masks.iter().map(|m| m.raw()).collect()
    }

    #[test]
    fn test_lines_3x3_order() {
        // マス0: 縦(0,3,6) 横(0,1,2) 右下(0,4,8)
        // マス1: 縦(1,4,7)
        // マス2: 縦(2,5,8) 左下(2,4,6)
        // マス3: 横(3,4,5)  マス6: 横(6,7,8)
        let masks = win_masks(3, 3, 3);
        assert_eq!(
            raw(&masks),
            vec![
                0b001_001_001,
                0b000_000_111,
                0b100_010_001,
                0b010_010_010,
                0b100_100_100,
                0b001_010_100,
                0b000_111_000,
                0b111_000_000,
            ]
        );
    }

    #[test]
    fn test_lines_no_wraparound() {
        // 4x3 の横ラインは行をまたがない
        for mask in win_masks(4, 3, 3) {
            let rows_touched: Vec<u64> = (0..3).map(|r| (mask.raw() >> (r * 4)) & 0xF).collect();
            let nonempty = rows_touched.iter().filter(|&&r| r != 0).count();
            if nonempty == 1 {
                let row_bits = rows_touched.iter().find(|&&r| r != 0).copied().unwrap_or(0);
                assert!(row_bits == 0b0111 || row_bits == 0b1110);
            }
        }
    }

    #[test]
    fn test_lines_k_larger_than_columns() {
        // 2列5行、k=3: 縦ラインのみ（2列 × 3始点）
        let masks = win_masks(2, 5, 3);
        assert_eq!(masks.len(), 6);
        assert!(masks.iter().all(|m| m.count() == 3));
    }
}
