//! perft のテスト

use super::{TEST_TT_CAPACITY, after, empty};
use crate::search::Solver;
use crate::types::Value;

/// 4列×3行 k=3 の perft(0..=12)
const PERFT_4X3_K3: [u64; 13] = [
    1,
    12,
    132,
    1_320,
    11_880,
    95_040,
    628_992,
    3_544_992,
    14_770_080,
    48_424_608,
    102_775_968,
    151_188_768,
    151_188_768,
];

/// 3×3 k=3 の perft(0..=9)
const PERFT_3X3_K3: [u64; 10] = [1, 9, 72, 504, 3_024, 15_120, 56_160, 154_944, 255_168, 255_168];

fn solver() -> Solver {
    Solver::with_capacity(TEST_TT_CAPACITY).unwrap()
}

#[test]
fn test_perft_4x3_k3_fixture() {
    let mut s = solver();
    let mut pos = empty(4, 3, 3);
    for (depth, &expected) in PERFT_4X3_K3.iter().enumerate() {
        s.clear_tt();
        assert_eq!(s.perft(&mut pos, depth as u32), expected, "depth={depth}");
    }
}

#[test]
fn test_perft_3x3_k3_fixture() {
    let mut s = solver();
    let mut pos = empty(3, 3, 3);
    for (depth, &expected) in PERFT_3X3_K3.iter().enumerate() {
        s.clear_tt();
        assert_eq!(s.perft(&mut pos, depth as u32), expected, "depth={depth}");
    }
}

#[test]
fn test_perft_single_cell() {
    let mut s = solver();
    let mut pos = empty(1, 1, 1);
    assert_eq!(s.perft(&mut pos, 0), 1);
    assert_eq!(s.perft(&mut pos, 1), 1);
    assert_eq!(s.perft(&mut pos, 5), 1);
}

#[test]
fn test_perft_depth_zero_is_one() {
    let mut s = solver();
    for (m, n, k) in [(1, 1, 1), (3, 3, 3), (4, 3, 3), (7, 6, 4), (8, 8, 5), (1, 64, 4)] {
        let mut pos = empty(m, n, k);
        assert_eq!(s.perft(&mut pos, 0), 1, "{m}x{n} k={k}");
    }
}

#[test]
fn test_perft_shallow_is_falling_factorial() {
    // 3手以内では k=3 のラインは完成しない（先手は最大2石）
    let mut s = solver();
    let mut pos = empty(8, 8, 3);
    assert_eq!(s.perft(&mut pos, 1), 64);
    assert_eq!(s.perft(&mut pos, 2), 64 * 63);
    assert_eq!(s.perft(&mut pos, 3), 64 * 63 * 62);
}

#[test]
fn test_perft_without_clear_between_depths() {
    // 残り深さもエントリに含めるので、クリアしなくても古い深さの値は使われない
    let mut s = solver();
    let mut pos = empty(3, 3, 3);
    assert_eq!(s.perft(&mut pos, 3), PERFT_3X3_K3[3]);
    assert_eq!(s.perft(&mut pos, 5), PERFT_3X3_K3[5]);
    assert_eq!(s.perft(&mut pos, 4), PERFT_3X3_K3[4]);
}

#[test]
fn test_perft_and_negamax_share_table() {
    // 評価値エントリがノード数として読まれることはない（逆も同様）
    let mut s = solver();
    let mut pos = empty(3, 3, 3);
    assert_eq!(s.negamax(&mut pos), Value::DRAW);
    assert_eq!(s.perft(&mut pos, 9), PERFT_3X3_K3[9]);
    assert_eq!(s.negamax(&mut pos), Value::DRAW);
    assert_eq!(s.perft(&mut pos, 9), PERFT_3X3_K3[9]);
}

#[test]
fn test_perft_independent_of_tt_capacity() {
    let mut tiny = Solver::with_capacity(1).unwrap();
    let mut pos = empty(3, 3, 3);
    assert_eq!(tiny.perft(&mut pos, 9), PERFT_3X3_K3[9]);

    let mut odd = Solver::with_capacity(97).unwrap();
    assert_eq!(odd.perft(&mut pos, 9), PERFT_3X3_K3[9]);
}

#[test]
fn test_perft_shared_solver_across_shapes() {
    let mut shared = solver();
    let mut k3 = empty(3, 3, 3);
    let mut k2 = empty(3, 3, 2);
    let k2_expected = solver().perft(&mut k2, 9);
    // k=2 は早く終局するので葉の数が少ない
    assert!(k2_expected < PERFT_3X3_K3[9]);

    assert_eq!(shared.perft(&mut k3, 9), PERFT_3X3_K3[9]);
    assert_eq!(shared.perft(&mut k2, 9), k2_expected);
    assert_eq!(shared.perft(&mut k3, 9), PERFT_3X3_K3[9]);
}

#[test]
fn test_perft_restores_position() {
    let mut s = solver();
    let mut pos = after(4, 3, 3, &[1, 6]);
    let before = (pos.boards(), pos.side_to_move(), pos.key());
    s.perft(&mut pos, 6);
    assert_eq!((pos.boards(), pos.side_to_move(), pos.key()), before);
}

#[test]
fn test_perft_terminal_root_is_one() {
    let mut s = solver();
    let mut won = after(3, 3, 3, &[0, 3, 1, 4, 2]);
    assert_eq!(s.perft(&mut won, 4), 1);
    assert!(s.perft_divide(&mut won, 4).is_empty());
}

#[test]
fn test_perft_divide_sums_to_perft() {
    let mut s = solver();
    let mut pos = empty(4, 3, 3);
    for depth in [1u32, 4, 7] {
        s.clear_tt();
        let divide = s.perft_divide(&mut pos, depth);
        assert_eq!(divide.len(), 12);
        let total: u64 = divide.iter().map(|&(_, n)| n).sum();
        assert_eq!(total, PERFT_4X3_K3[depth as usize], "depth={depth}");
    }
    assert!(s.perft_divide(&mut pos, 0).is_empty());
}

#[test]
fn test_perft_uses_tt() {
    let mut s = solver();
    let mut pos = empty(4, 3, 3);
    s.perft(&mut pos, 8);
    let stats = s.stats();
    assert!(stats.tt_hits > 0);
    // 置換表のおかげで訪問ノード数は葉の数よりずっと少ない
    assert!(stats.nodes < PERFT_4X3_K3[8]);
}
