//! hq3x: 3x3 output block per source pixel.
//!
//! Corners blend like their hq2x counterparts with weights adapted to the
//! smaller corner cell. Edge cells copy the center when their edge neighbour
//! differs and lean 3:1 toward it otherwise; where the adjacent corner
//! resolves a diagonal tie, the edge follows the same tie-break.

use std::sync::OnceLock;

use super::{op, tie, Blend, Cell, Corner::*, RuleTable};
use crate::classify::PatternCode;
use crate::neighborhood::Tap;

/// Interpolation operations of the 3x table.
///
/// Corner cells use `A`, `B`, `C` as in hq2x. Edge cells have a single
/// neighbour `n` (north, west, east or south) and only use `P0`, `P1`, `P3`
/// and `P6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    /// center
    P0,
    /// (3c + n) / 4
    P1,
    /// (7c + n) / 8
    P3,
    /// (c + 3n) / 4
    P6,
    /// (3c + A) / 4
    P10,
    /// (3c + B) / 4
    P11,
    /// (3c + C) / 4
    P12,
    /// (2c + B + C) / 4
    P20,
    /// (2c + 7B + 7C) / 16
    P40,
    /// (B + C) / 2
    P50,
}

use Op::*;

static TABLE: OnceLock<RuleTable<9>> = OnceLock::new();

/// The shared hq3x table.
pub fn table() -> &'static RuleTable<9> {
    TABLE.get_or_init(|| RuleTable::build(cells, blend))
}

/// Taps used by each of the nine cells, row-major.
fn cell_taps(index: usize) -> [Tap; 3] {
    match index {
        0 => TopLeft.taps(),
        1 => [Tap::North; 3],
        2 => TopRight.taps(),
        3 => [Tap::West; 3],
        5 => [Tap::East; 3],
        6 => BottomLeft.taps(),
        7 => [Tap::South; 3],
        8 => BottomRight.taps(),
        _ => [Tap::Center; 3],
    }
}

fn blend(index: usize, op: Op) -> Blend {
    let [a, b, c] = cell_taps(index);
    match op {
        P0 => Blend::COPY,
        P1 | P10 => Blend::pair(3, a, 1, 2),
        P3 => Blend::pair(7, a, 1, 3),
        P6 => Blend::pair(1, a, 3, 2),
        P11 => Blend::pair(3, b, 1, 2),
        P12 => Blend::pair(3, c, 1, 2),
        P20 => Blend::triple(2, b, 1, c, 1, 2),
        P40 => Blend::triple(2, b, 7, c, 7, 4),
        P50 => Blend::triple(0, b, 1, c, 1, 1),
    }
}

/// Sub-pixel operations for a pattern, nine cells in row-major order.
#[rustfmt::skip]
fn cells(pattern: PatternCode) -> [Cell<Op>; 9] {
    match pattern {
        0 | 1 | 4 | 5 | 32 | 33 | 36 | 37 | 128 | 129 | 132 | 133 | 160 | 161 | 164 | 165 => [
            op(P20), op(P1), op(P20),
            op(P1), op(P0), op(P1),
            op(P20), op(P1), op(P20),
        ],
        2 | 34 | 130 | 162 => [
            op(P10), op(P0), op(P10),
            op(P1), op(P0), op(P1),
            op(P20), op(P1), op(P20),
        ],
        3 | 35 | 131 | 163 => [
            op(P11), op(P0), op(P10),
            op(P1), op(P0), op(P1),
            op(P20), op(P1), op(P20),
        ],
        6 | 38 | 134 | 166 => [
            op(P10), op(P0), op(P12),
            op(P1), op(P0), op(P1),
            op(P20), op(P1), op(P20),
        ],
        7 | 39 | 135 | 167 => [
            op(P11), op(P0), op(P12),
            op(P1), op(P0), op(P1),
            op(P20), op(P1), op(P20),
        ],
        8 | 12 | 136 | 140 => [
            op(P10), op(P1), op(P20),
            op(P0), op(P0), op(P1),
            op(P10), op(P1), op(P20),
        ],
        9 | 13 | 137 | 141 => [
            op(P12), op(P1), op(P20),
            op(P0), op(P0), op(P1),
            op(P10), op(P1), op(P20),
        ],
        10 | 138 => [
            tie(TopLeft, P10, P40), tie(TopLeft, P0, P3), op(P10),
            tie(TopLeft, P0, P3), op(P0), op(P1),
            op(P10), op(P1), op(P20),
        ],
        11 | 139 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), op(P10),
            tie(TopLeft, P0, P3), op(P0), op(P1),
            op(P10), op(P1), op(P20),
        ],
        14 | 142 => [
            tie(TopLeft, P10, P50), tie(TopLeft, P0, P6), tie(TopLeft, P12, P20),
            tie(TopLeft, P0, P1), op(P0), op(P1),
            op(P10), op(P1), op(P20),
        ],
        15 | 143 => [
            tie(TopLeft, P0, P50), tie(TopLeft, P0, P6), tie(TopLeft, P12, P20),
            tie(TopLeft, P0, P1), op(P0), op(P1),
            op(P10), op(P1), op(P20),
        ],
        16 | 17 | 48 | 49 => [
            op(P20), op(P1), op(P10),
            op(P1), op(P0), op(P0),
            op(P20), op(P1), op(P10),
        ],
        18 | 50 => [
            op(P10), tie(TopRight, P0, P3), tie(TopRight, P10, P40),
            op(P1), op(P0), tie(TopRight, P0, P3),
            op(P20), op(P1), op(P10),
        ],
        19 | 51 => [
            tie(TopRight, P11, P20), tie(TopRight, P0, P6), tie(TopRight, P10, P50),
            op(P1), op(P0), tie(TopRight, P0, P1),
            op(P20), op(P1), op(P10),
        ],
        20 | 21 | 52 | 53 => [
            op(P20), op(P1), op(P11),
            op(P1), op(P0), op(P0),
            op(P20), op(P1), op(P10),
        ],
        22 | 54 => [
            op(P10), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P1), op(P0), tie(TopRight, P0, P3),
            op(P20), op(P1), op(P10),
        ],
        23 | 55 => [
            tie(TopRight, P11, P20), tie(TopRight, P0, P6), tie(TopRight, P0, P50),
            op(P1), op(P0), tie(TopRight, P0, P1),
            op(P20), op(P1), op(P10),
        ],
        24 => [
            op(P10), op(P1), op(P10),
            op(P0), op(P0), op(P0),
            op(P10), op(P1), op(P10),
        ],
        25 => [
            op(P12), op(P1), op(P10),
            op(P0), op(P0), op(P0),
            op(P10), op(P1), op(P10),
        ],
        26 | 31 => [
            tie(TopLeft, P0, P40), op(P0), tie(TopRight, P0, P40),
            tie(TopLeft, P0, P3), op(P0), tie(TopRight, P0, P3),
            op(P10), op(P1), op(P10),
        ],
        27 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), op(P10),
            tie(TopLeft, P0, P3), op(P0), op(P0),
            op(P10), op(P1), op(P10),
        ],
        28 => [
            op(P10), op(P1), op(P11),
            op(P0), op(P0), op(P0),
            op(P10), op(P1), op(P10),
        ],
        29 => [
            op(P12), op(P1), op(P11),
            op(P0), op(P0), op(P0),
            op(P10), op(P1), op(P10),
        ],
        30 => [
            op(P10), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P0), op(P0), tie(TopRight, P0, P3),
            op(P10), op(P1), op(P10),
        ],
        40 | 44 | 168 | 172 => [
            op(P10), op(P1), op(P20),
            op(P0), op(P0), op(P1),
            op(P11), op(P1), op(P20),
        ],
        41 | 45 | 169 | 173 => [
            op(P12), op(P1), op(P20),
            op(P0), op(P0), op(P1),
            op(P11), op(P1), op(P20),
        ],
        42 | 170 => [
            tie(TopLeft, P10, P50), tie(TopLeft, P0, P1), op(P10),
            tie(TopLeft, P0, P6), op(P0), op(P1),
            tie(TopLeft, P11, P20), op(P1), op(P20),
        ],
        43 | 171 => [
            tie(TopLeft, P0, P50), tie(TopLeft, P0, P1), op(P10),
            tie(TopLeft, P0, P6), op(P0), op(P1),
            tie(TopLeft, P11, P20), op(P1), op(P20),
        ],
        46 | 174 => [
            tie(TopLeft, P10, P20), op(P0), op(P12),
            op(P0), op(P0), op(P1),
            op(P11), op(P1), op(P20),
        ],
        47 | 175 => [
            tie(TopLeft, P0, P20), op(P0), op(P12),
            op(P0), op(P0), op(P1),
            op(P11), op(P1), op(P20),
        ],
        56 => [
            op(P10), op(P1), op(P10),
            op(P0), op(P0), op(P0),
            op(P11), op(P1), op(P10),
        ],
        57 => [
            op(P12), op(P1), op(P10),
            op(P0), op(P0), op(P0),
            op(P11), op(P1), op(P10),
        ],
        58 => [
            tie(TopLeft, P10, P20), op(P0), tie(TopRight, P10, P20),
            op(P0), op(P0), op(P0),
            op(P11), op(P1), op(P10),
        ],
        59 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), tie(TopRight, P10, P20),
            tie(TopLeft, P0, P3), op(P0), op(P0),
            op(P11), op(P1), op(P10),
        ],
        60 => [
            op(P10), op(P1), op(P11),
            op(P0), op(P0), op(P0),
            op(P11), op(P1), op(P10),
        ],
        61 => [
            op(P12), op(P1), op(P11),
            op(P0), op(P0), op(P0),
            op(P11), op(P1), op(P10),
        ],
        62 => [
            op(P10), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P0), op(P0), tie(TopRight, P0, P3),
            op(P11), op(P1), op(P10),
        ],
        63 => [
            tie(TopLeft, P0, P20), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P0), op(P0), tie(TopRight, P0, P3),
            op(P11), op(P1), op(P10),
        ],
        64 | 65 | 68 | 69 => [
            op(P20), op(P1), op(P20),
            op(P1), op(P0), op(P1),
            op(P10), op(P0), op(P10),
        ],
        66 => [
            op(P10), op(P0), op(P10),
            op(P1), op(P0), op(P1),
            op(P10), op(P0), op(P10),
        ],
        67 => [
            op(P11), op(P0), op(P10),
            op(P1), op(P0), op(P1),
            op(P10), op(P0), op(P10),
        ],
        70 => [
            op(P10), op(P0), op(P12),
            op(P1), op(P0), op(P1),
            op(P10), op(P0), op(P10),
        ],
        71 => [
            op(P11), op(P0), op(P12),
            op(P1), op(P0), op(P1),
            op(P10), op(P0), op(P10),
        ],
        72 | 76 => [
            op(P10), op(P1), op(P20),
            tie(BottomLeft, P0, P3), op(P0), op(P1),
            tie(BottomLeft, P10, P40), tie(BottomLeft, P0, P3), op(P10),
        ],
        73 | 77 => [
            tie(BottomLeft, P12, P20), op(P1), op(P20),
            tie(BottomLeft, P0, P6), op(P0), op(P1),
            tie(BottomLeft, P10, P50), tie(BottomLeft, P0, P1), op(P10),
        ],
        74 | 107 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), op(P10),
            op(P0), op(P0), op(P1),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), op(P10),
        ],
        75 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), op(P10),
            tie(TopLeft, P0, P3), op(P0), op(P1),
            op(P10), op(P0), op(P10),
        ],
        78 => [
            tie(TopLeft, P10, P20), op(P0), op(P12),
            op(P0), op(P0), op(P1),
            tie(BottomLeft, P10, P20), op(P0), op(P10),
        ],
        79 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), op(P12),
            tie(TopLeft, P0, P3), op(P0), op(P1),
            tie(BottomLeft, P10, P20), op(P0), op(P10),
        ],
        80 | 81 => [
            op(P20), op(P1), op(P10),
            op(P1), op(P0), tie(BottomRight, P0, P3),
            op(P10), tie(BottomRight, P0, P3), tie(BottomRight, P10, P40),
        ],
        82 | 214 => [
            op(P10), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P1), op(P0), op(P0),
            op(P10), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        83 => [
            op(P11), op(P0), tie(TopRight, P10, P20),
            op(P1), op(P0), op(P0),
            op(P10), op(P0), tie(BottomRight, P10, P20),
        ],
        84 | 85 => [
            op(P20), op(P1), tie(BottomRight, P11, P20),
            op(P1), op(P0), tie(BottomRight, P0, P6),
            op(P10), tie(BottomRight, P0, P1), tie(BottomRight, P10, P50),
        ],
        86 => [
            op(P10), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P1), op(P0), tie(TopRight, P0, P3),
            op(P10), op(P0), op(P10),
        ],
        87 => [
            op(P11), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P1), op(P0), tie(TopRight, P0, P3),
            op(P10), op(P0), tie(BottomRight, P10, P20),
        ],
        88 | 248 => [
            op(P10), op(P1), op(P10),
            tie(BottomLeft, P0, P3), op(P0), tie(BottomRight, P0, P3),
            tie(BottomLeft, P0, P40), op(P0), tie(BottomRight, P0, P40),
        ],
        89 => [
            op(P12), op(P1), op(P10),
            op(P0), op(P0), op(P0),
            tie(BottomLeft, P10, P20), op(P0), tie(BottomRight, P10, P20),
        ],
        90 => [
            tie(TopLeft, P10, P20), op(P0), tie(TopRight, P10, P20),
            op(P0), op(P0), op(P0),
            tie(BottomLeft, P10, P20), op(P0), tie(BottomRight, P10, P20),
        ],
        91 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), tie(TopRight, P10, P20),
            tie(TopLeft, P0, P3), op(P0), op(P0),
            tie(BottomLeft, P10, P20), op(P0), tie(BottomRight, P10, P20),
        ],
        92 => [
            op(P10), op(P1), op(P11),
            op(P0), op(P0), op(P0),
            tie(BottomLeft, P10, P20), op(P0), tie(BottomRight, P10, P20),
        ],
        93 => [
            op(P12), op(P1), op(P11),
            op(P0), op(P0), op(P0),
            tie(BottomLeft, P10, P20), op(P0), tie(BottomRight, P10, P20),
        ],
        94 => [
            tie(TopLeft, P10, P20), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P0), op(P0), tie(TopRight, P0, P3),
            tie(BottomLeft, P10, P20), op(P0), tie(BottomRight, P10, P20),
        ],
        95 => [
            tie(TopLeft, P0, P40), op(P0), tie(TopRight, P0, P40),
            tie(TopLeft, P0, P3), op(P0), tie(TopRight, P0, P3),
            op(P10), op(P0), op(P10),
        ],
        96 | 97 | 100 | 101 => [
            op(P20), op(P1), op(P20),
            op(P1), op(P0), op(P1),
            op(P12), op(P0), op(P10),
        ],
        98 => [
            op(P10), op(P0), op(P10),
            op(P1), op(P0), op(P1),
            op(P12), op(P0), op(P10),
        ],
        99 => [
            op(P11), op(P0), op(P10),
            op(P1), op(P0), op(P1),
            op(P12), op(P0), op(P10),
        ],
        102 => [
            op(P10), op(P0), op(P12),
            op(P1), op(P0), op(P1),
            op(P12), op(P0), op(P10),
        ],
        103 => [
            op(P11), op(P0), op(P12),
            op(P1), op(P0), op(P1),
            op(P12), op(P0), op(P10),
        ],
        104 | 108 => [
            op(P10), op(P1), op(P20),
            tie(BottomLeft, P0, P3), op(P0), op(P1),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), op(P10),
        ],
        105 | 109 => [
            tie(BottomLeft, P12, P20), op(P1), op(P20),
            tie(BottomLeft, P0, P6), op(P0), op(P1),
            tie(BottomLeft, P0, P50), tie(BottomLeft, P0, P1), op(P10),
        ],
        106 => [
            op(P10), op(P0), op(P10),
            tie(BottomLeft, P0, P3), op(P0), op(P1),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), op(P10),
        ],
        110 => [
            op(P10), op(P0), op(P12),
            tie(BottomLeft, P0, P3), op(P0), op(P1),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), op(P10),
        ],
        111 => [
            tie(TopLeft, P0, P20), op(P0), op(P12),
            tie(BottomLeft, P0, P3), op(P0), op(P1),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), op(P10),
        ],
        112 | 113 => [
            op(P20), op(P1), op(P10),
            op(P1), op(P0), tie(BottomRight, P0, P1),
            tie(BottomRight, P12, P20), tie(BottomRight, P0, P6), tie(BottomRight, P10, P50),
        ],
        114 => [
            op(P10), op(P0), tie(TopRight, P10, P20),
            op(P1), op(P0), op(P0),
            op(P12), op(P0), tie(BottomRight, P10, P20),
        ],
        115 => [
            op(P11), op(P0), tie(TopRight, P10, P20),
            op(P1), op(P0), op(P0),
            op(P12), op(P0), tie(BottomRight, P10, P20),
        ],
        116 | 117 => [
            op(P20), op(P1), op(P11),
            op(P1), op(P0), op(P0),
            op(P12), op(P0), tie(BottomRight, P10, P20),
        ],
        118 => [
            op(P10), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P1), op(P0), tie(TopRight, P0, P3),
            op(P12), op(P0), op(P10),
        ],
        119 => [
            tie(TopRight, P11, P20), tie(TopRight, P0, P6), tie(TopRight, P0, P50),
            op(P1), op(P0), tie(TopRight, P0, P1),
            op(P12), op(P0), op(P10),
        ],
        120 => [
            op(P10), op(P1), op(P10),
            tie(BottomLeft, P0, P3), op(P0), op(P0),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), op(P10),
        ],
        121 => [
            op(P12), op(P1), op(P10),
            tie(BottomLeft, P0, P3), op(P0), op(P0),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), tie(BottomRight, P10, P20),
        ],
        122 => [
            tie(TopLeft, P10, P20), op(P0), tie(TopRight, P10, P20),
            tie(BottomLeft, P0, P3), op(P0), op(P0),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), tie(BottomRight, P10, P20),
        ],
        123 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), op(P10),
            op(P0), op(P0), op(P0),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), op(P10),
        ],
        124 => [
            op(P10), op(P1), op(P11),
            tie(BottomLeft, P0, P3), op(P0), op(P0),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), op(P10),
        ],
        125 => [
            tie(BottomLeft, P12, P20), op(P1), op(P11),
            tie(BottomLeft, P0, P6), op(P0), op(P0),
            tie(BottomLeft, P0, P50), tie(BottomLeft, P0, P1), op(P10),
        ],
        126 => [
            op(P10), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            tie(BottomLeft, P0, P3), op(P0), tie(TopRight, P0, P3),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), op(P10),
        ],
        127 => [
            tie(TopLeft, P0, P20), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            tie(BottomLeft, P0, P3), op(P0), tie(TopRight, P0, P3),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), op(P10),
        ],
        144 | 145 | 176 | 177 => [
            op(P20), op(P1), op(P10),
            op(P1), op(P0), op(P0),
            op(P20), op(P1), op(P12),
        ],
        146 | 178 => [
            op(P10), tie(TopRight, P0, P1), tie(TopRight, P10, P50),
            op(P1), op(P0), tie(TopRight, P0, P6),
            op(P20), op(P1), tie(TopRight, P12, P20),
        ],
        147 | 179 => [
            op(P11), op(P0), tie(TopRight, P10, P20),
            op(P1), op(P0), op(P0),
            op(P20), op(P1), op(P12),
        ],
        148 | 149 | 180 | 181 => [
            op(P20), op(P1), op(P11),
            op(P1), op(P0), op(P0),
            op(P20), op(P1), op(P12),
        ],
        150 | 182 => [
            op(P10), tie(TopRight, P0, P1), tie(TopRight, P0, P50),
            op(P1), op(P0), tie(TopRight, P0, P6),
            op(P20), op(P1), tie(TopRight, P12, P20),
        ],
        151 | 183 => [
            op(P11), op(P0), tie(TopRight, P0, P20),
            op(P1), op(P0), op(P0),
            op(P20), op(P1), op(P12),
        ],
        152 => [
            op(P10), op(P1), op(P10),
            op(P0), op(P0), op(P0),
            op(P10), op(P1), op(P12),
        ],
        153 => [
            op(P12), op(P1), op(P10),
            op(P0), op(P0), op(P0),
            op(P10), op(P1), op(P12),
        ],
        154 => [
            tie(TopLeft, P10, P20), op(P0), tie(TopRight, P10, P20),
            op(P0), op(P0), op(P0),
            op(P10), op(P1), op(P12),
        ],
        155 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), op(P10),
            tie(TopLeft, P0, P3), op(P0), op(P0),
            op(P10), op(P1), op(P12),
        ],
        156 => [
            op(P10), op(P1), op(P11),
            op(P0), op(P0), op(P0),
            op(P10), op(P1), op(P12),
        ],
        157 => [
            op(P12), op(P1), op(P11),
            op(P0), op(P0), op(P0),
            op(P10), op(P1), op(P12),
        ],
        158 => [
            tie(TopLeft, P10, P20), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P0), op(P0), tie(TopRight, P0, P3),
            op(P10), op(P1), op(P12),
        ],
        159 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), tie(TopRight, P0, P20),
            tie(TopLeft, P0, P3), op(P0), op(P0),
            op(P10), op(P1), op(P12),
        ],
        184 => [
            op(P10), op(P1), op(P10),
            op(P0), op(P0), op(P0),
            op(P11), op(P1), op(P12),
        ],
        185 => [
            op(P12), op(P1), op(P10),
            op(P0), op(P0), op(P0),
            op(P11), op(P1), op(P12),
        ],
        186 => [
            tie(TopLeft, P10, P20), op(P0), tie(TopRight, P10, P20),
            op(P0), op(P0), op(P0),
            op(P11), op(P1), op(P12),
        ],
        187 => [
            tie(TopLeft, P0, P50), tie(TopLeft, P0, P1), op(P10),
            tie(TopLeft, P0, P6), op(P0), op(P0),
            tie(TopLeft, P11, P20), op(P1), op(P12),
        ],
        188 => [
            op(P10), op(P1), op(P11),
            op(P0), op(P0), op(P0),
            op(P11), op(P1), op(P12),
        ],
        189 => [
            op(P12), op(P1), op(P11),
            op(P0), op(P0), op(P0),
            op(P11), op(P1), op(P12),
        ],
        190 => [
            op(P10), tie(TopRight, P0, P1), tie(TopRight, P0, P50),
            op(P0), op(P0), tie(TopRight, P0, P6),
            op(P11), op(P1), tie(TopRight, P12, P20),
        ],
        191 => [
            tie(TopLeft, P0, P20), op(P0), tie(TopRight, P0, P20),
            op(P0), op(P0), op(P0),
            op(P11), op(P1), op(P12),
        ],
        192 | 193 | 196 | 197 => [
            op(P20), op(P1), op(P20),
            op(P1), op(P0), op(P1),
            op(P10), op(P0), op(P11),
        ],
        194 => [
            op(P10), op(P0), op(P10),
            op(P1), op(P0), op(P1),
            op(P10), op(P0), op(P11),
        ],
        195 => [
            op(P11), op(P0), op(P10),
            op(P1), op(P0), op(P1),
            op(P10), op(P0), op(P11),
        ],
        198 => [
            op(P10), op(P0), op(P12),
            op(P1), op(P0), op(P1),
            op(P10), op(P0), op(P11),
        ],
        199 => [
            op(P11), op(P0), op(P12),
            op(P1), op(P0), op(P1),
            op(P10), op(P0), op(P11),
        ],
        200 | 204 => [
            op(P10), op(P1), op(P20),
            tie(BottomLeft, P0, P1), op(P0), op(P1),
            tie(BottomLeft, P10, P50), tie(BottomLeft, P0, P6), tie(BottomLeft, P11, P20),
        ],
        201 | 205 => [
            op(P12), op(P1), op(P20),
            op(P0), op(P0), op(P1),
            tie(BottomLeft, P10, P20), op(P0), op(P11),
        ],
        202 => [
            tie(TopLeft, P10, P20), op(P0), op(P10),
            op(P0), op(P0), op(P1),
            tie(BottomLeft, P10, P20), op(P0), op(P11),
        ],
        203 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), op(P10),
            tie(TopLeft, P0, P3), op(P0), op(P1),
            op(P10), op(P0), op(P11),
        ],
        206 => [
            tie(TopLeft, P10, P20), op(P0), op(P12),
            op(P0), op(P0), op(P1),
            tie(BottomLeft, P10, P20), op(P0), op(P11),
        ],
        207 => [
            tie(TopLeft, P0, P50), tie(TopLeft, P0, P6), tie(TopLeft, P12, P20),
            tie(TopLeft, P0, P1), op(P0), op(P1),
            op(P10), op(P0), op(P11),
        ],
        208 | 209 => [
            op(P20), op(P1), op(P10),
            op(P1), op(P0), tie(BottomRight, P0, P3),
            op(P10), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        210 => [
            op(P10), op(P0), op(P10),
            op(P1), op(P0), tie(BottomRight, P0, P3),
            op(P10), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        211 => [
            op(P11), op(P0), op(P10),
            op(P1), op(P0), tie(BottomRight, P0, P3),
            op(P10), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        212 | 213 => [
            op(P20), op(P1), tie(BottomRight, P11, P20),
            op(P1), op(P0), tie(BottomRight, P0, P6),
            op(P10), tie(BottomRight, P0, P1), tie(BottomRight, P0, P50),
        ],
        215 => [
            op(P11), op(P0), tie(TopRight, P0, P20),
            op(P1), op(P0), tie(BottomRight, P0, P3),
            op(P10), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        216 => [
            op(P10), op(P1), op(P10),
            op(P0), op(P0), tie(BottomRight, P0, P3),
            op(P10), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        217 => [
            op(P12), op(P1), op(P10),
            op(P0), op(P0), tie(BottomRight, P0, P3),
            op(P10), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        218 => [
            tie(TopLeft, P10, P20), op(P0), tie(TopRight, P10, P20),
            op(P0), op(P0), tie(BottomRight, P0, P3),
            tie(BottomLeft, P10, P20), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        219 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), op(P10),
            tie(TopLeft, P0, P3), op(P0), tie(BottomRight, P0, P3),
            op(P10), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        220 => [
            op(P10), op(P1), op(P11),
            op(P0), op(P0), tie(BottomRight, P0, P3),
            tie(BottomLeft, P10, P20), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        221 => [
            op(P12), op(P1), tie(BottomRight, P11, P20),
            op(P0), op(P0), tie(BottomRight, P0, P6),
            op(P10), tie(BottomRight, P0, P1), tie(BottomRight, P0, P50),
        ],
        222 => [
            op(P10), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P0), op(P0), op(P0),
            op(P10), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        223 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), tie(TopRight, P0, P20),
            tie(TopLeft, P0, P3), op(P0), tie(BottomRight, P0, P3),
            op(P10), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        224 | 225 | 228 | 229 => [
            op(P20), op(P1), op(P20),
            op(P1), op(P0), op(P1),
            op(P12), op(P0), op(P11),
        ],
        226 => [
            op(P10), op(P0), op(P10),
            op(P1), op(P0), op(P1),
            op(P12), op(P0), op(P11),
        ],
        227 => [
            op(P11), op(P0), op(P10),
            op(P1), op(P0), op(P1),
            op(P12), op(P0), op(P11),
        ],
        230 => [
            op(P10), op(P0), op(P12),
            op(P1), op(P0), op(P1),
            op(P12), op(P0), op(P11),
        ],
        231 => [
            op(P11), op(P0), op(P12),
            op(P1), op(P0), op(P1),
            op(P12), op(P0), op(P11),
        ],
        232 | 236 => [
            op(P10), op(P1), op(P20),
            tie(BottomLeft, P0, P1), op(P0), op(P1),
            tie(BottomLeft, P0, P50), tie(BottomLeft, P0, P6), tie(BottomLeft, P11, P20),
        ],
        233 | 237 => [
            op(P12), op(P1), op(P20),
            op(P0), op(P0), op(P1),
            tie(BottomLeft, P0, P20), op(P0), op(P11),
        ],
        234 => [
            tie(TopLeft, P10, P20), op(P0), op(P10),
            tie(BottomLeft, P0, P3), op(P0), op(P1),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), op(P11),
        ],
        235 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), op(P10),
            tie(TopLeft, P0, P3), op(P0), op(P1),
            tie(BottomLeft, P0, P20), op(P0), op(P11),
        ],
        238 => [
            op(P10), op(P0), op(P12),
            tie(BottomLeft, P0, P1), op(P0), op(P1),
            tie(BottomLeft, P0, P50), tie(BottomLeft, P0, P6), tie(BottomLeft, P11, P20),
        ],
        239 => [
            tie(TopLeft, P0, P20), op(P0), op(P12),
            op(P0), op(P0), op(P1),
            tie(BottomLeft, P0, P20), op(P0), op(P11),
        ],
        240 | 241 => [
            op(P20), op(P1), op(P10),
            op(P1), op(P0), tie(BottomRight, P0, P1),
            tie(BottomRight, P12, P20), tie(BottomRight, P0, P6), tie(BottomRight, P0, P50),
        ],
        242 => [
            op(P10), op(P0), tie(TopRight, P10, P20),
            op(P1), op(P0), tie(BottomRight, P0, P3),
            op(P12), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        243 => [
            op(P11), op(P0), op(P10),
            op(P1), op(P0), tie(BottomRight, P0, P1),
            tie(BottomRight, P12, P20), tie(BottomRight, P0, P6), tie(BottomRight, P0, P50),
        ],
        244 | 245 => [
            op(P20), op(P1), op(P11),
            op(P1), op(P0), op(P0),
            op(P12), op(P0), tie(BottomRight, P0, P20),
        ],
        246 => [
            op(P10), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            op(P1), op(P0), tie(TopRight, P0, P3),
            op(P12), op(P0), tie(BottomRight, P0, P20),
        ],
        247 => [
            op(P11), op(P0), tie(TopRight, P0, P20),
            op(P1), op(P0), op(P0),
            op(P12), op(P0), tie(BottomRight, P0, P20),
        ],
        249 => [
            op(P12), op(P1), op(P10),
            op(P0), op(P0), tie(BottomRight, P0, P3),
            tie(BottomLeft, P0, P20), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        250 => [
            op(P10), op(P0), op(P10),
            tie(BottomLeft, P0, P3), op(P0), tie(BottomRight, P0, P3),
            tie(BottomLeft, P0, P40), op(P0), tie(BottomRight, P0, P40),
        ],
        251 => [
            tie(TopLeft, P0, P40), tie(TopLeft, P0, P3), op(P10),
            tie(TopLeft, P0, P3), op(P0), tie(BottomRight, P0, P3),
            tie(BottomLeft, P0, P20), tie(BottomRight, P0, P3), tie(BottomRight, P0, P40),
        ],
        252 => [
            op(P10), op(P1), op(P11),
            tie(BottomLeft, P0, P3), op(P0), op(P0),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), tie(BottomRight, P0, P20),
        ],
        253 => [
            op(P12), op(P1), op(P11),
            op(P0), op(P0), op(P0),
            tie(BottomLeft, P0, P20), op(P0), tie(BottomRight, P0, P20),
        ],
        254 => [
            op(P10), tie(TopRight, P0, P3), tie(TopRight, P0, P40),
            tie(BottomLeft, P0, P3), op(P0), tie(TopRight, P0, P3),
            tie(BottomLeft, P0, P40), tie(BottomLeft, P0, P3), tie(BottomRight, P0, P20),
        ],
        255 => [
            tie(TopLeft, P0, P20), op(P0), tie(TopRight, P0, P20),
            op(P0), op(P0), op(P0),
            tie(BottomLeft, P0, P20), op(P0), tie(BottomRight, P0, P20),
        ],
    }
}
