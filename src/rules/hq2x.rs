//! hq2x: 2x2 output block per source pixel.

use std::sync::OnceLock;

use super::{op, tie, Blend, Cell, Corner, Corner::*, RuleTable};
use crate::classify::PatternCode;

/// Interpolation operations of the 2x table.
///
/// For a corner sub-pixel, `A` is the diagonal neighbour and `B`, `C` the
/// two edge neighbours flanking it (see [`Corner::taps`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    /// center
    P0,
    /// (3c + A) / 4
    P10,
    /// (3c + B) / 4
    P11,
    /// (3c + C) / 4
    P12,
    /// (2c + B + C) / 4
    P20,
    /// (2c + A + C) / 4
    P21,
    /// (2c + A + B) / 4
    P22,
    /// (5c + 2C + B) / 8
    P60,
    /// (5c + 2B + C) / 8
    P61,
    /// (6c + B + C) / 8
    P70,
    /// (2c + 3B + 3C) / 8
    P90,
    /// (14c + B + C) / 16
    P100,
}

use Op::*;

static TABLE: OnceLock<RuleTable<4>> = OnceLock::new();

/// The shared hq2x table.
pub fn table() -> &'static RuleTable<4> {
    TABLE.get_or_init(|| RuleTable::build(cells, blend))
}

fn blend(index: usize, op: Op) -> Blend {
    let [a, b, c] = Corner::ALL[index].taps();
    match op {
        P0 => Blend::COPY,
        P10 => Blend::pair(3, a, 1, 2),
        P11 => Blend::pair(3, b, 1, 2),
        P12 => Blend::pair(3, c, 1, 2),
        P20 => Blend::triple(2, b, 1, c, 1, 2),
        P21 => Blend::triple(2, a, 1, c, 1, 2),
        P22 => Blend::triple(2, a, 1, b, 1, 2),
        P60 => Blend::triple(5, c, 2, b, 1, 3),
        P61 => Blend::triple(5, b, 2, c, 1, 3),
        P70 => Blend::triple(6, b, 1, c, 1, 3),
        P90 => Blend::triple(2, b, 3, c, 3, 3),
        P100 => Blend::triple(14, b, 1, c, 1, 4),
    }
}

/// Sub-pixel operations for a pattern, in `[top-left, top-right,
/// bottom-left, bottom-right]` order.
#[rustfmt::skip]
fn cells(pattern: PatternCode) -> [Cell<Op>; 4] {
    match pattern {
        0 | 1 | 4 | 5 | 32 | 33 | 36 | 37 | 128 | 129 | 132 | 133 | 160 | 161 | 164 | 165 => [
            op(P20),
            op(P20),
            op(P20),
            op(P20),
        ],
        2 | 34 | 130 | 162 => [op(P22), op(P21), op(P20), op(P20)],
        3 | 35 | 131 | 163 => [op(P11), op(P21), op(P20), op(P20)],
        6 | 38 | 134 | 166 => [op(P22), op(P12), op(P20), op(P20)],
        7 | 39 | 135 | 167 => [op(P11), op(P12), op(P20), op(P20)],
        8 | 12 | 136 | 140 => [op(P21), op(P20), op(P22), op(P20)],
        9 | 13 | 137 | 141 => [op(P12), op(P20), op(P22), op(P20)],
        10 | 138 => [tie(TopLeft, P10, P20), op(P21), op(P22), op(P20)],
        11 | 139 => [tie(TopLeft, P0, P20), op(P21), op(P22), op(P20)],
        14 | 142 => [tie(TopLeft, P10, P90), tie(TopLeft, P12, P61), op(P22), op(P20)],
        15 | 143 => [tie(TopLeft, P0, P90), tie(TopLeft, P12, P61), op(P22), op(P20)],
        16 | 17 | 48 | 49 => [op(P20), op(P22), op(P20), op(P21)],
        18 | 50 => [op(P22), tie(TopRight, P10, P20), op(P20), op(P21)],
        19 | 51 => [tie(TopRight, P11, P60), tie(TopRight, P10, P90), op(P20), op(P21)],
        20 | 21 | 52 | 53 => [op(P20), op(P11), op(P20), op(P21)],
        22 | 54 => [op(P22), tie(TopRight, P0, P20), op(P20), op(P21)],
        23 | 55 => [tie(TopRight, P11, P60), tie(TopRight, P0, P90), op(P20), op(P21)],
        24 => [op(P21), op(P22), op(P22), op(P21)],
        25 => [op(P12), op(P22), op(P22), op(P21)],
        26 | 31 => [tie(TopLeft, P0, P20), tie(TopRight, P0, P20), op(P22), op(P21)],
        27 => [tie(TopLeft, P0, P20), op(P10), op(P22), op(P21)],
        28 => [op(P21), op(P11), op(P22), op(P21)],
        29 => [op(P12), op(P11), op(P22), op(P21)],
        30 => [op(P10), tie(TopRight, P0, P20), op(P22), op(P21)],
        40 | 44 | 168 | 172 => [op(P21), op(P20), op(P11), op(P20)],
        41 | 45 | 169 | 173 => [op(P12), op(P20), op(P11), op(P20)],
        42 | 170 => [tie(TopLeft, P10, P90), op(P21), tie(TopLeft, P11, P60), op(P20)],
        43 | 171 => [tie(TopLeft, P0, P90), op(P21), tie(TopLeft, P11, P60), op(P20)],
        46 | 174 => [tie(TopLeft, P10, P70), op(P12), op(P11), op(P20)],
        47 | 175 => [tie(TopLeft, P0, P100), op(P12), op(P11), op(P20)],
        56 => [op(P21), op(P22), op(P11), op(P21)],
        57 => [op(P12), op(P22), op(P11), op(P21)],
        58 => [tie(TopLeft, P10, P70), tie(TopRight, P10, P70), op(P11), op(P21)],
        59 => [tie(TopLeft, P0, P20), tie(TopRight, P10, P70), op(P11), op(P21)],
        60 => [op(P21), op(P11), op(P11), op(P21)],
        61 => [op(P12), op(P11), op(P11), op(P21)],
        62 => [op(P10), tie(TopRight, P0, P20), op(P11), op(P21)],
        63 => [tie(TopLeft, P0, P100), tie(TopRight, P0, P20), op(P11), op(P21)],
        64 | 65 | 68 | 69 => [op(P20), op(P20), op(P21), op(P22)],
        66 => [op(P22), op(P21), op(P21), op(P22)],
        67 => [op(P11), op(P21), op(P21), op(P22)],
        70 => [op(P22), op(P12), op(P21), op(P22)],
        71 => [op(P11), op(P12), op(P21), op(P22)],
        72 | 76 => [op(P21), op(P20), tie(BottomLeft, P10, P20), op(P22)],
        73 | 77 => [tie(BottomLeft, P12, P61), op(P20), tie(BottomLeft, P10, P90), op(P22)],
        74 | 107 => [tie(TopLeft, P0, P20), op(P21), tie(BottomLeft, P0, P20), op(P22)],
        75 => [tie(TopLeft, P0, P20), op(P21), op(P10), op(P22)],
        78 => [tie(TopLeft, P10, P70), op(P12), tie(BottomLeft, P10, P70), op(P22)],
        79 => [tie(TopLeft, P0, P20), op(P12), tie(BottomLeft, P10, P70), op(P22)],
        80 | 81 => [op(P20), op(P22), op(P21), tie(BottomRight, P10, P20)],
        82 | 214 => [op(P22), tie(TopRight, P0, P20), op(P21), tie(BottomRight, P0, P20)],
        83 => [op(P11), tie(TopRight, P10, P70), op(P21), tie(BottomRight, P10, P70)],
        84 | 85 => [op(P20), tie(BottomRight, P11, P60), op(P21), tie(BottomRight, P10, P90)],
        86 => [op(P22), tie(TopRight, P0, P20), op(P21), op(P10)],
        87 => [op(P11), tie(TopRight, P0, P20), op(P21), tie(BottomRight, P10, P70)],
        88 | 248 => [op(P21), op(P22), tie(BottomLeft, P0, P20), tie(BottomRight, P0, P20)],
        89 => [op(P12), op(P22), tie(BottomLeft, P10, P70), tie(BottomRight, P10, P70)],
        90 => [
            tie(TopLeft, P10, P70),
            tie(TopRight, P10, P70),
            tie(BottomLeft, P10, P70),
            tie(BottomRight, P10, P70),
        ],
        91 => [
            tie(TopLeft, P0, P20),
            tie(TopRight, P10, P70),
            tie(BottomLeft, P10, P70),
            tie(BottomRight, P10, P70),
        ],
        92 => [op(P21), op(P11), tie(BottomLeft, P10, P70), tie(BottomRight, P10, P70)],
        93 => [op(P12), op(P11), tie(BottomLeft, P10, P70), tie(BottomRight, P10, P70)],
        94 => [
            tie(TopLeft, P10, P70),
            tie(TopRight, P0, P20),
            tie(BottomLeft, P10, P70),
            tie(BottomRight, P10, P70),
        ],
        95 => [tie(TopLeft, P0, P20), tie(TopRight, P0, P20), op(P10), op(P10)],
        96 | 97 | 100 | 101 => [op(P20), op(P20), op(P12), op(P22)],
        98 => [op(P22), op(P21), op(P12), op(P22)],
        99 => [op(P11), op(P21), op(P12), op(P22)],
        102 => [op(P22), op(P12), op(P12), op(P22)],
        103 => [op(P11), op(P12), op(P12), op(P22)],
        104 | 108 => [op(P21), op(P20), tie(BottomLeft, P0, P20), op(P22)],
        105 | 109 => [tie(BottomLeft, P12, P61), op(P20), tie(BottomLeft, P0, P90), op(P22)],
        106 => [op(P10), op(P21), tie(BottomLeft, P0, P20), op(P22)],
        110 => [op(P10), op(P12), tie(BottomLeft, P0, P20), op(P22)],
        111 => [tie(TopLeft, P0, P100), op(P12), tie(BottomLeft, P0, P20), op(P22)],
        112 | 113 => [op(P20), op(P22), tie(BottomRight, P12, P61), tie(BottomRight, P10, P90)],
        114 => [op(P22), tie(TopRight, P10, P70), op(P12), tie(BottomRight, P10, P70)],
        115 => [op(P11), tie(TopRight, P10, P70), op(P12), tie(BottomRight, P10, P70)],
        116 | 117 => [op(P20), op(P11), op(P12), tie(BottomRight, P10, P70)],
        118 => [op(P22), tie(TopRight, P0, P20), op(P12), op(P10)],
        119 => [tie(TopRight, P11, P60), tie(TopRight, P0, P90), op(P12), op(P10)],
        120 => [op(P21), op(P22), tie(BottomLeft, P0, P20), op(P10)],
        121 => [op(P12), op(P22), tie(BottomLeft, P0, P20), tie(BottomRight, P10, P70)],
        122 => [
            tie(TopLeft, P10, P70),
            tie(TopRight, P10, P70),
            tie(BottomLeft, P0, P20),
            tie(BottomRight, P10, P70),
        ],
        123 => [tie(TopLeft, P0, P20), op(P10), tie(BottomLeft, P0, P20), op(P10)],
        124 => [op(P21), op(P11), tie(BottomLeft, P0, P20), op(P10)],
        125 => [tie(BottomLeft, P12, P61), op(P11), tie(BottomLeft, P0, P90), op(P10)],
        126 => [op(P10), tie(TopRight, P0, P20), tie(BottomLeft, P0, P20), op(P10)],
        127 => [tie(TopLeft, P0, P100), tie(TopRight, P0, P20), tie(BottomLeft, P0, P20), op(P10)],
        144 | 145 | 176 | 177 => [op(P20), op(P22), op(P20), op(P12)],
        146 | 178 => [op(P22), tie(TopRight, P10, P90), op(P20), tie(TopRight, P12, P61)],
        147 | 179 => [op(P11), tie(TopRight, P10, P70), op(P20), op(P12)],
        148 | 149 | 180 | 181 => [op(P20), op(P11), op(P20), op(P12)],
        150 | 182 => [op(P22), tie(TopRight, P0, P90), op(P20), tie(TopRight, P12, P61)],
        151 | 183 => [op(P11), tie(TopRight, P0, P100), op(P20), op(P12)],
        152 => [op(P21), op(P22), op(P22), op(P12)],
        153 => [op(P12), op(P22), op(P22), op(P12)],
        154 => [tie(TopLeft, P10, P70), tie(TopRight, P10, P70), op(P22), op(P12)],
        155 => [tie(TopLeft, P0, P20), op(P10), op(P22), op(P12)],
        156 => [op(P21), op(P11), op(P22), op(P12)],
        157 => [op(P12), op(P11), op(P22), op(P12)],
        158 => [tie(TopLeft, P10, P70), tie(TopRight, P0, P20), op(P22), op(P12)],
        159 => [tie(TopLeft, P0, P20), tie(TopRight, P0, P100), op(P22), op(P12)],
        184 => [op(P21), op(P22), op(P11), op(P12)],
        185 => [op(P12), op(P22), op(P11), op(P12)],
        186 => [tie(TopLeft, P10, P70), tie(TopRight, P10, P70), op(P11), op(P12)],
        187 => [tie(TopLeft, P0, P90), op(P10), tie(TopLeft, P11, P60), op(P12)],
        188 => [op(P21), op(P11), op(P11), op(P12)],
        189 => [op(P12), op(P11), op(P11), op(P12)],
        190 => [op(P10), tie(TopRight, P0, P90), op(P11), tie(TopRight, P12, P61)],
        191 => [tie(TopLeft, P0, P100), tie(TopRight, P0, P100), op(P11), op(P12)],
        192 | 193 | 196 | 197 => [op(P20), op(P20), op(P21), op(P11)],
        194 => [op(P22), op(P21), op(P21), op(P11)],
        195 => [op(P11), op(P21), op(P21), op(P11)],
        198 => [op(P22), op(P12), op(P21), op(P11)],
        199 => [op(P11), op(P12), op(P21), op(P11)],
        200 | 204 => [op(P21), op(P20), tie(BottomLeft, P10, P90), tie(BottomLeft, P11, P60)],
        201 | 205 => [op(P12), op(P20), tie(BottomLeft, P10, P70), op(P11)],
        202 => [tie(TopLeft, P10, P70), op(P21), tie(BottomLeft, P10, P70), op(P11)],
        203 => [tie(TopLeft, P0, P20), op(P21), op(P10), op(P11)],
        206 => [tie(TopLeft, P10, P70), op(P12), tie(BottomLeft, P10, P70), op(P11)],
        207 => [tie(TopLeft, P0, P90), tie(TopLeft, P12, P61), op(P10), op(P11)],
        208 | 209 => [op(P20), op(P22), op(P21), tie(BottomRight, P0, P20)],
        210 => [op(P22), op(P10), op(P21), tie(BottomRight, P0, P20)],
        211 => [op(P11), op(P10), op(P21), tie(BottomRight, P0, P20)],
        212 | 213 => [op(P20), tie(BottomRight, P11, P60), op(P21), tie(BottomRight, P0, P90)],
        215 => [op(P11), tie(TopRight, P0, P100), op(P21), tie(BottomRight, P0, P20)],
        216 => [op(P21), op(P22), op(P10), tie(BottomRight, P0, P20)],
        217 => [op(P12), op(P22), op(P10), tie(BottomRight, P0, P20)],
        218 => [
            tie(TopLeft, P10, P70),
            tie(TopRight, P10, P70),
            tie(BottomLeft, P10, P70),
            tie(BottomRight, P0, P20),
        ],
        219 => [tie(TopLeft, P0, P20), op(P10), op(P10), tie(BottomRight, P0, P20)],
        220 => [op(P21), op(P11), tie(BottomLeft, P10, P70), tie(BottomRight, P0, P20)],
        221 => [op(P12), tie(BottomRight, P11, P60), op(P10), tie(BottomRight, P0, P90)],
        222 => [op(P10), tie(TopRight, P0, P20), op(P10), tie(BottomRight, P0, P20)],
        223 => [tie(TopLeft, P0, P20), tie(TopRight, P0, P100), op(P10), tie(BottomRight, P0, P20)],
        224 | 225 | 228 | 229 => [op(P20), op(P20), op(P12), op(P11)],
        226 => [op(P22), op(P21), op(P12), op(P11)],
        227 => [op(P11), op(P21), op(P12), op(P11)],
        230 => [op(P22), op(P12), op(P12), op(P11)],
        231 => [op(P11), op(P12), op(P12), op(P11)],
        232 | 236 => [op(P21), op(P20), tie(BottomLeft, P0, P90), tie(BottomLeft, P11, P60)],
        233 | 237 => [op(P12), op(P20), tie(BottomLeft, P0, P100), op(P11)],
        234 => [tie(TopLeft, P10, P70), op(P21), tie(BottomLeft, P0, P20), op(P11)],
        235 => [tie(TopLeft, P0, P20), op(P21), tie(BottomLeft, P0, P100), op(P11)],
        238 => [op(P10), op(P12), tie(BottomLeft, P0, P90), tie(BottomLeft, P11, P60)],
        239 => [tie(TopLeft, P0, P100), op(P12), tie(BottomLeft, P0, P100), op(P11)],
        240 | 241 => [op(P20), op(P22), tie(BottomRight, P12, P61), tie(BottomRight, P0, P90)],
        242 => [op(P22), tie(TopRight, P10, P70), op(P12), tie(BottomRight, P0, P20)],
        243 => [op(P11), op(P10), tie(BottomRight, P12, P61), tie(BottomRight, P0, P90)],
        244 | 245 => [op(P20), op(P11), op(P12), tie(BottomRight, P0, P100)],
        246 => [op(P22), tie(TopRight, P0, P20), op(P12), tie(BottomRight, P0, P100)],
        247 => [op(P11), tie(TopRight, P0, P100), op(P12), tie(BottomRight, P0, P100)],
        249 => [op(P12), op(P22), tie(BottomLeft, P0, P100), tie(BottomRight, P0, P20)],
        250 => [op(P10), op(P10), tie(BottomLeft, P0, P20), tie(BottomRight, P0, P20)],
        251 => [
            tie(TopLeft, P0, P20),
            op(P10),
            tie(BottomLeft, P0, P100),
            tie(BottomRight, P0, P20),
        ],
        252 => [op(P21), op(P11), tie(BottomLeft, P0, P20), tie(BottomRight, P0, P100)],
        253 => [op(P12), op(P11), tie(BottomLeft, P0, P100), tie(BottomRight, P0, P100)],
        254 => [
            op(P10),
            tie(TopRight, P0, P20),
            tie(BottomLeft, P0, P20),
            tie(BottomRight, P0, P100),
        ],
        255 => [
            tie(TopLeft, P0, P100),
            tie(TopRight, P0, P100),
            tie(BottomLeft, P0, P100),
            tie(BottomRight, P0, P100),
        ],
    }
}
