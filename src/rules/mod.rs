//! Blend rule tables for hq2x and hq3x.
//!
//! A [`RuleTable`] maps each of the 256 [`PatternCode`]s to one [`Rule`] per
//! output sub-pixel, in row-major order inside the `N x N` block. Most rules
//! are a fixed [`Blend`]; the ambiguous diagonal cases carry a [`Rule::Split`]
//! that picks between two blends by comparing the pair of edge neighbours
//! flanking a [`Corner`], using the same [`Classifier`] that produced the
//! pattern code.
//!
//! Both tables are built once per process and shared read-only.

pub mod hq2x;
pub mod hq3x;

use crate::classify::{Classifier, PatternCode};
use crate::color::{channels, from_argb, Pixel};
use crate::neighborhood::{NeighborWindow, Tap};

/// A block corner, naming the two edge neighbours that flank it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// The two edge neighbours compared when a tie-break refers to this corner.
    pub const fn pair(self) -> (Tap, Tap) {
        match self {
            Corner::TopLeft => (Tap::West, Tap::North),
            Corner::TopRight => (Tap::North, Tap::East),
            Corner::BottomLeft => (Tap::South, Tap::West),
            Corner::BottomRight => (Tap::East, Tap::South),
        }
    }

    /// Corners in block order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Diagonal neighbour in the direction of this corner.
    pub const fn diagonal(self) -> Tap {
        match self {
            Corner::TopLeft => Tap::NorthWest,
            Corner::TopRight => Tap::NorthEast,
            Corner::BottomLeft => Tap::SouthWest,
            Corner::BottomRight => Tap::SouthEast,
        }
    }

    /// `[diagonal, first edge, second edge]`, the taps a corner sub-pixel
    /// blends from.
    pub(crate) const fn taps(self) -> [Tap; 3] {
        let (first, second) = self.pair();
        [self.diagonal(), first, second]
    }
}

/// Integer-weighted average of up to three window pixels.
///
/// Weights sum to `1 << shift`. Each channel is rounded to nearest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blend {
    terms: [(Tap, u8); 3],
    shift: u8,
}

impl Blend {
    /// Copy of the center pixel.
    pub const COPY: Blend = Blend {
        terms: [(Tap::Center, 1), (Tap::Center, 0), (Tap::Center, 0)],
        shift: 0,
    };

    /// Two-pixel blend `(wc * center + wa * a) >> shift`.
    pub const fn pair(wc: u8, a: Tap, wa: u8, shift: u8) -> Blend {
        Blend {
            terms: [(Tap::Center, wc), (a, wa), (Tap::Center, 0)],
            shift,
        }
    }

    /// Three-pixel blend `(wc * center + wa * a + wb * b) >> shift`.
    pub const fn triple(wc: u8, a: Tap, wa: u8, b: Tap, wb: u8, shift: u8) -> Blend {
        Blend {
            terms: [(Tap::Center, wc), (a, wa), (b, wb)],
            shift,
        }
    }

    /// Non-zero `(tap, weight)` terms.
    pub fn terms(&self) -> impl Iterator<Item = (Tap, u8)> + '_ {
        self.terms.iter().copied().filter(|&(_, weight)| weight != 0)
    }

    /// Denominator of the weights.
    pub fn denominator(&self) -> u32 {
        1 << self.shift
    }

    /// Evaluate the blend over a window.
    #[inline]
    pub fn apply(&self, window: &NeighborWindow) -> Pixel {
        if self.shift == 0 {
            return window[self.terms[0].0];
        }

        let mut sums = [0u32; 4];
        for &(tap, weight) in &self.terms {
            let weight = u32::from(weight);
            for (sum, channel) in sums.iter_mut().zip(channels(window[tap])) {
                *sum += weight * u32::from(channel);
            }
        }

        let half = 1u32 << (self.shift - 1);
        let [a, r, g, b] = sums.map(|sum| ((sum + half) >> self.shift).min(255) as u8);
        from_argb(a, r, g, b)
    }
}

/// The rule for one output sub-pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Fixed(Blend),
    /// `differ` applies when the corner's edge pair is perceptually different,
    /// `similar` otherwise.
    Split {
        corner: Corner,
        differ: Blend,
        similar: Blend,
    },
}

impl Rule {
    /// Select the blend for this window, running the tie-break if needed.
    #[inline]
    pub fn resolve(&self, window: &NeighborWindow, classifier: &Classifier) -> Blend {
        match *self {
            Rule::Fixed(blend) => blend,
            Rule::Split {
                corner,
                differ,
                similar,
            } => {
                let (a, b) = corner.pair();
                if classifier.is_different(window[a], window[b]) {
                    differ
                } else {
                    similar
                }
            }
        }
    }
}

/// Declarative table cell, before its operation is turned into a [`Blend`].
#[derive(Debug, Clone, Copy)]
pub(crate) enum Cell<O> {
    Fixed(O),
    Tie(Corner, O, O),
}

pub(crate) const fn op<O>(op: O) -> Cell<O> {
    Cell::Fixed(op)
}

pub(crate) const fn tie<O>(corner: Corner, differ: O, similar: O) -> Cell<O> {
    Cell::Tie(corner, differ, similar)
}

/// Rules for all 256 pattern codes, `CELLS` sub-pixels each.
#[derive(Debug)]
pub struct RuleTable<const CELLS: usize> {
    rules: Box<[[Rule; CELLS]]>,
}

impl<const CELLS: usize> RuleTable<CELLS> {
    /// Expand declarative cells into blends.
    ///
    /// `cells` gives the per-pattern layout; `blend` turns the operation of
    /// sub-pixel `index` into concrete weights.
    pub(crate) fn build<O: Copy>(
        cells: impl Fn(PatternCode) -> [Cell<O>; CELLS],
        blend: impl Fn(usize, O) -> Blend,
    ) -> Self {
        let rules = (0..=PatternCode::MAX)
            .map(|code| {
                let row = cells(code);
                std::array::from_fn(|index| match row[index] {
                    Cell::Fixed(op) => Rule::Fixed(blend(index, op)),
                    Cell::Tie(corner, differ, similar) => Rule::Split {
                        corner,
                        differ: blend(index, differ),
                        similar: blend(index, similar),
                    },
                })
            })
            .collect();
        Self { rules }
    }

    /// Rules for one pattern code, one per sub-pixel in row-major order.
    #[inline]
    pub fn get(&self, code: PatternCode) -> &[Rule; CELLS] {
        &self.rules[usize::from(code)]
    }

    /// Resolve every sub-pixel rule of `code` against a window.
    pub fn rules_for(
        &self,
        code: PatternCode,
        window: &NeighborWindow,
        classifier: &Classifier,
    ) -> [Blend; CELLS] {
        let rules = self.get(code);
        std::array::from_fn(|index| rules[index].resolve(window, classifier))
    }
}

/// The rule table for one scale factor.
#[derive(Debug, Clone, Copy)]
pub enum RuleSet {
    Double(&'static RuleTable<4>),
    Triple(&'static RuleTable<9>),
}

impl RuleSet {
    /// Edge length of the output block.
    pub fn block_size(&self) -> usize {
        match self {
            RuleSet::Double(_) => 2,
            RuleSet::Triple(_) => 3,
        }
    }

    /// Resolve the `N * N` blends for a window whose pattern code is `code`.
    ///
    /// The scaler resolves rules straight from the typed table inside its
    /// row loop; this is the factor-agnostic entry point.
    pub fn rules_for(
        &self,
        code: PatternCode,
        window: &NeighborWindow,
        classifier: &Classifier,
    ) -> BlockBlends {
        match self {
            RuleSet::Double(table) => BlockBlends::Double(table.rules_for(code, window, classifier)),
            RuleSet::Triple(table) => BlockBlends::Triple(table.rules_for(code, window, classifier)),
        }
    }
}

/// Resolved blends for one output block, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockBlends {
    Double([Blend; 4]),
    Triple([Blend; 9]),
}

impl BlockBlends {
    pub fn as_slice(&self) -> &[Blend] {
        match self {
            BlockBlends::Double(blends) => &blends[..],
            BlockBlends::Triple(blends) => &blends[..],
        }
    }
}
