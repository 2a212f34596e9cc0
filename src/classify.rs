//! Perceptual pixel comparison and 8-bit edge pattern classification.
//!
//! Two pixels are *different* when any field of their AYUV forms differs by
//! more than that field's threshold. Classifying a [`NeighborWindow`]
//! compares the center against its eight neighbours and packs the results
//! into a [`PatternCode`], one bit per neighbour in [`Tap::NEIGHBORS`] order.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::color::{to_yuv, Pixel, ALPHA_MASK, U_MASK, V_MASK, Y_MASK};
use crate::neighborhood::{NeighborWindow, Tap};

/// One bit per neighbour; a set bit marks a neighbour that differs from the
/// center.
pub type PatternCode = u8;

/// Formula used to measure the distance between two AYUV fields.
///
/// | Metric | Y/U/V | Alpha |
/// |--------|-------|-------|
/// | `sharp` | absolute difference | absolute difference |
/// | `smooth` | absolute difference | signed 32-bit difference, wraps above 0x7F |
///
/// `smooth` therefore treats pixels with very different alpha as similar
/// and blends across transparency boundaries that `sharp` keeps crisp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Masked per-field absolute difference (crisp cartoon-style edges)
    #[default]
    Sharp,
    /// Plain `abs` of the signed packed difference
    Smooth,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Metric::Sharp => write!(f, "sharp"),
            Metric::Smooth => write!(f, "smooth"),
        }
    }
}

/// Per-channel difference thresholds, in 8-bit channel units.
///
/// A field difference strictly greater than its threshold marks two pixels
/// as different.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_y")]
    pub y: u8,
    #[serde(default = "default_u")]
    pub u: u8,
    #[serde(default = "default_v")]
    pub v: u8,
    #[serde(default = "default_a")]
    pub a: u8,
}

fn default_y() -> u8 {
    0x30
}

fn default_u() -> u8 {
    0x07
}

fn default_v() -> u8 {
    0x06
}

fn default_a() -> u8 {
    0x50
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            y: default_y(),
            u: default_u(),
            v: default_v(),
            a: default_a(),
        }
    }
}

/// Decides whether two pixels differ and classifies neighbourhoods.
///
/// A classifier is cheap to copy and holds no per-call state. The same
/// instance must be used for classification and for the tie-break tests of
/// the rule table it indexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    metric: Metric,
    thresholds: Thresholds,
    // Thresholds shifted into their packed AYUV field positions
    tr_y: u32,
    tr_u: u32,
    tr_v: u32,
    tr_a: u32,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Metric::default(), Thresholds::default())
    }
}

impl Classifier {
    pub fn new(metric: Metric, thresholds: Thresholds) -> Self {
        Self {
            metric,
            thresholds,
            tr_y: u32::from(thresholds.y) << 16,
            tr_u: u32::from(thresholds.u) << 8,
            tr_v: u32::from(thresholds.v),
            tr_a: u32::from(thresholds.a) << 24,
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Returns true if `c1` and `c2` are perceptually distinct.
    ///
    /// Identical pixels are never different.
    ///
    /// # Examples
    ///
    /// ```
    /// use hqscale::classify::Classifier;
    ///
    /// let classifier = Classifier::default();
    /// assert!(classifier.is_different(0xFF000000, 0xFFFFFFFF));
    /// assert!(!classifier.is_different(0xFF808080, 0xFF818181));
    /// ```
    #[inline]
    pub fn is_different(&self, c1: Pixel, c2: Pixel) -> bool {
        c1 != c2 && self.yuv_differs(to_yuv(c1), to_yuv(c2))
    }

    /// Compute the pattern code of a window.
    pub fn classify(&self, window: &NeighborWindow) -> PatternCode {
        let center = window.center();
        let center_yuv = to_yuv(center);

        let mut code = 0;
        for (bit, tap) in Tap::NEIGHBORS.iter().enumerate() {
            let neighbor = window.get(*tap);
            if neighbor != center && self.yuv_differs(center_yuv, to_yuv(neighbor)) {
                code |= 1 << bit;
            }
        }
        code
    }

    #[inline]
    fn yuv_differs(&self, yuv1: u32, yuv2: u32) -> bool {
        self.field_distance(yuv1, yuv2, Y_MASK) > self.tr_y
            || self.field_distance(yuv1, yuv2, U_MASK) > self.tr_u
            || self.field_distance(yuv1, yuv2, V_MASK) > self.tr_v
            || self.field_distance(yuv1, yuv2, ALPHA_MASK) > self.tr_a
    }

    #[inline]
    fn field_distance(&self, yuv1: u32, yuv2: u32, mask: u32) -> u32 {
        let (a, b) = (yuv1 & mask, yuv2 & mask);
        match self.metric {
            Metric::Sharp => a.abs_diff(b),
            Metric::Smooth => (a.wrapping_sub(b) as i32).unsigned_abs(),
        }
    }
}
