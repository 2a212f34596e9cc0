//! 3x3 neighbourhood sampling with edge clamping.

use std::ops::Index;

use crate::color::Pixel;

/// Position inside a [`NeighborWindow`].
///
/// The discriminant is the slot index: the center is 0 and the eight
/// neighbours follow in row-major order, skipping the center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tap {
    Center = 0,
    NorthWest = 1,
    North = 2,
    NorthEast = 3,
    West = 4,
    East = 5,
    SouthWest = 6,
    South = 7,
    SouthEast = 8,
}

impl Tap {
    /// The eight neighbours in pattern-bit order: bit `i` of a pattern code
    /// describes `NEIGHBORS[i]`.
    pub const NEIGHBORS: [Tap; 8] = [
        Tap::NorthWest,
        Tap::North,
        Tap::NorthEast,
        Tap::West,
        Tap::East,
        Tap::SouthWest,
        Tap::South,
        Tap::SouthEast,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Offset `(dx, dy)` of this tap relative to the center.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Tap::Center => (0, 0),
            Tap::NorthWest => (-1, -1),
            Tap::North => (0, -1),
            Tap::NorthEast => (1, -1),
            Tap::West => (-1, 0),
            Tap::East => (1, 0),
            Tap::SouthWest => (-1, 1),
            Tap::South => (0, 1),
            Tap::SouthEast => (1, 1),
        }
    }

    /// The tap on the opposite side of the center (180 degree rotation).
    pub const fn opposite(self) -> Tap {
        match self {
            Tap::Center => Tap::Center,
            Tap::NorthWest => Tap::SouthEast,
            Tap::North => Tap::South,
            Tap::NorthEast => Tap::SouthWest,
            Tap::West => Tap::East,
            Tap::East => Tap::West,
            Tap::SouthWest => Tap::NorthEast,
            Tap::South => Tap::North,
            Tap::SouthEast => Tap::NorthWest,
        }
    }
}

/// The 3x3 block of source pixels around one center pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeighborWindow {
    pixels: [Pixel; 9],
}

impl NeighborWindow {
    /// Build a window from pixels already laid out in [`Tap`] order.
    pub const fn new(pixels: [Pixel; 9]) -> Self {
        Self { pixels }
    }

    /// Gather the window centered on `(x, y)` of a row-major `width x height`
    /// buffer. Coordinates outside the image resolve to the nearest in-bounds
    /// pixel, so a 1x1 image yields nine copies of its only pixel.
    ///
    /// The caller guarantees `x < width`, `y < height` and
    /// `source.len() >= width * height`.
    #[inline]
    pub fn sample(source: &[Pixel], width: usize, height: usize, x: usize, y: usize) -> Self {
        let left = x.saturating_sub(1);
        let right = (x + 1).min(width - 1);
        let above = y.saturating_sub(1) * width;
        let row = y * width;
        let below = (y + 1).min(height - 1) * width;

        Self {
            pixels: [
                source[row + x],
                source[above + left],
                source[above + x],
                source[above + right],
                source[row + left],
                source[row + right],
                source[below + left],
                source[below + x],
                source[below + right],
            ],
        }
    }

    #[inline]
    pub fn center(&self) -> Pixel {
        self.pixels[0]
    }

    #[inline]
    pub fn get(&self, tap: Tap) -> Pixel {
        self.pixels[tap.index()]
    }

    /// All nine pixels in [`Tap`] order.
    pub fn pixels(&self) -> &[Pixel; 9] {
        &self.pixels
    }
}

impl Index<Tap> for NeighborWindow {
    type Output = Pixel;

    fn index(&self, tap: Tap) -> &Pixel {
        &self.pixels[tap.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 3x3 image whose pixel value is its own row-major index.
    fn numbered(width: usize, height: usize) -> Vec<Pixel> {
        (0..(width * height) as u32).collect()
    }

    #[test]
    fn test_tap_order_matches_offsets() {
        for (i, tap) in Tap::NEIGHBORS.iter().enumerate() {
            assert_eq!(tap.index(), i + 1);
        }
        let (dx, dy) = Tap::SouthWest.offset();
        assert_eq!((dx, dy), (-1, 1));
    }

    #[test]
    fn test_opposite_negates_offset() {
        for tap in Tap::NEIGHBORS {
            let (dx, dy) = tap.offset();
            assert_eq!(tap.opposite().offset(), (-dx, -dy));
            assert_eq!(tap.opposite().opposite(), tap);
        }
    }

    #[test]
    fn test_sample_interior() {
        let src = numbered(3, 3);
        let w = NeighborWindow::sample(&src, 3, 3, 1, 1);
        assert_eq!(w.pixels(), &[4, 0, 1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(w.center(), 4);
        assert_eq!(w[Tap::NorthEast], 2);
        assert_eq!(w.get(Tap::South), 7);
    }

    #[test]
    fn test_sample_clamps_top_left_corner() {
        let src = numbered(3, 3);
        let w = NeighborWindow::sample(&src, 3, 3, 0, 0);
        assert_eq!(w.pixels(), &[0, 0, 0, 1, 0, 1, 3, 3, 4]);
    }

    #[test]
    fn test_sample_clamps_bottom_right_corner() {
        let src = numbered(4, 2);
        let w = NeighborWindow::sample(&src, 4, 2, 3, 1);
        assert_eq!(w.pixels(), &[7, 2, 3, 3, 6, 7, 6, 7, 7]);
    }

    #[test]
    fn test_sample_single_pixel() {
        let src = [0xFF12_3456];
        let w = NeighborWindow::sample(&src, 1, 1, 0, 0);
        assert!(w.pixels().iter().all(|&p| p == 0xFF12_3456));
    }

    #[test]
    fn test_sample_single_row() {
        let src = numbered(3, 1);
        let w = NeighborWindow::sample(&src, 3, 1, 1, 0);
        assert_eq!(w.pixels(), &[1, 0, 1, 2, 0, 2, 0, 1, 2]);
    }
}
