//! Owned, top-down ARGB pixel buffer passed between codecs and the scaler.

use image::RgbaImage;

use crate::color::{from_rgba, to_rgba, Pixel};
use crate::scaler::ScaleError;

/// A row-major image whose first row is the top of the picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl Image {
    /// Wrap a pixel buffer, checking that it holds exactly `width * height`
    /// pixels.
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self, ScaleError> {
        let expected = width
            .checked_mul(height)
            .ok_or(ScaleError::DimensionOverflow {
                width,
                height,
                factor: 1,
            })?;
        if pixels.len() != expected {
            return Err(ScaleError::SourceSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image where every pixel is `color`.
    pub fn filled(width: usize, height: usize, color: Pixel) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: usize, y: usize) -> Option<Pixel> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Copy an `image` crate buffer into packed ARGB pixels.
    pub fn from_rgba_image(rgba: &RgbaImage) -> Self {
        Self {
            width: rgba.width() as usize,
            height: rgba.height() as usize,
            pixels: rgba.pixels().map(|p| from_rgba(*p)).collect(),
        }
    }

    /// Convert to an `image` crate buffer, or `None` if a dimension does not
    /// fit in `u32`.
    pub fn to_rgba_image(&self) -> Option<RgbaImage> {
        let width = u32::try_from(self.width).ok()?;
        let height = u32::try_from(self.height).ok()?;
        Some(RgbaImage::from_fn(width, height, |x, y| {
            to_rgba(self.pixels[y as usize * self.width + x as usize])
        }))
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + '_ {
        // chunks_exact(0) panics; an image without columns has no rows to yield
        self.pixels.chunks_exact(self.width.max(1)).take(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_length() {
        assert!(Image::new(2, 2, vec![0; 4]).is_ok());
        assert_eq!(
            Image::new(2, 2, vec![0; 3]),
            Err(ScaleError::SourceSizeMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_new_rejects_overflowing_dimensions() {
        assert!(matches!(
            Image::new(usize::MAX, 2, Vec::new()),
            Err(ScaleError::DimensionOverflow { .. })
        ));
    }

    #[test]
    fn test_get_and_rows() {
        let img = Image::new(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(img.get(2, 1), Some(6));
        assert_eq!(img.get(3, 0), None);
        assert_eq!(img.get(0, 2), None);

        let rows: Vec<&[Pixel]> = img.rows().collect();
        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
        let last = img.rows().next_back().unwrap();
        assert_eq!(last, &[4, 5, 6]);
    }

    #[test]
    fn test_filled() {
        let img = Image::filled(4, 3, 0xFF11_2233);
        assert_eq!(img.pixels().len(), 12);
        assert!(img.pixels().iter().all(|&p| p == 0xFF11_2233));
        assert_eq!(img.clone().into_pixels().len(), 12);
    }

    #[test]
    fn test_rgba_image_conversion() {
        let img = Image::new(2, 1, vec![0xFF11_2233, 0x8044_5566]).unwrap();
        let rgba = img.to_rgba_image().unwrap();
        assert_eq!(rgba.dimensions(), (2, 1));
        assert_eq!(rgba.get_pixel(0, 0).0, [0x11, 0x22, 0x33, 0xFF]);
        assert_eq!(rgba.get_pixel(1, 0).0, [0x44, 0x55, 0x66, 0x80]);
        assert_eq!(Image::from_rgba_image(&rgba), img);
    }

    #[test]
    fn test_empty_image_has_no_rows() {
        let img = Image::new(0, 5, Vec::new()).unwrap();
        assert_eq!(img.rows().count(), 0);
    }
}
