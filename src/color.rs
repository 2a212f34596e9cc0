//! Packed ARGB pixels and the perceptual AYUV transform used for comparisons.
//!
//! A [`Pixel`] stores alpha in bits 24-31, red in 16-23, green in 8-15 and
//! blue in 0-7. The AYUV form produced by [`to_yuv`] keeps the same layout
//! (alpha, luma, U, V) and is only ever used to decide whether two pixels
//! differ; it is never written to an output buffer.

use image::Rgba;

/// A packed 32-bit ARGB pixel.
pub type Pixel = u32;

/// Alpha field of a packed pixel (also the alpha field of an AYUV word).
pub const ALPHA_MASK: u32 = 0xFF00_0000;
/// Luma field of a packed AYUV word.
pub const Y_MASK: u32 = 0x00FF_0000;
/// U chroma field of a packed AYUV word.
pub const U_MASK: u32 = 0x0000_FF00;
/// V chroma field of a packed AYUV word.
pub const V_MASK: u32 = 0x0000_00FF;

/// Opaque black.
pub const BLACK: Pixel = 0xFF00_0000;
/// Opaque white.
pub const WHITE: Pixel = 0xFFFF_FFFF;

#[inline]
pub fn alpha(pixel: Pixel) -> u8 {
    (pixel >> 24) as u8
}

#[inline]
pub fn red(pixel: Pixel) -> u8 {
    (pixel >> 16) as u8
}

#[inline]
pub fn green(pixel: Pixel) -> u8 {
    (pixel >> 8) as u8
}

#[inline]
pub fn blue(pixel: Pixel) -> u8 {
    pixel as u8
}

/// Pack four 8-bit channels into an ARGB pixel.
#[inline]
pub fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Pixel {
    (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Channels of a pixel in `[a, r, g, b]` order.
#[inline]
pub fn channels(pixel: Pixel) -> [u8; 4] {
    [alpha(pixel), red(pixel), green(pixel), blue(pixel)]
}

/// Convert an `image` RGBA sample into a packed pixel.
pub fn from_rgba(rgba: Rgba<u8>) -> Pixel {
    let [r, g, b, a] = rgba.0;
    from_argb(a, r, g, b)
}

/// Convert a packed pixel into an `image` RGBA sample.
pub fn to_rgba(pixel: Pixel) -> Rgba<u8> {
    Rgba([red(pixel), green(pixel), blue(pixel), alpha(pixel)])
}

/// Convert a packed ARGB pixel to packed AYUV.
///
/// Luma and chroma are computed in double precision and truncated toward
/// zero before the chroma bias of 128 is added, so the result matches the
/// classic HQx reference bit for bit:
///
/// ```text
/// Y = 0.299R + 0.587G + 0.114B
/// U = -0.169R - 0.331G + 0.5B + 128
/// V = 0.5R - 0.419G - 0.081B + 128
/// ```
///
/// Alpha is carried through unchanged.
///
/// # Examples
///
/// ```
/// use hqscale::color::to_yuv;
///
/// assert_eq!(to_yuv(0xFF000000), 0xFF008080);
/// assert_eq!(to_yuv(0xFFFFFFFF), 0xFFFF8080);
/// ```
pub fn to_yuv(pixel: Pixel) -> u32 {
    let r = f64::from(red(pixel));
    let g = f64::from(green(pixel));
    let b = f64::from(blue(pixel));

    let y = (0.299 * r + 0.587 * g + 0.114 * b) as u32;
    let u = ((-0.169 * r - 0.331 * g + 0.5 * b) as i32 + 128) as u32;
    let v = ((0.5 * r - 0.419 * g - 0.081 * b) as i32 + 128) as u32;

    (pixel & ALPHA_MASK) | (y << 16) | (u << 8) | v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_accessors() {
        let p = 0x80_12_34_56;
        assert_eq!(alpha(p), 0x80);
        assert_eq!(red(p), 0x12);
        assert_eq!(green(p), 0x34);
        assert_eq!(blue(p), 0x56);
        assert_eq!(channels(p), [0x80, 0x12, 0x34, 0x56]);
        assert_eq!(from_argb(0x80, 0x12, 0x34, 0x56), p);
    }

    #[test]
    fn test_rgba_conversion() {
        let rgba = Rgba([10, 20, 30, 40]);
        let p = from_rgba(rgba);
        assert_eq!(p, 0x28_0A_14_1E);
        assert_eq!(to_rgba(p), rgba);
    }

    #[test]
    fn test_to_yuv_grays_have_neutral_chroma() {
        assert_eq!(to_yuv(BLACK), 0xFF_00_80_80);
        assert_eq!(to_yuv(WHITE), 0xFF_FF_80_80);
        // 127.99999... truncates down
        assert_eq!(to_yuv(0xFF_80_80_80), 0xFF_7F_80_80);
    }

    #[test]
    fn test_to_yuv_primaries_truncate_toward_zero() {
        // Red: Y = 76.245, U = -43.095, V = 127.5
        assert_eq!(to_yuv(0xFF_FF_00_00), 0xFF_4C_55_FF);
        // Green: Y = 149.685, U = -84.405, V = -106.845
        assert_eq!(to_yuv(0xFF_00_FF_00), 0xFF_95_2C_16);
        // Blue: Y = 29.07, U = 127.5, V = -20.655
        assert_eq!(to_yuv(0xFF_00_00_FF), 0xFF_1D_FF_6C);
    }

    #[test]
    fn test_to_yuv_keeps_alpha() {
        assert_eq!(to_yuv(0x00_00_00_00), 0x00_00_80_80);
        assert_eq!(to_yuv(0x7F_FF_FF_FF) & ALPHA_MASK, 0x7F_00_00_00);
    }
}
