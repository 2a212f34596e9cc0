//! Windows BMP codec for 24- and 32-bit images.
//!
//! Files are stored bottom-up: the first row in the file is the last row of
//! the picture. 24-bit rows are padded to a multiple of four bytes and decode
//! with alpha forced to opaque; 32-bit rows are unpadded and keep their alpha.
//!
//! Two DIB header layouts are recognised: the 40-byte `BITMAPINFOHEADER`
//! ("basic") and the 124-byte `BITMAPV5HEADER`. 24-bit images are written
//! with the basic header, 32-bit images with the V5 header carrying explicit
//! channel masks.

use std::fs::{self, File};
use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::color::Pixel;
use crate::raster::Image;

/// `"BM"` read as a little-endian `u16`.
const MAGIC: u16 = 0x4D42;
const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;
const V5_HEADER_SIZE: u32 = 124;
/// 72 DPI expressed in pixels per metre.
const PELS_PER_METER: u32 = 0x2E23;
const BI_RGB: u32 = 0;
const BI_BITFIELDS: u32 = 3;
/// `'Win '`: the Windows default colour space.
const LCS_WINDOWS_COLOR_SPACE: u32 = 0x5769_6E20;

/// Errors produced while decoding or encoding a bitmap.
#[derive(Debug, Error)]
pub enum BitmapError {
    #[error("not a BMP file (magic {0:#06x})")]
    BadMagic(u16),
    #[error("unsupported DIB header size {0}")]
    UnsupportedHeader(u32),
    #[error("unsupported bit depth {0}, expected 24 or 32")]
    UnsupportedBitDepth(u16),
    #[error("unsupported compression {compression} for {bits}-bit image")]
    UnsupportedCompression { compression: u32, bits: u16 },
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },
    #[error("truncated bitmap data")]
    Truncated(#[source] io::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Stored bits per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// BGR, alpha synthesized as opaque on load and dropped on save
    Bits24,
    /// BGRA, alpha kept verbatim
    Bits32,
}

impl BitDepth {
    pub fn bits(self) -> u16 {
        match self {
            BitDepth::Bits24 => 24,
            BitDepth::Bits32 => 32,
        }
    }

    fn bytes_per_pixel(self) -> usize {
        usize::from(self.bits() / 8)
    }

    /// Bytes per stored row, padded to a multiple of four.
    fn stride(self, width: usize) -> Option<usize> {
        let bytes = width.checked_mul(self.bytes_per_pixel())?;
        Some(bytes.checked_add(3)? / 4 * 4)
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = BitmapError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        match bits {
            24 => Ok(BitDepth::Bits24),
            32 => Ok(BitDepth::Bits32),
            other => Err(BitmapError::UnsupportedBitDepth(other)),
        }
    }
}

/// A decoded bitmap: top-down pixels plus the depth they were stored with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub image: Image,
    pub bit_depth: BitDepth,
}

impl Bitmap {
    pub fn new(image: Image, bit_depth: BitDepth) -> Self {
        Self { image, bit_depth }
    }

    /// Decode a bitmap file.
    pub fn load(path: &Path) -> Result<Self, BitmapError> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::read(&mut reader)
    }

    /// Decode a bitmap from a seekable stream.
    ///
    /// Pixel data is read from the offset recorded in the file header.
    pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Self, BitmapError> {
        let mut file_header = [0u8; FILE_HEADER_SIZE as usize];
        read_exact(reader, &mut file_header)?;

        let magic = le_u16(&file_header, 0);
        if magic != MAGIC {
            return Err(BitmapError::BadMagic(magic));
        }
        let data_offset = le_u32(&file_header, 10);

        let mut size = [0u8; 4];
        read_exact(reader, &mut size)?;
        let header_size = u32::from_le_bytes(size);
        if header_size != INFO_HEADER_SIZE && header_size != V5_HEADER_SIZE {
            return Err(BitmapError::UnsupportedHeader(header_size));
        }

        // Both layouts share the first 40 bytes; V5 masks and colour space
        // are not validated.
        let mut dib = vec![0u8; header_size as usize];
        dib[..4].copy_from_slice(&size);
        read_exact(reader, &mut dib[4..])?;

        let raw_width = le_i32(&dib, 4);
        let raw_height = le_i32(&dib, 8);
        let bits = le_u16(&dib, 14);
        let compression = le_u32(&dib, 16);

        let bit_depth = BitDepth::try_from(bits)?;
        let compression_ok = match bit_depth {
            BitDepth::Bits24 => compression == BI_RGB,
            BitDepth::Bits32 => compression == BI_RGB || compression == BI_BITFIELDS,
        };
        if !compression_ok {
            return Err(BitmapError::UnsupportedCompression { compression, bits });
        }

        let invalid = || BitmapError::InvalidDimensions {
            width: i64::from(raw_width),
            height: i64::from(raw_height),
        };
        let width = usize::try_from(raw_width).map_err(|_| invalid())?;
        let height = usize::try_from(raw_height.unsigned_abs()).map_err(|_| invalid())?;
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let stride = bit_depth.stride(width).ok_or_else(invalid)?;

        debug!(
            width,
            height,
            bits,
            header_size,
            data_offset,
            "decoding bitmap"
        );

        // The header's dimensions must be backed by data before anything is
        // allocated for them.
        let available = reader
            .seek(SeekFrom::End(0))?
            .saturating_sub(u64::from(data_offset));
        let needed = (stride as u64).checked_mul(height as u64);
        if !needed.is_some_and(|needed| needed <= available) {
            return Err(BitmapError::Truncated(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "{}x{} pixels need {} bytes, {} available",
                    width,
                    height,
                    needed.unwrap_or(u64::MAX),
                    available
                ),
            )));
        }
        reader.seek(SeekFrom::Start(u64::from(data_offset)))?;

        let mut stored = Vec::with_capacity(width * height);
        let mut row = vec![0u8; stride];
        for _ in 0..height {
            read_exact(reader, &mut row)?;
            let pixels = &row[..width * bit_depth.bytes_per_pixel()];
            match bit_depth {
                BitDepth::Bits24 => stored.extend(
                    pixels
                        .chunks_exact(3)
                        .map(|bgr| 0xFF00_0000 | le_u24(bgr)),
                ),
                BitDepth::Bits32 => {
                    stored.extend(pixels.chunks_exact(4).map(|bgra| le_u32(bgra, 0)))
                }
            }
        }

        // A negative height marks a top-down file
        let pixels = if raw_height < 0 {
            stored
        } else {
            stored.chunks_exact(width).rev().flatten().copied().collect()
        };

        let image = Image::new(width, height, pixels).map_err(|_| invalid())?;
        Ok(Self { image, bit_depth })
    }

    /// Encode to an in-memory byte vector.
    pub fn encode(&self) -> Result<Vec<u8>, BitmapError> {
        let mut out = Vec::new();
        self.write(&mut out)?;
        Ok(out)
    }

    /// Encode into a stream, bottom-up.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), BitmapError> {
        let (width, height) = (self.image.width(), self.image.height());
        let too_large = || BitmapError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        };
        let w = i32::try_from(width).map_err(|_| too_large())?;
        let h = i32::try_from(height).map_err(|_| too_large())?;
        let stride = self.bit_depth.stride(width).ok_or_else(too_large)?;
        let data_size = stride
            .checked_mul(height)
            .and_then(|size| u32::try_from(size).ok())
            .ok_or_else(too_large)?;

        let mut buf = Vec::with_capacity(data_size as usize + 138);
        match self.bit_depth {
            BitDepth::Bits24 => {
                let offset = FILE_HEADER_SIZE + INFO_HEADER_SIZE;
                let file_size = data_size.checked_add(offset).ok_or_else(too_large)?;
                write_file_header(&mut buf, file_size, offset);
                write_info_header(&mut buf, INFO_HEADER_SIZE, w, h, 24, BI_RGB, data_size);
            }
            BitDepth::Bits32 => {
                let offset = FILE_HEADER_SIZE + V5_HEADER_SIZE;
                let file_size = data_size.checked_add(offset).ok_or_else(too_large)?;
                write_file_header(&mut buf, file_size, offset);
                write_info_header(&mut buf, V5_HEADER_SIZE, w, h, 32, BI_BITFIELDS, 0);
                for mask in [0x00FF_0000u32, 0x0000_FF00, 0x0000_00FF, 0xFF00_0000] {
                    buf.extend_from_slice(&mask.to_le_bytes());
                }
                buf.extend_from_slice(&LCS_WINDOWS_COLOR_SPACE.to_le_bytes());
                // Endpoints (36), gamma (12), intent, profile data/size, reserved
                buf.resize(buf.len() + 36 + 12 + 16, 0);
            }
        }

        let padding = stride - width * self.bit_depth.bytes_per_pixel();
        for row in self.image.rows().rev() {
            for &pixel in row {
                let bytes = pixel.to_le_bytes();
                buf.extend_from_slice(&bytes[..self.bit_depth.bytes_per_pixel()]);
            }
            buf.resize(buf.len() + padding, 0);
        }

        writer.write_all(&buf)?;
        Ok(())
    }

    /// Encode fully in memory, then write `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), BitmapError> {
        let bytes = self.encode()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, bytes)?;
        Ok(())
    }
}

fn write_file_header(buf: &mut Vec<u8>, file_size: u32, data_offset: u32) {
    buf.extend_from_slice(&MAGIC.to_le_bytes());
    buf.extend_from_slice(&file_size.to_le_bytes());
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf.extend_from_slice(&data_offset.to_le_bytes());
}

/// The 40 bytes shared by the basic and V5 headers.
fn write_info_header(
    buf: &mut Vec<u8>,
    header_size: u32,
    width: i32,
    height: i32,
    bits: u16,
    compression: u32,
    image_size: u32,
) {
    buf.extend_from_slice(&header_size.to_le_bytes());
    buf.extend_from_slice(&width.to_le_bytes());
    buf.extend_from_slice(&height.to_le_bytes());
    buf.extend_from_slice(&1u16.to_le_bytes());
    buf.extend_from_slice(&bits.to_le_bytes());
    buf.extend_from_slice(&compression.to_le_bytes());
    buf.extend_from_slice(&image_size.to_le_bytes());
    buf.extend_from_slice(&PELS_PER_METER.to_le_bytes());
    buf.extend_from_slice(&PELS_PER_METER.to_le_bytes());
    // Colours used, important colours
    buf.extend_from_slice(&[0u8; 8]);
}

fn read_exact<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<(), BitmapError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        io::ErrorKind::UnexpectedEof => BitmapError::Truncated(e),
        _ => BitmapError::Io(e),
    })
}

fn le_u16(buf: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([buf[at], buf[at + 1]])
}

fn le_u32(buf: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([buf[at], buf[at + 1], buf[at + 2], buf[at + 3]])
}

fn le_i32(buf: &[u8], at: usize) -> i32 {
    le_u32(buf, at) as i32
}

fn le_u24(bgr: &[u8]) -> Pixel {
    u32::from(bgr[0]) | (u32::from(bgr[1]) << 8) | (u32::from(bgr[2]) << 16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_image() -> Image {
        // 3x2 so 24-bit rows need 3 bytes of padding
        Image::new(
            3,
            2,
            vec![
                0xFF11_2233,
                0x80FF_0000,
                0x0000_FF00,
                0xFF00_00FF,
                0x7F7F_7F7F,
                0xFFFF_FFFF,
            ],
        )
        .unwrap()
    }

    fn decode(bytes: &[u8]) -> Result<Bitmap, BitmapError> {
        Bitmap::read(&mut Cursor::new(bytes))
    }

    #[test]
    fn test_bit_depth_try_from() {
        assert_eq!(BitDepth::try_from(24).unwrap(), BitDepth::Bits24);
        assert_eq!(BitDepth::try_from(32).unwrap(), BitDepth::Bits32);
        assert!(matches!(
            BitDepth::try_from(8),
            Err(BitmapError::UnsupportedBitDepth(8))
        ));
    }

    #[test]
    fn test_stride() {
        assert_eq!(BitDepth::Bits24.stride(1), Some(4));
        assert_eq!(BitDepth::Bits24.stride(3), Some(12));
        assert_eq!(BitDepth::Bits24.stride(4), Some(12));
        assert_eq!(BitDepth::Bits32.stride(3), Some(12));
        assert_eq!(BitDepth::Bits32.stride(usize::MAX), None);
    }

    #[test]
    fn test_24bit_header_layout() {
        let bytes = Bitmap::new(sample_image(), BitDepth::Bits24)
            .encode()
            .unwrap();
        assert_eq!(&bytes[0..2], b"BM");
        assert_eq!(le_u32(&bytes, 2), 54 + 24);
        assert_eq!(le_u32(&bytes, 10), 54);
        assert_eq!(le_u32(&bytes, 14), 40);
        assert_eq!(le_i32(&bytes, 18), 3);
        assert_eq!(le_i32(&bytes, 22), 2);
        assert_eq!(le_u16(&bytes, 28), 24);
        assert_eq!(le_u32(&bytes, 34), 24);
        assert_eq!(le_u32(&bytes, 38), 0x2E23);
        assert_eq!(bytes.len(), 54 + 24);
    }

    #[test]
    fn test_24bit_rows_are_bottom_up_and_padded() {
        let bytes = Bitmap::new(sample_image(), BitDepth::Bits24)
            .encode()
            .unwrap();
        // First stored row is the bottom image row: blue, grey, white
        assert_eq!(
            &bytes[54..66],
            &[0xFF, 0, 0, 0x7F, 0x7F, 0x7F, 0xFF, 0xFF, 0xFF, 0, 0, 0]
        );
        assert_eq!(&bytes[66..69], &[0x33, 0x22, 0x11]);
    }

    #[test]
    fn test_24bit_round_trip_forces_opaque_alpha() {
        let bytes = Bitmap::new(sample_image(), BitDepth::Bits24)
            .encode()
            .unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.bit_depth, BitDepth::Bits24);
        let expected: Vec<Pixel> = sample_image()
            .pixels()
            .iter()
            .map(|p| p | 0xFF00_0000)
            .collect();
        assert_eq!(decoded.image.pixels(), &expected[..]);
    }

    #[test]
    fn test_32bit_v5_header_layout() {
        let bytes = Bitmap::new(sample_image(), BitDepth::Bits32)
            .encode()
            .unwrap();
        assert_eq!(bytes.len(), 138 + 24);
        assert_eq!(le_u32(&bytes, 2), 138 + 24);
        assert_eq!(le_u32(&bytes, 10), 138);
        assert_eq!(le_u32(&bytes, 14), 124);
        assert_eq!(le_u16(&bytes, 28), 32);
        assert_eq!(le_u32(&bytes, 30), 3);
        assert_eq!(le_u32(&bytes, 34), 0);
        assert_eq!(le_u32(&bytes, 54), 0x00FF_0000);
        assert_eq!(le_u32(&bytes, 58), 0x0000_FF00);
        assert_eq!(le_u32(&bytes, 62), 0x0000_00FF);
        assert_eq!(le_u32(&bytes, 66), 0xFF00_0000);
        assert_eq!(&bytes[70..74], b" niW");
        assert!(bytes[74..138].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_32bit_round_trip_keeps_alpha() {
        let bitmap = Bitmap::new(sample_image(), BitDepth::Bits32);
        let decoded = decode(&bitmap.encode().unwrap()).unwrap();
        assert_eq!(decoded, bitmap);
    }

    #[test]
    fn test_32bit_reencode_is_byte_identical() {
        let bytes = Bitmap::new(sample_image(), BitDepth::Bits32)
            .encode()
            .unwrap();
        let again = decode(&bytes).unwrap().encode().unwrap();
        assert_eq!(bytes, again);
    }

    #[test]
    fn test_bad_magic() {
        let mut bytes = Bitmap::new(sample_image(), BitDepth::Bits24)
            .encode()
            .unwrap();
        bytes[0] = b'P';
        assert!(matches!(decode(&bytes), Err(BitmapError::BadMagic(0x4D50))));
    }

    #[test]
    fn test_unsupported_header_size() {
        let mut bytes = Bitmap::new(sample_image(), BitDepth::Bits32)
            .encode()
            .unwrap();
        bytes[14] = 108;
        assert!(matches!(
            decode(&bytes),
            Err(BitmapError::UnsupportedHeader(108))
        ));
    }

    #[test]
    fn test_unsupported_bit_depth() {
        let mut bytes = Bitmap::new(sample_image(), BitDepth::Bits24)
            .encode()
            .unwrap();
        bytes[28] = 8;
        assert!(matches!(
            decode(&bytes),
            Err(BitmapError::UnsupportedBitDepth(8))
        ));
    }

    #[test]
    fn test_unsupported_compression() {
        let mut bytes = Bitmap::new(sample_image(), BitDepth::Bits24)
            .encode()
            .unwrap();
        bytes[30] = 1;
        assert!(matches!(
            decode(&bytes),
            Err(BitmapError::UnsupportedCompression {
                compression: 1,
                bits: 24
            })
        ));
    }

    #[test]
    fn test_truncated_pixels() {
        let bytes = Bitmap::new(sample_image(), BitDepth::Bits32)
            .encode()
            .unwrap();
        let cut = &bytes[..bytes.len() - 1];
        assert!(matches!(decode(cut), Err(BitmapError::Truncated(_))));
    }

    #[test]
    fn test_oversized_dimensions_are_truncated() {
        let mut bytes = Bitmap::new(sample_image(), BitDepth::Bits32)
            .encode()
            .unwrap();
        bytes[18..22].copy_from_slice(&i32::MAX.to_le_bytes());
        assert!(matches!(decode(&bytes), Err(BitmapError::Truncated(_))));

        let mut bytes = Bitmap::new(sample_image(), BitDepth::Bits24)
            .encode()
            .unwrap();
        bytes[22..26].copy_from_slice(&i32::MIN.wrapping_add(1).to_le_bytes());
        assert!(matches!(decode(&bytes), Err(BitmapError::Truncated(_))));
    }

    #[test]
    fn test_truncated_header() {
        assert!(matches!(decode(b"BM\x00"), Err(BitmapError::Truncated(_))));
    }

    #[test]
    fn test_zero_width_rejected() {
        let mut bytes = Bitmap::new(sample_image(), BitDepth::Bits24)
            .encode()
            .unwrap();
        bytes[18..22].copy_from_slice(&0i32.to_le_bytes());
        assert!(matches!(
            decode(&bytes),
            Err(BitmapError::InvalidDimensions { width: 0, .. })
        ));
    }

    #[test]
    fn test_negative_height_is_top_down() {
        let mut bytes = Bitmap::new(sample_image(), BitDepth::Bits32)
            .encode()
            .unwrap();
        bytes[22..26].copy_from_slice(&(-2i32).to_le_bytes());
        let decoded = decode(&bytes).unwrap();
        let rows: Vec<&[Pixel]> = decoded.image.rows().collect();
        // Stored order is kept, so the picture comes out flipped
        assert_eq!(rows[0], sample_image().rows().nth(1).unwrap());
    }

    #[test]
    fn test_save_and_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.bmp");
        let bitmap = Bitmap::new(sample_image(), BitDepth::Bits32);
        bitmap.save(&path).unwrap();
        assert_eq!(Bitmap::load(&path).unwrap(), bitmap);
    }
}
