//! Image file input/output and output path generation
//!
//! The file extension picks the codec: `.bmp` goes through the native
//! [`Bitmap`] codec, `.png` through the `image` crate. Output is always
//! encoded into memory first so a failed encode never leaves a partial file.

use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::bitmap::{BitDepth, Bitmap, BitmapError};
use crate::raster::Image;
use crate::scaler::ScaleFactor;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// PNG decoding or encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// BMP decoding or encoding error
    #[error("Bitmap error: {0}")]
    Bitmap(#[from] BitmapError),
    /// Extension is neither `.bmp` nor `.png`
    #[error("unsupported image format '{}' (expected .bmp or .png)", .0.display())]
    UnsupportedFormat(PathBuf),
    /// Image too large for the PNG encoder
    #[error("image {width}x{height} is too large to encode")]
    TooLarge { width: usize, height: usize },
}

/// File formats understood by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Bmp,
    Png,
}

impl ImageFormat {
    /// Pick the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, OutputError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("bmp") => Ok(ImageFormat::Bmp),
            Some("png") => Ok(ImageFormat::Png),
            _ => Err(OutputError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Decode an image file into top-down ARGB pixels.
pub fn load_image(path: &Path) -> Result<Image, OutputError> {
    match ImageFormat::from_path(path)? {
        ImageFormat::Bmp => {
            let bitmap = Bitmap::load(path)?;
            debug!(bits = bitmap.bit_depth.bits(), "decoded bitmap");
            Ok(bitmap.image)
        }
        ImageFormat::Png => {
            let rgba = image::open(path)?.into_rgba8();
            Ok(Image::from_rgba_image(&rgba))
        }
    }
}

/// Encode an image in the format implied by `path`.
///
/// `bit_depth` applies to BMP output only; PNG is always written as RGBA.
pub fn encode_image(image: Image, path: &Path, bit_depth: BitDepth) -> Result<Vec<u8>, OutputError> {
    match ImageFormat::from_path(path)? {
        ImageFormat::Bmp => Ok(Bitmap::new(image, bit_depth).encode()?),
        ImageFormat::Png => {
            let too_large = || OutputError::TooLarge {
                width: image.width(),
                height: image.height(),
            };
            let rgba = image.to_rgba_image().ok_or_else(too_large)?;
            let mut bytes = Vec::new();
            PngEncoder::new(&mut bytes).write_image(
                rgba.as_raw(),
                rgba.width(),
                rgba.height(),
                ColorType::Rgba8,
            )?;
            Ok(bytes)
        }
    }
}

/// Encode an image and write it to `path`.
///
/// Parent directories are created as needed. Nothing is written if encoding
/// fails.
pub fn save_image(image: Image, path: &Path, bit_depth: BitDepth) -> Result<(), OutputError> {
    let bytes = encode_image(image, path, bit_depth)?;

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, bytes)?;
    Ok(())
}

/// Generate the output path for a scaled image.
///
/// # Output Naming Rules
///
/// | Scenario | Output |
/// |----------|--------|
/// | No `-o` | `{input_dir}/{stem}_hq{N}x.{ext}` |
/// | No `-o`, output dir configured | `{dir}/{stem}_hq{N}x.{ext}` |
/// | `-o out.png` | `out.png` |
/// | `-o dir/` | `dir/{stem}_hq{N}x.{ext}` |
///
/// The extension of a derived name follows the input file.
pub fn generate_output_path(
    input: &Path,
    factor: ScaleFactor,
    output_arg: Option<&Path>,
    out_dir: Option<&Path>,
) -> PathBuf {
    let input_stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let ext = input.extension().and_then(|e| e.to_str()).unwrap_or("bmp");
    let file_name = format!("{}_hq{}x.{}", input_stem, factor.get(), ext);

    match output_arg {
        Some(output) => {
            // Check if output is a directory (ends with / or is existing directory)
            let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
            if is_dir {
                output.join(file_name)
            } else {
                output.to_path_buf()
            }
        }
        None => match out_dir {
            Some(dir) => dir.join(file_name),
            None => input.parent().unwrap_or(Path::new("")).join(file_name),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Image {
        Image::new(2, 2, vec![0xFFFF_0000, 0x8000_FF00, 0xFF00_00FF, 0xFFFF_FFFF]).unwrap()
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ImageFormat::from_path(Path::new("a.bmp")).unwrap(), ImageFormat::Bmp);
        assert_eq!(ImageFormat::from_path(Path::new("a.PNG")).unwrap(), ImageFormat::Png);
        assert!(matches!(
            ImageFormat::from_path(Path::new("a.gif")),
            Err(OutputError::UnsupportedFormat(_))
        ));
        assert!(ImageFormat::from_path(Path::new("noext")).is_err());
    }

    #[test]
    fn test_default_output_path() {
        let path = generate_output_path(Path::new("art/hero.bmp"), ScaleFactor::X2, None, None);
        assert_eq!(path, PathBuf::from("art/hero_hq2x.bmp"));

        let path = generate_output_path(Path::new("tile.png"), ScaleFactor::X3, None, None);
        assert_eq!(path, PathBuf::from("tile_hq3x.png"));
    }

    #[test]
    fn test_output_path_with_configured_dir() {
        let path = generate_output_path(
            Path::new("art/hero.bmp"),
            ScaleFactor::X3,
            None,
            Some(Path::new("dist")),
        );
        assert_eq!(path, PathBuf::from("dist/hero_hq3x.bmp"));
    }

    #[test]
    fn test_output_path_explicit_file() {
        let path = generate_output_path(
            Path::new("hero.bmp"),
            ScaleFactor::X2,
            Some(Path::new("big.png")),
            Some(Path::new("dist")),
        );
        assert_eq!(path, PathBuf::from("big.png"));
    }

    #[test]
    fn test_output_path_explicit_dir() {
        let path = generate_output_path(
            Path::new("tiles/hero.bmp"),
            ScaleFactor::X2,
            Some(Path::new("out/")),
            None,
        );
        assert_eq!(path, PathBuf::from("out/hero_hq2x.bmp"));
    }

    #[test]
    fn test_bmp_save_and_load() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join("nested").join("img.bmp");

        save_image(sample(), &path, BitDepth::Bits32).expect("should save bmp");
        assert_eq!(load_image(&path).expect("should load bmp"), sample());
    }

    #[test]
    fn test_png_save_and_load() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join("img.png");

        save_image(sample(), &path, BitDepth::Bits24).expect("should save png");
        assert_eq!(load_image(&path).expect("should load png"), sample());
    }

    #[test]
    fn test_unsupported_output_writes_nothing() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join("img.gif");

        assert!(save_image(sample(), &path, BitDepth::Bits32).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_image(&temp.path().join("missing.bmp"));
        assert!(matches!(result, Err(OutputError::Bitmap(BitmapError::Io(_)))));
    }
}
