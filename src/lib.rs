//! hqscale - HQx edge-aware upscaling for pixel art
//!
//! This library provides functionality to:
//! - Enlarge ARGB pixel buffers 2x or 3x with the HQ2x/HQ3x pattern tables
//! - Scale rows in parallel with identical output to the sequential path
//! - Read and write 24/32-bit BMP files, and PNG through the `image` crate
//!
//! ```
//! use hqscale::classify::Classifier;
//! use hqscale::scaler::{ScaleFactor, Scaler};
//!
//! let scaler = Scaler::new(ScaleFactor::X2, Classifier::default());
//! let mut out = vec![0; 16];
//! scaler.resize(&[0xFF000000, 0xFFFFFFFF, 0xFFFFFFFF, 0xFF000000], 2, 2, &mut out).unwrap();
//! assert_eq!(out[0], 0xFF000000);
//! ```

pub mod bitmap;
pub mod classify;
pub mod cli;
pub mod color;
pub mod config;
pub mod neighborhood;
pub mod output;
pub mod raster;
pub mod rules;
pub mod scaler;
