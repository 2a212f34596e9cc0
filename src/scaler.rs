//! HQx scaling driver.
//!
//! A [`Scaler`] couples one rule table with the [`Classifier`] it was built
//! for and writes `N x N` output blocks for every source pixel. Every block
//! depends only on the immutable source buffer, so rows can be processed in
//! any order; [`Scaler::resize_parallel`] hands disjoint output bands to rayon.

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::classify::Classifier;
use crate::color::Pixel;
use crate::neighborhood::NeighborWindow;
use crate::raster::Image;
use crate::rules::{hq2x, hq3x, RuleSet, RuleTable};

/// Errors raised before any output pixel is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// Factor outside {2, 3}
    #[error("invalid scale factor {0}, expected 2 or 3")]
    InvalidFactor(u32),
    #[error("cannot scale an empty {width}x{height} image")]
    EmptyImage { width: usize, height: usize },
    #[error("source buffer holds {actual} pixels, expected {expected}")]
    SourceSizeMismatch { expected: usize, actual: usize },
    #[error("destination buffer holds {actual} pixels, need at least {required}")]
    BufferTooSmall { required: usize, actual: usize },
    #[error("{width}x{height} scaled by {factor} overflows the address space")]
    DimensionOverflow {
        width: usize,
        height: usize,
        factor: usize,
    },
}

/// Supported enlargement factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScaleFactor {
    X2,
    X3,
}

impl ScaleFactor {
    /// Edge length of the output block for one source pixel.
    pub fn get(self) -> usize {
        match self {
            ScaleFactor::X2 => 2,
            ScaleFactor::X3 => 3,
        }
    }
}

impl TryFrom<u32> for ScaleFactor {
    type Error = ScaleError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ScaleFactor::X2),
            3 => Ok(ScaleFactor::X3),
            other => Err(ScaleError::InvalidFactor(other)),
        }
    }
}

impl fmt::Display for ScaleFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.get())
    }
}

/// Pattern-matching upscaler for one factor.
#[derive(Debug, Clone, Copy)]
pub struct Scaler {
    factor: ScaleFactor,
    rules: RuleSet,
    classifier: Classifier,
}

impl Scaler {
    /// Select the rule table for `factor`, building it on first use.
    pub fn new(factor: ScaleFactor, classifier: Classifier) -> Self {
        let rules = match factor {
            ScaleFactor::X2 => RuleSet::Double(hq2x::table()),
            ScaleFactor::X3 => RuleSet::Triple(hq3x::table()),
        };
        Self {
            factor,
            rules,
            classifier,
        }
    }

    pub fn factor(&self) -> ScaleFactor {
        self.factor
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Number of output pixels for a `width x height` source.
    pub fn output_len(&self, width: usize, height: usize) -> Result<usize, ScaleError> {
        let n = self.factor.get();
        width
            .checked_mul(height)
            .and_then(|len| len.checked_mul(n * n))
            .ok_or(ScaleError::DimensionOverflow {
                width,
                height,
                factor: n,
            })
    }

    /// Scale `source` (`width x height`, row-major) into `destination`.
    ///
    /// The leading `width * N * height * N` pixels of `destination` receive
    /// the result in the same top-down orientation as the source. All size
    /// checks happen before the first write.
    ///
    /// # Errors
    ///
    /// * [`ScaleError::EmptyImage`] if either dimension is zero
    /// * [`ScaleError::SourceSizeMismatch`] if `source` is not `width * height`
    /// * [`ScaleError::BufferTooSmall`] if `destination` cannot hold the output
    /// * [`ScaleError::DimensionOverflow`] if the output size overflows
    ///
    /// # Examples
    ///
    /// ```
    /// use hqscale::classify::Classifier;
    /// use hqscale::scaler::{ScaleFactor, Scaler};
    ///
    /// let scaler = Scaler::new(ScaleFactor::X3, Classifier::default());
    /// let mut out = vec![0; 9];
    /// scaler.resize(&[0xFF336699], 1, 1, &mut out).unwrap();
    /// assert!(out.iter().all(|&p| p == 0xFF336699));
    /// ```
    pub fn resize(
        &self,
        source: &[Pixel],
        width: usize,
        height: usize,
        destination: &mut [Pixel],
    ) -> Result<(), ScaleError> {
        let required = self.check_source(source, width, height)?;
        check_capacity(required, destination.len())?;
        self.run(source, width, height, &mut destination[..required], false);
        Ok(())
    }

    /// Same contract and output as [`Scaler::resize`], with rows spread over
    /// the rayon thread pool. Falls back to the sequential path when the
    /// `parallel` feature is disabled.
    pub fn resize_parallel(
        &self,
        source: &[Pixel],
        width: usize,
        height: usize,
        destination: &mut [Pixel],
    ) -> Result<(), ScaleError> {
        let required = self.check_source(source, width, height)?;
        check_capacity(required, destination.len())?;
        self.run(source, width, height, &mut destination[..required], true);
        Ok(())
    }

    /// Scale an owned image into a newly allocated one.
    pub fn scale(&self, image: &Image) -> Result<Image, ScaleError> {
        self.scale_with(image, false)
    }

    /// [`Scaler::scale`] using the parallel path.
    pub fn scale_parallel(&self, image: &Image) -> Result<Image, ScaleError> {
        self.scale_with(image, true)
    }

    fn scale_with(&self, image: &Image, parallel: bool) -> Result<Image, ScaleError> {
        let (width, height) = (image.width(), image.height());
        let required = self.check_source(image.pixels(), width, height)?;

        let mut pixels = vec![0; required];
        self.run(image.pixels(), width, height, &mut pixels, parallel);

        let n = self.factor.get();
        Image::new(width * n, height * n, pixels)
    }

    /// Validate the source buffer and return the output length.
    fn check_source(
        &self,
        source: &[Pixel],
        width: usize,
        height: usize,
    ) -> Result<usize, ScaleError> {
        if width == 0 || height == 0 {
            return Err(ScaleError::EmptyImage { width, height });
        }

        let expected = width
            .checked_mul(height)
            .ok_or(ScaleError::DimensionOverflow {
                width,
                height,
                factor: 1,
            })?;
        if source.len() != expected {
            return Err(ScaleError::SourceSizeMismatch {
                expected,
                actual: source.len(),
            });
        }

        self.output_len(width, height)
    }

    fn run(
        &self,
        source: &[Pixel],
        width: usize,
        height: usize,
        destination: &mut [Pixel],
        parallel: bool,
    ) {
        debug!(
            width,
            height,
            factor = %self.factor,
            metric = %self.classifier.metric(),
            parallel,
            "scaling"
        );
        match self.rules {
            RuleSet::Double(table) => {
                self.run_table(table, source, width, height, destination, parallel)
            }
            RuleSet::Triple(table) => {
                self.run_table(table, source, width, height, destination, parallel)
            }
        }
    }

    fn run_table<const CELLS: usize>(
        &self,
        table: &RuleTable<CELLS>,
        source: &[Pixel],
        width: usize,
        height: usize,
        destination: &mut [Pixel],
        parallel: bool,
    ) {
        let n = self.factor.get();
        let classifier = &self.classifier;
        let kernel = |(y, band): (usize, &mut [Pixel])| {
            scale_row(table, classifier, n, source, width, height, y, band)
        };
        for_each_band(destination, width * n * n, parallel, kernel);
    }
}

fn check_capacity(required: usize, capacity: usize) -> Result<(), ScaleError> {
    if capacity < required {
        return Err(ScaleError::BufferTooSmall {
            required,
            actual: capacity,
        });
    }
    if capacity > required {
        warn!(
            required,
            capacity, "destination larger than needed, trailing pixels left untouched"
        );
    }
    Ok(())
}

/// Write the `N` output rows produced by source row `y` into `band`.
#[allow(clippy::too_many_arguments)]
#[inline]
fn scale_row<const CELLS: usize>(
    table: &RuleTable<CELLS>,
    classifier: &Classifier,
    n: usize,
    source: &[Pixel],
    width: usize,
    height: usize,
    y: usize,
    band: &mut [Pixel],
) {
    let stride = width * n;
    for x in 0..width {
        let window = NeighborWindow::sample(source, width, height, x, y);
        let code = classifier.classify(&window);
        for (cell, rule) in table.get(code).iter().enumerate() {
            let offset = (cell / n) * stride + x * n + cell % n;
            band[offset] = rule.resolve(&window, classifier).apply(&window);
        }
    }
}

#[cfg(feature = "parallel")]
fn for_each_band<F>(destination: &mut [Pixel], band_len: usize, parallel: bool, kernel: F)
where
    F: Fn((usize, &mut [Pixel])) + Sync + Send,
{
    use rayon::prelude::*;

    if parallel {
        destination
            .par_chunks_mut(band_len)
            .enumerate()
            .for_each(kernel);
    } else {
        destination.chunks_mut(band_len).enumerate().for_each(kernel);
    }
}

#[cfg(not(feature = "parallel"))]
fn for_each_band<F>(destination: &mut [Pixel], band_len: usize, _parallel: bool, kernel: F)
where
    F: Fn((usize, &mut [Pixel])),
{
    destination.chunks_mut(band_len).enumerate().for_each(kernel);
}
