//! End-to-end scaling properties
//!
//! Fixture outputs below are known-good renders of tiny sources; the
//! property tests cover dimension handling, flat regions, determinism and
//! the symmetry of the rule tables.

use hqscale::classify::{Classifier, Metric, Thresholds};
use hqscale::color::{alpha, Pixel, BLACK, WHITE};
use hqscale::raster::Image;
use hqscale::scaler::{ScaleError, ScaleFactor, Scaler};
use proptest::prelude::*;

const RED: Pixel = 0xFFFF_0000;
const GREEN: Pixel = 0xFF00_FF00;

fn scale(factor: ScaleFactor, width: usize, height: usize, source: &[Pixel]) -> Vec<Pixel> {
    let scaler = Scaler::new(factor, Classifier::default());
    let n = factor.get();
    let mut out = vec![0; width * n * height * n];
    scaler.resize(source, width, height, &mut out).unwrap();
    out
}

fn rotate_180(pixels: &[Pixel]) -> Vec<Pixel> {
    pixels.iter().rev().copied().collect()
}

fn mirror(pixels: &[Pixel], width: usize) -> Vec<Pixel> {
    pixels
        .chunks_exact(width)
        .flat_map(|row| row.iter().rev().copied())
        .collect()
}

#[test]
fn test_checkerboard_2x() {
    let out = scale(ScaleFactor::X2, 2, 2, &[BLACK, WHITE, WHITE, BLACK]);
    #[rustfmt::skip]
    let expected = vec![
        0xFF000000, 0xFF000000, 0xFFFFFFFF, 0xFFFFFFFF,
        0xFF000000, 0xFF404040, 0xFFBFBFBF, 0xFFFFFFFF,
        0xFFFFFFFF, 0xFFBFBFBF, 0xFF404040, 0xFF000000,
        0xFFFFFFFF, 0xFFFFFFFF, 0xFF000000, 0xFF000000,
    ];
    assert_eq!(out, expected);
}

#[test]
fn test_checkerboard_3x() {
    let out = scale(ScaleFactor::X3, 2, 2, &[BLACK, WHITE, WHITE, BLACK]);
    let (b, w, g) = (BLACK, WHITE, 0xFF80_8080);
    #[rustfmt::skip]
    let expected = vec![
        b, b, b, w, w, w,
        b, b, b, w, w, w,
        b, b, g, g, w, w,
        w, w, g, g, b, b,
        w, w, w, b, b, b,
        w, w, w, b, b, b,
    ];
    assert_eq!(out, expected);
}

#[test]
fn test_diagonal_boundary_2x() {
    let out = scale(
        ScaleFactor::X2,
        3,
        3,
        &[RED, RED, GREEN, RED, GREEN, GREEN, GREEN, GREEN, GREEN],
    );
    let (r, g) = (RED, GREEN);
    #[rustfmt::skip]
    let expected = vec![
        r, r, r, 0xFFBF4000, g, g,
        r, r, r, 0xFF40BF00, g, g,
        r, r, 0xFF808000, g, g, g,
        0xFFBF4000, 0xFF40BF00, g, g, g, g,
        g, g, g, g, g, g,
        g, g, g, g, g, g,
    ];
    assert_eq!(out, expected);
}

#[test]
fn test_diagonal_boundary_3x() {
    let out = scale(
        ScaleFactor::X3,
        3,
        3,
        &[RED, RED, GREEN, RED, GREEN, GREEN, GREEN, GREEN, GREEN],
    );
    let (r, g) = (RED, GREEN);
    #[rustfmt::skip]
    let expected = vec![
        r, r, r, r, r, 0xFFBF4000, g, g, g,
        r, r, r, r, r, 0xFF40BF00, g, g, g,
        r, r, r, r, 0xFFBF4000, g, g, g, g,
        r, r, r, 0xFFDF2000, 0xFF20DF00, g, g, g, g,
        r, r, 0xFFBF4000, 0xFF20DF00, g, g, g, g, g,
        0xFFBF4000, 0xFF40BF00, g, g, g, g, g, g, g,
        g, g, g, g, g, g, g, g, g,
        g, g, g, g, g, g, g, g, g,
        g, g, g, g, g, g, g, g, g,
    ];
    assert_eq!(out, expected);
}

#[test]
fn test_corner_tie_with_distinct_edges_3x() {
    // The green pixel's top-right tie compares red against black, which differ
    let out = scale(
        ScaleFactor::X3,
        3,
        3,
        &[RED, RED, RED, RED, RED, RED, RED, GREEN, BLACK],
    );
    let (r, g, k) = (RED, GREEN, BLACK);
    #[rustfmt::skip]
    let expected = vec![
        r, r, r, r, r, r, r, r, r,
        r, r, r, r, r, r, r, r, r,
        r, r, r, r, r, r, r, r, r,
        r, r, r, r, r, r, r, r, r,
        r, r, r, r, r, r, r, r, r,
        r, r, r, r, r, r, r, r, r,
        r, r, r, 0xFF808000, g, g, k, k, k,
        r, r, r, g, g, g, k, k, k,
        r, r, r, g, g, g, k, k, k,
    ];
    assert_eq!(out, expected);
}

#[test]
fn test_vertical_edge_stays_sharp() {
    let out = scale(ScaleFactor::X2, 2, 3, &[BLACK, WHITE, BLACK, WHITE, BLACK, WHITE]);
    for row in out.chunks_exact(4) {
        assert_eq!(row, &[BLACK, BLACK, WHITE, WHITE]);
    }
}

#[test]
fn test_single_pixel_fills_block() {
    for factor in [ScaleFactor::X2, ScaleFactor::X3] {
        let out = scale(factor, 1, 1, &[0x80FF_8040]);
        assert_eq!(out.len(), factor.get() * factor.get());
        assert!(out.iter().all(|&p| p == 0x80FF_8040));
    }
}

#[test]
fn test_image_api_dimensions() {
    let image = Image::filled(5, 3, RED);
    let scaler = Scaler::new(ScaleFactor::X3, Classifier::default());
    let out = scaler.scale(&image).unwrap();
    assert_eq!((out.width(), out.height()), (15, 9));
    assert!(out.pixels().iter().all(|&p| p == RED));
}

#[test]
fn test_errors_surface_before_writing() {
    let scaler = Scaler::new(ScaleFactor::X2, Classifier::default());
    let mut out = vec![7; 4];
    assert!(matches!(
        scaler.resize(&[], 0, 1, &mut out),
        Err(ScaleError::EmptyImage { .. })
    ));
    assert_eq!(
        scaler.resize(&[RED; 2], 2, 1, &mut out),
        Err(ScaleError::BufferTooSmall {
            required: 8,
            actual: 4
        })
    );
    assert!(out.iter().all(|&p| p == 7));
}

#[test]
fn test_smooth_metric_blends_across_alpha() {
    // Opaque pixel surrounded by transparent ones of the same colour
    let clear = 0x00FF_0000;
    let mut source = vec![clear; 9];
    source[4] = RED;

    let sharp = scale(ScaleFactor::X2, 3, 3, &source);
    let smooth_scaler = Scaler::new(
        ScaleFactor::X2,
        Classifier::new(Metric::Smooth, Thresholds::default()),
    );
    let mut smooth = vec![0; 36];
    smooth_scaler.resize(&source, 3, 3, &mut smooth).unwrap();

    // Sharp keeps the opaque block mostly opaque and its surroundings clear
    let centre = [14, 15, 20, 21];
    assert!(centre.iter().all(|&i| sharp[i] == 0xDFFF_0000));
    assert_eq!(sharp[8], clear);
    // Smooth sees the alpha step as similar and blends it into its neighbours
    assert!(centre.iter().all(|&i| smooth[i] == 0x80FF_0000));
    assert_eq!(smooth[8], 0x40FF_0000);
    assert_eq!(smooth[0], clear);
}

proptest! {
    #[test]
    fn flat_images_stay_flat(
        color in any::<u32>(),
        width in 1usize..12,
        height in 1usize..12,
    ) {
        for factor in [ScaleFactor::X2, ScaleFactor::X3] {
            let out = scale(factor, width, height, &vec![color; width * height]);
            prop_assert_eq!(out.len(), width * height * factor.get() * factor.get());
            prop_assert!(out.iter().all(|&p| p == color));
        }
    }

    #[test]
    fn parallel_matches_sequential(
        src in prop::collection::vec(any::<u32>(), 9 * 7),
    ) {
        for factor in [ScaleFactor::X2, ScaleFactor::X3] {
            let scaler = Scaler::new(factor, Classifier::default());
            let len = scaler.output_len(9, 7).unwrap();
            let mut seq = vec![0; len];
            let mut par = vec![0; len];
            scaler.resize(&src, 9, 7, &mut seq).unwrap();
            scaler.resize_parallel(&src, 9, 7, &mut par).unwrap();
            prop_assert_eq!(seq, par);
        }
    }

    #[test]
    fn output_is_deterministic(
        src in prop::collection::vec(any::<u32>(), 6 * 6),
    ) {
        let first = scale(ScaleFactor::X3, 6, 6, &src);
        let second = scale(ScaleFactor::X3, 6, 6, &src);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn rotation_commutes_with_scaling(
        src in prop::collection::vec(prop::sample::select(vec![RED, GREEN, BLACK, WHITE]), 5 * 4),
    ) {
        for factor in [ScaleFactor::X2, ScaleFactor::X3] {
            let n = factor.get();
            let rotated = scale(factor, 5, 4, &rotate_180(&src));
            prop_assert_eq!(rotated, rotate_180(&scale(factor, 5, 4, &src)));

            let mirrored = scale(factor, 5, 4, &mirror(&src, 5));
            prop_assert_eq!(mirrored, mirror(&scale(factor, 5, 4, &src), 5 * n));
        }
    }

    #[test]
    fn uniform_alpha_is_preserved(
        a in any::<u8>(),
        rgb in prop::collection::vec(0u32..0x0100_0000, 4 * 4),
    ) {
        let src: Vec<Pixel> = rgb.iter().map(|&c| (u32::from(a) << 24) | c).collect();
        for factor in [ScaleFactor::X2, ScaleFactor::X3] {
            let out = scale(factor, 4, 4, &src);
            prop_assert!(out.iter().all(|&p| alpha(p) == a));
        }
    }
}
