//! Integral table invariants and adaptive binarization behavior.

use pixfind::threshold::binarize_global;
use pixfind::{
    binarize_adaptive, local_threshold, BinarizeConfig, Color, ImageView, IntegralTable,
    IntensityMap, OwnedImage,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_image(rng: &mut StdRng, width: usize, height: usize) -> OwnedImage<Color> {
    let data = (0..width * height)
        .map(|_| Color::rgb(rng.random(), rng.random(), rng.random()))
        .collect();
    OwnedImage::new(data, width, height).unwrap()
}

fn gray(v: u8) -> Color {
    Color::rgb(v, v, v)
}

#[test]
fn integral_matches_direct_summation() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..20 {
        let width = rng.random_range(1..=32);
        let height = rng.random_range(1..=32);
        let img = random_image(&mut rng, width, height);
        let reference = Color::rgb(rng.random(), rng.random(), rng.random());
        let map = IntensityMap::build(img.view(), reference);
        let table = IntegralTable::build(&map);

        for _ in 0..25 {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height);
            let mut expected = 0u64;
            for a in 0..=x {
                for b in 0..=y {
                    expected += u64::from(map.at(a, b));
                }
            }
            assert_eq!(table.at(x, y), expected, "({x}, {y}) in {width}x{height}");
        }
    }
}

#[test]
fn integral_is_monotonic() {
    let mut rng = StdRng::seed_from_u64(5);
    let img = random_image(&mut rng, 16, 12);
    let table = IntegralTable::build(&IntensityMap::build(img.view(), Color::WHITE));
    for x in 0..16 {
        for y in 0..12 {
            if x > 0 {
                assert!(table.at(x, y) >= table.at(x - 1, y));
            }
            if y > 0 {
                assert!(table.at(x, y) >= table.at(x, y - 1));
            }
        }
    }
}

#[test]
fn region_sum_matches_direct_summation() {
    let mut rng = StdRng::seed_from_u64(99);
    let img = random_image(&mut rng, 20, 15);
    let map = IntensityMap::build(img.view(), Color::BLACK);
    let table = IntegralTable::build(&map);
    for _ in 0..50 {
        let x0 = rng.random_range(0..20);
        let x1 = rng.random_range(x0..20);
        let y0 = rng.random_range(0..15);
        let y1 = rng.random_range(y0..15);
        let mut expected = 0u64;
        for a in x0..=x1 {
            for b in y0..=y1 {
                expected += u64::from(map.at(a, b));
            }
        }
        assert_eq!(table.region_sum(x0, y0, x1, y1), expected);
    }
}

#[test]
fn local_threshold_is_clamped_at_every_corner() {
    let mut rng = StdRng::seed_from_u64(11);
    let (width, height) = (9, 7);
    let img = random_image(&mut rng, width, height);
    let map = IntensityMap::build(img.view(), Color::BLACK);
    let table = IntegralTable::build(&map);

    for region in [0u16, 1, 3, 4, 9, 25, u16::MAX] {
        for (x, y) in [
            (0, 0),
            (width - 1, 0),
            (0, height - 1),
            (width - 1, height - 1),
            (4, 3),
        ] {
            let rad = usize::from(region / 2);
            let min_x = x.saturating_sub(rad);
            let max_x = (x + rad).min(width - 1);
            let min_y = y.saturating_sub(rad);
            let max_y = (y + rad).min(height - 1);

            // Corner combination covers (min_x, max_x] x (min_y, max_y].
            let mut sum = 0u64;
            for a in min_x + 1..=max_x {
                for b in min_y + 1..=max_y {
                    sum += u64::from(map.at(a, b));
                }
            }
            let count = ((max_x - min_x + 1) * (max_y - min_y + 1)) as u64;
            let expected = (sum / count) as u8;
            assert_eq!(
                local_threshold(&table, x, y, region),
                expected,
                "region {region} at ({x}, {y})"
            );
        }
    }
}

#[test]
fn output_is_binary_transparent_and_freshly_allocated() {
    let mut rng = StdRng::seed_from_u64(3);
    let img = random_image(&mut rng, 24, 18);
    let before = img.clone();
    let out = binarize_adaptive(img.view(), &BinarizeConfig::default());

    assert_eq!(img, before);
    assert_eq!(out.view().size(), img.view().size());
    for c in out.data() {
        assert!(c.r == 0 || c.r == 255);
        assert_eq!((c.r, c.r), (c.g, c.b));
        assert_eq!(c.a, 0);
    }
}

#[test]
fn invert_swaps_levels_pixel_for_pixel() {
    let mut rng = StdRng::seed_from_u64(8);
    let img = random_image(&mut rng, 15, 15);
    let config = BinarizeConfig::default()
        .with_reference(Color::rgb(30, 60, 90))
        .with_region_size(7);
    let normal = binarize_adaptive(img.view(), &config);
    let inverted = binarize_adaptive(img.view(), &config.clone().with_invert(true));
    for (n, i) in normal.data().iter().zip(inverted.data()) {
        assert_eq!(n.r, 255 - i.r);
    }
}

#[test]
fn dark_spots_survive_uneven_lighting() {
    // Left half brightly lit, right half dim, one darker spot in each.
    let (width, height) = (20, 10);
    let img = OwnedImage::from_fn(width, height, |x, y| match (x, y) {
        (4, 5) => gray(100),
        (15, 5) => gray(10),
        (x, _) if x < 10 => gray(200),
        _ => gray(60),
    })
    .unwrap();
    let view: ImageView<'_, Color> = img.view();
    let config = BinarizeConfig::default().with_region_size(5);
    let out = binarize_adaptive(view, &config);
    let at = |x: usize, y: usize| out.view().get(x, y).unwrap().r;

    assert_eq!(at(4, 5), 0);
    assert_eq!(at(15, 5), 0);
    assert_eq!(at(7, 2), 255);
    assert_eq!(at(16, 8), 255);

    // A single global cutoff loses the dim half entirely.
    let global = binarize_global(view, 128, false);
    assert_eq!(global.view().get(16, 8).unwrap().r, 0);
    assert_eq!(global.view().get(15, 5).unwrap().r, 0);
}
