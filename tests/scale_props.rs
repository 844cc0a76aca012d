//! Randomized checks of the scale division and map invariants.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use trazo::util::check_mono;
use trazo::{PixelMap, ScaleDiv};

#[test]
fn linear_round_trip_is_within_half_a_pixel() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..200 {
        let d1: f64 = rng.gen_range(-1.0e3..1.0e3);
        let d2: f64 = rng.gen_range(-1.0e3..1.0e3);
        if (d2 - d1).abs() < 1.0e-6 {
            continue;
        }
        let map = PixelMap::new(0, 1000, d1, d2, false);
        // half a pixel expressed in data units
        let tol = 0.5 * (d2 - d1).abs() / 1000.0 * (1.0 + 1.0e-9);

        for _ in 0..20 {
            let x = rng.gen_range(d1.min(d2)..d1.max(d2));
            let back = map.inv_transform(map.transform(x));
            assert!(
                (back - x).abs() <= tol,
                "{} -> {} -> {} (tol {})",
                x,
                map.transform(x),
                back,
                tol
            );
        }
    }
}

#[test]
fn log_round_trip_is_within_half_a_pixel() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let e1: f64 = rng.gen_range(-6.0..6.0);
        let e2: f64 = rng.gen_range(-6.0..6.0);
        if (e2 - e1).abs() < 1.0e-3 {
            continue;
        }
        let d1 = 10.0f64.powf(e1);
        let d2 = 10.0f64.powf(e2);
        let map = PixelMap::new(0, 1000, d1, d2, true);
        // half a pixel in log space is a ratio
        let ratio_tol = (0.5 * (d2.ln() - d1.ln()).abs() / 1000.0 * (1.0 + 1.0e-9)).exp();

        for _ in 0..20 {
            let x = 10.0f64.powf(rng.gen_range(e1.min(e2)..e1.max(e2)));
            let back = map.inv_transform(map.transform(x));
            let ratio = if back > x { back / x } else { x / back };
            assert!(
                ratio <= ratio_tol,
                "{} -> {} -> {} (ratio {}, tol {})",
                x,
                map.transform(x),
                back,
                ratio,
                ratio_tol
            );
        }
    }
}

#[test]
fn linear_marks_stay_near_the_interval() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut div = ScaleDiv::new();
    for _ in 0..500 {
        let x1: f64 = rng.gen_range(-1.0e4..1.0e4);
        let x2: f64 = rng.gen_range(-1.0e4..1.0e4);
        let max_maj = rng.gen_range(1..20);
        let max_min = rng.gen_range(0..12);

        assert!(div.rebuild(x1, x2, max_maj, max_min, false, 0.0, true));

        let low = x1.min(x2);
        let high = x1.max(x2);
        // major marks may protrude by the boundary tolerance of the step
        let slack = 1.0e-3 * div.maj_step().abs() + 1.0e-9;
        for &m in div.maj_marks().iter().chain(div.min_marks()) {
            assert!(
                m >= low - slack && m <= high + slack,
                "mark {} outside [{}, {}] (slack {})",
                m,
                low,
                high,
                slack
            );
        }
    }
}

#[test]
fn marks_are_strictly_ascending() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut div = ScaleDiv::new();
    for _ in 0..300 {
        let x1: f64 = rng.gen_range(-1.0e4..1.0e4);
        let x2: f64 = rng.gen_range(-1.0e4..1.0e4);
        if (x2 - x1).abs() < 1.0e-6 {
            continue;
        }

        assert!(div.rebuild(x1, x2, 10, 5, false, 0.0, true));
        if div.maj_count() >= 2 {
            assert_eq!(check_mono(div.maj_marks()), 1, "marks {:?}", div.maj_marks());
        }
    }
}

#[test]
fn log_marks_are_ascending_and_positive() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut div = ScaleDiv::new();
    for _ in 0..300 {
        let e1: f64 = rng.gen_range(-8.0..8.0);
        let e2: f64 = rng.gen_range(-8.0..8.0);
        if (e2 - e1).abs() < 1.0e-3 {
            continue;
        }

        assert!(div.rebuild(
            10.0f64.powf(e1),
            10.0f64.powf(e2),
            10,
            10,
            true,
            0.0,
            true
        ));
        assert!(div.maj_marks().iter().all(|&m| m > 0.0));
        if div.maj_count() >= 2 {
            assert_eq!(check_mono(div.maj_marks()), 1, "marks {:?}", div.maj_marks());
        }
    }
}

#[test]
fn descending_rebuild_mirrors_ascending() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut asc = ScaleDiv::new();
    let mut desc = ScaleDiv::new();
    for _ in 0..200 {
        let x1: f64 = rng.gen_range(-1.0e3..1.0e3);
        let x2: f64 = rng.gen_range(-1.0e3..1.0e3);
        let lo = x1.min(x2);
        let hi = x1.max(x2);

        assert!(asc.rebuild(lo, hi, 10, 5, false, 0.0, true));
        assert!(desc.rebuild(hi, lo, 10, 5, false, 0.0, false));

        let mut maj: Vec<f64> = asc.maj_marks().to_vec();
        maj.reverse();
        assert_eq!(desc.maj_marks(), &maj[..]);
        let mut min: Vec<f64> = asc.min_marks().to_vec();
        min.reverse();
        assert_eq!(desc.min_marks(), &min[..]);

        if lo < hi {
            assert_eq!(desc.low_bound(), hi);
            assert_eq!(desc.high_bound(), lo);
        }
    }
}

#[test]
fn major_mark_count_is_bounded() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut div = ScaleDiv::new();
    for _ in 0..100 {
        let x1: f64 = rng.gen_range(-1.0e6..1.0e6);
        let x2: f64 = rng.gen_range(-1.0e6..1.0e6);
        let step = 10.0f64.powf(rng.gen_range(-4.0..2.0));

        assert!(div.rebuild(x1, x2, 10, 0, false, step, true));
        assert!(div.maj_count() <= 10_000);
    }
}
