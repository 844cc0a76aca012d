//! Numeric helpers shared by the scale and map code.

/// Find the smallest value out of {1,2,5}*10^n with an integer n which is
/// greater than or equal to `x`. The sign of `x` is preserved and 0.0 maps
/// to 0.0.
pub fn ceil_125(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }

    let sign = if x > 0.0 { 1.0 } else { -1.0 };
    let lx = x.abs().log10();
    let p10 = lx.floor();

    let fr = 10.0f64.powf(lx - p10);
    let fr = if fr <= 1.0 {
        1.0
    } else if fr <= 2.0 {
        2.0
    } else if fr <= 5.0 {
        5.0
    } else {
        10.0
    };

    sign * fr * 10.0f64.powf(p10)
}

/// Find the largest value out of {1,2,5}*10^n with an integer n which is
/// smaller than or equal to `x`. The sign of `x` is preserved and 0.0 maps
/// to 0.0.
pub fn floor_125(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }

    let sign = if x > 0.0 { 1.0 } else { -1.0 };
    let lx = x.abs().log10();
    let p10 = lx.floor();

    let fr = 10.0f64.powf(lx - p10);
    let fr = if fr >= 10.0 {
        10.0
    } else if fr >= 5.0 {
        5.0
    } else if fr >= 2.0 {
        2.0
    } else {
        1.0
    };

    sign * fr * 10.0f64.powf(p10)
}

/// Create an array of `size` equally spaced values running from `xmin` to
/// `xmax`. Both endpoints are stored exactly; interior values that should be
/// zero but drift off it by floating-point noise are snapped back onto the
/// step grid.
pub fn lin_space(size: usize, xmin: f64, xmax: f64) -> Vec<f64> {
    if size == 0 {
        return Vec::new();
    }

    let imax = size - 1;
    let mut out = vec![0.0; size];
    out[0] = xmin;
    out[imax] = xmax;

    let step = (xmax - xmin) / imax as f64;
    let tiny = 1e-6;

    for (i, v) in out.iter_mut().enumerate().take(imax).skip(1) {
        *v = xmin + i as f64 * step;
        if v.abs() < tiny * step.abs() {
            *v = step * (*v / step + tiny / 2.0).floor();
        }
    }
    out
}

/// Create an array of `size` logarithmically equally spaced values running
/// from `xmin` to `xmax`. Returns an empty vector when either endpoint is
/// not positive.
pub fn log_space(size: usize, xmin: f64, xmax: f64) -> Vec<f64> {
    if xmin <= 0.0 || xmax <= 0.0 || size == 0 {
        return Vec::new();
    }

    let imax = size - 1;
    let mut out = vec![0.0; size];
    out[0] = xmin;
    out[imax] = xmax;

    let lxmin = xmin.ln();
    let lxmax = xmax.ln();
    let lstep = (lxmax - lxmin) / imax as f64;

    for (i, v) in out.iter_mut().enumerate().take(imax).skip(1) {
        *v = (lxmin + i as f64 * lstep).exp();
    }
    out
}

fn sign(x: f64) -> i32 {
    if x > 0.0 {
        1
    } else if x < 0.0 {
        -1
    } else {
        0
    }
}

/// Checks if a slice is a strictly monotonic sequence.
///
/// Returns 1 for strictly increasing, -1 for strictly decreasing and 0
/// otherwise (including slices shorter than two elements).
pub fn check_mono(values: &[f64]) -> i32 {
    if values.len() < 2 {
        return 0;
    }

    let rv = sign(values[1] - values[0]);
    for w in values.windows(2).skip(1) {
        if sign(w[1] - w[0]) != rv {
            return 0;
        }
    }
    rv
}

#[test]
fn ceil_125_picks_next_bucket() {
    assert_eq!(ceil_125(3.0), 5.0);
    assert_eq!(ceil_125(7.0), 10.0);
    assert_eq!(ceil_125(150.0), 200.0);
    assert_eq!(ceil_125(1200.0), 2000.0);
    assert_eq!(ceil_125(0.0), 0.0);
    assert_eq!(ceil_125(-3.0), -5.0);
}

#[test]
fn floor_125_picks_previous_bucket() {
    assert_eq!(floor_125(150.0), 100.0);
    assert_eq!(floor_125(99.0), 50.0);
    assert_eq!(floor_125(0.0), 0.0);
    assert_eq!(floor_125(-150.0), -100.0);
}

#[test]
fn lin_space_has_exact_endpoints() {
    let v = lin_space(5, 0.0, 1.0);
    assert_eq!(v.len(), 5);
    assert_eq!(v[0], 0.0);
    assert_eq!(v[4], 1.0);
    assert!((v[2] - 0.5).abs() < 1e-12);
}

#[test]
fn lin_space_snaps_near_zero() {
    // -0.3 + 3 * 0.1 lands a hair off zero without snapping
    let v = lin_space(7, -0.3, 0.3);
    assert_eq!(v[3], 0.0);
}

#[test]
fn lin_space_single_value() {
    assert_eq!(lin_space(1, 2.0, 3.0), vec![3.0]);
    assert!(lin_space(0, 0.0, 1.0).is_empty());
}

#[test]
fn log_space_rejects_nonpositive_bounds() {
    assert!(log_space(5, -1.0, 10.0).is_empty());
    assert!(log_space(5, 1.0, 0.0).is_empty());
}

#[test]
fn log_space_is_geometric() {
    let v = log_space(4, 1.0, 1000.0);
    assert_eq!(v[0], 1.0);
    assert_eq!(v[3], 1000.0);
    assert!((v[1] - 10.0).abs() < 1e-9);
    assert!((v[2] - 100.0).abs() < 1e-9);
}

#[test]
fn check_mono_detects_direction() {
    assert_eq!(check_mono(&[1.0, 2.0, 3.0]), 1);
    assert_eq!(check_mono(&[3.0, 2.0, 1.0]), -1);
    assert_eq!(check_mono(&[1.0, 2.0, 2.0]), 0);
    assert_eq!(check_mono(&[1.0]), 0);
}
