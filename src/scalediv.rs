//! Division of an axis interval into major and minor scale marks.

use crate::util::{ceil_125, lin_space, log_space};

const STEP_EPS: f64 = 1.0e-3;
const BORDER_EPS: f64 = 1.0e-10;

/// Smallest bound a logarithmic division will accept.
const LOG_MIN: f64 = 1.0e-100;
/// Largest bound a logarithmic division will accept.
const LOG_MAX: f64 = 1.0e100;

/// Hard cap on the number of major marks a single rebuild may produce.
const MAX_MAJOR_MARKS: i64 = 10_000;

/// Clamp `val` into `[v1, v2]` with a relative tolerance.
///
/// Values within `eps_rel` of a bound snap onto it and are accepted; values
/// further outside are rejected.
fn snap_to_range(val: f64, v1: f64, v2: f64, eps_rel: f64) -> Option<f64> {
    let vmin = v1.min(v2);
    let vmax = v1.max(v2);

    if val < vmin {
        if val < vmin - (eps_rel * vmin).abs() {
            None
        } else {
            Some(vmin)
        }
    } else if val > vmax {
        if val > vmax + (eps_rel * vmax).abs() {
            None
        } else {
            Some(vmax)
        }
    } else {
        Some(val)
    }
}

/// A scale division: an interval split into major and minor marks.
///
/// [`rebuild`](Self::rebuild) computes the marks; every call replaces the
/// previous division wholesale. Major steps fit the scheme {1,2,5}*10^n for
/// linear scales. For logarithmic scales there are three cases:
///
/// 1. A major step of one decade places minor marks on one of the digit
///    schemes {2..9}, {2,4,6,8}, {2,5,8} or {5}, depending on the requested
///    number of minor intervals.
/// 2. A major step spanning several decades uses minor steps of
///    {1,2,5}*10^n decades.
/// 3. A range of less than one decade falls back to a linear division, with
///    the step width reported in decades.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleDiv {
    low: f64,
    high: f64,
    maj_step: f64,
    log: bool,
    maj_marks: Vec<f64>,
    min_marks: Vec<f64>,
}

impl ScaleDiv {
    /// Create an empty division with both bounds at 0.0.
    pub fn new() -> Self {
        ScaleDiv::default()
    }

    /// Build a scale division with major and minor marks.
    ///
    /// If `step` is 0.0 the major step width is chosen automatically so
    /// that at most `max_maj` major intervals result; otherwise `step` is
    /// used as given (in decades for logarithmic scales). The minor step
    /// width is always chosen automatically, aiming for at most `max_min`
    /// minor intervals per major interval.
    ///
    /// With `ascend` set the marks run from `min(x1, x2)` to `max(x1, x2)`;
    /// otherwise they run in the direction from `x1` to `x2`.
    ///
    /// Returns `false` only when the division could not be computed (a
    /// logarithmic fallback failing); degenerate inputs yield an empty
    /// division and `true`.
    pub fn rebuild(
        &mut self,
        x1: f64,
        x2: f64,
        max_maj: i32,
        max_min: i32,
        log: bool,
        step: f64,
        ascend: bool,
    ) -> bool {
        self.low = x1.min(x2);
        self.high = x1.max(x2);
        self.log = log;

        let rv = if log {
            self.build_log_div(max_maj, max_min, step)
        } else {
            self.build_lin_div(max_maj, max_min, step)
        };

        if !ascend && x2 < x1 {
            self.low = x1;
            self.high = x2;
            self.maj_marks.reverse();
            self.min_marks.reverse();
        }

        rv
    }

    /// Build a linear division in ascending order. Assumes `high >= low`.
    fn build_lin_div(&mut self, max_maj: i32, max_min: i32, step: f64) -> bool {
        let max_maj = max_maj.max(1);
        let max_min = max_min.max(0);
        let step = step.abs();

        self.maj_marks.clear();
        self.min_marks.clear();

        if self.low == self.high {
            return true;
        }

        self.maj_step = if step == 0.0 {
            ceil_125((self.high - self.low).abs() * 0.999999 / max_maj as f64)
        } else {
            step
        };
        if self.maj_step == 0.0 {
            return true;
        }

        let first_tick =
            ((self.low - STEP_EPS * self.maj_step) / self.maj_step).ceil() * self.maj_step;
        let last_tick =
            ((self.high + STEP_EPS * self.maj_step) / self.maj_step).floor() * self.maj_step;

        let n_maj = (((last_tick - first_tick) / self.maj_step + 0.5).floor() as i64 + 1)
            .clamp(0, MAX_MAJOR_MARKS);
        if n_maj == MAX_MAJOR_MARKS {
            log::warn!(
                "major mark count capped at {} for [{}, {}] with step {}",
                MAX_MAJOR_MARKS,
                self.low,
                self.high,
                self.maj_step
            );
        }
        self.maj_marks = lin_space(n_maj as usize, first_tick, last_tick);

        if max_min < 1 || self.maj_marks.is_empty() {
            return true;
        }

        let mut min_step = ceil_125(self.maj_step / max_min as f64);
        if min_step == 0.0 {
            return true;
        }

        // minor intervals per major interval
        let mut n_min = ((self.maj_step / min_step + 0.5).floor() as i64).abs() - 1;

        // fall back to half steps when the minor steps do not tile the
        // major interval
        if ((n_min + 1) as f64 * min_step - self.maj_step).abs() > STEP_EPS * self.maj_step {
            n_min = 1;
            min_step = self.maj_step * 0.5;
        }

        // start one interval early when there is room below the first mark
        let first_below = if self.maj_marks[0] > self.low {
            Some(self.maj_marks[0] - self.maj_step)
        } else {
            None
        };

        for start in first_below.into_iter().chain(self.maj_marks.iter().copied()) {
            let mut val = start;
            for _ in 0..n_min {
                val += min_step;
                if let Some(mval) = snap_to_range(val, self.low, self.high, BORDER_EPS) {
                    self.min_marks.push(mval);
                }
            }
        }

        true
    }

    /// Build a logarithmic division in ascending order. Assumes
    /// `high >= low`.
    fn build_log_div(&mut self, max_maj: i32, max_min: i32, maj_step: f64) -> bool {
        let max_maj = max_maj.abs().max(1);
        let max_min = max_min.abs().max(0);
        let maj_step = maj_step.abs();

        self.low = self.low.clamp(LOG_MIN, LOG_MAX);
        self.high = self.high.clamp(LOG_MIN, LOG_MAX);

        self.maj_marks.clear();
        self.min_marks.clear();

        if self.low == self.high {
            return true;
        }

        // scale width in decades
        let width = self.high.log10() - self.low.log10();

        // less than one decade, build a linear scale instead
        if width < 1.0 {
            let rv = self.build_lin_div(max_maj, max_min, 0.0);
            if self.maj_step > 0.0 {
                self.maj_step = self.maj_step.log10();
            }
            return rv;
        }

        self.maj_step = if maj_step == 0.0 {
            ceil_125(width * 0.999999 / max_maj as f64)
        } else {
            maj_step
        };
        // a major step is at least one decade
        self.maj_step = self.maj_step.max(1.0);

        let l_first =
            ((self.low.log10() - STEP_EPS * self.maj_step) / self.maj_step).ceil() * self.maj_step;
        let l_last =
            ((self.high.log10() + STEP_EPS * self.maj_step) / self.maj_step).floor() * self.maj_step;

        let first_tick = 10.0f64.powf(l_first);
        let last_tick = 10.0f64.powf(l_last);

        let n_maj = ((((l_last - l_first).abs() / self.maj_step + 0.5).floor() as i64) + 1)
            .clamp(0, MAX_MAJOR_MARKS);
        if n_maj == MAX_MAJOR_MARKS {
            log::warn!(
                "major mark count capped at {} for [{}, {}] with step {} decades",
                MAX_MAJOR_MARKS,
                self.low,
                self.high,
                self.maj_step
            );
        }
        self.maj_marks = log_space(n_maj as usize, first_tick, last_tick);

        if self.maj_marks.is_empty() || max_min < 1 {
            return true;
        }

        if self.maj_step < 1.1 {
            // the major step width is one decade; place minors on digits
            let (k0, kmax, kstep) = if max_min >= 8 {
                (2usize, 9usize, 1usize)
            } else if max_min >= 4 {
                (2, 8, 2)
            } else if max_min >= 2 {
                (2, 5, 3)
            } else {
                (5, 5, 1)
            };

            let first_below = if self.low < first_tick {
                Some(self.maj_marks[0] / 10.0f64.powf(self.maj_step))
            } else {
                None
            };

            for val in first_below.into_iter().chain(self.maj_marks.iter().copied()) {
                for k in (k0..=kmax).step_by(kstep) {
                    let sval = val * k as f64;
                    if let Some(mval) = snap_to_range(sval, self.low, self.high, BORDER_EPS) {
                        self.min_marks.push(mval);
                    }
                }
            }
        } else {
            // the major step spans several decades; substep width in
            // decades, at least one decade
            let min_step = ceil_125(
                (self.maj_step - STEP_EPS * (self.maj_step / max_min as f64)) / max_min as f64,
            )
            .max(1.0);

            let mut n_min = (self.maj_step / min_step + 0.5).floor() as i64 - 1;
            if ((n_min + 1) as f64 * min_step - self.maj_step).abs() > STEP_EPS * self.maj_step {
                n_min = 0;
            }
            if n_min < 1 {
                return true;
            }

            let min_factor = 10.0f64.powf(min_step).max(10.0);

            let first_below = if self.low < first_tick {
                Some(first_tick / 10.0f64.powf(self.maj_step))
            } else {
                None
            };

            for start in first_below.into_iter().chain(self.maj_marks.iter().copied()) {
                let mut val = start;
                for _ in 0..n_min {
                    val *= min_factor;
                    if let Some(mval) = snap_to_range(val, self.low, self.high, BORDER_EPS) {
                        self.min_marks.push(mval);
                    }
                }
            }
        }

        true
    }

    /// Lower bound as passed to the last `rebuild`. Larger than
    /// [`high_bound`](Self::high_bound) for a descending division.
    pub fn low_bound(&self) -> f64 {
        self.low
    }

    /// Upper bound as passed to the last `rebuild`.
    pub fn high_bound(&self) -> f64 {
        self.high
    }

    /// The major step width, in decades for logarithmic divisions.
    pub fn maj_step(&self) -> f64 {
        self.maj_step
    }

    /// Whether this is a logarithmic division.
    pub fn log_scale(&self) -> bool {
        self.log
    }

    /// Number of major marks.
    pub fn maj_count(&self) -> usize {
        self.maj_marks.len()
    }

    /// Number of minor marks.
    pub fn min_count(&self) -> usize {
        self.min_marks.len()
    }

    /// Major mark at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn maj_mark(&self, i: usize) -> f64 {
        self.maj_marks[i]
    }

    /// Minor mark at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn min_mark(&self, i: usize) -> f64 {
        self.min_marks[i]
    }

    /// All major marks.
    pub fn maj_marks(&self) -> &[f64] {
        &self.maj_marks
    }

    /// All minor marks.
    pub fn min_marks(&self) -> &[f64] {
        &self.min_marks
    }

    /// Clear the marks and set everything to zero.
    pub fn reset(&mut self) {
        self.maj_marks.clear();
        self.min_marks.clear();
        self.low = 0.0;
        self.high = 0.0;
        self.maj_step = 0.0;
        self.log = false;
    }
}

#[cfg(test)]
fn approx_eq(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| (x - y).abs() <= 1e-9 * y.abs().max(1.0))
}

#[test]
fn linear_division_0_to_100() {
    let mut div = ScaleDiv::new();
    assert!(div.rebuild(0.0, 100.0, 10, 10, false, 0.0, true));
    assert_eq!(div.maj_step(), 10.0);
    assert_eq!(div.maj_count(), 11);
    assert_eq!(div.maj_mark(0), 0.0);
    assert_eq!(div.maj_mark(10), 100.0);
    assert_eq!(div.min_count(), 90);
    assert_eq!(div.min_mark(0), 1.0);
    assert!(!div.log_scale());
}

#[test]
fn log_division_1_to_1000() {
    let mut div = ScaleDiv::new();
    assert!(div.rebuild(1.0, 1000.0, 10, 10, true, 0.0, true));
    assert_eq!(div.maj_step(), 1.0);
    assert!(approx_eq(div.maj_marks(), &[1.0, 10.0, 100.0, 1000.0]));
    assert_eq!(div.min_count(), 24);
    assert!((div.min_mark(0) - 2.0).abs() < 1e-9);
    assert!(div.log_scale());
}

#[test]
fn sub_decade_log_range_is_linear() {
    let mut div = ScaleDiv::new();
    assert!(div.rebuild(1.0, 5.0, 10, 10, true, 0.0, true));
    // marks come from the linear builder, the step is reported in decades
    assert_eq!(div.maj_step(), 0.5f64.log10());
    assert!(div.maj_count() > 2);
    assert_eq!(div.maj_mark(0), 1.0);
}

#[test]
fn descending_rebuild_reverses_marks() {
    let mut asc = ScaleDiv::new();
    let mut desc = ScaleDiv::new();
    assert!(asc.rebuild(0.0, 100.0, 10, 10, false, 0.0, true));
    assert!(desc.rebuild(100.0, 0.0, 10, 10, false, 0.0, false));

    assert_eq!(desc.low_bound(), 100.0);
    assert_eq!(desc.high_bound(), 0.0);

    let mut maj: Vec<f64> = asc.maj_marks().to_vec();
    maj.reverse();
    assert_eq!(desc.maj_marks(), &maj[..]);
    let mut min: Vec<f64> = asc.min_marks().to_vec();
    min.reverse();
    assert_eq!(desc.min_marks(), &min[..]);
}

#[test]
fn degenerate_interval_is_empty() {
    let mut div = ScaleDiv::new();
    assert!(div.rebuild(5.0, 5.0, 10, 10, false, 0.0, true));
    assert_eq!(div.maj_count(), 0);
    assert_eq!(div.min_count(), 0);
}

#[test]
fn major_mark_count_is_capped() {
    let mut div = ScaleDiv::new();
    assert!(div.rebuild(0.0, 1.0e6, 10, 0, false, 1.0e-3, true));
    assert_eq!(div.maj_count(), 10_000);
}

#[test]
fn fixed_step_without_tiling_minors_falls_back_to_half_steps() {
    let mut div = ScaleDiv::new();
    assert!(div.rebuild(0.0, 14.0, 10, 2, false, 7.0, true));
    assert_eq!(div.maj_step(), 7.0);
    assert!(approx_eq(div.maj_marks(), &[0.0, 7.0, 14.0]));
    assert!(approx_eq(div.min_marks(), &[3.5, 10.5]));
}

#[test]
fn fixed_step_wider_than_span_yields_no_marks() {
    let mut div = ScaleDiv::new();
    assert!(div.rebuild(0.1, 0.2, 10, 10, false, 1.0, true));
    assert_eq!(div.maj_count(), 0);
    assert_eq!(div.min_count(), 0);
}

#[test]
fn log_minor_digit_sets_shrink_with_max_min() {
    let mut div = ScaleDiv::new();
    assert!(div.rebuild(1.0, 100.0, 10, 4, true, 0.0, true));
    // digits {2,4,6,8} per decade
    assert!(approx_eq(
        &div.min_marks()[..4],
        &[2.0, 4.0, 6.0, 8.0]
    ));

    assert!(div.rebuild(1.0, 100.0, 10, 1, true, 0.0, true));
    // a single digit {5} per decade
    assert!(approx_eq(div.min_marks(), &[5.0, 50.0]));
}

#[test]
fn multi_decade_log_step_uses_decade_substeps() {
    let mut div = ScaleDiv::new();
    assert!(div.rebuild(1.0, 1.0e8, 4, 2, true, 0.0, true));
    // 8 decades over at most 4 intervals gives a 2 decade major step with
    // one minor mark per interval
    assert_eq!(div.maj_step(), 2.0);
    assert!(approx_eq(
        div.maj_marks(),
        &[1.0, 100.0, 1.0e4, 1.0e6, 1.0e8]
    ));
    assert!(approx_eq(
        div.min_marks(),
        &[10.0, 1000.0, 1.0e5, 1.0e7]
    ));
}

#[test]
fn rebuild_replaces_previous_marks() {
    let mut div = ScaleDiv::new();
    assert!(div.rebuild(0.0, 100.0, 10, 10, false, 0.0, true));
    assert!(div.rebuild(0.0, 1.0, 10, 10, false, 0.0, true));
    assert_eq!(div.maj_step(), 0.1);
    assert!(div.maj_marks().iter().all(|&m| m <= 1.0));
}

#[test]
fn reset_clears_everything() {
    let mut div = ScaleDiv::new();
    assert!(div.rebuild(0.0, 100.0, 10, 10, false, 0.0, true));
    div.reset();
    assert_eq!(div, ScaleDiv::default());
}
