//! Conversion between data coordinates and pixel coordinates.

/// Smallest data value a logarithmic map will accept.
pub const LOG_MIN: f64 = 1.0e-150;
/// Largest data value a logarithmic map will accept.
pub const LOG_MAX: f64 = 1.0e150;

/// Round half away from zero, so that 0.5 becomes 1 and -0.5 becomes -1.
fn round_away(d: f64) -> i32 {
    if d >= 0.0 {
        (d + 0.5).floor() as i32
    } else {
        (d - 0.5).ceil() as i32
    }
}

/// Maps a double interval onto an integer (pixel) interval.
///
/// The data interval may be scaled linearly or logarithmically. For
/// logarithmic maps the data bounds are clamped into `[LOG_MIN, LOG_MAX]`
/// and stored as natural logs. The pixel interval is kept exactly as given,
/// so an inverted axis is simply `i1 > i2`.
///
/// Degenerate intervals never panic: a map whose data bounds coincide has a
/// conversion factor of 0.0, transforms everything onto `i1` and
/// inverse-transforms everything to 0.0.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelMap {
    d1: f64,
    d2: f64,
    i1: i32,
    i2: i32,
    factor: f64,
    log: bool,
}

impl Default for PixelMap {
    /// Both intervals are set to [0, 1].
    fn default() -> Self {
        PixelMap {
            d1: 0.0,
            d2: 1.0,
            i1: 0,
            i2: 1,
            factor: 1.0,
            log: false,
        }
    }
}

impl PixelMap {
    /// Create a map with the given pixel and data intervals.
    pub fn new(i1: i32, i2: i32, d1: f64, d2: f64, logarithmic: bool) -> Self {
        let mut map = PixelMap::default();
        map.set_pixel_range(i1, i2);
        map.set_data_range(d1, d2, logarithmic);
        map
    }

    /// Specify the borders of the pixel interval. They are stored as given,
    /// never reordered.
    pub fn set_pixel_range(&mut self, i1: i32, i2: i32) {
        self.i1 = i1;
        self.i2 = i2;
        self.update_factor();
    }

    /// Specify the borders of the data interval.
    ///
    /// With `logarithmic` set, each bound is clamped into
    /// `[LOG_MIN, LOG_MAX]` independently and the natural logs are stored.
    pub fn set_data_range(&mut self, d1: f64, d2: f64, logarithmic: bool) {
        if logarithmic {
            self.log = true;
            self.d1 = d1.clamp(LOG_MIN, LOG_MAX).ln();
            self.d2 = d2.clamp(LOG_MIN, LOG_MAX).ln();
        } else {
            self.log = false;
            self.d1 = d1;
            self.d2 = d2;
        }
        self.update_factor();
    }

    /// Transform a data value into a pixel coordinate, rounding half away
    /// from zero. Values outside the data interval extrapolate.
    pub fn transform(&self, x: f64) -> i32 {
        let v = if self.log { x.ln() } else { x };
        self.i1 + round_away((v - self.d1) * self.factor)
    }

    /// Like [`transform`](Self::transform), but clamps the value to the
    /// nearest border of the data interval first, so the result always lies
    /// within the pixel interval.
    pub fn lim_transform(&self, x: f64) -> i32 {
        let v = if self.log { x.ln() } else { x };
        let v = v.clamp(self.d1.min(self.d2), self.d1.max(self.d2));
        self.i1 + round_away((v - self.d1) * self.factor)
    }

    /// Exact transformation without rounding: the pixel interval appears to
    /// be continuous.
    pub fn x_transform(&self, x: f64) -> f64 {
        let v = if self.log { x.ln() } else { x };
        self.i1 as f64 + (v - self.d1) * self.factor
    }

    /// Transform a pixel coordinate back into a data value. Returns 0.0 when
    /// the data interval is degenerate.
    pub fn inv_transform(&self, i: i32) -> f64 {
        if self.factor == 0.0 {
            return 0.0;
        }
        let v = self.d1 + (i - self.i1) as f64 / self.factor;
        if self.log {
            v.exp()
        } else {
            v
        }
    }

    /// Whether a data value lies inside or at the border of the data
    /// interval.
    pub fn contains_value(&self, x: f64) -> bool {
        let v = if self.log { x.ln() } else { x };
        v >= self.d1.min(self.d2) && v <= self.d1.max(self.d2)
    }

    /// Whether a pixel coordinate lies inside or at the border of the pixel
    /// interval.
    pub fn contains_pixel(&self, i: i32) -> bool {
        i >= self.i1.min(self.i2) && i <= self.i1.max(self.i2)
    }

    /// First border of the data interval. The log of the set value for
    /// logarithmic maps.
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Second border of the data interval. The log of the set value for
    /// logarithmic maps.
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// First border of the pixel interval.
    pub fn i1(&self) -> i32 {
        self.i1
    }

    /// Second border of the pixel interval.
    pub fn i2(&self) -> i32 {
        self.i2
    }

    /// Whether the map scales logarithmically.
    pub fn logarithmic(&self) -> bool {
        self.log
    }

    fn update_factor(&mut self) {
        if self.d2 != self.d1 {
            self.factor = (self.i2 - self.i1) as f64 / (self.d2 - self.d1);
        } else {
            self.factor = 0.0;
        }
    }
}

#[test]
fn rounds_half_away_from_zero() {
    assert_eq!(round_away(0.5), 1);
    assert_eq!(round_away(-0.5), -1);
    assert_eq!(round_away(2.5), 3);
    assert_eq!(round_away(-2.5), -3);
    assert_eq!(round_away(2.4), 2);
    assert_eq!(round_away(-2.4), -2);
}

#[test]
fn linear_map_transforms_and_inverts() {
    let map = PixelMap::new(0, 100, 0.0, 10.0, false);
    assert_eq!(map.transform(0.0), 0);
    assert_eq!(map.transform(5.0), 50);
    assert_eq!(map.transform(10.0), 100);
    assert_eq!(map.transform(12.0), 120);
    assert!((map.inv_transform(50) - 5.0).abs() < 1e-12);
}

#[test]
fn inverted_pixel_interval_descends() {
    let map = PixelMap::new(100, 0, 0.0, 10.0, false);
    assert_eq!(map.transform(0.0), 100);
    assert_eq!(map.transform(10.0), 0);
    assert!(map.transform(2.0) > map.transform(8.0));
}

#[test]
fn log_map_transforms_decades() {
    let map = PixelMap::new(0, 300, 1.0, 1000.0, true);
    assert_eq!(map.transform(1.0), 0);
    assert_eq!(map.transform(10.0), 100);
    assert_eq!(map.transform(100.0), 200);
    assert_eq!(map.transform(1000.0), 300);
    assert!((map.inv_transform(100) - 10.0).abs() < 1e-9);
}

#[test]
fn log_bounds_are_clamped() {
    let map = PixelMap::new(0, 100, 0.0, 1.0, true);
    assert_eq!(map.d1(), LOG_MIN.ln());
    assert!(map.contains_value(LOG_MIN));
}

#[test]
fn degenerate_interval_falls_back() {
    let mut map = PixelMap::default();
    map.set_pixel_range(0, 100);
    map.set_data_range(5.0, 5.0, false);
    assert_eq!(map.inv_transform(50), 0.0);
    assert_eq!(map.transform(7.0), 0);
}

#[test]
fn lim_transform_stays_in_pixel_range() {
    let map = PixelMap::new(0, 100, 0.0, 10.0, false);
    assert_eq!(map.lim_transform(-5.0), 0);
    assert_eq!(map.lim_transform(15.0), 100);
    assert_eq!(map.lim_transform(5.0), 50);
}

#[test]
fn containment_checks() {
    let map = PixelMap::new(100, 0, 2.0, 8.0, false);
    assert!(map.contains_value(2.0));
    assert!(map.contains_value(8.0));
    assert!(!map.contains_value(8.5));
    assert!(map.contains_pixel(0));
    assert!(map.contains_pixel(100));
    assert!(!map.contains_pixel(101));
}
