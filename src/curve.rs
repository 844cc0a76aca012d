//! Curves: data series drawn in the x-y plane.

use itertools::izip;
use piet::kurbo::{BezPath, Circle, Line, Point, Rect};
use piet::RenderContext;

use crate::map::PixelMap;
use crate::paint::Paint;
use crate::symbol::{Symbol, SymbolStyle};

/// Dots are drawn as filled circles of this radius.
const DOT_RADIUS: f64 = 4.0;

/// How the points of a curve are connected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveStyle {
    /// Don't draw a curve. This doesn't affect the symbols.
    None,
    /// Connect the points with straight lines.
    #[default]
    Lines,
    /// Draw sticks from the baseline to each point.
    Sticks,
    /// A step function holding the previous value until the next point.
    LSteps,
    /// A step function switching halfway between neighbouring points.
    CSteps,
    /// A step function jumping to the next value immediately.
    RSteps,
    /// Draw dots at the data points. This is different from a dotted line.
    Dots,
}

/// Options modifying how a curve is drawn.
///
/// With `x_of_y` set the curve is drawn as x over y and the baseline is a
/// vertical line at `x = baseline()`; otherwise y is a function of x and
/// the baseline is horizontal. `inverted` flips the direction of the step
/// styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CurveOptions {
    pub x_of_y: bool,
    pub inverted: bool,
}

/// A data series together with everything needed to draw it.
///
/// A new curve draws black solid lines and no symbols. Change this with
/// [`set_curve_style`](Self::set_curve_style), [`paint_mut`](Self::paint_mut)
/// and [`set_symbol`](Self::set_symbol), assign data with
/// [`set_data`](Self::set_data) and render it with [`draw`](Self::draw),
/// which maps the data through a pair of [`PixelMap`]s and paints it.
#[derive(Debug, Clone)]
pub struct Curve {
    enabled: bool,
    x: Vec<f64>,
    y: Vec<f64>,
    style: CurveStyle,
    options: CurveOptions,
    baseline: f64,
    paint: Paint,
    symbol: Symbol,
    title: String,
}

impl Default for Curve {
    fn default() -> Self {
        Curve::new("")
    }
}

impl Curve {
    pub fn new(title: impl Into<String>) -> Self {
        Curve {
            enabled: true,
            x: Vec::new(),
            y: Vec::new(),
            style: CurveStyle::default(),
            options: CurveOptions::default(),
            baseline: 0.0,
            paint: Paint::default(),
            symbol: Symbol::default(),
            title: title.into(),
        }
    }

    /// Enable or disable this curve for drawing.
    pub fn set_enabled(&mut self, b: bool) {
        self.enabled = b;
    }

    /// Query if this curve is enabled for drawing.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Assign data by copying the x and y values.
    ///
    /// Unevenly sized slices are truncated to the shorter one.
    pub fn set_data(&mut self, x_data: &[f64], y_data: &[f64]) {
        let len = x_data.len().min(y_data.len());
        if x_data.len() != y_data.len() {
            log::warn!(
                "uneven data lengths ({} x, {} y), truncating to {}",
                x_data.len(),
                y_data.len(),
                len
            );
        }
        self.x = x_data[..len].to_vec();
        self.y = y_data[..len].to_vec();
    }

    /// Assign data from a list of points.
    pub fn set_points(&mut self, points: &[Point]) {
        self.x = points.iter().map(|p| p.x).collect();
        self.y = points.iter().map(|p| p.y).collect();
    }

    /// The size of the data arrays.
    pub fn data_size(&self) -> usize {
        self.x.len()
    }

    /// x-value at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn x(&self, i: usize) -> f64 {
        self.x[i]
    }

    /// y-value at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn y(&self, i: usize) -> f64 {
        self.y[i]
    }

    /// The bounding rectangle of the data, or `None` when the curve is
    /// empty.
    pub fn bounding_rect(&self) -> Option<Rect> {
        let (&x0, &y0) = (self.x.first()?, self.y.first()?);
        let mut rect = Rect::new(x0, y0, x0, y0);
        for (&xv, &yv) in izip!(&self.x, &self.y) {
            rect.x0 = rect.x0.min(xv);
            rect.x1 = rect.x1.max(xv);
            rect.y0 = rect.y0.min(yv);
            rect.y1 = rect.y1.max(yv);
        }
        Some(rect)
    }

    /// Set the curve's drawing style, together with the style options.
    pub fn set_curve_style(&mut self, style: CurveStyle, options: CurveOptions) {
        self.style = style;
        self.options = options;
    }

    pub fn curve_style(&self) -> CurveStyle {
        self.style
    }

    pub fn set_options(&mut self, options: CurveOptions) {
        self.options = options;
    }

    pub fn options(&self) -> CurveOptions {
        self.options
    }

    /// Set the value of the baseline.
    ///
    /// The baseline is needed for filling the curve and for the sticks
    /// style. By default it is a horizontal line at `y = 0.0`; with the
    /// `x_of_y` option it becomes a vertical line instead.
    pub fn set_baseline(&mut self, baseline: f64) {
        self.baseline = baseline;
    }

    pub fn baseline(&self) -> f64 {
        self.baseline
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn paint_mut(&mut self) -> &mut Paint {
        &mut self.paint
    }

    pub fn set_symbol(&mut self, symbol: Symbol) {
        self.symbol = symbol;
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn symbol_mut(&mut self) -> &mut Symbol {
        &mut self.symbol
    }

    /// Draw the whole curve.
    pub fn draw<RC: RenderContext>(&self, rc: &mut RC, x_map: &PixelMap, y_map: &PixelMap) {
        self.draw_range(rc, x_map, y_map, 0, usize::MAX);
    }

    /// Draw an interval of the curve. Out of range indices are clamped to
    /// the data.
    pub fn draw_range<RC: RenderContext>(
        &self,
        rc: &mut RC,
        x_map: &PixelMap,
        y_map: &PixelMap,
        from: usize,
        to: usize,
    ) {
        if !self.enabled {
            return;
        }
        let (from, to) = match self.verify_range(from, to) {
            Some(range) => range,
            None => return,
        };

        match self.style {
            CurveStyle::None => {}
            CurveStyle::Lines => {
                let points = self.lines_polyline(x_map, y_map, from, to);
                self.stroke_polyline(rc, x_map, y_map, points);
            }
            CurveStyle::Sticks => {
                for (a, b) in self.stick_segments(x_map, y_map, from, to) {
                    rc.stroke(Line::new(a, b), self.paint.pen_color(), self.paint.pen_width());
                }
            }
            CurveStyle::LSteps => {
                let points = self.l_steps_polyline(x_map, y_map, from, to);
                self.stroke_polyline(rc, x_map, y_map, points);
            }
            CurveStyle::CSteps => {
                let points = self.c_steps_polyline(x_map, y_map, from, to);
                self.stroke_polyline(rc, x_map, y_map, points);
            }
            CurveStyle::RSteps => {
                let points = self.r_steps_polyline(x_map, y_map, from, to);
                self.stroke_polyline(rc, x_map, y_map, points);
            }
            CurveStyle::Dots => {
                for p in self.dot_points(x_map, y_map, from, to) {
                    rc.fill(Circle::new(p, DOT_RADIUS), self.paint.pen_color());
                }
            }
        }

        if self.symbol.style() != SymbolStyle::None {
            for i in from..=to {
                self.symbol
                    .draw(rc, x_map.transform(self.x[i]), y_map.transform(self.y[i]));
            }
        }
    }

    /// Clamp an index range to the data, or `None` for an empty curve.
    fn verify_range(&self, from: usize, to: usize) -> Option<(usize, usize)> {
        if self.data_size() == 0 {
            return None;
        }
        let from = from.min(self.data_size() - 1);
        let to = to.min(self.data_size() - 1);
        Some((from.min(to), from.max(to)))
    }

    /// Whether the step styles run from right to left.
    fn step_inverted(&self) -> bool {
        self.options.x_of_y != self.options.inverted
    }

    fn point(&self, x_map: &PixelMap, y_map: &PixelMap, i: usize) -> Point {
        Point::new(
            x_map.transform(self.x[i]) as f64,
            y_map.transform(self.y[i]) as f64,
        )
    }

    fn lines_polyline(
        &self,
        x_map: &PixelMap,
        y_map: &PixelMap,
        from: usize,
        to: usize,
    ) -> Vec<Point> {
        izip!(&self.x[from..=to], &self.y[from..=to])
            .map(|(&xv, &yv)| {
                Point::new(x_map.transform(xv) as f64, y_map.transform(yv) as f64)
            })
            .collect()
    }

    fn stick_segments(
        &self,
        x_map: &PixelMap,
        y_map: &PixelMap,
        from: usize,
        to: usize,
    ) -> Vec<(Point, Point)> {
        let x0 = x_map.transform(self.baseline) as f64;
        let y0 = y_map.transform(self.baseline) as f64;

        izip!(&self.x[from..=to], &self.y[from..=to])
            .map(|(&xv, &yv)| {
                let xi = x_map.transform(xv) as f64;
                let yi = y_map.transform(yv) as f64;
                if self.options.x_of_y {
                    (Point::new(x0, yi), Point::new(xi, yi))
                } else {
                    (Point::new(xi, y0), Point::new(xi, yi))
                }
            })
            .collect()
    }

    fn l_steps_polyline(
        &self,
        x_map: &PixelMap,
        y_map: &PixelMap,
        from: usize,
        to: usize,
    ) -> Vec<Point> {
        let inverted = self.step_inverted();
        let mut out = vec![self.point(x_map, y_map, from)];

        for i in from + 1..=to {
            let next = self.point(x_map, y_map, i);
            let prev = *out.last().unwrap();
            if inverted {
                out.push(Point::new(next.x, prev.y));
            } else {
                out.push(Point::new(prev.x, next.y));
            }
            out.push(next);
        }
        out
    }

    fn c_steps_polyline(
        &self,
        x_map: &PixelMap,
        y_map: &PixelMap,
        from: usize,
        to: usize,
    ) -> Vec<Point> {
        let inverted = self.step_inverted();
        let mut cur = self.point(x_map, y_map, from);
        let mut out = vec![cur];

        for i in from + 1..=to {
            // break the step halfway between the data points
            let next = if inverted {
                Point::new(
                    x_map.transform(self.x[i]) as f64,
                    y_map.transform((self.y[i] + self.y[i - 1]) * 0.5) as f64,
                )
            } else {
                Point::new(
                    x_map.transform((self.x[i] + self.x[i - 1]) * 0.5) as f64,
                    y_map.transform(self.y[i]) as f64,
                )
            };
            if inverted {
                out.push(Point::new(cur.x, next.y));
            } else {
                out.push(Point::new(next.x, cur.y));
            }
            cur = next;
            out.push(cur);
        }
        out.push(self.point(x_map, y_map, to));
        out
    }

    fn r_steps_polyline(
        &self,
        x_map: &PixelMap,
        y_map: &PixelMap,
        from: usize,
        to: usize,
    ) -> Vec<Point> {
        let inverted = self.step_inverted();
        let mut out = vec![self.point(x_map, y_map, from)];

        for i in from + 1..=to {
            let next = self.point(x_map, y_map, i);
            let prev = *out.last().unwrap();
            if inverted {
                out.push(Point::new(prev.x, next.y));
            } else {
                out.push(Point::new(next.x, prev.y));
            }
            out.push(next);
        }
        out
    }

    fn dot_points(
        &self,
        x_map: &PixelMap,
        y_map: &PixelMap,
        from: usize,
        to: usize,
    ) -> Vec<Point> {
        self.lines_polyline(x_map, y_map, from, to)
    }

    /// Complete a polyline to a closed polygon including the area between
    /// the curve and the baseline.
    fn close_polyline(&self, x_map: &PixelMap, y_map: &PixelMap, points: &mut Vec<Point>) {
        if points.len() < 2 {
            return;
        }
        let first = points[0];
        let last = *points.last().unwrap();

        if self.options.x_of_y {
            let xb = x_map.transform(self.baseline) as f64;
            points.push(Point::new(xb, last.y));
            points.push(Point::new(xb, first.y));
        } else {
            let yb = y_map.transform(self.baseline) as f64;
            points.push(Point::new(last.x, yb));
            points.push(Point::new(first.x, yb));
        }
    }

    fn stroke_polyline<RC: RenderContext>(
        &self,
        rc: &mut RC,
        x_map: &PixelMap,
        y_map: &PixelMap,
        mut points: Vec<Point>,
    ) {
        if points.len() < 2 {
            return;
        }
        rc.stroke(
            polyline_path(&points),
            self.paint.pen_color(),
            self.paint.pen_width(),
        );

        if self.paint.filled() {
            self.close_polyline(x_map, y_map, &mut points);
            let mut path = polyline_path(&points);
            path.close_path();
            rc.fill(path, self.paint.brush_color());
        }
    }
}

/// Build an open path connecting the points in order.
fn polyline_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    if let Some((first, rest)) = points.split_first() {
        path.move_to(*first);
        for p in rest {
            path.line_to(*p);
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_maps() -> (PixelMap, PixelMap) {
        (
            PixelMap::new(0, 100, 0.0, 10.0, false),
            PixelMap::new(0, 100, 0.0, 10.0, false),
        )
    }

    fn pts(coords: &[(f64, f64)]) -> Vec<Point> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn sample_curve() -> Curve {
        let mut curve = Curve::new("sample");
        curve.set_data(&[0.0, 2.0, 4.0], &[0.0, 4.0, 2.0]);
        curve
    }

    #[test]
    fn set_data_truncates_uneven_slices() {
        let mut curve = Curve::new("");
        curve.set_data(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert_eq!(curve.data_size(), 2);
        assert_eq!(curve.x(1), 2.0);
    }

    #[test]
    fn bounding_rect_of_empty_curve_is_none() {
        assert!(Curve::new("").bounding_rect().is_none());
    }

    #[test]
    fn bounding_rect_is_tight() {
        let rect = sample_curve().bounding_rect().unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 4.0, 4.0));
    }

    #[test]
    fn lines_polyline_maps_points() {
        let (xm, ym) = unit_maps();
        let curve = sample_curve();
        let line = curve.lines_polyline(&xm, &ym, 0, 2);
        assert_eq!(line, pts(&[(0.0, 0.0), (20.0, 40.0), (40.0, 20.0)]));
    }

    #[test]
    fn l_steps_hold_the_previous_value() {
        let (xm, ym) = unit_maps();
        let curve = sample_curve();
        let line = curve.l_steps_polyline(&xm, &ym, 0, 2);
        assert_eq!(
            line,
            pts(&[
                (0.0, 0.0),
                (0.0, 40.0),
                (20.0, 40.0),
                (20.0, 20.0),
                (40.0, 20.0),
            ])
        );
    }

    #[test]
    fn r_steps_jump_to_the_next_value() {
        let (xm, ym) = unit_maps();
        let curve = sample_curve();
        let line = curve.r_steps_polyline(&xm, &ym, 0, 2);
        assert_eq!(
            line,
            pts(&[
                (0.0, 0.0),
                (20.0, 0.0),
                (20.0, 40.0),
                (40.0, 40.0),
                (40.0, 20.0),
            ])
        );
    }

    #[test]
    fn inverted_l_steps_mirror_r_steps() {
        let (xm, ym) = unit_maps();
        let mut curve = sample_curve();
        curve.set_options(CurveOptions {
            x_of_y: false,
            inverted: true,
        });
        let l = curve.l_steps_polyline(&xm, &ym, 0, 2);
        curve.set_options(CurveOptions::default());
        let r = curve.r_steps_polyline(&xm, &ym, 0, 2);
        assert_eq!(l, r);
    }

    #[test]
    fn c_steps_break_at_midpoints() {
        let (xm, ym) = unit_maps();
        let curve = sample_curve();
        let line = curve.c_steps_polyline(&xm, &ym, 0, 2);
        assert_eq!(
            line,
            pts(&[
                (0.0, 0.0),
                (10.0, 0.0),
                (10.0, 40.0),
                (30.0, 40.0),
                (30.0, 20.0),
                (40.0, 20.0),
            ])
        );
    }

    #[test]
    fn sticks_run_from_the_baseline() {
        let (xm, ym) = unit_maps();
        let curve = sample_curve();
        let sticks = curve.stick_segments(&xm, &ym, 0, 2);
        assert_eq!(
            sticks,
            vec![
                (Point::new(0.0, 0.0), Point::new(0.0, 0.0)),
                (Point::new(20.0, 0.0), Point::new(20.0, 40.0)),
                (Point::new(40.0, 0.0), Point::new(40.0, 20.0)),
            ]
        );
    }

    #[test]
    fn x_of_y_sticks_are_horizontal() {
        let (xm, ym) = unit_maps();
        let mut curve = sample_curve();
        curve.set_options(CurveOptions {
            x_of_y: true,
            inverted: false,
        });
        curve.set_baseline(1.0);
        let sticks = curve.stick_segments(&xm, &ym, 0, 2);
        assert_eq!(sticks[1], (Point::new(10.0, 40.0), Point::new(20.0, 40.0)));
    }

    #[test]
    fn close_polyline_drops_to_the_baseline() {
        let (xm, ym) = unit_maps();
        let curve = sample_curve();
        let mut line = curve.lines_polyline(&xm, &ym, 0, 2);
        curve.close_polyline(&xm, &ym, &mut line);
        assert_eq!(line[3], Point::new(40.0, 0.0));
        assert_eq!(line[4], Point::new(0.0, 0.0));
    }

    #[test]
    fn verify_range_clamps_and_orders() {
        let curve = sample_curve();
        assert_eq!(curve.verify_range(0, usize::MAX), Some((0, 2)));
        assert_eq!(curve.verify_range(5, 1), Some((1, 2)));
        assert_eq!(Curve::new("").verify_range(0, 0), None);
    }

    #[test]
    fn set_points_splits_coordinates() {
        let mut curve = Curve::new("");
        curve.set_points(&pts(&[(1.0, 2.0), (3.0, 4.0)]));
        assert_eq!(curve.x(1), 3.0);
        assert_eq!(curve.y(0), 2.0);
    }
}
