//! Curves with error bars.

use piet::kurbo::Line;
use piet::RenderContext;

use crate::curve::Curve;
use crate::map::PixelMap;
use crate::paint::Paint;

/// A [`Curve`] with optional per-point errors in x and/or y.
///
/// Error bars are drawn with their own [`Paint`], as a segment spanning the
/// error interval with short perpendicular caps at both ends. An error
/// vector is only honored when its length matches the data length.
#[derive(Debug, Clone, Default)]
pub struct ErrorCurve {
    curve: Curve,
    dx: Vec<f64>,
    dy: Vec<f64>,
    error_paint: Paint,
}

impl ErrorCurve {
    pub fn new(title: impl Into<String>) -> Self {
        ErrorCurve {
            curve: Curve::new(title),
            dx: Vec::new(),
            dy: Vec::new(),
            error_paint: Paint::default(),
        }
    }

    /// The underlying curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    pub fn curve_mut(&mut self) -> &mut Curve {
        &mut self.curve
    }

    /// The paint the error bars are drawn with.
    pub fn error_paint(&self) -> &Paint {
        &self.error_paint
    }

    pub fn error_paint_mut(&mut self) -> &mut Paint {
        &mut self.error_paint
    }

    /// Assign data without errors. Previous errors are discarded.
    pub fn set_data(&mut self, x_data: &[f64], y_data: &[f64]) {
        self.dx.clear();
        self.dy.clear();
        self.curve.set_data(x_data, y_data);
    }

    /// Assign data together with error values. Pass `None` to drop the
    /// errors for one direction.
    pub fn set_data_with_errors(
        &mut self,
        x_data: &[f64],
        y_data: &[f64],
        x_err: Option<&[f64]>,
        y_err: Option<&[f64]>,
    ) {
        self.dx = x_err.map(<[f64]>::to_vec).unwrap_or_default();
        self.dy = y_err.map(<[f64]>::to_vec).unwrap_or_default();
        self.curve.set_data(x_data, y_data);
    }

    /// x-error at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn dx(&self, i: usize) -> f64 {
        self.dx[i]
    }

    /// y-error at position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn dy(&self, i: usize) -> f64 {
        self.dy[i]
    }

    /// Whether x-errors are present for every data point.
    pub fn have_dx(&self) -> bool {
        !self.dx.is_empty() && self.dx.len() == self.curve.data_size()
    }

    /// Whether y-errors are present for every data point.
    pub fn have_dy(&self) -> bool {
        !self.dy.is_empty() && self.dy.len() == self.curve.data_size()
    }

    /// Draw the error bars followed by the curve itself.
    pub fn draw<RC: RenderContext>(&self, rc: &mut RC, x_map: &PixelMap, y_map: &PixelMap) {
        if self.curve.data_size() == 0 {
            return;
        }

        // without a symbol size the caps would be empty
        if self.curve.symbol().size() != 0 {
            for i in 0..self.curve.data_size() {
                if self.have_dx() {
                    for line in self.x_error_lines(x_map, y_map, i) {
                        rc.stroke(
                            line,
                            self.error_paint.pen_color(),
                            self.error_paint.pen_width(),
                        );
                    }
                }
                if self.have_dy() {
                    for line in self.y_error_lines(x_map, y_map, i) {
                        rc.stroke(
                            line,
                            self.error_paint.pen_color(),
                            self.error_paint.pen_width(),
                        );
                    }
                }
            }
        }

        self.curve.draw(rc, x_map, y_map);
    }

    /// The bar and its two caps for the x-error at point `i`.
    fn x_error_lines(&self, x_map: &PixelMap, y_map: &PixelMap, i: usize) -> [Line; 3] {
        let w = ((self.curve.symbol().size_aux() + 1) / 2) as f64;
        let xl = x_map.transform(self.curve.x(i) - self.dx[i]) as f64;
        let xu = x_map.transform(self.curve.x(i) + self.dx[i]) as f64;
        let y0 = y_map.transform(self.curve.y(i)) as f64;

        [
            Line::new((xl, y0), (xu, y0)),
            Line::new((xl, y0 - w), (xl, y0 + w)),
            Line::new((xu, y0 - w), (xu, y0 + w)),
        ]
    }

    /// The bar and its two caps for the y-error at point `i`.
    fn y_error_lines(&self, x_map: &PixelMap, y_map: &PixelMap, i: usize) -> [Line; 3] {
        let w = ((self.curve.symbol().size() + 1) / 2) as f64;
        let yl = y_map.transform(self.curve.y(i) - self.dy[i]) as f64;
        let yu = y_map.transform(self.curve.y(i) + self.dy[i]) as f64;
        let x0 = x_map.transform(self.curve.x(i)) as f64;

        [
            Line::new((x0, yl), (x0, yu)),
            Line::new((x0 - w, yl), (x0 + w, yl)),
            Line::new((x0 - w, yu), (x0 + w, yu)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{Symbol, SymbolStyle};
    use piet::kurbo::Point;

    #[test]
    fn errors_require_matching_lengths() {
        let mut curve = ErrorCurve::new("");
        curve.set_data_with_errors(
            &[1.0, 2.0, 3.0],
            &[1.0, 2.0, 3.0],
            Some(&[0.1, 0.1]),
            Some(&[0.2, 0.2, 0.2]),
        );
        assert!(!curve.have_dx());
        assert!(curve.have_dy());
    }

    #[test]
    fn set_data_discards_errors() {
        let mut curve = ErrorCurve::new("");
        curve.set_data_with_errors(&[1.0], &[1.0], Some(&[0.5]), None);
        assert!(curve.have_dx());
        curve.set_data(&[1.0, 2.0], &[1.0, 2.0]);
        assert!(!curve.have_dx());
    }

    #[test]
    fn x_error_bar_spans_the_interval() {
        let xm = PixelMap::new(0, 100, 0.0, 10.0, false);
        let ym = PixelMap::new(0, 100, 0.0, 10.0, false);

        let mut curve = ErrorCurve::new("");
        curve.set_data_with_errors(&[5.0], &[2.0], Some(&[1.0]), None);
        curve.curve_mut().set_symbol(Symbol::new(SymbolStyle::Ellipse, 5));

        let [bar, cap_l, cap_u] = curve.x_error_lines(&xm, &ym, 0);
        assert_eq!(bar.p0, Point::new(40.0, 20.0));
        assert_eq!(bar.p1, Point::new(60.0, 20.0));
        // caps extend (size + 1) / 2 pixels either side of the bar
        assert_eq!(cap_l.p0, Point::new(40.0, 17.0));
        assert_eq!(cap_l.p1, Point::new(40.0, 23.0));
        assert_eq!(cap_u.p0, Point::new(60.0, 17.0));
    }
}
