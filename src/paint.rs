//! Pen and brush state shared by curves and symbols.

use piet::Color;

/// How a curve or symbol is painted: a pen for outlines and a brush for
/// fills.
///
/// The brush is only used when `filled` is set; by default everything is
/// drawn with a thin black pen and no fill.
#[derive(Debug, Clone)]
pub struct Paint {
    pen_color: Color,
    pen_width: f64,
    brush_color: Color,
    filled: bool,
}

impl Default for Paint {
    fn default() -> Self {
        Paint {
            pen_color: Color::BLACK,
            pen_width: 1.0,
            brush_color: Color::BLACK,
            filled: false,
        }
    }
}

impl Paint {
    pub fn new() -> Self {
        Paint::default()
    }

    /// The color outlines are stroked with.
    pub fn pen_color(&self) -> &Color {
        &self.pen_color
    }

    pub fn set_pen_color(&mut self, color: Color) {
        self.pen_color = color;
    }

    /// Stroke width in pixels.
    pub fn pen_width(&self) -> f64 {
        self.pen_width
    }

    pub fn set_pen_width(&mut self, width: f64) {
        self.pen_width = width;
    }

    /// The color fills are painted with.
    pub fn brush_color(&self) -> &Color {
        &self.brush_color
    }

    pub fn set_brush_color(&mut self, color: Color) {
        self.brush_color = color;
    }

    /// Whether shapes drawn with this paint are filled with the brush.
    pub fn filled(&self) -> bool {
        self.filled
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.filled = filled;
    }
}

#[test]
fn default_paint_is_unfilled_black() {
    let paint = Paint::new();
    assert!(!paint.filled());
    assert_eq!(paint.pen_width(), 1.0);
}

#[test]
fn setters_round_trip() {
    let mut paint = Paint::new();
    paint.set_filled(true);
    paint.set_pen_width(2.5);
    assert!(paint.filled());
    assert_eq!(paint.pen_width(), 2.5);
}
