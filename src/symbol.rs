//! Point markers drawn at curve positions.

use piet::kurbo::{BezPath, Ellipse, Shape};
use piet::RenderContext;

use crate::paint::Paint;

/// The available marker shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolStyle {
    /// No style. The symbol cannot be drawn.
    None,
    /// Ellipse or circle
    Ellipse,
    Rectangle,
    Diamond,
    /// Triangle pointing upwards
    Triangle,
    /// Triangle pointing downwards
    DTriangle,
    /// Triangle pointing upwards
    UTriangle,
    /// Triangle pointing left
    LTriangle,
    /// Triangle pointing right
    RTriangle,
    /// Upright cross
    Cross,
    /// Diagonal cross
    XCross,
}

impl SymbolStyle {
    /// Whether the outline is a closed shape that can be filled.
    fn closed(self) -> bool {
        !matches!(self, SymbolStyle::None | SymbolStyle::Cross | SymbolStyle::XCross)
    }
}

/// A marker drawn centered on a pixel position.
///
/// In most cases the vertical size is the same as the horizontal size and it
/// is sufficient to set the horizontal one. The outline is stroked with the
/// paint's pen and filled with its brush when the paint is filled.
#[derive(Debug, Clone)]
pub struct Symbol {
    style: SymbolStyle,
    size: i32,
    size_b: Option<i32>,
    paint: Paint,
}

impl Default for Symbol {
    fn default() -> Self {
        Symbol {
            style: SymbolStyle::None,
            size: 0,
            size_b: None,
            paint: Paint::default(),
        }
    }
}

impl Symbol {
    /// Create a symbol with the given style and horizontal size.
    pub fn new(style: SymbolStyle, size: i32) -> Self {
        Symbol {
            style,
            size,
            size_b: None,
            paint: Paint::default(),
        }
    }

    pub fn style(&self) -> SymbolStyle {
        self.style
    }

    pub fn set_style(&mut self, style: SymbolStyle) {
        self.style = style;
    }

    /// Horizontal size in pixels.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Vertical size in pixels. Defaults to the horizontal size.
    pub fn size_aux(&self) -> i32 {
        self.size_b.unwrap_or(self.size)
    }

    /// Specify the symbol's size. Pass `None` for `h` to reuse the
    /// horizontal size vertically.
    pub fn set_size(&mut self, w: i32, h: Option<i32>) {
        self.size = w;
        self.size_b = h;
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn paint_mut(&mut self) -> &mut Paint {
        &mut self.paint
    }

    /// Build the marker geometry centered on `(x, y)`.
    ///
    /// Cross styles produce open subpaths, everything else a closed shape.
    /// A `None` style produces an empty path.
    pub fn outline(&self, x: i32, y: i32) -> BezPath {
        let w = self.size;
        let h = self.size_aux();

        let x1 = x as f64;
        let y1 = y as f64;
        let x0 = (x - w / 2) as f64;
        let y0 = (y - h / 2) as f64;
        let x2 = x0 + w as f64;
        let y2 = y0 + h as f64;

        let mut path = BezPath::new();
        match self.style {
            SymbolStyle::None => {}
            SymbolStyle::Ellipse => {
                let rx = w as f64 / 2.0;
                let ry = h as f64 / 2.0;
                path = Ellipse::new((x1, y1), (rx, ry), 0.0).to_path(0.1);
            }
            SymbolStyle::Rectangle => {
                path.move_to((x0, y0));
                path.line_to((x2, y0));
                path.line_to((x2, y2));
                path.line_to((x0, y2));
                path.close_path();
            }
            SymbolStyle::Diamond => {
                path.move_to((x1, y0));
                path.line_to((x2, y1));
                path.line_to((x1, y2));
                path.line_to((x0, y1));
                path.close_path();
            }
            SymbolStyle::Triangle | SymbolStyle::UTriangle => {
                path.move_to((x1, y0));
                path.line_to((x2, y2));
                path.line_to((x0, y2));
                path.close_path();
            }
            SymbolStyle::DTriangle => {
                path.move_to((x0, y0));
                path.line_to((x2, y0));
                path.line_to((x1, y2));
                path.close_path();
            }
            SymbolStyle::LTriangle => {
                path.move_to((x0, y0));
                path.line_to((x2, y1));
                path.line_to((x0, y2));
                path.close_path();
            }
            SymbolStyle::RTriangle => {
                path.move_to((x2, y0));
                path.line_to((x0, y1));
                path.line_to((x2, y2));
                path.close_path();
            }
            SymbolStyle::Cross => {
                path.move_to((x1, y0));
                path.line_to((x1, y2));
                path.move_to((x0, y1));
                path.line_to((x2, y1));
            }
            SymbolStyle::XCross => {
                path.move_to((x0, y0));
                path.line_to((x2, y2));
                path.move_to((x0, y2));
                path.line_to((x2, y0));
            }
        }
        path
    }

    /// Draw the symbol centered on the pixel position `(x, y)`.
    pub fn draw<RC: RenderContext>(&self, rc: &mut RC, x: i32, y: i32) {
        if self.style == SymbolStyle::None {
            return;
        }
        let path = self.outline(x, y);
        if self.style.closed() && self.paint.filled() {
            rc.fill(&path, self.paint.brush_color());
        }
        rc.stroke(&path, self.paint.pen_color(), self.paint.pen_width());
    }
}

#[test]
fn rectangle_outline_spans_size() {
    let symbol = Symbol::new(SymbolStyle::Rectangle, 8);
    let bbox = symbol.outline(10, 10).bounding_box();
    assert_eq!(bbox.x0, 6.0);
    assert_eq!(bbox.y0, 6.0);
    assert_eq!(bbox.width(), 8.0);
    assert_eq!(bbox.height(), 8.0);
}

#[test]
fn none_style_has_no_outline() {
    let symbol = Symbol::default();
    assert!(symbol.outline(0, 0).elements().is_empty());
}

#[test]
fn cross_styles_are_open() {
    assert!(!SymbolStyle::Cross.closed());
    assert!(!SymbolStyle::XCross.closed());
    assert!(SymbolStyle::Diamond.closed());
}

#[test]
fn aux_size_defaults_to_size() {
    let mut symbol = Symbol::new(SymbolStyle::Ellipse, 6);
    assert_eq!(symbol.size_aux(), 6);
    symbol.set_size(6, Some(4));
    assert_eq!(symbol.size_aux(), 4);
}
