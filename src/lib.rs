//! A(nother) 2D plotting library for piet.
//!
//! The core of the crate is the pairing of [`ScaleDiv`], which splits an
//! axis interval into "nice" major and minor marks, and [`PixelMap`], which
//! converts between data coordinates and pixel coordinates, linearly or
//! logarithmically. On top of that sit [`Curve`], [`ErrorCurve`] and
//! [`Symbol`], which map data series through a pair of maps and draw them
//! into any [`piet::RenderContext`].

pub mod curve;
pub mod errorcurve;
pub mod labels;
pub mod map;
pub mod paint;
pub mod scalediv;
pub mod symbol;
pub mod util;

pub use crate::{
    curve::{Curve, CurveOptions, CurveStyle},
    errorcurve::ErrorCurve,
    labels::ScaleLabels,
    map::PixelMap,
    paint::Paint,
    scalediv::ScaleDiv,
    symbol::{Symbol, SymbolStyle},
};
