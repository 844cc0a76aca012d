//! Pixel positions and text for the labels along a scale.

use to_precision::FloatExt as _;

use crate::map::PixelMap;
use crate::scalediv::ScaleDiv;

/// The label positions of a scale: each major mark of a division, mapped to
/// its pixel coordinate and kept sorted by pixel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScaleLabels {
    offset: i32,
    labels: Vec<(i32, f64)>,
}

impl ScaleLabels {
    /// Map the major marks of `div` through `map` and collect the labelled
    /// positions, sorted along the axis.
    pub fn from_division(div: &ScaleDiv, map: &PixelMap) -> Self {
        let mut labels: Vec<(i32, f64)> = div
            .maj_marks()
            .iter()
            .map(|&mark| (map.transform(mark), mark))
            .collect();
        labels.sort_by_key(|&(pos, _)| pos);

        ScaleLabels { offset: 0, labels }
    }

    /// Replace the labels wholesale. `offset` shifts every pixel position
    /// when the scale is drawn away from the map's origin.
    pub fn set_labels(&mut self, offset: i32, labels: Vec<(i32, f64)>) {
        self.offset = offset;
        self.labels = labels;
        self.labels.sort_by_key(|&(pos, _)| pos);
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// The (pixel position, mark value) pairs, sorted by pixel.
    pub fn labels(&self) -> &[(i32, f64)] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Render a mark value as label text with 5 significant digits.
pub fn format(value: f64) -> String {
    format!("{}", value.to_precision(5))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_map_marks_to_pixels() {
        let mut div = ScaleDiv::new();
        assert!(div.rebuild(0.0, 100.0, 10, 0, false, 0.0, true));
        let map = PixelMap::new(0, 200, 0.0, 100.0, false);

        let labels = ScaleLabels::from_division(&div, &map);
        assert_eq!(labels.len(), 11);
        assert_eq!(labels.labels()[0], (0, 0.0));
        assert_eq!(labels.labels()[5], (100, 50.0));
        assert_eq!(labels.labels()[10], (200, 100.0));
    }

    #[test]
    fn labels_sort_by_pixel_on_inverted_axes() {
        let mut div = ScaleDiv::new();
        assert!(div.rebuild(0.0, 100.0, 10, 0, false, 0.0, true));
        // pixel coordinates grow downwards on screen
        let map = PixelMap::new(200, 0, 0.0, 100.0, false);

        let labels = ScaleLabels::from_division(&div, &map);
        assert_eq!(labels.labels()[0], (0, 100.0));
        assert_eq!(labels.labels()[10], (200, 0.0));
    }

    #[test]
    fn empty_division_has_no_labels() {
        let div = ScaleDiv::new();
        let map = PixelMap::default();
        assert!(ScaleLabels::from_division(&div, &map).is_empty());
    }

    #[test]
    fn format_uses_significant_digits() {
        assert_eq!(format(0.5), "0.50000");
        assert_eq!(format(123.456789), "123.46");
    }
}
