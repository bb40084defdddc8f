//! Adapter helpers to use scene styles with the plotters crate.
//!
//! Usage example (inside a drawing routine):
//! ```ignore
//!     use plotters::prelude::*;
//!     use crate::viz_plotters_adapter::{backend_coords, stroke_style};
//!
//!     root.draw(&PathElement::new(backend_coords(&points), stroke_style(&stroke)))?;
//! ```

use plotters::prelude::*;

use crate::viz::Pixel;
use crate::viz_style::{Rgb8, StrokeStyle};

pub fn rgb_color(rgb: Rgb8) -> RGBColor {
    RGBColor(rgb.r, rgb.g, rgb.b)
}

/// Build a ShapeStyle for line strokes.
/// Plotters strokes are whole pixels; hairlines round up to 1px.
pub fn stroke_style(stroke: &StrokeStyle) -> ShapeStyle {
    ShapeStyle {
        color: rgb_color(stroke.color).to_rgba(),
        filled: false,
        stroke_width: stroke.width.round().max(1.0) as u32,
    }
}

/// Build a filled style for polygons.
pub fn fill_style(rgb: Rgb8) -> ShapeStyle {
    rgb_color(rgb).filled()
}

/// Round scene pixels to backend coordinates.
pub fn backend_coord(p: Pixel) -> (i32, i32) {
    (p.x.round() as i32, p.y.round() as i32)
}

pub fn backend_coords(points: &[Pixel]) -> Vec<(i32, i32)> {
    points.iter().copied().map(backend_coord).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hairline_rounds_up() {
        let s = stroke_style(&StrokeStyle::solid(0.5, Rgb8::BLACK));
        assert_eq!(s.stroke_width, 1);
        let s = stroke_style(&StrokeStyle::solid(3.0, Rgb8::BLUE));
        assert_eq!(s.stroke_width, 3);
        assert!(!s.filled);
    }

    #[test]
    fn coords_round_to_nearest() {
        assert_eq!(backend_coord(Pixel::new(1.4, 2.6)), (1, 3));
        assert_eq!(backend_coord(Pixel::new(-0.6, 0.0)), (-1, 0));
    }
}
