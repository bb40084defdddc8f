//! World-to-pixel mapping: data bounds, uniform scale and centering padding.

use super::scene::Pixel;
use super::types::Canvas;
use crate::error::RenderError;
use crate::models::Point;

/// Axis-aligned world rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl ViewBounds {
    /// Full scan over the finite points. `None` if there are none.
    ///
    /// Series order is not assumed to be x-ascending.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut it = points.into_iter().filter(|p| p.is_finite());
        let first = it.next()?;
        let init = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(it.fold(init, |b, p| Self {
            min_x: b.min_x.min(p.x),
            max_x: b.max_x.max(p.x),
            min_y: b.min_y.min(p.y),
            max_y: b.max_y.max(p.y),
        }))
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Widen an axis whose span is (near) zero so a single point or a flat
    /// line still gets a finite scale.
    ///
    /// The step is one unit, or a millionth of the coordinate magnitude once
    /// that is larger, so widening still moves values like `1e20`.
    #[must_use]
    pub fn widen_degenerate(mut self) -> Self {
        (self.min_x, self.max_x) = widen_span(self.min_x, self.max_x);
        (self.min_y, self.max_y) = widen_span(self.min_y, self.max_y);
        self
    }

    /// Both spans finite and strictly positive.
    pub fn is_usable(&self) -> bool {
        let ok = |span: f64| span.is_finite() && span > 0.0;
        ok(self.width()) && ok(self.height())
    }

    pub fn contains_x(&self, x: f64) -> bool {
        self.min_x <= x && x <= self.max_x
    }

    pub fn contains_y(&self, y: f64) -> bool {
        self.min_y <= y && y <= self.max_y
    }
}

const WIDEN_RELATIVE: f64 = 1e-6;

fn widen_span(min: f64, max: f64) -> (f64, f64) {
    let magnitude = min.abs().max(max.abs()).max(1.0);
    if (max - min).abs() >= f64::EPSILON * magnitude {
        return (min, max);
    }
    let step = (magnitude * WIDEN_RELATIVE).max(1.0);
    (min - step, max + step)
}

/// Uniform-scale transform fitted to a canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    bounds: ViewBounds,
    scale: f64,
}

impl Transform {
    /// Fit `data` into `canvas` without distortion.
    ///
    /// The smaller of the two axis scales wins; the other axis is padded
    /// symmetrically so the content is centered and fills the canvas.
    ///
    /// Returns [`RenderError::DegenerateRange`] when the data span cannot be
    /// mapped with a finite, non-zero scale (e.g. it overflows `f64`).
    pub fn fit(data: ViewBounds, canvas: Canvas) -> Result<Self, RenderError> {
        let canvas = canvas.validate()?;
        let mut b = data.widen_degenerate();
        if !b.is_usable() {
            return Err(RenderError::DegenerateRange);
        }

        let scale_x = canvas.width / b.width();
        let scale_y = canvas.height / b.height();
        let scale = scale_x.min(scale_y);
        if !(scale.is_finite() && scale > 0.0) {
            return Err(RenderError::DegenerateRange);
        }

        if scale == scale_x {
            let pad = (canvas.height / scale - b.height()) / 2.0;
            b.max_y += pad;
            b.min_y -= pad;
        }
        if scale == scale_y {
            let pad = (canvas.width / scale - b.width()) / 2.0;
            b.max_x += pad;
            b.min_x -= pad;
        }
        if !b.is_usable() {
            return Err(RenderError::DegenerateRange);
        }

        Ok(Self { bounds: b, scale })
    }

    /// Padded world bounds covering the whole canvas.
    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    /// Pixels per world unit.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn to_pixel(&self, x: f64, y: f64) -> Pixel {
        Pixel::new(
            (x - self.bounds.min_x) * self.scale,
            (self.bounds.max_y - y) * self.scale,
        )
    }

    pub fn point_to_pixel(&self, p: &Point) -> Pixel {
        self.to_pixel(p.x, p.y)
    }

    pub fn to_world(&self, px: Pixel) -> Point {
        Point::new(
            self.bounds.min_x + px.x / self.scale,
            self.bounds.max_y - px.y / self.scale,
        )
    }
}
