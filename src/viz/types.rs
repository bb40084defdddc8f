//! Public types for the visualization module.

use crate::error::RenderError;

/// Display options for one render pass.
///
/// Values are immutable; toggling an option builds a new `ViewState` and the
/// next render pass picks it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    show_axis: bool,
    show_grid: bool,
    show_markers: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            show_axis: true,
            show_grid: true,
            show_markers: true,
        }
    }
}

impl ViewState {
    pub const fn new(show_axis: bool, show_grid: bool, show_markers: bool) -> Self {
        Self {
            show_axis,
            show_grid,
            show_markers,
        }
    }

    #[must_use]
    pub const fn with_axis(self, show_axis: bool) -> Self {
        Self { show_axis, ..self }
    }

    #[must_use]
    pub const fn with_grid(self, show_grid: bool) -> Self {
        Self { show_grid, ..self }
    }

    #[must_use]
    pub const fn with_markers(self, show_markers: bool) -> Self {
        Self {
            show_markers,
            ..self
        }
    }

    pub const fn show_axis(&self) -> bool {
        self.show_axis
    }

    /// The grid toggle as the user left it; see [`ViewState::grid_visible`].
    pub const fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub const fn show_markers(&self) -> bool {
        self.show_markers
    }

    /// Grid lines are only drawn together with the axes.
    pub const fn grid_visible(&self) -> bool {
        self.show_axis && self.show_grid
    }
}

/// Target drawing surface size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> Result<Self, RenderError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) {
            Ok(self)
        } else {
            Err(RenderError::InvalidCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Which part of the chart a scene item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Axis lines, arrowheads and the x / y / o labels.
    Axis,
    /// The polyline through all points.
    Graph,
    /// Per-point chevrons.
    Marker,
    /// Decorative horizontal reference lines.
    Grid,
}

/// Marker color class of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerClass {
    /// Truncated |y| is even.
    Even,
    /// Truncated |y| is odd.
    Odd,
}

impl MarkerClass {
    /// Classify by the integer part of `y` (truncated toward zero).
    ///
    /// Parity is taken on the float itself, so it stays exact for every
    /// finite `y` instead of saturating at an integer type's bounds. NaN and
    /// infinities are `Even`.
    pub fn of(y: f64) -> Self {
        if (y.trunc() % 2.0).abs() == 1.0 {
            MarkerClass::Odd
        } else {
            MarkerClass::Even
        }
    }
}
