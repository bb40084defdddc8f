//! Backend-agnostic scene: the draw commands produced by one render pass.

use super::types::{Canvas, Layer};
use crate::viz_style::{Rgb8, StrokeStyle};

/// Canvas-space position, origin top-left, y down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    pub x: f64,
    pub y: f64,
}

impl Pixel {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn shift(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Which corner of the text box sits on the anchor pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    LeftTop,
    LeftBottom,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        from: Pixel,
        to: Pixel,
        stroke: StrokeStyle,
    },
    /// Open path through `points`; dashing comes from the stroke.
    Polyline {
        points: Vec<Pixel>,
        stroke: StrokeStyle,
    },
    /// Closed path, optionally filled.
    Polygon {
        points: Vec<Pixel>,
        stroke: StrokeStyle,
        fill: Option<Rgb8>,
    },
    Text {
        text: String,
        at: Pixel,
        anchor: TextAnchor,
        font_px: f64,
        color: Rgb8,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneItem {
    pub layer: Layer,
    pub command: DrawCommand,
}

/// Ordered draw commands for one canvas. Backends replay them front to back.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    canvas: Canvas,
    items: Vec<SceneItem>,
}

impl Scene {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            items: Vec::new(),
        }
    }

    pub fn push(&mut self, layer: Layer, command: DrawCommand) {
        self.items.push(SceneItem { layer, command });
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Commands of one layer, in draw order.
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.items
            .iter()
            .filter(move |i| i.layer == layer)
            .map(|i| &i.command)
    }

    /// Text of every label in draw order.
    pub fn labels(&self) -> Vec<&str> {
        self.items
            .iter()
            .filter_map(|i| match &i.command {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}
