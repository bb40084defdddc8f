//! Chart rendering: fit a point series to a canvas and emit a [`Scene`].
//!
//! Draw order per pass:
//! 1. axes with arrowheads and `x` / `y` / `o` labels (if enabled)
//! 2. the dashed polyline through every point (always)
//! 3. parity-colored chevron markers (if enabled)
//! 4. three decorative horizontal grid lines (if enabled together with the axes)
//!
//! Scenes are plain data; `export` replays them through plotters and the
//! desktop viewer paints them with egui.

pub mod dash;
pub mod export;
pub mod scene;
pub mod text;
pub mod transform;
pub mod types;

pub use scene::{DrawCommand, Pixel, Scene, SceneItem, TextAnchor};
pub use transform::{Transform, ViewBounds};
pub use types::{Canvas, Layer, MarkerClass, ViewState};

pub use crate::viz_style as style;

use crate::error::RenderError;
use crate::models::PointSeries;
use crate::viz_style::{ChartStyle, StrokeStyle};
use log::trace;
use text::{estimate_ascent_px, estimate_text_width_px};

/// Fractions of the visible y range where grid lines sit, in draw order.
pub const GRID_FRACTIONS: [f64; 3] = [0.5, 0.9, 0.1];

/// Arrowhead length along the axis, in pixels.
const ARROW_LENGTH: f64 = 20.0;
/// Arrowhead half-width across the axis, in pixels.
const ARROW_HALF_WIDTH: f64 = 5.0;
/// Gap between an axis feature and its label, in pixels.
const LABEL_GAP: f64 = 10.0;

/// Render with the default style.
pub fn render(
    series: &PointSeries,
    canvas: Canvas,
    view: &ViewState,
) -> Result<Scene, RenderError> {
    render_with_style(series, canvas, view, &ChartStyle::default())
}

/// Fully-configurable entry point.
///
/// An empty series yields an empty scene. Bounds and transform are recomputed
/// from scratch on every call.
pub fn render_with_style(
    series: &PointSeries,
    canvas: Canvas,
    view: &ViewState,
    style: &ChartStyle,
) -> Result<Scene, RenderError> {
    let canvas = canvas.validate()?;
    let mut scene = Scene::new(canvas);
    if series.is_empty() {
        return Ok(scene);
    }

    let data = ViewBounds::from_points(series).ok_or(RenderError::NoFinitePoints)?;
    let t = Transform::fit(data, canvas)?;
    trace!(
        "render pass: {} points, scale {:.4}, bounds {:?}",
        series.len(),
        t.scale(),
        t.bounds()
    );

    if view.show_axis() {
        draw_axes(&mut scene, &t, style);
    }
    draw_graph(&mut scene, &t, series, style);
    if view.show_markers() {
        draw_markers(&mut scene, &t, series, style);
    }
    if view.grid_visible() {
        draw_grid(&mut scene, &t, style);
    }
    Ok(scene)
}

fn draw_axes(scene: &mut Scene, t: &Transform, style: &ChartStyle) {
    let b = t.bounds();
    let font_px = style.label_font_px;
    let label = |text: &str, at: Pixel, anchor: TextAnchor| DrawCommand::Text {
        text: text.to_string(),
        at,
        anchor,
        font_px,
        color: style.label_color,
    };

    if b.contains_x(0.0) {
        let top = t.to_pixel(0.0, b.max_y);
        scene.push(
            Layer::Axis,
            DrawCommand::Line {
                from: top,
                to: t.to_pixel(0.0, b.min_y),
                stroke: style.axis.clone(),
            },
        );
        scene.push(
            Layer::Axis,
            arrowhead(
                [
                    top,
                    top.shift(ARROW_HALF_WIDTH, ARROW_LENGTH),
                    top.shift(-ARROW_HALF_WIDTH, ARROW_LENGTH),
                ],
                &style.axis,
            ),
        );
        scene.push(
            Layer::Axis,
            label("y", top.shift(LABEL_GAP, 0.0), TextAnchor::LeftTop),
        );
    }

    let origin = t.to_pixel(0.0, 0.0);
    scene.push(
        Layer::Axis,
        label("o", origin.shift(LABEL_GAP, 0.0), TextAnchor::LeftTop),
    );

    if b.contains_y(0.0) {
        let right = t.to_pixel(b.max_x, 0.0);
        scene.push(
            Layer::Axis,
            DrawCommand::Line {
                from: t.to_pixel(b.min_x, 0.0),
                to: right,
                stroke: style.axis.clone(),
            },
        );
        scene.push(
            Layer::Axis,
            arrowhead(
                [
                    right,
                    right.shift(-ARROW_LENGTH, -ARROW_HALF_WIDTH),
                    right.shift(-ARROW_LENGTH, ARROW_HALF_WIDTH),
                ],
                &style.axis,
            ),
        );
        let w = estimate_text_width_px("x", font_px);
        scene.push(
            Layer::Axis,
            label(
                "x",
                right.shift(-w - LABEL_GAP, -estimate_ascent_px(font_px)),
                TextAnchor::LeftBottom,
            ),
        );
    }
}

fn arrowhead(corners: [Pixel; 3], stroke: &StrokeStyle) -> DrawCommand {
    DrawCommand::Polygon {
        points: corners.to_vec(),
        stroke: stroke.clone(),
        fill: Some(stroke.color),
    }
}

fn draw_graph(scene: &mut Scene, t: &Transform, series: &PointSeries, style: &ChartStyle) {
    let points: Vec<Pixel> = series
        .finite_points()
        .map(|p| t.point_to_pixel(p))
        .collect();
    if points.len() < 2 {
        return;
    }
    scene.push(
        Layer::Graph,
        DrawCommand::Polyline {
            points,
            stroke: style.graph.clone(),
        },
    );
}

fn draw_markers(scene: &mut Scene, t: &Transform, series: &PointSeries, style: &ChartStyle) {
    let hw = style.marker_half_width;
    let drop = hw / 2.0;
    for p in series.finite_points() {
        let color = match MarkerClass::of(p.y) {
            MarkerClass::Even => style.even_marker,
            MarkerClass::Odd => style.odd_marker,
        };
        let stroke = StrokeStyle {
            color,
            ..style.marker.clone()
        };
        let c = t.point_to_pixel(p);
        for (from, to) in [
            (c.shift(hw, 0.0), c.shift(-drop, 0.0)),
            (c.shift(hw, 0.0), c.shift(0.0, drop)),
            (c.shift(-hw, 0.0), c.shift(0.0, drop)),
        ] {
            scene.push(
                Layer::Marker,
                DrawCommand::Line {
                    from,
                    to,
                    stroke: stroke.clone(),
                },
            );
        }
    }
}

fn draw_grid(scene: &mut Scene, t: &Transform, style: &ChartStyle) {
    let b = t.bounds();
    // World y = fraction of the padded range itself, not an offset from min_y.
    for frac in GRID_FRACTIONS {
        let y = b.height().abs() * frac;
        scene.push(
            Layer::Grid,
            DrawCommand::Line {
                from: t.to_pixel(b.min_x, y),
                to: t.to_pixel(b.max_x, y),
                stroke: style.grid.clone(),
            },
        );
    }
}
