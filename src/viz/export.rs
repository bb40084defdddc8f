//! Write scenes to **SVG** or **PNG** files through plotters.

use super::dash::split_dashes;
use super::scene::{DrawCommand, Scene, TextAnchor};
use super::types::{Canvas, ViewState};
use crate::models::PointSeries;
use crate::viz_plotters_adapter::{backend_coord, backend_coords, fill_style, rgb_color, stroke_style};
use crate::viz_style::{ChartStyle, Rgb8, StrokeStyle};
use anyhow::{Context, Result, anyhow, bail};
use log::{info, warn};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

const LABEL_FONT: &str = "sans-serif";

/// Set once a font is registered for the pure-Rust glyph path.
static FONT_REGISTERED: AtomicBool = AtomicBool::new(false);

/// Register a TrueType font for label text.
///
/// Required for PNG labels because `ab_glyph` doesn't discover OS fonts. SVG
/// output writes text elements and lets the viewer pick the font.
pub fn register_font(bytes: Vec<u8>) -> Result<()> {
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
    plotters::style::register_font(LABEL_FONT, plotters::style::FontStyle::Normal, bytes)
        .map_err(|_| anyhow!("not a usable TrueType font"))?;
    FONT_REGISTERED.store(true, Ordering::Release);
    Ok(())
}

/// Read a font file and register it.
pub fn register_font_file<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
    register_font(bytes)
}

/// Render `series` and write it to `out_path` (`.svg` or `.png`).
pub fn plot_file<P: AsRef<Path>>(
    series: &PointSeries,
    out_path: P,
    canvas: Canvas,
    view: &ViewState,
) -> Result<()> {
    if series.is_empty() {
        bail!("no data to plot");
    }
    let scene = super::render(series, canvas, view)?;
    export_scene(&scene, out_path)
}

/// Replay a scene onto a plotters backend chosen by file extension.
pub fn export_scene<P: AsRef<Path>>(scene: &Scene, out_path: P) -> Result<()> {
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();
    let size = backend_size(scene.canvas())?;
    let background = ChartStyle::default().background;

    let is_svg = out_path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        let root = SVGBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_scene(&root, scene, background, true)?;
    } else {
        let with_text = FONT_REGISTERED.load(Ordering::Acquire);
        if !with_text && !scene.labels().is_empty() {
            warn!("no font registered; bitmap output will omit axis labels");
        }
        let root = BitMapBackend::new(path_string.as_str(), size).into_drawing_area();
        draw_scene(&root, scene, background, with_text)?;
    }
    info!("wrote chart to {}", out_path.display());
    Ok(())
}

fn backend_size(canvas: Canvas) -> Result<(u32, u32)> {
    let canvas = canvas.validate()?;
    Ok((canvas.width.ceil() as u32, canvas.height.ceil() as u32))
}

/// Helper that draws to any Plotters backend.
fn draw_scene<DB>(
    root: &DrawingArea<DB, Shift>,
    scene: &Scene,
    background: Rgb8,
    with_text: bool,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&rgb_color(background))
        .map_err(|e| anyhow!("{:?}", e))?;

    for item in scene.items() {
        match &item.command {
            DrawCommand::Line { from, to, stroke } => {
                draw_path(root, vec![*from, *to], stroke)?;
            }
            DrawCommand::Polyline { points, stroke } => match &stroke.dash {
                Some(pattern) => {
                    for dash in split_dashes(points, pattern) {
                        draw_path(root, dash, stroke)?;
                    }
                }
                None => draw_path(root, points.clone(), stroke)?,
            },
            DrawCommand::Polygon {
                points,
                stroke,
                fill,
            } => {
                if let Some(fill) = fill {
                    root.draw(&Polygon::new(backend_coords(points), fill_style(*fill)))
                        .map_err(|e| anyhow!("{:?}", e))?;
                }
                let mut outline = points.clone();
                if let Some(first) = points.first() {
                    outline.push(*first);
                }
                draw_path(root, outline, stroke)?;
            }
            DrawCommand::Text {
                text,
                at,
                anchor,
                font_px,
                color,
            } => {
                if !with_text {
                    continue;
                }
                let v_pos = match anchor {
                    TextAnchor::LeftTop => VPos::Top,
                    TextAnchor::LeftBottom => VPos::Bottom,
                };
                let style = (LABEL_FONT, *font_px)
                    .into_font()
                    .color(&rgb_color(*color))
                    .pos(Pos::new(HPos::Left, v_pos));
                root.draw(&Text::new(text.clone(), backend_coord(*at), style))
                    .map_err(|e| anyhow!("{:?}", e))?;
            }
        }
    }

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn draw_path<DB>(
    root: &DrawingArea<DB, Shift>,
    points: Vec<super::Pixel>,
    stroke: &StrokeStyle,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.draw(&PathElement::new(
        backend_coords(&points),
        stroke_style(stroke),
    ))
    .map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
