/*!
 * Desktop viewer for binplot - binary (x, y) point charts
 *
 * A cross-platform window providing:
 * - File > Open to pick a point file
 * - Chart > toggles for axes, grid and markers
 * - A chart that refits itself to the window on every repaint
 *
 * Platform support: Windows, macOS, Linux
 */

use binplot::viz::dash::split_dashes;
use binplot::viz::style::{Rgb8, StrokeStyle};
use binplot::viz::{DrawCommand, Pixel, Scene, TextAnchor};
use binplot::{Canvas, LoadOutcome, Viewer};
use eframe::egui;
use log::{debug, warn};
use std::path::PathBuf;

fn main() -> Result<(), eframe::Error> {
    // Enable logging for better debugging
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([700.0, 500.0])
            .with_min_inner_size([200.0, 150.0])
            .with_title("Point file charts - binplot"),
        ..Default::default()
    };

    eframe::run_native(
        "binplot",
        options,
        Box::new(|_cc| Ok(Box::new(PlotApp::new()))),
    )
}

/// Main application state
struct PlotApp {
    viewer: Viewer,
    // Directory the file picker opens in; follows the last picked file.
    last_dir: PathBuf,
    status_message: String,
}

impl PlotApp {
    fn new() -> Self {
        Self {
            viewer: Viewer::new(),
            last_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            status_message: String::new(),
        }
    }

    fn open_file(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_directory(&self.last_dir)
            .pick_file()
        else {
            return;
        };
        if let Some(dir) = path.parent() {
            self.last_dir = dir.to_path_buf();
        }

        match self.viewer.open(&path) {
            Ok(LoadOutcome::Loaded { points }) => {
                self.status_message = format!("{} points from {}", points, path.display());
            }
            Ok(LoadOutcome::Empty) => {
                self.status_message =
                    format!("{} holds no plottable points; chart unchanged", path.display());
            }
            Err(err) => {
                let cause = std::error::Error::source(&err)
                    .map(|c| c.to_string())
                    .unwrap_or_default();
                warn!("{} ({})", err, cause);
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Warning)
                    .set_title("Data load error")
                    .set_description(format!("{}\n\n{}", err.user_message(), path.display()))
                    .set_buttons(rfd::MessageButtons::Ok)
                    .show();
            }
        }
    }

    fn menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open…").clicked() {
                    ui.close_menu();
                    self.open_file();
                }
            });

            ui.menu_button("Chart", |ui| {
                let view = self.viewer.view();
                let mut axis = view.show_axis();
                let mut grid = view.show_grid();
                let mut markers = view.show_markers();

                let enabled = self.viewer.toggles_enabled();
                ui.add_enabled(enabled, egui::Checkbox::new(&mut axis, "Show axes"));
                ui.add_enabled(
                    self.viewer.grid_toggle_enabled(),
                    egui::Checkbox::new(&mut grid, "Show grid"),
                );
                ui.separator();
                ui.add_enabled(enabled, egui::Checkbox::new(&mut markers, "Show markers"));

                let next = view.with_axis(axis).with_grid(grid).with_markers(markers);
                if next != view {
                    debug!("view changed: {:?}", next);
                    self.viewer.set_view(next);
                }
            });

            if !self.status_message.is_empty() {
                ui.separator();
                ui.label(&self.status_message);
            }
        });
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| self.menu_bar(ui));

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let canvas = Canvas::new(rect.width() as f64, rect.height() as f64);
                match self.viewer.render(canvas) {
                    Ok(Some(scene)) => paint_scene(&painter, rect.min, &scene),
                    Ok(None) => {}
                    Err(err) => debug!("skipping paint: {}", err),
                }
            });
    }
}

fn color32(rgb: Rgb8) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

fn stroke(style: &StrokeStyle) -> egui::Stroke {
    egui::Stroke::new(style.width as f32, color32(style.color))
}

fn pos(origin: egui::Pos2, p: Pixel) -> egui::Pos2 {
    egui::pos2(origin.x + p.x as f32, origin.y + p.y as f32)
}

/// Replay a scene with the egui painter, offset to the panel origin.
fn paint_scene(painter: &egui::Painter, origin: egui::Pos2, scene: &Scene) {
    let to_pos = |points: &[Pixel]| points.iter().map(|p| pos(origin, *p)).collect::<Vec<_>>();

    for item in scene.items() {
        match &item.command {
            DrawCommand::Line { from, to, stroke: s } => {
                painter.line_segment([pos(origin, *from), pos(origin, *to)], stroke(s));
            }
            DrawCommand::Polyline { points, stroke: s } => match &s.dash {
                Some(pattern) => {
                    for dash in split_dashes(points, pattern) {
                        painter.add(egui::Shape::line(to_pos(&dash), stroke(s)));
                    }
                }
                None => {
                    painter.add(egui::Shape::line(to_pos(points), stroke(s)));
                }
            },
            DrawCommand::Polygon {
                points,
                stroke: s,
                fill,
            } => {
                let fill = fill.map(color32).unwrap_or(egui::Color32::TRANSPARENT);
                painter.add(egui::Shape::convex_polygon(to_pos(points), fill, stroke(s)));
            }
            DrawCommand::Text {
                text,
                at,
                anchor,
                font_px,
                color,
            } => {
                let align = match anchor {
                    TextAnchor::LeftTop => egui::Align2::LEFT_TOP,
                    TextAnchor::LeftBottom => egui::Align2::LEFT_BOTTOM,
                };
                painter.text(
                    pos(origin, *at),
                    align,
                    text,
                    egui::FontId::proportional(*font_px as f32),
                    color32(*color),
                );
            }
        }
    }
}
