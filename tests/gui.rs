/*!
 * Tests for the viewer state behind the desktop application
 *
 * These tests verify the GUI's load and toggle rules without requiring a display.
 */

use binplot::models::Point;
use binplot::viz::Layer;
use binplot::{Canvas, LoadError, LoadOutcome, Viewer, storage};
use std::fs;
use tempfile::TempDir;

fn write_points(dir: &TempDir, name: &str, pts: &[(f64, f64)]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let pts: Vec<Point> = pts.iter().copied().map(Point::from).collect();
    storage::save(&pts, &path).unwrap();
    path
}

#[test]
fn fresh_viewer_has_nothing_to_show() {
    let viewer = Viewer::new();
    assert!(!viewer.is_loaded());
    assert!(!viewer.toggles_enabled());
    assert!(!viewer.grid_toggle_enabled());
    assert!(viewer.render(Canvas::new(100.0, 100.0)).unwrap().is_none());
}

#[test]
fn successful_load_replaces_series() {
    let dir = TempDir::new().unwrap();
    let first = write_points(&dir, "a.bin", &[(0.0, 0.0), (1.0, 1.0)]);
    let second = write_points(&dir, "b.bin", &[(0.0, 5.0), (1.0, 6.0), (2.0, 7.0)]);

    let mut viewer = Viewer::new();
    assert_eq!(viewer.open(&first).unwrap(), LoadOutcome::Loaded { points: 2 });
    assert!(viewer.toggles_enabled());
    assert_eq!(viewer.open(&second).unwrap(), LoadOutcome::Loaded { points: 3 });
    assert_eq!(viewer.series().unwrap().len(), 3);
    assert_eq!(viewer.source(), Some(second.as_path()));
}

#[test]
fn missing_file_keeps_previous_series() {
    let dir = TempDir::new().unwrap();
    let good = write_points(&dir, "good.bin", &[(0.0, 0.0), (1.0, 2.0)]);
    let mut viewer = Viewer::new();
    viewer.open(&good).unwrap();
    let before = viewer.series().cloned();

    let err = viewer.open(dir.path().join("nope.bin")).unwrap_err();
    assert!(matches!(err, LoadError::FileNotFound { .. }));
    assert!(!err.user_message().is_empty());
    assert_eq!(viewer.series().cloned(), before);
    assert_eq!(viewer.source(), Some(good.as_path()));
}

#[test]
fn empty_file_keeps_previous_series() {
    let dir = TempDir::new().unwrap();
    let good = write_points(&dir, "good.bin", &[(0.0, 0.0), (1.0, 2.0)]);
    let empty = dir.path().join("empty.bin");
    fs::write(&empty, [7u8; 10]).unwrap();

    let mut viewer = Viewer::new();
    viewer.open(&good).unwrap();
    assert_eq!(viewer.open(&empty).unwrap(), LoadOutcome::Empty);
    assert_eq!(viewer.series().unwrap().len(), 2);

    // An empty first load does not count as loaded either.
    let mut fresh = Viewer::new();
    assert_eq!(fresh.open(&empty).unwrap(), LoadOutcome::Empty);
    assert!(!fresh.toggles_enabled());
}

#[test]
fn grid_toggle_follows_axis_toggle() {
    let dir = TempDir::new().unwrap();
    let path = write_points(&dir, "p.bin", &[(-1.0, -1.0), (1.0, 3.0)]);
    let mut viewer = Viewer::new();
    viewer.open(&path).unwrap();
    let canvas = Canvas::new(300.0, 200.0);

    let grid_lines = |v: &Viewer| {
        v.render(canvas)
            .unwrap()
            .unwrap()
            .layer(Layer::Grid)
            .count()
    };
    assert_eq!(grid_lines(&viewer), 3);

    viewer.set_view(viewer.view().with_axis(false));
    assert!(!viewer.grid_toggle_enabled());
    assert!(viewer.view().show_grid(), "grid flag itself is untouched");
    assert_eq!(grid_lines(&viewer), 0);

    viewer.set_view(viewer.view().with_axis(true));
    assert!(viewer.grid_toggle_enabled());
    assert_eq!(grid_lines(&viewer), 3);
}

#[test]
fn render_refits_to_canvas_size() {
    let dir = TempDir::new().unwrap();
    let path = write_points(&dir, "p.bin", &[(0.0, 0.0), (4.0, 4.0)]);
    let mut viewer = Viewer::new();
    viewer.open(&path).unwrap();

    let small = viewer.render(Canvas::new(100.0, 100.0)).unwrap().unwrap();
    let large = viewer.render(Canvas::new(400.0, 400.0)).unwrap().unwrap();
    assert_eq!(small.canvas(), Canvas::new(100.0, 100.0));
    assert_eq!(large.canvas(), Canvas::new(400.0, 400.0));
    assert_ne!(small, large);
}

#[test]
fn unplottable_file_keeps_previous_series() {
    let dir = TempDir::new().unwrap();
    let good = write_points(&dir, "good.bin", &[(0.0, 0.0), (1.0, 2.0)]);
    let nan = write_points(
        &dir,
        "nan.bin",
        &[(f64::NAN, 1.0), (2.0, f64::INFINITY), (f64::NAN, f64::NAN)],
    );
    let overflow = write_points(&dir, "overflow.bin", &[(-1e308, 0.0), (1e308, 1.0)]);

    let mut viewer = Viewer::new();
    viewer.open(&good).unwrap();
    assert_eq!(viewer.open(&nan).unwrap(), LoadOutcome::Empty);
    assert_eq!(viewer.open(&overflow).unwrap(), LoadOutcome::Empty);
    assert_eq!(viewer.source(), Some(good.as_path()));
    assert!(viewer.render(Canvas::new(200.0, 200.0)).unwrap().is_some());

    let mut fresh = Viewer::new();
    assert_eq!(fresh.open(&nan).unwrap(), LoadOutcome::Empty);
    assert!(!fresh.is_loaded());
}
