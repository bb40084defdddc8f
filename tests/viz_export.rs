use binplot::models::{Point, PointSeries};
use binplot::viz::{self, export, Canvas, ViewState};
use std::fs;
use tempfile::tempdir;

fn sample() -> PointSeries {
    (0..20)
        .map(|i| {
            let x = i as f64 * 0.5 - 3.0;
            Point::new(x, x * x - 4.0)
        })
        .collect()
}

#[test]
fn svg_export_writes_chart_with_labels() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.svg");
    export::plot_file(&sample(), &path, Canvas::new(700.0, 500.0), &ViewState::default()).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"), "not an svg document");
    assert!(svg.contains("<text"), "axis labels missing");
}

#[test]
fn png_export_writes_file_without_font() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chart.png");
    let scene = viz::render(&sample(), Canvas::new(320.0, 240.0), &ViewState::default()).unwrap();
    export::export_scene(&scene, &path).unwrap();

    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "png has content");
}

#[test]
fn every_view_combination_exports() {
    let dir = tempdir().unwrap();
    let series = sample();
    for (i, bits) in (0u8..8).enumerate() {
        let view = ViewState::new(bits & 1 != 0, bits & 2 != 0, bits & 4 != 0);
        let path = dir.path().join(format!("view{i}.svg"));
        export::plot_file(&series, &path, Canvas::new(200.0, 150.0), &view).unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }
}

#[test]
fn empty_series_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.svg");
    let e = export::plot_file(
        &PointSeries::default(),
        &path,
        Canvas::new(100.0, 100.0),
        &ViewState::default(),
    );
    assert!(e.is_err());
}

#[test]
fn unreadable_font_is_error() {
    let dir = tempdir().unwrap();
    assert!(export::register_font_file(dir.path().join("missing.ttf")).is_err());
    assert!(export::register_font(b"definitely not a font".to_vec()).is_err());
}
