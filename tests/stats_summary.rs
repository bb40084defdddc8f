use binplot::models::{Point, PointSeries};
use binplot::stats::summarize;

fn series(pairs: &[(f64, f64)]) -> PointSeries {
    pairs.iter().copied().map(Point::from).collect()
}

#[test]
fn summary_bounds_mean_and_marker_classes() {
    // y = [0, 1, 4, -3] -> mean 0.5; even: 0, 4; odd: 1, -3
    let s = series(&[(0.0, 0.0), (1.0, 1.0), (2.0, 4.0), (3.0, -3.0)]);
    let sum = summarize(&s).expect("summary");
    assert_eq!(sum.count, 4);
    assert_eq!(sum.non_finite, 0);
    assert_eq!((sum.min_x, sum.max_x), (0.0, 3.0));
    assert_eq!((sum.min_y, sum.max_y), (-3.0, 4.0));
    assert!((sum.mean_y - 0.5).abs() < 1e-12);
    assert!(sum.x_sorted);
    assert_eq!(sum.even_markers, 2);
    assert_eq!(sum.odd_markers, 2);
}

#[test]
fn summary_skips_non_finite_and_flags_unsorted() {
    let s = series(&[(5.0, 2.0), (f64::NAN, 1.0), (1.0, 2.0)]);
    let sum = summarize(&s).unwrap();
    assert_eq!(sum.count, 2);
    assert_eq!(sum.non_finite, 1);
    assert_eq!((sum.min_x, sum.max_x), (1.0, 5.0));
    assert!(!sum.x_sorted);
}

#[test]
fn empty_or_all_nan_has_no_summary() {
    assert!(summarize(&PointSeries::default()).is_none());
    assert!(summarize(&series(&[(f64::NAN, f64::NAN)])).is_none());
}

#[test]
fn summary_serializes_to_json() {
    let sum = summarize(&series(&[(0.0, 1.0), (1.0, 2.0)])).unwrap();
    let v = serde_json::to_value(&sum).unwrap();
    assert_eq!(v["count"], 2);
    assert_eq!(v["odd_markers"], 1);
    assert_eq!(v["even_markers"], 1);
}
