use crate::models::PointSeries;
use crate::viz::MarkerClass;
use crate::viz::ViewBounds;
use serde::{Deserialize, Serialize};

/// Summary statistics for a loaded series (finite points only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// Points dropped from the statistics because a coordinate is NaN or infinite.
    pub non_finite: usize,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub mean_y: f64,
    pub x_sorted: bool,
    pub even_markers: usize,
    pub odd_markers: usize,
}

/// Compute the summary; `None` when the series has no finite point.
pub fn summarize(series: &PointSeries) -> Option<Summary> {
    let bounds = ViewBounds::from_points(series)?;
    let mut count = 0usize;
    let mut sum_y = 0.0;
    let mut even = 0usize;
    for p in series.finite_points() {
        count += 1;
        sum_y += p.y;
        if MarkerClass::of(p.y) == MarkerClass::Even {
            even += 1;
        }
    }
    Some(Summary {
        count,
        non_finite: series.len() - count,
        min_x: bounds.min_x,
        max_x: bounds.max_x,
        min_y: bounds.min_y,
        max_y: bounds.max_y,
        mean_y: sum_y / count as f64,
        x_sorted: series.is_x_sorted(),
        even_markers: even,
        odd_markers: count - even,
    })
}
