//! Split a polyline into dash segments for backends without native dashing.

use super::scene::Pixel;
use crate::viz_style::DashPattern;

/// Returns the "on" pieces of `points` under `pattern`, each as its own
/// open path. The pattern phase carries across vertices, so a dash may turn
/// a corner.
pub fn split_dashes(points: &[Pixel], pattern: &DashPattern) -> Vec<Vec<Pixel>> {
    let cycle = pattern.cycle();
    let mut out: Vec<Vec<Pixel>> = Vec::new();
    if points.len() < 2 {
        return out;
    }

    let mut idx = 0usize;
    let mut left = cycle[0];
    let mut current: Vec<Pixel> = vec![points[0]];

    for seg in points.windows(2) {
        let (a, b) = (seg[0], seg[1]);
        let len = (b.x - a.x).hypot(b.y - a.y);
        let mut done = 0.0;
        while len - done > left {
            done += left;
            let t = done / len;
            let p = Pixel::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t);
            if idx % 2 == 0 {
                current.push(p);
                out.push(std::mem::take(&mut current));
            } else {
                current = vec![p];
            }
            idx = (idx + 1) % cycle.len();
            left = cycle[idx];
        }
        left -= len - done;
        if idx % 2 == 0 {
            current.push(b);
        }
    }
    if idx % 2 == 0 && current.len() >= 2 {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Pixel {
        Pixel::new(x, y)
    }

    #[test]
    fn straight_line_splits_evenly() {
        let pattern = DashPattern::new(vec![10.0, 5.0]).unwrap();
        let dashes = split_dashes(&[p(0.0, 0.0), p(40.0, 0.0)], &pattern);
        // on 0..10, off 10..15, on 15..25, off 25..30, on 30..40
        assert_eq!(dashes.len(), 3);
        assert_eq!(dashes[0], vec![p(0.0, 0.0), p(10.0, 0.0)]);
        assert_eq!(dashes[1], vec![p(15.0, 0.0), p(25.0, 0.0)]);
        assert_eq!(dashes[2], vec![p(30.0, 0.0), p(40.0, 0.0)]);
    }

    #[test]
    fn dash_turns_corner() {
        let pattern = DashPattern::new(vec![10.0, 100.0]).unwrap();
        let dashes = split_dashes(&[p(0.0, 0.0), p(6.0, 0.0), p(6.0, 8.0)], &pattern);
        assert_eq!(dashes.len(), 1);
        assert_eq!(dashes[0], vec![p(0.0, 0.0), p(6.0, 0.0), p(6.0, 4.0)]);
    }

    #[test]
    fn too_few_points_yield_nothing() {
        let pattern = DashPattern::new(vec![1.0, 1.0]).unwrap();
        assert!(split_dashes(&[p(1.0, 1.0)], &pattern).is_empty());
        assert!(split_dashes(&[], &pattern).is_empty());
    }
}
