//! Styling for chart scenes: colors, stroke widths, dash patterns and label size.
//!
//! Design:
//! - Axes: solid black, medium weight, filled arrowheads and large labels.
//! - Graph: one thick dashed blue path through all points.
//! - Markers: thin chevrons, red for points whose truncated y is even, blue otherwise.
//! - Grid: hairline black, decorative only.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);
    pub const RED: Rgb8 = Rgb8::new(255, 0, 0);
    pub const BLUE: Rgb8 = Rgb8::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Alternating on/off lengths in pixels, starting with "on".
///
/// An odd-length pattern repeats with on/off swapped on the second pass, the
/// same convention SVG `stroke-dasharray` uses.
#[derive(Clone, Debug, PartialEq)]
pub struct DashPattern {
    lengths: Vec<f64>,
}

impl DashPattern {
    /// Returns `None` when the pattern cannot advance (empty, or no positive length).
    pub fn new(lengths: Vec<f64>) -> Option<Self> {
        let usable = lengths.iter().all(|l| l.is_finite() && *l >= 0.0)
            && lengths.iter().any(|l| *l > 0.0);
        usable.then_some(Self { lengths })
    }

    /// The pattern normalized to an even number of entries.
    pub fn cycle(&self) -> Vec<f64> {
        if self.lengths.len() % 2 == 1 {
            self.lengths.iter().chain(self.lengths.iter()).copied().collect()
        } else {
            self.lengths.clone()
        }
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub color: Rgb8,
    pub dash: Option<DashPattern>,
}

impl StrokeStyle {
    pub fn solid(width: f64, color: Rgb8) -> Self {
        Self {
            width,
            color,
            dash: None,
        }
    }
}

/// Every visual constant used by a render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    pub axis: StrokeStyle,
    pub graph: StrokeStyle,
    pub marker: StrokeStyle,
    pub grid: StrokeStyle,
    pub label_color: Rgb8,
    pub label_font_px: f64,
    pub even_marker: Rgb8,
    pub odd_marker: Rgb8,
    /// Half-width of the marker chevron in pixels.
    pub marker_half_width: f64,
    pub background: Rgb8,
}

impl Default for ChartStyle {
    fn default() -> Self {
        let graph_dash = vec![
            10.0, 10.0, 10.0, 10.0, 10.0, 10.0, 30.0, 10.0, 20.0, 10.0, 20.0,
        ];
        Self {
            axis: StrokeStyle::solid(2.0, Rgb8::BLACK),
            graph: StrokeStyle {
                width: 3.0,
                color: Rgb8::BLUE,
                dash: DashPattern::new(graph_dash),
            },
            marker: StrokeStyle::solid(1.0, Rgb8::BLACK),
            grid: StrokeStyle::solid(0.5, Rgb8::BLACK),
            label_color: Rgb8::BLACK,
            label_font_px: 36.0,
            even_marker: Rgb8::RED,
            odd_marker: Rgb8::BLUE,
            marker_half_width: 8.0,
            background: Rgb8::WHITE,
        }
    }
}
