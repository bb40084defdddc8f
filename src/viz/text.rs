//! Text measurement heuristics for label placement.
//!
//! Scenes are built without a font engine, so label offsets use estimates.

/// Heuristic: estimate pixel width of text.
pub fn estimate_text_width_px(text: &str, font_px: f64) -> f64 {
    ((text.chars().count() as f64) * font_px * 0.60).ceil()
}

/// Heuristic: distance from baseline to the top of lowercase-with-ascender glyphs.
pub fn estimate_ascent_px(font_px: f64) -> f64 {
    (font_px * 0.75).round()
}
