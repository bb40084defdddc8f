//! Viewer state shared by the desktop frontend: the current series and the
//! current display options.
//!
//! A failed or empty load never clears a chart that is already on screen.

use crate::error::{LoadError, RenderError};
use crate::models::PointSeries;
use crate::storage;
use crate::viz::{self, Canvas, Scene, ViewBounds, ViewState};
use log::info;
use std::path::{Path, PathBuf};

/// What a successful `open` did to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The series was replaced.
    Loaded { points: usize },
    /// The file held no complete record, or no finite points spanning a
    /// representable range; the previous series stays.
    Empty,
}

#[derive(Debug, Clone, Default)]
pub struct Viewer {
    series: Option<PointSeries>,
    source: Option<PathBuf>,
    view: ViewState,
}

impl Viewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load `path` and, if it holds data, make it the displayed series.
    pub fn open<P: AsRef<Path>>(&mut self, path: P) -> Result<LoadOutcome, LoadError> {
        let path = path.as_ref();
        let series = storage::load(path)?;
        Ok(self.show(series, Some(path.to_path_buf())))
    }

    /// Display an already-loaded series. Series without a single plottable
    /// point are ignored.
    pub fn show(&mut self, series: PointSeries, source: Option<PathBuf>) -> LoadOutcome {
        if series.is_empty() {
            info!("no points loaded; keeping the current chart");
            return LoadOutcome::Empty;
        }
        let plottable = ViewBounds::from_points(&series)
            .is_some_and(|b| b.widen_degenerate().is_usable());
        if !plottable {
            info!(
                "{} points but no plottable range; keeping the current chart",
                series.len()
            );
            return LoadOutcome::Empty;
        }
        let points = series.len();
        self.series = Some(series);
        self.source = source;
        LoadOutcome::Loaded { points }
    }

    /// True once any non-empty series has been displayed.
    pub fn is_loaded(&self) -> bool {
        self.series.is_some()
    }

    pub fn series(&self) -> Option<&PointSeries> {
        self.series.as_ref()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    pub fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    /// Display toggles only make sense once there is something to display.
    pub fn toggles_enabled(&self) -> bool {
        self.is_loaded()
    }

    /// The grid toggle additionally follows the axis toggle.
    pub fn grid_toggle_enabled(&self) -> bool {
        self.is_loaded() && self.view.show_axis()
    }

    /// Render the current series, or `None` when nothing is loaded.
    pub fn render(&self, canvas: Canvas) -> Result<Option<Scene>, RenderError> {
        match &self.series {
            Some(series) => viz::render(series, canvas, &self.view).map(Some),
            None => Ok(None),
        }
    }
}
