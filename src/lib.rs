//! binplot
//!
//! A small Rust library for loading binary (x, y) point files and rendering them
//! as annotated line charts. Pairs with the `binplot` CLI and the `binplot-gui`
//! desktop viewer.
//!
//! ### Features
//! - Read headerless big-endian `f64` pair files into an ordered series
//! - Fit the series to a canvas with a uniform, centered world-to-pixel transform
//! - Emit a backend-agnostic scene: axes with arrowheads and labels, a dashed
//!   polyline, parity-colored markers and decorative grid lines
//! - Export the scene to SVG/PNG through plotters
//! - Quick summary statistics (bounds, mean, marker classes)
//!
//! ### Example
//! ```no_run
//! use binplot::{storage, viz, Canvas, ViewState};
//!
//! let series = storage::load("points.bin")?;
//! let scene = viz::render(&series, Canvas::new(700.0, 500.0), &ViewState::default())?;
//! viz::export::export_scene(&scene, "points.svg")?;
//! let summary = binplot::stats::summarize(&series);
//! println!("{:#?}", summary);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod models;
pub mod stats;
pub mod storage;
pub mod viewer;
pub mod viz;
pub mod viz_plotters_adapter;
pub mod viz_style;

pub use error::{LoadError, RenderError};
pub use models::{Point, PointSeries};
pub use viewer::{LoadOutcome, Viewer};
pub use viz::types::{Canvas, Layer, ViewState};
