use anyhow::{Context, Result};
use binplot::viz::export;
use binplot::{Canvas, ViewState, stats, storage};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "binplot",
    version,
    about = "Render & summarize binary (x, y) point files"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a point file to a chart image (.svg or .png).
    Render(RenderArgs),
    /// Print summary statistics of a point file.
    Stats(StatsArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Point file: big-endian f64 pairs (x, y), no header.
    file: PathBuf,
    /// Output chart path (.svg or .png).
    #[arg(short, long)]
    out: PathBuf,
    /// Width of the chart (default 700).
    #[arg(long, default_value_t = 700)]
    width: u32,
    /// Height of the chart (default 500).
    #[arg(long, default_value_t = 500)]
    height: u32,
    /// Hide the axes (also hides the grid).
    #[arg(long, default_value_t = false)]
    no_axis: bool,
    /// Hide the grid lines.
    #[arg(long, default_value_t = false)]
    no_grid: bool,
    /// Hide the point markers.
    #[arg(long, default_value_t = false)]
    no_markers: bool,
    /// TrueType font for axis labels in PNG output.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct StatsArgs {
    /// Point file: big-endian f64 pairs (x, y), no header.
    file: PathBuf,
    /// Print the summary as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn fmt_num(x: f64) -> String {
    if x.is_finite() {
        // Format up to 4 decimals, then trim trailing zeros and trailing dot.
        let s = format!("{:.4}", x);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        "NA".to_string()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Stats(args) => cmd_stats(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    if let Some(font) = args.font.as_ref() {
        export::register_font_file(font)?;
    }
    let series = storage::load(&args.file)?;
    if series.is_empty() {
        anyhow::bail!("{} holds no complete (x, y) record", args.file.display());
    }
    let view = ViewState::new(!args.no_axis, !args.no_grid, !args.no_markers);
    let canvas = Canvas::new(args.width as f64, args.height as f64);
    export::plot_file(&series, &args.out, canvas, &view)
        .with_context(|| format!("rendering {}", args.file.display()))?;
    eprintln!(
        "Wrote chart of {} points to {}",
        series.len(),
        args.out.display()
    );
    Ok(())
}

fn cmd_stats(args: StatsArgs) -> Result<()> {
    let series = storage::load(&args.file)?;
    let Some(s) = stats::summarize(&series) else {
        anyhow::bail!("{} holds no finite points", args.file.display());
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&s)?);
        return Ok(());
    }
    println!(
        "points={} non_finite={}  x=[{}, {}]  y=[{}, {}]  mean_y={}  x_sorted={}  even={} odd={}",
        s.count,
        s.non_finite,
        fmt_num(s.min_x),
        fmt_num(s.max_x),
        fmt_num(s.min_y),
        fmt_num(s.max_y),
        fmt_num(s.mean_y),
        s.x_sorted,
        s.even_markers,
        s.odd_markers
    );
    Ok(())
}
