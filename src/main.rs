//! Command-line front end: load a JSON trace, build the chart layout,
//! and write it as JSON for the rendering backend.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use sched_timeline::layout::{ChartLayout, LayoutOptions};
use sched_timeline::loader;
use sched_timeline::models::GroupingAxis;

#[derive(Debug, Parser)]
#[command(name = "sched-timeline", version, about = "Compute timeline chart layout from a schedule-execution trace")]
struct Args {
    /// Path to the source JSON trace file.
    #[arg(short = 's', long)]
    src_file_path: PathBuf,

    /// Directory the layout file is written to.
    #[arg(short = 'd', long, default_value = "./")]
    dest_dir: PathBuf,

    /// Row axis: "core" or "task".
    #[arg(short = 'y', long)]
    y_axis: String,

    /// Highlight jobs that missed their deadline.
    #[arg(long)]
    highlight_deadline_miss: bool,

    /// Emit legend groups.
    #[arg(short = 'l', long)]
    draw_legend: bool,

    /// Log level (error|warn|info|debug|trace).
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("sched-timeline error: {err:?}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref());

    let axis: GroupingAxis = args.y_axis.parse()?;
    let trace = loader::load_trace(&args.src_file_path)?;
    let layout = ChartLayout::build(
        &trace,
        axis,
        LayoutOptions {
            highlight_deadline_miss: args.highlight_deadline_miss,
            draw_legend: args.draw_legend,
        },
    )?;

    let stem = args
        .src_file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("trace");
    let dest = args.dest_dir.join(format!("{stem}.layout.json"));
    let file = File::create(&dest)
        .with_context(|| format!("failed to create {}", dest.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &layout)
        .with_context(|| format!("failed to write {}", dest.display()))?;

    tracing::info!(
        dest = %dest.display(),
        rows = layout.row_labels.len(),
        rects = layout.rects.len(),
        "layout written"
    );
    Ok(())
}

/// Logging level priority: `--log-level` flag, then `SCHED_TIMELINE_LOG`,
/// then `info`. Logs go to stderr so stdout stays clean.
fn init_logging(cli_level: Option<&str>) {
    let level = cli_level
        .and_then(parse_level)
        .or_else(|| {
            std::env::var("SCHED_TIMELINE_LOG")
                .ok()
                .and_then(|s| parse_level(&s))
        })
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_level(s: &str) -> Option<tracing::Level> {
    match s.trim().to_lowercase().as_str() {
        "error" => Some(tracing::Level::ERROR),
        "warn" | "warning" => Some(tracing::Level::WARN),
        "info" => Some(tracing::Level::INFO),
        "debug" => Some(tracing::Level::DEBUG),
        "trace" => Some(tracing::Level::TRACE),
        _ => None,
    }
}
