use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use motion_trail::replay::Replay;
use motion_trail::trajectory::EstimatorConfig;
use motion_trail::utils::FpsMeter;

/// Replays recorded blob centroids through the direction estimator
#[derive(Debug, Parser)]
#[command(name = "trail_replay", version)]
struct Args {
    /// JSON lines with `null` or `{"x": .., "y": .., "radius": ..}` per frame. Stdin if omitted
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// JSON file with estimator config
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override trajectory capacity
    #[arg(short, long)]
    buffer: Option<usize>,
    /// Override movement threshold in pixels
    #[arg(short, long)]
    threshold: Option<i32>,
    /// Print trail segments for every frame
    #[arg(long)]
    segments: bool,
    /// Skip lines that could not be parsed
    #[arg(long)]
    lenient: bool,
}

/// RUST_LOG wins as a whole, `motion_trail=info` only when it is unset or invalid
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("motion_trail=info"))
}

fn init_logging() {
    let filter = log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok());
    fmt().with_env_filter(filter).with_writer(io::stderr).init();
}

fn read_config(path: Option<&Path>) -> Result<EstimatorConfig> {
    let path = match path {
        Some(path) => path,
        None => return Ok(EstimatorConfig::default()),
    };
    let file = File::open(path).with_context(|| format!("can't open config {}", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("can't parse config {}", path.display()))?;
    Ok(config)
}

/// Command line values take precedence over config file
fn apply_overrides(
    mut config: EstimatorConfig,
    buffer: Option<usize>,
    threshold: Option<i32>,
) -> EstimatorConfig {
    if let Some(capacity) = buffer {
        config = config.with_capacity(capacity);
    }
    if let Some(threshold) = threshold {
        config = config.with_threshold(threshold);
    }
    config
}

fn load_config(args: &Args) -> Result<EstimatorConfig> {
    let config = read_config(args.config.as_deref())?;
    Ok(apply_overrides(config, args.buffer, args.threshold))
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    let config = load_config(&args)?;
    let mut replay = Replay::new(config)?.lenient(args.lenient);

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("can't open input {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut meter = FpsMeter::new();

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("can't read line {}", line_no + 1))?;
        meter.start();
        let report = match replay
            .process_line(&line)
            .with_context(|| format!("line {}", line_no + 1))?
        {
            Some(report) => report,
            None => continue,
        };
        let fps = meter
            .fps()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "frame={} direction={} dx={} dy={} fps={}",
            report.frame, report.direction, report.delta.0, report.delta.1, fps
        )?;
        if args.segments {
            for s in &report.segments {
                writeln!(
                    out,
                    "  segment={} ({},{})-({},{}) thickness={}",
                    s.index, s.start.x, s.start.y, s.end.x, s.end.y, s.thickness
                )?;
            }
        }
    }

    info!(
        frames = replay.frames(),
        skipped = replay.skipped(),
        direction = %replay.estimator().current_direction(),
        "replay finished"
    );
    Ok(())
}
