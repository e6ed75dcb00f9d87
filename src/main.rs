use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use detfilter::{sorted_boxes, DetResFilter, FilterConfig, ImageShape, Quad};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "detfilter")]
#[command(version, about = "Order, filter and expand text detection boxes", long_about = None)]
struct Cli {
    /// Detection JSON: {"image_shape": [h, w, c], "boxes": [[[x, y], ...], ...]}.
    /// Use "-" to read from stdin.
    input: PathBuf,

    /// JSON filter config; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sort surviving boxes into reading order
    #[arg(long)]
    sort: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum OutputFormat {
    /// JSON object with a "boxes" array
    Json,
    /// One box per line: x1,y1,x2,y2,x3,y3,x4,y4
    Tsv,
}

#[derive(Deserialize)]
struct Detections {
    image_shape: Vec<usize>,
    boxes: Vec<Vec<[f32; 2]>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => FilterConfig::default(),
    };
    tracing::debug!(?cfg, "filter config");

    let raw = if cli.input.as_os_str() == "-" {
        let mut s = String::new();
        std::io::stdin().read_to_string(&mut s)?;
        s
    } else {
        std::fs::read_to_string(&cli.input)?
    };
    let dets: Detections = serde_json::from_str(&raw)?;

    let shape = ImageShape::from_hwc(&dets.image_shape)?;
    let filter = DetResFilter::new(cfg);
    let mut boxes: Vec<Quad> = filter.filter_points(&dets.boxes, shape)?;
    if cli.sort {
        sorted_boxes(&mut boxes);
    }
    tracing::info!(
        input = dets.boxes.len(),
        kept = boxes.len(),
        "done"
    );

    match cli.format {
        OutputFormat::Json => {
            let json_output = serde_json::json!({ "boxes": boxes });
            println!("{}", serde_json::to_string_pretty(&json_output)?);
        }
        OutputFormat::Tsv => {
            for b in &boxes {
                println!(
                    "{:.1},{:.1},{:.1},{:.1},{:.1},{:.1},{:.1},{:.1}",
                    b[0].x, b[0].y, b[1].x, b[1].y, b[2].x, b[2].y, b[3].x, b[3].y,
                );
            }
        }
    }

    Ok(())
}
