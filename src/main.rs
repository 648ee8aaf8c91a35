use anyhow::{anyhow, Context, Result};
use clap::Parser;
use iv_vision::{
    BarAnchors, DecodedImageSource, IvScanner, MissingAnchorPolicy, VisionConfig,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Estimate Attack/Defense/Stamina IVs from a capture screenshot
#[derive(Debug, Parser)]
#[command(name = "iv-vision", version, about)]
struct Args {
    /// Screenshot to analyze
    image: PathBuf,

    /// Anchor Y coordinate of the attack bar (from text recognition)
    #[arg(long)]
    attack_y: Option<f64>,

    /// Anchor Y coordinate of the defense bar
    #[arg(long)]
    defense_y: Option<f64>,

    /// Anchor Y coordinate of the stamina bar
    #[arg(long)]
    stamina_y: Option<f64>,

    /// Return no result instead of falling back to the percentage layout
    /// when anchors are missing
    #[arg(long)]
    abort_on_missing_anchors: bool,

    /// Scanner configuration file (JSON); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print per-bar diagnostics alongside the result
    #[arg(long)]
    diagnostics: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => VisionConfig::from_json_file(path).map_err(|e| anyhow!(e))?,
        None => VisionConfig::default(),
    };
    if args.abort_on_missing_anchors {
        config.on_missing_anchors = MissingAnchorPolicy::Abort;
    }

    let source = DecodedImageSource::open(&args.image)
        .with_context(|| format!("failed to load {}", args.image.display()))?;

    let anchors = BarAnchors {
        attack: args.attack_y,
        defense: args.defense_y,
        stamina: args.stamina_y,
    };
    let anchors = (anchors != BarAnchors::default()).then_some(anchors);

    let scanner = IvScanner::new(config);
    let report = scanner
        .scan_with_diagnostics(&source, anchors.as_ref())
        .await
        .ok_or_else(|| anyhow!("analysis not attempted (scanner disabled or anchors missing)"))?;

    let json = if args.diagnostics {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string_pretty(&report.result)?
    };
    println!("{}", json);

    Ok(())
}
