use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracking_analysis::config::expand_home;
use tracking_analysis::{AnalysisConfig, AnalysisPipeline, DirectorySink, Outcome};

#[derive(Parser, Debug)]
#[command(
    name = "data-analysis",
    version,
    about = "Analyze bounding box data for overlap."
)]
struct Args {
    /// Root directory with one subdirectory of experimental tracker output per sequence
    #[arg(long, value_name = "PATH", default_value = "~/data/py-MDNet/results")]
    experimental_root: PathBuf,
    /// Root directory with one subdirectory of control tracker output per sequence
    #[arg(long, value_name = "PATH", default_value = "~/data/py-MDNet/control")]
    control_root: PathBuf,
    /// Root directory with one subdirectory of ground truth per sequence
    #[arg(long, value_name = "PATH", default_value = "~/Videos/otb")]
    ground_truth_root: PathBuf,
    /// Directory the graphs are written to [default: current directory]
    #[arg(long, value_name = "PATH")]
    output_root: Option<PathBuf>,
    /// Sequences to analyze. If omitted, all sequences are analyzed.
    sequences: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();
    let args = Args::parse();
    run(args)
}

fn existing_dir(path: PathBuf) -> Result<PathBuf> {
    let path = expand_home(path);
    if !path.is_dir() {
        bail!("{} is not a directory.", path.display());
    }
    Ok(path)
}

fn run(args: Args) -> Result<()> {
    let experimental_root = existing_dir(args.experimental_root)?;
    let control_root = existing_dir(args.control_root)?;
    let ground_truth_root = existing_dir(args.ground_truth_root)?;
    let output_root = match args.output_root {
        Some(path) => existing_dir(path)?,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    let config = AnalysisConfig::new(ground_truth_root, control_root, experimental_root);
    let mut pipeline = AnalysisPipeline::new(DirectorySink::new(output_root), config);
    let verdicts = pipeline.run(&args.sequences).context("Analysis aborted")?;

    let better = verdicts
        .values()
        .filter(|v| v.outcome == Outcome::Better)
        .count();
    info!(
        "{} sequences analyzed: {} better, {} worse",
        verdicts.len(),
        better,
        verdicts.len() - better
    );
    Ok(())
}
