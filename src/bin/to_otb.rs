use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tracking_analysis::analysis::center_errors;
use tracking_analysis::config::expand_home;
use tracking_analysis::{DataSetName, OtbSummaryBuilder, classify_dataset, read_all_sequences};

#[derive(Parser, Debug)]
#[command(
    name = "to-otb",
    version,
    about = "Generate data OTB can use to generate graphs."
)]
struct Args {
    /// Root directory with one subdirectory of experimental tracker output per sequence
    #[arg(long, value_name = "PATH", default_value = "~/data/py-MDNet/results")]
    experimental_root: PathBuf,
    /// Root directory with one subdirectory of ground truth per sequence
    #[arg(long, value_name = "PATH", default_value = "~/Videos/otb")]
    ground_truth_root: PathBuf,
    /// Directory the summary is written to [default: current directory]
    #[arg(long, value_name = "PATH")]
    output_root: Option<PathBuf>,
    /// Summary file name, relative to the output root
    #[arg(long, default_value = "file.json")]
    output_file: PathBuf,
    #[arg(long, default_value = "test")]
    name: String,
    #[arg(long, default_value = "a test file")]
    description: String,
    /// Tracker identifier shown in OTB plots
    #[arg(long, default_value = "dMDNet")]
    tracker: String,
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
    let ground_truth_root = existing_dir(args.ground_truth_root)?;
    let output_root = match args.output_root {
        Some(path) => existing_dir(path)?,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    let experimental = read_all_sequences(&experimental_root)
        .with_context(|| format!("Failed to read {}", experimental_root.display()))?;
    let ground_truth = read_all_sequences(&ground_truth_root)
        .with_context(|| format!("Failed to read {}", ground_truth_root.display()))?;

    let experimental_set = classify_dataset(experimental.keys().map(String::as_str));
    let ground_truth_set = classify_dataset(ground_truth.keys().map(String::as_str));
    info!("experimental data set: {experimental_set}, ground truth data set: {ground_truth_set}");
    if experimental_set != DataSetName::Unknown
        && ground_truth_set != DataSetName::Unknown
        && experimental_set != ground_truth_set
    {
        bail!("Experimental and ground truth data appear to be from different data sets.");
    }

    for (sequence, errors) in center_errors(&experimental, &ground_truth) {
        if !errors.is_empty() {
            let mean = errors.iter().sum::<f64>() / errors.len() as f64;
            debug!("{sequence}: mean center error {mean:.2} px over {} frames", errors.len());
        }
    }

    let summary = OtbSummaryBuilder::new()
        .name(args.name)
        .description(args.description)
        .tracker(args.tracker)
        .common_sequences(&ground_truth, &experimental)
        .build();

    let path = output_root.join(&args.output_file);
    summary
        .write(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!(
        "wrote {} sequences to {}",
        summary.sequences.len(),
        path.display()
    );
    Ok(())
}
