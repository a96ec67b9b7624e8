//! # tracking-analysis
//!
//! Compare two single-object tracker runs ("control" and "experimental")
//! against OTB ground truth.
//!
//! For every sequence the per-frame Intersection-over-Union of each run is
//! computed against ground truth, reduced to a mean, and the experimental run
//! is classified as better or worse than the control run. Results go to a
//! [`ReportSink`]; [`DirectorySink`] renders an SVG chart per sequence and
//! links it into `better/`, `worse/` and per-attribute directories.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tracking_analysis::{AnalysisConfig, AnalysisPipeline, DirectorySink};
//!
//! let config = AnalysisConfig::new("otb", "control", "results");
//! let mut pipeline = AnalysisPipeline::new(DirectorySink::new("out"), config);
//! let verdicts = pipeline.run(&[])?;
//! ```

pub mod analysis;
pub mod boxes;
pub mod config;
pub mod pipeline;
pub mod report;

mod error;

pub use analysis::{
    Attribute, DataSetName, IouSeries, Outcome, SequenceAnalysis, SequenceVerdict, classify,
    classify_dataset, iou, iou_series, mean,
};
pub use boxes::{BoundingBox, BoxFormat, BoxSequence, SequenceSet, read_all_sequences, read_sequence};
pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use pipeline::AnalysisPipeline;
pub use report::{DirectorySink, OtbSummary, OtbSummaryBuilder, ReportSink};
