//! Overlap computation, per-sequence aggregation and the static registries
//! (challenge attributes, canonical data sets) used to classify results.

mod aggregate;
mod attribute;
mod dataset;
mod overlap;

pub use aggregate::{IouSeries, Outcome, SequenceAnalysis, SequenceVerdict, classify, mean};
pub use attribute::{Attribute, read_attributes};
pub use dataset::{DataSetName, classify_dataset, tb50, tb100};
pub use overlap::{center_error, center_error_series, center_errors, iou, iou_series};
