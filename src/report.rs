//! Report outputs for analyzed sequences.
//!
//! This module provides the `ReportSink` seam the analysis pipeline hands
//! finished sequences to, a filesystem implementation that renders charts and
//! sorts them into browsable buckets, and the OTB-compatible summary file.

mod builder;
mod chart;
mod directory;
mod otb;
mod sink;

pub use builder::OtbSummaryBuilder;
pub use chart::render_overlap_chart;
pub use directory::DirectorySink;
pub use otb::{OtbSummary, common_sequences};
pub use sink::ReportSink;
