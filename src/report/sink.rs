//! Trait for consumers of finished sequence analyses.

use crate::analysis::SequenceAnalysis;

/// Destination for per-sequence results.
///
/// Implement this trait to route analyses somewhere other than the output
/// directory, e.g. collecting them in memory.
///
/// # Example
///
/// ```ignore
/// use tracking_analysis::{ReportSink, SequenceAnalysis};
///
/// struct Collect(Vec<SequenceAnalysis>);
///
/// impl ReportSink for Collect {
///     type Error = tracking_analysis::Error;
///
///     fn prepare(&mut self) -> Result<(), Self::Error> { Ok(()) }
///     fn clear(&mut self, _sequence: &str) -> Result<(), Self::Error> { Ok(()) }
///     fn publish(&mut self, analysis: &SequenceAnalysis) -> Result<(), Self::Error> {
///         self.0.push(analysis.clone());
///         Ok(())
///     }
/// }
/// ```
pub trait ReportSink {
    /// Error type for reporting failures.
    type Error;

    /// Called once before any sequence is reported.
    fn prepare(&mut self) -> Result<(), Self::Error>;

    /// Drop whatever an earlier run left behind for `sequence`.
    ///
    /// Called before the sequence's data is read, so stale output disappears
    /// even when the sequence ends up skipped.
    fn clear(&mut self, sequence: &str) -> Result<(), Self::Error>;

    /// Record one analyzed sequence.
    fn publish(&mut self, analysis: &SequenceAnalysis) -> Result<(), Self::Error>;
}
