//! AnalysisPipeline for scoring tracker runs sequence by sequence.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::analysis::{SequenceAnalysis, SequenceVerdict, read_attributes};
use crate::boxes::{ATTRIBUTES_FILE, BoxSequence, list_sequences, read_sequence};
use crate::config::AnalysisConfig;
use crate::report::ReportSink;
use crate::{Error, Result};

/// Drives a batch run: loads the three box sources for each sequence,
/// compares control and experimental overlap, and hands the result to a
/// `ReportSink`.
pub struct AnalysisPipeline<S: ReportSink> {
    sink: S,
    config: AnalysisConfig,
}

impl<S> AnalysisPipeline<S>
where
    S: ReportSink,
    S::Error: From<Error>,
{
    pub fn new(sink: S, config: AnalysisConfig) -> Self {
        Self { sink, config }
    }

    pub fn with_default_config(sink: S) -> Self {
        Self::new(sink, AnalysisConfig::default())
    }

    /// Analyze `sequences`, or every sequence under the ground-truth root when
    /// the list is empty.
    ///
    /// Sequences with missing box data are skipped. Any other failure stops
    /// the run.
    pub fn run(&mut self, sequences: &[String]) -> std::result::Result<BTreeMap<String, SequenceVerdict>, S::Error> {
        let mut sequences = if sequences.is_empty() {
            list_sequences(&self.config.ground_truth_root)?
        } else {
            sequences.to_vec()
        };
        sequences.sort();

        self.sink.prepare()?;

        let mut verdicts = BTreeMap::new();
        for sequence in sequences {
            if self.config.is_excluded(&sequence) {
                debug!("skipping excluded sequence {sequence}");
                continue;
            }
            if let Some(verdict) = self.process_sequence(&sequence)? {
                verdicts.insert(sequence, verdict);
            }
        }
        Ok(verdicts)
    }

    /// Analyze one sequence. Returns `None` when any of its sources has no data.
    pub fn process_sequence(&mut self, sequence: &str) -> std::result::Result<Option<SequenceVerdict>, S::Error> {
        info!("Analyzing {sequence}");
        self.sink.clear(sequence)?;

        let config = &self.config;
        let attributes = read_attributes(&config.ground_truth_root.join(sequence).join(ATTRIBUTES_FILE))?;
        let ground_truth = load(&config.ground_truth_root, sequence)?;
        let control = load(&config.control_root, sequence)?;
        let experimental = load(&config.experimental_root, sequence)?;

        let (Some(ground_truth), Some(control), Some(experimental)) = (ground_truth, control, experimental) else {
            return Ok(None);
        };

        let analysis = SequenceAnalysis::compute(
            sequence,
            &ground_truth,
            &control,
            &experimental,
            attributes.unwrap_or_default(),
        )?;
        let verdict = &analysis.verdict;
        debug!(
            control_mean = verdict.control_mean,
            experimental_mean = verdict.experimental_mean,
            outcome = %verdict.outcome,
            "{sequence} analyzed"
        );

        self.sink.publish(&analysis)?;
        Ok(Some(analysis.verdict))
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Get a reference to the underlying report sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Get a mutable reference to the underlying report sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

fn load(root: &Path, sequence: &str) -> Result<Option<BoxSequence>> {
    match read_sequence(&root.join(sequence)) {
        Ok(boxes) => Ok(Some(boxes)),
        Err(e) if e.is_not_found() => {
            warn!("{e}");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
