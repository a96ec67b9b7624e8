//! Builder for OTB summary files.

use super::{OtbSummary, common_sequences};
use crate::boxes::SequenceSet;

/// Builder for [`OtbSummary`] with the defaults the OTB toolkit expects.
#[derive(Debug, Clone)]
pub struct OtbSummaryBuilder {
    name: String,
    description: String,
    tracker: String,
    eval_type: String,
    sequences: Vec<String>,
}

impl Default for OtbSummaryBuilder {
    fn default() -> Self {
        Self {
            name: "test".to_string(),
            description: "a test file".to_string(),
            tracker: "dMDNet".to_string(),
            eval_type: "OPE".to_string(),
            sequences: Vec::new(),
        }
    }
}

impl OtbSummaryBuilder {
    /// Create a new summary builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the tracker identifier shown in OTB plots.
    pub fn tracker(mut self, tracker: impl Into<String>) -> Self {
        self.tracker = tracker.into();
        self
    }

    /// Set the evaluation protocol (OPE, TRE or SRE).
    pub fn eval_type(mut self, eval_type: impl Into<String>) -> Self {
        self.eval_type = eval_type.into();
        self
    }

    pub fn sequences<I, S>(mut self, sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sequences = sequences.into_iter().map(Into::into).collect();
        self
    }

    /// Use the sequences present in both data sets.
    pub fn common_sequences(self, ground_truth: &SequenceSet, experimental: &SequenceSet) -> Self {
        self.sequences(common_sequences(ground_truth, experimental))
    }

    /// Build the final `OtbSummary`.
    pub fn build(self) -> OtbSummary {
        OtbSummary {
            name: self.name,
            description: self.description,
            tracker: self.tracker,
            eval_type: self.eval_type,
            sequences: self.sequences,
            overlap: 0.0,
            error: 0.0,
            overlap_scores: Vec::new(),
            error_num: Vec::new(),
            success_rate_list: Vec::new(),
            precision_list: Vec::new(),
        }
    }
}
