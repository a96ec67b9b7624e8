//! Reduce overlap series to per-sequence means and compare tracker runs.

use ndarray::Array1;
use strum::{Display, IntoStaticStr};

use super::{Attribute, iou_series};
use crate::boxes::BoundingBox;
use crate::{Error, Result};

/// Per-frame IoU values in `[0, 1]`, in frame order.
pub type IouSeries = Array1<f64>;

/// Arithmetic mean of a series. Fails with [`Error::EmptySeries`] when empty.
pub fn mean(series: &IouSeries) -> Result<f64> {
    series.mean().ok_or(Error::EmptySeries)
}

/// How the experimental run compares to the control run on one sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    /// Experimental mean overlap is at least the control mean
    Better,
    /// Experimental mean overlap is below the control mean
    Worse,
}

impl Outcome {
    /// Directory name used for this outcome's report bucket.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Ties count as `Better`.
#[inline]
pub fn classify(control_mean: f64, experimental_mean: f64) -> Outcome {
    if experimental_mean >= control_mean {
        Outcome::Better
    } else {
        Outcome::Worse
    }
}

/// Aggregate result for one sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceVerdict {
    pub control_mean: f64,
    pub experimental_mean: f64,
    pub outcome: Outcome,
    pub attributes: Vec<Attribute>,
}

impl SequenceVerdict {
    pub fn new(control_mean: f64, experimental_mean: f64, attributes: Vec<Attribute>) -> Self {
        Self {
            control_mean,
            experimental_mean,
            outcome: classify(control_mean, experimental_mean),
            attributes,
        }
    }
}

/// Overlap series and verdict for one sequence, as handed to a report sink.
#[derive(Debug, Clone)]
pub struct SequenceAnalysis {
    pub name: String,
    pub control: IouSeries,
    pub experimental: IouSeries,
    pub verdict: SequenceVerdict,
}

impl SequenceAnalysis {
    /// Score both tracker runs against ground truth and compare them.
    pub fn compute(
        name: impl Into<String>,
        ground_truth: &[BoundingBox],
        control: &[BoundingBox],
        experimental: &[BoundingBox],
        attributes: Vec<Attribute>,
    ) -> Result<Self> {
        let control = iou_series(ground_truth, control)?;
        let experimental = iou_series(ground_truth, experimental)?;
        let verdict = SequenceVerdict::new(mean(&control)?, mean(&experimental)?, attributes);

        Ok(Self {
            name: name.into(),
            control,
            experimental,
            verdict,
        })
    }
}
