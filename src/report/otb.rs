//! OTB benchmark toolkit summary file.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::boxes::SequenceSet;

/// Summary of one tracker run in the layout the OTB toolkit loads.
///
/// The score and precision lists are written empty; the toolkit fills them
/// when it plots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtbSummary {
    pub name: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub tracker: String,
    pub eval_type: String,
    #[serde(rename = "seqs")]
    pub sequences: Vec<String>,
    pub overlap: f64,
    pub error: f64,
    pub overlap_scores: Vec<f64>,
    pub error_num: Vec<f64>,
    pub success_rate_list: Vec<f64>,
    pub precision_list: Vec<f64>,
}

impl OtbSummary {
    /// Write the summary as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self).map_err(io::Error::from)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// Ground-truth sequence names that also have experimental data, in
/// ground-truth order.
pub fn common_sequences(ground_truth: &SequenceSet, experimental: &SequenceSet) -> Vec<String> {
    ground_truth
        .keys()
        .filter(|name| experimental.contains_key(*name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boxes::BoundingBox;
    use crate::report::OtbSummaryBuilder;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    #[test]
    fn test_common_sequences() {
        let mut gt = SequenceSet::new();
        let mut exp = SequenceSet::new();
        for name in ["Bolt", "Car4", "Woman"] {
            gt.insert(name.to_string(), vec![BoundingBox::default()]);
        }
        for name in ["Woman", "Bolt", "Extra"] {
            exp.insert(name.to_string(), vec![BoundingBox::default()]);
        }

        assert_eq!(common_sequences(&gt, &exp), vec!["Bolt", "Woman"]);
    }

    #[test]
    fn test_written_keys_and_sequences() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.json");
        let summary = OtbSummaryBuilder::new()
            .sequences(["Woman", "Bolt"])
            .build();
        summary.write(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let object = value.as_object().unwrap();

        let keys: BTreeSet<&str> = object.keys().map(String::as_str).collect();
        let expected: BTreeSet<&str> = [
            "name",
            "desc",
            "tracker",
            "evalType",
            "seqs",
            "overlap",
            "error",
            "overlapScores",
            "errorNum",
            "successRateList",
            "precisionList",
        ]
        .into_iter()
        .collect();
        assert_eq!(keys, expected);

        let sequences: BTreeSet<&str> = object["seqs"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s.as_str().unwrap())
            .collect();
        assert_eq!(sequences, BTreeSet::from(["Bolt", "Woman"]));
        assert_eq!(object["evalType"], "OPE");
        assert!(object["precisionList"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_read_back_typed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("file.json");
        let summary = OtbSummaryBuilder::new().sequences(["Bolt"]).build();
        summary.write(&path).unwrap();

        let read: OtbSummary =
            serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(read, summary);
    }
}
