use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Tracker output file inside a sequence directory.
pub const RESULT_FILE: &str = "result.json";
/// OTB ground-truth file inside a sequence directory.
pub const GROUND_TRUTH_FILE: &str = "groundtruth_rect.txt";
/// Optional challenge attribute list inside a ground-truth sequence directory.
pub const ATTRIBUTES_FILE: &str = "attributes.txt";

/// On-disk layout of one sequence's boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxFormat {
    /// `groundtruth_rect.txt`: one `x,y,width,height` line per frame
    Text,
    /// `result.json`: `{"res": [[x, y, width, height], ...]}`
    Json,
}

impl BoxFormat {
    /// File name this format is stored under.
    pub fn file_name(self) -> &'static str {
        match self {
            BoxFormat::Text => GROUND_TRUTH_FILE,
            BoxFormat::Json => RESULT_FILE,
        }
    }

    /// Pick the format present in `sequence_dir`, preferring JSON.
    ///
    /// Returns the format along with the full path of its file.
    pub fn resolve(sequence_dir: &Path) -> Result<(BoxFormat, PathBuf)> {
        [BoxFormat::Json, BoxFormat::Text]
            .into_iter()
            .map(|format| (format, sequence_dir.join(format.file_name())))
            .find(|(_, path)| path.is_file())
            .ok_or_else(|| Error::NotFound {
                path: sequence_dir.to_path_buf(),
            })
    }
}
