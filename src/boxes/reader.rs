//! Readers for OTB-style text ground truth and tracker `result.json` files.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::{BoundingBox, BoxFormat};
use crate::{Error, Result};

/// Boxes for one sequence, indexed by frame.
pub type BoxSequence = Vec<BoundingBox>;

/// Box sequences of one data source keyed by sequence name, in name order.
pub type SequenceSet = BTreeMap<String, BoxSequence>;

#[derive(Deserialize)]
struct ResultFile {
    res: Vec<[f64; 4]>,
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::NotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })
}

/// Read a text file with one `x,y,width,height` line per frame.
pub fn read_text_boxes(path: &Path) -> Result<BoxSequence> {
    let reader = BufReader::new(open(path)?);
    let mut boxes = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let parse_error = |message: String| Error::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            message,
        };
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => parse_error(format!("line is not valid UTF-8: {e}")),
            _ => Error::Io(e),
        })?;

        let fields: Vec<&str> = line.trim().split(',').collect();
        if fields.len() != 4 {
            return Err(parse_error(format!(
                "expected 4 comma-separated fields, found {}",
                fields.len()
            )));
        }

        let mut values = [0.0; 4];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field
                .trim()
                .parse()
                .map_err(|e| parse_error(format!("invalid number '{}': {}", field.trim(), e)))?;
        }
        boxes.push(BoundingBox::from(values));
    }

    Ok(boxes)
}

/// Read a tracker result file of the form `{"res": [[x, y, width, height], ...]}`.
pub fn read_json_boxes(path: &Path) -> Result<BoxSequence> {
    let reader = BufReader::new(open(path)?);
    let document: ResultFile = serde_json::from_reader(reader).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(document.res.into_iter().map(BoundingBox::from).collect())
}

/// Read the boxes stored in one sequence directory.
///
/// `result.json` wins over `groundtruth_rect.txt` when both exist. Fails with
/// [`Error::NotFound`] when the directory holds neither.
pub fn read_sequence(sequence_dir: &Path) -> Result<BoxSequence> {
    let (format, path) = BoxFormat::resolve(sequence_dir)?;
    debug!(path = %path.display(), ?format, "reading bounding boxes");
    match format {
        BoxFormat::Text => read_text_boxes(&path),
        BoxFormat::Json => read_json_boxes(&path),
    }
}

/// Names of the immediate subdirectories of `data_root`, sorted.
pub fn list_sequences(data_root: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(data_root)? {
        let entry = entry?;
        // Follows symlinks, so linked-in sequence directories are listed too.
        if entry.path().is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();
    Ok(names)
}

/// Read every sequence under `data_root`.
///
/// Sequences without box data are reported and left out. Parse failures abort
/// the whole read.
pub fn read_all_sequences(data_root: &Path) -> Result<SequenceSet> {
    let mut sequences = SequenceSet::new();
    for name in list_sequences(data_root)? {
        match read_sequence(&data_root.join(&name)) {
            Ok(boxes) => {
                sequences.insert(name, boxes);
            }
            Err(e) if e.is_not_found() => warn!("{e}"),
            Err(e) => return Err(e),
        }
    }
    Ok(sequences)
}
