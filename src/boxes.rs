//! Bounding box model and the on-disk readers that produce box sequences.

mod format;
mod reader;
mod rect;

pub use format::{ATTRIBUTES_FILE, BoxFormat, GROUND_TRUTH_FILE, RESULT_FILE};
pub use reader::{
    BoxSequence, SequenceSet, list_sequences, read_all_sequences, read_json_boxes, read_sequence,
    read_text_boxes,
};
pub use rect::BoundingBox;
