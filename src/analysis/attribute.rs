use std::fs;
use std::io;
use std::path::Path;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::warn;

use crate::Result;

/// Challenge condition tagged on a sequence.
///
/// Parses from the long snake_case label or the OTB abbreviation, and
/// displays as the long label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, Display, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Attribute {
    #[strum(to_string = "background_clutter", serialize = "BC")]
    BackgroundClutter,
    #[strum(to_string = "deformation", serialize = "DEF")]
    Deformation,
    #[strum(to_string = "fast_motion", serialize = "FM")]
    FastMotion,
    #[strum(to_string = "illumination_variation", serialize = "IV")]
    IlluminationVariation,
    #[strum(to_string = "in_plane_rotation", serialize = "IPR")]
    InPlaneRotation,
    #[strum(to_string = "low_resolution", serialize = "LR")]
    LowResolution,
    #[strum(to_string = "motion_blur", serialize = "MB")]
    MotionBlur,
    #[strum(to_string = "occlusion", serialize = "OCC")]
    Occlusion,
    #[strum(to_string = "out_of_plane_rotation", serialize = "OPR")]
    OutOfPlaneRotation,
    #[strum(to_string = "out_of_view", serialize = "OV")]
    OutOfView,
    #[strum(to_string = "scale_variation", serialize = "SV")]
    ScaleVariation,
}

impl Attribute {
    /// Directory name used for this attribute's report bucket.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Read a sequence's attribute file, one label per line.
///
/// Returns `None` when the file does not exist.
pub fn read_attributes(path: &Path) -> Result<Option<Vec<Attribute>>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    let attributes: Vec<Attribute> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match line.parse::<Attribute>() {
            Ok(attribute) => Some(attribute),
            Err(_) => {
                warn!(path = %path.display(), "ignoring unknown attribute '{line}'");
                None
            }
        })
        .collect();
    Ok(Some(attributes))
}
