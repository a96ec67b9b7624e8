use std::path::PathBuf;

/// Sequences left out of every analysis run by default.
///
/// Their OTB ground truth starts or ends at a different frame than the
/// tracker output, so per-frame pairing is meaningless.
pub const DEFAULT_EXCLUDED_SEQUENCES: [&str; 5] =
    ["David", "Diving", "Football1", "Freeman3", "Freeman4"];

/// Configuration for an analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub ground_truth_root: PathBuf,
    pub control_root: PathBuf,
    pub experimental_root: PathBuf,
    pub excluded_sequences: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ground_truth_root: PathBuf::from("~/Videos/otb"),
            control_root: PathBuf::from("~/data/py-MDNet/control"),
            experimental_root: PathBuf::from("~/data/py-MDNet/results"),
            excluded_sequences: DEFAULT_EXCLUDED_SEQUENCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl AnalysisConfig {
    pub fn new(
        ground_truth_root: impl Into<PathBuf>,
        control_root: impl Into<PathBuf>,
        experimental_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            ground_truth_root: ground_truth_root.into(),
            control_root: control_root.into(),
            experimental_root: experimental_root.into(),
            ..Self::default()
        }
    }

    /// Replace the excluded sequence list.
    pub fn with_excluded<I, S>(mut self, sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_sequences = sequences.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_excluded(&self, sequence: &str) -> bool {
        self.excluded_sequences.iter().any(|s| s == sequence)
    }
}

/// Expand a leading `~` to the user's home directory.
///
/// Paths without a leading `~`, or when `HOME` is unset, come back unchanged.
pub fn expand_home(path: impl Into<PathBuf>) -> PathBuf {
    let path = path.into();
    let Ok(rest) = path.strip_prefix("~") else {
        return path;
    };
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(rest),
        None => path,
    }
}
