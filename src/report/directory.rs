//! Filesystem report sink: one chart per sequence plus link buckets.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;
use tracing::debug;

use super::{ReportSink, render_overlap_chart};
use crate::analysis::{Attribute, Outcome, SequenceAnalysis};
use crate::{Error, Result};

/// Writes `<sequence>.svg` into the output root and links it from the
/// `better`/`worse` bucket and from one bucket per tagged attribute.
///
/// Layout:
/// ```text
/// output_root/
///   Bolt.svg
///   better/Bolt -> ../Bolt.svg
///   occlusion/Bolt -> ../Bolt.svg
/// ```
#[derive(Debug, Clone)]
pub struct DirectorySink {
    output_root: PathBuf,
}

impl DirectorySink {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Path of the chart rendered for `sequence`.
    pub fn chart_path(&self, sequence: &str) -> PathBuf {
        self.output_root.join(chart_file_name(sequence))
    }

    /// Path of `sequence`'s link inside `bucket`.
    pub fn link_path(&self, bucket: &str, sequence: &str) -> PathBuf {
        self.output_root.join(bucket).join(sequence)
    }

    fn buckets() -> impl Iterator<Item = &'static str> {
        [Outcome::Better, Outcome::Worse]
            .into_iter()
            .map(Outcome::label)
            .chain(Attribute::iter().map(Attribute::label))
    }

    fn link(&self, bucket: &str, sequence: &str) -> Result<()> {
        let link = self.link_path(bucket, sequence);
        remove_link(&link)?;
        let target = Path::new("..").join(chart_file_name(sequence));
        make_symlink(&target, &link)?;
        Ok(())
    }
}

impl ReportSink for DirectorySink {
    type Error = Error;

    fn prepare(&mut self) -> Result<()> {
        for bucket in Self::buckets() {
            fs::create_dir_all(self.output_root.join(bucket))?;
        }
        Ok(())
    }

    fn clear(&mut self, sequence: &str) -> Result<()> {
        for bucket in Self::buckets() {
            remove_link(&self.link_path(bucket, sequence))?;
        }
        let chart = self.chart_path(sequence);
        if chart.exists() {
            fs::remove_file(&chart)?;
        }
        Ok(())
    }

    fn publish(&mut self, analysis: &SequenceAnalysis) -> Result<()> {
        let chart = self.chart_path(&analysis.name);
        render_overlap_chart(&chart, analysis)?;
        debug!(chart = %chart.display(), "rendered overlap chart");

        let verdict = &analysis.verdict;
        self.link(verdict.outcome.label(), &analysis.name)?;
        for attribute in &verdict.attributes {
            self.link(attribute.label(), &analysis.name)?;
        }
        Ok(())
    }
}

fn chart_file_name(sequence: &str) -> String {
    format!("{sequence}.svg")
}

fn remove_link(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::remove_file(path),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn make_symlink(target: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::analysis::SequenceVerdict;
    use ndarray::array;
    use tempfile::TempDir;

    fn analysis(name: &str, control_mean: f64, experimental_mean: f64) -> SequenceAnalysis {
        SequenceAnalysis {
            name: name.to_string(),
            control: array![control_mean],
            experimental: array![experimental_mean],
            verdict: SequenceVerdict::new(
                control_mean,
                experimental_mean,
                vec![Attribute::Occlusion, Attribute::MotionBlur],
            ),
        }
    }

    #[test]
    fn test_prepare_creates_buckets() {
        let dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        sink.prepare().unwrap();

        assert!(dir.path().join("better").is_dir());
        assert!(dir.path().join("worse").is_dir());
        for attribute in Attribute::iter() {
            assert!(dir.path().join(attribute.label()).is_dir());
        }
    }

    #[test]
    fn test_publish_links_chart() {
        let dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        sink.prepare().unwrap();
        sink.publish(&analysis("Bolt", 0.4, 0.5)).unwrap();

        assert!(sink.chart_path("Bolt").is_file());
        for bucket in ["better", "occlusion", "motion_blur"] {
            let link = sink.link_path(bucket, "Bolt");
            assert_eq!(fs::read_link(&link).unwrap(), Path::new("../Bolt.svg"));
            assert!(link.is_file(), "{} should resolve to the chart", link.display());
        }
        assert!(fs::symlink_metadata(sink.link_path("worse", "Bolt")).is_err());
    }

    #[test]
    fn test_publish_is_repeatable() {
        let dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        sink.prepare().unwrap();
        sink.publish(&analysis("Bolt", 0.6, 0.5)).unwrap();
        sink.publish(&analysis("Bolt", 0.6, 0.5)).unwrap();

        assert!(fs::symlink_metadata(sink.link_path("worse", "Bolt")).is_ok());
    }

    #[test]
    fn test_clear_removes_stale_output() {
        let dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        sink.prepare().unwrap();
        sink.publish(&analysis("Bolt", 0.4, 0.5)).unwrap();
        sink.publish(&analysis("Toy", 0.4, 0.5)).unwrap();

        sink.clear("Bolt").unwrap();

        assert!(!sink.chart_path("Bolt").exists());
        for bucket in DirectorySink::buckets() {
            assert!(fs::symlink_metadata(sink.link_path(bucket, "Bolt")).is_err());
        }
        assert!(sink.chart_path("Toy").is_file());
        assert!(fs::symlink_metadata(sink.link_path("better", "Toy")).is_ok());
    }

    #[test]
    fn test_clear_without_previous_run() {
        let dir = TempDir::new().unwrap();
        let mut sink = DirectorySink::new(dir.path());
        sink.prepare().unwrap();
        sink.clear("Bolt").unwrap();
    }
}
