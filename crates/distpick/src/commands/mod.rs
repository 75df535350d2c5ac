use std::process::ExitCode;
use std::time::Duration;

use serde::Serialize;

use distpick_distribution_filename::DistributionKind;
use distpick_select::Selection;

pub(crate) use batch::batch;
pub(crate) use rank::rank;
pub(crate) use select::select;

mod batch;
mod rank;
mod select;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ExitStatus {
    /// The command succeeded.
    Success,

    /// The command failed due to an error in the user input, e.g. a project without any usable
    /// file.
    Failure,

    /// The command failed with an unexpected error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => Self::from(0),
            ExitStatus::Failure => Self::from(1),
            ExitStatus::Error => Self::from(2),
        }
    }
}

/// The selected file of a project, as emitted by `select` and `batch`.
#[derive(Debug, Serialize)]
pub(crate) struct Record<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    downloads: Option<u64>,
    filename: &'a str,
    url: &'a str,
    version: &'a str,
    kind: DistributionKind,
    /// The tag triple the file was selected under, for wheels.
    tags: Option<String>,
    /// Filenames that were excluded because they were malformed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<&'a str>,
}

impl<'a> Record<'a> {
    pub(crate) fn new(name: &'a str, selection: &'a Selection) -> Self {
        let best = &selection.best;
        Self {
            name,
            downloads: None,
            filename: &best.candidate.filename,
            url: &best.candidate.url,
            version: &best.version,
            kind: best.kind,
            tags: best.tags.as_ref().map(ToString::to_string),
            skipped: selection
                .skipped
                .iter()
                .map(|skipped| skipped.candidate.filename.as_str())
                .collect(),
        }
    }

    #[must_use]
    pub(crate) fn with_downloads(mut self, downloads: u64) -> Self {
        self.downloads = Some(downloads);
        self
    }

    /// Drop the skipped filenames, which batch output doesn't carry.
    #[must_use]
    pub(crate) fn without_skipped(mut self) -> Self {
        self.skipped.clear();
        self
    }
}

/// Format a duration as a human-readable string, Cargo-style.
pub(super) fn elapsed(duration: Duration) -> String {
    let secs = duration.as_secs();
    let ms = duration.subsec_millis();

    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else if secs > 0 {
        format!("{}.{:02}s", secs, duration.subsec_nanos() / 10_000_000)
    } else if ms > 0 {
        format!("{ms}ms")
    } else {
        format!("0.{:02}ms", duration.subsec_nanos() / 10_000)
    }
}

#[cfg(test)]
mod tests {
    use distpick_select::{Candidate, select};

    use super::*;

    #[test]
    fn serialize_record() {
        let candidates = [
            Candidate::new("pkg-1.0.tar.gz", "https://files.example/pkg-1.0.tar.gz"),
            Candidate::new(
                "pkg-1.0-py3-none-any.whl",
                "https://files.example/pkg-1.0-py3-none-any.whl",
            ),
        ];
        let selection = select("1.0", &candidates).unwrap();
        let record = Record::new("pkg", &selection).with_downloads(7);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"name":"pkg","downloads":7,"filename":"pkg-1.0-py3-none-any.whl","url":"https://files.example/pkg-1.0-py3-none-any.whl","version":"1.0","kind":"built","tags":"py3-none-any"}"#
        );
    }

    #[test]
    fn serialize_source_record() {
        let candidates = [
            Candidate::new("pkg-1.0.tar.gz", "https://files.example/pkg-1.0.tar.gz"),
            Candidate::new("pkg-1.0-py3-none.whl", "https://files.example/broken.whl"),
        ];
        let selection = select("1.0", &candidates).unwrap();
        let record = Record::new("pkg", &selection);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"name":"pkg","filename":"pkg-1.0.tar.gz","url":"https://files.example/pkg-1.0.tar.gz","version":"1.0","kind":"source","tags":null,"skipped":["pkg-1.0-py3-none.whl"]}"#
        );
    }

    #[test]
    fn format_elapsed() {
        assert_eq!(elapsed(Duration::from_millis(1500)), "1.50s");
        assert_eq!(elapsed(Duration::from_secs(61)), "1m 01s");
        assert_eq!(elapsed(Duration::from_millis(12)), "12ms");
    }
}
