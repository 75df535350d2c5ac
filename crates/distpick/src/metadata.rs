use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use distpick_select::Candidate;

/// A PEP 691 project detail document, as stored on disk by the fetcher.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ProjectMetadata {
    pub(crate) name: String,
    pub(crate) files: Vec<Candidate>,
    /// All released versions, oldest first.
    #[serde(default)]
    pub(crate) versions: Vec<String>,
}

impl ProjectMetadata {
    /// Read a detail document from `path`, or from stdin if `path` is `-`.
    pub(crate) fn read(path: &Path) -> Result<Self> {
        let content = if path == Path::new("-") {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read project metadata from stdin")?;
            content
        } else {
            fs_err::read_to_string(path)?
        };
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse project metadata: `{}`", path.display()))
    }

    /// The version to select a file for: the requested one, else the latest release.
    pub(crate) fn target_version<'a>(&'a self, requested: Option<&'a str>) -> Result<&'a str> {
        if let Some(requested) = requested {
            return Ok(requested);
        }
        self.versions
            .last()
            .map(String::as_str)
            .with_context(|| format!("Project `{}` has no released versions", self.name))
    }
}

/// The list of the most downloaded projects.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TopPackages {
    pub(crate) rows: Vec<TopPackage>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TopPackage {
    pub(crate) project: String,
    pub(crate) download_count: u64,
}

impl TopPackages {
    pub(crate) fn read(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse top-packages list: `{}`", path.display()))
    }
}
