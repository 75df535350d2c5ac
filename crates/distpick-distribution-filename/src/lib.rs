use serde::{Deserialize, Serialize};

pub use build_tag::{BuildTag, BuildTagError};
pub use source_dist::{SourceDistExtension, SourceDistFilename};
pub use wheel::{WheelFilename, WheelFilenameError};

mod build_tag;
mod source_dist;
mod splitter;
mod wheel;

/// The kind of a distribution, i.e., whether it has to be built at install time.
///
/// Built distributions are always preferred, so [`DistributionKind::Built`] sorts first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionKind {
    /// A wheel (`.whl`).
    Built,
    /// A source archive, e.g., `.tar.gz` or `.zip`.
    Source,
}

/// A parsed distribution filename: either a wheel or a source archive.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum DistFilename {
    WheelFilename(WheelFilename),
    SourceDistFilename(SourceDistFilename),
}

impl DistFilename {
    /// Parse a filename that is expected to belong to the given release.
    ///
    /// Returns `Ok(None)` for files that aren't distributions (signatures, eggs, metadata files)
    /// and for distributions of any other version. Returns an error for a wheel of the requested
    /// version whose name doesn't have the expected shape.
    pub fn parse_for_version(
        filename: &str,
        version: &str,
    ) -> Result<Option<Self>, WheelFilenameError> {
        if let Some(stem) = filename.strip_suffix(".whl") {
            // Files of other releases are skipped before their shape is validated.
            if WheelFilename::version_segment(stem).is_some_and(|found| found != version) {
                return Ok(None);
            }
            let wheel = WheelFilename::parse(stem, filename)?;
            return Ok(Some(Self::WheelFilename(wheel)));
        }

        Ok(SourceDistFilename::parse_for_version(filename, version).map(Self::SourceDistFilename))
    }

    /// The kind of distribution this filename refers to.
    pub fn kind(&self) -> DistributionKind {
        match self {
            Self::WheelFilename(_) => DistributionKind::Built,
            Self::SourceDistFilename(_) => DistributionKind::Source,
        }
    }

    /// The version embedded in the filename.
    pub fn version(&self) -> &str {
        match self {
            Self::WheelFilename(wheel) => &wheel.version,
            Self::SourceDistFilename(sdist) => &sdist.version,
        }
    }
}
