use std::fmt::{Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

use crate::splitter::MemchrSplitter;
use crate::{BuildTag, BuildTagError};

/// The structural fields of a wheel filename.
///
/// Tags are kept verbatim; classification happens later. Every tag field may hold several
/// `.`-separated alternatives (e.g., `py2.py3`), which are stored in their original order.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct WheelFilename {
    pub name: String,
    pub version: String,
    build_tag: Option<BuildTag>,
    language_tags: Vec<String>,
    abi_tags: Vec<String>,
    platform_tags: Vec<String>,
}

impl Display for WheelFilename {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.name, self.version)?;
        if let Some(build_tag) = &self.build_tag {
            write!(f, "-{build_tag}")?;
        }
        write!(f, "-{}.whl", self.tag_string())
    }
}

impl WheelFilename {
    /// Return the wheel's language tags (e.g., `py2` and `py3` for `py2.py3`).
    pub fn language_tags(&self) -> &[String] {
        &self.language_tags
    }

    /// Return the wheel's ABI tags.
    pub fn abi_tags(&self) -> &[String] {
        &self.abi_tags
    }

    /// Return the wheel's platform tags.
    pub fn platform_tags(&self) -> &[String] {
        &self.platform_tags
    }

    /// Return the wheel's build tag, if present.
    pub fn build_tag(&self) -> Option<&BuildTag> {
        self.build_tag.as_ref()
    }

    /// Rebuild the `{language}-{abi}-{platform}` portion of the filename.
    pub fn tag_string(&self) -> String {
        format!(
            "{}-{}-{}",
            self.language_tags.join("."),
            self.abi_tags.join("."),
            self.platform_tags.join(".")
        )
    }

    /// Return the version segment of a wheel stem without validating the rest of it.
    pub(crate) fn version_segment(stem: &str) -> Option<&str> {
        MemchrSplitter::split(stem, b'-').nth(1)
    }

    /// Parse a wheel filename from the stem (e.g., `foo-1.2.3-py3-none-any`).
    ///
    /// The originating `filename` is used for high-fidelity error messages.
    pub(crate) fn parse(stem: &str, filename: &str) -> Result<Self, WheelFilenameError> {
        // The wheel filename should contain either five or six entries. If six, then the third
        // entry is the build tag. If five, then the third entry is the language tag.
        // https://www.python.org/dev/peps/pep-0427/#file-name-convention
        let segments = MemchrSplitter::split(stem, b'-').collect::<Vec<_>>();
        let (name, version, build_tag, language_tag, abi_tag, platform_tag) =
            match segments.as_slice() {
                [name, version, language_tag, abi_tag, platform_tag] => {
                    (name, version, None, language_tag, abi_tag, platform_tag)
                }
                [name, version, build_tag, language_tag, abi_tag, platform_tag] => (
                    name,
                    version,
                    Some(build_tag),
                    language_tag,
                    abi_tag,
                    platform_tag,
                ),
                _ => {
                    return Err(WheelFilenameError::UnexpectedShape {
                        filename: filename.to_string(),
                        segments: segments.len(),
                    });
                }
            };

        let build_tag = build_tag
            .map(|build_tag| BuildTag::from_str(build_tag))
            .transpose()
            .map_err(|err| WheelFilenameError::InvalidBuildTag(filename.to_string(), err))?;

        Ok(Self {
            name: (*name).to_string(),
            version: (*version).to_string(),
            build_tag,
            language_tags: split_alternatives(language_tag, "language", filename)?,
            abi_tags: split_alternatives(abi_tag, "ABI", filename)?,
            platform_tags: split_alternatives(platform_tag, "platform", filename)?,
        })
    }
}

/// Split a compressed tag set (e.g., `py2.py3`) into its alternatives, rejecting empty ones.
fn split_alternatives(
    tags: &str,
    field: &'static str,
    filename: &str,
) -> Result<Vec<String>, WheelFilenameError> {
    MemchrSplitter::split(tags, b'.')
        .map(|tag| {
            if tag.is_empty() {
                Err(WheelFilenameError::EmptyTag {
                    filename: filename.to_string(),
                    field,
                })
            } else {
                Ok(tag.to_string())
            }
        })
        .collect()
}

#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum WheelFilenameError {
    #[error(
        "The wheel filename \"{filename}\" has an unexpected shape: expected 5 or 6 `-`-separated components, found {segments}"
    )]
    UnexpectedShape { filename: String, segments: usize },
    #[error("The wheel filename \"{filename}\" has an empty {field} tag")]
    EmptyTag {
        filename: String,
        field: &'static str,
    },
    #[error("The wheel filename \"{0}\" has an invalid build tag: {1}")]
    InvalidBuildTag(String, #[source] BuildTagError),
}
