use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A file published for a package: its filename and where to download it from.
///
/// Deserializes from a PEP 691 `files` entry; fields other than `filename` and `url` are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub filename: String,
    pub url: String,
}

impl Candidate {
    pub fn new(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            url: url.into(),
        }
    }
}

/// One concrete (language, ABI, platform) combination out of a wheel's compressed tag sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WheelTags {
    pub language: String,
    pub abi: String,
    pub platform: String,
}

impl Display for WheelTags {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.language, self.abi, self.platform)
    }
}
