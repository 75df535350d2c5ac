use std::cmp::Ordering;
use std::fmt;

use crate::version::parse_python_version;

/// A classified language implementation tag.
///
/// This is the first tag segment in the wheel filename. For example, in
/// `cp39-none-manylinux_2_24_x86_64.whl`, the language tag is `cp39`.
///
/// The generic `py` marker ranks ahead of implementation-specific tags, since it is compatible
/// with the widest range of interpreters. Within a category, newer versions rank first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum LanguageTag {
    /// Ex) `none`
    None,
    /// Ex) `py3`, `py39`
    ///
    /// A tag without a minor version (`py3`) has a minor version of `0`.
    Python { python_version: (u8, u8) },
    /// Ex) `cp39`
    CPython { python_version: (u8, u8) },
    /// Ex) `pp39`
    PyPy { python_version: (u8, u8) },
    /// Ex) `graalpy310`, `ip27`
    Other,
}

impl LanguageTag {
    /// Classify a raw language tag.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "none" {
            return Self::None;
        }
        if let Some(version) = tag.strip_prefix("py") {
            return parse_python_version(version, true)
                .map_or(Self::Other, |python_version| Self::Python { python_version });
        }
        if let Some(version) = tag.strip_prefix("cp") {
            return parse_python_version(version, false)
                .map_or(Self::Other, |python_version| Self::CPython { python_version });
        }
        if let Some(version) = tag.strip_prefix("pp") {
            return parse_python_version(version, false)
                .map_or(Self::Other, |python_version| Self::PyPy { python_version });
        }
        Self::Other
    }

    /// The coarse category of the tag, in preference order.
    fn category(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Python { .. } => 1,
            Self::CPython { .. } => 2,
            Self::PyPy { .. } => 3,
            Self::Other => 4,
        }
    }

    /// The Python version targeted by the tag, if any.
    pub fn python_version(self) -> Option<(u8, u8)> {
        match self {
            Self::Python { python_version }
            | Self::CPython { python_version }
            | Self::PyPy { python_version } => Some(python_version),
            Self::None | Self::Other => None,
        }
    }
}

impl Ord for LanguageTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category().cmp(&other.category()).then_with(|| {
            // Same category: prefer the newer version.
            other.python_version().cmp(&self.python_version())
        })
    }
}

impl PartialOrd for LanguageTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Python {
                python_version: (major, minor),
            } => write!(f, "Python {major}.{minor}"),
            Self::CPython {
                python_version: (major, minor),
            } => write!(f, "CPython {major}.{minor}"),
            Self::PyPy {
                python_version: (major, minor),
            } => write!(f, "PyPy {major}.{minor}"),
            Self::Other => write!(f, "other"),
        }
    }
}
