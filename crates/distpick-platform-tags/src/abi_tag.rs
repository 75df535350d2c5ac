use std::cmp::Ordering;
use std::fmt;

use crate::version::parse_python_version;

/// A classified ABI tag.
///
/// This is the second tag segment in the wheel filename. For example, in
/// `cp39-cp39-manylinux_2_24_x86_64.whl`, the ABI tag is `cp39`.
///
/// ABI-agnostic tags rank ahead of implementation-specific ones: `none`, then `abi3`, then
/// CPython (newest first, GIL-enabled before free-threaded), then PyPy, then anything else.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum AbiTag {
    /// Ex) `none`
    None,
    /// Ex) `abi3`
    Abi3,
    /// Ex) `cp39`, `cp37m`, `cp313t`
    CPython {
        python_version: (u8, u8),
        gil_disabled: bool,
    },
    /// Ex) `pypy39_pp73`
    PyPy,
    /// Ex) `graalpy311_graalpy242_311_native`
    Other,
}

impl AbiTag {
    /// Classify a raw ABI tag.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "none" {
            Self::None
        } else if tag == "abi3" {
            Self::Abi3
        } else if let Some(cp) = tag.strip_prefix("cp") {
            // Ex) `cp39m` has the digits `39`; suffixes like `m`, `d` or `u` are ignored.
            let digits = cp.chars().filter(char::is_ascii_digit).collect::<String>();
            match parse_python_version(&digits, false) {
                Some(python_version) => Self::CPython {
                    python_version,
                    gil_disabled: cp.ends_with('t'),
                },
                None => Self::Other,
            }
        } else if tag.starts_with("pypy") {
            Self::PyPy
        } else {
            Self::Other
        }
    }

    /// The coarse category of the tag, in preference order.
    fn category(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Abi3 => 1,
            Self::CPython { .. } => 2,
            Self::PyPy => 3,
            Self::Other => 4,
        }
    }
}

impl Ord for AbiTag {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Self::CPython {
                    python_version: self_version,
                    gil_disabled: self_gil_disabled,
                },
                Self::CPython {
                    python_version: other_version,
                    gil_disabled: other_gil_disabled,
                },
            ) => other_version
                .cmp(self_version)
                .then_with(|| self_gil_disabled.cmp(other_gil_disabled)),
            _ => self.category().cmp(&other.category()),
        }
    }
}

impl PartialOrd for AbiTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AbiTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Abi3 => write!(f, "abi3"),
            Self::CPython {
                python_version: (major, minor),
                gil_disabled,
            } => {
                if *gil_disabled {
                    write!(f, "CPython {major}.{minor} (free-threaded)")
                } else {
                    write!(f, "CPython {major}.{minor}")
                }
            }
            Self::PyPy => write!(f, "PyPy"),
            Self::Other => write!(f, "other"),
        }
    }
}
