use std::fmt::{Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum BuildTagError {
    #[error("must not be empty")]
    Empty,
}

/// The optional build tag for a wheel, e.g., `1` in `foo-1.0-1-py3-none-any.whl`.
///
/// Build tags are kept verbatim and compare as plain strings. A wheel without a build tag is
/// represented as `None` and therefore sorts ahead of any wheel that carries one.
///
/// See: <https://packaging.python.org/en/latest/specifications/binary-distribution-format/#file-name-convention>
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct BuildTag(Arc<str>);

impl BuildTag {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for BuildTag {
    type Err = BuildTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(BuildTagError::Empty);
        }
        Ok(Self(Arc::from(s)))
    }
}

impl Display for BuildTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
