use std::fmt;

/// The binary format component of a macOS platform tag, e.g., `universal2` in
/// `macosx_11_0_universal2`.
///
/// Fat binaries are preferred over single-architecture builds; the derived [`Ord`] follows the
/// declaration order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BinaryFormat {
    Universal,
    Universal2,
    X86_64,
    Arm64,
    I386,
    Intel,
    /// Ex) `fat64`, `ppc`
    Other,
}

impl BinaryFormat {
    /// Classify the trailing component of a `macosx_*` platform tag.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "universal" => Self::Universal,
            "universal2" => Self::Universal2,
            "x86_64" => Self::X86_64,
            "arm64" => Self::Arm64,
            "i386" => Self::I386,
            "intel" => Self::Intel,
            _ => Self::Other,
        }
    }

    /// Return the canonical name of the binary format, if it is recognized.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::Universal => Some("universal"),
            Self::Universal2 => Some("universal2"),
            Self::X86_64 => Some("x86_64"),
            Self::Arm64 => Some("arm64"),
            Self::I386 => Some("i386"),
            Self::Intel => Some("intel"),
            Self::Other => None,
        }
    }
}

impl fmt::Display for BinaryFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name().unwrap_or("other"))
    }
}
