use std::fmt;

/// The CPU architecture component of a Linux platform tag.
///
/// Variants are declared in preference order, so the derived [`Ord`] ranks `X86_64` first and
/// `Other` last.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Arch {
    /// Ex) `x86_64`, `amd64`
    X86_64,
    /// Ex) `x86`, `i386`, `i686`
    X86,
    /// Ex) `aarch64`, `arm64`
    Aarch64,
    /// Any other architecture, e.g., `ppc64le` or `s390x`.
    Other,
}

impl Arch {
    /// Classify an architecture token, normalizing the common aliases.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "x86_64" | "amd64" => Self::X86_64,
            "x86" | "i386" | "i686" => Self::X86,
            "aarch64" | "arm64" => Self::Aarch64,
            _ => Self::Other,
        }
    }

    /// Return the canonical name of the architecture, if it is recognized.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::X86_64 => Some("x86_64"),
            Self::X86 => Some("x86"),
            Self::Aarch64 => Some("aarch64"),
            Self::Other => None,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name().unwrap_or("other"))
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::Arch;

    #[test_case("x86_64", Arch::X86_64)]
    #[test_case("amd64", Arch::X86_64)]
    #[test_case("x86", Arch::X86)]
    #[test_case("i386", Arch::X86)]
    #[test_case("i686", Arch::X86)]
    #[test_case("aarch64", Arch::Aarch64)]
    #[test_case("arm64", Arch::Aarch64)]
    #[test_case("ppc64le", Arch::Other)]
    #[test_case("", Arch::Other)]
    fn classify(tag: &str, expected: Arch) {
        assert_eq!(Arch::from_tag(tag), expected);
    }

    #[test]
    fn preference_order() {
        assert!(Arch::X86_64 < Arch::X86);
        assert!(Arch::X86 < Arch::Aarch64);
        assert!(Arch::Aarch64 < Arch::Other);
    }
}
