use std::cmp::Ordering;
use std::fmt;

use crate::version::parse_os_version;
use crate::{Arch, BinaryFormat};

/// A classified platform tag.
///
/// This is the third tag segment in the wheel filename. For example, in
/// `cp39-none-manylinux_2_24_x86_64.whl`, the platform tag is `manylinux_2_24_x86_64`.
///
/// Categories rank in declaration order, `Any` first and `Other` last. Within a versioned
/// category (`manylinux_x_y`, `musllinux_x_y`, `macosx_x_y`) the newest version ranks first;
/// ties on the version fall back to the architecture (or, on macOS, the binary format).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PlatformTag {
    /// Ex) `any`
    Any,
    /// Ex) `manylinux_2_24_x86_64`
    ManyLinux { version: (u16, u16), arch: Arch },
    /// Ex) `manylinux1_x86_64`
    ManyLinux1 { arch: Arch },
    /// Ex) `manylinux2010_x86_64`
    ManyLinux2010 { arch: Arch },
    /// Ex) `manylinux2014_aarch64`
    ManyLinux2014 { arch: Arch },
    /// Ex) `linux_x86_64`
    Linux { arch: Arch },
    /// Ex) `musllinux_1_2_x86_64`
    MuslLinux { version: (u16, u16), arch: Arch },
    /// Ex) `macosx_11_0_universal2`
    MacOs {
        version: (u16, u16),
        binary_format: BinaryFormat,
    },
    /// Ex) `win_amd64`
    WinAmd64,
    /// Ex) `win32`
    Win32,
    /// Ex) `win_arm64`
    WinArm64,
    /// Ex) `win_ia64`
    WinIa64,
    /// Ex) `android_21_arm64_v8a`, `emscripten_3_1_58_wasm32`
    Other,
}

impl PlatformTag {
    /// Classify a raw platform tag.
    ///
    /// Versioned forms with a malformed version or a missing architecture are classified as
    /// [`PlatformTag::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "any" => return Self::Any,
            "win32" => return Self::Win32,
            "win_amd64" => return Self::WinAmd64,
            "win_arm64" => return Self::WinArm64,
            "win_ia64" => return Self::WinIa64,
            _ => {}
        }

        if let Some(rest) = tag.strip_prefix("manylinux_") {
            // Ex) `manylinux_2_24_x86_64`
            parse_os_version(rest).map_or(Self::Other, |(version, arch)| Self::ManyLinux {
                version,
                arch: Arch::from_tag(arch),
            })
        } else if let Some(arch) = tag.strip_prefix("manylinux1_") {
            Self::ManyLinux1 {
                arch: Arch::from_tag(arch),
            }
        } else if let Some(arch) = tag.strip_prefix("manylinux2010_") {
            Self::ManyLinux2010 {
                arch: Arch::from_tag(arch),
            }
        } else if let Some(arch) = tag.strip_prefix("manylinux2014_") {
            Self::ManyLinux2014 {
                arch: Arch::from_tag(arch),
            }
        } else if let Some(arch) = tag.strip_prefix("linux_") {
            Self::Linux {
                arch: Arch::from_tag(arch),
            }
        } else if let Some(rest) = tag.strip_prefix("musllinux_") {
            // Ex) `musllinux_1_2_aarch64`
            parse_os_version(rest).map_or(Self::Other, |(version, arch)| Self::MuslLinux {
                version,
                arch: Arch::from_tag(arch),
            })
        } else if let Some(rest) = tag.strip_prefix("macosx_") {
            // Ex) `macosx_10_9_x86_64`
            parse_os_version(rest).map_or(Self::Other, |(version, binary_format)| {
                Self::MacOs {
                    version,
                    binary_format: BinaryFormat::from_tag(binary_format),
                }
            })
        } else {
            Self::Other
        }
    }

    /// The coarse category of the tag, in preference order.
    fn category(self) -> u8 {
        match self {
            Self::Any => 0,
            Self::ManyLinux { .. } => 1,
            Self::ManyLinux1 { .. } => 2,
            Self::ManyLinux2010 { .. } => 3,
            Self::ManyLinux2014 { .. } => 4,
            Self::Linux { .. } => 5,
            Self::MuslLinux { .. } => 6,
            Self::MacOs { .. } => 7,
            Self::WinAmd64 => 8,
            Self::Win32 => 9,
            Self::WinArm64 => 10,
            Self::WinIa64 => 11,
            Self::Other => 12,
        }
    }
}

impl Ord for PlatformTag {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Self::ManyLinux {
                    version: self_version,
                    arch: self_arch,
                },
                Self::ManyLinux {
                    version: other_version,
                    arch: other_arch,
                },
            )
            | (
                Self::MuslLinux {
                    version: self_version,
                    arch: self_arch,
                },
                Self::MuslLinux {
                    version: other_version,
                    arch: other_arch,
                },
            ) => other_version
                .cmp(self_version)
                .then_with(|| self_arch.cmp(other_arch)),
            (
                Self::ManyLinux1 { arch: self_arch },
                Self::ManyLinux1 { arch: other_arch },
            )
            | (
                Self::ManyLinux2010 { arch: self_arch },
                Self::ManyLinux2010 { arch: other_arch },
            )
            | (
                Self::ManyLinux2014 { arch: self_arch },
                Self::ManyLinux2014 { arch: other_arch },
            )
            | (Self::Linux { arch: self_arch }, Self::Linux { arch: other_arch }) => {
                self_arch.cmp(other_arch)
            }
            (
                Self::MacOs {
                    version: self_version,
                    binary_format: self_format,
                },
                Self::MacOs {
                    version: other_version,
                    binary_format: other_format,
                },
            ) => other_version
                .cmp(self_version)
                .then_with(|| self_format.cmp(other_format)),
            _ => self.category().cmp(&other.category()),
        }
    }
}

impl PartialOrd for PlatformTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "any"),
            Self::ManyLinux {
                version: (major, minor),
                arch,
            } => write!(f, "manylinux {major}.{minor} ({arch})"),
            Self::ManyLinux1 { arch } => write!(f, "manylinux1 ({arch})"),
            Self::ManyLinux2010 { arch } => write!(f, "manylinux2010 ({arch})"),
            Self::ManyLinux2014 { arch } => write!(f, "manylinux2014 ({arch})"),
            Self::Linux { arch } => write!(f, "linux ({arch})"),
            Self::MuslLinux {
                version: (major, minor),
                arch,
            } => write!(f, "musllinux {major}.{minor} ({arch})"),
            Self::MacOs {
                version: (major, minor),
                binary_format,
            } => write!(f, "macOS {major}.{minor} ({binary_format})"),
            Self::WinAmd64 => write!(f, "Windows (x86_64)"),
            Self::Win32 => write!(f, "Windows (x86)"),
            Self::WinArm64 => write!(f, "Windows (arm64)"),
            Self::WinIa64 => write!(f, "Windows (ia64)"),
            Self::Other => write!(f, "other"),
        }
    }
}
