/// The archive format of a source distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceDistExtension {
    Zip,
    TarGz,
    TarBz2,
    TarXz,
    TarZst,
    TarLzma,
    TarLz,
    Tar,
    Tgz,
    Tbz,
    Txz,
    Tlz,
}

impl SourceDistExtension {
    /// Suffixes are checked in order, so compound suffixes come before `.tar`.
    const SUFFIXES: [(&'static str, Self); 12] = [
        (".tar.gz", Self::TarGz),
        (".tar.bz2", Self::TarBz2),
        (".tar.xz", Self::TarXz),
        (".tar.zst", Self::TarZst),
        (".tar.lzma", Self::TarLzma),
        (".tar.lz", Self::TarLz),
        (".tgz", Self::Tgz),
        (".tbz", Self::Tbz),
        (".txz", Self::Txz),
        (".tlz", Self::Tlz),
        (".zip", Self::Zip),
        (".tar", Self::Tar),
    ];

    /// Split a filename into its stem and archive extension, if it has a known one.
    pub fn from_filename(filename: &str) -> Option<(&str, Self)> {
        Self::SUFFIXES.iter().find_map(|(suffix, extension)| {
            filename
                .strip_suffix(suffix)
                .map(|stem| (stem, *extension))
        })
    }
}

/// A source distribution filename, e.g., `foo-1.0.tar.gz`.
///
/// No `FromStr` impl: source distribution names are ambiguous without knowing the version
/// (consider `a-1-1.zip`), so they're only ever parsed against a known release.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceDistFilename {
    pub name: String,
    pub version: String,
    pub extension: SourceDistExtension,
}

impl SourceDistFilename {
    /// Parse a source distribution filename of the given version.
    ///
    /// Returns `None` if the filename has no known archive extension or doesn't end with
    /// `-{version}`.
    pub fn parse_for_version(filename: &str, version: &str) -> Option<Self> {
        let (stem, extension) = SourceDistExtension::from_filename(filename)?;
        let name = stem.strip_suffix(version)?.strip_suffix('-')?;
        Some(Self {
            name: name.to_string(),
            version: version.to_string(),
            extension,
        })
    }
}
