use std::fmt::{Display, Formatter};

use distpick_distribution_filename::BuildTag;
use distpick_platform_tags::{AbiTag, LanguageTag, PlatformTag};

/// The composite key used to rank distribution files. Smaller keys are more preferred.
///
/// Keys compare field by field and the first difference wins: the distribution kind, then the
/// platform, language and ABI classifications, then the build tag.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum RankingKey {
    /// A wheel, ranked by its tags.
    Built(WheelRank),
    /// A source distribution. All source distributions rank equally, behind every wheel.
    Source,
}

/// The tag-derived part of a wheel's [`RankingKey`].
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct WheelRank {
    pub platform: PlatformTag,
    pub language: LanguageTag,
    pub abi: AbiTag,
    pub build_tag: Option<BuildTag>,
}

impl RankingKey {
    /// Build the key for one concrete alternative of a wheel.
    pub fn built(language: &str, abi: &str, platform: &str, build_tag: Option<&BuildTag>) -> Self {
        Self::Built(WheelRank {
            platform: PlatformTag::from_tag(platform),
            language: LanguageTag::from_tag(language),
            abi: AbiTag::from_tag(abi),
            build_tag: build_tag.cloned(),
        })
    }

    /// The key shared by all source distributions.
    pub fn source() -> Self {
        Self::Source
    }
}

impl Display for RankingKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Built(rank) => {
                write!(f, "{}, {}, {}", rank.platform, rank.language, rank.abi)?;
                if let Some(build_tag) = &rank.build_tag {
                    write!(f, ", build {build_tag}")?;
                }
                Ok(())
            }
            Self::Source => f.write_str("source distribution"),
        }
    }
}
