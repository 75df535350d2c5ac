use itertools::{Either, iproduct};
use thiserror::Error;
use tracing::{debug, instrument, trace, warn};

use distpick_distribution_filename::{DistFilename, DistributionKind, WheelFilenameError};

use crate::{Candidate, RankingKey, WheelTags};

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("No candidate files were provided")]
    Empty,
    #[error(
        "No distribution is available for version `{version}` ({} malformed candidate(s) skipped)",
        .skipped.len()
    )]
    Unavailable {
        version: String,
        skipped: Vec<SkippedCandidate>,
    },
}

/// A candidate that was excluded from ranking because its filename couldn't be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCandidate {
    pub candidate: Candidate,
    pub error: WheelFilenameError,
}

/// One ranked alternative: a candidate, the concrete tags it was ranked under, and its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedAlternative {
    pub candidate: Candidate,
    pub kind: DistributionKind,
    pub version: String,
    /// The concrete tag combination, for wheels.
    pub tags: Option<WheelTags>,
    pub key: RankingKey,
}

/// The most preferred alternative for a release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub best: RankedAlternative,
    /// Candidates that were excluded because their filename was malformed.
    pub skipped: Vec<SkippedCandidate>,
}

/// Every alternative for a release, most preferred first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub alternatives: Vec<RankedAlternative>,
    pub skipped: Vec<SkippedCandidate>,
}

/// A borrowed view of an alternative, produced lazily during expansion.
struct Alternative<'a> {
    candidate: &'a Candidate,
    filename: &'a DistFilename,
    tags: Option<(&'a str, &'a str, &'a str)>,
    key: RankingKey,
}

impl Alternative<'_> {
    fn to_ranked(&self) -> RankedAlternative {
        RankedAlternative {
            candidate: self.candidate.clone(),
            kind: self.filename.kind(),
            version: self.filename.version().to_string(),
            tags: self.tags.map(|(language, abi, platform)| WheelTags {
                language: language.to_string(),
                abi: abi.to_string(),
                platform: platform.to_string(),
            }),
            key: self.key.clone(),
        }
    }
}

/// Select the most preferred distribution among the `candidates` for `version`.
///
/// Files that aren't distributions of `version` are ignored. Wheels with a malformed filename
/// are excluded and reported in [`Selection::skipped`]. If several alternatives share the
/// smallest key, the one seen first (in input order) wins.
#[instrument(skip_all, fields(version = version, candidates = candidates.len()))]
pub fn select(version: &str, candidates: &[Candidate]) -> Result<Selection, SelectError> {
    if candidates.is_empty() {
        return Err(SelectError::Empty);
    }

    let (parsed, skipped) = lex(version, candidates);

    // `min_by` keeps the first of several equal elements.
    let Some(best) = parsed
        .iter()
        .flat_map(|(candidate, filename)| expand(candidate, filename))
        .min_by(|a, b| a.key.cmp(&b.key))
    else {
        return Err(SelectError::Unavailable {
            version: version.to_string(),
            skipped,
        });
    };

    debug!("Selected `{}` ({})", best.candidate.filename, best.key);

    Ok(Selection {
        best: best.to_ranked(),
        skipped,
    })
}

/// Rank every alternative among the `candidates` for `version`, most preferred first.
///
/// Uses the same ordering and tie-breaking as [`select`]: the first entry of the ranking is
/// always the selected alternative.
#[instrument(skip_all, fields(version = version, candidates = candidates.len()))]
pub fn rank(version: &str, candidates: &[Candidate]) -> Ranking {
    let (parsed, skipped) = lex(version, candidates);

    let mut alternatives = parsed
        .iter()
        .flat_map(|(candidate, filename)| expand(candidate, filename))
        .collect::<Vec<_>>();
    // The sort is stable, so ties keep their input order.
    alternatives.sort_by(|a, b| a.key.cmp(&b.key));

    Ranking {
        alternatives: alternatives.iter().map(Alternative::to_ranked).collect(),
        skipped,
    }
}

/// Parse every candidate filename, keeping only distributions of `version`.
fn lex<'a>(
    version: &str,
    candidates: &'a [Candidate],
) -> (Vec<(&'a Candidate, DistFilename)>, Vec<SkippedCandidate>) {
    let mut parsed = Vec::with_capacity(candidates.len());
    let mut skipped = Vec::new();

    for candidate in candidates {
        match DistFilename::parse_for_version(&candidate.filename, version) {
            Ok(Some(filename)) => parsed.push((candidate, filename)),
            Ok(None) => {
                trace!("Ignoring `{}`: not a distribution of {version}", candidate.filename);
            }
            Err(error) => {
                debug!("Skipping `{}`: {error}", candidate.filename);
                skipped.push(SkippedCandidate {
                    candidate: candidate.clone(),
                    error,
                });
            }
        }
    }

    if !skipped.is_empty() {
        warn!(
            "Skipped {} malformed candidate(s) for version {version}",
            skipped.len()
        );
    }

    (parsed, skipped)
}

/// Expand a parsed filename into its alternatives: one per (language, ABI, platform)
/// combination for a wheel, or a single alternative for a source distribution.
fn expand<'a>(
    candidate: &'a Candidate,
    filename: &'a DistFilename,
) -> impl Iterator<Item = Alternative<'a>> + 'a {
    match filename {
        DistFilename::WheelFilename(wheel) => Either::Left(
            iproduct!(
                wheel.language_tags(),
                wheel.abi_tags(),
                wheel.platform_tags()
            )
            .map(move |(language, abi, platform)| {
                let key = RankingKey::built(language, abi, platform, wheel.build_tag());
                trace!("Ranked `{}` as {key}", candidate.filename);
                Alternative {
                    candidate,
                    filename,
                    tags: Some((language.as_str(), abi.as_str(), platform.as_str())),
                    key,
                }
            }),
        ),
        DistFilename::SourceDistFilename(_) => Either::Right(std::iter::once(Alternative {
            candidate,
            filename,
            tags: None,
            key: RankingKey::source(),
        })),
    }
}

#[cfg(test)]
mod tests;
