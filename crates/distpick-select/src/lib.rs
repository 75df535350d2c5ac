//! Selection of the single most preferred distribution file for a release.
//!
//! Given every file published for one package at one version, [`select`] expands each wheel
//! into its concrete (language, ABI, platform) alternatives, computes a [`RankingKey`] for
//! each, and returns the alternative with the smallest key. Source distributions always rank
//! behind wheels. The whole process is pure: no I/O, no shared state.

pub use candidate::{Candidate, WheelTags};
pub use ranking_key::{RankingKey, WheelRank};
pub use selector::{
    RankedAlternative, Ranking, SelectError, Selection, SkippedCandidate, rank, select,
};

mod candidate;
mod ranking_key;
mod selector;
