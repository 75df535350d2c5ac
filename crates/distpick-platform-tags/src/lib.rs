//! Classifiers for the compatibility tags embedded in wheel filenames.
//!
//! Every classifier is total: a tag that isn't recognized lands in the `Other` bucket of its
//! axis instead of producing an error, so that unknown-but-well-formed tags still take part in
//! ranking (and lose against every recognized tag).
//!
//! Each type implements [`Ord`] such that the *smaller* value is the *more preferred* one.

pub use abi_tag::AbiTag;
pub use arch::Arch;
pub use binary_format::BinaryFormat;
pub use language_tag::LanguageTag;
pub use platform_tag::PlatformTag;

mod abi_tag;
mod arch;
mod binary_format;
mod language_tag;
mod platform_tag;
mod version;
