use std::collections::BTreeSet;
use std::num::NonZeroUsize;
use std::ops::Deref;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::cli::{BatchArgs, GlobalArgs};

/// The name of the configuration file discovered in the working directory or its ancestors.
const CONFIG_FILE: &str = "distpick.toml";

/// The options that can be set in a `distpick.toml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub(crate) struct Options {
    /// Projects that are never selected, e.g. because they only ship data or are known to be
    /// broken.
    pub(crate) exclude: Option<Vec<String>>,
    /// The number of projects to process in parallel during a batch.
    pub(crate) concurrency: Option<NonZeroUsize>,
}

/// The [`Options`] as loaded from a configuration file on disk.
#[derive(Debug, Clone)]
pub(crate) struct FilesystemOptions(Options);

impl Deref for FilesystemOptions {
    type Target = Options;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FilesystemOptions {
    /// Find the [`FilesystemOptions`] for the given path.
    ///
    /// The search starts at the given path and goes up the directory tree until a
    /// `distpick.toml` file is found.
    pub(crate) fn find(path: &Path) -> Result<Option<Self>, Error> {
        for ancestor in path.ancestors() {
            let file = ancestor.join(CONFIG_FILE);
            match read_file(&file) {
                Ok(options) => {
                    debug!("Found configuration at `{}`", file.display());
                    return Ok(Some(Self(options)));
                }
                Err(Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(err),
            }
        }
        Ok(None)
    }

    /// Load a [`FilesystemOptions`] from the given file.
    pub(crate) fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        debug!("Reading configuration from `{}`", path.display());
        read_file(path).map(Self)
    }
}

fn read_file(path: &Path) -> Result<Options, Error> {
    let content = fs_err::read_to_string(path)?;
    toml::from_str::<Options>(&content).map_err(|err| Error::Toml(path.to_path_buf(), Box::new(err)))
}

/// Load the configuration the global arguments point to, if any.
pub(crate) fn load(global_args: &GlobalArgs) -> Result<Option<FilesystemOptions>, Error> {
    if let Some(config_file) = &global_args.config_file {
        FilesystemOptions::from_file(config_file).map(Some)
    } else if global_args.no_config {
        Ok(None)
    } else {
        FilesystemOptions::find(&std::env::current_dir()?)
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to parse: `{}`", _0.display())]
    Toml(PathBuf, #[source] Box<toml::de::Error>),
}

/// The resolved settings for the `batch` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BatchSettings {
    pub(crate) index: PathBuf,
    pub(crate) metadata_dir: PathBuf,
    pub(crate) output: Option<PathBuf>,
    /// Normalized names of the excluded projects.
    pub(crate) exclude: BTreeSet<String>,
    pub(crate) concurrency: Option<NonZeroUsize>,
}

impl BatchSettings {
    /// Resolve the settings from the command-line arguments and the configuration file.
    ///
    /// Command-line values take precedence over the configuration file; exclusions from both
    /// sources are merged.
    pub(crate) fn resolve(args: BatchArgs, filesystem: Option<&FilesystemOptions>) -> Self {
        let BatchArgs {
            index,
            metadata_dir,
            output,
            exclude,
            concurrency,
        } = args;

        let exclude = exclude
            .iter()
            .chain(
                filesystem
                    .and_then(|options| options.exclude.as_ref())
                    .into_iter()
                    .flatten(),
            )
            .map(|name| normalize_name(name))
            .collect();

        Self {
            index,
            metadata_dir,
            output,
            exclude,
            concurrency: concurrency.or(filesystem.and_then(|options| options.concurrency)),
        }
    }

    /// Whether the project is left out of the batch.
    pub(crate) fn is_excluded(&self, project: &str) -> bool {
        self.exclude.contains(&normalize_name(project))
    }
}

/// Normalize a project name: lowercase, with runs of `-`, `_` and `.` collapsed into one `-`.
pub(crate) fn normalize_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut last_was_separator = false;
    for char in name.trim().chars() {
        if matches!(char, '-' | '_' | '.') {
            if !last_was_separator {
                normalized.push('-');
            }
            last_was_separator = true;
        } else {
            normalized.push(char.to_ascii_lowercase());
            last_was_separator = false;
        }
    }
    normalized
}
