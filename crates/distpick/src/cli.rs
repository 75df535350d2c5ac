use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "distpick", author, version)]
#[command(about = "Pick the most preferred distribution file for each package.")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    #[command(flatten)]
    pub(crate) global_args: GlobalArgs,
}

#[derive(Args, Debug, Clone)]
#[command(next_help_heading = "Global options")]
pub(crate) struct GlobalArgs {
    /// Do not print any summaries to stderr.
    #[arg(global = true, long, short, conflicts_with = "verbose")]
    pub(crate) quiet: bool,

    /// Use verbose output.
    ///
    /// Pass twice to print every ranked alternative in a hierarchical span tree. Log filters
    /// can be customized with the `RUST_LOG` environment variable.
    #[arg(global = true, action = clap::ArgAction::Count, long, short, conflicts_with = "quiet")]
    pub(crate) verbose: u8,

    /// Control colors in output.
    #[arg(
        long,
        default_value = "auto",
        value_name = "COLOR_CHOICE",
        global = true,
        value_enum
    )]
    pub(crate) color: ColorChoice,

    /// The path to a `distpick.toml` file to use for configuration.
    #[arg(global = true, long, env = "DISTPICK_CONFIG_FILE")]
    pub(crate) config_file: Option<PathBuf>,

    /// Avoid discovering a `distpick.toml` file in the current directory or its ancestors.
    #[arg(global = true, long, conflicts_with = "config_file")]
    pub(crate) no_config: bool,
}

#[derive(Debug, Copy, Clone, ValueEnum)]
pub(crate) enum ColorChoice {
    /// Enables colored output only when the output is going to a terminal or TTY with support.
    Auto,
    /// Enables colored output regardless of the detected environment.
    Always,
    /// Disables colored output.
    Never,
}

impl From<ColorChoice> for anstream::ColorChoice {
    fn from(value: ColorChoice) -> Self {
        match value {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Select the most preferred distribution file of one project.
    ///
    /// Reads a PEP 691 project detail document and prints the selected file as JSON.
    Select(SelectArgs),
    /// Print every alternative of one project, most preferred first.
    Rank(RankArgs),
    /// Select the most preferred distribution file for every project of a top-packages list.
    Batch(BatchArgs),
}

#[derive(Args)]
pub(crate) struct SelectArgs {
    /// The project detail document, or `-` to read it from stdin.
    pub(crate) metadata: PathBuf,

    /// The version to select a file for.
    ///
    /// Defaults to the last entry of the document's `versions` list.
    #[arg(long)]
    pub(crate) target_version: Option<String>,
}

#[derive(Args)]
pub(crate) struct RankArgs {
    /// The project detail document, or `-` to read it from stdin.
    pub(crate) metadata: PathBuf,

    /// The version to rank files for.
    ///
    /// Defaults to the last entry of the document's `versions` list.
    #[arg(long)]
    pub(crate) target_version: Option<String>,
}

#[derive(Args)]
pub(crate) struct BatchArgs {
    /// The top-packages list, as `{"rows": [{"project": ..., "download_count": ...}]}`.
    #[arg(long)]
    pub(crate) index: PathBuf,

    /// The directory holding one `<project>.json` detail document per project.
    #[arg(long)]
    pub(crate) metadata_dir: PathBuf,

    /// Write the selected files as JSON lines to this file instead of stdout.
    #[arg(long, short)]
    pub(crate) output: Option<PathBuf>,

    /// Additional projects to leave out of the batch.
    ///
    /// Merged with the `exclude` list of the configuration file.
    #[arg(long, value_delimiter = ',')]
    pub(crate) exclude: Vec<String>,

    /// The number of projects to process in parallel.
    ///
    /// Defaults to the number of available CPUs.
    #[arg(long, env = "DISTPICK_CONCURRENCY")]
    pub(crate) concurrency: Option<NonZeroUsize>,
}
