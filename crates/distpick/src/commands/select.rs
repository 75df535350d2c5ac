use std::fmt::Write;
use std::io::Write as _;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use tracing::debug;

use crate::cli::SelectArgs;
use crate::commands::{ExitStatus, Record};
use crate::metadata::ProjectMetadata;
use crate::printer::Printer;

/// Select the most preferred file of one project and print it as JSON.
pub(crate) fn select(args: &SelectArgs, printer: Printer) -> Result<ExitStatus> {
    let metadata = ProjectMetadata::read(&args.metadata)?;
    let version = metadata.target_version(args.target_version.as_deref())?;
    debug!(
        "Selecting among {} file(s) of `{}` for version {version}",
        metadata.files.len(),
        metadata.name
    );

    let selection = match distpick_select::select(version, &metadata.files) {
        Ok(selection) => selection,
        Err(err) => {
            writeln!(
                printer.stderr(),
                "{}: `{}` has no usable file: {err}",
                "error".red().bold(),
                metadata.name.cyan()
            )?;
            return Ok(ExitStatus::Failure);
        }
    };

    let record = Record::new(&metadata.name, &selection);
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, &record).context("Failed to write the selection")?;
    writeln!(stdout)?;

    Ok(ExitStatus::Success)
}
