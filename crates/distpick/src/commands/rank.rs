use std::fmt::Write;
use std::io::Write as _;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::cli::RankArgs;
use crate::commands::ExitStatus;
use crate::metadata::ProjectMetadata;
use crate::printer::Printer;

/// Print every alternative of one project, most preferred first.
pub(crate) fn rank(args: &RankArgs, printer: Printer) -> Result<ExitStatus> {
    let metadata = ProjectMetadata::read(&args.metadata)?;
    let version = metadata.target_version(args.target_version.as_deref())?;

    let ranking = distpick_select::rank(version, &metadata.files);

    let mut stdout = std::io::stdout().lock();
    for (position, alternative) in ranking.alternatives.iter().enumerate() {
        let tags = alternative
            .tags
            .as_ref()
            .map_or_else(|| "source".to_string(), ToString::to_string);
        writeln!(
            stdout,
            "{}. {} [{tags}] ({})",
            position + 1,
            alternative.candidate.filename,
            alternative.key
        )?;
    }

    for skipped in &ranking.skipped {
        writeln!(
            printer.stderr(),
            "{}: {}",
            "warning".yellow().bold(),
            skipped.error
        )?;
    }

    if ranking.alternatives.is_empty() {
        writeln!(
            printer.stderr(),
            "{}: `{}` has no distribution for version `{version}`",
            "error".red().bold(),
            metadata.name.cyan()
        )?;
        return Ok(ExitStatus::Failure);
    }

    Ok(ExitStatus::Success)
}
