use std::fmt::Write;
use std::io::{BufWriter, Write as _};
use std::time::Instant;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rayon::prelude::*;
use tracing::{debug, info_span};

use distpick_select::Selection;

use crate::commands::{ExitStatus, Record, elapsed};
use crate::metadata::{ProjectMetadata, TopPackage, TopPackages};
use crate::printer::Printer;
use crate::settings::BatchSettings;

/// The result of processing one project of the batch.
enum Outcome {
    Selected(Selection),
    Excluded,
    /// The project's detail document is missing or unreadable.
    Missing(anyhow::Error),
    /// The project's detail document isn't a valid PEP 691 document.
    Invalid(anyhow::Error),
    Unavailable(anyhow::Error),
}

/// Select the most preferred file of every project in the top-packages list.
///
/// Projects are processed in parallel; records are written in the order of the list.
pub(crate) fn batch(settings: &BatchSettings, printer: Printer) -> Result<ExitStatus> {
    let start = Instant::now();
    let top = TopPackages::read(&settings.index)?;
    debug!("Loaded {} project(s) from `{}`", top.rows.len(), settings.index.display());

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(concurrency) = settings.concurrency {
        builder = builder.num_threads(concurrency.get());
    }
    let pool = builder
        .build()
        .context("Failed to build the worker thread pool")?;

    let outcomes: Vec<Outcome> = pool.install(|| {
        top.rows
            .par_iter()
            .map(|package| process(package, settings))
            .collect()
    });

    let mut writer: Box<dyn std::io::Write> = match &settings.output {
        Some(output) => Box::new(BufWriter::new(fs_err::File::create(output)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    };

    let mut selected = 0usize;
    let mut excluded = 0usize;
    let mut missing = 0usize;
    let mut invalid = 0usize;
    let mut unavailable = 0usize;
    for (package, outcome) in top.rows.iter().zip(&outcomes) {
        match outcome {
            Outcome::Selected(selection) => {
                let record = Record::new(&package.project, selection)
                    .with_downloads(package.download_count)
                    .without_skipped();
                serde_json::to_writer(&mut writer, &record)
                    .with_context(|| format!("Failed to write the record of `{}`", package.project))?;
                writeln!(writer)?;
                selected += 1;
            }
            Outcome::Excluded => excluded += 1,
            Outcome::Missing(err) => {
                warn_skipped(printer, package, err)?;
                missing += 1;
            }
            Outcome::Invalid(err) => {
                warn_skipped(printer, package, err)?;
                invalid += 1;
            }
            Outcome::Unavailable(err) => {
                warn_skipped(printer, package, err)?;
                unavailable += 1;
            }
        }
    }
    writer.flush()?;

    writeln!(
        printer.stderr(),
        "{}",
        format!(
            "Selected {selected} of {} project(s) in {} ({excluded} excluded, {missing} missing, {invalid} invalid, {unavailable} unavailable)",
            top.rows.len(),
            elapsed(start.elapsed())
        )
        .dimmed()
    )?;

    Ok(ExitStatus::Success)
}

fn process(package: &TopPackage, settings: &BatchSettings) -> Outcome {
    let _span = info_span!("process", project = package.project.as_str()).entered();

    if settings.is_excluded(&package.project) {
        debug!("Excluding `{}`", package.project);
        return Outcome::Excluded;
    }

    let path = settings
        .metadata_dir
        .join(format!("{}.json", package.project));
    let metadata = match ProjectMetadata::read(&path) {
        Ok(metadata) => metadata,
        // Read failures surface as I/O errors, parse failures as JSON errors.
        Err(err) if err.downcast_ref::<std::io::Error>().is_some() => {
            return Outcome::Missing(err);
        }
        Err(err) => return Outcome::Invalid(err),
    };
    let version = match metadata.target_version(None) {
        Ok(version) => version,
        Err(err) => return Outcome::Unavailable(err),
    };

    match distpick_select::select(version, &metadata.files) {
        Ok(selection) => Outcome::Selected(selection),
        Err(err) => {
            debug!("No usable file for `{}`: {err}", package.project);
            Outcome::Unavailable(anyhow::Error::new(err))
        }
    }
}

fn warn_skipped(printer: Printer, package: &TopPackage, err: &anyhow::Error) -> std::fmt::Result {
    writeln!(
        printer.stderr(),
        "{}: Skipping `{}`: {}",
        "warning".yellow().bold(),
        package.project.cyan(),
        format_chain(err)
    )
}

/// Render an error and its causes on one line.
fn format_chain(err: &anyhow::Error) -> String {
    err.chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ")
}
