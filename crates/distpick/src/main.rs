use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::instrument;

use crate::cli::{Cli, Commands};
use crate::commands::ExitStatus;
use crate::printer::Printer;
use crate::settings::BatchSettings;

mod cli;
mod commands;
mod logging;
mod metadata;
mod printer;
mod settings;

#[instrument(skip_all)]
fn run(cli: Cli) -> Result<ExitStatus> {
    let filesystem = settings::load(&cli.global_args)?;

    // Configure the `Printer`, which controls user-facing output in the CLI.
    let printer = if cli.global_args.quiet {
        Printer::Quiet
    } else if cli.global_args.verbose > 0 {
        Printer::Verbose
    } else {
        Printer::Default
    };

    match cli.command {
        Commands::Select(args) => commands::select(&args, printer),
        Commands::Rank(args) => commands::rank(&args, printer),
        Commands::Batch(args) => {
            let settings = BatchSettings::resolve(args, filesystem.as_ref());
            commands::batch(&settings, printer)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Configure the output colors before anything is written.
    anstream::ColorChoice::write_global(cli.global_args.color.into());

    // Configure the `tracing` crate, which controls internal logging.
    let result = logging::setup_logging(logging::Level::from_verbosity(cli.global_args.verbose))
        .and_then(|()| run(cli));

    match result {
        Ok(code) => code.into(),
        Err(err) => {
            #[allow(clippy::print_stderr)]
            {
                let mut causes = err.chain();
                if let Some(err) = causes.next() {
                    anstream::eprintln!("{}: {}", "error".red().bold(), err);
                }
                for err in causes {
                    anstream::eprintln!("  {}: {}", "Caused by".red().bold(), err);
                }
            }
            ExitStatus::Error.into()
        }
    }
}
