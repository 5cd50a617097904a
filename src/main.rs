mod commands;
mod render;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use owo_colors::OwoColorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::CredentialArgs;

#[derive(Parser)]
#[command(name = "animecal")]
#[command(about = "Keep an anime air-date calendar tidy and decorated with episode artwork")]
struct Cli {
    /// Log lookups and repairs (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct FileArgs {
    /// Calendar file to operate on
    #[arg(short = 'f', long = "ics-file", default_value = "main.ics")]
    ics_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Attach TMDB artwork to every episode in the calendar
    Images {
        #[command(flatten)]
        file: FileArgs,
        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// Remove duplicate IMAGE lines
    FixImages {
        #[command(flatten)]
        file: FileArgs,
    },
    /// Remove malformed lines and duplicate images, stamp LAST-MODIFIED, then validate
    Cleanup {
        #[command(flatten)]
        file: FileArgs,
    },
    /// Check the calendar for missing properties and bad dates
    Validate {
        #[command(flatten)]
        file: FileArgs,
    },
    /// Write a copy of the calendar tuned for Outlook subscriptions
    Outlook {
        #[command(flatten)]
        file: FileArgs,

        /// Where to write the optimized calendar
        #[arg(short, long, default_value = "main_outlook.ics")]
        output: PathBuf,
    },
    /// Stamp, update images (when credentials are set) and validate
    Refresh {
        #[command(flatten)]
        file: FileArgs,
        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// Print the artwork TMDB has for a show as JSON
    Artwork {
        title: String,
        season: Option<u32>,
        episode: Option<u32>,
        #[command(flatten)]
        credentials: CredentialArgs,
    },
    /// Show configuration paths and which credentials are set
    Config,
}

fn main() -> ExitCode {
    // Existing environment variables win over .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Returns whether the command succeeded. Only validation can "fail"
/// without an error.
fn run(cli: Cli) -> Result<bool> {
    let verbose = cli.verbose;

    match cli.command {
        Commands::Images { file, credentials } => {
            commands::images::run(&file.ics_file, &credentials, verbose)?;
            Ok(true)
        }
        Commands::FixImages { file } => {
            commands::fix_images::run(&file.ics_file)?;
            Ok(true)
        }
        Commands::Cleanup { file } => commands::cleanup::run(&file.ics_file),
        Commands::Validate { file } => commands::validate::run(&file.ics_file),
        Commands::Outlook { file, output } => {
            commands::outlook::run(&file.ics_file, &output)?;
            Ok(true)
        }
        Commands::Refresh { file, credentials } => {
            commands::refresh::run(&file.ics_file, &credentials, verbose)
        }
        Commands::Artwork {
            title,
            season,
            episode,
            credentials,
        } => {
            commands::artwork::run(&title, season, episode, &credentials)?;
            Ok(true)
        }
        Commands::Config => {
            commands::config::run()?;
            Ok(true)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "animecal=debug,animecal_core=debug,animecal_provider_tmdb=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
