//! scaffold-check - Entry Point
//!
//! Verifies that a repository carries its required directories and files.

use clap::{Parser, ValueEnum};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

use scaffold_check::config::CheckerConfig;
use scaffold_check::error::handlers::{EXIT_OK, error_to_exit_code, handle_error};
use scaffold_check::utils::logging::setup_logging;
use scaffold_check::{CheckSelection, CheckSuite, ScaffoldError};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Check {
    Structure,
    Docs,
    All,
}

impl From<Check> for CheckSelection {
    fn from(check: Check) -> Self {
        match check {
            Check::Structure => CheckSelection::Structure,
            Check::Docs => CheckSelection::Docs,
            Check::All => CheckSelection::All,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "scaffold-check", version, about = "Verify required repository layout")]
struct Cli {
    /// Which check to run
    #[arg(value_enum, default_value = "all")]
    check: Check,

    /// Configuration file; defaults to an optional ./scaffold-check.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base directory, overriding the configured one
    #[arg(short, long)]
    base: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_logging();

    let cli = Cli::parse();
    let code = match run(cli).await {
        Ok(()) => EXIT_OK,
        Err(e) => {
            handle_error(&e);
            error_to_exit_code(&e)
        }
    };

    ExitCode::from(code as u8)
}

async fn run(cli: Cli) -> Result<(), ScaffoldError> {
    let mut config = CheckerConfig::load(cli.config.as_deref())?;
    if let Some(base) = cli.base {
        config = config.with_base_path(base)?;
    }

    info!("Loaded checklist with {} entries", config.entries.len());

    let suite = CheckSuite::new(config);
    let report = suite.run(cli.check.into()).await?;

    for check in &report.reports {
        for line in check.render() {
            println!("{}", line);
        }
    }

    report.verdict()
}
