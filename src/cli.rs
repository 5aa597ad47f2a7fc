//! Command-line surface shared by the two binaries.

use clap::error::ErrorKind;
use clap::{Args, Parser};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::shared::error::ExitCode;

/// Arguments common to both reports
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CommonArgs {
    /// Path to a CycloneDX JSON SBOM
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./tidelift-sbom.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Look up the packages of an SBOM in the Tidelift catalog and write a CSV
/// of licenses, maintenance status and recommendations
#[derive(Parser, Debug)]
#[command(name = "tidelift-sbom-analyzer")]
#[command(version)]
#[command(about = "Write a CSV of Tidelift recommendations for the packages in a CycloneDX SBOM", long_about = None)]
pub struct AnalyzerArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Look up the releases of an SBOM in the Tidelift catalog and write their
/// violations as JSON
#[derive(Parser, Debug)]
#[command(name = "tidelift-sbom-reporter")]
#[command(about = "Write a JSON report of Tidelift violations for the releases in a CycloneDX SBOM", long_about = None)]
pub struct ReporterArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Parses the process arguments, exiting on failure.
///
/// `--help` and `--version` exit with [`ExitCode::Success`]; any usage
/// error exits with [`ExitCode::InvalidArguments`].
pub fn parse_or_exit<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            // Printing can only fail if stderr/stdout is closed
            let _ = err.print();
            process::exit(code.as_i32());
        }
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins over the `--debug` flag when set.
pub fn init_logging(debug: bool) {
    let log_level = if debug { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Prints an error with its cause chain and exits with the matching code
pub fn exit_with_error(e: anyhow::Error) -> ! {
    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);

    for cause in e.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
    process::exit(ExitCode::for_error(&e).as_i32());
}
