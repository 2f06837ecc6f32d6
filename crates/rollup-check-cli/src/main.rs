mod commands;
mod input;
mod output;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::validate::ValidateArgs;

/// Check that every summary line of a balance sheet equals the sum of its items
#[derive(Parser, Debug)]
#[command(
    name = "rollup-check",
    version,
    about = "Check balance sheet roll-ups",
    long_about = "Walks the assets, liabilities and equity trees of a balance sheet \
                  document and reports every line item whose declared value differs \
                  from the sum of its children's declared values."
)]
struct Cli {
    #[command(flatten)]
    args: ValidateArgs,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    output: OutputFormat,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Table,
    Csv,
}

/// Exit status for a malformed command line.
const USAGE_EXIT_CODE: i32 = 1;

/// Exit status and stdout message for a command-line error, or `None` for
/// help and version requests, which clap handles itself.
fn usage_failure(e: &clap::Error) -> Option<(i32, String)> {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some((USAGE_EXIT_CODE, e.render().to_string())),
    }
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match usage_failure(&e) {
            Some((code, message)) => {
                print!("{}", message);
                process::exit(code);
            }
            None => e.exit(),
        },
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = parse_cli();
    init_tracing();

    match commands::validate::run_validate(&cli.args) {
        Ok(result) => {
            output::format_output(&cli.output, &result);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
