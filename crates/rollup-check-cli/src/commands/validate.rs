use clap::Args;
use rust_decimal::Decimal;
use tracing::info;

use rollup_check_core::rollup::{
    validate_balance_sheet, BalanceSheet, RollupConfig, RollupReport, TOLERANCE,
};
use rollup_check_core::ComputationOutput;

use crate::input;

/// Path argument meaning "read the document from stdin".
const STDIN_PATH: &str = "-";

/// Arguments for a roll-up check
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Balance sheet document (.json, .yaml or .yml); `-` reads stdin
    pub file: String,

    /// Largest gap between a total and its items that still counts as a match
    #[arg(long, default_value_t = TOLERANCE, allow_negative_numbers = true)]
    pub tolerance: Decimal,
}

pub fn run_validate(
    args: &ValidateArgs,
) -> Result<ComputationOutput<RollupReport>, Box<dyn std::error::Error>> {
    let sheet: BalanceSheet = if args.file == STDIN_PATH {
        input::stdin::read_stdin()?.ok_or("no balance sheet piped on stdin")?
    } else {
        input::file::read_document(&args.file)?
    };
    info!(source = %args.file, "loaded balance sheet");

    let config = RollupConfig {
        tolerance: args.tolerance,
    };
    Ok(validate_balance_sheet(&sheet, &config)?)
}
