pub mod csv_out;
pub mod json;
pub mod table;
pub mod text;

use rollup_check_core::rollup::RollupReport;
use rollup_check_core::{ComputationOutput, Money};

use crate::OutputFormat;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, output: &ComputationOutput<RollupReport>) {
    match format {
        OutputFormat::Text => text::print_text(&output.result),
        OutputFormat::Json => json::print_json(output),
        OutputFormat::Table => table::print_table(output),
        OutputFormat::Csv => csv_out::print_csv(&output.result),
    }
}

/// Render an amount the way plain float output reads: no trailing zeros,
/// but integral amounts keep a single decimal place ("100.0").
pub fn format_amount(amount: Money) -> String {
    let s = amount.normalize().to_string();
    if s.contains('.') {
        s
    } else {
        format!("{s}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(dec!(100)), "100.0");
        assert_eq!(format_amount(dec!(100.00)), "100.0");
        assert_eq!(format_amount(dec!(-10)), "-10.0");
        assert_eq!(format_amount(dec!(12.50)), "12.5");
        assert_eq!(format_amount(dec!(0.25)), "0.25");
        assert_eq!(format_amount(dec!(0)), "0.0");
        assert_eq!(format_amount(dec!(-0.00)), "0.0");
    }
}
