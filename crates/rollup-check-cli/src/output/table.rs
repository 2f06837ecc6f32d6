use rollup_check_core::rollup::RollupReport;
use rollup_check_core::ComputationOutput;
use tabled::{builder::Builder, Table};

use super::format_amount;
use super::text::ALL_MATCH;

/// Format discrepancies as a table using the tabled crate.
pub fn print_table(output: &ComputationOutput<RollupReport>) {
    let report = &output.result;
    match build_table(report) {
        Some(table) => println!("{}", table),
        None => println!("{}", ALL_MATCH),
    }

    println!(
        "\nSections checked: {} | Summary lines: {} | Leaf lines: {}",
        if report.sections_checked.is_empty() {
            "none".to_string()
        } else {
            report.sections_checked.join(", ")
        },
        report.parent_nodes_checked,
        report.leaf_nodes
    );

    if !output.warnings.is_empty() {
        println!("\nWarnings:");
        for w in &output.warnings {
            println!("  - {}", w);
        }
    }

    println!("\nMethodology: {}", output.methodology);
}

fn build_table(report: &RollupReport) -> Option<Table> {
    if report.discrepancies.is_empty() {
        return None;
    }

    let mut builder = Builder::default();
    builder.push_record(["Path", "Expected", "Calculated", "Difference"]);
    for d in &report.discrepancies {
        builder.push_record([
            d.path.clone(),
            format_amount(d.expected),
            format_amount(d.calculated),
            format_amount(d.difference),
        ]);
    }
    Some(Table::from(builder))
}
