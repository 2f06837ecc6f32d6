use rollup_check_core::rollup::RollupReport;

use super::format_amount;

pub const HEADER: &str = "Discrepancies found:";
pub const ALL_MATCH: &str = "All roll-ups match.";

/// Plain-text report, one discrepancy per line.
pub fn render_text(report: &RollupReport) -> String {
    if report.discrepancies.is_empty() {
        return format!("{}\n", ALL_MATCH);
    }

    let mut out = format!("{}\n", HEADER);
    for d in &report.discrepancies {
        out.push_str(&format!(
            "Path: {}, Expected: {}, Calculated: {}, Difference: {}\n",
            d.path,
            format_amount(d.expected),
            format_amount(d.calculated),
            format_amount(d.difference)
        ));
    }
    out
}

pub fn print_text(report: &RollupReport) {
    print!("{}", render_text(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollup_check_core::rollup::Discrepancy;
    use rust_decimal_macros::dec;

    fn report(discrepancies: Vec<Discrepancy>) -> RollupReport {
        RollupReport {
            all_match: discrepancies.is_empty(),
            discrepancies,
            sections_checked: vec!["ASSETS".into()],
            sections_skipped: vec![],
            parent_nodes_checked: 1,
            leaf_nodes: 2,
        }
    }

    #[test]
    fn test_all_match() {
        assert_eq!(render_text(&report(vec![])), "All roll-ups match.\n");
    }

    #[test]
    fn test_discrepancy_lines() {
        let text = render_text(&report(vec![
            Discrepancy {
                path: "ASSETS/Total".into(),
                expected: dec!(100),
                calculated: dec!(90),
                difference: dec!(-10),
            },
            Discrepancy {
                path: "EQUITY/Total/Reserves".into(),
                expected: dec!(12.50),
                calculated: dec!(12.75),
                difference: dec!(0.25),
            },
        ]));
        assert_eq!(
            text,
            "Discrepancies found:\n\
             Path: ASSETS/Total, Expected: 100.0, Calculated: 90.0, Difference: -10.0\n\
             Path: EQUITY/Total/Reserves, Expected: 12.5, Calculated: 12.75, Difference: 0.25\n"
        );
    }
}
