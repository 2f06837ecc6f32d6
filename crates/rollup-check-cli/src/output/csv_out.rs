use rollup_check_core::rollup::RollupReport;
use std::io;

/// Write discrepancies as CSV to stdout.
pub fn print_csv(report: &RollupReport) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), report) {
        eprintln!("CSV write error: {}", e);
    }
}

/// One row per discrepancy, header always present.
pub fn write_csv<W: io::Write>(writer: W, report: &RollupReport) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["path", "expected", "calculated", "difference"])?;
    for d in &report.discrepancies {
        wtr.write_record([
            d.path.as_str(),
            &d.expected.normalize().to_string(),
            &d.calculated.normalize().to_string(),
            &d.difference.normalize().to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
