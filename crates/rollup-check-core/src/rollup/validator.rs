use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, trace};

use crate::error::RollupError;
use crate::rollup::node::{BalanceSheet, Discrepancy, FinancialNode, Section};
use crate::rollup::value::{parse_value, try_parse_value};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::RollupResult;

/// Largest absolute gap between a declared total and its children's sum
/// that still counts as a match.
pub const TOLERANCE: Decimal = dec!(0.001);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Settings for a roll-up run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollupConfig {
    /// Maximum allowed |calculated - expected| before a node is flagged
    pub tolerance: Decimal,
}

impl Default for RollupConfig {
    fn default() -> Self {
        Self {
            tolerance: TOLERANCE,
        }
    }
}

/// Result of validating a whole balance sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollupReport {
    /// Mismatches in section order, pre-order within each section
    pub discrepancies: Vec<Discrepancy>,
    /// Labels of the sections present in the document
    pub sections_checked: Vec<String>,
    /// Labels of the sections absent from the document
    pub sections_skipped: Vec<String>,
    /// Number of summary (non-leaf) lines compared against their children
    pub parent_nodes_checked: usize,
    pub leaf_nodes: usize,
    pub all_match: bool,
}

// ---------------------------------------------------------------------------
// Validator
// ---------------------------------------------------------------------------

/// Walks statement trees top-down and collects roll-up mismatches.
#[derive(Debug, Clone, Copy)]
pub struct RollupValidator {
    tolerance: Decimal,
}

impl Default for RollupValidator {
    fn default() -> Self {
        Self::new(TOLERANCE)
    }
}

impl RollupValidator {
    pub fn new(tolerance: Decimal) -> Self {
        Self { tolerance }
    }

    pub fn tolerance(&self) -> Decimal {
        self.tolerance
    }

    /// Check `node` and all of its descendants.
    ///
    /// `path` is the ancestry up to, but not including, `node`. Each summary
    /// line is compared with the declared values of its immediate children,
    /// never with their recomputed roll-ups, and the walk continues below a
    /// mismatch. Leaves are not checked.
    pub fn check(&self, node: &FinancialNode, path: &str) -> Vec<Discrepancy> {
        let current_path = format!("{}/{}", path, node.name());
        let children = node.children();
        if children.is_empty() {
            return Vec::new();
        }

        let node_value = parse_value(&node.value);
        let children_sum = saturating_sum(children.iter().map(|c| parse_value(&c.value)));
        let difference = children_sum.saturating_sub(node_value);
        trace!(path = %current_path, %node_value, %children_sum, "checking roll-up");

        let mut errors = Vec::new();
        if difference.abs() > self.tolerance {
            let discrepancy = Discrepancy {
                path: current_path.clone(),
                expected: node_value,
                calculated: children_sum,
                difference: difference.round_dp(2),
            };
            debug!(
                path = %discrepancy.path,
                expected = %discrepancy.expected,
                calculated = %discrepancy.calculated,
                "roll-up mismatch"
            );
            errors.push(discrepancy);
        }

        for child in children {
            errors.extend(self.check(child, &current_path));
        }
        errors
    }

    /// Check every present section, in the order assets, liabilities, equity.
    pub fn validate(&self, sheet: &BalanceSheet) -> Vec<Discrepancy> {
        sheet
            .sections()
            .flat_map(|(section, root)| {
                debug!(section = section.key(), "validating section");
                self.check(root, section.label())
            })
            .collect()
    }
}

/// Sum amounts, pinning the total at `Decimal::MAX` / `Decimal::MIN` from the
/// first overflow on.
fn saturating_sum(mut amounts: impl Iterator<Item = Money>) -> Money {
    amounts
        .try_fold(Decimal::ZERO, |acc, amount| {
            acc.checked_add(amount).ok_or(if amount.is_sign_negative() {
                Decimal::MIN
            } else {
                Decimal::MAX
            })
        })
        .unwrap_or_else(|saturated| saturated)
}

// ---------------------------------------------------------------------------
// Tree statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct TreeTally {
    parents: usize,
    leaves: usize,
    unparsable: Vec<String>,
}

fn tally(node: &FinancialNode, path: &str, acc: &mut TreeTally) {
    let current_path = format!("{}/{}", path, node.name());
    if !node.value.is_null() && try_parse_value(&node.value).is_none() {
        acc.unparsable.push(current_path.clone());
    }
    if node.is_leaf() {
        acc.leaves += 1;
        return;
    }
    acc.parents += 1;
    for child in node.children() {
        tally(child, &current_path, acc);
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Validate all roll-ups of a balance sheet and wrap the findings in the
/// standard output envelope.
pub fn validate_balance_sheet(
    sheet: &BalanceSheet,
    config: &RollupConfig,
) -> RollupResult<ComputationOutput<RollupReport>> {
    let start = Instant::now();

    if config.tolerance < Decimal::ZERO {
        return Err(RollupError::InvalidInput {
            field: "tolerance".into(),
            reason: "Tolerance must be non-negative".into(),
        });
    }

    let validator = RollupValidator::new(config.tolerance);
    let discrepancies = validator.validate(sheet);

    let mut warnings: Vec<String> = Vec::new();
    let mut tree = TreeTally::default();
    let mut sections_checked = Vec::new();
    let mut sections_skipped = Vec::new();
    for section in Section::ALL {
        match sheet.section(section) {
            Some(root) => {
                tally(root, section.label(), &mut tree);
                sections_checked.push(section.label().to_string());
            }
            None => {
                warnings.push(format!("Section '{}' not present; skipped", section.key()));
                sections_skipped.push(section.label().to_string());
            }
        }
    }
    for path in &tree.unparsable {
        warnings.push(format!("Value at {path} is not numeric; treated as 0"));
    }

    let report = RollupReport {
        all_match: discrepancies.is_empty(),
        discrepancies,
        sections_checked,
        sections_skipped,
        parent_nodes_checked: tree.parents,
        leaf_nodes: tree.leaves,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Roll-up check: each summary line equals the sum of its immediate children's declared values",
        config,
        warnings,
        elapsed,
        report,
    ))
}
