//! Roll-up verification for hierarchical balance sheets.
//!
//! A balance sheet is three independent trees (assets, liabilities, equity).
//! Every summary line must equal the sum of its immediate children's declared
//! values within a tolerance. Each level is checked against its children's
//! stated figures only, so an error at one level never compounds into the
//! levels above it.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

pub mod node;
pub mod validator;
pub mod value;

pub use node::{BalanceSheet, Discrepancy, FinancialNode, Section};
pub use validator::{
    validate_balance_sheet, RollupConfig, RollupReport, RollupValidator, TOLERANCE,
};
pub use value::{parse_value, try_parse_value};
