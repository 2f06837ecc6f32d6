use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::types::Money;

/// Label used for line items that carry no `name`.
pub const UNKNOWN_NAME: &str = "Unknown";

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// One line item in a statement tree. Every field is optional in the source
/// document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialNode {
    /// Display label, e.g. "Cash and equivalents". Numeric and boolean
    /// labels are kept as their text.
    #[serde(
        default,
        deserialize_with = "deserialize_name",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Declared amount, kept raw so malformed entries can degrade to zero
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
    /// Constituent line items; absent, null or empty means a leaf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<FinancialNode>>,
}

impl FinancialNode {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_NAME)
    }

    pub fn children(&self) -> &[FinancialNode] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

fn deserialize_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "invalid line item name {other}, expected a string, number or boolean"
        ))),
    }
}

/// Top-level statement sections, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Assets,
    Liabilities,
    Equity,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Assets, Section::Liabilities, Section::Equity];

    /// Key of the section in the source document.
    pub fn key(self) -> &'static str {
        match self {
            Section::Assets => "assets",
            Section::Liabilities => "liabilities",
            Section::Equity => "equity",
        }
    }

    /// Root segment of every discrepancy path within the section.
    pub fn label(self) -> &'static str {
        match self {
            Section::Assets => "ASSETS",
            Section::Liabilities => "LIABILITIES",
            Section::Equity => "EQUITY",
        }
    }
}

/// A balance sheet document. Sections may be missing; unrelated top-level
/// keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BalanceSheet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<FinancialNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liabilities: Option<FinancialNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equity: Option<FinancialNode>,
}

impl BalanceSheet {
    pub fn section(&self, section: Section) -> Option<&FinancialNode> {
        match section {
            Section::Assets => self.assets.as_ref(),
            Section::Liabilities => self.liabilities.as_ref(),
            Section::Equity => self.equity.as_ref(),
        }
    }

    /// Present sections in reporting order.
    pub fn sections(&self) -> impl Iterator<Item = (Section, &FinancialNode)> {
        Section::ALL
            .into_iter()
            .filter_map(move |s| self.section(s).map(|root| (s, root)))
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// A summary line whose declared value disagrees with its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    /// Slash-delimited ancestry, e.g. "ASSETS/Total/Current"
    pub path: String,
    /// The node's own declared value
    pub expected: Money,
    /// Sum of the immediate children's declared values
    pub calculated: Money,
    /// calculated - expected, rounded to cents
    pub difference: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_use_defaults() {
        let node: FinancialNode = serde_json::from_value(json!({})).unwrap();
        assert_eq!(node.name(), "Unknown");
        assert!(node.value.is_null());
        assert!(node.is_leaf());
    }

    #[test]
    fn test_null_items_is_leaf() {
        let node: FinancialNode =
            serde_json::from_value(json!({"name": "Cash", "value": "5", "items": null})).unwrap();
        assert!(node.is_leaf());
        let empty: FinancialNode =
            serde_json::from_value(json!({"name": "Cash", "items": []})).unwrap();
        assert!(empty.is_leaf());
    }

    #[test]
    fn test_scalar_names_kept_as_text() {
        let node: FinancialNode = serde_json::from_value(json!({"name": 5})).unwrap();
        assert_eq!(node.name(), "5");
        let node: FinancialNode = serde_json::from_value(json!({"name": 2.5})).unwrap();
        assert_eq!(node.name(), "2.5");
        let node: FinancialNode = serde_json::from_value(json!({"name": true})).unwrap();
        assert_eq!(node.name(), "true");
        let node: FinancialNode = serde_json::from_value(json!({"name": null})).unwrap();
        assert_eq!(node.name(), "Unknown");
    }

    #[test]
    fn test_composite_name_is_structural_error() {
        let result: Result<FinancialNode, _> =
            serde_json::from_value(json!({"name": ["Cash"], "value": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_extra_fields_ignored() {
        let node: FinancialNode = serde_json::from_value(json!({
            "name": "AR",
            "value": 10,
            "currency": "USD",
            "note": "net of allowance"
        }))
        .unwrap();
        assert_eq!(node.name(), "AR");
        assert_eq!(node.value, json!(10));
    }

    #[test]
    fn test_nested_children_keep_order() {
        let node: FinancialNode = serde_json::from_value(json!({
            "name": "Total",
            "items": [{"name": "B"}, {"name": "A"}, {"name": "C"}]
        }))
        .unwrap();
        let names: Vec<&str> = node.children().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_non_object_child_is_structural_error() {
        let result: Result<FinancialNode, _> =
            serde_json::from_value(json!({"name": "Total", "items": ["Cash"]}));
        assert!(result.is_err());
    }

    #[test]
    fn test_balance_sheet_sections_in_order() {
        let sheet: BalanceSheet = serde_json::from_value(json!({
            "equity": {"name": "E"},
            "meta": {"company": "Acme"},
            "assets": {"name": "A"}
        }))
        .unwrap();
        let found: Vec<Section> = sheet.sections().map(|(s, _)| s).collect();
        assert_eq!(found, vec![Section::Assets, Section::Equity]);
        assert!(sheet.section(Section::Liabilities).is_none());
    }

    #[test]
    fn test_null_section_is_absent() {
        let sheet: BalanceSheet =
            serde_json::from_value(json!({"assets": null, "equity": {"name": "E"}})).unwrap();
        assert!(sheet.assets.is_none());
        assert_eq!(sheet.sections().count(), 1);
    }

    #[test]
    fn test_section_labels() {
        for section in Section::ALL {
            assert_eq!(section.label(), section.key().to_uppercase());
        }
    }
}
