//! Portfolio item model.

use serde::{Deserialize, Serialize};

/// Fixed description shown under every portfolio row.
pub const ITEM_DESCRIPTION: &str = "Item of the portfolio";

/// One entry of the portfolio list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortfolioItem {
    /// Display label, shown bold
    pub label: String,
    /// Description line under the label
    pub description: String,
}

impl PortfolioItem {
    /// Create an item with the fixed description line.
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), description: ITEM_DESCRIPTION.to_string() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_fixed_description() {
        let item = PortfolioItem::new("Project1");
        assert_eq!(item.label, "Project1");
        assert_eq!(item.description, ITEM_DESCRIPTION);
    }

    #[test]
    fn test_serde_round_trip_preserves_order() {
        let items: Vec<PortfolioItem> = ["Project1", "Project2", "Project3", "Project 4"]
            .into_iter()
            .map(PortfolioItem::new)
            .collect();

        let json = serde_json::to_string(&items).unwrap();
        let back: Vec<PortfolioItem> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.len(), items.len());
        assert_eq!(back, items);
    }
}
