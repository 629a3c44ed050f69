use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockline_core::{CompanyId, RecordId};

/// Product category of an inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Apparel,
    Groceries,
    Books,
    #[serde(rename = "Home Goods")]
    HomeGoods,
}

/// One point in an item's stock history.
///
/// The history is append-only: every stock adjustment adds exactly one entry
/// with the post-adjustment quantity, and entries are never removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockHistoryEntry {
    pub at: DateTime<Utc>,
    pub quantity: i64,
}

/// A catalog item with live stock quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: RecordId,
    pub name: String,
    pub sku: String,
    pub category: Category,
    pub supplier: String,
    pub cost: f64,
    pub price: f64,
    pub quantity: i64,
    pub last_updated: DateTime<Utc>,
    pub history: Vec<StockHistoryEntry>,
    pub company_id: CompanyId,
}

impl InventoryItem {
    /// Build a freshly catalogued item.
    ///
    /// Seeds the history with a single entry at the opening quantity.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        sku: impl Into<String>,
        category: Category,
        supplier: impl Into<String>,
        cost: f64,
        price: f64,
        quantity: i64,
        company_id: CompanyId,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            sku: sku.into(),
            category,
            supplier: supplier.into(),
            cost,
            price,
            quantity,
            last_updated: at,
            history: vec![StockHistoryEntry { at, quantity }],
            company_id,
        }
    }

    /// Apply a stock adjustment.
    ///
    /// The quantity floors at zero (never negative). The add saturates, so
    /// extreme deltas clamp instead of wrapping. Appends one history entry
    /// with the post-adjustment quantity and refreshes `last_updated`.
    /// Returns the new quantity.
    pub fn apply_adjustment(&mut self, delta: i64, at: DateTime<Utc>) -> i64 {
        let new_quantity = self.quantity.saturating_add(delta).max(0);
        self.quantity = new_quantity;
        self.last_updated = at;
        self.history.push(StockHistoryEntry {
            at,
            quantity: new_quantity,
        });
        new_quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i64) -> InventoryItem {
        InventoryItem::new(
            RecordId::generate("INV"),
            "Wireless Mouse",
            "WM-042",
            Category::Electronics,
            "Acme Supply",
            8.5,
            19.99,
            quantity,
            CompanyId::parse("EJY1UT").unwrap(),
            Utc::now(),
        )
    }

    #[test]
    fn new_item_seeds_one_history_entry_at_opening_quantity() {
        let item = item(12);
        assert_eq!(item.history.len(), 1);
        assert_eq!(item.history[0].quantity, 12);
    }

    #[test]
    fn adjustment_floors_at_zero_and_appends_exactly_one_entry() {
        let mut item = item(5);
        let new_quantity = item.apply_adjustment(-1000, Utc::now());
        assert_eq!(new_quantity, 0);
        assert_eq!(item.quantity, 0);
        assert_eq!(item.history.len(), 2);
        assert_eq!(item.history[1].quantity, 0);
    }

    #[test]
    fn extreme_deltas_saturate_instead_of_wrapping() {
        let mut item = item(5);
        assert_eq!(item.apply_adjustment(i64::MAX, Utc::now()), i64::MAX);
        assert_eq!(item.apply_adjustment(i64::MIN, Utc::now()), 0);
        assert_eq!(item.history.len(), 3);
    }

    #[test]
    fn positive_adjustment_accumulates() {
        let mut item = item(3);
        item.apply_adjustment(7, Utc::now());
        assert_eq!(item.quantity, 10);
    }

    #[test]
    fn adjustment_refreshes_last_updated() {
        let mut item = item(3);
        let later = item.last_updated + chrono::Duration::hours(1);
        item.apply_adjustment(1, later);
        assert_eq!(item.last_updated, later);
    }

    #[test]
    fn home_goods_category_keeps_display_spelling() {
        let json = serde_json::to_string(&Category::HomeGoods).unwrap();
        assert_eq!(json, "\"Home Goods\"");
    }
}
