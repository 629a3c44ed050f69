//! Input serialization for the restock-prediction service.
//!
//! The service consumes two JSON blobs: current inventory levels and recent
//! sales figures. Sales figures are synthesized deterministically from each
//! item's stock history (the sum of decreases over a trailing window), so
//! alerts are reproducible for a given store state.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use stockline_records::InventoryItem;

use crate::advisor::AiError;

/// The two blobs the prediction service consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestockInput {
    /// JSON array of `{ "name", "quantity" }` per item.
    pub inventory_data: String,
    /// JSON array of `{ "itemName", "quantitySold", "periodDays" }` per item.
    pub sales_data: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct InventoryLevel {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SalesFigure {
    pub item_name: String,
    pub quantity_sold: i64,
    pub period_days: i64,
}

/// Serialize the caller-visible inventory into the service's input shape.
///
/// `window_days` bounds how far back in each item's history consumption is
/// counted.
pub fn build_restock_input(
    inventory: &[InventoryItem],
    window_days: i64,
    now: DateTime<Utc>,
) -> Result<RestockInput, AiError> {
    if window_days <= 0 {
        return Err(AiError::InvalidInput(
            "window_days must be positive".to_string(),
        ));
    }
    // Caller-supplied, so the window must stay within what a timestamp can
    // actually be offset by.
    let cutoff = Duration::try_days(window_days)
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| AiError::InvalidInput("window_days out of range".to_string()))?;

    let levels: Vec<InventoryLevel> = inventory
        .iter()
        .map(|item| InventoryLevel {
            name: item.name.clone(),
            quantity: item.quantity,
        })
        .collect();

    let figures: Vec<SalesFigure> = inventory
        .iter()
        .map(|item| SalesFigure {
            item_name: item.name.clone(),
            quantity_sold: consumed_since(item, cutoff),
            period_days: window_days,
        })
        .collect();

    let inventory_data = serde_json::to_string(&levels)
        .map_err(|e| AiError::InvalidInput(format!("inventory serialization: {e}")))?;
    let sales_data = serde_json::to_string(&figures)
        .map_err(|e| AiError::InvalidInput(format!("sales serialization: {e}")))?;

    Ok(RestockInput {
        inventory_data,
        sales_data,
    })
}

/// Total stock decrease across consecutive history entries after `cutoff`.
///
/// Increases (restocks) do not offset consumption.
fn consumed_since(item: &InventoryItem, cutoff: DateTime<Utc>) -> i64 {
    item.history
        .windows(2)
        .filter(|pair| pair[1].at >= cutoff)
        .map(|pair| (pair[0].quantity - pair[1].quantity).max(0))
        .sum()
}

#[cfg(test)]
mod tests {
    use stockline_core::{CompanyId, RecordId};
    use stockline_records::Category;

    use super::*;

    fn item_with_history(deltas: &[i64], now: DateTime<Utc>) -> InventoryItem {
        let opening = 50;
        let mut item = InventoryItem::new(
            RecordId::generate("ITM"),
            "Widget",
            "W-1",
            Category::Electronics,
            "Acme",
            1.0,
            2.0,
            opening,
            CompanyId::parse("EJY1UT").unwrap(),
            now - Duration::days(10),
        );
        for (i, delta) in deltas.iter().enumerate() {
            item.apply_adjustment(*delta, now - Duration::days(9 - i as i64));
        }
        item
    }

    #[test]
    fn consumption_sums_decreases_and_ignores_restocks() {
        let now = Utc::now();
        // 50 -> 45 -> 65 -> 60: consumed 5 + 5, the +20 restock is not offset.
        let item = item_with_history(&[-5, 20, -5], now);
        let input = build_restock_input(std::slice::from_ref(&item), 30, now).unwrap();

        let figures: Vec<SalesFigure> = serde_json::from_str(&input.sales_data).unwrap();
        assert_eq!(figures[0].quantity_sold, 10);
        assert_eq!(figures[0].period_days, 30);

        let levels: Vec<InventoryLevel> = serde_json::from_str(&input.inventory_data).unwrap();
        assert_eq!(levels[0].quantity, 60);
    }

    #[test]
    fn old_history_outside_window_is_ignored() {
        let now = Utc::now();
        let item = item_with_history(&[-5, -5, -5], now);
        // Window of 1 day excludes every adjustment (latest is 7 days old).
        let input = build_restock_input(std::slice::from_ref(&item), 1, now).unwrap();
        let figures: Vec<SalesFigure> = serde_json::from_str(&input.sales_data).unwrap();
        assert_eq!(figures[0].quantity_sold, 0);
    }

    #[test]
    fn non_positive_window_is_rejected() {
        assert!(build_restock_input(&[], 0, Utc::now()).is_err());
    }

    #[test]
    fn oversized_window_is_rejected_not_panicking() {
        let err = build_restock_input(&[], i64::MAX, Utc::now()).unwrap_err();
        assert!(matches!(err, AiError::InvalidInput(_)));
    }
}
