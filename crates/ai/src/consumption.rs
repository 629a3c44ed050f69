//! Deterministic restock advisor based on days-of-cover.
//!
//! Stands in for the hosted prediction model in dev and tests. It consumes
//! the same serialized blobs the hosted model would, so swapping advisors
//! never changes the calling code.

use chrono::{Duration, NaiveDate};

use crate::advisor::{AiError, RestockAdvisor, RestockAlert};
use crate::input::{InventoryLevel, RestockInput, SalesFigure};

/// Days-of-cover model:
/// - daily rate = quantity sold / period days
/// - cover = current quantity / daily rate
/// - alert when cover falls inside the reorder horizon, dated so the order
///   lands before the projected stockout minus supplier lead time.
///
/// Items with no recorded consumption are skipped (not enough information).
#[derive(Debug, Clone)]
pub struct ConsumptionRateAdvisor {
    as_of: NaiveDate,
    lead_time_days: i64,
    horizon_days: i64,
}

impl ConsumptionRateAdvisor {
    pub fn new(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            lead_time_days: 3,
            horizon_days: 21,
        }
    }

    pub fn with_lead_time_days(mut self, lead_time_days: i64) -> Self {
        self.lead_time_days = lead_time_days;
        self
    }

    pub fn with_horizon_days(mut self, horizon_days: i64) -> Self {
        self.horizon_days = horizon_days;
        self
    }
}

impl RestockAdvisor for ConsumptionRateAdvisor {
    fn generate(&self, input: &RestockInput) -> Result<Vec<RestockAlert>, AiError> {
        let levels: Vec<InventoryLevel> = serde_json::from_str(&input.inventory_data)
            .map_err(|e| AiError::InvalidInput(format!("inventory blob: {e}")))?;
        let figures: Vec<SalesFigure> = serde_json::from_str(&input.sales_data)
            .map_err(|e| AiError::InvalidInput(format!("sales blob: {e}")))?;

        let mut alerts = Vec::new();
        for level in &levels {
            let Some(figure) = figures.iter().find(|f| f.item_name == level.name) else {
                continue;
            };
            if figure.quantity_sold <= 0 || figure.period_days <= 0 {
                continue;
            }

            let daily_rate = figure.quantity_sold as f64 / figure.period_days as f64;
            let cover_days = (level.quantity as f64 / daily_rate).floor() as i64;
            if cover_days > self.horizon_days {
                continue;
            }

            let reorder_in = (cover_days - self.lead_time_days).max(0);
            alerts.push(RestockAlert {
                item_name: level.name.clone(),
                predicted_restock_date: self.as_of + Duration::days(reorder_in),
                reason: format!(
                    "{} units on hand at ~{:.1}/day leaves {} day(s) of cover; reorder within {} day(s) to beat the {}-day lead time",
                    level.quantity, daily_rate, cover_days, reorder_in, self.lead_time_days
                ),
            });
        }
        Ok(alerts)
    }
}
