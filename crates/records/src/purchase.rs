use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockline_core::{CompanyId, RecordId};

/// Fulfilment status of a purchase order.
///
/// Like [`crate::SaleStatus`], transitions are unconstrained by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseOrderStatus {
    Pending,
    Shipped,
    Delivered,
}

/// An order placed with a supplier. New orders start `Pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: RecordId,
    pub supplier: String,
    pub date: NaiveDate,
    pub status: PurchaseOrderStatus,
    pub total: f64,
    pub company_id: CompanyId,
}

/// Partial update for a purchase order. `None` fields keep existing values;
/// `id` and `company_id` are never patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderPatch {
    pub supplier: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<PurchaseOrderStatus>,
    pub total: Option<f64>,
}

impl PurchaseOrderPatch {
    pub fn apply(&self, order: &mut PurchaseOrder) {
        if let Some(supplier) = &self.supplier {
            order.supplier = supplier.clone();
        }
        if let Some(date) = self.date {
            order.date = date;
        }
        if let Some(status) = self.status {
            order.status = status;
        }
        if let Some(total) = self.total {
            order.total = total;
        }
    }
}
