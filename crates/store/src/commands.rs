//! Mutation command payloads.
//!
//! Creation commands never carry an id or a company: ids are allocated by the
//! service and the owning company is stamped from the acting user. Timestamps
//! travel in the command (`occurred_at`) so tests stay deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockline_core::RecordId;
use stockline_records::{Category, SaleStatus, TransactionKind};

/// Catalog a new inventory item with an opening quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddInventoryItem {
    pub name: String,
    pub sku: String,
    pub category: Category,
    pub supplier: String,
    pub cost: f64,
    pub price: f64,
    pub quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Adjust stock by a signed delta. The quantity floors at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustStock {
    pub item_id: RecordId,
    pub delta: i64,
    pub occurred_at: DateTime<Utc>,
}

/// Record a sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSale {
    pub customer: String,
    pub status: SaleStatus,
    pub total: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Place a purchase order. New orders start `Pending`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPurchaseOrder {
    pub supplier: String,
    pub total: f64,
    pub occurred_at: DateTime<Utc>,
}

/// Register a customer. `total_spent` starts at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddCustomer {
    pub name: String,
    pub email: String,
}

/// Register a supplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddSupplier {
    pub name: String,
    pub contact: String,
    pub category: String,
}

/// Record a cash movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddTransaction {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub occurred_at: DateTime<Utc>,
}
