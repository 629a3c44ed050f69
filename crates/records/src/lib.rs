//! `stockline-records` — the business record types owned by a company
//! partition.
//!
//! Every record carries a mandatory `company_id` naming its owning company,
//! assigned at creation and never reassigned. Identity (`id`) is immutable;
//! fields are not.

pub mod inventory;
pub mod party;
pub mod purchase;
pub mod sale;
pub mod transaction;

pub use inventory::{Category, InventoryItem, StockHistoryEntry};
pub use party::{Customer, CustomerPatch, Supplier, SupplierPatch};
pub use purchase::{PurchaseOrder, PurchaseOrderPatch, PurchaseOrderStatus};
pub use sale::{Sale, SaleStatus};
pub use transaction::{Transaction, TransactionKind};
