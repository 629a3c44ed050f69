use chrono::NaiveDate;
use serde::Deserialize;

use stockline_records::{
    Category, CustomerPatch, PurchaseOrderPatch, PurchaseOrderStatus, SaleStatus, SupplierPatch,
    TransactionKind,
};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub name: String,
    pub sku: String,
    pub category: Category,
    pub supplier: String,
    pub cost: f64,
    pub price: f64,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct AdjustStockRequest {
    pub delta: i64,
}

#[derive(Debug, Deserialize)]
pub struct AddSaleRequest {
    pub customer: String,
    pub status: SaleStatus,
    pub total: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSaleStatusRequest {
    pub status: SaleStatus,
}

#[derive(Debug, Deserialize)]
pub struct AddPurchaseOrderRequest {
    pub supplier: String,
    pub total: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePurchaseOrderRequest {
    pub supplier: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<PurchaseOrderStatus>,
    pub total: Option<f64>,
}

impl UpdatePurchaseOrderRequest {
    pub fn into_patch(self) -> PurchaseOrderPatch {
        PurchaseOrderPatch {
            supplier: self.supplier,
            date: self.date,
            status: self.status,
            total: self.total,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddCustomerRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub total_spent: Option<f64>,
}

impl UpdateCustomerRequest {
    pub fn into_patch(self) -> CustomerPatch {
        CustomerPatch {
            name: self.name,
            email: self.email,
            total_spent: self.total_spent,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddSupplierRequest {
    pub name: String,
    pub contact: String,
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateSupplierRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub category: Option<String>,
}

impl UpdateSupplierRequest {
    pub fn into_patch(self) -> SupplierPatch {
        SupplierPatch {
            name: self.name,
            contact: self.contact,
            category: self.category,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddTransactionRequest {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

#[derive(Debug, Deserialize)]
pub struct AddCompanyRequest {
    pub name: String,
    pub address: String,
    pub group: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct VerifyCompanyRequest {
    pub company_id: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct RestockRequest {
    /// Trailing window of stock history to treat as sales, in days.
    #[serde(default)]
    pub window_days: Option<i64>,
}
