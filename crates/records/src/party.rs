use serde::{Deserialize, Serialize};

use stockline_core::{CompanyId, RecordId};

/// A customer of the owning company.
///
/// `total_spent` starts at zero on creation and is maintained by the sales
/// flow, not by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub total_spent: f64,
    pub company_id: CompanyId,
}

/// Partial update for a customer. `id` and `company_id` are never patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub total_spent: Option<f64>,
}

impl CustomerPatch {
    pub fn apply(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(email) = &self.email {
            customer.email = email.clone();
        }
        if let Some(total_spent) = self.total_spent {
            customer.total_spent = total_spent;
        }
    }
}

/// A supplier the owning company orders from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
    pub contact: String,
    pub category: String,
    pub company_id: CompanyId,
}

/// Partial update for a supplier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierPatch {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub category: Option<String>,
}

impl SupplierPatch {
    pub fn apply(&self, supplier: &mut Supplier) {
        if let Some(name) = &self.name {
            supplier.name = name.clone();
        }
        if let Some(contact) = &self.contact {
            supplier.contact = contact.clone();
        }
        if let Some(category) = &self.category {
            supplier.category = category.clone();
        }
    }
}
