use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockline_core::{CompanyId, RecordId};

/// Settlement status of a sale.
///
/// Transitions are unconstrained: any status may be set to any other. The
/// source never enforced forward-only transitions and UIs rely on toggling
/// Paid back to Pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleStatus {
    Paid,
    Pending,
}

/// A recorded sale (invoice line at the granularity the dashboard shows).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub id: RecordId,
    pub customer: String,
    pub date: NaiveDate,
    pub status: SaleStatus,
    pub total: f64,
    pub company_id: CompanyId,
}
