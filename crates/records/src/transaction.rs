use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockline_core::{CompanyId, RecordId};

/// Direction of a cash movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "Cash In")]
    CashIn,
    #[serde(rename = "Cash Out")]
    CashOut,
}

/// A finance ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: RecordId,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub company_id: CompanyId,
}
