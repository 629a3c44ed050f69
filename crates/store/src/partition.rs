use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockline_core::{CompanyId, DomainError, DomainResult};
use stockline_records::{Customer, InventoryItem, PurchaseOrder, Sale, Supplier, Transaction};

/// The six record collections belonging to one company.
///
/// Ordering conventions differ per collection: transactional lists (sales,
/// purchase orders, customers, suppliers, transactions) are most-recent-first;
/// the inventory catalog keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub inventory: Vec<InventoryItem>,
    pub sales: Vec<Sale>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub customers: Vec<Customer>,
    pub suppliers: Vec<Supplier>,
    pub transactions: Vec<Transaction>,
}

impl Partition {
    pub fn record_count(&self) -> usize {
        self.inventory.len()
            + self.sales.len()
            + self.purchase_orders.len()
            + self.customers.len()
            + self.suppliers.len()
            + self.transactions.len()
    }
}

/// The full store: one partition per company.
///
/// Invariant: every record's `company_id` equals the partition key it lives
/// under. A record is never stored under two partitions and never floats
/// without an owner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartitionedStore {
    partitions: BTreeMap<CompanyId, Partition>,
}

impl PartitionedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    pub fn partition(&self, company_id: &CompanyId) -> Option<&Partition> {
        self.partitions.get(company_id)
    }

    pub fn partition_mut(&mut self, company_id: &CompanyId) -> Option<&mut Partition> {
        self.partitions.get_mut(company_id)
    }

    /// Guaranteed partition for writes.
    ///
    /// Readers (the visibility resolver) never call this; only mutation
    /// operations create partitions.
    pub fn ensure_partition(&mut self, company_id: CompanyId) -> &mut Partition {
        self.partitions.entry(company_id).or_default()
    }

    pub fn company_ids(&self) -> impl Iterator<Item = &CompanyId> {
        self.partitions.keys()
    }

    /// Check the ownership invariant across every partition.
    ///
    /// Run after deserializing a snapshot, before trusting its contents.
    pub fn verify_ownership(&self) -> DomainResult<()> {
        for (company_id, partition) in &self.partitions {
            let misplaced = partition.inventory.iter().any(|r| &r.company_id != company_id)
                || partition.sales.iter().any(|r| &r.company_id != company_id)
                || partition
                    .purchase_orders
                    .iter()
                    .any(|r| &r.company_id != company_id)
                || partition.customers.iter().any(|r| &r.company_id != company_id)
                || partition.suppliers.iter().any(|r| &r.company_id != company_id)
                || partition
                    .transactions
                    .iter()
                    .any(|r| &r.company_id != company_id);
            if misplaced {
                return Err(DomainError::validation(format!(
                    "partition {company_id} holds records owned by another company"
                )));
            }
        }
        Ok(())
    }
}
