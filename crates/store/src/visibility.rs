//! The visibility resolver: which slice of the store a user may see.

use serde::{Deserialize, Serialize};

use stockline_auth::{policy, User};
use stockline_directory::CompanyDirectory;
use stockline_records::{Customer, InventoryItem, PurchaseOrder, Sale, Supplier, Transaction};

use crate::partition::{Partition, PartitionedStore};

/// The caller-visible slice of every record collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisibleData {
    pub inventory: Vec<InventoryItem>,
    pub sales: Vec<Sale>,
    pub purchase_orders: Vec<PurchaseOrder>,
    pub customers: Vec<Customer>,
    pub suppliers: Vec<Supplier>,
    pub transactions: Vec<Transaction>,
}

impl VisibleData {
    pub fn record_count(&self) -> usize {
        self.inventory.len()
            + self.sales.len()
            + self.purchase_orders.len()
            + self.customers.len()
            + self.suppliers.len()
            + self.transactions.len()
    }

    fn extend_from(&mut self, partition: &Partition) {
        self.inventory.extend(partition.inventory.iter().cloned());
        self.sales.extend(partition.sales.iter().cloned());
        self.purchase_orders
            .extend(partition.purchase_orders.iter().cloned());
        self.customers.extend(partition.customers.iter().cloned());
        self.suppliers.extend(partition.suppliers.iter().cloned());
        self.transactions
            .extend(partition.transactions.iter().cloned());
    }
}

/// Compute the record set a user is allowed to see.
///
/// Pure function of (user, directory, store): no partitions are created, no
/// state is touched.
///
/// - No company context ⇒ empty collections (fail-safe default).
/// - Employee, unknown company, or non-grouped company ⇒ exactly the user's
///   own partition (empty if it does not exist yet).
/// - Elevated role in a grouped company ⇒ concatenation of every member
///   company's partition, in directory order. No deduplication: the ownership
///   invariant guarantees a record lives in exactly one partition.
pub fn resolve_visible(
    user: &User,
    directory: &CompanyDirectory,
    store: &PartitionedStore,
) -> VisibleData {
    let Some(company_id) = &user.company_id else {
        return VisibleData::default();
    };

    let group_id = directory.company(company_id).and_then(|c| c.group_id);

    match group_id {
        Some(group_id) if policy::can_view_group_aggregate(user.role) => {
            let mut visible = VisibleData::default();
            for member in directory.group_members(group_id) {
                if let Some(partition) = store.partition(&member.id) {
                    visible.extend_from(partition);
                }
            }
            visible
        }
        _ => store
            .partition(company_id)
            .map(|partition| {
                let mut visible = VisibleData::default();
                visible.extend_from(partition);
                visible
            })
            .unwrap_or_default(),
    }
}
