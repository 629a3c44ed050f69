//! The data service: mutation operations over the partitioned store.
//!
//! Explicitly constructed and injected by callers; there are no ambient
//! singletons. Every mutation resolves ownership through the caller's
//! visible set, mutates the owning partition only, and writes the whole
//! store through the snapshot seam.

use std::sync::Arc;

use stockline_auth::{policy, User};
use stockline_core::{CompanyId, DomainError, DomainResult, RecordId};
use stockline_directory::CompanyDirectory;
use stockline_records::{
    Customer, CustomerPatch, InventoryItem, PurchaseOrder, PurchaseOrderPatch,
    PurchaseOrderStatus, Sale, SaleStatus, Supplier, SupplierPatch, Transaction,
};

use crate::commands::{
    AddCustomer, AddInventoryItem, AddPurchaseOrder, AddSale, AddSupplier, AddTransaction,
    AdjustStock,
};
use crate::partition::PartitionedStore;
use crate::snapshot::SnapshotStore;
use crate::visibility::{resolve_visible, VisibleData};

pub struct DataService {
    store: PartitionedStore,
    snapshot: Arc<dyn SnapshotStore>,
}

impl DataService {
    /// Open the service against a snapshot store, reading any existing
    /// snapshot and checking the ownership invariant before trusting it.
    pub fn open(snapshot: Arc<dyn SnapshotStore>) -> DomainResult<Self> {
        let store = snapshot
            .load()
            .map_err(|e| DomainError::upstream(e.to_string()))?
            .unwrap_or_default();
        store.verify_ownership()?;
        Ok(Self { store, snapshot })
    }

    /// Open with a pre-built store (fixtures, seeding). Persists immediately.
    pub fn with_store(
        store: PartitionedStore,
        snapshot: Arc<dyn SnapshotStore>,
    ) -> DomainResult<Self> {
        store.verify_ownership()?;
        let service = Self { store, snapshot };
        service.persist()?;
        Ok(service)
    }

    pub fn store(&self) -> &PartitionedStore {
        &self.store
    }

    /// The caller-visible slice of every collection.
    pub fn visible(&self, user: &User, directory: &CompanyDirectory) -> VisibleData {
        resolve_visible(user, directory, &self.store)
    }

    pub fn inventory_item(
        &self,
        user: &User,
        directory: &CompanyDirectory,
        item_id: &RecordId,
    ) -> Option<InventoryItem> {
        self.visible(user, directory)
            .inventory
            .into_iter()
            .find(|i| &i.id == item_id)
    }

    // ── inventory ──────────────────────────────────────────────────────────

    pub fn add_inventory_item(&mut self, user: &User, cmd: AddInventoryItem) -> DomainResult<RecordId> {
        let company_id = policy::require_company(user)?;
        let item = InventoryItem::new(
            RecordId::generate("ITM"),
            cmd.name,
            cmd.sku,
            cmd.category,
            cmd.supplier,
            cmd.cost,
            cmd.price,
            cmd.quantity,
            company_id.clone(),
            cmd.occurred_at,
        );
        let id = item.id.clone();
        tracing::info!(company = %company_id, item = %id, "inventory item catalogued");
        // Catalog list keeps insertion order (not prepended).
        self.store.ensure_partition(company_id).inventory.push(item);
        self.persist()?;
        Ok(id)
    }

    pub fn remove_inventory_item(
        &mut self,
        user: &User,
        directory: &CompanyDirectory,
        item_id: &RecordId,
    ) -> DomainResult<()> {
        policy::require_company(user)?;
        let owner = self.visible_inventory_owner(user, directory, item_id)?;
        if let Some(partition) = self.store.partition_mut(&owner) {
            partition.inventory.retain(|i| &i.id != item_id);
        }
        self.persist()
    }

    pub fn adjust_stock(
        &mut self,
        user: &User,
        directory: &CompanyDirectory,
        cmd: AdjustStock,
    ) -> DomainResult<i64> {
        policy::require_company(user)?;
        let owner = self.visible_inventory_owner(user, directory, &cmd.item_id)?;
        let partition = self
            .store
            .partition_mut(&owner)
            .ok_or_else(DomainError::not_found)?;
        let item = partition
            .inventory
            .iter_mut()
            .find(|i| i.id == cmd.item_id)
            .ok_or_else(DomainError::not_found)?;
        let new_quantity = item.apply_adjustment(cmd.delta, cmd.occurred_at);
        tracing::info!(item = %cmd.item_id, delta = cmd.delta, quantity = new_quantity, "stock adjusted");
        self.persist()?;
        Ok(new_quantity)
    }

    // ── sales ──────────────────────────────────────────────────────────────

    pub fn add_sale(&mut self, user: &User, cmd: AddSale) -> DomainResult<RecordId> {
        let company_id = policy::require_company(user)?;
        let sale = Sale {
            id: RecordId::generate("SAL"),
            customer: cmd.customer,
            date: cmd.occurred_at.date_naive(),
            status: cmd.status,
            total: cmd.total,
            company_id: company_id.clone(),
        };
        let id = sale.id.clone();
        self.store
            .ensure_partition(company_id)
            .sales
            .insert(0, sale);
        self.persist()?;
        Ok(id)
    }

    pub fn update_sale_status(
        &mut self,
        user: &User,
        directory: &CompanyDirectory,
        sale_id: &RecordId,
        status: SaleStatus,
    ) -> DomainResult<()> {
        let visible = self.visible(user, directory);
        let owner = Self::owner_or_trace(
            visible.sales.iter().find(|s| &s.id == sale_id).map(|s| s.company_id.clone()),
            sale_id,
            "sale",
        )?;
        if let Some(partition) = self.store.partition_mut(&owner) {
            if let Some(sale) = partition.sales.iter_mut().find(|s| &s.id == sale_id) {
                sale.status = status;
            }
        }
        self.persist()
    }

    // ── purchase orders ────────────────────────────────────────────────────

    pub fn add_purchase_order(&mut self, user: &User, cmd: AddPurchaseOrder) -> DomainResult<RecordId> {
        let company_id = policy::require_company(user)?;
        let order = PurchaseOrder {
            id: RecordId::generate("PO"),
            supplier: cmd.supplier,
            date: cmd.occurred_at.date_naive(),
            status: PurchaseOrderStatus::Pending,
            total: cmd.total,
            company_id: company_id.clone(),
        };
        let id = order.id.clone();
        self.store
            .ensure_partition(company_id)
            .purchase_orders
            .insert(0, order);
        self.persist()?;
        Ok(id)
    }

    pub fn update_purchase_order(
        &mut self,
        user: &User,
        directory: &CompanyDirectory,
        order_id: &RecordId,
        patch: PurchaseOrderPatch,
    ) -> DomainResult<()> {
        let visible = self.visible(user, directory);
        let owner = Self::owner_or_trace(
            visible
                .purchase_orders
                .iter()
                .find(|o| &o.id == order_id)
                .map(|o| o.company_id.clone()),
            order_id,
            "purchase order",
        )?;
        if let Some(partition) = self.store.partition_mut(&owner) {
            if let Some(order) = partition.purchase_orders.iter_mut().find(|o| &o.id == order_id) {
                patch.apply(order);
            }
        }
        self.persist()
    }

    pub fn delete_purchase_order(
        &mut self,
        user: &User,
        directory: &CompanyDirectory,
        order_id: &RecordId,
    ) -> DomainResult<()> {
        let visible = self.visible(user, directory);
        let owner = Self::owner_or_trace(
            visible
                .purchase_orders
                .iter()
                .find(|o| &o.id == order_id)
                .map(|o| o.company_id.clone()),
            order_id,
            "purchase order",
        )?;
        if let Some(partition) = self.store.partition_mut(&owner) {
            partition.purchase_orders.retain(|o| &o.id != order_id);
        }
        self.persist()
    }

    // ── customers ──────────────────────────────────────────────────────────

    pub fn add_customer(&mut self, user: &User, cmd: AddCustomer) -> DomainResult<RecordId> {
        let company_id = policy::require_company(user)?;
        let customer = Customer {
            id: RecordId::generate("CUS"),
            name: cmd.name,
            email: cmd.email,
            total_spent: 0.0,
            company_id: company_id.clone(),
        };
        let id = customer.id.clone();
        self.store
            .ensure_partition(company_id)
            .customers
            .insert(0, customer);
        self.persist()?;
        Ok(id)
    }

    pub fn update_customer(
        &mut self,
        user: &User,
        directory: &CompanyDirectory,
        customer_id: &RecordId,
        patch: CustomerPatch,
    ) -> DomainResult<()> {
        let visible = self.visible(user, directory);
        let owner = Self::owner_or_trace(
            visible
                .customers
                .iter()
                .find(|c| &c.id == customer_id)
                .map(|c| c.company_id.clone()),
            customer_id,
            "customer",
        )?;
        if let Some(partition) = self.store.partition_mut(&owner) {
            if let Some(customer) = partition.customers.iter_mut().find(|c| &c.id == customer_id) {
                patch.apply(customer);
            }
        }
        self.persist()
    }

    pub fn delete_customer(
        &mut self,
        user: &User,
        directory: &CompanyDirectory,
        customer_id: &RecordId,
    ) -> DomainResult<()> {
        let visible = self.visible(user, directory);
        let owner = Self::owner_or_trace(
            visible
                .customers
                .iter()
                .find(|c| &c.id == customer_id)
                .map(|c| c.company_id.clone()),
            customer_id,
            "customer",
        )?;
        if let Some(partition) = self.store.partition_mut(&owner) {
            partition.customers.retain(|c| &c.id != customer_id);
        }
        self.persist()
    }

    // ── suppliers ──────────────────────────────────────────────────────────

    pub fn add_supplier(&mut self, user: &User, cmd: AddSupplier) -> DomainResult<RecordId> {
        let company_id = policy::require_company(user)?;
        let supplier = Supplier {
            id: RecordId::generate("SUP"),
            name: cmd.name,
            contact: cmd.contact,
            category: cmd.category,
            company_id: company_id.clone(),
        };
        let id = supplier.id.clone();
        self.store
            .ensure_partition(company_id)
            .suppliers
            .insert(0, supplier);
        self.persist()?;
        Ok(id)
    }

    pub fn update_supplier(
        &mut self,
        user: &User,
        directory: &CompanyDirectory,
        supplier_id: &RecordId,
        patch: SupplierPatch,
    ) -> DomainResult<()> {
        let visible = self.visible(user, directory);
        let owner = Self::owner_or_trace(
            visible
                .suppliers
                .iter()
                .find(|s| &s.id == supplier_id)
                .map(|s| s.company_id.clone()),
            supplier_id,
            "supplier",
        )?;
        if let Some(partition) = self.store.partition_mut(&owner) {
            if let Some(supplier) = partition.suppliers.iter_mut().find(|s| &s.id == supplier_id) {
                patch.apply(supplier);
            }
        }
        self.persist()
    }

    pub fn delete_supplier(
        &mut self,
        user: &User,
        directory: &CompanyDirectory,
        supplier_id: &RecordId,
    ) -> DomainResult<()> {
        let visible = self.visible(user, directory);
        let owner = Self::owner_or_trace(
            visible
                .suppliers
                .iter()
                .find(|s| &s.id == supplier_id)
                .map(|s| s.company_id.clone()),
            supplier_id,
            "supplier",
        )?;
        if let Some(partition) = self.store.partition_mut(&owner) {
            partition.suppliers.retain(|s| &s.id != supplier_id);
        }
        self.persist()
    }

    // ── transactions ───────────────────────────────────────────────────────

    pub fn add_transaction(&mut self, user: &User, cmd: AddTransaction) -> DomainResult<RecordId> {
        let company_id = policy::require_company(user)?;
        let transaction = Transaction {
            id: RecordId::generate("TRN"),
            date: cmd.occurred_at.date_naive(),
            description: cmd.description,
            amount: cmd.amount,
            kind: cmd.kind,
            company_id: company_id.clone(),
        };
        let id = transaction.id.clone();
        self.store
            .ensure_partition(company_id)
            .transactions
            .insert(0, transaction);
        self.persist()?;
        Ok(id)
    }

    // ── internals ──────────────────────────────────────────────────────────

    fn visible_inventory_owner(
        &self,
        user: &User,
        directory: &CompanyDirectory,
        item_id: &RecordId,
    ) -> DomainResult<CompanyId> {
        let visible = self.visible(user, directory);
        Self::owner_or_trace(
            visible
                .inventory
                .iter()
                .find(|i| &i.id == item_id)
                .map(|i| i.company_id.clone()),
            item_id,
            "inventory item",
        )
    }

    fn owner_or_trace(
        owner: Option<CompanyId>,
        record_id: &RecordId,
        family: &'static str,
    ) -> DomainResult<CompanyId> {
        owner.ok_or_else(|| {
            tracing::warn!(record = %record_id, family, "mutation target not in visible set");
            DomainError::not_found()
        })
    }

    /// Write-through: the whole store, on every mutation.
    fn persist(&self) -> DomainResult<()> {
        self.snapshot
            .save(&self.store)
            .map_err(|e| DomainError::upstream(e.to_string()))
    }
}
