//! Demo dataset for local runs and black-box tests.
//!
//! Three companies, two of them grouped, and one user per access tier. The
//! stock histories carry enough recent consumption for the restock advisor
//! to have something to say.

use chrono::{DateTime, Duration, Utc};

use stockline_auth::{Role, User};
use stockline_core::{CompanyId, DomainResult, RecordId};
use stockline_directory::CompanyDirectory;
use stockline_records::{
    Category, Customer, InventoryItem, PurchaseOrder, PurchaseOrderStatus, Sale, SaleStatus,
    Supplier, Transaction, TransactionKind,
};
use stockline_store::{Partition, PartitionedStore};

pub struct DemoData {
    pub directory: CompanyDirectory,
    pub store: PartitionedStore,
    /// Admin at InventoryFlow (grouped).
    pub admin: User,
    /// Manager at RetailOps, InventoryFlow's group sibling.
    pub manager: User,
    /// Employee at InventoryFlow.
    pub employee: User,
    /// Head of the standalone SoloLogistics.
    pub head: User,
}

impl DemoData {
    pub fn users(&self) -> Vec<User> {
        vec![
            self.admin.clone(),
            self.manager.clone(),
            self.employee.clone(),
            self.head.clone(),
        ]
    }
}

pub fn demo() -> DomainResult<DemoData> {
    let mut directory = CompanyDirectory::new();
    let flow = directory.add_company(
        "InventoryFlow Inc.",
        "123 ERP Lane, Business City, 54321",
        Some("Global-Wide Enterprises"),
    )?;
    let retail = directory.add_company(
        "RetailOps Solutions",
        "456 Commerce Ave, Market Town, 67890",
        Some("Global-Wide Enterprises"),
    )?;
    let solo = directory.add_company(
        "SoloLogistics",
        "789 Supply Chain Rd, Loneberg, 11223",
        None,
    )?;

    let admin = User::new(
        "Admin User",
        "adminuser@example.com",
        Role::Admin,
        Some(flow.clone()),
    );
    let manager = User::new(
        "Manager User",
        "manager@example.com",
        Role::Manager,
        Some(retail.clone()),
    );
    let employee = User::new(
        "Employee User",
        "employee@example.com",
        Role::Employee,
        Some(flow.clone()),
    );
    let head = User::new(
        "Head User",
        "head@example.com",
        Role::Head,
        Some(solo.clone()),
    );

    let now = Utc::now();
    let mut store = PartitionedStore::new();

    {
        let partition = store.ensure_partition(flow.clone());
        seed_item(
            partition, &flow, "Wireless Mouse", "WM-1001", Category::Electronics, "TechGear Inc.",
            12.5, 29.99, 200, &[-20, -20, -10], now,
        );
        seed_item(
            partition, &flow, "Men's T-Shirt", "TS-M-002", Category::Apparel, "Fashion Hub",
            8.0, 19.99, 150, &[-50, -50, -42], now,
        );
        seed_item(
            partition, &flow, "Bluetooth Speaker", "BS-2024", Category::Electronics, "SoundMax",
            45.0, 99.99, 50, &[-20, -20, -10], now,
        );
        partition.sales.push(Sale {
            id: RecordId::generate("SAL"),
            customer: "Alice Johnson".to_string(),
            date: (now - Duration::days(3)).date_naive(),
            status: SaleStatus::Paid,
            total: 149.95,
            company_id: flow.clone(),
        });
        partition.customers.push(Customer {
            id: RecordId::generate("CUS"),
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            total_spent: 149.95,
            company_id: flow.clone(),
        });
        partition.suppliers.push(Supplier {
            id: RecordId::generate("SUP"),
            name: "TechGear Inc.".to_string(),
            contact: "sales@techgear.example.com".to_string(),
            category: "Electronics".to_string(),
            company_id: flow.clone(),
        });
        partition.purchase_orders.push(PurchaseOrder {
            id: RecordId::generate("PO"),
            supplier: "SoundMax".to_string(),
            date: (now - Duration::days(2)).date_naive(),
            status: PurchaseOrderStatus::Pending,
            total: 2250.0,
            company_id: flow.clone(),
        });
        partition.transactions.push(Transaction {
            id: RecordId::generate("TRN"),
            date: (now - Duration::days(3)).date_naive(),
            description: "Daily sales settlement".to_string(),
            amount: 149.95,
            kind: TransactionKind::CashIn,
            company_id: flow.clone(),
        });
    }

    {
        let partition = store.ensure_partition(retail.clone());
        seed_item(
            partition, &retail, "Organic Coffee Beans", "OCB-500G", Category::Groceries, "Global Foods",
            10.0, 22.5, 100, &[-10, -10, -5], now,
        );
        seed_item(
            partition, &retail, "Scented Candle", "HM-SC-LAV", Category::HomeGoods, "HomeEssence",
            7.5, 18.0, 250, &[-20, -20, -10], now,
        );
        partition.suppliers.push(Supplier {
            id: RecordId::generate("SUP"),
            name: "Global Foods".to_string(),
            contact: "orders@globalfoods.example.com".to_string(),
            category: "Groceries".to_string(),
            company_id: retail.clone(),
        });
    }

    {
        let partition = store.ensure_partition(solo.clone());
        seed_item(
            partition, &solo, "Yoga Mat", "HM-YM-01", Category::HomeGoods, "ActiveLife",
            15.0, 35.0, 120, &[-10, -10, -10], now,
        );
    }

    Ok(DemoData {
        directory,
        store,
        admin,
        manager,
        employee,
        head,
    })
}

/// Catalog an item four weeks back and replay weekly adjustments, so the
/// history reflects trailing consumption.
#[allow(clippy::too_many_arguments)]
fn seed_item(
    partition: &mut Partition,
    company_id: &CompanyId,
    name: &str,
    sku: &str,
    category: Category,
    supplier: &str,
    cost: f64,
    price: f64,
    opening: i64,
    weekly_deltas: &[i64],
    now: DateTime<Utc>,
) {
    let mut item = InventoryItem::new(
        RecordId::generate("ITM"),
        name,
        sku,
        category,
        supplier,
        cost,
        price,
        opening,
        company_id.clone(),
        now - Duration::days(28),
    );
    for (week, delta) in weekly_deltas.iter().enumerate() {
        item.apply_adjustment(*delta, now - Duration::days(21 - 7 * week as i64));
    }
    partition.inventory.push(item);
}
