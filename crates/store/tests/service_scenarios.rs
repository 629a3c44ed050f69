//! End-to-end scenarios over the data service: group visibility, ownership
//! resolution across sibling companies, write-through persistence.

use std::sync::Arc;

use chrono::Utc;

use stockline_auth::{Role, User};
use stockline_core::{CompanyId, DomainError};
use stockline_directory::CompanyDirectory;
use stockline_records::{CustomerPatch, SaleStatus, SupplierPatch, TransactionKind};
use stockline_store::{
    AddCustomer, AddInventoryItem, AddPurchaseOrder, AddSale, AddSupplier, AddTransaction,
    AdjustStock, DataService, InMemorySnapshotStore, JsonFileSnapshotStore, resolve_visible,
};

struct Fixture {
    directory: CompanyDirectory,
    service: DataService,
    company_a: CompanyId,
    company_b: CompanyId,
    company_c: CompanyId,
}

fn fixture() -> Fixture {
    let mut directory = CompanyDirectory::new();
    let company_a = directory
        .add_company("Alpha Retail", "1 First St", Some("G1"))
        .unwrap();
    let company_b = directory
        .add_company("Beta Retail", "2 Second St", Some("G1"))
        .unwrap();
    let company_c = directory
        .add_company("Gamma Solo", "3 Third St", None)
        .unwrap();

    let service = DataService::open(Arc::new(InMemorySnapshotStore::new())).unwrap();
    Fixture {
        directory,
        service,
        company_a,
        company_b,
        company_c,
    }
}

fn user(role: Role, company: &CompanyId) -> User {
    User::new("U", "u@x.com", role, Some(company.clone()))
}

fn add_item(service: &mut DataService, actor: &User, name: &str, quantity: i64) {
    service
        .add_inventory_item(
            actor,
            AddInventoryItem {
                name: name.to_string(),
                sku: format!("SKU-{name}"),
                category: stockline_records::Category::Electronics,
                supplier: "Acme".to_string(),
                cost: 1.0,
                price: 2.0,
                quantity,
                occurred_at: Utc::now(),
            },
        )
        .unwrap();
}

#[test]
fn manager_sees_group_totals_employees_see_own_partition() {
    let mut fx = fixture();
    let employee_a = user(Role::Employee, &fx.company_a);
    let employee_b = user(Role::Employee, &fx.company_b);
    let manager_a = user(Role::Manager, &fx.company_a);

    // Company A: 2 items; company B: 3 items.
    add_item(&mut fx.service, &employee_a, "a1", 5);
    add_item(&mut fx.service, &employee_a, "a2", 5);
    add_item(&mut fx.service, &employee_b, "b1", 5);
    add_item(&mut fx.service, &employee_b, "b2", 5);
    add_item(&mut fx.service, &employee_b, "b3", 5);

    assert_eq!(fx.service.visible(&manager_a, &fx.directory).inventory.len(), 5);
    assert_eq!(fx.service.visible(&employee_a, &fx.directory).inventory.len(), 2);
    assert_eq!(fx.service.visible(&employee_b, &fx.directory).inventory.len(), 3);
}

#[test]
fn mutations_without_company_context_are_refused() {
    let mut fx = fixture();
    let ghost = User::new("G", "g@x.com", Role::Admin, None);
    let err = fx
        .service
        .add_customer(
            &ghost,
            AddCustomer {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
            },
        )
        .unwrap_err();
    assert_eq!(err, DomainError::NotAuthenticated);
    assert!(fx.service.store().is_empty());
}

#[test]
fn add_customer_stamps_acting_company_and_zero_spend() {
    let mut fx = fixture();
    let actor = user(Role::Employee, &fx.company_c);
    let id = fx
        .service
        .add_customer(
            &actor,
            AddCustomer {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
            },
        )
        .unwrap();

    let visible = fx.service.visible(&actor, &fx.directory);
    let customer = visible.customers.iter().find(|c| c.id == id).unwrap();
    assert_eq!(customer.company_id, fx.company_c);
    assert_eq!(customer.total_spent, 0.0);
}

#[test]
fn transactional_lists_are_most_recent_first() {
    let mut fx = fixture();
    let actor = user(Role::Employee, &fx.company_c);
    for name in ["first", "second"] {
        fx.service
            .add_sale(
                &actor,
                AddSale {
                    customer: name.to_string(),
                    status: SaleStatus::Pending,
                    total: 10.0,
                    occurred_at: Utc::now(),
                },
            )
            .unwrap();
    }
    let visible = fx.service.visible(&actor, &fx.directory);
    assert_eq!(visible.sales[0].customer, "second");
    assert_eq!(visible.sales[1].customer, "first");
}

#[test]
fn inventory_catalog_keeps_insertion_order() {
    let mut fx = fixture();
    let actor = user(Role::Employee, &fx.company_c);
    add_item(&mut fx.service, &actor, "first", 1);
    add_item(&mut fx.service, &actor, "second", 1);
    let visible = fx.service.visible(&actor, &fx.directory);
    assert_eq!(visible.inventory[0].name, "first");
    assert_eq!(visible.inventory[1].name, "second");
}

#[test]
fn adjust_stock_floors_at_zero_with_one_history_entry() {
    let mut fx = fixture();
    let actor = user(Role::Employee, &fx.company_c);
    add_item(&mut fx.service, &actor, "widget", 5);
    let item_id = fx.service.visible(&actor, &fx.directory).inventory[0].id.clone();

    let new_quantity = fx
        .service
        .adjust_stock(
            &actor,
            &fx.directory,
            AdjustStock {
                item_id: item_id.clone(),
                delta: -1000,
                occurred_at: Utc::now(),
            },
        )
        .unwrap();

    assert_eq!(new_quantity, 0);
    let item = fx
        .service
        .inventory_item(&actor, &fx.directory, &item_id)
        .unwrap();
    assert_eq!(item.quantity, 0);
    // Opening entry plus exactly one adjustment entry.
    assert_eq!(item.history.len(), 2);
    assert_eq!(item.history[1].quantity, 0);
}

#[test]
fn manager_updates_sibling_company_supplier_in_place() {
    let mut fx = fixture();
    let employee_b = user(Role::Employee, &fx.company_b);
    fx.service
        .add_supplier(
            &employee_b,
            AddSupplier {
                name: "Beta Goods".to_string(),
                contact: "beta@goods.com".to_string(),
                category: "Electronics".to_string(),
            },
        )
        .unwrap();

    let manager_a = user(Role::Manager, &fx.company_a);
    let supplier_id = fx.service.visible(&manager_a, &fx.directory).suppliers[0]
        .id
        .clone();

    fx.service
        .update_supplier(
            &manager_a,
            &fx.directory,
            &supplier_id,
            SupplierPatch {
                contact: Some("sales@goods.com".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

    // The sibling partition was mutated, not the caller's own.
    let partition_b = fx.service.store().partition(&fx.company_b).unwrap();
    assert_eq!(partition_b.suppliers[0].contact, "sales@goods.com");
    assert!(fx.service.store().partition(&fx.company_a).is_none());
}

#[test]
fn employee_cannot_reach_sibling_company_records() {
    let mut fx = fixture();
    let employee_b = user(Role::Employee, &fx.company_b);
    fx.service
        .add_customer(
            &employee_b,
            AddCustomer {
                name: "B Customer".to_string(),
                email: "b@x.com".to_string(),
            },
        )
        .unwrap();
    let customer_id = fx.service.visible(&employee_b, &fx.directory).customers[0]
        .id
        .clone();

    let employee_a = user(Role::Employee, &fx.company_a);
    let err = fx
        .service
        .update_customer(
            &employee_a,
            &fx.directory,
            &customer_id,
            CustomerPatch::default(),
        )
        .unwrap_err();
    assert_eq!(err, DomainError::NotFound);
}

#[test]
fn double_delete_is_safe_and_reports_not_found() {
    let mut fx = fixture();
    let actor = user(Role::Employee, &fx.company_c);
    let id = fx
        .service
        .add_customer(
            &actor,
            AddCustomer {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
            },
        )
        .unwrap();

    fx.service.delete_customer(&actor, &fx.directory, &id).unwrap();
    let before = fx.service.store().clone();

    let err = fx
        .service
        .delete_customer(&actor, &fx.directory, &id)
        .unwrap_err();
    assert_eq!(err, DomainError::NotFound);
    assert_eq!(fx.service.store(), &before);
}

#[test]
fn snapshot_round_trip_preserves_visible_data_for_every_user() {
    let mut fx = fixture();
    let employee_a = user(Role::Employee, &fx.company_a);
    let employee_b = user(Role::Employee, &fx.company_b);
    let manager_a = user(Role::Manager, &fx.company_a);

    add_item(&mut fx.service, &employee_a, "a1", 4);
    add_item(&mut fx.service, &employee_b, "b1", 9);
    fx.service
        .add_transaction(
            &employee_a,
            AddTransaction {
                description: "Opening float".to_string(),
                amount: 100.0,
                kind: TransactionKind::CashIn,
                occurred_at: Utc::now(),
            },
        )
        .unwrap();

    let path = std::env::temp_dir().join(format!(
        "stockline-roundtrip-{}.json",
        uuid::Uuid::new_v4().simple()
    ));
    let file_store = Arc::new(JsonFileSnapshotStore::new(&path));
    let persisted = DataService::with_store(fx.service.store().clone(), file_store.clone()).unwrap();
    let reloaded = DataService::open(file_store).unwrap();

    for u in [&employee_a, &employee_b, &manager_a] {
        assert_eq!(
            persisted.visible(u, &fx.directory),
            reloaded.visible(u, &fx.directory)
        );
        assert_eq!(
            resolve_visible(u, &fx.directory, fx.service.store()),
            reloaded.visible(u, &fx.directory)
        );
    }

    let _ = std::fs::remove_file(&path);
}

#[test]
fn purchase_order_lifecycle_starts_pending_and_patches_freely() {
    let mut fx = fixture();
    let actor = user(Role::Manager, &fx.company_c);
    let id = fx
        .service
        .add_purchase_order(
            &actor,
            AddPurchaseOrder {
                supplier: "Acme".to_string(),
                total: 99.0,
                occurred_at: Utc::now(),
            },
        )
        .unwrap();

    let visible = fx.service.visible(&actor, &fx.directory);
    assert_eq!(
        visible.purchase_orders[0].status,
        stockline_records::PurchaseOrderStatus::Pending
    );

    fx.service
        .update_purchase_order(
            &actor,
            &fx.directory,
            &id,
            stockline_records::PurchaseOrderPatch {
                status: Some(stockline_records::PurchaseOrderStatus::Delivered),
                ..Default::default()
            },
        )
        .unwrap();
    fx.service.delete_purchase_order(&actor, &fx.directory, &id).unwrap();
    assert!(fx
        .service
        .visible(&actor, &fx.directory)
        .purchase_orders
        .is_empty());
}

#[test]
fn update_sale_status_toggles_both_ways() {
    let mut fx = fixture();
    let actor = user(Role::Employee, &fx.company_c);
    let id = fx
        .service
        .add_sale(
            &actor,
            AddSale {
                customer: "A".to_string(),
                status: SaleStatus::Pending,
                total: 10.0,
                occurred_at: Utc::now(),
            },
        )
        .unwrap();

    fx.service
        .update_sale_status(&actor, &fx.directory, &id, SaleStatus::Paid)
        .unwrap();
    assert_eq!(
        fx.service.visible(&actor, &fx.directory).sales[0].status,
        SaleStatus::Paid
    );

    fx.service
        .update_sale_status(&actor, &fx.directory, &id, SaleStatus::Pending)
        .unwrap();
    assert_eq!(
        fx.service.visible(&actor, &fx.directory).sales[0].status,
        SaleStatus::Pending
    );
}
