//! `stockline-store` — the per-company partitioned store, the visibility
//! resolver, and the mutation operations.
//!
//! Reads flow store → visibility resolver → caller; writes flow caller →
//! mutation operation → owning partition → store → snapshot. The resolver is
//! a pure function over (user, directory, store) and never mutates anything.

pub mod commands;
pub mod partition;
pub mod service;
pub mod snapshot;
pub mod visibility;

pub use commands::{
    AddCustomer, AddInventoryItem, AddPurchaseOrder, AddSale, AddSupplier, AddTransaction,
    AdjustStock,
};
pub use partition::{Partition, PartitionedStore};
pub use service::DataService;
pub use snapshot::{InMemorySnapshotStore, JsonFileSnapshotStore, SnapshotError, SnapshotStore};
pub use visibility::{resolve_visible, VisibleData};
