//! Property tests for the visibility resolver: no duplication, no omission.

use chrono::Utc;
use proptest::prelude::*;

use stockline_auth::{Role, User};
use stockline_core::{CompanyId, GroupId, RecordId};
use stockline_directory::{Company, CompanyDirectory, CompanyGroup};
use stockline_records::{Category, InventoryItem};
use stockline_store::{resolve_visible, PartitionedStore};

const TOKENS: [&str; 5] = ["AAAAAA", "BBBBBB", "CCCCCC", "DDDDDD", "EEEEEE"];

fn company(token: &str) -> CompanyId {
    CompanyId::parse(token).unwrap()
}

/// Directory over the first `n` tokens, where `grouped[i]` says whether
/// company `i` joins the shared group.
fn directory_with(grouped: &[bool]) -> (CompanyDirectory, GroupId) {
    let group_id = GroupId::new();
    let companies = grouped
        .iter()
        .enumerate()
        .map(|(i, in_group)| Company {
            id: company(TOKENS[i]),
            name: format!("Company {i}"),
            address: format!("{i} Main St"),
            group_id: in_group.then_some(group_id),
        })
        .collect();
    let groups = vec![CompanyGroup {
        id: group_id,
        name: "G".to_string(),
    }];
    (CompanyDirectory::with_entries(companies, groups), group_id)
}

fn store_with_counts(counts: &[usize]) -> PartitionedStore {
    let mut store = PartitionedStore::new();
    for (i, n) in counts.iter().enumerate() {
        let partition = store.ensure_partition(company(TOKENS[i]));
        for k in 0..*n {
            partition.inventory.push(InventoryItem::new(
                RecordId::generate("ITM"),
                format!("item-{i}-{k}"),
                format!("SKU-{i}-{k}"),
                Category::Groceries,
                "Acme",
                1.0,
                2.0,
                1,
                company(TOKENS[i]),
                Utc::now(),
            ));
        }
    }
    store
}

proptest! {
    /// Elevated-role visibility over a group equals the sum of member
    /// partition counts, in directory order.
    #[test]
    fn aggregate_count_is_sum_of_member_counts(
        grouped in prop::collection::vec(any::<bool>(), 5),
        counts in prop::collection::vec(0usize..6, 5),
        seat in 0usize..5,
        elevated in prop_oneof![Just(Role::Head), Just(Role::Manager), Just(Role::Admin)],
    ) {
        let (directory, _) = directory_with(&grouped);
        let store = store_with_counts(&counts);
        let viewer = User::new("V", "v@x.com", elevated, Some(company(TOKENS[seat])));

        let visible = resolve_visible(&viewer, &directory, &store);

        let expected: usize = if grouped[seat] {
            counts
                .iter()
                .zip(&grouped)
                .filter(|(_, in_group)| **in_group)
                .map(|(n, _)| *n)
                .sum()
        } else {
            counts[seat]
        };
        prop_assert_eq!(visible.inventory.len(), expected);

        // No duplication: every id appears once.
        let mut ids: Vec<&str> = visible.inventory.iter().map(|i| i.id.as_str()).collect();
        ids.sort();
        let before = ids.len();
        ids.dedup();
        prop_assert_eq!(ids.len(), before);
    }

    /// Employees always see exactly their own partition, regardless of group
    /// membership.
    #[test]
    fn employee_count_is_own_partition_count(
        grouped in prop::collection::vec(any::<bool>(), 5),
        counts in prop::collection::vec(0usize..6, 5),
        seat in 0usize..5,
    ) {
        let (directory, _) = directory_with(&grouped);
        let store = store_with_counts(&counts);
        let viewer = User::new("V", "v@x.com", Role::Employee, Some(company(TOKENS[seat])));

        let visible = resolve_visible(&viewer, &directory, &store);
        prop_assert_eq!(visible.inventory.len(), counts[seat]);
        prop_assert!(visible.inventory.iter().all(|i| i.company_id == company(TOKENS[seat])));
    }
}
