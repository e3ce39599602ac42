//! Reference scenario and fixture checks.

use rosterdb_core::{SortDirection, SortField, Student, StudentId};
use rosterdb_testkit::{populated_store, scenario_store};

fn ids(rows: &[&Student]) -> Vec<u64> {
    rows.iter().map(|s| s.id.as_u64()).collect()
}

#[test]
fn reference_scenario() {
    let mut store = scenario_store();

    assert_eq!(ids(&store.list()), vec![1, 2, 3]);
    assert_eq!(ids(&store.search_by_name("Alice")), vec![1, 3]);

    assert!(store.remove(StudentId::new(2)));
    assert_eq!(
        store.list(),
        vec![
            &Student::new(StudentId::new(1), "Alice", 20, "A"),
            &Student::new(StudentId::new(3), "Alice", 22, "C"),
        ]
    );
    assert_eq!(
        ids(&store.ordered(SortField::Age, SortDirection::Desc)),
        vec![3, 1]
    );
    store.verify_integrity().unwrap();
}

#[test]
fn removed_id_not_reissued() {
    let mut store = scenario_store();
    assert!(store.remove(StudentId::new(3)));
    assert_eq!(store.add("Alice", 23, "D"), StudentId::new(4));
}

#[test]
fn ordered_ties_break_on_id() {
    let store = populated_store(30);

    for field in SortField::ALL {
        let rows = store.ordered(field, SortDirection::Asc);
        for pair in rows.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let same_key = match field {
                SortField::Id => false,
                SortField::Name => a.name == b.name,
                SortField::Age => a.age == b.age,
                SortField::Class => a.class_name == b.class_name,
            };
            if same_key {
                assert!(a.id < b.id, "tie on {field} not broken by id");
            }
        }
    }
}

#[test]
fn bulk_remove_prunes_every_bucket() {
    let mut store = populated_store(25);
    for id in 1..=25 {
        assert!(store.remove(StudentId::new(id)));
    }

    assert!(store.is_empty());
    assert!(store.names().is_empty());
    assert_eq!(store.next_id(), StudentId::new(26));
    store.verify_integrity().unwrap();
}
