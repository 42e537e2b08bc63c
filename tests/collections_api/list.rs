//! List Accessor Tests
//!
//! Tests for RedisList over a list.

use redcoll::Error;

use crate::*;

fn list_of(values: &[&str]) -> (Arc<MemoryStore>, RedisList<Pooled<MemoryPool>>) {
    let store = create_store();
    let list = create_pooled(&store).list("jobs").unwrap();
    list.add_all(values).unwrap();
    (store, list)
}

// =============================================================================
// ADDING
// =============================================================================

#[test]
fn test_add_last_then_get() {
    let (_store, list) = list_of(&[]);

    assert_eq!(list.add_last("v1").unwrap(), 1);
    assert_eq!(list.add_last("v2").unwrap(), 2);

    assert_eq!(list.get(0).unwrap(), "v1");
    assert_eq!(list.get(1).unwrap(), "v2");
    assert!(list.get(2).unwrap_err().is_out_of_range());
}

#[test]
fn test_add_appends() {
    let (_store, list) = list_of(&["a"]);

    list.add("b").unwrap();
    assert_eq!(list.to_vec().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_add_first_prepends() {
    let (_store, list) = list_of(&["b"]);

    assert_eq!(list.add_first("a").unwrap(), 2);
    assert_eq!(list.to_vec().unwrap(), vec!["a", "b"]);
}

#[test]
fn test_duplicates_are_kept() {
    let (_store, list) = list_of(&["a", "a", "a"]);
    assert_eq!(list.len().unwrap(), 3);
}

#[test]
fn test_add_all_empty_sends_nothing() {
    let (store, list) = list_of(&[]);

    list.add_all(Vec::<String>::new()).unwrap();
    assert_eq!(store.commands_processed(), 0);
}

// =============================================================================
// POSITIONAL ACCESS
// =============================================================================

#[test]
fn test_get_out_of_range_reports_length() {
    let (_store, list) = list_of(&["a", "b"]);

    match list.get(5).unwrap_err() {
        Error::OutOfRange { index, len } => {
            assert_eq!(index, 5);
            assert_eq!(len, Some(2));
        }
        other => panic!("expected out of range, got {other:?}"),
    }
}

#[test]
fn test_get_on_missing_list_is_out_of_range() {
    let (_store, list) = list_of(&[]);
    assert!(list.get(0).unwrap_err().is_out_of_range());
}

#[test]
fn test_set_replaces_element() {
    let (_store, list) = list_of(&["a", "b", "c"]);

    assert_eq!(list.set(1, "B").unwrap(), "b");
    assert_eq!(list.to_vec().unwrap(), vec!["a", "B", "c"]);
}

#[test]
fn test_set_out_of_range_changes_nothing() {
    let (_store, list) = list_of(&["a"]);

    assert!(list.set(1, "x").unwrap_err().is_out_of_range());
    assert_eq!(list.to_vec().unwrap(), vec!["a"]);
}

#[test]
fn test_remove_at_middle() {
    let (_store, list) = list_of(&["a", "b", "c"]);

    assert_eq!(list.remove_at(1).unwrap(), "b");
    assert_eq!(list.to_vec().unwrap(), vec!["a", "c"]);
}

#[test]
fn test_remove_at_keeps_equal_values_elsewhere() {
    let (_store, list) = list_of(&["x", "y", "x"]);

    assert_eq!(list.remove_at(2).unwrap(), "x");
    assert_eq!(list.to_vec().unwrap(), vec!["x", "y"]);
}

#[test]
fn test_remove_at_is_one_lookup_and_one_transaction() {
    let store = create_store();
    let list = create_direct(&store).list("jobs").unwrap();
    list.add_all(["a", "b", "c"]).unwrap();

    let before = store.commands_processed();
    assert_eq!(list.remove_at(0).unwrap(), "a");
    assert_eq!(store.commands_processed(), before + 2);

    let values = list.to_vec().unwrap();
    assert_eq!(values, vec!["b", "c"]);
    assert!(values.iter().all(|v| !v.starts_with("redcoll:removed:")));
}

#[test]
fn test_remove_at_out_of_range() {
    let (_store, list) = list_of(&["a"]);

    assert!(list.remove_at(3).unwrap_err().is_out_of_range());
    assert_eq!(list.len().unwrap(), 1);
}

#[test]
fn test_first_and_last() {
    let (_store, list) = list_of(&[]);
    assert_eq!(list.first().unwrap(), None);
    assert_eq!(list.last().unwrap(), None);

    list.add_all(["a", "b", "c"]).unwrap();
    assert_eq!(list.first().unwrap(), Some("a".to_string()));
    assert_eq!(list.last().unwrap(), Some("c".to_string()));
}

#[test]
fn test_pop_from_both_ends() {
    let (_store, list) = list_of(&["a", "b", "c"]);

    assert_eq!(list.pop_first().unwrap(), Some("a".to_string()));
    assert_eq!(list.pop_last().unwrap(), Some("c".to_string()));
    assert_eq!(list.pop_last().unwrap(), Some("b".to_string()));
    assert_eq!(list.pop_first().unwrap(), None);
    assert!(list.is_empty().unwrap());
}

// =============================================================================
// BY VALUE
// =============================================================================

#[test]
fn test_remove_value_removes_first_match() {
    let (_store, list) = list_of(&["a", "b", "a"]);

    assert!(list.remove("a").unwrap());
    assert_eq!(list.to_vec().unwrap(), vec!["b", "a"]);
}

#[test]
fn test_remove_missing_value_is_false() {
    let (_store, list) = list_of(&["a"]);

    assert!(!list.remove("z").unwrap());
    assert_eq!(list.len().unwrap(), 1);
}

#[test]
fn test_remove_all_occurrences() {
    let (_store, list) = list_of(&["a", "b", "a", "a"]);

    assert_eq!(list.remove_all("a").unwrap(), 3);
    assert_eq!(list.to_vec().unwrap(), vec!["b"]);
}

#[test]
fn test_index_of_and_contains() {
    let (_store, list) = list_of(&["a", "b", "b"]);

    assert_eq!(list.index_of("b").unwrap(), Some(1));
    assert_eq!(list.index_of("z").unwrap(), None);
    assert!(list.contains("a").unwrap());
    assert!(!list.contains("z").unwrap());
}

// =============================================================================
// ITERATION
// =============================================================================

#[test]
fn test_iter_in_order() {
    let (_store, list) = list_of(&["a", "b", "c"]);

    let values: Vec<String> = list.iter().unwrap().collect();
    assert_eq!(values, vec!["a", "b", "c"]);
}

#[test]
fn test_iter_snapshot_ignores_later_writes() {
    let (_store, list) = list_of(&["a"]);

    let iter = list.iter().unwrap();
    list.add("b").unwrap();
    list.remove("a").unwrap();

    assert_eq!(iter.as_slice(), ["a".to_string()]);
    assert_eq!(iter.restart().collect::<Vec<_>>(), vec!["a"]);
}

#[test]
fn test_iter_restart_costs_no_commands() {
    let (store, list) = list_of(&["a", "b"]);

    let mut iter = list.iter().unwrap();
    let before = store.commands_processed();
    iter.next();
    assert_eq!(iter.restart().count(), 2);
    assert_eq!(store.commands_processed(), before);
}

#[test]
fn test_clear() {
    let (store, list) = list_of(&["a", "b"]);

    list.clear().unwrap();
    assert_eq!(list.len().unwrap(), 0);
    assert_eq!(store.key_count(TEST_DATABASE), 0);
}
