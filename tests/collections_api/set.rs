//! Set Accessor Tests
//!
//! Tests for RedisSet over a set.

use std::collections::HashSet;

use crate::*;

#[test]
fn test_add_twice_is_true_then_false() {
    let store = create_store();
    let set = create_pooled(&store).set("tags").unwrap();

    assert!(set.add("blue").unwrap());
    assert!(!set.add("blue").unwrap());
    assert_eq!(set.len().unwrap(), 1);
}

#[test]
fn test_remove_reports_membership() {
    let store = create_store();
    let set = create_pooled(&store).set("tags").unwrap();
    set.add("blue").unwrap();

    assert!(set.remove("blue").unwrap());
    assert!(!set.remove("blue").unwrap());
    assert!(!set.contains("blue").unwrap());
}

#[test]
fn test_len_counts_distinct_members() {
    let store = create_store();
    let set = create_pooled(&store).set("tags").unwrap();

    set.add("a").unwrap();
    set.add("b").unwrap();
    set.add("a").unwrap();
    set.add("c").unwrap();
    set.remove("b").unwrap();

    assert_eq!(set.len().unwrap(), 2);
}

#[test]
fn test_add_all_counts_new_members() {
    let store = create_store();
    let set = create_pooled(&store).set("tags").unwrap();
    set.add("a").unwrap();

    assert_eq!(set.add_all(["a", "b", "c", "b"]).unwrap(), 2);
    assert_eq!(set.len().unwrap(), 3);
}

#[test]
fn test_remove_all_counts_present_members() {
    let store = create_store();
    let set = create_pooled(&store).set("tags").unwrap();
    set.add_all(["a", "b", "c"]).unwrap();

    assert_eq!(set.remove_all(["a", "c", "z"]).unwrap(), 2);
    assert_eq!(set.to_hash_set().unwrap(), HashSet::from(["b".to_string()]));
}

#[test]
fn test_batch_with_no_members_sends_nothing() {
    let store = create_store();
    let set = create_pooled(&store).set("tags").unwrap();

    assert_eq!(set.add_all(Vec::<&str>::new()).unwrap(), 0);
    assert_eq!(set.remove_all(Vec::<&str>::new()).unwrap(), 0);
    assert_eq!(store.commands_processed(), 0);
}

#[test]
fn test_missing_set_is_empty() {
    let store = create_store();
    let set = create_pooled(&store).set("tags").unwrap();

    assert!(set.is_empty().unwrap());
    assert!(!set.contains("a").unwrap());
    assert_eq!(set.iter().unwrap().len(), 0);
}

#[test]
fn test_iter_yields_each_member_once() {
    let store = create_store();
    let set = create_pooled(&store).set("tags").unwrap();
    set.add_all(["a", "b", "c"]).unwrap();

    let members: Vec<String> = set.iter().unwrap().collect();
    assert_eq!(sorted(members), vec!["a", "b", "c"]);
}

#[test]
fn test_clear_deletes_key() {
    let store = create_store();
    let set = create_pooled(&store).set("tags").unwrap();
    set.add_all(["a", "b"]).unwrap();

    set.clear().unwrap();
    assert!(set.is_empty().unwrap());
    assert_eq!(store.key_count(TEST_DATABASE), 0);
}

#[test]
fn test_wrong_type_is_command_error() {
    let store = create_store();
    let collections = create_pooled(&store);
    collections.map("shared").unwrap().put("f", "v").unwrap();

    let err = collections.set("shared").unwrap().add("x").unwrap_err();
    assert!(err.is_command());
}
