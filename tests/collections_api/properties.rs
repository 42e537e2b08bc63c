//! Property Tests
//!
//! Accessor behavior checked against std collections over generated inputs.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use crate::*;

fn field() -> impl Strategy<Value = String> {
    "[a-z]{1,6}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_put_then_get(field in field(), value in ".{0,16}") {
        let store = create_store();
        let map = create_direct(&store).map("m").unwrap();

        map.put(&field, &value).unwrap();
        prop_assert_eq!(map.get(&field).unwrap(), Some(value));
    }

    #[test]
    fn prop_remove_true_once_per_put(field in field(), puts in 1usize..4) {
        let store = create_store();
        let map = create_direct(&store).map("m").unwrap();

        for _ in 0..puts {
            map.put(&field, "v").unwrap();
        }
        prop_assert!(map.remove(&field).unwrap());
        prop_assert!(!map.remove(&field).unwrap());
        prop_assert!(!map.remove(&field).unwrap());

        map.put(&field, "v").unwrap();
        prop_assert!(map.remove(&field).unwrap());
    }

    #[test]
    fn prop_map_matches_hash_map(ops in prop::collection::vec((field(), prop::option::of("[a-z]{0,4}")), 0..40)) {
        let store = create_store();
        let map = create_direct(&store).map("m").unwrap();
        let mut model = HashMap::new();

        for (field, value) in ops {
            match value {
                Some(value) => {
                    let previous = map.put(&field, &value).unwrap();
                    prop_assert_eq!(previous, model.insert(field, value));
                }
                None => {
                    let removed = map.remove(&field).unwrap();
                    prop_assert_eq!(removed, model.remove(&field).is_some());
                }
            }
        }

        prop_assert_eq!(map.len().unwrap(), model.len());
        prop_assert_eq!(map.to_hash_map().unwrap(), model);
    }

    #[test]
    fn prop_set_len_is_distinct_added_minus_removed(
        added in prop::collection::vec("[a-e]", 0..30),
        removed in prop::collection::vec("[a-e]", 0..10),
    ) {
        let store = create_store();
        let set = create_direct(&store).set("s").unwrap();
        let mut model = HashSet::new();

        for v in &added {
            prop_assert_eq!(set.add(v).unwrap(), model.insert(v.clone()));
        }
        for v in &removed {
            prop_assert_eq!(set.remove(v).unwrap(), model.remove(v));
        }

        prop_assert_eq!(set.len().unwrap(), model.len());
        prop_assert_eq!(set.to_hash_set().unwrap(), model);
    }

    #[test]
    fn prop_list_get_matches_vec(values in prop::collection::vec("[a-z]{0,3}", 0..20), probe in 0usize..25) {
        let store = create_store();
        let list = create_direct(&store).list("l").unwrap();
        list.add_all(&values).unwrap();

        match values.get(probe) {
            Some(expected) => {
                prop_assert_eq!(&list.get(probe).unwrap(), expected);
            }
            None => {
                prop_assert!(list.get(probe).unwrap_err().is_out_of_range());
            }
        }
        prop_assert_eq!(list.to_vec().unwrap(), values);
    }

    #[test]
    fn prop_list_remove_at_matches_vec(values in prop::collection::vec("[a-c]", 1..15), index in 0usize..15) {
        let store = create_store();
        let list = create_direct(&store).list("l").unwrap();
        list.add_all(&values).unwrap();
        let mut model = values.clone();

        if index < model.len() {
            let expected = model.remove(index);
            prop_assert_eq!(list.remove_at(index).unwrap(), expected);
        } else {
            prop_assert!(list.remove_at(index).unwrap_err().is_out_of_range());
        }
        prop_assert_eq!(list.to_vec().unwrap(), model);
    }
}
