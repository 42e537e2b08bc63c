//! Concurrency Tests
//!
//! Accessors are shared across threads; the store's own per-key
//! serialization decides the outcome.

use std::thread;

use crate::*;

#[test]
fn test_concurrent_set_add_converges() {
    let store = create_store();
    let set = create_pooled(&store).set("tags").unwrap();

    let added: Vec<bool> = thread::scope(|s| {
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let set = set.clone();
                s.spawn(move || set.add("blue").unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(added.iter().filter(|&&a| a).count(), 1);
    assert_eq!(set.len().unwrap(), 1);
    assert!(set.contains("blue").unwrap());
}

#[test]
fn test_many_threads_adding_same_members() {
    let store = create_store();
    let collections = create_pooled(&store);

    thread::scope(|s| {
        for _ in 0..8 {
            let set = collections.set("tags").unwrap();
            s.spawn(move || {
                for i in 0..50 {
                    set.add(&format!("m{i}")).unwrap();
                }
            });
        }
    });

    assert_eq!(collections.set("tags").unwrap().len().unwrap(), 50);
}

#[test]
fn test_concurrent_list_appends_are_all_kept() {
    let store = create_store();
    let list = create_pooled(&store).list("jobs").unwrap();

    thread::scope(|s| {
        for t in 0..4 {
            let list = list.clone();
            s.spawn(move || {
                for i in 0..25 {
                    list.add(&format!("{t}:{i}")).unwrap();
                }
            });
        }
    });

    assert_eq!(list.len().unwrap(), 100);
}

#[test]
fn test_per_thread_order_preserved() {
    let store = create_store();
    let list = create_pooled(&store).list("jobs").unwrap();

    thread::scope(|s| {
        for t in 0..3 {
            let list = list.clone();
            s.spawn(move || {
                for i in 0..20 {
                    list.add(&format!("{t}:{i}")).unwrap();
                }
            });
        }
    });

    let values = list.to_vec().unwrap();
    for t in 0..3 {
        let prefix = format!("{t}:");
        let seq: Vec<usize> = values
            .iter()
            .filter_map(|v| v.strip_prefix(prefix.as_str()))
            .map(|i| i.parse().unwrap())
            .collect();
        assert_eq!(seq, (0..20).collect::<Vec<_>>());
    }
}

#[test]
fn test_concurrent_map_writers_on_distinct_fields() {
    let store = create_store();
    let map = create_pooled(&store).map("users").unwrap();

    thread::scope(|s| {
        for t in 0..4 {
            let map = map.clone();
            s.spawn(move || {
                for i in 0..10 {
                    map.put(&format!("{t}:{i}"), "v").unwrap();
                }
            });
        }
    });

    assert_eq!(map.len().unwrap(), 40);
}

#[test]
fn test_direct_handle_shared_across_threads() {
    let store = create_store();
    let set = create_direct(&store).set("tags").unwrap();

    thread::scope(|s| {
        for t in 0..4 {
            let set = set.clone();
            s.spawn(move || {
                set.add(&format!("t{t}")).unwrap();
                set.add("common").unwrap();
            });
        }
    });

    assert_eq!(set.len().unwrap(), 5);
}
