// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::cell::RefCell;
use std::rc::Rc;
use tether_core::{SubscriptionRegistry, Unowned};
use tether_test_utils::test_data::{sample_ints, INITIAL_INT};
use tether_test_utils::{Recorder, Watcher};

#[test]
fn test_replaying_registry_delivers_initial_value_inside_subscribe() {
    let registry = SubscriptionRegistry::replaying(INITIAL_INT);
    let recorder = Recorder::new();

    registry.point().observe(&Unowned, recorder.sink());

    assert_eq!(recorder.values(), vec![INITIAL_INT]);
}

#[test]
fn test_replaying_registry_delivers_full_history() {
    let registry = SubscriptionRegistry::replaying(INITIAL_INT);
    let recorder = Recorder::new();
    registry.point().observe(&Unowned, recorder.sink());

    for value in sample_ints() {
        registry.broadcast(value);
    }

    let mut expected = vec![INITIAL_INT];
    expected.extend(sample_ints());
    assert_eq!(recorder.values(), expected);
}

#[test]
fn test_late_subscriber_receives_most_recent_value() {
    let registry = SubscriptionRegistry::replaying(INITIAL_INT);
    registry.broadcast(17);
    registry.broadcast(42);

    let recorder = Recorder::new();
    registry.point().observe(&Unowned, recorder.sink());

    assert_eq!(recorder.values(), vec![42]);
}

#[test]
fn test_transient_registry_does_not_replay() {
    let registry = SubscriptionRegistry::transient();
    registry.broadcast(1);

    let recorder = Recorder::new();
    registry.point().observe(&Unowned, recorder.sink());
    assert!(recorder.is_empty());

    registry.broadcast(2);
    assert_eq!(recorder.values(), vec![2]);
}

#[test]
fn test_transient_registry_never_stores_a_value() {
    let registry = SubscriptionRegistry::transient();
    for value in sample_ints() {
        registry.broadcast(value);
    }

    assert!(!registry.replays());
    assert!(!registry.has_last());
}

#[test]
fn test_replaying_registry_reports_stored_value() {
    let registry = SubscriptionRegistry::replaying(INITIAL_INT);
    assert!(registry.replays());
    assert!(registry.has_last());
}

#[test]
fn test_broadcast_without_subscribers_is_harmless() {
    let registry = SubscriptionRegistry::transient();
    for value in 0..1_000 {
        registry.broadcast(value);
    }
    assert_eq!(registry.subscriber_count(), 0);
}

#[test]
fn test_released_owner_stops_receiving() {
    let registry = SubscriptionRegistry::replaying(INITIAL_INT);
    let first = Watcher::shared("first");
    let second = Watcher::shared("second");
    let first_values = Recorder::new();
    let second_values = Recorder::new();
    registry.point().observe(&first, first_values.sink());
    registry.point().observe(&second, second_values.sink());

    registry.broadcast(99);
    registry.broadcast(-18);
    drop(first);
    registry.broadcast(7);
    registry.broadcast(15);
    drop(second);
    registry.broadcast(12);

    assert_eq!(first_values.values(), vec![INITIAL_INT, 99, -18]);
    assert_eq!(second_values.values(), vec![INITIAL_INT, 99, -18, 7, 15]);
}

#[test]
fn test_expired_entries_are_pruned_lazily() {
    let registry = SubscriptionRegistry::transient();
    let kept = Watcher::shared("kept");
    let released = Watcher::shared("released");
    registry.point().observe(&kept, |_, _: i32| {});
    registry.point().observe(&released, |_, _: i32| {});

    drop(released);
    // Nothing has visited the dead entry yet.
    assert_eq!(registry.subscriber_count(), 2);

    registry.broadcast(1);
    assert_eq!(registry.subscriber_count(), 1);
}

#[test]
fn test_eviction_releases_callback_state() {
    let registry = SubscriptionRegistry::transient();
    let owner = Watcher::shared("owner");
    let captured = Rc::new(RefCell::new(Vec::new()));

    let state = Rc::clone(&captured);
    registry
        .point()
        .observe(&owner, move |_, value: i32| state.borrow_mut().push(value));
    assert_eq!(Rc::strong_count(&captured), 2);

    drop(owner);
    registry.broadcast(1);

    assert_eq!(Rc::strong_count(&captured), 1);
    assert!(captured.borrow().is_empty());
}

#[test]
fn test_unowned_subscription_never_expires() {
    let registry = SubscriptionRegistry::transient();
    let recorder = Recorder::new();
    registry.point().observe(&Unowned, recorder.sink());

    for value in sample_ints() {
        registry.broadcast(value);
    }

    assert_eq!(recorder.values(), sample_ints());
    assert_eq!(registry.subscriber_count(), 1);
}

#[test]
fn test_callback_receives_the_owner() {
    let registry = SubscriptionRegistry::transient();
    let owner = Watcher::shared("screen");
    let names = Recorder::new();

    let sink = names.clone();
    registry.point().observe(&owner, move |watcher: Rc<Watcher>, value: i32| {
        sink.push(format!("{}:{value}", watcher.name));
    });
    registry.broadcast(3);

    assert_eq!(names.values(), vec!["screen:3".to_string()]);
}

#[test]
fn test_subscribers_are_visited_in_registration_order() {
    let registry = SubscriptionRegistry::transient();
    let order = Recorder::new();

    for label in ['A', 'B', 'C'] {
        let sink = order.clone();
        registry
            .point()
            .observe(&Unowned, move |_, _: u8| sink.push(label));
    }
    registry.broadcast(0);

    assert_eq!(order.values(), vec!['A', 'B', 'C']);
}

#[test]
fn test_point_of_dropped_registry_registers_nothing() {
    let registry = SubscriptionRegistry::<i32>::transient();
    let point = registry.point();
    assert!(point.is_connected());

    drop(registry);

    let recorder = Recorder::new();
    point.observe(&Unowned, recorder.sink());
    assert!(!point.is_connected());
    assert!(!point.replays());
    assert_eq!(point.subscriber_count(), 0);
    assert!(recorder.is_empty());
}

#[test]
fn test_point_clones_share_the_registry() {
    let registry = SubscriptionRegistry::replaying(0);
    let point = registry.point();
    let clone = point.clone();

    point.observe(&Unowned, |_, _| {});
    clone.observe(&Unowned, |_, _| {});

    assert_eq!(registry.subscriber_count(), 2);
    assert_eq!(clone.subscriber_count(), 2);
    assert!(clone.replays());
}

#[test]
fn test_debug_format() {
    let registry = SubscriptionRegistry::replaying(1);
    registry.point().observe(&Unowned, |_, _| {});

    let dbg = format!("{registry:?}");
    assert!(dbg.contains("SubscriptionRegistry"));
    assert!(dbg.contains("subscribers: 1"));
    assert!(dbg.contains("replay: true"));
}
