// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use tether::prelude::*;
use tether::SendError;
use tether_test_utils::test_data::{sample_ints, sample_pairs};
use tether_test_utils::{Pair, Recorder, Watcher};

struct Container {
    numbers: Signal<i32>,
    pairs: Signal<Pair>,
}

fn container() -> Container {
    Container {
        numbers: Signal::new(),
        pairs: Signal::new(),
    }
}

#[test]
fn test_no_observers_operation() {
    let container = container();
    container.numbers.send(5);
    assert_eq!(container.numbers.point().subscriber_count(), 0);
}

#[test]
fn test_notification() {
    let container = container();
    let received = Recorder::new();
    container.numbers.point().observe(&Unowned, received.sink());

    for value in sample_ints() {
        container.numbers.send(value);
    }

    assert_eq!(received.values(), sample_ints());
}

#[test]
fn test_nothing_delivered_at_subscribe() {
    let container = container();
    container.numbers.send(1);
    container.numbers.send(2);

    let received = Recorder::new();
    container.numbers.point().observe(&Unowned, received.sink());
    assert!(received.is_empty());
    assert!(!container.numbers.point().replays());

    container.numbers.send(3);
    assert_eq!(received.values(), vec![3]);
}

#[test]
fn test_observation_lifetime() {
    let container = container();
    let observer1 = Watcher::shared("observer1");
    let observer2 = Watcher::shared("observer2");
    let received1 = Recorder::new();
    let received2 = Recorder::new();
    container.numbers.point().observe(&observer1, received1.sink());
    container.numbers.point().observe(&observer2, received2.sink());

    container.numbers.send(99);
    container.numbers.send(-18);
    drop(observer1);
    container.numbers.send(7);
    container.numbers.send(15);
    drop(observer2);
    container.numbers.send(12);

    assert_eq!(received1.values(), vec![99, -18]);
    assert_eq!(received2.values(), vec![99, -18, 7, 15]);
    assert_eq!(container.numbers.point().subscriber_count(), 0);
}

#[test]
fn test_value_filtering() {
    let container = container();
    let values1 = Recorder::new();
    let values2 = Recorder::new();
    container
        .pairs
        .point()
        .observe_distinct(&Unowned, |p: &Pair| p.value1, values1.sink());
    container
        .pairs
        .point()
        .observe_distinct(&Unowned, |p: &Pair| p.value2, values2.sink());

    for pair in sample_pairs() {
        container.pairs.send(pair);
    }

    assert_eq!(values1.values(), vec![1, 7, 3]);
    assert_eq!(values2.values(), vec![12, -8, 17]);
}

#[test]
fn test_split_producer_and_consumer_handles() -> anyhow::Result<()> {
    let signal = Signal::new();
    let producer: Sender<&'static str> = signal.sender();
    let consumer: SubscriptionPoint<&'static str> = signal.point();
    let received = Recorder::new();
    let lifeline = Lifeline::new();
    consumer.observe(&lifeline, received.sink());

    producer.send("opened")?;
    producer.send("closed")?;

    assert_eq!(received.values(), vec!["opened", "closed"]);
    Ok(())
}

#[test]
fn test_sender_fails_once_signal_is_dropped() {
    let signal = Signal::<i32>::new();
    let sender = signal.sender();
    let point = signal.point();

    drop(signal);

    assert!(!sender.is_connected());
    assert!(!point.is_connected());
    assert_eq!(sender.send(1), Err(SendError(1)));
}

#[test]
fn test_default_and_debug() {
    let signal = Signal::<u8>::default();
    let dbg = format!("{signal:?}");
    assert!(dbg.contains("Signal"));
    assert!(dbg.contains("replay: false"));
    assert!(dbg.contains("has_last: false"));
}
