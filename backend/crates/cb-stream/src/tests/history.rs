use crate::HistoryBuffer;
use crate::tests::event;

use googletest::prelude::*;

#[test]
fn given_empty_buffer_when_snapshot_then_empty() {
    let buffer = HistoryBuffer::new(3);

    assert!(buffer.snapshot().is_empty());
    assert!(buffer.is_empty());
}

#[test]
fn given_inserts_when_snapshot_then_newest_first() {
    let mut buffer = HistoryBuffer::new(3);

    buffer.push(event("a"));
    buffer.push(event("b"));

    let messages: Vec<_> = buffer
        .snapshot()
        .iter()
        .map(|e| e.message().unwrap().to_string())
        .collect();
    assert_that!(messages, eq(&vec!["b".to_string(), "a".to_string()]));
}

#[test]
fn given_full_buffer_when_push_then_oldest_evicted() {
    let mut buffer = HistoryBuffer::new(2);

    buffer.push(event("a"));
    buffer.push(event("b"));
    buffer.push(event("c"));

    let snapshot = buffer.snapshot();
    assert_that!(buffer.len(), eq(2));
    assert_that!(snapshot[0].message(), some(eq("c")));
    assert_that!(snapshot[1].message(), some(eq("b")));
}

#[test]
fn given_items_when_cleared_then_count_returned_and_empty() {
    let mut buffer = HistoryBuffer::new(5);
    buffer.push(event("a"));
    buffer.push(event("b"));

    let cleared = buffer.clear();

    assert_that!(cleared, eq(2));
    assert!(buffer.is_empty());
    assert_that!(buffer.clear(), eq(0));
}

#[test]
fn given_zero_capacity_when_created_then_holds_one() {
    let mut buffer = HistoryBuffer::new(0);

    buffer.push(event("a"));
    buffer.push(event("b"));

    assert_that!(buffer.capacity(), eq(1));
    assert_that!(buffer.snapshot()[0].message(), some(eq("b")));
}
