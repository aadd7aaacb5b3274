//! Removed, overwritten, and shrunk-away elements must be released.

use rootish::RootishArrayStack;
use rootish_test_utils::{DropTracker, Tracked};

fn tracked_stack(tracker: &DropTracker, n: usize) -> RootishArrayStack<Tracked> {
    (0..n).map(|id| tracker.track(id)).collect()
}

#[test]
fn remove_hands_back_ownership() {
    let tracker = DropTracker::new();
    let mut stack = tracked_stack(&tracker, 10);

    let removed = stack.remove(4).unwrap();
    assert_eq!(removed.id(), 4);
    assert_eq!(tracker.dropped(), 0);
    drop(removed);
    assert_eq!(tracker.dropped(), 1);
    assert_eq!(tracker.live(), 9);
}

#[test]
fn set_returns_the_replaced_value() {
    let tracker = DropTracker::new();
    let mut stack = tracked_stack(&tracker, 3);
    let old = stack.set(1, tracker.track(100)).unwrap();
    assert_eq!(old.id(), 1);
    drop(old);
    assert_eq!(tracker.live(), 3);
    assert_eq!(stack.get(1).unwrap().id(), 100);
}

#[test]
fn rejected_calls_drop_their_argument_and_keep_contents() {
    let tracker = DropTracker::new();
    let mut stack = tracked_stack(&tracker, 3);
    assert!(stack.insert(5, tracker.track(50)).is_err());
    assert!(stack.set(3, tracker.track(30)).is_err());
    assert_eq!(tracker.dropped(), 2);
    assert_eq!(stack.len(), 3);
    assert_eq!(tracker.live(), 3);
}

#[test]
fn draining_from_the_front_leaves_nothing_alive() {
    let tracker = DropTracker::new();
    let mut stack = tracked_stack(&tracker, 200);
    let mut expected_id = 0;
    while let Ok(value) = stack.remove(0) {
        assert_eq!(value.id(), expected_id);
        expected_id += 1;
    }
    assert_eq!(expected_id, 200);
    assert_eq!(tracker.live(), 0);
    assert_eq!(stack.block_count(), 0);
}

#[test]
fn clear_and_drop_release_everything() {
    let tracker = DropTracker::new();
    let mut stack = tracked_stack(&tracker, 50);
    stack.clear();
    assert_eq!(tracker.live(), 0);

    let stack = tracked_stack(&tracker, 50);
    drop(stack);
    assert_eq!(tracker.live(), 0);
}

#[test]
fn partially_consumed_into_iter_drops_the_rest() {
    let tracker = DropTracker::new();
    let stack = tracked_stack(&tracker, 30);
    let mut iter = stack.into_iter();
    let first = iter.next().unwrap();
    assert_eq!(first.id(), 0);
    drop(iter);
    assert_eq!(tracker.live(), 1);
    drop(first);
    assert_eq!(tracker.live(), 0);
}

#[test]
fn every_value_dropped_exactly_once_under_churn() {
    let tracker = DropTracker::new();
    let mut stack = RootishArrayStack::new();
    let mut next_id = 0;
    for round in 0..20usize {
        for _ in 0..(round * 3 + 1) {
            let at = (next_id * 7) % (stack.len() + 1);
            stack.insert(at, tracker.track(next_id)).unwrap();
            next_id += 1;
        }
        for _ in 0..(round * 2) {
            let at = (next_id * 13) % stack.len();
            drop(stack.remove(at).unwrap());
        }
        assert_eq!(tracker.live(), stack.len());
    }
    drop(stack);
    assert_eq!(tracker.created(), next_id);
    assert_eq!(tracker.dropped(), next_id);
}
