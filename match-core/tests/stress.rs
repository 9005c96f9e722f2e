mod common;

use crate::common::*;
use match_core::prelude::*;
use rand::Rng;

#[test]
fn massive_order_insertion() {
    let mut engine = Engine::new();

    for i in 0..100_000u64 {
        let order = make_limit_order(i, Side::Buy, 1000 - (i % 1000), 10);
        engine.submit(order).unwrap();
    }

    assert_eq!(get_book_state(&engine, Side::Buy).len(), 100_000);
}

#[test]
fn massive_order_cancellation() {
    let mut engine = Engine::new();

    for i in 0..50_000u64 {
        let order = make_limit_order(i, Side::Sell, 1000 + (i % 500), 10);
        engine.submit(order).unwrap();
    }

    let mut rng = rand::rng();
    for _ in 0..25_000 {
        let id_to_cancel = rng.random_range(0..50_000u64);
        let _ = engine.cancel(id_to_cancel);
    }

    // No assertion beyond "no panic": cancelling an id twice is an expected
    // UnknownOrderId, not a bug.
}

#[test]
fn massive_order_matching_drains_one_side() {
    let mut engine = Engine::new();

    for i in 0..30_000u64 {
        let sell = make_limit_order(i, Side::Sell, 1000 + (i % 500), 10);
        engine.submit(sell).unwrap();
    }

    // Aggressively-priced buys cross every resting sell; the sell side must
    // end up fully drained regardless of how many buys still rest after.
    for i in 30_000..60_000u64 {
        let buy = make_limit_order(i, Side::Buy, 2000, 10);
        engine.submit(buy).unwrap();
    }

    assert!(get_book_state(&engine, Side::Sell).is_empty());
}
