//! The side-parameterised matching algorithm (§4.3).

use crate::book::Book;
use crate::types::{BookKey, Match, Order, Side, UNMATCHED};

/// Walks the opposite side of `book`, filling `active` at admissible prices
/// and appending coalesced trade records to `matches`.
///
/// `matches` must be empty on entry (the engine clears it at the top of every
/// `submit` call, per §5's "allocation" note). The implementation is
/// side-parameterised by branching once per iteration on `active.side`
/// rather than duplicating the loop body for Buy and Sell (§4.3 "side
/// parameterisation").
pub fn match_against(book: &mut Book, active: &mut Order, matches: &mut Vec<Match>) {
    let opposite = match active.side {
        Side::Buy => Side::Sell,
        Side::Sell => Side::Buy,
    };

    // Count of resting orders on `opposite` that currently carry a non-sentinel
    // match_slot, so the finalisation pass below can stop scanning early.
    let mut touched = 0usize;

    loop {
        if active.size == 0 {
            break;
        }
        let Some(key) = book.first_key(opposite) else {
            break;
        };
        let inadmissible = match active.side {
            Side::Buy => active.price < key.price,
            Side::Sell => active.price > key.price,
        };
        if inadmissible {
            break;
        }

        let mut renewal = None;
        {
            let top = book
                .get_mut_by_key(&key)
                .expect("first_key always resolves to a live entry");

            let fill = active.size.min(top.size);

            if top.match_slot == UNMATCHED {
                touched += 1;
                let idx = matches.len();
                matches.push(Match {
                    buy_id: if active.side == Side::Buy {
                        active.id
                    } else {
                        top.id
                    },
                    sell_id: if active.side == Side::Sell {
                        active.id
                    } else {
                        top.id
                    },
                    price: top.price,
                    size: 0,
                });
                top.match_slot = idx;
            }
            matches[top.match_slot].size += fill;

            // Iceberg-aware: size tracks the currently displayed slice.
            active.full -= fill;
            active.size = active.full.min(active.peak);

            top.size -= fill;
            top.full -= fill;

            if top.size == 0 {
                renewal = Some((top.full, top.peak, top.match_slot));
            }
        }

        if let Some((full, peak, match_slot)) = renewal {
            let mut emptied = book
                .remove_by_key(&key)
                .expect("just matched against this key");
            if full > 0 {
                // Iceberg has reserve left: re-insert with a fresh serial,
                // demoting it to the back of its price level, carrying the
                // match_slot forward so further hits keep coalescing.
                let new_key = BookKey {
                    side: opposite,
                    price: key.price,
                    serial: book.next_serial(),
                };
                emptied.full = full;
                emptied.size = full.min(peak);
                emptied.match_slot = match_slot;
                book.insert_with_key(new_key, emptied);
            } else {
                touched -= 1;
            }
        }
    }

    // Restore the unmatched sentinel on every order this call touched.
    if touched > 0 {
        let mut cleared = 0;
        for order in book.iterate_mut(opposite) {
            if order.match_slot != UNMATCHED {
                order.match_slot = UNMATCHED;
                cleared += 1;
                if cleared == touched {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Order;

    fn trades(book: &mut Book, mut active: Order) -> (Order, Vec<Match>) {
        let mut matches = Vec::new();
        match_against(book, &mut active, &mut matches);
        (active, matches)
    }

    #[test]
    fn crossing_at_exact_limit_matches() {
        let mut book = Book::new();
        book.insert(Order::limit(Side::Sell, 1, 1000, 50)).unwrap();
        let (active, matches) = trades(&mut book, Order::limit(Side::Buy, 2, 1000, 50));
        assert_eq!(active.size, 0);
        assert_eq!(matches, vec![Match { buy_id: 2, sell_id: 1, price: 1000, size: 50 }]);
    }

    #[test]
    fn no_cross_when_price_inadmissible() {
        let mut book = Book::new();
        book.insert(Order::limit(Side::Sell, 1, 1010, 50)).unwrap();
        let (active, matches) = trades(&mut book, Order::limit(Side::Buy, 2, 1000, 50));
        assert!(matches.is_empty());
        assert_eq!(active.size, 50);
    }

    #[test]
    fn partial_fill_leaves_resting_order_reduced() {
        let mut book = Book::new();
        book.insert(Order::limit(Side::Sell, 1, 1000, 100)).unwrap();
        let (active, matches) = trades(&mut book, Order::limit(Side::Buy, 2, 1000, 40));
        assert_eq!(active.size, 0);
        assert_eq!(matches[0].size, 40);
        assert_eq!(book.top(Side::Sell).unwrap().size, 60);
    }

    #[test]
    fn repeated_hits_on_same_resting_order_coalesce_into_one_trade() {
        // A single active order crossing two price levels, the deeper one being
        // the same iceberg instance renewing mid-call, must still produce one
        // trade record per distinct instance (§8 boundary behaviours).
        let mut book = Book::new();
        book.insert(Order::iceberg(Side::Sell, 1, 100, 100_000, 10_000))
            .unwrap();
        let (active, matches) = trades(&mut book, Order::limit(Side::Buy, 2, 100, 15_000));
        assert_eq!(active.size, 0);
        // 10_000 consumes the peak, renewal refreshes another 5_000 from the same
        // logical order (new instance) -> two separate trade records.
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].size, 10_000);
        assert_eq!(matches[1].size, 5_000);
    }

    #[test]
    fn iceberg_renewal_gets_fresh_serial() {
        let mut book = Book::new();
        book.insert(Order::iceberg(Side::Buy, 1, 100, 100_000, 10_000))
            .unwrap();
        book.insert(Order::iceberg(Side::Buy, 3, 100, 50_000, 20_000))
            .unwrap();
        trades(&mut book, Order::limit(Side::Sell, 2, 100, 10_000));
        // Order 1 renewed after the first hit; its serial is now greater than
        // order 3's, which has never renewed.
        let key1 = book.key_of(1).unwrap();
        let key3 = book.key_of(3).unwrap();
        assert!(key1.serial > key3.serial);
    }

    #[test]
    fn match_slot_is_cleared_on_all_touched_orders_after_the_call() {
        let mut book = Book::new();
        book.insert(Order::limit(Side::Sell, 1, 1000, 40)).unwrap();
        book.insert(Order::limit(Side::Sell, 2, 1000, 40)).unwrap();
        trades(&mut book, Order::limit(Side::Buy, 3, 1000, 50));
        for order in book.iterate(Side::Sell) {
            assert_eq!(order.match_slot, UNMATCHED);
        }
    }
}
