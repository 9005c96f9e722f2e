//! The order book: two price-time-priority containers plus an id index (§4.1).

use crate::error::BookError;
use crate::types::{BookKey, Order, OrderId, Serial, Side};
use std::collections::BTreeMap;

/// Two side-indexed ordered containers and the id index tying them together.
///
/// `buys` and `sells` are kept as plain `BTreeMap`s: §5 mandates a single
/// logical worker with no cross-thread sharing, so the lock-free/epoch-based
/// containers this domain sometimes reaches for buy nothing here. A
/// `BTreeMap` never invalidates an unrelated key's position on insert or
/// remove, which is exactly the "stable location handle" the id index needs
/// (§9) — it just stores the `BookKey` an order is filed under and re-queries
/// the side's map by that key, rather than holding a raw pointer or iterator.
#[derive(Default)]
pub struct Book {
    buys: BTreeMap<BookKey, Order>,
    sells: BTreeMap<BookKey, Order>,
    ids: std::collections::HashMap<OrderId, BookKey>,
    serial: Serial,
}

impl Book {
    pub fn new() -> Self {
        Book::default()
    }

    fn side_map(&self, side: Side) -> &BTreeMap<BookKey, Order> {
        match side {
            Side::Buy => &self.buys,
            Side::Sell => &self.sells,
        }
    }

    fn side_map_mut(&mut self, side: Side) -> &mut BTreeMap<BookKey, Order> {
        match side {
            Side::Buy => &mut self.buys,
            Side::Sell => &mut self.sells,
        }
    }

    /// Inserts `order`, assigning it the next serial and clearing its match scratch.
    ///
    /// Fails with `DuplicateOrderId` if `order.id` already resides in the id
    /// index; on failure neither side map nor the id index are touched.
    pub fn insert(&mut self, mut order: Order) -> Result<&Order, BookError> {
        if self.ids.contains_key(&order.id) {
            return Err(BookError::DuplicateOrderId(order.id));
        }

        let key = BookKey {
            side: order.side,
            price: order.price,
            serial: self.next_serial(),
        };
        order.match_slot = crate::types::UNMATCHED;
        let id = order.id;
        self.insert_with_key(key, order);
        Ok(self.side_map(key.side).get(&key).unwrap_or_else(|| {
            // Unreachable: we just inserted this id under this key.
            panic!("missing freshly inserted order {id}")
        }))
    }

    /// Removes the resting order with `id`.
    ///
    /// Fails with `UnknownOrderId` if absent; on failure nothing is touched.
    pub fn remove(&mut self, id: OrderId) -> Result<Order, BookError> {
        let key = self
            .ids
            .get(&id)
            .copied()
            .ok_or(BookError::UnknownOrderId(id))?;
        let order = self
            .side_map_mut(key.side)
            .remove(&key)
            .expect("id index points at a live entry");
        self.ids.remove(&id);
        Ok(order)
    }

    /// Peeks the top-of-book entry on `side`, if any.
    pub fn top(&self, side: Side) -> Option<&Order> {
        self.side_map(side).values().next()
    }

    /// Stable price-time-priority-ordered traversal of resting orders on `side`.
    pub fn iterate(&self, side: Side) -> impl Iterator<Item = &Order> {
        self.side_map(side).values()
    }

    /// Number of resting orders on `side`.
    pub fn len(&self, side: Side) -> usize {
        self.side_map(side).len()
    }

    /// True if no order with `id` is known to the book.
    pub fn is_unknown(&self, id: OrderId) -> bool {
        !self.ids.contains_key(&id)
    }

    pub(crate) fn key_of(&self, id: OrderId) -> Option<BookKey> {
        self.ids.get(&id).copied()
    }

    pub(crate) fn get_mut_by_key(&mut self, key: &BookKey) -> Option<&mut Order> {
        self.side_map_mut(key.side).get_mut(key)
    }

    pub(crate) fn first_key(&self, side: Side) -> Option<BookKey> {
        self.side_map(side).keys().next().copied()
    }

    pub(crate) fn remove_by_key(&mut self, key: &BookKey) -> Option<Order> {
        let removed = self.side_map_mut(key.side).remove(key);
        if removed.is_some() {
            self.ids.remove(&removed.as_ref().unwrap().id);
        }
        removed
    }

    pub(crate) fn next_serial(&mut self) -> Serial {
        self.serial += 1;
        self.serial
    }

    pub(crate) fn insert_with_key(&mut self, key: BookKey, order: Order) {
        self.ids.insert(order.id, key);
        self.side_map_mut(key.side).insert(key, order);
    }

    /// Mutable traversal used only by the matcher's finalisation pass (§4.3).
    pub(crate) fn iterate_mut(&mut self, side: Side) -> impl Iterator<Item = &mut Order> {
        self.side_map_mut(side).values_mut()
    }
}
