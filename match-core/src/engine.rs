//! One-shot dispatch from an input to book mutations and trades (§4.2).

use crate::book::Book;
use crate::error::BookError;
use crate::matching::match_against;
use crate::types::{Match, Order, OrderId};

/// Owns the book and the reusable trade output buffer for one instrument.
///
/// Per §5's allocation note, the trade buffer is an instance field cleared at
/// the top of every `submit` rather than allocated fresh each call.
#[derive(Default)]
pub struct Engine {
    book: Book,
    trades: Vec<Match>,
}

impl Engine {
    pub fn new() -> Self {
        Engine::default()
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Matches `order` against the opposite side, then — iff `order.add` and
    /// residual `full > 0` — inserts the residual into the book.
    ///
    /// The caller's order is not mutated; a copy is matched and, if it rests,
    /// owned by the book afterward. Fails with `DuplicateOrderId` and leaves
    /// the book untouched if `order.add` and `order.id` already rests —
    /// checked up front, before any matching happens, so a failed submission
    /// never partially matches (§4.5).
    pub fn submit(&mut self, order: Order) -> Result<&[Match], BookError> {
        if order.add && !self.book.is_unknown(order.id) {
            return Err(BookError::DuplicateOrderId(order.id));
        }

        self.trades.clear();
        let mut active = order;
        match_against(&mut self.book, &mut active, &mut self.trades);

        if active.add && active.full > 0 {
            self.book
                .insert(active)
                .expect("duplicate id was already ruled out above");
        }

        Ok(&self.trades)
    }

    /// Removes a resting order. Propagates `UnknownOrderId` unchanged.
    pub fn cancel(&mut self, id: OrderId) -> Result<(), BookError> {
        self.book.remove(id).map(|_| ())
    }
}
