use match_core::prelude::*;

/// Quickly generate a simple limit order for testing.
pub fn make_limit_order(id: OrderId, side: Side, price: Price, qty: Size) -> Order {
    Order::limit(side, id, price, qty)
}

/// Quickly generate an iceberg order for testing.
pub fn make_iceberg_order(id: OrderId, side: Side, price: Price, full: Size, peak: Size) -> Order {
    Order::iceberg(side, id, price, full, peak)
}

/// Quickly generate an aggress (fill-or-drop) order for testing.
pub fn make_aggress_order(id: OrderId, side: Side, price: Price, qty: Size) -> Order {
    Order::aggress(side, id, price, qty)
}

/// Quickly generate a market order for testing.
pub fn make_market_order(id: OrderId, side: Side, qty: Size) -> Order {
    Order::market(side, id, qty)
}

/// Snapshot of one side of the book, in priority order.
pub fn get_book_state(engine: &Engine, side: Side) -> Vec<(OrderId, Price, Size)> {
    engine
        .book()
        .iterate(side)
        .map(|o| (o.id, o.price, o.size))
        .collect()
}
