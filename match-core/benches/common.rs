use match_core::prelude::*;

/// Quickly generate a simple limit order for benchmarking.
pub fn make_limit_order(id: OrderId, side: Side, price: Price, qty: Size) -> Order {
    Order::limit(side, id, price, qty)
}

/// Quickly generate a market order for benchmarking.
pub fn make_market_order(id: OrderId, side: Side, qty: Size) -> Order {
    Order::market(side, id, qty)
}
