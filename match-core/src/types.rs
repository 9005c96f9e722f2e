//! Domain types shared by the book, matcher and engine.

/// OrderId is the type used for order ids.
pub type OrderId = u64;

/// Price is the type used for prices, in minimum-price-increment units.
pub type Price = u64;

/// Size is the type used for order and trade quantities.
pub type Size = u64;

/// Serial is the monotonically increasing tiebreaker assigned on insertion.
pub type Serial = u64;

/// Side indicates the direction of an order.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub enum Side {
    /// Buy seeks liquidity at prices at or below its limit.
    Buy,
    /// Sell seeks liquidity at prices at or above its limit.
    Sell,
}

/// OrderKind distinguishes the four submission shapes the codec accepts.
///
/// The matching algorithm itself only cares about `add` (§3); `kind` is kept
/// on the order purely so the book can report it back unchanged and so tests
/// can assert on what was actually submitted.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum OrderKind {
    /// Day limit order.
    Limit,
    /// Iceberg order: publishes only `peak` of `full` at a time.
    Iceberg,
    /// Immediate-or-cancel (aggress): fills what it can, drops the rest.
    Aggress,
    /// Market order: matches at any price, drops any unfilled residual.
    Market,
}

/// Sentinel value of `Order::match_slot` meaning "not yet matched this call".
pub const UNMATCHED: usize = usize::MAX;

/// A single order, either freshly submitted (the *active* order) or resting in the book.
#[derive(Clone, Debug)]
pub struct Order {
    pub side: Side,
    pub id: OrderId,
    pub kind: OrderKind,
    /// Limit price, or the side's extreme sentinel for a market order.
    pub price: Price,
    /// Currently displayed quantity available for matching.
    pub size: Size,
    /// Remaining total quantity (visible + hidden reserve).
    pub full: Size,
    /// Maximum visible slice; equals `full` at submission for non-icebergs.
    pub peak: Size,
    /// Whether residual quantity after matching should rest in the book.
    pub add: bool,
    /// Scratch slot used only during one matcher call; see `matching.rs`.
    pub match_slot: usize,
}

impl Order {
    /// Builds a day limit order.
    pub fn limit(side: Side, id: OrderId, price: Price, size: Size) -> Self {
        Order {
            side,
            id,
            kind: OrderKind::Limit,
            price,
            size,
            full: size,
            peak: size,
            add: true,
            match_slot: UNMATCHED,
        }
    }

    /// Builds an iceberg order with hidden reserve `full - peak`.
    pub fn iceberg(side: Side, id: OrderId, price: Price, full: Size, peak: Size) -> Self {
        Order {
            side,
            id,
            kind: OrderKind::Iceberg,
            price,
            size: peak,
            full,
            peak,
            add: true,
            match_slot: UNMATCHED,
        }
    }

    /// Builds an aggress (immediate-or-cancel) order; never rests.
    pub fn aggress(side: Side, id: OrderId, price: Price, size: Size) -> Self {
        Order {
            side,
            id,
            kind: OrderKind::Aggress,
            price,
            size,
            full: size,
            peak: size,
            add: false,
            match_slot: UNMATCHED,
        }
    }

    /// Builds a market order; price is the side's extreme sentinel, never rests.
    pub fn market(side: Side, id: OrderId, size: Size) -> Self {
        let price = match side {
            Side::Buy => Price::MAX,
            Side::Sell => Price::MIN,
        };
        Order {
            side,
            id,
            kind: OrderKind::Market,
            price,
            size,
            full: size,
            peak: size,
            add: false,
            match_slot: UNMATCHED,
        }
    }

    /// True for icebergs: `peak < full` at submission or after a partial fill.
    #[inline]
    pub fn is_iceberg(&self) -> bool {
        self.kind == OrderKind::Iceberg
    }
}

/// `BookKey` orders resting entries within one side's container.
///
/// Buy keys sort by descending price then ascending serial; Sell keys sort by
/// ascending price then ascending serial. Keeping the comparator on the key
/// (rather than branching in every call site) is what lets a single
/// `BTreeMap` express both sides' ordering with no further indirection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookKey {
    pub side: Side,
    pub price: Price,
    pub serial: Serial,
}

impl PartialOrd for BookKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BookKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.side {
            Side::Buy => other
                .price
                .cmp(&self.price)
                .then_with(|| self.serial.cmp(&other.serial)),
            Side::Sell => self
                .price
                .cmp(&other.price)
                .then_with(|| self.serial.cmp(&other.serial)),
        }
    }
}

/// A single trade execution between a resting and an aggressing order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub buy_id: OrderId,
    pub sell_id: OrderId,
    pub price: Price,
    pub size: Size,
}
