//! Order types
//!
//! Orders reference their buyer and store by name only and carry value copies
//! of the purchased items. They are never linked to live user or inventory
//! objects.

use super::error::StoreError;
use super::item::Item;
use super::timestamp::Timestamp;
use rust_decimal::Decimal;
use std::fmt;

/// Order identifier
pub type OrderId = u32;

/// Buyer name carried by a placeholder for a row missing its fixed columns
pub const INVALID_BUYER: &str = "INVALID_BUYER";
/// Store name carried by a placeholder for a row missing its fixed columns
pub const INVALID_STORE: &str = "INVALID_STORE";
/// Buyer name carried by a placeholder for a row whose header failed to parse
pub const CRITICAL_ERROR_BUYER: &str = "CRITICAL_ERROR";
/// Store name carried by a placeholder for a row whose header failed to parse
pub const CRITICAL_ERROR_STORE: &str = "CRITICAL_ERROR_STORE";

/// Lifecycle state of an order
///
/// The vocabulary is open-ended: unrecognized text is kept verbatim in
/// `Other` so it is written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    /// Created, not yet settled
    Pending,
    /// Paid and fulfilled
    Done,
    /// Rejected for insufficient balance
    Canceled,
    /// Rejected for insufficient stock
    Incomplete,
    /// Any other status text
    Other(String),
}

impl OrderStatus {
    /// The literal persisted for this status
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Done => "DONE",
            OrderStatus::Canceled => "CANCELED",
            OrderStatus::Incomplete => "INCOMPLETE",
            OrderStatus::Other(text) => text,
        }
    }
}

impl From<&str> for OrderStatus {
    fn from(text: &str) -> Self {
        match text {
            "Pending" => OrderStatus::Pending,
            "DONE" => OrderStatus::Done,
            "CANCELED" => OrderStatus::Canceled,
            "INCOMPLETE" => OrderStatus::Incomplete,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a placeholder order was materialized instead of a decoded one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceholderKind {
    /// The row had fewer fixed columns than an order needs
    MissingFields,
    /// A fixed numeric column could not be parsed
    Unparseable,
}

/// A multi-item order
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    /// Order identifier
    pub id: OrderId,
    /// Buyer user name
    pub buyer: String,
    /// Seller store name
    pub store: String,
    /// Current status
    pub status: OrderStatus,
    /// Creation instant
    pub created_at: Timestamp,
    total: Decimal,
    items: Vec<Item>,
}

impl Order {
    /// Start a new pending order with no items, created now
    pub fn new(id: OrderId, buyer: impl Into<String>, store: impl Into<String>) -> Self {
        Order {
            id,
            buyer: buyer.into(),
            store: store.into(),
            status: OrderStatus::Pending,
            created_at: Timestamp::now(),
            total: Decimal::ZERO,
            items: Vec::new(),
        }
    }

    /// Rebuild an order from persisted columns
    ///
    /// The stored total is taken as-is; it is not recomputed from `items`.
    pub fn from_parts(
        id: OrderId,
        buyer: impl Into<String>,
        store: impl Into<String>,
        total: Decimal,
        status: OrderStatus,
        created_at: Timestamp,
        items: Vec<Item>,
    ) -> Self {
        Order {
            id,
            buyer: buyer.into(),
            store: store.into(),
            status,
            created_at,
            total,
            items,
        }
    }

    /// A tagged stand-in for a structurally invalid order row
    pub fn placeholder(kind: PlaceholderKind) -> Self {
        let (buyer, store) = match kind {
            PlaceholderKind::MissingFields => (INVALID_BUYER, INVALID_STORE),
            PlaceholderKind::Unparseable => (CRITICAL_ERROR_BUYER, CRITICAL_ERROR_STORE),
        };

        Order {
            id: 0,
            buyer: buyer.to_string(),
            store: store.to_string(),
            status: OrderStatus::Pending,
            created_at: Timestamp::UNKNOWN,
            total: Decimal::ZERO,
            items: Vec::new(),
        }
    }

    /// Which placeholder this order is, if any
    pub fn placeholder_kind(&self) -> Option<PlaceholderKind> {
        match (self.buyer.as_str(), self.store.as_str()) {
            (INVALID_BUYER, INVALID_STORE) => Some(PlaceholderKind::MissingFields),
            (CRITICAL_ERROR_BUYER, CRITICAL_ERROR_STORE) => Some(PlaceholderKind::Unparseable),
            _ => None,
        }
    }

    /// Whether this order stands in for an invalid row
    pub fn is_placeholder(&self) -> bool {
        self.placeholder_kind().is_some()
    }

    /// Append a value copy of `item` and add its line total to the order total
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the line total or the new order total does not
    /// fit in a `Decimal`. The order is left unchanged.
    pub fn add_item(&mut self, item: Item) -> Result<(), StoreError> {
        self.total = self
            .total
            .checked_add(item.line_total()?)
            .ok_or(StoreError::arithmetic_overflow("add_item", "Order", self.id))?;
        self.items.push(item);
        Ok(())
    }

    /// Override the order total
    pub fn set_total_amount(&mut self, total: Decimal) {
        self.total = total;
    }

    /// Move the order to `status`
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
    }

    /// Order total as recorded
    pub fn total_amount(&self) -> Decimal {
        self.total
    }

    /// Sum of quantity times price over the embedded items
    ///
    /// # Errors
    ///
    /// `ArithmeticOverflow` if the sum does not fit in a `Decimal`.
    pub fn items_total(&self) -> Result<Decimal, StoreError> {
        self.items.iter().try_fold(Decimal::ZERO, |sum, item| {
            sum.checked_add(item.line_total()?)
                .ok_or(StoreError::arithmetic_overflow("items_total", "Order", self.id))
        })
    }

    /// Embedded items in purchase order
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn pen() -> Item {
        Item::new(1, "Pen", 2, Decimal::new(150, 2)).unwrap()
    }

    fn cup() -> Item {
        Item::new(2, "Cup", 1, Decimal::new(300, 2)).unwrap()
    }

    #[test]
    fn test_add_item_accumulates_total() {
        let mut order = Order::new(10001, "Ann", "Ann's Shop");
        order.add_item(pen()).unwrap();
        order.add_item(cup()).unwrap();

        assert_eq!(order.total_amount(), Decimal::new(600, 2));
        assert_eq!(order.items_total(), Ok(order.total_amount()));
        assert_eq!(order.items().len(), 2);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_explicit_total_override() {
        let mut order = Order::new(10001, "Ann", "Ann's Shop");
        order.add_item(pen()).unwrap();
        order.set_total_amount(Decimal::new(250, 2));

        assert_eq!(order.total_amount(), Decimal::new(250, 2));
        assert_eq!(order.items_total(), Ok(Decimal::new(300, 2)));
    }

    #[test]
    fn test_add_item_overflow_leaves_order_unchanged() {
        let mut order = Order::new(42, "Ann", "Ann's Shop");
        order.set_total_amount(Decimal::MAX);

        let result = order.add_item(pen());
        assert_eq!(result, Err(StoreError::arithmetic_overflow("add_item", "Order", 42)));
        assert_eq!(order.total_amount(), Decimal::MAX);
        assert!(order.items().is_empty());
    }

    #[test]
    fn test_line_overflow_is_reported_by_add_item() {
        let mut order = Order::new(42, "Ann", "Ann's Shop");
        let huge = Item::new(3, "Yacht", u32::MAX, Decimal::MAX).unwrap();

        assert!(matches!(
            order.add_item(huge),
            Err(StoreError::ArithmeticOverflow { entity: "Item", .. })
        ));
        assert!(order.items().is_empty());
    }

    #[test]
    fn test_items_total_overflow() {
        let big = Item::new(1, "Gold", 1, Decimal::MAX).unwrap();
        let order = Order::from_parts(
            7,
            "Ann",
            "Shop",
            Decimal::ZERO,
            OrderStatus::Pending,
            Timestamp::UNKNOWN,
            vec![big.clone(), big],
        );

        assert_eq!(
            order.items_total(),
            Err(StoreError::arithmetic_overflow("items_total", "Order", 7))
        );
    }

    #[rstest]
    #[case::missing_fields(PlaceholderKind::MissingFields, INVALID_BUYER, INVALID_STORE)]
    #[case::unparseable(PlaceholderKind::Unparseable, CRITICAL_ERROR_BUYER, CRITICAL_ERROR_STORE)]
    fn test_placeholders_are_tagged(
        #[case] kind: PlaceholderKind,
        #[case] buyer: &str,
        #[case] store: &str,
    ) {
        let order = Order::placeholder(kind);
        assert_eq!(order.buyer, buyer);
        assert_eq!(order.store, store);
        assert!(order.items().is_empty());
        assert_eq!(order.placeholder_kind(), Some(kind));
    }

    #[test]
    fn test_regular_order_is_not_placeholder() {
        assert!(!Order::new(1, "Ann", "Shop").is_placeholder());
    }

    #[rstest]
    #[case("Pending", OrderStatus::Pending)]
    #[case("DONE", OrderStatus::Done)]
    #[case("CANCELED", OrderStatus::Canceled)]
    #[case("INCOMPLETE", OrderStatus::Incomplete)]
    #[case("Shipped", OrderStatus::Other("Shipped".to_string()))]
    #[case("done", OrderStatus::Other("done".to_string()))]
    fn test_status_literals(#[case] text: &str, #[case] expected: OrderStatus) {
        let status = OrderStatus::from(text);
        assert_eq!(status, expected);
        assert_eq!(status.as_str(), text);
    }
}
