//! Item rows
//!
//! A bare item is `id,name,quantity,price`. The inventory file prefixes each
//! item with the owning store: `store,id,name,quantity,price`.

use super::{format_amount, parse_amount, parse_number, require_fields, RecordCodec};
use crate::types::{Item, ItemId, StoreError};

/// Codec for a bare item
pub struct ItemCodec;

impl ItemCodec {
    /// The four item sub-fields in persisted order
    pub(crate) fn fields(item: &Item) -> [String; 4] {
        [
            item.id.to_string(),
            item.name.clone(),
            item.quantity.to_string(),
            format_amount(item.price()),
        ]
    }
}

impl RecordCodec for ItemCodec {
    type Record = Item;

    const ENTITY: &'static str = "Item";

    fn encode(item: &Item) -> String {
        Self::fields(item).join(",")
    }

    fn decode(fields: &[&str]) -> Result<Item, StoreError> {
        require_fields(fields, 4, Self::ENTITY)?;

        let id: ItemId = parse_number(fields[0], Self::ENTITY, "id")?;
        let quantity: u32 = parse_number(fields[2], Self::ENTITY, "quantity")?;
        let price = parse_amount(fields[3], Self::ENTITY, "price")?;

        Item::new(id, fields[1], quantity, price)
    }
}

/// One line of the inventory file
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRow {
    /// Store that owns the item
    pub store_name: String,
    /// The catalog item
    pub item: Item,
}

/// Codec for the inventory file
pub struct InventoryCodec;

impl RecordCodec for InventoryCodec {
    type Record = InventoryRow;

    const ENTITY: &'static str = "Inventory";

    fn encode(row: &InventoryRow) -> String {
        format!("{},{}", row.store_name, ItemCodec::encode(&row.item))
    }

    fn decode(fields: &[&str]) -> Result<InventoryRow, StoreError> {
        require_fields(fields, 5, Self::ENTITY)?;

        Ok(InventoryRow {
            store_name: fields[0].to_string(),
            item: ItemCodec::decode(&fields[1..5])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    #[test]
    fn test_item_round_trip() {
        let item = Item::new(3, "Blue Pen", 40, Decimal::new(125, 2)).unwrap();
        let line = ItemCodec::encode(&item);

        assert_eq!(line, "3,Blue Pen,40,1.25");
        assert_eq!(ItemCodec::decode_line(&line).unwrap(), item);
    }

    #[test]
    fn test_inventory_round_trip() {
        let row = InventoryRow {
            store_name: "Bob's Shop".to_string(),
            item: Item::new(1, "Cup", 0, Decimal::new(3, 0)).unwrap(),
        };
        let line = InventoryCodec::encode(&row);

        assert_eq!(line, "Bob's Shop,1,Cup,0,3.00");
        assert_eq!(InventoryCodec::decode_line(&line).unwrap(), row);
    }

    #[test]
    fn test_inventory_ignores_extra_columns() {
        let row = InventoryCodec::decode_line("Shop,1,Cup,2,3.00,extra").unwrap();
        assert_eq!(row.item.quantity, 2);
    }

    #[rstest]
    #[case::too_few("1,Pen,2", StoreError::missing_fields("Item", 4, 3))]
    #[case::bad_quantity("1,Pen,two,1.00", StoreError::invalid_number("Item", "quantity", "two"))]
    #[case::negative_quantity("1,Pen,-2,1.00", StoreError::invalid_number("Item", "quantity", "-2"))]
    #[case::bad_price("1,Pen,2,cheap", StoreError::invalid_number("Item", "price", "cheap"))]
    #[case::negative_price("1,Pen,2,-1.00", StoreError::negative_amount("Item", "price", "-1.00"))]
    fn test_item_decode_errors(#[case] line: &str, #[case] expected: StoreError) {
        assert_eq!(ItemCodec::decode_line(line), Err(expected));
    }

    #[test]
    fn test_inventory_requires_store_column() {
        assert_eq!(
            InventoryCodec::decode_line("1,Pen,2,1.00"),
            Err(StoreError::missing_fields("Inventory", 5, 4))
        );
    }
}
