//! Order rows
//!
//! Written layout: `id,buyer,store,total,status,epochSeconds` followed by one
//! column per embedded item, each `id;name;quantity;price`.
//!
//! Two older producer layouts are still read:
//!
//! - the piped block: `id,buyer,store,total,status,block,epochMillis` where
//!   `block` is `id;name;qty;price|id;name;qty;price|...`
//! - id-less triples after the header: `...,epochSeconds,name,qty,price,...`,
//!   with ids assigned by position starting at 1
//!
//! A header that cannot be read yields a placeholder order instead of an error.

use super::item::ItemCodec;
use super::{format_amount, parse_amount, parse_number, RecordCodec};
use crate::io::timestamp_codec::{looks_numeric, TimestampFormat};
use crate::io::tokenizer::{join, split, Separator};
use crate::types::{Item, ItemId, Order, OrderId, OrderStatus, PlaceholderKind, StoreError};
use tracing::debug;

/// Number of fixed header columns
const HEADER_FIELDS: usize = 6;

/// Codec for the orders file
pub struct OrderCodec;

impl RecordCodec for OrderCodec {
    type Record = Order;

    const ENTITY: &'static str = "Order";

    fn encode(order: &Order) -> String {
        let mut fields = vec![
            order.id.to_string(),
            order.buyer.clone(),
            order.store.clone(),
            format_amount(order.total_amount()),
            order.status.as_str().to_string(),
            TimestampFormat::ORDER.encode_epoch(order.created_at),
        ];
        fields.extend(
            order
                .items()
                .iter()
                .map(|item| join(&ItemCodec::fields(item), Separator::SubField)),
        );
        join(&fields, Separator::Field)
    }

    /// Never fails: unreadable headers come back as placeholder orders
    fn decode(fields: &[&str]) -> Result<Order, StoreError> {
        if fields.len() < HEADER_FIELDS {
            debug!(found = fields.len(), "order row is missing header columns");
            return Ok(Order::placeholder(PlaceholderKind::MissingFields));
        }

        let header = match parse_header(fields) {
            Ok(header) => header,
            Err(error) => {
                debug!(%error, "order header could not be parsed");
                return Ok(Order::placeholder(PlaceholderKind::Unparseable));
            }
        };

        let (created_at, items) = if is_canonical(fields) {
            (
                TimestampFormat::ORDER.decode(fields[5]),
                decode_trailing_items(&fields[HEADER_FIELDS..]),
            )
        } else {
            let Some(millis) = fields.get(HEADER_FIELDS) else {
                debug!("legacy order row has no timestamp column");
                return Ok(Order::placeholder(PlaceholderKind::MissingFields));
            };
            (
                TimestampFormat::LEGACY_ORDER.decode(millis),
                decode_item_block(fields[5]),
            )
        };

        Ok(Order::from_parts(
            header.id,
            fields[1],
            fields[2],
            header.total,
            OrderStatus::from(fields[4]),
            created_at,
            items,
        ))
    }
}

struct Header {
    id: OrderId,
    total: rust_decimal::Decimal,
}

fn parse_header(fields: &[&str]) -> Result<Header, StoreError> {
    Ok(Header {
        id: parse_number(fields[0], OrderCodec::ENTITY, "id")?,
        total: parse_amount(fields[3], OrderCodec::ENTITY, "total")?,
    })
}

/// Column 6 holds a timestamp in the written layout and an item block in the
/// legacy one
fn is_canonical(fields: &[&str]) -> bool {
    let sixth = fields[5].trim();
    looks_numeric(sixth) || TimestampFormat::ORDER.decode(sixth).is_known()
}

/// Decode the columns after the header
///
/// A column containing `;` is a complete item (or a piped block of them).
/// Any other column starts a `name,qty,price` triple. An empty column is
/// skipped only when it cannot be the empty name of such a triple.
fn decode_trailing_items(tail: &[&str]) -> Vec<Item> {
    let mut items = Vec::new();
    let mut i = 0;

    while i < tail.len() {
        let column = tail[i];

        if column.is_empty() && !opens_triple(&tail[i..]) {
            i += 1;
        } else if column.contains(Separator::SubField.as_char()) {
            items.extend(decode_item_block(column));
            i += 1;
        } else {
            let Some(triple) = tail.get(i..i + 3) else {
                debug!(leftover = tail.len() - i, "dropping incomplete item triple");
                break;
            };
            let position = (items.len() + 1) as ItemId;
            match decode_triple(position, triple) {
                Ok(item) => items.push(item),
                Err(error) => debug!(%error, "dropping malformed item triple"),
            }
            i += 3;
        }
    }

    items
}

/// Whether `rest` begins with three columns whose last two are plain fields
fn opens_triple(rest: &[&str]) -> bool {
    rest.len() >= 3
        && rest[1..3]
            .iter()
            .all(|column| !column.contains(Separator::SubField.as_char()))
}

fn decode_triple(id: ItemId, triple: &[&str]) -> Result<Item, StoreError> {
    let quantity: u32 = parse_number(triple[1], ItemCodec::ENTITY, "quantity")?;
    let price = parse_amount(triple[2], ItemCodec::ENTITY, "price")?;
    Item::new(id, triple[0], quantity, price)
}

/// Split a `|`-separated block into items, dropping bad segments one by one
fn decode_item_block(block: &str) -> Vec<Item> {
    split(block, Separator::Segment)
        .into_iter()
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let sub_fields = split(segment, Separator::SubField);
            match ItemCodec::decode(&sub_fields) {
                Ok(item) => Some(item),
                Err(error) => {
                    debug!(%error, segment, "dropping malformed item segment");
                    None
                }
            }
        })
        .collect()
}
