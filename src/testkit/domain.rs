//! Builders for domain primitives used across tests.

use rust_decimal::Decimal;
use serde_json::{json, Map};

use crate::domain::Item;

/// Whole-number prices, one per value in `values`.
pub fn integer_prices<I: IntoIterator<Item = i64>>(values: I) -> Vec<Decimal> {
    values.into_iter().map(Decimal::from).collect()
}

/// `count` copies of the same price.
pub fn repeated_price(price: Decimal, count: usize) -> Vec<Decimal> {
    vec![price; count]
}

/// An item carrying an `id` and a `price`.
pub fn item(id: u64, price: Decimal) -> Item {
    let mut fields = Map::new();
    fields.insert("id".into(), json!(id));
    fields.insert("price".into(), json!(price.to_string()));
    Item::new(fields)
}

/// The `id` field of every item, in order. Items without one are skipped.
pub fn item_ids(items: &[Item]) -> Vec<u64> {
    items
        .iter()
        .filter_map(|item| item.get("id").and_then(serde_json::Value::as_u64))
        .collect()
}

/// The `price` field of an item built by [`item`].
pub fn item_price(item: &Item) -> Option<Decimal> {
    item.get("price")
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse().ok())
}
