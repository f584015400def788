// core/src/serializers/order_item.rs

use super::fields::{FieldReader, InputMode};
use super::relation::{related_from_raw, related_to_text};
use crate::error::ValidationErrors;
use crate::models::OrderItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A line item as exposed by the API. `item` is always the item's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemDocument {
  pub id: i64,
  pub item: String,
  pub quantity: u32,
}

pub fn order_item_to_document(order_item: &OrderItem) -> OrderItemDocument {
  OrderItemDocument {
    id: order_item.id,
    item: related_to_text(&order_item.item),
    quantity: order_item.quantity,
  }
}

/// Writable line-item fields from a client document.
///
/// `item` is whatever the client sent: it has not been resolved to a catalog
/// item and may not refer to one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderItemInput {
  pub item: Option<Value>,
  pub quantity: Option<u32>,
}

/// Validates a client-submitted line-item document. `id` is ignored.
pub fn order_item_from_document(document: &Value, mode: InputMode) -> Result<OrderItemInput, ValidationErrors> {
  let mut reader = FieldReader::new(document, mode)?;
  let item = reader.raw("item").map(related_from_raw);
  let quantity = match reader.integer("quantity", Some(0)) {
    Some(n) => match u32::try_from(n) {
      Ok(quantity) => Some(quantity),
      Err(_) => {
        reader.reject(
          "quantity",
          format!("Ensure this value is less than or equal to {}.", u32::MAX),
        );
        None
      }
    },
    None => None,
  };
  reader.finish(OrderItemInput { item, quantity })
}
