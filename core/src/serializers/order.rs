// core/src/serializers/order.rs

use super::order_item::{order_item_to_document, OrderItemDocument};
use crate::models::Order;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDocument {
  pub id: i64,
  pub order_items: Vec<OrderItemDocument>,
}

/// Shapes `order` with every line item nested, in retrieval order.
pub fn order_to_document(order: &Order) -> OrderDocument {
  let order_items: Vec<OrderItemDocument> = order.items().iter().map(order_item_to_document).collect();
  tracing::debug!(order_id = order.id, line_items = order_items.len(), "Shaped order");
  OrderDocument {
    id: order.id,
    order_items,
  }
}

pub fn orders_to_documents<'a, I>(orders: I) -> Vec<OrderDocument>
where
  I: IntoIterator<Item = &'a Order>,
{
  orders.into_iter().map(order_to_document).collect()
}
