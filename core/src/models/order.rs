// core/src/models/order.rs

use super::OrderItem;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
  pub id: i64,
  items: Vec<OrderItem>,
}

impl Order {
  /// `items` must be in the order the collaborator retrieved them; it is kept as given.
  pub fn new(id: i64, items: Vec<OrderItem>) -> Self {
    Self { id, items }
  }

  /// Every line item of the order, in retrieval order.
  pub fn items(&self) -> &[OrderItem] {
    &self.items
  }

  pub fn items_mut(&mut self) -> &mut Vec<OrderItem> {
    &mut self.items
  }
}
