// core/src/models/order_item.rs

use super::Item;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of an order. The referenced item is already loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
  pub id: i64,
  pub item: Item,
  pub quantity: u32,
}

impl fmt::Display for OrderItem {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} of {}", self.quantity, self.item.title)
  }
}
