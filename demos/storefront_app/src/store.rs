// demos/storefront_app/src/store.rs

//! Stand-in for the catalog and order collaborators.
//!
//! The server only needs loaded entities to shape, so storage is an async
//! trait with an in-memory implementation seeded from fixtures.

use crate::errors::{AppError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;
use storefront::{Item, Order, OrderItem, OrderItemInput, ValidationErrors, CATEGORY_CHOICES, LABEL_CHOICES};
use tracing::{debug, warn};

#[async_trait]
pub trait StorefrontStore: Send + Sync {
  async fn list_items(&self) -> Result<Vec<Item>>;

  async fn get_item(&self, item_id: i64) -> Result<Option<Item>>;

  /// The order with all of its line items loaded, in stored order.
  async fn get_order(&self, order_id: i64) -> Result<Option<Order>>;

  /// Applies validated line-item input and returns the updated line.
  ///
  /// The submitted `item` value has not been checked by the shaping layer;
  /// the store resolves it here and rejects values that name no item.
  async fn update_order_item(&self, order_item_id: i64, input: OrderItemInput) -> Result<OrderItem>;
}

#[derive(Debug, Default)]
struct Tables {
  items: Vec<Item>,
  orders: Vec<Order>,
}

/// In-memory fixtures. Lock guards are never held across `.await`.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
  tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
  pub fn new(items: Vec<Item>, orders: Vec<Order>) -> Self {
    let store = Self {
      tables: Arc::new(RwLock::new(Tables { items, orders })),
    };
    let inconsistent = store.items_with_unknown_codes();
    if !inconsistent.is_empty() {
      warn!(item_ids = ?inconsistent, "Fixture items carry codes with no display text");
    }
    store
  }

  /// Ids of catalog items whose category or label code is missing from its table.
  /// Shaping those items fails with a data-integrity error.
  pub fn items_with_unknown_codes(&self) -> Vec<i64> {
    self
      .tables
      .read()
      .items
      .iter()
      .filter(|item| !CATEGORY_CHOICES.contains(item.category) || !LABEL_CHOICES.contains(item.label))
      .map(|item| item.id)
      .collect()
  }

  /// A small catalog with one open order.
  pub fn seeded() -> Self {
    let items = seed_items();
    let order = Order::new(
      1,
      vec![
        OrderItem {
          id: 1,
          item: items[0].clone(),
          quantity: 2,
        },
        OrderItem {
          id: 2,
          item: items[2].clone(),
          quantity: 1,
        },
      ],
    );
    Self::new(items, vec![order])
  }

  /// Resolves a raw client value to a catalog item: an integer id or an exact title.
  fn resolve_item(items: &[Item], raw: &Value) -> std::result::Result<Item, ValidationErrors> {
    let found = match raw {
      Value::Number(n) => n.as_i64().and_then(|id| items.iter().find(|item| item.id == id)),
      Value::String(s) => items
        .iter()
        .find(|item| item.title == *s)
        .or_else(|| s.parse::<i64>().ok().and_then(|id| items.iter().find(|item| item.id == id))),
      _ => None,
    };
    found.cloned().ok_or_else(|| {
      warn!(item = %raw, "Submitted item does not resolve to a catalog item");
      let mut errors = ValidationErrors::new();
      errors.add("item", format!("No catalog item matches {}.", raw));
      errors
    })
  }
}

#[async_trait]
impl StorefrontStore for InMemoryStore {
  async fn list_items(&self) -> Result<Vec<Item>> {
    Ok(self.tables.read().items.clone())
  }

  async fn get_item(&self, item_id: i64) -> Result<Option<Item>> {
    Ok(self.tables.read().items.iter().find(|item| item.id == item_id).cloned())
  }

  async fn get_order(&self, order_id: i64) -> Result<Option<Order>> {
    Ok(self.tables.read().orders.iter().find(|order| order.id == order_id).cloned())
  }

  async fn update_order_item(&self, order_item_id: i64, input: OrderItemInput) -> Result<OrderItem> {
    let mut tables = self.tables.write();
    let resolved = match &input.item {
      Some(raw) => Some(Self::resolve_item(&tables.items, raw)?),
      None => None,
    };

    let line = tables
      .orders
      .iter_mut()
      .flat_map(|order| order.items_mut().iter_mut())
      .find(|line| line.id == order_item_id)
      .ok_or_else(|| AppError::NotFound(format!("Order item {} not found.", order_item_id)))?;

    if let Some(item) = resolved {
      line.item = item;
    }
    if let Some(quantity) = input.quantity {
      line.quantity = quantity;
    }
    debug!(order_item_id, item_id = line.item.id, quantity = line.quantity, "Order item updated");
    Ok(line.clone())
  }
}

fn seed_items() -> Vec<Item> {
  vec![
    Item {
      id: 1,
      title: "Mug".to_string(),
      price: 9.99,
      discount_price: None,
      category: 1,
      label: 2,
      slug: "mug".to_string(),
      description: "A mug".to_string(),
      image: "mug.png".to_string(),
    },
    Item {
      id: 2,
      title: "Rain Jacket".to_string(),
      price: 79.0,
      discount_price: Some(59.5),
      category: 2,
      label: 1,
      slug: "rain-jacket".to_string(),
      description: "Keeps the weather out".to_string(),
      image: "items/rain-jacket.jpg".to_string(),
    },
    Item {
      id: 3,
      title: "Two-Person Tent".to_string(),
      price: 249.0,
      discount_price: None,
      category: 3,
      label: 3,
      slug: "two-person-tent".to_string(),
      description: "Sleeps two".to_string(),
      image: "items/tent.jpg".to_string(),
    },
  ]
}
