// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every fixture

use once_cell::sync::Lazy;
use storefront::{Item, Order, OrderItem};
use tracing::Level;

// --- Fixtures ---
pub fn mug() -> Item {
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
  }
}

pub fn rain_jacket() -> Item {
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
  }
}

pub fn tent() -> Item {
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
  }
}

pub fn line(id: i64, item: Item, quantity: u32) -> OrderItem {
  OrderItem { id, item, quantity }
}

pub fn mixed_order() -> Order {
  Order::new(
    11,
    vec![line(30, tent(), 1), line(12, mug(), 4), line(21, rain_jacket(), 2)],
  )
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
