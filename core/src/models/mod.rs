// core/src/models/mod.rs

//! Entities supplied by the catalog and order collaborators.
//! Shaping only reads these; nothing here talks to storage.

pub mod item;
pub mod order;
pub mod order_item;

pub use item::Item;
pub use order::Order;
pub use order_item::OrderItem;
