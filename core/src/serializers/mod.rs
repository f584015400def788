// core/src/serializers/mod.rs

//! Entity ⇄ document shaping.
//!
//! Output functions (`*_to_document`) are pure projections of loaded
//! entities. Input functions (`*_from_document`) validate a submitted JSON
//! document into a shallow input record and never touch storage.

pub mod fields;
pub mod item;
pub mod order;
pub mod order_item;
pub mod relation;

pub use fields::{FieldReader, InputMode};
pub use item::{item_from_document, item_to_document, items_to_documents, ItemDocument, ItemInput, ShapeContext};
pub use order::{order_to_document, orders_to_documents, OrderDocument};
pub use order_item::{order_item_from_document, order_item_to_document, OrderItemDocument, OrderItemInput};
pub use relation::{related_from_raw, related_to_text};
