// src/lib.rs

//! Storefront: document shaping for a web storefront API.
//!
//! Converts persisted catalog and order entities into the plain documents an
//! HTTP layer serializes, and validates documents submitted by clients:
//!  - Items render their coded `category` / `label` as display text.
//!  - Line items render their item as text only.
//!  - Orders nest every line item, in retrieval order.
//!  - Related values submitted by clients are accepted raw and must be
//!    resolved by the caller.

pub mod choices;
pub mod error;
pub mod models;
pub mod serializers;

// --- Re-exports for the Public API ---

pub use crate::choices::{ChoiceTable, CATEGORY_CHOICES, LABEL_CHOICES};
pub use crate::error::{ShapeError, ShapeResult, ValidationErrors};
pub use crate::models::{Item, Order, OrderItem};
pub use crate::serializers::{
  item_from_document, item_to_document, items_to_documents, order_item_from_document, order_item_to_document,
  order_to_document, orders_to_documents, related_from_raw, related_to_text, InputMode, ItemDocument, ItemInput,
  OrderDocument, OrderItemDocument, OrderItemInput, ShapeContext,
};
