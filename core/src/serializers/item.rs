// core/src/serializers/item.rs

use super::fields::{FieldReader, InputMode};
use crate::error::{ShapeResult, ValidationErrors};
use crate::models::Item;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TITLE_MAX_LENGTH: usize = 100;
pub const SLUG_MAX_LENGTH: usize = 50;

/// Per-request settings that influence how documents are rendered.
#[derive(Debug, Clone, Default)]
pub struct ShapeContext {
  /// Base URL for stored assets, e.g. `http://127.0.0.1:8000/media/`.
  /// When absent, asset names are rendered as stored.
  pub media_url: Option<String>,
}

impl ShapeContext {
  pub fn with_media_url(media_url: impl Into<String>) -> Self {
    Self {
      media_url: Some(media_url.into()),
    }
  }

  pub fn asset_url(&self, name: &str) -> String {
    match self.media_url.as_deref() {
      Some(base) if !base.is_empty() && !name.is_empty() => {
        format!("{}/{}", base.trim_end_matches('/'), name.trim_start_matches('/'))
      }
      _ => name.to_string(),
    }
  }
}

/// Catalog item as exposed by the API. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDocument {
  pub id: i64,
  pub title: String,
  pub price: f64,
  pub discount_price: Option<f64>,
  pub category: String,
  pub label: String,
  pub slug: String,
  pub description: String,
  pub image: String,
}

/// Shapes `item` for output. Coded fields are rendered as their display text.
pub fn item_to_document(item: &Item, ctx: &ShapeContext) -> ShapeResult<ItemDocument> {
  Ok(ItemDocument {
    id: item.id,
    title: item.title.clone(),
    price: item.price,
    discount_price: item.discount_price,
    category: item.category_display()?.to_string(),
    label: item.label_display()?.to_string(),
    slug: item.slug.clone(),
    description: item.description.clone(),
    image: ctx.asset_url(&item.image),
  })
}

/// Shapes a list of items, stopping at the first data-integrity fault.
pub fn items_to_documents<'a, I>(items: I, ctx: &ShapeContext) -> ShapeResult<Vec<ItemDocument>>
where
  I: IntoIterator<Item = &'a Item>,
{
  items.into_iter().map(|item| item_to_document(item, ctx)).collect()
}

/// Writable item fields from a client document.
///
/// In [`InputMode::Full`] every field except `discount_price` is `Some`.
/// `discount_price` is `Some(None)` when the client sent an explicit null.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemInput {
  pub title: Option<String>,
  pub price: Option<f64>,
  pub discount_price: Option<Option<f64>>,
  pub slug: Option<String>,
  pub description: Option<String>,
  pub image: Option<String>,
}

impl ItemInput {
  /// Copies the submitted fields onto `item`, leaving the others as they were.
  pub fn apply_to(&self, item: &mut Item) {
    if let Some(title) = &self.title {
      item.title = title.clone();
    }
    if let Some(price) = self.price {
      item.price = price;
    }
    if let Some(discount_price) = self.discount_price {
      item.discount_price = discount_price;
    }
    if let Some(slug) = &self.slug {
      item.slug = slug.clone();
    }
    if let Some(description) = &self.description {
      item.description = description.clone();
    }
    if let Some(image) = &self.image {
      item.image = image.clone();
    }
  }
}

/// Validates a client-submitted item document.
///
/// `id`, `category` and `label` are output-only on this document and are ignored.
pub fn item_from_document(document: &Value, mode: InputMode) -> Result<ItemInput, ValidationErrors> {
  let mut reader = FieldReader::new(document, mode)?;
  let input = ItemInput {
    title: reader.string("title", Some(TITLE_MAX_LENGTH)),
    price: reader.number("price"),
    discount_price: reader.nullable_number("discount_price"),
    slug: reader.slug("slug", Some(SLUG_MAX_LENGTH)),
    description: reader.string("description", None),
    image: reader.string("image", None),
  };
  reader.finish(input)
}
