// core/src/models/item.rs

use crate::choices::{CATEGORY_CHOICES, LABEL_CHOICES};
use crate::error::ShapeResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A catalog item as persisted. `category` and `label` hold raw codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
  pub id: i64,
  pub title: String,
  pub price: f64,
  pub discount_price: Option<f64>,
  pub category: i32,
  pub label: i32,
  pub slug: String,
  pub description: String,
  pub image: String, // Stored asset name, relative to the media root
}

impl Item {
  pub fn category_display(&self) -> ShapeResult<&'static str> {
    CATEGORY_CHOICES.display(self.category)
  }

  pub fn label_display(&self) -> ShapeResult<&'static str> {
    LABEL_CHOICES.display(self.label)
  }
}

impl fmt::Display for Item {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.title)
  }
}
