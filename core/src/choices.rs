// core/src/choices.rs

//! Lookup tables for coded catalog fields.
//!
//! Items store small integer codes for their category and label. The API
//! never exposes those codes; it renders the display text resolved here.

use crate::error::{ShapeError, ShapeResult};

/// A fixed mapping from stored codes to human-readable text.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceTable {
  field: &'static str,
  entries: &'static [(i32, &'static str)],
}

impl ChoiceTable {
  pub const fn new(field: &'static str, entries: &'static [(i32, &'static str)]) -> Self {
    Self { field, entries }
  }

  /// Name of the entity field this table decodes.
  pub fn field(&self) -> &'static str {
    self.field
  }

  /// Resolves `code` to its display text.
  ///
  /// An unmapped code means the stored row is inconsistent with the table and
  /// is reported as [`ShapeError::UnknownChoice`].
  pub fn display(&self, code: i32) -> ShapeResult<&'static str> {
    self
      .entries
      .iter()
      .find(|(candidate, _)| *candidate == code)
      .map(|(_, text)| *text)
      .ok_or_else(|| {
        tracing::error!(field = self.field, code, "Stored code has no display text");
        ShapeError::UnknownChoice { field: self.field, code }
      })
  }

  pub fn contains(&self, code: i32) -> bool {
    self.entries.iter().any(|(candidate, _)| *candidate == code)
  }

  /// All codes in declaration order.
  pub fn codes(&self) -> impl Iterator<Item = i32> + '_ {
    self.entries.iter().map(|(code, _)| *code)
  }

  pub fn entries(&self) -> &'static [(i32, &'static str)] {
    self.entries
  }
}

pub const CATEGORY_CHOICES: ChoiceTable = ChoiceTable::new(
  "category",
  &[(1, "Kitchen"), (2, "Apparel"), (3, "Outdoor"), (4, "Electronics")],
);

pub const LABEL_CHOICES: ChoiceTable = ChoiceTable::new("label", &[(1, "Sale"), (2, "New"), (3, "Bestseller")]);
