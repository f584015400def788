// core/src/error.rs
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Key used for errors that belong to the document as a whole rather than one field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

#[derive(Debug, Error)]
pub enum ShapeError {
  /// A stored coded value has no display text. The data layer is assumed
  /// consistent, so this is a data-integrity fault and is never recovered here.
  #[error("No display text for code {code} in field '{field}'")]
  UnknownChoice { field: &'static str, code: i32 },

  #[error("Document failed validation: {0}")]
  Validation(#[from] ValidationErrors),
}

pub type ShapeResult<T, E = ShapeError> = std::result::Result<T, E>;

/// Per-field validation messages for a rejected input document.
///
/// Serializes to a flat JSON object, e.g.
/// `{"quantity": ["A valid integer is required."]}`, with document-level
/// problems reported under `non_field_errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
  fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
    self.fields.entry(field.into()).or_default().push(message.into());
  }

  pub fn add_non_field(&mut self, message: impl Into<String>) {
    self.add(NON_FIELD_ERRORS, message);
  }

  pub fn is_empty(&self) -> bool {
    self.fields.is_empty()
  }

  /// Messages recorded for `field`, empty if the field passed.
  pub fn field(&self, field: &str) -> &[String] {
    self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
  }

  pub fn non_field_errors(&self) -> &[String] {
    self.field(NON_FIELD_ERRORS)
  }

  pub fn fields(&self) -> impl Iterator<Item = &str> {
    self.fields.keys().map(String::as_str)
  }

  /// `Ok(value)` when nothing was recorded, otherwise the collected errors.
  pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
    if self.is_empty() {
      Ok(value)
    } else {
      Err(self)
    }
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (field, messages) in &self.fields {
      if !first {
        f.write_str("; ")?;
      }
      first = false;
      write!(f, "{}: {}", field, messages.join(" "))?;
    }
    Ok(())
  }
}

impl std::error::Error for ValidationErrors {}
