// core/src/serializers/relation.rs

//! Plain-text rendering of related entities.
//!
//! The two directions are deliberately separate functions. Output renders the
//! related entity through its `Display` text. Input does *not* look the related
//! row up: whatever scalar the client sent is handed back untouched, and it is
//! the caller's job to resolve and check it before use.

use serde_json::Value;
use std::fmt::Display;

/// Output direction: the related entity's text rendering.
pub fn related_to_text<T: Display + ?Sized>(related: &T) -> String {
  related.to_string()
}

/// Input direction: returns `value` unchanged, with no existence or type check.
pub fn related_from_raw(value: Value) -> Value {
  tracing::trace!(kind = super::fields::json_kind(&value), "Accepting related value without lookup");
  value
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  struct Named(&'static str);

  impl Display for Named {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      f.write_str(self.0)
    }
  }

  #[test]
  fn renders_display_text() {
    assert_eq!(related_to_text(&Named("Mug")), "Mug");
    assert_eq!(related_to_text("already text"), "already text");
  }

  #[test]
  fn passes_scalars_through() {
    for value in [json!("Mug"), json!(3), json!(null), json!(1.5), json!(false)] {
      assert_eq!(related_from_raw(value.clone()), value);
    }
  }
}
