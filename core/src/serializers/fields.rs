// core/src/serializers/fields.rs

//! Readers for client-submitted documents.
//!
//! A [`FieldReader`] walks one JSON object, converting each declared field and
//! recording every failure, so a rejected document reports all of its problems
//! at once. Fields the reader is never asked about (read-only or unknown) are
//! ignored.

use crate::error::ValidationErrors;
use serde_json::{Map, Value};

pub(crate) const REQUIRED: &str = "This field is required.";
pub(crate) const NOT_NULL: &str = "This field may not be null.";
pub(crate) const NOT_BLANK: &str = "This field may not be blank.";
pub(crate) const INVALID_STRING: &str = "Not a valid string.";
pub(crate) const INVALID_NUMBER: &str = "A valid number is required.";
pub(crate) const INVALID_INTEGER: &str = "A valid integer is required.";
pub(crate) const INVALID_SLUG: &str =
  "Enter a valid \"slug\" consisting of letters, numbers, underscores or hyphens.";

/// Whether absent fields are an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
  /// Every required field must be present (create / PUT).
  #[default]
  Full,
  /// Absent fields are left untouched (PATCH).
  Partial,
}

pub struct FieldReader<'a> {
  object: &'a Map<String, Value>,
  mode: InputMode,
  errors: ValidationErrors,
}

impl<'a> FieldReader<'a> {
  /// Starts reading `document`, which must be a JSON object.
  pub fn new(document: &'a Value, mode: InputMode) -> Result<Self, ValidationErrors> {
    match document {
      Value::Object(object) => Ok(Self {
        object,
        mode,
        errors: ValidationErrors::new(),
      }),
      other => {
        let mut errors = ValidationErrors::new();
        errors.add_non_field(format!(
          "Invalid data. Expected a dictionary, but got {}.",
          json_kind(other)
        ));
        Err(errors)
      }
    }
  }

  /// Present, non-null value of `name`. Records "required" or "null" errors.
  fn present(&mut self, name: &str) -> Option<&'a Value> {
    match self.object.get(name) {
      None => {
        if self.mode == InputMode::Full {
          self.errors.add(name, REQUIRED);
        }
        None
      }
      Some(Value::Null) => {
        self.errors.add(name, NOT_NULL);
        None
      }
      Some(value) => Some(value),
    }
  }

  /// The value of `name` exactly as submitted, without any conversion.
  pub fn raw(&mut self, name: &str) -> Option<Value> {
    self.present(name).cloned()
  }

  /// A non-blank string with surrounding whitespace removed.
  /// Numbers are accepted and rendered as text.
  pub fn string(&mut self, name: &str, max_length: Option<usize>) -> Option<String> {
    let text = match self.present(name)? {
      Value::String(s) => s.trim().to_string(),
      Value::Number(n) => n.to_string(),
      _ => {
        self.errors.add(name, INVALID_STRING);
        return None;
      }
    };
    if text.is_empty() {
      self.errors.add(name, NOT_BLANK);
      return None;
    }
    if let Some(max) = max_length {
      if text.chars().count() > max {
        self
          .errors
          .add(name, format!("Ensure this field has no more than {} characters.", max));
        return None;
      }
    }
    Some(text)
  }

  /// A string made only of ASCII letters, digits, underscores and hyphens.
  pub fn slug(&mut self, name: &str, max_length: Option<usize>) -> Option<String> {
    let text = self.string(name, max_length)?;
    if text.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
      Some(text)
    } else {
      self.errors.add(name, INVALID_SLUG);
      None
    }
  }

  /// A finite number, or a string that parses as one.
  pub fn number(&mut self, name: &str) -> Option<f64> {
    let value = self.present(name)?;
    match number_from(value) {
      Some(n) => Some(n),
      None => {
        self.errors.add(name, INVALID_NUMBER);
        None
      }
    }
  }

  /// An optional, nullable number.
  ///
  /// `None` means the field was absent, `Some(None)` that it was explicitly null.
  pub fn nullable_number(&mut self, name: &str) -> Option<Option<f64>> {
    match self.object.get(name)? {
      Value::Null => Some(None),
      value => match number_from(value) {
        Some(n) => Some(Some(n)),
        None => {
          self.errors.add(name, INVALID_NUMBER);
          None
        }
      },
    }
  }

  /// A whole number, optionally bounded below.
  ///
  /// Integral floats (`2.0`) and digit strings (`"2"`) are accepted.
  pub fn integer(&mut self, name: &str, min_value: Option<i64>) -> Option<i64> {
    let value = self.present(name)?;
    let Some(n) = integer_from(value) else {
      self.errors.add(name, INVALID_INTEGER);
      return None;
    };
    if let Some(min) = min_value {
      if n < min {
        self
          .errors
          .add(name, format!("Ensure this value is greater than or equal to {}.", min));
        return None;
      }
    }
    Some(n)
  }

  /// Records a failure found by the caller after conversion.
  pub fn reject(&mut self, name: &str, message: impl Into<String>) {
    self.errors.add(name, message);
  }

  /// Finishes reading, yielding `value` only if no field failed.
  pub fn finish<T>(self, value: T) -> Result<T, ValidationErrors> {
    self.errors.into_result(value)
  }
}

fn number_from(value: &Value) -> Option<f64> {
  let n = match value {
    Value::Number(n) => n.as_f64()?,
    Value::String(s) => s.trim().parse::<f64>().ok()?,
    _ => return None,
  };
  n.is_finite().then_some(n)
}

fn integer_from(value: &Value) -> Option<i64> {
  match value {
    Value::Number(n) => n.as_i64().or_else(|| {
      let f = n.as_f64()?;
      (f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64).then_some(f as i64)
    }),
    Value::String(s) => {
      let s = s.trim();
      let whole = match s.split_once('.') {
        Some((whole, frac)) if frac.chars().all(|c| c == '0') => whole,
        Some(_) => return None,
        None => s,
      };
      whole.parse::<i64>().ok()
    }
    _ => None,
  }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "boolean",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "list",
    Value::Object(_) => "dictionary",
  }
}
