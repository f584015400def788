// tests/relation_property_tests.rs
mod common;
use common::*;
use proptest::prelude::*;
use serde_json::{json, Value};
use storefront::{related_from_raw, related_to_text};

fn scalar() -> impl Strategy<Value = Value> {
  prop_oneof![
    Just(Value::Null),
    any::<bool>().prop_map(Value::Bool),
    any::<i64>().prop_map(|n| json!(n)),
    any::<u64>().prop_map(|n| json!(n)),
    (-1.0e12f64..1.0e12f64).prop_map(|f| json!(f)),
    ".*".prop_map(Value::String),
  ]
}

proptest! {
  #[test]
  fn raw_input_is_returned_unchanged(value in scalar()) {
    prop_assert_eq!(related_from_raw(value.clone()), value);
  }

  #[test]
  fn item_text_is_its_title(title in "[A-Za-z0-9 ]{1,40}") {
    let mut item = mug();
    item.title = title.clone();
    prop_assert_eq!(related_to_text(&item), title);
  }
}

#[test]
fn test_nested_values_also_pass_through() {
  let value = json!({"id": 1, "title": "Mug"});
  assert_eq!(related_from_raw(value.clone()), value);
}
