// tests/input_validation_tests.rs
mod common;
use common::*;
use serde_json::json;
use storefront::{item_from_document, order_item_from_document, InputMode, ShapeError, ValidationErrors};

#[test]
fn test_order_item_accepts_raw_item_value() {
  setup_tracing();
  for raw in [json!("Mug"), json!(1), json!("no such item")] {
    let input = order_item_from_document(&json!({"item": raw.clone(), "quantity": 3}), InputMode::Full).unwrap();
    assert_eq!(input.item, Some(raw));
    assert_eq!(input.quantity, Some(3));
  }
}

#[test]
fn test_order_item_ignores_read_only_id() {
  setup_tracing();
  let input = order_item_from_document(&json!({"id": 500, "item": "Mug", "quantity": 1}), InputMode::Full).unwrap();
  assert_eq!(input.quantity, Some(1));
}

#[test]
fn test_order_item_full_mode_reports_every_missing_field() {
  setup_tracing();
  let errors = order_item_from_document(&json!({}), InputMode::Full).unwrap_err();
  assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["item", "quantity"]);
  assert_eq!(errors.field("item"), &["This field is required.".to_string()]);
}

#[test]
fn test_order_item_partial_mode_accepts_subset() {
  setup_tracing();
  let input = order_item_from_document(&json!({"quantity": "2"}), InputMode::Partial).unwrap();
  assert_eq!(input.item, None);
  assert_eq!(input.quantity, Some(2));

  assert!(order_item_from_document(&json!({}), InputMode::Partial).is_ok());
}

#[test]
fn test_order_item_quantity_type_and_bounds() {
  setup_tracing();
  let errors = order_item_from_document(&json!({"item": "Mug", "quantity": "many"}), InputMode::Full).unwrap_err();
  assert_eq!(errors.field("quantity"), &["A valid integer is required.".to_string()]);

  let errors = order_item_from_document(&json!({"item": "Mug", "quantity": -2}), InputMode::Full).unwrap_err();
  assert_eq!(
    errors.field("quantity"),
    &["Ensure this value is greater than or equal to 0.".to_string()]
  );

  let errors =
    order_item_from_document(&json!({"item": "Mug", "quantity": 5_000_000_000i64}), InputMode::Full).unwrap_err();
  assert_eq!(errors.field("quantity").len(), 1);
}

#[test]
fn test_order_item_null_item_is_rejected() {
  setup_tracing();
  let errors = order_item_from_document(&json!({"item": null, "quantity": 1}), InputMode::Full).unwrap_err();
  assert_eq!(errors.field("item"), &["This field may not be null.".to_string()]);
}

#[test]
fn test_non_object_document_is_rejected() {
  setup_tracing();
  let errors = order_item_from_document(&json!("Mug"), InputMode::Full).unwrap_err();
  assert_eq!(
    errors.non_field_errors(),
    &["Invalid data. Expected a dictionary, but got string.".to_string()]
  );
}

#[test]
fn test_item_full_document_validates_and_applies() {
  setup_tracing();
  let doc = json!({
    "id": 99,
    "title": "Travel Mug",
    "price": "12.50",
    "discount_price": 10,
    "category": "Kitchen",
    "label": "Sale",
    "slug": "travel-mug",
    "description": "Lid included",
    "image": "travel-mug.png"
  });
  let input = item_from_document(&doc, InputMode::Full).unwrap();
  assert_eq!(input.price, Some(12.5));
  assert_eq!(input.discount_price, Some(Some(10.0)));

  let mut item = mug();
  input.apply_to(&mut item);
  assert_eq!(item.id, 1);
  assert_eq!(item.title, "Travel Mug");
  assert_eq!(item.slug, "travel-mug");
  // Read-only coded fields are untouched
  assert_eq!(item.category, 1);
  assert_eq!(item.label, 2);
}

#[test]
fn test_item_partial_document_only_touches_sent_fields() {
  setup_tracing();
  let input = item_from_document(&json!({"discount_price": null}), InputMode::Partial).unwrap();
  let mut item = rain_jacket();
  input.apply_to(&mut item);
  assert_eq!(item.discount_price, None);
  assert_eq!(item.title, "Rain Jacket");
  assert_eq!(item.price, 79.0);
}

#[test]
fn test_item_collects_errors_for_all_fields() {
  setup_tracing();
  let doc = json!({
    "title": "x".repeat(101),
    "price": "cheap",
    "discount_price": [],
    "slug": "not a slug",
    "description": ""
  });
  let errors = item_from_document(&doc, InputMode::Full).unwrap_err();
  assert_eq!(
    errors.fields().collect::<Vec<_>>(),
    vec!["description", "discount_price", "image", "price", "slug", "title"]
  );
  assert_eq!(
    errors.field("title"),
    &["Ensure this field has no more than 100 characters.".to_string()]
  );
  assert_eq!(errors.field("description"), &["This field may not be blank.".to_string()]);
}

#[test]
fn test_validation_errors_convert_into_shape_error() {
  setup_tracing();
  let errors: ValidationErrors = order_item_from_document(&json!([]), InputMode::Full).unwrap_err();
  let err: ShapeError = errors.into();
  assert!(matches!(err, ShapeError::Validation(_)));
  assert!(err.to_string().starts_with("Document failed validation: non_field_errors:"));
}

#[test]
fn test_item_strings_are_trimmed_before_length_check() {
  setup_tracing();
  let input = item_from_document(&json!({"title": "  Mug  "}), InputMode::Partial).unwrap();
  assert_eq!(input.title.as_deref(), Some("Mug"));

  let padded = format!("  {}  ", "x".repeat(100));
  let input = item_from_document(&json!({"title": padded}), InputMode::Partial).unwrap();
  assert_eq!(input.title.map(|t| t.len()), Some(100));
}
