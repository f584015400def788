// demos/storefront_app/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use storefront::{order_item_from_document, order_item_to_document, order_to_document, InputMode};

#[instrument(name = "handler::order_summary", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn order_summary_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let order_id = path.into_inner();

  let order = app_state.store.get_order(order_id).await?.ok_or_else(|| {
    warn!("Order with ID {} not found.", order_id);
    AppError::NotFound(format!("Order with ID {} not found.", order_id))
  })?;

  let document = order_to_document(&order);
  info!(
    "Order {} shaped with {} line items.",
    order_id,
    document.order_items.len()
  );
  Ok(HttpResponse::Ok().json(document))
}

pub async fn replace_order_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  update_order_item(app_state, path.into_inner(), body.into_inner(), InputMode::Full).await
}

pub async fn patch_order_item_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
  update_order_item(app_state, path.into_inner(), body.into_inner(), InputMode::Partial).await
}

#[instrument(name = "handler::update_order_item", skip(app_state, document))]
async fn update_order_item(
  app_state: web::Data<AppState>,
  order_item_id: i64,
  document: Value,
  mode: InputMode,
) -> Result<HttpResponse, AppError> {
  let input = order_item_from_document(&document, mode).map_err(|errors| {
    warn!(%errors, "Rejected order item document");
    AppError::Validation(errors)
  })?;

  // `input.item` is still the raw client value; the store resolves it.
  let line = app_state.store.update_order_item(order_item_id, input).await?;

  info!("Order item {} updated.", order_item_id);
  Ok(HttpResponse::Ok().json(order_item_to_document(&line)))
}
