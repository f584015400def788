// demos/storefront_app/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;
use storefront::{item_to_document, items_to_documents};

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let items = app_state.store.list_items().await?;
  let documents = items_to_documents(&items, &app_state.shape_context())?;

  info!("Shaped {} products.", documents.len());
  Ok(HttpResponse::Ok().json(documents))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();

  match app_state.store.get_item(product_id).await? {
    Some(item) => {
      let document = item_to_document(&item, &app_state.shape_context())?;
      info!("Product {} shaped successfully.", product_id);
      Ok(HttpResponse::Ok().json(document))
    }
    None => {
      warn!("Product with ID {} not found.", product_id);
      Err(AppError::NotFound(format!("Product with ID {} not found.", product_id)))
    }
  }
}
