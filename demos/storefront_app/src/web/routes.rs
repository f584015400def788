// demos/storefront_app/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{order_handlers, product_handlers};

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Paths mirror the storefront frontend's endpoint table, trailing slashes included.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api")
      .route("/health", web::get().to(health_check_handler))
      .route("/products/", web::get().to(product_handlers::list_products_handler))
      .route(
        "/products/{product_id}/",
        web::get().to(product_handlers::get_product_handler),
      )
      .route(
        "/order-summary/{order_id}/",
        web::get().to(order_handlers::order_summary_handler),
      )
      .service(
        web::resource("/order-items/{order_item_id}/")
          .route(web::put().to(order_handlers::replace_order_item_handler))
          .route(web::patch().to(order_handlers::patch_order_item_handler)),
      ),
  );
}
