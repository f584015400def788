// demos/storefront_app/src/state.rs
use crate::config::AppConfig;
use crate::store::StorefrontStore;
use std::sync::Arc;
use storefront::ShapeContext;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn StorefrontStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Rendering settings for documents produced in this request.
  pub fn shape_context(&self) -> ShapeContext {
    ShapeContext {
      media_url: self.config.media_url.clone(),
    }
  }
}
