// demos/storefront_app/src/errors.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use storefront::{ShapeError, ValidationErrors};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(#[from] ValidationErrors),

  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Shaping Error: {source}")]
  Shaping {
    #[from]
    source: ShapeError,
  },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Internal Server Error: {0}")]
  Internal(String),
}

// Lets handlers and the store use `?` on anyhow::Result
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    match err.downcast::<ValidationErrors>() {
      Ok(errors) => AppError::Validation(errors),
      Err(err) => AppError::Internal(err.to_string()),
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Validation(_) => StatusCode::BAD_REQUEST,
      AppError::Shaping {
        source: ShapeError::Validation(_),
      } => StatusCode::BAD_REQUEST,
      AppError::NotFound(_) => StatusCode::NOT_FOUND,
      AppError::Shaping { .. } | AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    let mut response = HttpResponse::build(self.status_code());
    match self {
      // Field map body, e.g. {"quantity": ["A valid integer is required."]}
      AppError::Validation(errors)
      | AppError::Shaping {
        source: ShapeError::Validation(errors),
      } => response.json(errors),
      AppError::NotFound(m) => response.json(json!({"detail": m})),
      AppError::Shaping { source } => {
        tracing::error!(shape_error_source = ?source, "Stored data could not be shaped");
        response.json(json!({"detail": "Stored data is inconsistent", "error": source.to_string()}))
      }
      AppError::Config(m) => response.json(json!({"detail": "Configuration issue", "error": m})),
      AppError::Internal(m) => response.json(json!({"detail": "An internal error occurred", "error": m})),
    }
  }
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
