/* src/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use mantle_view::ViewError;

/// Wraps a core error for use as an axum rejection. Both configuration
/// errors and collaborator render failures are server-side faults.
#[derive(Debug)]
pub struct AxumError(pub ViewError);

impl From<ViewError> for AxumError {
  fn from(err: ViewError) -> Self {
    Self(err)
  }
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
  }
}
