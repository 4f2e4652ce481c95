/* src/adapter/axum/src/lib.rs */

//! Axum glue for `mantle-view`. Handlers return a logical view identifier
//! and a model; this crate reads the layout parameter from the request
//! query and turns the engine output into an HTML response. Routing, body
//! parsing and data access stay with the application.

mod error;

use std::collections::HashMap;

use axum::extract::Query;
use axum::response::Html;
use mantle_view::{Model, ViewEngine};

/// Re-export the core for convenience
pub use mantle_view;

pub use error::AxumError;

/// Extension trait rendering an engine decision straight into an axum
/// response.
pub trait RenderHtml {
  fn render_html(
    &self,
    view: &str,
    params: &HashMap<String, String>,
    model: &Model,
  ) -> Result<Html<String>, AxumError>;
}

impl RenderHtml for ViewEngine {
  fn render_html(
    &self,
    view: &str,
    params: &HashMap<String, String>,
    model: &Model,
  ) -> Result<Html<String>, AxumError> {
    Ok(Html(self.render(view, params, model)?))
  }
}

/// Render a view using the request query as the parameter map. Typical
/// handler usage:
///
/// ```ignore
/// async fn show(State(engine): State<Arc<ViewEngine>>, query: Query<HashMap<String, String>>)
///   -> Result<Html<String>, AxumError> {
///   render_view(&engine, "hotels/show", query, &model)
/// }
/// ```
pub fn render_view(
  engine: &ViewEngine,
  view: &str,
  Query(params): Query<HashMap<String, String>>,
  model: &Model,
) -> Result<Html<String>, AxumError> {
  engine.render_html(view, &params, model)
}
