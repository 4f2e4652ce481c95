/* src/core/src/compose.rs */

use serde_json::Value;
use tracing::debug;

use crate::config::ViewConfig;
use crate::errors::RenderError;
use crate::resolver::ResolvedView;

/// Attribute model handed to the rendering collaborator.
pub type Model = serde_json::Map<String, Value>;

/// The rendering collaborator: takes a resource path plus an attribute
/// model and produces output, or fails. Rendering ownership lives entirely
/// behind this trait; mantle-view only chooses paths and attributes.
pub trait Render {
  fn render(&self, resource: &str, model: &Model) -> Result<String, RenderError>;
}

/// Merges a decided view into its template and delegates rendering.
pub struct Compositor {
  view_url_attr: String,
  view_name_attr: String,
  title_attr: String,
}

impl Compositor {
  pub fn new(config: &ViewConfig) -> Self {
    Self {
      view_url_attr: config.view_url_attr.clone(),
      view_name_attr: config.view_name_attr.clone(),
      title_attr: config.title_attr.clone(),
    }
  }

  /// Render the view. Without a template the content resource renders with
  /// the untouched model. With one, the model is augmented with the three
  /// reserved attributes and the template resource renders instead; the
  /// template is expected to include the content resource at the slot named
  /// by the locator attribute. Render failures propagate unchanged.
  pub fn compose(
    &self,
    renderer: &dyn Render,
    resolved: &ResolvedView,
    model: &Model,
  ) -> Result<String, RenderError> {
    let Some(template_path) = &resolved.template_path else {
      debug!(view = %resolved.view_name, "rendering undecorated");
      return renderer.render(&resolved.view_path, model);
    };
    debug!(view = %resolved.view_name, template = %template_path, "rendering decorated");
    let mut augmented = model.clone();
    augmented.insert(self.view_url_attr.clone(), Value::String(resolved.view_path.clone()));
    augmented.insert(self.view_name_attr.clone(), Value::String(resolved.view_name.clone()));
    augmented.insert(self.title_attr.clone(), Value::String(resolved.title_key.clone()));
    renderer.render(template_path, &augmented)
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use serde_json::json;

  use super::*;

  /// Records render calls and echoes the resource path.
  struct RecordingRenderer {
    calls: Mutex<Vec<(String, Model)>>,
    fail: bool,
  }

  impl RecordingRenderer {
    fn new() -> Self {
      Self { calls: Mutex::new(Vec::new()), fail: false }
    }

    fn failing() -> Self {
      Self { calls: Mutex::new(Vec::new()), fail: true }
    }

    fn calls(&self) -> Vec<(String, Model)> {
      self.calls.lock().expect("lock").clone()
    }
  }

  impl Render for RecordingRenderer {
    fn render(&self, resource: &str, model: &Model) -> Result<String, RenderError> {
      if self.fail {
        return Err(RenderError::new(resource, "template missing"));
      }
      self.calls.lock().expect("lock").push((resource.to_string(), model.clone()));
      Ok(format!("rendered:{resource}"))
    }
  }

  fn compositor() -> Compositor {
    Compositor::new(&ViewConfig::new())
  }

  fn model() -> Model {
    let mut model = Model::new();
    model.insert("hotel".to_string(), json!({"name": "Grand"}));
    model
  }

  fn decorated() -> ResolvedView {
    ResolvedView {
      template_path: Some("views/common/standard.html".to_string()),
      view_path: "views/hotels/show.html".to_string(),
      view_name: "hotels/show".to_string(),
      title_key: "view.title.hotels.show".to_string(),
    }
  }

  #[test]
  fn undecorated_renders_content_with_unmodified_model() {
    let renderer = RecordingRenderer::new();
    let resolved = ResolvedView { template_path: None, ..decorated() };
    let output = compositor().compose(&renderer, &resolved, &model()).expect("should render");
    assert_eq!(output, "rendered:views/hotels/show.html");
    let calls = renderer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].1, model());
  }

  #[test]
  fn decorated_renders_template_with_reserved_attributes() {
    let renderer = RecordingRenderer::new();
    let output = compositor().compose(&renderer, &decorated(), &model()).expect("should render");
    assert_eq!(output, "rendered:views/common/standard.html");
    let calls = renderer.calls();
    let augmented = &calls[0].1;
    assert_eq!(augmented["viewUrl"], json!("views/hotels/show.html"));
    assert_eq!(augmented["viewName"], json!("hotels/show"));
    assert_eq!(augmented["title"], json!("view.title.hotels.show"));
    // Original attributes survive alongside the reserved ones
    assert_eq!(augmented["hotel"], json!({"name": "Grand"}));
  }

  #[test]
  fn custom_attribute_names() {
    let config = ViewConfig::new().attr_names("main", "page", "heading");
    let renderer = RecordingRenderer::new();
    Compositor::new(&config).compose(&renderer, &decorated(), &model()).expect("should render");
    let augmented = &renderer.calls()[0].1;
    assert_eq!(augmented["main"], json!("views/hotels/show.html"));
    assert_eq!(augmented["page"], json!("hotels/show"));
    assert_eq!(augmented["heading"], json!("view.title.hotels.show"));
    assert!(!augmented.contains_key("viewUrl"));
  }

  #[test]
  fn render_failure_propagates_unchanged() {
    let renderer = RecordingRenderer::failing();
    let err = compositor().compose(&renderer, &decorated(), &model()).expect_err("should fail");
    assert_eq!(err.resource, "views/common/standard.html");
    assert!(err.to_string().contains("template missing"));
  }
}
