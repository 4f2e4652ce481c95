/* src/core/src/config.rs */

use std::path::Path;

use serde::Deserialize;

use crate::errors::ConfigError;

/// One ordered entry of the template map. `key` is an exact view name, or a
/// regex source when `use_patterns` is enabled. Declaration order matters:
/// the first matching rule wins.
#[derive(Debug, Clone, Deserialize)]
pub struct TemplateRule {
  pub key: String,
  pub template: String,
}

/// View decoration configuration.
///
/// Every field has a default, so a JSON config document only needs to state
/// what it changes. The reserved attribute names and the title-key prefix
/// are configurable so applications can keep whatever variable names their
/// template resources already use.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
  /// Resource path prefix, e.g. "views/".
  pub prefix: String,
  /// Resource path suffix, e.g. ".html".
  pub suffix: String,
  /// Fallback template when no rule matches. `None` means no decoration.
  pub default_template: Option<String>,
  /// Request parameter consulted for per-request cancel/override.
  pub layout_param: String,
  /// Sentinel parameter value that disables decoration for one request.
  pub cancel_value: String,
  /// Dynamic mode: the layout parameter value selects the template.
  pub dynamic_templates: bool,
  /// Memoize view name -> template name lookups.
  pub cache_template_names: bool,
  /// Treat template map keys as regex patterns.
  pub use_patterns: bool,
  /// Memoize compiled patterns by source string.
  pub cache_patterns: bool,
  /// Ordered view name -> template name rules.
  pub template_map: Vec<TemplateRule>,
  /// Reserved model attribute: resolved content resource path.
  pub view_url_attr: String,
  /// Reserved model attribute: logical view name.
  pub view_name_attr: String,
  /// Reserved model attribute: localized title lookup key.
  pub title_attr: String,
  /// Namespace prefix for title keys.
  pub title_key_prefix: String,
}

impl Default for ViewConfig {
  fn default() -> Self {
    Self {
      prefix: String::new(),
      suffix: String::new(),
      default_template: None,
      layout_param: "layout".to_string(),
      cancel_value: "none".to_string(),
      dynamic_templates: false,
      cache_template_names: true,
      use_patterns: false,
      cache_patterns: true,
      template_map: Vec::new(),
      view_url_attr: "viewUrl".to_string(),
      view_name_attr: "viewName".to_string(),
      title_attr: "title".to_string(),
      title_key_prefix: "view.title.".to_string(),
    }
  }
}

impl ViewConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Load configuration from a JSON document on disk.
  pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    Self::from_json_str(&content)
  }

  /// Parse configuration from a JSON string.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
    self.prefix = prefix.into();
    self
  }

  pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
    self.suffix = suffix.into();
    self
  }

  pub fn default_template(mut self, name: impl Into<String>) -> Self {
    self.default_template = Some(name.into());
    self
  }

  pub fn layout_param(mut self, name: impl Into<String>) -> Self {
    self.layout_param = name.into();
    self
  }

  pub fn cancel_value(mut self, value: impl Into<String>) -> Self {
    self.cancel_value = value.into();
    self
  }

  pub fn dynamic_templates(mut self, enabled: bool) -> Self {
    self.dynamic_templates = enabled;
    self
  }

  pub fn cache_template_names(mut self, enabled: bool) -> Self {
    self.cache_template_names = enabled;
    self
  }

  pub fn use_patterns(mut self, enabled: bool) -> Self {
    self.use_patterns = enabled;
    self
  }

  pub fn cache_patterns(mut self, enabled: bool) -> Self {
    self.cache_patterns = enabled;
    self
  }

  /// Append one template rule. Order of calls is the match order.
  pub fn rule(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
    self.template_map.push(TemplateRule { key: key.into(), template: template.into() });
    self
  }

  pub fn title_key_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.title_key_prefix = prefix.into();
    self
  }

  pub fn attr_names(
    mut self,
    view_url: impl Into<String>,
    view_name: impl Into<String>,
    title: impl Into<String>,
  ) -> Self {
    self.view_url_attr = view_url.into();
    self.view_name_attr = view_name.into();
    self.title_attr = title.into();
    self
  }
}
