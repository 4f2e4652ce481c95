/* src/core/src/resolver.rs */

use tracing::debug;

use crate::cache::NameCache;
use crate::config::ViewConfig;
use crate::errors::ConfigError;
use crate::mapping::TemplateMap;
use crate::pattern::PatternCache;

/// Separator for inline template overrides. A handler can return
/// "templateName+viewName" to pick a template explicitly for one view.
pub const TEMPLATE_SEPARATOR: char = '+';

/// Extract the content view name, dropping any inline template override.
pub fn view_name(raw: &str) -> &str {
  match raw.split_once(TEMPLATE_SEPARATOR) {
    Some((_, name)) => name,
    None => raw,
  }
}

/// Everything the compositor needs for one view: resource paths on both
/// sides of the decoration, the logical view name and the title key.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedView {
  /// Template resource path; `None` means no decoration.
  pub template_path: Option<String>,
  /// Content resource path.
  pub view_path: String,
  /// Logical view name, inline override stripped.
  pub view_name: String,
  /// Localization key for the view title.
  pub title_key: String,
}

/// Maps logical view identifiers to template names through a fallback
/// cascade: inline override, name cache, exact rule, pattern rule, default.
///
/// Owns its two caches; independent resolvers never share cache state.
pub struct TemplateResolver {
  prefix: String,
  suffix: String,
  default_template: Option<String>,
  use_patterns: bool,
  title_key_prefix: String,
  map: TemplateMap,
  names: NameCache,
  patterns: PatternCache,
}

impl TemplateResolver {
  /// Build a resolver from config. With `use_patterns` set, every map key
  /// is compiled here so a malformed pattern is fatal at startup.
  pub fn new(config: &ViewConfig) -> Result<Self, ConfigError> {
    let map = TemplateMap::new(config.template_map.clone(), config.use_patterns)?;
    Ok(Self {
      prefix: config.prefix.clone(),
      suffix: config.suffix.clone(),
      default_template: config.default_template.clone(),
      use_patterns: config.use_patterns,
      title_key_prefix: config.title_key_prefix.clone(),
      map,
      names: NameCache::new(config.cache_template_names),
      patterns: PatternCache::new(config.cache_patterns),
    })
  }

  /// Resolve the template name for a raw view identifier.
  ///
  /// Cascade, in order: inline override (never cached), name cache, exact
  /// rule, first matching pattern rule, configured default. Results from
  /// the rule lookups are cached; the override and the default are not.
  pub fn template_name(&self, raw: &str) -> Result<Option<String>, ConfigError> {
    if let Some((template, _)) = raw.split_once(TEMPLATE_SEPARATOR) {
      debug!(view = raw, template, "inline template override");
      return Ok(Some(template.to_string()));
    }
    if let Some(template) = self.names.get(raw) {
      return Ok(Some(template));
    }
    if let Some(template) = self.map.get(raw) {
      debug!(view = raw, template, "template rule exact match");
      self.names.put(raw, template);
      return Ok(Some(template.to_string()));
    }
    if self.use_patterns {
      for rule in self.map.rules() {
        if self.patterns.matches(&rule.key, raw)? {
          debug!(view = raw, pattern = %rule.key, template = %rule.template, "template rule pattern match");
          self.names.put(raw, &rule.template);
          return Ok(Some(rule.template.clone()));
        }
      }
    }
    debug!(view = raw, default = ?self.default_template, "no template rule matched");
    Ok(self.default_template.clone())
  }

  /// Build a resource path: prefix + name + suffix.
  pub fn resource_path(&self, name: &str) -> String {
    format!("{}{}{}", self.prefix, name, self.suffix)
  }

  /// Derive the localized title key: drop the inline override and any `?`
  /// suffix, turn path separators into dots, prepend the namespace prefix.
  /// "hotels/show?x=1" becomes "view.title.hotels.show".
  pub fn title_key(&self, raw: &str) -> String {
    let name = view_name(raw);
    let name = match name.find('?') {
      Some(index) => &name[..index],
      None => name,
    };
    format!("{}{}", self.title_key_prefix, name.replace('/', "."))
  }

  /// Bundle paths, name and title key for a raw identifier and an already
  /// decided template name (`None` = no decoration).
  pub fn materialize(&self, raw: &str, template: Option<&str>) -> ResolvedView {
    let name = view_name(raw);
    ResolvedView {
      template_path: template.map(|template| self.resource_path(template)),
      view_path: self.resource_path(name),
      view_name: name.to_string(),
      title_key: self.title_key(raw),
    }
  }

  /// Resolve a raw identifier end to end with the cascade.
  pub fn resolve(&self, raw: &str) -> Result<ResolvedView, ConfigError> {
    let template = self.template_name(raw)?;
    Ok(self.materialize(raw, template.as_deref()))
  }

  #[cfg(test)]
  pub(crate) fn cached(&self, view_name: &str) -> bool {
    self.names.contains(view_name)
  }
}
